//! Embedded template bodies
//!
//! These are compiled into the binary from the prompts/ directory and
//! serve as the last step of the resolution chain, so a fresh install
//! renders prompts without any files on disk.

use tracing::debug;

/// Generic fallback guidance
pub const BASE_MAIN: &str = include_str!("../prompts/base/main-prompt.md");

/// Primary bodies, one per archetype
pub const ECOMMERCE_MAIN: &str = include_str!("../prompts/ecommerce/main-prompt.md");
pub const SAAS_MAIN: &str = include_str!("../prompts/saas/main-prompt.md");
pub const BLOG_MAIN: &str = include_str!("../prompts/blog/main-prompt.md");
pub const PORTFOLIO_MAIN: &str = include_str!("../prompts/portfolio/main-prompt.md");
pub const DASHBOARD_MAIN: &str = include_str!("../prompts/dashboard/main-prompt.md");

/// Variant bodies
pub const ECOMMERCE_STARTER_WALKTHROUGH: &str = include_str!("../prompts/ecommerce/starter-walkthrough.md");
pub const ECOMMERCE_STOREFRONT_BUILD: &str = include_str!("../prompts/ecommerce/storefront-build.md");
pub const ECOMMERCE_PLATFORM_ARCHITECTURE: &str = include_str!("../prompts/ecommerce/platform-architecture.md");
pub const SAAS_PRODUCT_BUILD: &str = include_str!("../prompts/saas/product-build.md");
pub const SAAS_TENANCY_ARCHITECTURE: &str = include_str!("../prompts/saas/tenancy-architecture.md");
pub const BLOG_WRITING_PLATFORM: &str = include_str!("../prompts/blog/writing-platform.md");

/// Get an embedded body by its store-relative path
pub fn get_embedded(path: &str) -> Option<&'static str> {
    debug!(%path, "get_embedded: called");
    match path {
        "base/main-prompt.md" => Some(BASE_MAIN),
        "ecommerce/main-prompt.md" => Some(ECOMMERCE_MAIN),
        "saas/main-prompt.md" => Some(SAAS_MAIN),
        "blog/main-prompt.md" => Some(BLOG_MAIN),
        "portfolio/main-prompt.md" => Some(PORTFOLIO_MAIN),
        "dashboard/main-prompt.md" => Some(DASHBOARD_MAIN),
        "ecommerce/starter-walkthrough.md" => Some(ECOMMERCE_STARTER_WALKTHROUGH),
        "ecommerce/storefront-build.md" => Some(ECOMMERCE_STOREFRONT_BUILD),
        "ecommerce/platform-architecture.md" => Some(ECOMMERCE_PLATFORM_ARCHITECTURE),
        "saas/product-build.md" => Some(SAAS_PRODUCT_BUILD),
        "saas/tenancy-architecture.md" => Some(SAAS_TENANCY_ARCHITECTURE),
        "blog/writing-platform.md" => Some(BLOG_WRITING_PLATFORM),
        _ => {
            debug!(%path, "get_embedded: no match found");
            None
        }
    }
}

/// Store-relative paths of every embedded body, in catalog order
pub fn embedded_paths() -> &'static [&'static str] {
    &[
        "base/main-prompt.md",
        "ecommerce/main-prompt.md",
        "ecommerce/starter-walkthrough.md",
        "ecommerce/storefront-build.md",
        "ecommerce/platform-architecture.md",
        "saas/main-prompt.md",
        "saas/product-build.md",
        "saas/tenancy-architecture.md",
        "blog/main-prompt.md",
        "blog/writing-platform.md",
        "portfolio/main-prompt.md",
        "dashboard/main-prompt.md",
    ]
}
