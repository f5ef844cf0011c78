//! PromptStore - layered template body storage
//!
//! Serves prompt template bodies to the scaffgen engine, addressed by
//! store-relative paths following the `<archetype>/<file>.md` convention.
//!
//! # Architecture
//!
//! ```text
//! read_body("ecommerce/main-prompt.md")
//!   ├── 1. user override   ~/.config/scaffgen/prompts/ecommerce/main-prompt.md
//!   ├── 2. repo default    ./prompts/ecommerce/main-prompt.md
//!   └── 3. embedded        compiled in via include_str!
//! ```
//!
//! # Example
//!
//! ```ignore
//! use promptstore::{FileStore, TemplateStore};
//!
//! let store = FileStore::new(None, Some("prompts".into()));
//! let body = store.read_body("saas/main-prompt.md")?;
//! ```

pub mod cli;
pub mod config;
pub mod embedded;
mod store;

pub use store::{FileStore, MemoryStore, StoreError, TemplateStore, list_dir_paths};

/// Conventional file name of an archetype's primary body
pub const PRIMARY_BODY: &str = "main-prompt.md";

/// Store-relative path of the generic fallback body
pub const BASE_BODY_PATH: &str = "base/main-prompt.md";
