//! Template mini-language
//!
//! A side-effect-free interpreter for the directive dialect used by the
//! guidance bodies:
//!
//! - `{{name}}` - substitute the stringified context value; missing
//!   names become empty strings
//! - `{{#each name}} ... {{this}} ... {{/each}}` - iterate a sequence,
//!   with `@last` true only on the final element
//! - `{{#if name}} ... {{/if}}` / `{{#unless name}} ... {{/unless}}` -
//!   conditional inclusion by truthiness
//!
//! Parsing and evaluation are separate passes over a typed AST, so each
//! is testable on its own.

pub mod ast;
mod eval;
pub(crate) mod parser;

pub use eval::evaluate;
pub use parser::{parse, scan_variables};

use crate::engine::context::PromptContext;
use crate::engine::error::EngineError;

/// Parse and evaluate a body in one step
pub fn render(body: &str, ctx: &PromptContext) -> Result<String, EngineError> {
    let nodes = parse(body)?;
    Ok(evaluate(&nodes, ctx))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_end_to_end() {
        let ctx = PromptContext::new("demo", "saas")
            .with_features(vec!["auth".to_string()])
            .with_flag("has_auth_feature", true);

        let out = render(
            "# {{project_name}}\nfeatures: {{#each detected_features}}{{this}}{{#unless @last}}, {{/unless}}{{/each}}\n{{#if has_auth_feature}}auth is on{{/if}}",
            &ctx,
        )
        .unwrap();

        assert!(out.contains("# demo"));
        assert!(out.contains("features: auth"));
        assert!(out.contains("auth is on"));
    }

    #[test]
    fn test_render_surfaces_structural_errors() {
        let ctx = PromptContext::new("demo", "saas");
        let err = render("{{#each detected_features}}unclosed", &ctx).unwrap_err();
        assert!(matches!(err, EngineError::Structural(_)));
    }
}
