//! Template evaluator
//!
//! Walks the parsed tree against a `PromptContext`. Iteration pushes a
//! scope binding `this` and `@last`; named lookups always resolve
//! against the context, never the enclosing `this` scope.

use tracing::debug;

use super::ast::Node;
use crate::engine::context::{ContextValue, PromptContext};

/// One level of iteration scope
struct Scope {
    this: String,
    last: bool,
}

/// Evaluate a parsed template against the context
pub fn evaluate(nodes: &[Node], ctx: &PromptContext) -> String {
    debug!(node_count = nodes.len(), "evaluate: called");
    let mut out = String::new();
    let mut scopes = Vec::new();
    eval_nodes(nodes, ctx, &mut scopes, &mut out);
    out
}

fn eval_nodes(nodes: &[Node], ctx: &PromptContext, scopes: &mut Vec<Scope>, out: &mut String) {
    for node in nodes {
        match node {
            Node::Literal(text) => out.push_str(text),
            Node::Variable(name) => {
                // Missing names substitute as empty, never error
                if let Some(value) = lookup(name, ctx, scopes) {
                    out.push_str(&value.stringify());
                }
            }
            Node::Each { name, body } => {
                // Non-sequence or missing values iterate zero times
                let Some(ContextValue::List(items)) = lookup(name, ctx, scopes) else {
                    continue;
                };
                let len = items.len();
                for (index, item) in items.into_iter().enumerate() {
                    scopes.push(Scope {
                        this: item,
                        last: index + 1 == len,
                    });
                    eval_nodes(body, ctx, scopes, out);
                    scopes.pop();
                }
            }
            Node::If { name, body } => {
                if is_truthy(name, ctx, scopes) {
                    eval_nodes(body, ctx, scopes, out);
                }
            }
            Node::Unless { name, body } => {
                if !is_truthy(name, ctx, scopes) {
                    eval_nodes(body, ctx, scopes, out);
                }
            }
        }
    }
}

/// Resolve a name to a value
///
/// `this` and `@last` bind to the innermost iteration scope; everything
/// else goes to the context.
fn lookup(name: &str, ctx: &PromptContext, scopes: &[Scope]) -> Option<ContextValue> {
    match name {
        "this" => scopes.last().map(|s| ContextValue::Str(s.this.clone())),
        "@last" => scopes.last().map(|s| ContextValue::Bool(s.last)),
        _ => ctx.get(name),
    }
}

fn is_truthy(name: &str, ctx: &PromptContext, scopes: &[Scope]) -> bool {
    lookup(name, ctx, scopes).map(|v| v.is_truthy()).unwrap_or(false)
}
