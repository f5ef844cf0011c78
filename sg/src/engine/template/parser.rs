//! Template parser
//!
//! Two passes: a single left-to-right scan into a flat token stream,
//! then a stack-based pass matching block open/close tags into the tree.
//! Unbalanced block directives fail the parse; everything else (unknown
//! names, an unterminated `{{`) stays literal so rendering remains total.

use std::collections::BTreeSet;

use tracing::debug;

use super::ast::Node;
use crate::engine::error::EngineError;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

/// Flat token produced by the scan pass
#[derive(Debug, Clone, PartialEq)]
enum Token {
    Text(String),
    Variable(String),
    OpenEach(String),
    OpenIf(String),
    OpenUnless(String),
    CloseEach,
    CloseIf,
    CloseUnless,
}

/// Scan the input into a flat token stream
fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut rest = input;

    while let Some(start) = rest.find(OPEN) {
        let Some(end) = rest[start + OPEN.len()..].find(CLOSE) else {
            // Unterminated `{{`: keep the remainder as literal text
            break;
        };
        if start > 0 {
            tokens.push(Token::Text(rest[..start].to_string()));
        }

        let inner = rest[start + OPEN.len()..start + OPEN.len() + end].trim();
        tokens.push(classify(inner));
        rest = &rest[start + OPEN.len() + end + CLOSE.len()..];
    }

    if !rest.is_empty() {
        tokens.push(Token::Text(rest.to_string()));
    }
    tokens
}

/// Classify a tag's inner text
fn classify(inner: &str) -> Token {
    let mut parts = inner.splitn(2, char::is_whitespace);
    let head = parts.next().unwrap_or("");
    let arg = parts.next().unwrap_or("").trim();

    match head {
        "#each" => Token::OpenEach(arg.to_string()),
        "#if" => Token::OpenIf(arg.to_string()),
        "#unless" => Token::OpenUnless(arg.to_string()),
        "/each" => Token::CloseEach,
        "/if" => Token::CloseIf,
        "/unless" => Token::CloseUnless,
        _ => Token::Variable(inner.to_string()),
    }
}

/// Block kinds, for matching opens against closes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BlockKind {
    Each,
    If,
    Unless,
}

impl BlockKind {
    fn tag(&self) -> &'static str {
        match self {
            Self::Each => "each",
            Self::If => "if",
            Self::Unless => "unless",
        }
    }
}

/// Parse a template body into its AST
pub fn parse(input: &str) -> Result<Vec<Node>, EngineError> {
    let tokens = tokenize(input);
    debug!(token_count = tokens.len(), "parse: tokenized");

    // Each stack frame holds the open block and the parent's accumulated
    // children; `current` accumulates the innermost open body.
    let mut stack: Vec<(BlockKind, String, Vec<Node>)> = Vec::new();
    let mut current: Vec<Node> = Vec::new();

    for token in tokens {
        match token {
            Token::Text(text) => current.push(Node::Literal(text)),
            Token::Variable(name) => current.push(Node::Variable(name)),
            Token::OpenEach(name) => {
                stack.push((BlockKind::Each, name, std::mem::take(&mut current)));
            }
            Token::OpenIf(name) => {
                stack.push((BlockKind::If, name, std::mem::take(&mut current)));
            }
            Token::OpenUnless(name) => {
                stack.push((BlockKind::Unless, name, std::mem::take(&mut current)));
            }
            Token::CloseEach => close_block(BlockKind::Each, &mut stack, &mut current)?,
            Token::CloseIf => close_block(BlockKind::If, &mut stack, &mut current)?,
            Token::CloseUnless => close_block(BlockKind::Unless, &mut stack, &mut current)?,
        }
    }

    if let Some((kind, name, _)) = stack.last() {
        return Err(EngineError::Structural(format!(
            "unclosed {{{{#{} {}}}}} block",
            kind.tag(),
            name
        )));
    }

    Ok(current)
}

fn close_block(
    kind: BlockKind,
    stack: &mut Vec<(BlockKind, String, Vec<Node>)>,
    current: &mut Vec<Node>,
) -> Result<(), EngineError> {
    let Some((open_kind, name, parent)) = stack.pop() else {
        return Err(EngineError::Structural(format!(
            "unexpected {{{{/{}}}}} with no open block",
            kind.tag()
        )));
    };
    if open_kind != kind {
        return Err(EngineError::Structural(format!(
            "mismatched close: expected {{{{/{}}}}}, found {{{{/{}}}}}",
            open_kind.tag(),
            kind.tag()
        )));
    }

    let body = std::mem::replace(current, parent);
    let node = match open_kind {
        BlockKind::Each => Node::Each { name, body },
        BlockKind::If => Node::If { name, body },
        BlockKind::Unless => Node::Unless { name, body },
    };
    current.push(node);
    Ok(())
}

/// Collect the distinct variable names a body references
///
/// Includes substitution and block-open names; excludes the scope-bound
/// `this` and `@`-prefixed iteration specials. Used by the registry's
/// one-shot declared-variable scan; works on a flat token pass so it
/// succeeds even for bodies that would fail block matching.
pub fn scan_variables(input: &str) -> BTreeSet<String> {
    let mut names = BTreeSet::new();
    for token in tokenize(input) {
        let name = match token {
            Token::Variable(name) | Token::OpenEach(name) | Token::OpenIf(name) | Token::OpenUnless(name) => name,
            _ => continue,
        };
        if name.is_empty() || name == "this" || name.starts_with('@') {
            continue;
        }
        names.insert(name);
    }
    names
}
