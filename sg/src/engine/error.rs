//! Engine error taxonomy
//!
//! Everything here is caught at the facade boundary and converted into a
//! failed `RenderResult`; nothing escapes as a panic.

use promptstore::StoreError;
use thiserror::Error;

/// Errors from prompt generation
#[derive(Debug, Error)]
pub enum EngineError {
    /// The archetype has no registered template
    #[error("no template found for project type: {0}")]
    NotFound(String),

    /// Collaborator read failed; message propagated verbatim
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Unbalanced block directives detected at parse time
    #[error("template structure error: {0}")]
    Structural(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = EngineError::NotFound("gaming".to_string());
        assert_eq!(err.to_string(), "no template found for project type: gaming");
    }

    #[test]
    fn test_store_message_verbatim() {
        let err = EngineError::from(StoreError::NotFound("x/y.md".to_string()));
        assert_eq!(err.to_string(), "template body not found: x/y.md");
    }
}
