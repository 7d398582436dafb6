use solgen_ir::{DeclarationKey, DeclarationKind};
use thiserror::Error;

/// Result type for document operations.
pub type Result<T> = std::result::Result<T, DocumentError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// Render was requested without a leading container.
    #[error("first declaration must be a container{}", describe_first(.first))]
    Structural {
        /// The declaration found first, `None` for an empty document.
        first: Option<DeclarationKey>,
    },

    /// A declaration of the same kind and name is already stored.
    #[error("{kind} '{name}' is already declared")]
    Duplicate { kind: DeclarationKind, name: String },
}

fn describe_first(first: &Option<DeclarationKey>) -> String {
    match first {
        Some(key) => format!(", found {}", key),
        None => ", document is empty".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_message() {
        let err = DocumentError::Structural {
            first: Some(DeclarationKey::new(DeclarationKind::Attribute, "attr1")),
        };
        assert_eq!(
            err.to_string(),
            "first declaration must be a container, found attribute 'attr1'"
        );

        let err = DocumentError::Structural { first: None };
        assert_eq!(
            err.to_string(),
            "first declaration must be a container, document is empty"
        );
    }

    #[test]
    fn test_duplicate_message() {
        let err = DocumentError::Duplicate {
            kind: DeclarationKind::Function,
            name: "transfer".into(),
        };
        assert_eq!(err.to_string(), "function 'transfer' is already declared");
    }
}
