//! Error types for code generation.

use thiserror::Error;
use typesynth_design::DesignError;

/// Error type for code generation operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodegenError {
    /// Design error.
    #[error("design error: {0}")]
    Design(#[from] DesignError),

    /// Two fields of one object map to the same Go identifier.
    #[error("fields '{first}' and '{second}' both map to identifier '{identifier}'")]
    IdentifierCollision {
        /// First field name, in lexicographic order.
        first: String,
        /// Second field name.
        second: String,
        /// Identifier both names produce.
        identifier: String,
    },

    /// Two types declared in one package map to the same Go identifier.
    #[error("types '{first}' and '{second}' both map to identifier '{identifier}'")]
    TypeNameCollision {
        /// First type name, in lexicographic order.
        first: String,
        /// Second type name.
        second: String,
        /// Identifier both names produce.
        identifier: String,
    },

    /// Invalid render options.
    #[error("invalid render options: {message}")]
    Config {
        /// Error message.
        message: String,
    },
}

impl CodegenError {
    /// Creates a configuration error with the given message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collision_display() {
        let err = CodegenError::IdentifierCollision {
            first: "userName".to_string(),
            second: "user_name".to_string(),
            identifier: "UserName".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "fields 'userName' and 'user_name' both map to identifier 'UserName'"
        );
    }

    #[test]
    fn test_from_design_error() {
        let err: CodegenError = DesignError::duplicate("user type", "a").into();
        assert!(matches!(err, CodegenError::Design(_)));
    }
}
