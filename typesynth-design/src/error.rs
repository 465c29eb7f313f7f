//! Error types for design registration and validation.

use thiserror::Error;

/// Error type for design operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DesignError {
    /// Duplicate definition.
    #[error("duplicate {kind} definition: '{name}'")]
    DuplicateDefinition {
        /// Kind of definition (user type, media type).
        kind: String,
        /// Name of the duplicate.
        name: String,
    },

    /// Named type declared without a name.
    #[error("{kind} declared with an empty name")]
    EmptyName {
        /// Kind of definition.
        kind: String,
    },

    /// Empty version identifier.
    #[error("type '{type_name}' lists an empty version identifier")]
    EmptyVersion {
        /// Type name.
        type_name: String,
    },

    /// Required field missing from the underlying object.
    #[error("type '{type_name}' requires unknown field '{field}'")]
    UnknownRequiredField {
        /// Type name.
        type_name: String,
        /// Field name.
        field: String,
    },

    /// Required set declared on a type that is not an object.
    #[error("type '{type_name}' declares required fields but is a {kind}")]
    RequiredOnNonObject {
        /// Type name.
        type_name: String,
        /// Kind of the underlying type.
        kind: String,
    },
}

impl DesignError {
    /// Creates a duplicate definition error.
    pub fn duplicate(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self::DuplicateDefinition {
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Creates an unknown required field error.
    pub fn unknown_required(type_name: impl Into<String>, field: impl Into<String>) -> Self {
        Self::UnknownRequiredField {
            type_name: type_name.into(),
            field: field.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duplicate_display() {
        let err = DesignError::duplicate("user type", "Account");
        assert_eq!(err.to_string(), "duplicate user type definition: 'Account'");
    }

    #[test]
    fn test_unknown_required_display() {
        let err = DesignError::unknown_required("Account", "owner");
        assert_eq!(
            err.to_string(),
            "type 'Account' requires unknown field 'owner'"
        );
    }
}
