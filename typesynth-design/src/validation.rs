//! Design validation utilities.
//!
//! The generator trusts its input; these checks run once when the design is loaded so that
//! malformed declarations are reported before any code is rendered.

use crate::design::Design;
use crate::error::DesignError;
use crate::types::NamedType;

/// Validates every named type of a design.
///
/// # Errors
/// Returns the first `DesignError` found, in type name order.
pub fn validate_design(design: &Design) -> Result<(), DesignError> {
    for named in design.types() {
        validate_named_type(named)?;
    }
    Ok(())
}

/// Validates a single named type declaration.
fn validate_named_type(named: &NamedType) -> Result<(), DesignError> {
    if named.name.trim().is_empty() {
        return Err(DesignError::EmptyName {
            kind: named.kind.label().to_string(),
        });
    }

    if named.versions.iter().any(|v| v.trim().is_empty()) {
        return Err(DesignError::EmptyVersion {
            type_name: named.name.clone(),
        });
    }

    validate_required(named)
}

/// Checks that declared required fields exist on the underlying object.
fn validate_required(named: &NamedType) -> Result<(), DesignError> {
    if named.required.is_empty() {
        return Ok(());
    }

    let Some(object) = named.data_type.as_object() else {
        return Err(DesignError::RequiredOnNonObject {
            type_name: named.name.clone(),
            kind: named.data_type.kind_name().to_string(),
        });
    };

    match named.required.iter().find(|name| !object.contains(name)) {
        Some(missing) => Err(DesignError::unknown_required(&named.name, missing)),
        None => Ok(()),
    }
}
