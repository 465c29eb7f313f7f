//! Go type names and type references.
//!
//! A type name is the Go spelling of a type. A type reference adds the pointer indirection
//! used when declaring variables or fields of that type: objects, anonymous or named, are
//! referenced through pointers while primitives, slices and maps are used by value.

use crate::error::CodegenError;
use crate::go::defs::go_type_def;
use crate::go::ident::goify;
use crate::go::native::go_primitive_type;
use crate::go::package::package_prefix;
use std::fmt;
use typesynth_design::{DataType, RequiredSet};

/// Required set used where the call site supplies none.
pub(crate) static NO_REQUIRED: RequiredSet = RequiredSet::new();

/// A Go type name together with its indirection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GoTypeRef {
    /// Type name, without pointer marker.
    pub name: String,
    /// Whether the reference goes through a pointer.
    pub indirect: bool,
}

impl GoTypeRef {
    /// Creates a by-value reference.
    #[must_use]
    pub fn direct(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            indirect: false,
        }
    }

    /// Creates a pointer reference.
    #[must_use]
    pub fn indirect(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            indirect: true,
        }
    }

    /// Creates a reference to `name`, indirect if `indirect` is set.
    #[must_use]
    pub fn with_indirection(name: impl Into<String>, indirect: bool) -> Self {
        Self {
            name: name.into(),
            indirect,
        }
    }
}

impl fmt::Display for GoTypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.indirect {
            f.write_str("*")?;
        }
        f.write_str(&self.name)
    }
}

/// Returns the Go type name of a data type.
///
/// `required` only matters for anonymous objects, which do not carry the required set of
/// the attribute that declares them. `tabs` is the indentation of the struct fields of such
/// objects. Types are assumed to live in the package of the code referencing them.
///
/// # Errors
/// Returns `CodegenError::IdentifierCollision` if an inline object has two fields mapping to
/// the same identifier.
pub fn go_type_name(
    data_type: &DataType,
    required: &RequiredSet,
    tabs: usize,
) -> Result<String, CodegenError> {
    go_package_type_name(data_type, required, false, "", tabs)
}

/// Returns the Go type name of a data type referenced from a possibly versioned package.
///
/// `versioned` tells whether the referencing package is a version package and
/// `default_package` names the package of the unversioned definitions. It must not be empty
/// when `versioned` is set (see [`package_prefix`]).
///
/// # Errors
/// Returns `CodegenError::IdentifierCollision` if an inline object has two fields mapping to
/// the same identifier.
pub fn go_package_type_name(
    data_type: &DataType,
    required: &RequiredSet,
    versioned: bool,
    default_package: &str,
    tabs: usize,
) -> Result<String, CodegenError> {
    match data_type {
        DataType::Primitive(p) => Ok(go_primitive_type(*p).to_string()),
        DataType::Array(elem) => {
            let elem_ref =
                go_package_type_ref(elem, &NO_REQUIRED, versioned, default_package, tabs + 1)?;
            Ok(format!("[]{elem_ref}"))
        }
        DataType::Map(map) => {
            let key_ref =
                go_package_type_ref(&map.key, &NO_REQUIRED, versioned, default_package, tabs + 1)?;
            let elem_ref =
                go_package_type_ref(&map.elem, &NO_REQUIRED, versioned, default_package, tabs + 1)?;
            Ok(format!("map[{key_ref}]{elem_ref}"))
        }
        DataType::Object(_) => {
            go_type_def(data_type, required, versioned, default_package, tabs, false)
        }
        DataType::Named(named) => Ok(format!(
            "{}{}",
            package_prefix(named, versioned, default_package),
            goify(&named.name, true)
        )),
    }
}

/// Resolves the reference to a data type: its name plus the indirection it is used with.
///
/// # Errors
/// Returns `CodegenError::IdentifierCollision` if an inline object has two fields mapping to
/// the same identifier.
pub fn resolve_type_ref(
    data_type: &DataType,
    required: &RequiredSet,
    versioned: bool,
    default_package: &str,
    tabs: usize,
) -> Result<GoTypeRef, CodegenError> {
    let name = go_package_type_name(data_type, required, versioned, default_package, tabs)?;
    Ok(GoTypeRef::with_indirection(name, data_type.is_object()))
}

/// Returns the Go code that refers to a data type, assuming the type lives in the package of
/// the referencing code.
///
/// # Errors
/// Returns `CodegenError::IdentifierCollision` if an inline object has two fields mapping to
/// the same identifier.
pub fn go_type_ref(
    data_type: &DataType,
    required: &RequiredSet,
    tabs: usize,
) -> Result<String, CodegenError> {
    go_package_type_ref(data_type, required, false, "", tabs)
}

/// Returns the Go code that refers to a data type from a possibly versioned package.
///
/// Same parameters as [`go_package_type_name`].
///
/// # Errors
/// Returns `CodegenError::IdentifierCollision` if an inline object has two fields mapping to
/// the same identifier.
pub fn go_package_type_ref(
    data_type: &DataType,
    required: &RequiredSet,
    versioned: bool,
    default_package: &str,
    tabs: usize,
) -> Result<String, CodegenError> {
    resolve_type_ref(data_type, required, versioned, default_package, tabs).map(|r| r.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use typesynth_design::{Attribute, NamedType, Object, Primitive};

    fn account() -> DataType {
        NamedType::user(
            "account",
            Object::new().field("id", Attribute::new(Primitive::Integer).required()),
        )
        .shared()
        .into()
    }

    #[test]
    fn test_type_ref_display() {
        assert_eq!(GoTypeRef::direct("int").to_string(), "int");
        assert_eq!(GoTypeRef::indirect("Account").to_string(), "*Account");
        assert!(GoTypeRef::with_indirection("Account", true).indirect);
    }

    #[test]
    fn test_primitive_names() {
        let name = go_type_name(&Primitive::DateTime.into(), &NO_REQUIRED, 0).expect("name");
        assert_eq!(name, "time.Time");
    }

    #[test]
    fn test_array_and_map_names() {
        let list = DataType::array(account());
        assert_eq!(go_type_name(&list, &NO_REQUIRED, 0).expect("list"), "[]*Account");

        let map = DataType::map(Primitive::String, DataType::array(Primitive::Integer));
        assert_eq!(
            go_type_name(&map, &NO_REQUIRED, 0).expect("map"),
            "map[string][]int"
        );
    }

    #[test]
    fn test_named_qualified() {
        let user = account();
        assert_eq!(
            go_package_type_name(&user, &NO_REQUIRED, true, "app", 0).expect("name"),
            "app.Account"
        );
        assert_eq!(
            go_package_type_ref(&user, &NO_REQUIRED, true, "app", 0).expect("ref"),
            "*app.Account"
        );
        assert_eq!(
            go_package_type_name(&DataType::array(user), &NO_REQUIRED, true, "app", 0)
                .expect("list"),
            "[]*app.Account"
        );
    }

    #[test]
    fn test_indirection_rule() {
        let object_ref = resolve_type_ref(&account(), &NO_REQUIRED, false, "", 0).expect("ref");
        assert!(object_ref.indirect);
        assert_eq!(object_ref.name, "Account");

        for data_type in [
            DataType::from(Primitive::Integer),
            DataType::array(Primitive::String),
            DataType::map(Primitive::String, Primitive::Any),
            NamedType::user("ids", DataType::array(Primitive::Integer))
                .shared()
                .into(),
        ] {
            let r = resolve_type_ref(&data_type, &NO_REQUIRED, false, "", 0).expect("ref");
            assert!(!r.indirect, "{} should be direct", r.name);
        }
    }

    #[test]
    fn test_inline_object_ref() {
        let inline: DataType = Object::new()
            .field("a", Primitive::String)
            .field("b", Primitive::Integer)
            .into();
        let required: RequiredSet = ["a".to_string()].into_iter().collect();
        let r = go_type_ref(&inline, &required, 0).expect("ref");
        assert_eq!(r, "*struct {\n\tA string\n\tB int\n}");
    }

    #[test]
    fn test_inline_object_in_array_is_indented() {
        let list = DataType::array(Object::new().field("a", Primitive::String));
        assert_eq!(
            go_type_name(&list, &NO_REQUIRED, 0).expect("list"),
            "[]*struct {\n\t\tA string\n\t}"
        );
    }
}
