//! Go type definitions.
//!
//! Renders the part of a type declaration that comes after `type Foo`. Objects become
//! struct literals whose fields are listed in lexicographic order, so regenerating the same
//! design always yields the same text.

use crate::error::CodegenError;
use crate::go::ident::goify;
use crate::go::names::{GoTypeRef, NO_REQUIRED, go_package_type_name};
use crate::go::write_tabs;
use std::collections::BTreeMap;
use typesynth_design::{Attribute, DataType, Object, RequiredSet};

/// Returns the Go code that defines a type matching `data_type`.
///
/// `required` names the fields of an object that must always be present, on top of the
/// fields flagged as required on their own attribute. `versioned` and `default_package`
/// qualify references to named types (see [`package_prefix`]). `tabs` is the indentation of
/// the definition, the first line is never indented. `json_tags` adds `json` and `xml`
/// struct tags to object fields.
///
/// Named types render as their (qualified) name: declaring a named type means rendering
/// its underlying type with [`NamedType::all_required`].
///
/// [`package_prefix`]: crate::go::package::package_prefix
/// [`NamedType::all_required`]: typesynth_design::NamedType::all_required
///
/// # Errors
/// Returns `CodegenError::IdentifierCollision` if two fields of an object map to the same
/// identifier. Nothing is rendered in that case.
pub fn go_type_def(
    data_type: &DataType,
    required: &RequiredSet,
    versioned: bool,
    default_package: &str,
    tabs: usize,
    json_tags: bool,
) -> Result<String, CodegenError> {
    match data_type {
        DataType::Primitive(_) | DataType::Named(_) => {
            go_package_type_name(data_type, required, versioned, default_package, tabs)
        }
        DataType::Array(elem) => {
            let elem_def = element_def(elem, versioned, default_package, tabs, json_tags)?;
            Ok(format!("[]{elem_def}"))
        }
        DataType::Map(map) => {
            let key_def = element_def(&map.key, versioned, default_package, tabs, json_tags)?;
            let elem_def = element_def(&map.elem, versioned, default_package, tabs, json_tags)?;
            Ok(format!("map[{key_def}]{elem_def}"))
        }
        DataType::Object(object) => {
            render_struct(object, required, versioned, default_package, tabs, json_tags)
        }
    }
}

/// Renders an array element or map key/element, through a pointer when it is an object.
fn element_def(
    elem: &DataType,
    versioned: bool,
    default_package: &str,
    tabs: usize,
    json_tags: bool,
) -> Result<GoTypeRef, CodegenError> {
    let def = go_type_def(elem, &NO_REQUIRED, versioned, default_package, tabs, json_tags)?;
    Ok(GoTypeRef::with_indirection(def, elem.is_object()))
}

fn render_struct(
    object: &Object,
    required: &RequiredSet,
    versioned: bool,
    default_package: &str,
    tabs: usize,
    json_tags: bool,
) -> Result<String, CodegenError> {
    let idents = field_identifiers(object)?;
    tracing::trace!(fields = object.len(), tabs, json_tags, "rendering struct");

    let mut buffer = String::from("struct {\n");
    for ((name, field), ident) in object.fields().zip(idents) {
        let def = go_type_def(
            &field.data_type,
            &NO_REQUIRED,
            versioned,
            default_package,
            tabs + 1,
            json_tags,
        )?;
        let field_type = GoTypeRef::with_indirection(def, is_pointer_field(field));

        if let Some(description) = field.description.as_deref() {
            for line in description.lines() {
                write_tabs(&mut buffer, tabs + 1);
                buffer.push_str(format!("// {line}").trim_end());
                buffer.push('\n');
            }
        }

        write_tabs(&mut buffer, tabs + 1);
        buffer.push_str(&format!("{ident} {field_type}"));
        if json_tags {
            let omit = if field.required || required.contains(name) {
                ""
            } else {
                ",omitempty"
            };
            buffer.push_str(&format!(" `json:\"{name}{omit}\" xml:\"{name}{omit}\"`"));
        }
        buffer.push('\n');
    }
    write_tabs(&mut buffer, tabs);
    buffer.push('}');

    Ok(buffer)
}

/// Object fields and forced-pointer primitives are generated as pointers.
fn is_pointer_field(field: &Attribute) -> bool {
    field.data_type.is_object() || field.is_primitive_pointer()
}

/// Computes the Go identifier of every field, in field order, rejecting collisions.
fn field_identifiers(object: &Object) -> Result<Vec<String>, CodegenError> {
    let mut seen: BTreeMap<String, &str> = BTreeMap::new();
    let mut idents = Vec::with_capacity(object.len());

    for (name, _) in object.fields() {
        let ident = goify(name, true);
        if let Some(first) = seen.insert(ident.clone(), name) {
            tracing::warn!(first, second = name, identifier = %ident, "field identifier collision");
            return Err(CodegenError::IdentifierCollision {
                first: first.to_string(),
                second: name.to_string(),
                identifier: ident,
            });
        }
        idents.push(ident);
    }

    Ok(idents)
}
