//! Type tree definitions.
//!
//! This module contains the data structures describing the shapes the generator renders:
//! primitives, arrays, maps, objects and named (user or media) types. A tree is built once
//! and then only read; named types are shared through [`Arc`] so the same declaration can be
//! referenced from many places without being copied.

use serde_json::Value;
use std::collections::{BTreeMap, BTreeSet};
use std::sync::Arc;

/// Set of required field names.
///
/// Ordered so that anything derived from it iterates deterministically.
pub type RequiredSet = BTreeSet<String>;

/// Primitive kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Primitive {
    /// Boolean value.
    Boolean,
    /// Integer value.
    Integer,
    /// Floating point number.
    Number,
    /// UTF-8 string.
    String,
    /// RFC3339 timestamp.
    DateTime,
    /// Untyped value.
    Any,
}

impl Primitive {
    /// Returns the design name of the primitive.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::String => "string",
            Self::DateTime => "datetime",
            Self::Any => "any",
        }
    }

    /// Parses a primitive from its design name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "boolean" => Some(Self::Boolean),
            "integer" => Some(Self::Integer),
            "number" => Some(Self::Number),
            "string" => Some(Self::String),
            "datetime" | "date-time" => Some(Self::DateTime),
            "any" => Some(Self::Any),
            _ => None,
        }
    }
}

/// A node of the type tree.
#[derive(Debug, Clone, PartialEq)]
pub enum DataType {
    /// Primitive leaf.
    Primitive(Primitive),
    /// Ordered collection of a single element type.
    Array(Box<DataType>),
    /// Key to element association.
    Map(Box<MapType>),
    /// Anonymous object.
    Object(Object),
    /// Reference to a declared user or media type.
    Named(Arc<NamedType>),
}

impl DataType {
    /// Creates an array of `elem`.
    #[must_use]
    pub fn array(elem: impl Into<DataType>) -> Self {
        Self::Array(Box::new(elem.into()))
    }

    /// Creates a map from `key` to `elem`.
    #[must_use]
    pub fn map(key: impl Into<DataType>, elem: impl Into<DataType>) -> Self {
        Self::Map(Box::new(MapType {
            key: key.into(),
            elem: elem.into(),
        }))
    }

    /// Creates a reference to a shared named type.
    #[must_use]
    pub fn named(named: &Arc<NamedType>) -> Self {
        Self::Named(Arc::clone(named))
    }

    /// Returns true if values of this type are objects.
    ///
    /// Named types answer for their underlying type.
    #[must_use]
    pub fn is_object(&self) -> bool {
        match self {
            Self::Object(_) => true,
            Self::Named(named) => named.data_type.is_object(),
            _ => false,
        }
    }

    /// Returns true if values of this type are primitives.
    ///
    /// Named types answer for their underlying type.
    #[must_use]
    pub fn is_primitive(&self) -> bool {
        match self {
            Self::Primitive(_) => true,
            Self::Named(named) => named.data_type.is_primitive(),
            _ => false,
        }
    }

    /// Returns the object behind this type, looking through named types.
    #[must_use]
    pub fn as_object(&self) -> Option<&Object> {
        match self {
            Self::Object(object) => Some(object),
            Self::Named(named) => named.data_type.as_object(),
            _ => None,
        }
    }

    /// Returns a short human readable name for the node kind.
    #[must_use]
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Primitive(p) => p.name(),
            Self::Array(_) => "array",
            Self::Map(_) => "map",
            Self::Object(_) => "object",
            Self::Named(named) => named.kind.label(),
        }
    }
}

impl From<Primitive> for DataType {
    fn from(primitive: Primitive) -> Self {
        Self::Primitive(primitive)
    }
}

impl From<Object> for DataType {
    fn from(object: Object) -> Self {
        Self::Object(object)
    }
}

impl From<Arc<NamedType>> for DataType {
    fn from(named: Arc<NamedType>) -> Self {
        Self::Named(named)
    }
}

/// Key and element types of a map.
#[derive(Debug, Clone, PartialEq)]
pub struct MapType {
    /// Key type.
    pub key: DataType,
    /// Element type.
    pub elem: DataType,
}

/// Anonymous object: a set of uniquely named fields.
///
/// Fields are kept sorted by name, which is the order generated code lists them in.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Object {
    fields: BTreeMap<String, Attribute>,
}

impl Object {
    /// Creates an empty object.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a field, replacing any previous field of the same name.
    #[must_use]
    pub fn field(mut self, name: impl Into<String>, attribute: impl Into<Attribute>) -> Self {
        self.insert(name, attribute);
        self
    }

    /// Inserts a field, returning the attribute it replaced.
    pub fn insert(
        &mut self,
        name: impl Into<String>,
        attribute: impl Into<Attribute>,
    ) -> Option<Attribute> {
        self.fields.insert(name.into(), attribute.into())
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Attribute> {
        self.fields.get(name)
    }

    /// Returns true if the object has a field with the given name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.fields.contains_key(name)
    }

    /// Iterates over the fields in lexicographic name order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &Attribute)> {
        self.fields.iter().map(|(name, att)| (name.as_str(), att))
    }

    /// Returns the names of the fields flagged as required.
    #[must_use]
    pub fn required_names(&self) -> RequiredSet {
        self.fields
            .iter()
            .filter(|(_, att)| att.required)
            .map(|(name, _)| name.clone())
            .collect()
    }

    /// Returns the number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the object has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// A field of an object.
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    /// Field type.
    pub data_type: DataType,
    /// Field description, emitted as a comment.
    pub description: Option<String>,
    /// Whether the field must always be present.
    pub required: bool,
    /// Whether a primitive field is generated as a pointer.
    pub forced_pointer: bool,
    /// Default value.
    pub default_value: Option<Value>,
}

impl Attribute {
    /// Creates an optional attribute of the given type.
    #[must_use]
    pub fn new(data_type: impl Into<DataType>) -> Self {
        Self {
            data_type: data_type.into(),
            description: None,
            required: false,
            forced_pointer: false,
            default_value: None,
        }
    }

    /// Marks the attribute as required.
    #[must_use]
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Forces pointer indirection on a primitive field.
    #[must_use]
    pub fn forced_pointer(mut self) -> Self {
        self.forced_pointer = true;
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Sets the default value.
    #[must_use]
    pub fn with_default(mut self, value: Value) -> Self {
        self.default_value = Some(value);
        self
    }

    /// Returns true if the field is generated as a pointer to a primitive.
    #[must_use]
    pub fn is_primitive_pointer(&self) -> bool {
        self.forced_pointer && self.data_type.is_primitive()
    }
}

impl From<DataType> for Attribute {
    fn from(data_type: DataType) -> Self {
        Self::new(data_type)
    }
}

impl From<Primitive> for Attribute {
    fn from(primitive: Primitive) -> Self {
        Self::new(primitive)
    }
}

impl From<Object> for Attribute {
    fn from(object: Object) -> Self {
        Self::new(object)
    }
}

/// Flavor of a named type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NamedKind {
    /// Plain user type.
    User,
    /// Media type, identified by its media type identifier.
    Media {
        /// Identifier, e.g. `application/vnd.account+json`.
        identifier: String,
    },
}

impl NamedKind {
    /// Returns a label used in messages.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::User => "user type",
            Self::Media { .. } => "media type",
        }
    }
}

/// A declared user or media type.
#[derive(Debug, Clone, PartialEq)]
pub struct NamedType {
    /// Type name as written in the design.
    pub name: String,
    /// User or media type.
    pub kind: NamedKind,
    /// Underlying shape.
    pub data_type: DataType,
    /// API versions the type is declared under. Empty for the default version.
    pub versions: BTreeSet<String>,
    /// Required field names declared on the type.
    pub required: RequiredSet,
    /// Type description.
    pub description: Option<String>,
}

impl NamedType {
    /// Creates a user type.
    #[must_use]
    pub fn user(name: impl Into<String>, data_type: impl Into<DataType>) -> Self {
        Self {
            name: name.into(),
            kind: NamedKind::User,
            data_type: data_type.into(),
            versions: BTreeSet::new(),
            required: RequiredSet::new(),
            description: None,
        }
    }

    /// Creates a media type.
    #[must_use]
    pub fn media(
        name: impl Into<String>,
        identifier: impl Into<String>,
        data_type: impl Into<DataType>,
    ) -> Self {
        Self {
            kind: NamedKind::Media {
                identifier: identifier.into(),
            },
            ..Self::user(name, data_type)
        }
    }

    /// Declares the type under the given API versions.
    #[must_use]
    pub fn with_versions<I, S>(mut self, versions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.versions.extend(versions.into_iter().map(Into::into));
        self
    }

    /// Declares required fields.
    #[must_use]
    pub fn with_required<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.required.extend(names.into_iter().map(Into::into));
        self
    }

    /// Sets the description.
    #[must_use]
    pub fn describe(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Wraps the type for sharing across the tree.
    #[must_use]
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }

    /// Returns true if the type belongs to at least one API version.
    #[must_use]
    pub fn is_versioned(&self) -> bool {
        !self.versions.is_empty()
    }

    /// Returns every required field name: the declared set plus the fields of the
    /// underlying object flagged as required.
    #[must_use]
    pub fn all_required(&self) -> RequiredSet {
        let mut all = self.required.clone();
        if let Some(object) = self.data_type.as_object() {
            all.extend(object.required_names());
        }
        all
    }
}
