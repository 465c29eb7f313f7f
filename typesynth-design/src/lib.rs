//! # typesynth Design
//!
//! Immutable type tree model consumed by the typesynth code generator.
//!
//! This crate provides:
//! - The closed set of data type nodes (primitives, arrays, maps, objects, named types)
//! - Attribute definitions carrying descriptions, requiredness and pointer hints
//! - A registry of named user and media types
//! - Structural validation of that registry

pub mod design;
pub mod error;
pub mod types;
pub mod validation;

pub use design::Design;
pub use error::DesignError;
pub use types::{
    Attribute, DataType, MapType, NamedKind, NamedType, Object, Primitive, RequiredSet,
};
pub use validation::validate_design;
