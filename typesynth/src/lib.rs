//! # typesynth
//!
//! Deterministic Go type names and type definitions from an abstract type tree.
//!
//! Given an immutable description of a data shape (primitive, array, map, object or named
//! user/media type, possibly scoped to API versions) typesynth renders:
//!
//! - the Go code that *refers* to a value of that shape (`*Account`, `[]string`,
//!   `map[string]*app.Bottle`)
//! - the Go code that *defines* that shape (`struct { ... }` with sorted fields, pointer
//!   rules and `json`/`xml` tags)
//!
//! ## Quick Start
//!
//! ```
//! use typesynth::prelude::*;
//!
//! let object: DataType = Object::new()
//!     .field("id", Attribute::new(Primitive::Integer).required())
//!     .field("tags", DataType::array(Primitive::String))
//!     .into();
//!
//! let def = go_type_def(&object, &RequiredSet::new(), false, "", 0, true).unwrap();
//! assert!(def.starts_with("struct {\n\tID int"));
//! ```
//!
//! ## Crate Organization
//!
//! - [`design`] - Type tree model, design registry and validation
//! - [`codegen`] - Go identifier, type name, type reference and definition synthesis

pub mod prelude;

/// Type tree model and design registry.
pub mod design {
    pub use typesynth_design::*;
}

/// Go code synthesis.
pub mod codegen {
    pub use typesynth_codegen::*;
}

// Re-export commonly used items at the crate root
pub use typesynth_codegen::{CodegenError, RenderOptions, TempCounter, TypeGenerator};
pub use typesynth_design::{DataType, Design, DesignError, NamedType, Object};
