//! Prelude module for convenient imports.
//!
//! This module re-exports the most commonly used types and functions.
//!
//! ```
//! use typesynth::prelude::*;
//! ```

// Design types
pub use typesynth_design::{
    Attribute, DataType, Design, DesignError, MapType, NamedKind, NamedType, Object, Primitive,
    RequiredSet, validate_design,
};

// Codegen
pub use typesynth_codegen::{
    CodegenError, GoTypeRef, RenderOptions, TempCounter, TypeGenerator, declare_type,
    go_native_type, go_package_type_name, go_package_type_ref, go_type_def, go_type_name,
    go_type_ref, goify, package_prefix, resolve_type_ref,
};
