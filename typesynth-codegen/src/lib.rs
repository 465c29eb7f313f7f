//! # typesynth Codegen
//!
//! Go type name and type definition synthesis.
//!
//! This crate provides:
//! - Go identifier sanitization
//! - Type names, type references and struct definitions for any type tree node
//! - Package qualification across API versions
//! - Go literals for default values
//! - Unique temporary variable names
//! - Whole-package type declaration generation

pub mod error;
pub mod generator;
pub mod go;
pub mod options;
pub mod tempvar;

pub use error::CodegenError;
pub use generator::{TypeGenerator, declare_type};
pub use go::{
    GoTypeRef, go_native_type, go_package_type_name, go_package_type_ref, go_type_def,
    go_type_name, go_type_ref, goify, package_prefix, resolve_type_ref,
};
pub use options::RenderOptions;
pub use tempvar::TempCounter;
