//! Go code generation modules.

pub mod defs;
pub mod ident;
pub mod literal;
pub mod names;
pub mod native;
pub mod package;

pub use defs::go_type_def;
pub use ident::{FALLBACK_IDENT, goify, is_ident_char, is_reserved};
pub use literal::{go_default_value, go_literal, go_slice_literal, go_typed_literal, to_json};
pub use names::{
    GoTypeRef, go_package_type_name, go_package_type_ref, go_type_name, go_type_ref,
    resolve_type_ref,
};
pub use native::{go_native_type, go_primitive_type};
pub use package::package_prefix;

/// Appends `count` tabulation characters to `buffer`.
pub fn write_tabs(buffer: &mut String, count: usize) {
    buffer.extend(std::iter::repeat_n('\t', count));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_tabs() {
        let mut buffer = String::from("x");
        write_tabs(&mut buffer, 3);
        assert_eq!(buffer, "x\t\t\t");
        write_tabs(&mut buffer, 0);
        assert_eq!(buffer, "x\t\t\t");
    }
}
