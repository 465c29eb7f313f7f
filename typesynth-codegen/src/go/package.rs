//! Package qualification of named types across API versions.

use typesynth_design::NamedType;

/// Returns the prefix needed to access `named` from the package being generated.
///
/// `versioned` tells whether that package is a version specific package; `default_package`
/// is the package holding the unversioned definitions. Only unversioned types referenced
/// from a version package need qualifying: versioned types are only ever referenced from
/// their own version, and the default package sees its own types unqualified.
///
/// `default_package` must not be empty when `versioned` is set, otherwise the prefix would be
/// a bare `.`. [`RenderOptions::validate`] enforces this for generator callers.
///
/// [`RenderOptions::validate`]: crate::options::RenderOptions::validate
#[must_use]
pub fn package_prefix(named: &NamedType, versioned: bool, default_package: &str) -> String {
    if !versioned || named.is_versioned() {
        return String::new();
    }
    debug_assert!(
        !default_package.is_empty(),
        "version packages need a default package to qualify unversioned types"
    );
    format!("{default_package}.")
}
