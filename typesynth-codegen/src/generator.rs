//! Type declaration generator.

use crate::error::CodegenError;
use crate::go::{go_package_type_ref, go_type_def, goify};
use crate::options::RenderOptions;
use std::collections::BTreeMap;
use typesynth_design::{DataType, Design, NamedKind, NamedType, RequiredSet, validate_design};

/// Generator for the type declarations of one target package.
pub struct TypeGenerator<'a> {
    design: &'a Design,
    options: RenderOptions,
}

impl<'a> TypeGenerator<'a> {
    /// Creates a new type generator.
    #[must_use]
    pub fn new(design: &'a Design, options: RenderOptions) -> Self {
        Self { design, options }
    }

    /// Returns the render options.
    #[must_use]
    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    /// Returns true if `named` is declared in the target package.
    ///
    /// The default package holds the unversioned types, a version package the types of its
    /// version (or every versioned type when no version is set).
    #[must_use]
    pub fn declares(&self, named: &NamedType) -> bool {
        if !self.options.versioned {
            return !named.is_versioned();
        }
        match &self.options.version {
            Some(version) => named.versions.contains(version),
            None => named.is_versioned(),
        }
    }

    /// Generates the declaration of a named type.
    ///
    /// # Errors
    /// Returns `CodegenError` if the definition cannot be rendered.
    pub fn declare(&self, named: &NamedType) -> Result<String, CodegenError> {
        declare_type(named, &self.options)
    }

    /// Generates the declarations of every type of the target package, in name order.
    ///
    /// # Errors
    /// Returns `CodegenError` if the options or the design are invalid, if two declared types
    /// map to the same identifier, or if any type cannot be rendered. No output is produced in
    /// that case.
    pub fn generate(&self) -> Result<String, CodegenError> {
        self.options.validate()?;
        validate_design(self.design)?;

        let declared: Vec<&NamedType> = self
            .design
            .types()
            .map(|named| &**named)
            .filter(|named| self.declares(named))
            .collect();
        check_type_identifiers(&declared)?;

        let declarations = declared
            .into_iter()
            .map(|named| self.declare(named))
            .collect::<Result<Vec<_>, _>>()?;

        tracing::debug!(
            design = %self.design.name,
            count = declarations.len(),
            versioned = self.options.versioned,
            "generated type declarations"
        );
        Ok(declarations.join("\n"))
    }

    /// Returns the Go code referring to `data_type` from the target package.
    ///
    /// # Errors
    /// Returns `CodegenError` if an inline object cannot be rendered.
    pub fn type_ref(
        &self,
        data_type: &DataType,
        required: &RequiredSet,
    ) -> Result<String, CodegenError> {
        go_package_type_ref(
            data_type,
            required,
            self.options.versioned,
            &self.options.default_package,
            self.options.indent,
        )
    }
}

/// Rejects two declared types whose names map to the same Go identifier.
fn check_type_identifiers(declared: &[&NamedType]) -> Result<(), CodegenError> {
    let mut seen: BTreeMap<String, &str> = BTreeMap::new();
    for named in declared {
        let ident = goify(&named.name, true);
        if let Some(first) = seen.insert(ident.clone(), &named.name) {
            tracing::warn!(
                first,
                second = %named.name,
                identifier = %ident,
                "type identifier collision"
            );
            return Err(CodegenError::TypeNameCollision {
                first: first.to_string(),
                second: named.name.clone(),
                identifier: ident,
            });
        }
    }
    Ok(())
}

/// Renders the declaration of a named type: its doc comment followed by
/// `type Name <definition>`.
///
/// # Errors
/// Returns `CodegenError` if the options are invalid or the definition cannot be rendered.
pub fn declare_type(named: &NamedType, options: &RenderOptions) -> Result<String, CodegenError> {
    options.validate()?;
    let ident = goify(&named.name, true);
    let definition = go_type_def(
        &named.data_type,
        &named.all_required(),
        options.versioned,
        &options.default_package,
        options.indent,
        options.json_tags,
    )?;

    let mut output = String::new();
    match named.description.as_deref() {
        Some(description) => {
            for line in description.lines() {
                output.push_str(format!("// {line}").trim_end());
                output.push('\n');
            }
        }
        None => output.push_str(&format!("// {} {}.\n", ident, named.kind.label())),
    }
    if let NamedKind::Media { identifier } = &named.kind {
        output.push_str(&format!("//\n// Identifier: {identifier}\n"));
    }
    output.push_str(&format!("type {ident} {definition}\n"));

    tracing::debug!(type_name = %named.name, ident = %ident, "declared type");
    Ok(output)
}
