//! Registry of the named types declared by a design.

use crate::error::DesignError;
use crate::types::{NamedKind, NamedType};
use std::collections::BTreeMap;
use std::sync::Arc;

/// Complete set of named types produced by a design load.
#[derive(Debug, Clone, Default)]
pub struct Design {
    /// API name.
    pub name: String,
    /// Named types keyed by name.
    types: BTreeMap<String, Arc<NamedType>>,
}

impl Design {
    /// Creates a new empty design.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            types: BTreeMap::new(),
        }
    }

    /// Registers a named type and returns the shared handle used to reference it.
    ///
    /// # Errors
    /// Returns `DesignError::DuplicateDefinition` if a type with the same name exists.
    pub fn add_type(&mut self, named: NamedType) -> Result<Arc<NamedType>, DesignError> {
        if self.types.contains_key(&named.name) {
            return Err(DesignError::duplicate(named.kind.label(), &named.name));
        }
        let shared = named.shared();
        self.types.insert(shared.name.clone(), Arc::clone(&shared));
        Ok(shared)
    }

    /// Looks up a type by name.
    #[must_use]
    pub fn get_type(&self, name: &str) -> Option<&Arc<NamedType>> {
        self.types.get(name)
    }

    /// Returns true if a type with the given name exists.
    #[must_use]
    pub fn has_type(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Iterates over all types in name order.
    pub fn types(&self) -> impl Iterator<Item = &Arc<NamedType>> {
        self.types.values()
    }

    /// Iterates over the user types in name order.
    pub fn user_types(&self) -> impl Iterator<Item = &Arc<NamedType>> {
        self.types
            .values()
            .filter(|t| matches!(t.kind, NamedKind::User))
    }

    /// Iterates over the media types in name order.
    pub fn media_types(&self) -> impl Iterator<Item = &Arc<NamedType>> {
        self.types
            .values()
            .filter(|t| matches!(t.kind, NamedKind::Media { .. }))
    }

    /// Returns the number of registered types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true if no type is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
