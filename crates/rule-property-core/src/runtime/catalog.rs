// crates/rule-property-core/src/runtime/catalog.rs
// ============================================================================
// Module: Static Type Catalog
// Description: In-memory alias table and type loader implementations.
// Purpose: Provide deterministic collaborators for hosts, configs, and tests.
// Dependencies: crate::{core, interfaces}
// ============================================================================

//! ## Overview
//! [`StaticAliasTable`] and [`StaticTypeLoader`] are immutable lookups built
//! once from known entries. The loader validates qualified-name syntax before
//! lookup. Array forms (`Name[]`) resolve when declared directly or when the
//! element type is known.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use crate::core::NAMESPACE_SEPARATOR;
use crate::core::TypeHandle;
use crate::core::TypeKind;
use crate::interfaces::AliasTable;
use crate::interfaces::LoadError;
use crate::interfaces::TypeLoader;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Maximum accepted length of a qualified type name in bytes.
pub const MAX_TYPE_NAME_LENGTH: usize = 1024;
/// Suffix marking an array type.
const ARRAY_SUFFIX: &str = "[]";

// ============================================================================
// SECTION: Name Validation
// ============================================================================

/// Validates qualified-name syntax: dot-separated identifier segments with
/// optional trailing `[]` array suffixes.
///
/// # Errors
///
/// Returns [`LoadError::Malformed`] when the name is not well formed.
pub fn validate_qualified_name(name: &str) -> Result<(), LoadError> {
    if name.is_empty() || name.len() > MAX_TYPE_NAME_LENGTH {
        return Err(LoadError::Malformed(name.to_string()));
    }
    let element = strip_array_suffixes(name).0;
    if element.split(NAMESPACE_SEPARATOR).all(is_identifier) {
        Ok(())
    } else {
        Err(LoadError::Malformed(name.to_string()))
    }
}

/// Returns true when `segment` is a type identifier.
fn is_identifier(segment: &str) -> bool {
    let mut chars = segment.chars();
    chars.next().is_some_and(|first| first.is_alphabetic() || first == '_' || first == '$')
        && chars.all(|ch| ch.is_alphanumeric() || ch == '_' || ch == '$')
}

/// Splits a name into its element name and array depth.
fn strip_array_suffixes(name: &str) -> (&str, usize) {
    let mut element = name;
    let mut depth = 0;
    while let Some(stripped) = element.strip_suffix(ARRAY_SUFFIX) {
        element = stripped;
        depth += 1;
    }
    (element, depth)
}

// ============================================================================
// SECTION: Alias Table
// ============================================================================

/// Immutable alias table backed by an ordered map.
#[derive(Debug, Clone, Default)]
pub struct StaticAliasTable {
    /// Alias to handle mapping.
    entries: BTreeMap<String, TypeHandle>,
}

impl StaticAliasTable {
    /// Creates an empty alias table.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Returns the number of aliases.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when no aliases are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl FromIterator<(String, TypeHandle)> for StaticAliasTable {
    fn from_iter<I: IntoIterator<Item = (String, TypeHandle)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

impl AliasTable for StaticAliasTable {
    fn lookup(&self, name: &str) -> Option<TypeHandle> {
        self.entries.get(name).cloned()
    }
}

// ============================================================================
// SECTION: Type Loader
// ============================================================================

/// Immutable type loader over a fixed set of known types.
#[derive(Debug, Clone, Default)]
pub struct StaticTypeLoader {
    /// Known types keyed by qualified name.
    types: BTreeMap<String, TypeHandle>,
}

impl StaticTypeLoader {
    /// Creates an empty loader.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            types: BTreeMap::new(),
        }
    }

    /// Returns true when `qualified_name` is a known element type.
    #[must_use]
    pub fn contains(&self, qualified_name: &str) -> bool {
        self.types.contains_key(qualified_name)
    }

    /// Returns the number of known types.
    #[must_use]
    pub fn len(&self) -> usize {
        self.types.len()
    }

    /// Returns true when no types are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl FromIterator<TypeHandle> for StaticTypeLoader {
    fn from_iter<I: IntoIterator<Item = TypeHandle>>(iter: I) -> Self {
        Self {
            types: iter
                .into_iter()
                .map(|handle| (handle.qualified_name().to_string(), handle))
                .collect(),
        }
    }
}

impl TypeLoader for StaticTypeLoader {
    fn load(&self, qualified_name: &str) -> Result<TypeHandle, LoadError> {
        validate_qualified_name(qualified_name)?;
        if let Some(handle) = self.types.get(qualified_name) {
            return Ok(handle.clone());
        }
        let (element, depth) = strip_array_suffixes(qualified_name);
        if depth > 0 && self.types.contains_key(element) {
            Ok(TypeHandle::new(qualified_name, TypeKind::Array))
        } else {
            Err(LoadError::NotFound(qualified_name.to_string()))
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn loader() -> StaticTypeLoader {
        [TypeHandle::reference("com.acme.Widget"), TypeHandle::primitive("int")]
            .into_iter()
            .collect()
    }

    #[test]
    fn validate_accepts_nested_and_array_names() {
        assert!(validate_qualified_name("com.acme.Outer$Inner").is_ok());
        assert!(validate_qualified_name("com.acme.Widget[][]").is_ok());
        assert!(validate_qualified_name("_private.Type1").is_ok());
    }

    #[test]
    fn validate_rejects_malformed_names() {
        for name in ["", "com..acme", ".Widget", "com.acme.", "com.1acme", "a b", "[]", "x.y[]z"] {
            assert_eq!(
                validate_qualified_name(name),
                Err(LoadError::Malformed(name.to_string())),
                "{name}"
            );
        }
    }

    #[test]
    fn validate_rejects_overlong_names() {
        let name = "a".repeat(MAX_TYPE_NAME_LENGTH + 1);
        assert!(matches!(validate_qualified_name(&name), Err(LoadError::Malformed(_))));
    }

    #[test]
    fn loader_resolves_known_and_array_types() {
        let loader = loader();
        assert_eq!(loader.load("int"), Ok(TypeHandle::primitive("int")));
        assert_eq!(
            loader.load("com.acme.Widget[]"),
            Ok(TypeHandle::new("com.acme.Widget[]", TypeKind::Array))
        );
    }

    #[test]
    fn loader_prefers_declared_array_types() {
        let loader: StaticTypeLoader =
            [TypeHandle::new("com.acme.Gadget[]", TypeKind::Array)].into_iter().collect();
        assert_eq!(
            loader.load("com.acme.Gadget[]"),
            Ok(TypeHandle::new("com.acme.Gadget[]", TypeKind::Array))
        );
        assert!(loader.load("com.acme.Gadget").is_err());
    }

    #[test]
    fn loader_reports_unknown_types() {
        assert_eq!(
            loader().load("com.acme.Gadget[]"),
            Err(LoadError::NotFound("com.acme.Gadget[]".to_string()))
        );
    }

    #[test]
    fn alias_table_returns_registered_handles() {
        let aliases: StaticAliasTable =
            [("int".to_string(), TypeHandle::primitive("int"))].into_iter().collect();
        assert_eq!(aliases.lookup("int"), Some(TypeHandle::primitive("int")));
        assert_eq!(aliases.lookup("Integer"), None);
        assert_eq!(aliases.len(), 1);
    }
}
