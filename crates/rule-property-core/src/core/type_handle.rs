// crates/rule-property-core/src/core/type_handle.rs
// ============================================================================
// Module: Type Handles
// Description: Opaque handles identifying programming types by qualified name.
// Purpose: Decouple descriptors from any runtime's reflection facility.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A [`TypeHandle`] is the value domain of type-reference properties. It is an
//! opaque, comparable identifier carrying a fully-qualified name and a coarse
//! [`TypeKind`]. Handles are produced by alias tables and type loaders; this
//! module performs no resolution of its own.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Separator between qualified-name segments.
pub const NAMESPACE_SEPARATOR: char = '.';

// ============================================================================
// SECTION: Types
// ============================================================================

/// Coarse classification of a resolved type.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    /// Primitive-like type without a namespace (e.g. `int`).
    Primitive,
    /// Named reference type.
    #[default]
    Reference,
    /// Array of another type.
    Array,
}

impl TypeKind {
    /// Returns a stable label for the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primitive => "primitive",
            Self::Reference => "reference",
            Self::Array => "array",
        }
    }
}

/// Opaque handle identifying a programming type.
///
/// # Invariants
/// - Equality and ordering consider both the qualified name and the kind.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TypeHandle {
    /// Fully-qualified type name.
    name: String,
    /// Type classification.
    kind: TypeKind,
}

impl TypeHandle {
    /// Creates a handle for a named reference type.
    #[must_use]
    pub fn reference(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Reference)
    }

    /// Creates a handle for a primitive-like type.
    #[must_use]
    pub fn primitive(name: impl Into<String>) -> Self {
        Self::new(name, TypeKind::Primitive)
    }

    /// Creates a handle with an explicit kind.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: TypeKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Returns the fully-qualified name.
    #[must_use]
    pub fn qualified_name(&self) -> &str {
        &self.name
    }

    /// Returns the type classification.
    #[must_use]
    pub const fn kind(&self) -> TypeKind {
        self.kind
    }

    /// Returns the final name segment.
    #[must_use]
    pub fn simple_name(&self) -> &str {
        self.name.rsplit_once(NAMESPACE_SEPARATOR).map_or(self.name.as_str(), |(_, simple)| simple)
    }

    /// Returns the enclosing namespace path, if any.
    #[must_use]
    pub fn namespace(&self) -> Option<&str> {
        self.name.rsplit_once(NAMESPACE_SEPARATOR).map(|(namespace, _)| namespace)
    }
}

impl fmt::Display for TypeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
