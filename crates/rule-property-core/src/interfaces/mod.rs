// crates/rule-property-core/src/interfaces/mod.rs
// ============================================================================
// Module: Rule Property Interfaces
// Description: Injected collaborators for type-name resolution.
// Purpose: Keep descriptors independent of any runtime's reflection facility.
// Dependencies: crate::core, thiserror
// ============================================================================

//! ## Overview
//! Resolution consults two read-only collaborators: a fast [`AliasTable`] for
//! short names and a general [`TypeLoader`] for fully-qualified names. Both
//! must be safe for concurrent reads.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::TypeHandle;

// ============================================================================
// SECTION: Alias Table
// ============================================================================

/// Read-only table mapping short type names to resolved handles.
pub trait AliasTable: Send + Sync {
    /// Returns the handle registered for `name`, if any.
    fn lookup(&self, name: &str) -> Option<TypeHandle>;
}

// ============================================================================
// SECTION: Type Loader
// ============================================================================

/// Type loader failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// The name is well formed but no such type exists.
    #[error("type not found: {0}")]
    NotFound(String),
    /// The name is not a syntactically valid qualified name.
    #[error("malformed type name: {0}")]
    Malformed(String),
}

/// General type-loading facility keyed by fully-qualified name.
pub trait TypeLoader: Send + Sync {
    /// Loads the type named `qualified_name`.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError`] when the type cannot be loaded.
    fn load(&self, qualified_name: &str) -> Result<TypeHandle, LoadError>;
}
