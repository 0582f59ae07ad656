// crates/rule-property-core/src/runtime/mod.rs
// ============================================================================
// Module: Rule Property Runtime
// Description: Type resolution and in-memory collaborator implementations.
// Purpose: Turn raw type names into handles for descriptor construction.
// Dependencies: crate::{audit, core, interfaces}
// ============================================================================

//! ## Overview
//! Runtime modules implement name resolution. Descriptors and factories call
//! into the same [`TypeResolver`] so every entry point shares one rejection
//! path for unknown names.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod catalog;
pub mod resolver;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use catalog::MAX_TYPE_NAME_LENGTH;
pub use catalog::StaticAliasTable;
pub use catalog::StaticTypeLoader;
pub use catalog::validate_qualified_name;
pub use resolver::TypeResolver;
