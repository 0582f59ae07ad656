// crates/rule-property-core/src/core/mod.rs
// ============================================================================
// Module: Rule Property Core Types
// Description: Canonical field keys, type handles, namespaces, and errors.
// Purpose: Provide stable, serializable types shared by descriptors and resolvers.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! Core types are plain data: they carry no resolution logic and no mutable
//! state. Descriptors, resolvers, and the configuration layer build on them.

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod error;
pub mod fields;
pub mod namespaces;
pub mod type_handle;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use error::PropertyError;
pub use fields::FieldMap;
pub use fields::PropertyDescriptorField;
pub use fields::UnknownFieldError;
pub use namespaces::LegalNamespaces;
pub use type_handle::NAMESPACE_SEPARATOR;
pub use type_handle::TypeHandle;
pub use type_handle::TypeKind;
