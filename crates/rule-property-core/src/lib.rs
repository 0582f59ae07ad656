// crates/rule-property-core/src/lib.rs
// ============================================================================
// Module: Rule Property Core Library
// Description: Public API surface for typed, validated configuration properties.
// Purpose: Expose descriptors, resolution, interfaces, and audit sinks.
// Dependencies: crate::{audit, core, descriptor, interfaces, runtime}
// ============================================================================

//! ## Overview
//! Rule Property core declares named, documented configuration values whose
//! domain is a type reference. Type names resolve through an injected alias
//! table and type loader; values are validated against allow-listed namespace
//! prefixes and round-trip losslessly through plain strings. Descriptors are
//! immutable once built and construction fails fast with a structured error.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod audit;
pub mod core;
pub mod descriptor;
pub mod interfaces;
pub mod runtime;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use audit::AuditOutcome;
pub use audit::DescriptorAuditEvent;
pub use audit::FileAuditSink;
pub use audit::MAX_AUDIT_RAW_CHARS;
pub use audit::NoopAuditSink;
pub use audit::PropertyAuditSink;
pub use audit::ResolutionSource;
pub use audit::StderrAuditSink;
pub use audit::TypeResolutionEvent;
pub use crate::core::*;
pub use descriptor::DescriptorCore;
pub use descriptor::PropertyDescriptor;
pub use descriptor::ValueKind;
pub use descriptor::factory::FieldRule;
pub use descriptor::factory::PACKAGED_FIELD_RULES;
pub use descriptor::factory::PropertyDescriptorFactory;
pub use descriptor::factory::TypeMultiPropertyFactory;
pub use descriptor::factory::TypePropertyFactory;
pub use descriptor::packaged::DEFAULT_DELIMITER;
pub use descriptor::packaged::PackageRules;
pub use descriptor::packaged::Packaged;
pub use descriptor::packaged::PackagedProperty;
pub use descriptor::packaged::PackagedValues;
pub use descriptor::type_multi::MAX_MULTI_VALUE_ITEMS;
pub use descriptor::type_multi::MAX_PARSE_ERROR_RAW_CHARS;
pub use descriptor::type_multi::TypeMultiProperty;
pub use descriptor::type_property::TypeProperty;
pub use interfaces::AliasTable;
pub use interfaces::LoadError;
pub use interfaces::TypeLoader;
pub use runtime::MAX_TYPE_NAME_LENGTH;
pub use runtime::StaticAliasTable;
pub use runtime::StaticTypeLoader;
pub use runtime::TypeResolver;
pub use runtime::validate_qualified_name;
