// crates/rule-property-core/src/core/error.rs
// ============================================================================
// Module: Property Errors
// Description: Error taxonomy for descriptor construction and value parsing.
// Purpose: Surface configuration-authoring failures with actionable messages.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! All failures are raised synchronously by the operation that detects them
//! and are never downgraded inside this crate. Callers present them to the
//! end user; there is no retry policy.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::core::fields::PropertyDescriptorField;

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised by descriptors, resolvers, and factories.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PropertyError {
    /// A raw string cannot be interpreted as the value type.
    #[error("cannot parse {kind} value from '{raw}': {reason}")]
    ValueParse {
        /// Value kind label.
        kind: &'static str,
        /// Raw input.
        raw: String,
        /// Failure reason.
        reason: String,
    },
    /// A raw string names no type known to the alias table or the loader.
    #[error("unknown type: {0}")]
    TypeResolution(String),
    /// A value's namespace matches none of the legal prefixes.
    #[error("disallowed {item_type}: {} (allowed: {})", .values.join(", "), .allowed.join(", "))]
    NamespaceViolation {
        /// Item type label (e.g. `type`).
        item_type: &'static str,
        /// Offending package names.
        values: Vec<String>,
        /// Legal namespace prefixes.
        allowed: Vec<String>,
    },
    /// A required field is absent from the field map.
    #[error("missing property field: {0}")]
    MissingField(PropertyDescriptorField),
    /// A field value is malformed.
    #[error("invalid property field {field}: {reason}")]
    InvalidField {
        /// Offending field.
        field: PropertyDescriptorField,
        /// Failure reason.
        reason: String,
    },
}

impl PropertyError {
    /// Returns a stable label for the error kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::ValueParse {
                ..
            } => "value_parse",
            Self::TypeResolution(_) => "type_resolution",
            Self::NamespaceViolation {
                ..
            } => "namespace_violation",
            Self::MissingField(_) => "missing_field",
            Self::InvalidField {
                ..
            } => "invalid_field",
        }
    }

    /// Builds an invalid-field error.
    pub(crate) fn invalid_field(field: PropertyDescriptorField, reason: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            reason: reason.into(),
        }
    }
}
