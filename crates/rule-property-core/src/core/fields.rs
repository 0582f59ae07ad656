// crates/rule-property-core/src/core/fields.rs
// ============================================================================
// Module: Property Descriptor Fields
// Description: Recognized configuration-field keys and the raw field map.
// Purpose: Provide the sole external input shape for descriptor construction.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! A field map associates each recognized [`PropertyDescriptorField`] with a
//! raw string produced by an external configuration loader. Keys are a closed
//! set; unknown labels are rejected when parsing.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Field Keys
// ============================================================================

/// Recognized configuration-field keys for property descriptors.
///
/// # Invariants
/// - Labels are stable and used for serialization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PropertyDescriptorField {
    /// Descriptor name.
    Name,
    /// Human-readable description.
    Description,
    /// Raw default value.
    DefaultValue,
    /// Legal namespace prefixes, joined by the delimiter.
    LegalPackages,
    /// Delimiter character for multi-valued content.
    Delimiter,
    /// Relative display order.
    UiOrder,
}

impl PropertyDescriptorField {
    /// All recognized fields in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Name,
        Self::Description,
        Self::DefaultValue,
        Self::LegalPackages,
        Self::Delimiter,
        Self::UiOrder,
    ];

    /// Returns the stable label for the field.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Description => "description",
            Self::DefaultValue => "default_value",
            Self::LegalPackages => "legal_packages",
            Self::Delimiter => "delimiter",
            Self::UiOrder => "ui_order",
        }
    }
}

impl fmt::Display for PropertyDescriptorField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a field label is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown property field: {0}")]
pub struct UnknownFieldError(pub String);

impl FromStr for PropertyDescriptorField {
    type Err = UnknownFieldError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == value)
            .ok_or_else(|| UnknownFieldError(value.to_string()))
    }
}

// ============================================================================
// SECTION: Field Map
// ============================================================================

/// Immutable-by-convention mapping from field keys to raw strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FieldMap(BTreeMap<PropertyDescriptorField, String>);

impl FieldMap {
    /// Creates an empty field map.
    #[must_use]
    pub const fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Returns a copy of the map with `field` set to `value`.
    #[must_use]
    pub fn with(mut self, field: PropertyDescriptorField, value: impl Into<String>) -> Self {
        self.0.insert(field, value.into());
        self
    }

    /// Sets a field value, replacing any previous value.
    pub fn insert(&mut self, field: PropertyDescriptorField, value: impl Into<String>) {
        self.0.insert(field, value.into());
    }

    /// Returns the raw value for a field.
    #[must_use]
    pub fn get(&self, field: PropertyDescriptorField) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    /// Returns true when the field is present.
    #[must_use]
    pub fn contains(&self, field: PropertyDescriptorField) -> bool {
        self.0.contains_key(&field)
    }

    /// Iterates over present fields in key order.
    pub fn iter(&self) -> impl Iterator<Item = (PropertyDescriptorField, &str)> {
        self.0.iter().map(|(field, value)| (*field, value.as_str()))
    }

    /// Returns the number of present fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true when no fields are present.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(PropertyDescriptorField, String)> for FieldMap {
    fn from_iter<I: IntoIterator<Item = (PropertyDescriptorField, String)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<BTreeMap<PropertyDescriptorField, String>> for FieldMap {
    fn from(value: BTreeMap<PropertyDescriptorField, String>) -> Self {
        Self(value)
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
