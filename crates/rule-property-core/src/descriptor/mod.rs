// crates/rule-property-core/src/descriptor/mod.rs
// ============================================================================
// Module: Property Descriptors
// Description: Descriptor contract, packaged properties, and type properties.
// Purpose: Declare named, documented, validated configuration values.
// Dependencies: crate::{core, runtime}
// ============================================================================

//! ## Overview
//! A descriptor fully describes one configuration property: identity,
//! documentation, default, display order, and string conversion. Descriptors
//! are immutable once constructed; every constructor either returns a fully
//! validated instance or a [`PropertyError`].

// ============================================================================
// SECTION: Submodules
// ============================================================================

pub mod factory;
pub mod packaged;
pub mod type_multi;
pub mod type_property;

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;

use crate::core::FieldMap;
use crate::core::PropertyDescriptorField;
use crate::core::PropertyError;

// ============================================================================
// SECTION: Value Kind
// ============================================================================

/// Type tag identifying the value domain of a descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ValueKind {
    /// A single, optional type reference.
    TypeReference,
    /// A delimited list of type references.
    TypeReferenceList,
}

impl ValueKind {
    /// Returns a stable label for the kind.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::TypeReference => "type-reference",
            Self::TypeReferenceList => "type-reference-list",
        }
    }

    /// Returns true for multi-valued kinds.
    #[must_use]
    pub const fn is_multi(self) -> bool {
        matches!(self, Self::TypeReferenceList)
    }
}

// ============================================================================
// SECTION: Descriptor Core
// ============================================================================

/// Identity and documentation shared by every descriptor.
///
/// # Invariants
/// - `name` is trimmed and non-empty.
/// - `ui_order` is finite.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DescriptorCore {
    /// Descriptor name.
    name: String,
    /// Human-readable description.
    description: String,
    /// Relative display order.
    ui_order: f32,
}

impl DescriptorCore {
    /// Creates validated descriptor identity.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::InvalidField`] when the name is blank or the
    /// display order is not finite.
    pub fn new(
        name: impl AsRef<str>,
        description: impl Into<String>,
        ui_order: f32,
    ) -> Result<Self, PropertyError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(PropertyError::invalid_field(
                PropertyDescriptorField::Name,
                "must be non-empty",
            ));
        }
        if !ui_order.is_finite() {
            return Err(PropertyError::invalid_field(
                PropertyDescriptorField::UiOrder,
                "must be a finite number",
            ));
        }
        Ok(Self {
            name: name.to_string(),
            description: description.into(),
            ui_order,
        })
    }

    /// Returns the descriptor name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Returns the display order.
    #[must_use]
    pub const fn ui_order(&self) -> f32 {
        self.ui_order
    }

    /// Writes the identity fields into `fields`.
    pub(crate) fn export(&self, fields: &mut FieldMap) {
        fields.insert(PropertyDescriptorField::Name, self.name.as_str());
        fields.insert(PropertyDescriptorField::Description, self.description.as_str());
        fields.insert(PropertyDescriptorField::UiOrder, self.ui_order.to_string());
    }
}

// ============================================================================
// SECTION: Descriptor Contract
// ============================================================================

/// Contract for a single configurable value.
pub trait PropertyDescriptor: Send + Sync {
    /// Value domain of the descriptor.
    type Value: Clone + PartialEq;

    /// Returns the shared identity fields.
    fn core(&self) -> &DescriptorCore;

    /// Returns the descriptor name.
    fn name(&self) -> &str {
        self.core().name()
    }

    /// Returns the description.
    fn description(&self) -> &str {
        self.core().description()
    }

    /// Returns the display order.
    fn ui_order(&self) -> f32 {
        self.core().ui_order()
    }

    /// Returns the default value.
    fn default_value(&self) -> &Self::Value;

    /// Returns the value kind tag.
    fn value_kind(&self) -> ValueKind;

    /// Returns true when values hold multiple items.
    fn is_multi_value(&self) -> bool {
        self.value_kind().is_multi()
    }

    /// Parses a raw string into a value; blank input yields the absent value.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] when `raw` cannot be interpreted.
    fn create_from(&self, raw: &str) -> Result<Self::Value, PropertyError>;

    /// Serializes a value to its canonical string form.
    fn as_string(&self, value: &Self::Value) -> String;

    /// Validates a value against the descriptor's constraints.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] when the value is not acceptable.
    fn validate_value(&self, value: &Self::Value) -> Result<(), PropertyError>;

    /// Parses and validates a raw string.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] when parsing or validation fails.
    fn value_from(&self, raw: &str) -> Result<Self::Value, PropertyError> {
        let value = self.create_from(raw)?;
        self.validate_value(&value)?;
        Ok(value)
    }

    /// Exports the descriptor as a field map accepted by its factory.
    fn to_field_map(&self) -> FieldMap;
}
