// crates/rule-property-core/src/descriptor/factory.rs
// ============================================================================
// Module: Descriptor Factories
// Description: Build validated descriptors from raw field maps.
// Purpose: Provide the fail-fast construction path used by config loaders.
// Dependencies: crate::{audit, core, descriptor, runtime}
// ============================================================================

//! ## Overview
//! Factories read a [`FieldMap`], apply defaults for optional fields, resolve
//! the default value, and return either a fully validated descriptor or the
//! first error encountered. Each attempt is recorded on the resolver's audit
//! sink.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::audit::DescriptorAuditEvent;
use crate::core::FieldMap;
use crate::core::LegalNamespaces;
use crate::core::PropertyDescriptorField;
use crate::core::PropertyError;
use crate::descriptor::DescriptorCore;
use crate::descriptor::PropertyDescriptor;
use crate::descriptor::ValueKind;
use crate::descriptor::packaged::DEFAULT_DELIMITER;
use crate::descriptor::packaged::PackageRules;
use crate::descriptor::type_multi::TypeMultiProperty;
use crate::descriptor::type_property::TypeProperty;
use crate::runtime::TypeResolver;

// ============================================================================
// SECTION: Field Rules
// ============================================================================

/// Whether a recognized field must be present.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldRule {
    /// Field key.
    pub field: PropertyDescriptorField,
    /// True when the field must be present.
    pub required: bool,
}

/// Field rules shared by packaged-property factories.
pub const PACKAGED_FIELD_RULES: &[FieldRule] = &[
    FieldRule {
        field: PropertyDescriptorField::Name,
        required: true,
    },
    FieldRule {
        field: PropertyDescriptorField::Description,
        required: false,
    },
    FieldRule {
        field: PropertyDescriptorField::DefaultValue,
        required: false,
    },
    FieldRule {
        field: PropertyDescriptorField::LegalPackages,
        required: false,
    },
    FieldRule {
        field: PropertyDescriptorField::Delimiter,
        required: false,
    },
    FieldRule {
        field: PropertyDescriptorField::UiOrder,
        required: false,
    },
];

// ============================================================================
// SECTION: Factory Contract
// ============================================================================

/// Builds descriptors of one kind from field maps.
pub trait PropertyDescriptorFactory {
    /// Descriptor type produced.
    type Descriptor: PropertyDescriptor;

    /// Returns the value kind of produced descriptors.
    fn value_kind(&self) -> ValueKind;

    /// Returns the recognized fields and whether each is required.
    fn field_rules(&self) -> &'static [FieldRule] {
        PACKAGED_FIELD_RULES
    }

    /// Builds a descriptor from `fields`.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] when a field is missing or invalid, the
    /// default does not resolve, or the default is not in a legal namespace.
    fn create_with(&self, fields: &FieldMap) -> Result<Self::Descriptor, PropertyError>;
}

// ============================================================================
// SECTION: Type Property Factories
// ============================================================================

/// Factory for [`TypeProperty`] descriptors.
#[derive(Debug, Clone)]
pub struct TypePropertyFactory {
    /// Resolver handed to every descriptor.
    resolver: TypeResolver,
}

impl TypePropertyFactory {
    /// Creates a factory around `resolver`.
    #[must_use]
    pub const fn new(resolver: TypeResolver) -> Self {
        Self {
            resolver,
        }
    }
}

impl PropertyDescriptorFactory for TypePropertyFactory {
    type Descriptor = TypeProperty;

    fn value_kind(&self) -> ValueKind {
        ValueKind::TypeReference
    }

    fn create_with(&self, fields: &FieldMap) -> Result<TypeProperty, PropertyError> {
        let result = PackagedFields::read(self.field_rules(), fields).and_then(|parsed| {
            TypeProperty::from_default_str(
                parsed.core,
                parsed.default_raw,
                parsed.rules,
                self.resolver.clone(),
            )
        });
        audit_build(&self.resolver, fields, self.value_kind(), result.as_ref().err());
        result
    }
}

/// Factory for [`TypeMultiProperty`] descriptors.
#[derive(Debug, Clone)]
pub struct TypeMultiPropertyFactory {
    /// Resolver handed to every descriptor.
    resolver: TypeResolver,
}

impl TypeMultiPropertyFactory {
    /// Creates a factory around `resolver`.
    #[must_use]
    pub const fn new(resolver: TypeResolver) -> Self {
        Self {
            resolver,
        }
    }
}

impl PropertyDescriptorFactory for TypeMultiPropertyFactory {
    type Descriptor = TypeMultiProperty;

    fn value_kind(&self) -> ValueKind {
        ValueKind::TypeReferenceList
    }

    fn create_with(&self, fields: &FieldMap) -> Result<TypeMultiProperty, PropertyError> {
        let result = PackagedFields::read(self.field_rules(), fields).and_then(|parsed| {
            TypeMultiProperty::from_default_str(
                parsed.core,
                parsed.default_raw,
                parsed.rules,
                self.resolver.clone(),
            )
        });
        audit_build(&self.resolver, fields, self.value_kind(), result.as_ref().err());
        result
    }
}

// ============================================================================
// SECTION: Field Extraction
// ============================================================================

/// Fields extracted from a map before default resolution.
struct PackagedFields<'a> {
    /// Validated identity.
    core: DescriptorCore,
    /// Validated namespace rules.
    rules: PackageRules,
    /// Raw default value, possibly empty.
    default_raw: &'a str,
}

impl<'a> PackagedFields<'a> {
    /// Reads and validates every non-default field.
    fn read(rules: &[FieldRule], fields: &'a FieldMap) -> Result<Self, PropertyError> {
        for rule in rules {
            if rule.required && !fields.contains(rule.field) {
                return Err(PropertyError::MissingField(rule.field));
            }
        }
        let name = fields.get(PropertyDescriptorField::Name).unwrap_or_default();
        let description = fields.get(PropertyDescriptorField::Description).unwrap_or_default();
        let core = DescriptorCore::new(name, description, ui_order_in(fields)?)?;
        let delimiter = delimiter_in(fields)?;
        let legal = fields
            .get(PropertyDescriptorField::LegalPackages)
            .map_or_else(LegalNamespaces::unrestricted, |raw| {
                LegalNamespaces::split(raw, delimiter)
            });
        Ok(Self {
            core,
            rules: PackageRules::new(legal).with_delimiter(delimiter)?,
            default_raw: fields.get(PropertyDescriptorField::DefaultValue).unwrap_or_default(),
        })
    }
}

/// Parses the display order, defaulting to zero.
fn ui_order_in(fields: &FieldMap) -> Result<f32, PropertyError> {
    let Some(raw) = fields.get(PropertyDescriptorField::UiOrder) else {
        return Ok(0.0);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    trimmed.parse::<f32>().map_err(|err| {
        PropertyError::invalid_field(PropertyDescriptorField::UiOrder, err.to_string())
    })
}

/// Parses the delimiter, defaulting to [`DEFAULT_DELIMITER`].
fn delimiter_in(fields: &FieldMap) -> Result<char, PropertyError> {
    let Some(raw) = fields.get(PropertyDescriptorField::Delimiter) else {
        return Ok(DEFAULT_DELIMITER);
    };
    let mut chars = raw.chars();
    match (chars.next(), chars.next()) {
        (None, _) => Ok(DEFAULT_DELIMITER),
        (Some(delimiter), None) => Ok(delimiter),
        (Some(_), Some(_)) => Err(PropertyError::invalid_field(
            PropertyDescriptorField::Delimiter,
            "must be a single character",
        )),
    }
}

/// Records a descriptor build attempt.
fn audit_build(
    resolver: &TypeResolver,
    fields: &FieldMap,
    value_kind: ValueKind,
    error: Option<&PropertyError>,
) {
    let event = DescriptorAuditEvent::new(
        fields.get(PropertyDescriptorField::Name),
        value_kind.as_str(),
        error,
    );
    resolver.audit().record_descriptor(&event);
}

// ============================================================================
// SECTION: Tests
// ============================================================================
