// crates/rule-property-core/src/descriptor/type_property.rs
// ============================================================================
// Module: Type Property
// Description: Descriptor whose value is a single optional type reference.
// Purpose: Validate type-valued configuration against legal namespaces.
// Dependencies: crate::{core, descriptor, runtime}
// ============================================================================

//! ## Overview
//! [`TypeProperty`] resolves raw names through a [`TypeResolver`] and checks
//! the whole qualified name of each handle against the legal prefixes. Values
//! serialize to their qualified name; the absent value serializes to `""`.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::FieldMap;
use crate::core::PropertyError;
use crate::core::TypeHandle;
use crate::descriptor::DescriptorCore;
use crate::descriptor::PropertyDescriptor;
use crate::descriptor::ValueKind;
use crate::descriptor::packaged::PackageRules;
use crate::descriptor::packaged::PackagedProperty;
use crate::runtime::TypeResolver;

// ============================================================================
// SECTION: Type Property
// ============================================================================

/// Single-valued type-reference descriptor.
///
/// # Invariants
/// - The default value satisfies the package rules.
#[derive(Debug, Clone)]
pub struct TypeProperty {
    /// Packaged descriptor state.
    packaged: PackagedProperty<Option<TypeHandle>>,
    /// Resolver used by [`PropertyDescriptor::create_from`].
    resolver: TypeResolver,
}

impl TypeProperty {
    /// Creates a descriptor from an already-resolved default.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::NamespaceViolation`] when the default is not
    /// in a legal namespace.
    pub fn new(
        core: DescriptorCore,
        default_value: Option<TypeHandle>,
        rules: PackageRules,
        resolver: TypeResolver,
    ) -> Result<Self, PropertyError> {
        Ok(Self {
            packaged: PackagedProperty::new(core, default_value, rules)?,
            resolver,
        })
    }

    /// Creates a descriptor from a raw default type name.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::TypeResolution`] when the default does not
    /// resolve, or [`PropertyError::NamespaceViolation`] when it is not legal.
    pub fn from_default_str(
        core: DescriptorCore,
        default_raw: &str,
        rules: PackageRules,
        resolver: TypeResolver,
    ) -> Result<Self, PropertyError> {
        let default_value = resolver.class_from(default_raw)?;
        Self::new(core, default_value, rules, resolver)
    }

    /// Returns the namespace rules.
    #[must_use]
    pub const fn rules(&self) -> &PackageRules {
        self.packaged.rules()
    }
}

impl PartialEq for TypeProperty {
    fn eq(&self, other: &Self) -> bool {
        self.packaged == other.packaged
    }
}

impl PropertyDescriptor for TypeProperty {
    type Value = Option<TypeHandle>;

    fn core(&self) -> &DescriptorCore {
        self.packaged.core()
    }

    fn default_value(&self) -> &Self::Value {
        self.packaged.default_value()
    }

    fn value_kind(&self) -> ValueKind {
        ValueKind::TypeReference
    }

    fn create_from(&self, raw: &str) -> Result<Self::Value, PropertyError> {
        self.resolver.class_from(raw)
    }

    fn as_string(&self, value: &Self::Value) -> String {
        value.as_ref().map_or_else(String::new, |handle| handle.qualified_name().to_string())
    }

    fn validate_value(&self, value: &Self::Value) -> Result<(), PropertyError> {
        self.packaged.rules().check(value)
    }

    fn to_field_map(&self) -> FieldMap {
        self.packaged.field_map(self.as_string(self.default_value()))
    }
}
