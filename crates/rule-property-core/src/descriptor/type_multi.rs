// crates/rule-property-core/src/descriptor/type_multi.rs
// ============================================================================
// Module: Type Multi Property
// Description: Descriptor whose value is a delimited list of type references.
// Purpose: Share packaged validation with the single-valued type property.
// Dependencies: crate::{core, descriptor, runtime}
// ============================================================================

//! ## Overview
//! Values are split on the configured delimiter; items are trimmed and blank
//! items dropped before resolution. Serialization joins qualified names with
//! the delimiter and does not escape it.

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
// SECTION: Constants
// ============================================================================

/// Maximum number of items accepted in one multi-valued string.
pub const MAX_MULTI_VALUE_ITEMS: usize = 256;
/// Maximum number of raw input characters quoted in a parse error.
pub const MAX_PARSE_ERROR_RAW_CHARS: usize = 64;

// ============================================================================
// SECTION: Type Multi Property
// ============================================================================

/// Multi-valued type-reference descriptor.
#[derive(Debug, Clone)]
pub struct TypeMultiProperty {
    /// Packaged descriptor state.
    packaged: PackagedProperty<Vec<TypeHandle>>,
    /// Resolver used for each item.
    resolver: TypeResolver,
}

impl TypeMultiProperty {
    /// Creates a descriptor from already-resolved defaults.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::NamespaceViolation`] when any default is not
    /// in a legal namespace.
    pub fn new(
        core: DescriptorCore,
        default_value: Vec<TypeHandle>,
        rules: PackageRules,
        resolver: TypeResolver,
    ) -> Result<Self, PropertyError> {
        Ok(Self {
            packaged: PackagedProperty::new(core, default_value, rules)?,
            resolver,
        })
    }

    /// Creates a descriptor from a raw delimited default.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] when any default item does not resolve or is
    /// not legal.
    pub fn from_default_str(
        core: DescriptorCore,
        default_raw: &str,
        rules: PackageRules,
        resolver: TypeResolver,
    ) -> Result<Self, PropertyError> {
        let default_value = split_and_resolve(&resolver, rules.delimiter(), default_raw)?;
        Self::new(core, default_value, rules, resolver)
    }

    /// Returns the namespace rules.
    #[must_use]
    pub const fn rules(&self) -> &PackageRules {
        self.packaged.rules()
    }
}

impl PartialEq for TypeMultiProperty {
    fn eq(&self, other: &Self) -> bool {
        self.packaged == other.packaged
    }
}

impl PropertyDescriptor for TypeMultiProperty {
    type Value = Vec<TypeHandle>;

    fn core(&self) -> &DescriptorCore {
        self.packaged.core()
    }

    fn default_value(&self) -> &Self::Value {
        self.packaged.default_value()
    }

    fn value_kind(&self) -> ValueKind {
        ValueKind::TypeReferenceList
    }

    fn create_from(&self, raw: &str) -> Result<Self::Value, PropertyError> {
        split_and_resolve(&self.resolver, self.rules().delimiter(), raw)
    }

    fn as_string(&self, value: &Self::Value) -> String {
        let separator = self.rules().delimiter().to_string();
        value.iter().map(TypeHandle::qualified_name).collect::<Vec<_>>().join(separator.as_str())
    }

    fn validate_value(&self, value: &Self::Value) -> Result<(), PropertyError> {
        self.packaged.rules().check(value)
    }

    fn to_field_map(&self) -> FieldMap {
        self.packaged.field_map(self.as_string(self.default_value()))
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Splits `raw` on `delimiter` and resolves each non-blank item in order.
fn split_and_resolve(
    resolver: &TypeResolver,
    delimiter: char,
    raw: &str,
) -> Result<Vec<TypeHandle>, PropertyError> {
    let items: Vec<&str> =
        raw.split(delimiter).map(str::trim).filter(|item| !item.is_empty()).collect();
    if items.len() > MAX_MULTI_VALUE_ITEMS {
        return Err(PropertyError::ValueParse {
            kind: ValueKind::TypeReferenceList.as_str(),
            raw: raw.chars().take(MAX_PARSE_ERROR_RAW_CHARS).collect(),
            reason: format!("more than {MAX_MULTI_VALUE_ITEMS} items"),
        });
    }
    let mut handles = Vec::with_capacity(items.len());
    for item in items {
        if let Some(handle) = resolver.class_from(item)? {
            handles.push(handle);
        }
    }
    Ok(handles)
}
