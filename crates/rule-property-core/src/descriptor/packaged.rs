// crates/rule-property-core/src/descriptor/packaged.rs
// ============================================================================
// Module: Packaged Properties
// Description: Namespace-constrained descriptor state and validation.
// Purpose: Enforce that every accepted value belongs to a legal namespace.
// Dependencies: crate::{core, descriptor}
// ============================================================================

//! ## Overview
//! A packaged property pairs descriptor identity with [`PackageRules`]: a
//! normalized allow-list of namespace prefixes and a delimiter. The default
//! value is validated at construction, so no descriptor with an illegal
//! default is ever observable. The delimiter is not escaped inside values.

// ============================================================================
// SECTION: Imports
// ============================================================================

use crate::core::FieldMap;
use crate::core::LegalNamespaces;
use crate::core::NAMESPACE_SEPARATOR;
use crate::core::PropertyDescriptorField;
use crate::core::PropertyError;
use crate::core::TypeHandle;
use crate::descriptor::DescriptorCore;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Delimiter used when none is configured.
pub const DEFAULT_DELIMITER: char = '|';

// ============================================================================
// SECTION: Packaged Items
// ============================================================================

/// Items whose package name is checked against legal namespaces.
pub trait Packaged {
    /// Label used in violation messages.
    const ITEM_TYPE_NAME: &'static str;

    /// Returns the name matched against legal prefixes.
    fn package_name(&self) -> &str;
}

impl Packaged for TypeHandle {
    const ITEM_TYPE_NAME: &'static str = "type";

    fn package_name(&self) -> &str {
        self.qualified_name()
    }
}

/// Value shapes that expose their packaged items.
pub trait PackagedValues {
    /// Item type held by the value.
    type Item: Packaged;

    /// Returns the items to validate.
    fn items(&self) -> &[Self::Item];
}

impl<T: Packaged> PackagedValues for Option<T> {
    type Item = T;

    fn items(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: Packaged> PackagedValues for Vec<T> {
    type Item = T;

    fn items(&self) -> &[T] {
        self.as_slice()
    }
}

// ============================================================================
// SECTION: Package Rules
// ============================================================================

/// Legal namespaces plus the delimiter used to pack values.
///
/// # Invariants
/// - The delimiter is never whitespace nor a character valid inside a
///   qualified name.
/// - No legal namespace contains the delimiter once the rules back a
///   [`PackagedProperty`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageRules {
    /// Allowed namespace prefixes.
    legal_namespaces: LegalNamespaces,
    /// Split/join delimiter.
    delimiter: char,
}

impl PackageRules {
    /// Creates rules with the default delimiter.
    #[must_use]
    pub const fn new(legal_namespaces: LegalNamespaces) -> Self {
        Self {
            legal_namespaces,
            delimiter: DEFAULT_DELIMITER,
        }
    }

    /// Returns rules without namespace restriction.
    #[must_use]
    pub const fn unrestricted() -> Self {
        Self::new(LegalNamespaces::unrestricted())
    }

    /// Returns the rules with `delimiter` in place of the current one.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::InvalidField`] for whitespace or name
    /// characters, or when a legal namespace contains `delimiter`.
    pub fn with_delimiter(mut self, delimiter: char) -> Result<Self, PropertyError> {
        validate_delimiter(delimiter)?;
        validate_legal_namespaces(&self.legal_namespaces, delimiter)?;
        self.delimiter = delimiter;
        Ok(self)
    }

    /// Returns the legal namespaces.
    #[must_use]
    pub const fn legal_namespaces(&self) -> &LegalNamespaces {
        &self.legal_namespaces
    }

    /// Returns the delimiter.
    #[must_use]
    pub const fn delimiter(&self) -> char {
        self.delimiter
    }

    /// Checks every item of `value` against the legal namespaces.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::NamespaceViolation`] listing each offending
    /// package name once, in order of appearance.
    pub fn check<V: PackagedValues>(&self, value: &V) -> Result<(), PropertyError> {
        if self.legal_namespaces.is_unrestricted() {
            return Ok(());
        }
        let mut offending: Vec<String> = Vec::new();
        for item in value.items() {
            let name = item.package_name();
            if !self.legal_namespaces.permits(name) && !offending.iter().any(|seen| seen == name) {
                offending.push(name.to_string());
            }
        }
        if offending.is_empty() {
            return Ok(());
        }
        Err(PropertyError::NamespaceViolation {
            item_type: V::Item::ITEM_TYPE_NAME,
            values: offending,
            allowed: self.legal_namespaces.as_slice().to_vec(),
        })
    }
}

/// Rejects delimiters that would collide with whitespace or name characters.
fn validate_delimiter(delimiter: char) -> Result<(), PropertyError> {
    if delimiter.is_whitespace()
        || delimiter.is_alphanumeric()
        || delimiter == NAMESPACE_SEPARATOR
        || matches!(delimiter, '_' | '$' | '[' | ']')
    {
        return Err(PropertyError::invalid_field(
            PropertyDescriptorField::Delimiter,
            format!("'{delimiter}' is not a usable delimiter"),
        ));
    }
    Ok(())
}

/// Rejects legal namespaces that would split apart when joined on `delimiter`.
fn validate_legal_namespaces(
    legal_namespaces: &LegalNamespaces,
    delimiter: char,
) -> Result<(), PropertyError> {
    match legal_namespaces.as_slice().iter().find(|entry| entry.contains(delimiter)) {
        Some(entry) => Err(PropertyError::invalid_field(
            PropertyDescriptorField::LegalPackages,
            format!("'{entry}' contains the delimiter '{delimiter}'"),
        )),
        None => Ok(()),
    }
}

// ============================================================================
// SECTION: Packaged Property
// ============================================================================

/// Descriptor state shared by namespace-constrained properties.
#[derive(Debug, Clone, PartialEq)]
pub struct PackagedProperty<V> {
    /// Identity fields.
    core: DescriptorCore,
    /// Validated default value.
    default_value: V,
    /// Namespace rules.
    rules: PackageRules,
}

impl<V: PackagedValues> PackagedProperty<V> {
    /// Creates packaged state, validating the default value.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::InvalidField`] when a legal namespace contains
    /// the delimiter, or [`PropertyError::NamespaceViolation`] when the default
    /// value falls outside the legal namespaces.
    pub fn new(
        core: DescriptorCore,
        default_value: V,
        rules: PackageRules,
    ) -> Result<Self, PropertyError> {
        validate_legal_namespaces(&rules.legal_namespaces, rules.delimiter)?;
        rules.check(&default_value)?;
        Ok(Self {
            core,
            default_value,
            rules,
        })
    }

    /// Returns the identity fields.
    #[must_use]
    pub const fn core(&self) -> &DescriptorCore {
        &self.core
    }

    /// Returns the default value.
    #[must_use]
    pub const fn default_value(&self) -> &V {
        &self.default_value
    }

    /// Returns the namespace rules.
    #[must_use]
    pub const fn rules(&self) -> &PackageRules {
        &self.rules
    }

    /// Exports identity, rules, and the serialized default.
    #[must_use]
    pub fn field_map(&self, default_string: String) -> FieldMap {
        let mut fields = FieldMap::new();
        self.core.export(&mut fields);
        fields.insert(PropertyDescriptorField::DefaultValue, default_string);
        fields.insert(
            PropertyDescriptorField::LegalPackages,
            self.rules.legal_namespaces.join(self.rules.delimiter),
        );
        fields.insert(PropertyDescriptorField::Delimiter, self.rules.delimiter.to_string());
        fields
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
