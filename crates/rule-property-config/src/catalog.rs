// crates/rule-property-config/src/catalog.rs
// ============================================================================
// Module: Catalog Builders
// Description: Build resolvers, audit sinks, and descriptors from config.
// Purpose: Wire validated configuration into rule-property-core collaborators.
// Dependencies: rule-property-core
// ============================================================================

//! ## Overview
//! Builders assume [`RulePropertyConfig::validate`] has passed. Descriptor
//! construction still runs through the core factories, so every property is
//! re-validated and the first failure is reported with its property name.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::sync::Arc;

use rule_property_core::FieldMap;
use rule_property_core::FileAuditSink;
use rule_property_core::NoopAuditSink;
use rule_property_core::PropertyAuditSink;
use rule_property_core::PropertyDescriptor;
use rule_property_core::PropertyDescriptorFactory;
use rule_property_core::PropertyDescriptorField;
use rule_property_core::PropertyError;
use rule_property_core::StaticAliasTable;
use rule_property_core::StaticTypeLoader;
use rule_property_core::StderrAuditSink;
use rule_property_core::TypeHandle;
use rule_property_core::TypeMultiProperty;
use rule_property_core::TypeMultiPropertyFactory;
use rule_property_core::TypeProperty;
use rule_property_core::TypePropertyFactory;
use rule_property_core::TypeResolver;
use rule_property_core::ValueKind;

use crate::config::AuditSinkKind;
use crate::config::ConfigError;
use crate::config::RulePropertyConfig;

// ============================================================================
// SECTION: Configured Properties
// ============================================================================

/// A descriptor built from a property definition.
#[derive(Debug, Clone, PartialEq)]
pub enum ConfiguredProperty {
    /// Single-valued type property.
    Single(TypeProperty),
    /// Multi-valued type property.
    Multi(TypeMultiProperty),
}

impl ConfiguredProperty {
    /// Returns the descriptor name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Single(property) => property.name(),
            Self::Multi(property) => property.name(),
        }
    }

    /// Returns the value kind.
    #[must_use]
    pub fn value_kind(&self) -> ValueKind {
        match self {
            Self::Single(property) => property.value_kind(),
            Self::Multi(property) => property.value_kind(),
        }
    }

    /// Returns the serialized default value.
    #[must_use]
    pub fn default_string(&self) -> String {
        match self {
            Self::Single(property) => property.as_string(property.default_value()),
            Self::Multi(property) => property.as_string(property.default_value()),
        }
    }

    /// Exports the descriptor fields.
    #[must_use]
    pub fn field_map(&self) -> FieldMap {
        match self {
            Self::Single(property) => property.to_field_map(),
            Self::Multi(property) => property.to_field_map(),
        }
    }

    /// Parses, validates, and re-serializes a raw value.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError`] when the value does not resolve or is not
    /// in a legal namespace.
    pub fn normalize_value(&self, raw: &str) -> Result<String, PropertyError> {
        match self {
            Self::Single(property) => property.value_from(raw).map(|v| property.as_string(&v)),
            Self::Multi(property) => property.value_from(raw).map(|v| property.as_string(&v)),
        }
    }
}

// ============================================================================
// SECTION: Builders
// ============================================================================

impl RulePropertyConfig {
    /// Builds the configured audit sink.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the audit file cannot be opened.
    pub fn build_audit_sink(&self) -> Result<Arc<dyn PropertyAuditSink>, ConfigError> {
        match (self.audit.sink, &self.audit.path) {
            (AuditSinkKind::File, Some(path)) => {
                let sink = FileAuditSink::new(path).map_err(|err| ConfigError::Io(err.to_string()))?;
                Ok(Arc::new(sink))
            }
            (AuditSinkKind::File, None) => {
                Err(ConfigError::Invalid("audit.sink=file requires audit.path".to_string()))
            }
            (AuditSinkKind::Stderr, _) => Ok(Arc::new(StderrAuditSink)),
            (AuditSinkKind::None, _) => Ok(Arc::new(NoopAuditSink)),
        }
    }

    /// Builds a resolver over the declared types and aliases.
    #[must_use]
    pub fn build_resolver(&self, audit: Arc<dyn PropertyAuditSink>) -> TypeResolver {
        let declared: BTreeMap<&str, TypeHandle> = self
            .catalog
            .types
            .iter()
            .map(|entry| (entry.name.as_str(), TypeHandle::new(entry.name.as_str(), entry.kind)))
            .collect();
        let aliases: StaticAliasTable = self
            .catalog
            .aliases
            .iter()
            .filter_map(|(alias, target)| {
                declared.get(target.as_str()).map(|handle| (alias.clone(), handle.clone()))
            })
            .collect();
        let loader: StaticTypeLoader = declared.into_values().collect();
        TypeResolver::new(Arc::new(aliases), Arc::new(loader)).with_audit(audit)
    }

    /// Builds every declared property in definition order.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Property`] naming the first property that fails
    /// descriptor construction.
    pub fn build_properties(
        &self,
        resolver: &TypeResolver,
    ) -> Result<Vec<ConfiguredProperty>, ConfigError> {
        let single = TypePropertyFactory::new(resolver.clone());
        let multi = TypeMultiPropertyFactory::new(resolver.clone());
        let mut built = Vec::with_capacity(self.properties.len());
        for definition in &self.properties {
            let fields = definition.field_map()?;
            let result = if definition.multi {
                multi.create_with(&fields).map(ConfiguredProperty::Multi)
            } else {
                single.create_with(&fields).map(ConfiguredProperty::Single)
            };
            let property = result.map_err(|source| ConfigError::Property {
                name: fields.get(PropertyDescriptorField::Name).unwrap_or_default().to_string(),
                source,
            })?;
            built.push(property);
        }
        Ok(built)
    }
}
