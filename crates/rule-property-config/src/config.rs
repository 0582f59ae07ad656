// crates/rule-property-config/src/config.rs
// ============================================================================
// Module: Rule Property Configuration
// Description: Catalog configuration loading and validation.
// Purpose: Provide strict, fail-closed config parsing with hard limits.
// Dependencies: rule-property-core, serde, toml
// ============================================================================

//! ## Overview
//! Configuration is loaded from a TOML file with strict size and path limits.
//! It declares the known types and aliases injected into the resolver, the
//! property definitions to build, and the audit sink. Missing or invalid
//! configuration fails closed.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::collections::BTreeSet;
use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use rule_property_core::FieldMap;
use rule_property_core::NAMESPACE_SEPARATOR;
use rule_property_core::PropertyDescriptorField;
use rule_property_core::PropertyError;
use rule_property_core::TypeKind;
use rule_property_core::validate_qualified_name;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "rule-properties.toml";
/// Environment variable used to override the config path.
pub const CONFIG_ENV_VAR: &str = "RULE_PROPERTY_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a single path component.
pub(crate) const MAX_PATH_COMPONENT_LENGTH: usize = 255;
/// Maximum total path length.
pub(crate) const MAX_TOTAL_PATH_LENGTH: usize = 4096;
/// Maximum number of declared catalog types.
pub(crate) const MAX_CATALOG_TYPES: usize = 4096;
/// Maximum number of declared aliases.
pub(crate) const MAX_CATALOG_ALIASES: usize = 1024;
/// Maximum number of property definitions.
pub(crate) const MAX_PROPERTIES: usize = 1024;
/// Suffix marking an array type name.
const ARRAY_SUFFIX: &str = "[]";

// ============================================================================
// SECTION: Configuration Types
// ============================================================================

/// Rule property catalog configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RulePropertyConfig {
    /// Known types and aliases.
    #[serde(default)]
    pub catalog: CatalogConfig,
    /// Property definitions.
    #[serde(default)]
    pub properties: Vec<PropertyConfig>,
    /// Audit sink configuration.
    #[serde(default)]
    pub audit: AuditConfig,
}

impl RulePropertyConfig {
    /// Loads configuration from disk using the default resolution rules.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when loading or validation fails.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let resolved = resolve_path(path)?;
        validate_path(&resolved)?;
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        Self::from_toml(content)
    }

    /// Parses and validates configuration from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when parsing or validation fails.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.catalog.validate()?;
        self.audit.validate()?;
        if self.properties.len() > MAX_PROPERTIES {
            return Err(ConfigError::Invalid("too many properties".to_string()));
        }
        let mut names = BTreeSet::new();
        for property in &self.properties {
            let fields = property.field_map()?;
            let name = fields.get(PropertyDescriptorField::Name).map(str::trim).unwrap_or_default();
            if name.is_empty() {
                return Err(ConfigError::Invalid(
                    "properties.fields.name must be non-empty".to_string(),
                ));
            }
            if !names.insert(name.to_string()) {
                return Err(ConfigError::Invalid(format!("duplicate property name: {name}")));
            }
        }
        Ok(())
    }
}

/// Known types and aliases.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogConfig {
    /// Types resolvable by qualified name.
    #[serde(default)]
    pub types: Vec<TypeEntryConfig>,
    /// Short names mapped to declared type names.
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
}

impl CatalogConfig {
    /// Validates declared types and alias targets. An alias may not shadow a
    /// declared type other than itself.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.types.len() > MAX_CATALOG_TYPES {
            return Err(ConfigError::Invalid("too many catalog types".to_string()));
        }
        if self.aliases.len() > MAX_CATALOG_ALIASES {
            return Err(ConfigError::Invalid("too many catalog aliases".to_string()));
        }
        let mut declared = BTreeSet::new();
        for entry in &self.types {
            entry.validate()?;
            if !declared.insert(entry.name.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "duplicate catalog type: {}",
                    entry.name
                )));
            }
        }
        for (alias, target) in &self.aliases {
            if alias.trim().is_empty() || alias.chars().any(char::is_whitespace) {
                return Err(ConfigError::Invalid(format!(
                    "catalog.aliases key must be non-empty without whitespace: '{alias}'"
                )));
            }
            if !declared.contains(target.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "catalog.aliases.{alias} targets undeclared type: {target}"
                )));
            }
            if alias != target && declared.contains(alias.as_str()) {
                return Err(ConfigError::Invalid(format!(
                    "catalog.aliases.{alias} shadows declared type {alias}"
                )));
            }
        }
        Ok(())
    }
}

/// Declared type entry.
#[derive(Debug, Clone, Deserialize)]
pub struct TypeEntryConfig {
    /// Fully-qualified type name.
    pub name: String,
    /// Type classification.
    #[serde(default)]
    pub kind: TypeKind,
}

impl TypeEntryConfig {
    /// Validates name syntax and kind consistency.
    fn validate(&self) -> Result<(), ConfigError> {
        if validate_qualified_name(&self.name).is_err() {
            return Err(ConfigError::Invalid(format!(
                "catalog.types.name is not a valid qualified name: '{}'",
                self.name
            )));
        }
        if self.kind == TypeKind::Primitive && self.name.contains(NAMESPACE_SEPARATOR) {
            return Err(ConfigError::Invalid(format!(
                "catalog.types.kind=primitive does not allow a namespace: {}",
                self.name
            )));
        }
        let is_array_name = self.name.ends_with(ARRAY_SUFFIX);
        if is_array_name != (self.kind == TypeKind::Array) {
            return Err(ConfigError::Invalid(format!(
                "catalog.types.kind={} does not match name {}",
                self.kind.as_str(),
                self.name
            )));
        }
        Ok(())
    }
}

/// Property definition entry.
#[derive(Debug, Clone, Deserialize)]
pub struct PropertyConfig {
    /// True for delimited multi-valued properties.
    #[serde(default)]
    pub multi: bool,
    /// Raw descriptor fields keyed by field label.
    pub fields: BTreeMap<String, String>,
}

impl PropertyConfig {
    /// Converts raw field labels into a typed field map.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Invalid`] for unknown field labels.
    pub fn field_map(&self) -> Result<FieldMap, ConfigError> {
        let mut fields = FieldMap::new();
        for (label, value) in &self.fields {
            let field = label
                .parse::<PropertyDescriptorField>()
                .map_err(|err| ConfigError::Invalid(format!("properties.fields: {err}")))?;
            fields.insert(field, value.as_str());
        }
        Ok(fields)
    }
}

/// Audit sink selection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditSinkKind {
    /// Discard audit events.
    #[default]
    None,
    /// JSON lines on stderr.
    Stderr,
    /// JSON lines appended to a file.
    File,
}

/// Audit configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuditConfig {
    /// Sink selection.
    #[serde(default)]
    pub sink: AuditSinkKind,
    /// Log file path (file sink only).
    #[serde(default)]
    pub path: Option<PathBuf>,
}

impl AuditConfig {
    /// Validates sink and path consistency.
    fn validate(&self) -> Result<(), ConfigError> {
        match (self.sink, &self.path) {
            (AuditSinkKind::File, None) => {
                Err(ConfigError::Invalid("audit.sink=file requires audit.path".to_string()))
            }
            (AuditSinkKind::File, Some(path)) => {
                validate_path_string("audit.path", &path.to_string_lossy())
            }
            (_, Some(_)) => {
                Err(ConfigError::Invalid("audit.path only allowed when sink=file".to_string()))
            }
            (_, None) => Ok(()),
        }
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
    /// A property definition failed descriptor construction.
    #[error("invalid property {name}: {source}")]
    Property {
        /// Property name.
        name: String,
        /// Descriptor error.
        source: PropertyError,
    },
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path from CLI or environment defaults.
fn resolve_path(path: Option<&Path>) -> Result<PathBuf, ConfigError> {
    if let Some(path) = path {
        return Ok(path.to_path_buf());
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        if env_path.len() > MAX_TOTAL_PATH_LENGTH {
            return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
        }
        return Ok(PathBuf::from(env_path));
    }
    Ok(PathBuf::from(DEFAULT_CONFIG_NAME))
}

/// Validates the resolved path against security limits.
fn validate_path(path: &Path) -> Result<(), ConfigError> {
    let text = path.to_string_lossy();
    if text.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid("config path exceeds max length".to_string()));
    }
    for component in path.components() {
        let value = component.as_os_str().to_string_lossy();
        if value.len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid("config path component too long".to_string()));
        }
    }
    Ok(())
}

/// Validates a path string against length constraints.
fn validate_path_string(field: &str, value: &str) -> Result<(), ConfigError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(ConfigError::Invalid(format!("{field} must be non-empty")));
    }
    if trimmed.len() > MAX_TOTAL_PATH_LENGTH {
        return Err(ConfigError::Invalid(format!("{field} exceeds max length")));
    }
    for component in Path::new(trimmed).components() {
        if component.as_os_str().len() > MAX_PATH_COMPONENT_LENGTH {
            return Err(ConfigError::Invalid(format!("{field} path component too long")));
        }
    }
    Ok(())
}
