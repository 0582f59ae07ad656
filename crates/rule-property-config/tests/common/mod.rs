// crates/rule-property-config/tests/common/mod.rs
// =============================================================================
// Module: Config Test Helpers
// Description: Shared TOML fixtures for config suites.
// Purpose: Keep catalog fixtures consistent across tests.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use rule_property_config::ConfigError;
use rule_property_config::RulePropertyConfig;

/// Result type used by config tests.
pub type TestResult = Result<(), String>;

/// Catalog with aliases, a primitive, and an array type.
pub const CATALOG: &str = r#"
[catalog]
types = [
    { name = "com.acme.Widget" },
    { name = "com.acme.widgets.Gear" },
    { name = "org.other.Widget" },
    { name = "java.lang.String" },
    { name = "int", kind = "primitive" },
    { name = "com.acme.Widget[]", kind = "array" },
]

[catalog.aliases]
String = "java.lang.String"
int = "int"
"#;

/// Two property definitions over [`CATALOG`].
pub const PROPERTIES: &str = r#"
[[properties]]
fields = { name = "target_type", description = "Type the rule inspects.", default_value = "com.acme.Widget", legal_packages = "com.acme", ui_order = "2" }

[[properties]]
multi = true
fields = { name = "ignored_types", default_value = "com.acme.Widget,org.other.Widget", delimiter = "," }
"#;

/// Parses the concatenation of the given fragments.
pub fn parse(fragments: &[&str]) -> Result<RulePropertyConfig, ConfigError> {
    RulePropertyConfig::from_toml(&fragments.concat())
}

/// Asserts that a result is an error whose message contains `needle`.
pub fn assert_invalid<T>(result: Result<T, ConfigError>, needle: &str) -> TestResult {
    match result {
        Err(error) => {
            let message = error.to_string();
            if message.contains(needle) {
                Ok(())
            } else {
                Err(format!("error '{message}' did not contain '{needle}'"))
            }
        }
        Ok(_) => Err("expected invalid config".to_string()),
    }
}
