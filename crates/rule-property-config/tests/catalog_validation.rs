//! Catalog, property, and audit validation tests for rule-property-config.
// crates/rule-property-config/tests/catalog_validation.rs
// =============================================================================
// Module: Catalog Validation Tests
// Description: Structural checks on declared types, aliases, and properties.
// Purpose: Ensure invalid catalogs are rejected before any resolver is built.
// =============================================================================

#![allow(clippy::use_debug, reason = "Test failure messages print values.")]

use common::CATALOG;
use common::PROPERTIES;
use common::TestResult;
use common::assert_invalid;
use common::parse;
use rule_property_config::AuditSinkKind;
use rule_property_core::TypeKind;

mod common;

// ============================================================================
// SECTION: Accepted Configurations
// ============================================================================

#[test]
fn empty_config_is_valid() -> TestResult {
    let config = parse(&[""]).map_err(|err| err.to_string())?;
    if !config.catalog.types.is_empty() || !config.properties.is_empty() {
        return Err("expected empty defaults".to_string());
    }
    if config.audit.sink != AuditSinkKind::None {
        return Err("expected audit sink none by default".to_string());
    }
    Ok(())
}

#[test]
fn fixture_catalog_parses_kinds() -> TestResult {
    let config = parse(&[CATALOG, PROPERTIES]).map_err(|err| err.to_string())?;
    let kinds: Vec<TypeKind> = config.catalog.types.iter().map(|entry| entry.kind).collect();
    let expected = vec![
        TypeKind::Reference,
        TypeKind::Reference,
        TypeKind::Reference,
        TypeKind::Reference,
        TypeKind::Primitive,
        TypeKind::Array,
    ];
    if kinds != expected {
        return Err(format!("unexpected kinds: {kinds:?}"));
    }
    if !config.properties[1].multi {
        return Err("second property should be multi-valued".to_string());
    }
    Ok(())
}

// ============================================================================
// SECTION: Catalog Types
// ============================================================================

#[test]
fn rejects_invalid_type_name() -> TestResult {
    assert_invalid(
        parse(&["[catalog]\ntypes = [{ name = \"com..Widget\" }]\n"]),
        "catalog.types.name is not a valid qualified name: 'com..Widget'",
    )
}

#[test]
fn rejects_duplicate_type() -> TestResult {
    assert_invalid(
        parse(&["[catalog]\ntypes = [{ name = \"a.B\" }, { name = \"a.B\" }]\n"]),
        "duplicate catalog type: a.B",
    )
}

#[test]
fn rejects_array_kind_without_suffix() -> TestResult {
    assert_invalid(
        parse(&["[catalog]\ntypes = [{ name = \"a.B\", kind = \"array\" }]\n"]),
        "catalog.types.kind=array does not match name a.B",
    )
}

#[test]
fn rejects_array_suffix_without_array_kind() -> TestResult {
    assert_invalid(
        parse(&["[catalog]\ntypes = [{ name = \"a.B[]\" }]\n"]),
        "catalog.types.kind=reference does not match name a.B[]",
    )
}

#[test]
fn rejects_namespaced_primitive() -> TestResult {
    assert_invalid(
        parse(&["[catalog]\ntypes = [{ name = \"com.acme.int\", kind = \"primitive\" }]\n"]),
        "catalog.types.kind=primitive does not allow a namespace: com.acme.int",
    )
}

// ============================================================================
// SECTION: Aliases
// ============================================================================

#[test]
fn rejects_alias_to_undeclared_type() -> TestResult {
    assert_invalid(
        parse(&["[catalog.aliases]\nWidget = \"com.acme.Widget\"\n"]),
        "catalog.aliases.Widget targets undeclared type: com.acme.Widget",
    )
}

#[test]
fn rejects_alias_key_with_whitespace() -> TestResult {
    assert_invalid(
        parse(&[
            "[catalog]\ntypes = [{ name = \"a.B\" }]\n[catalog.aliases]\n\"my B\" = \"a.B\"\n",
        ]),
        "catalog.aliases key must be non-empty without whitespace",
    )
}

#[test]
fn rejects_alias_shadowing_declared_type() -> TestResult {
    assert_invalid(
        parse(&[
            "[catalog]\ntypes = [{ name = \"com.acme.Widget\" }, { name = \"org.other.Widget\" }]\n",
            "[catalog.aliases]\n\"com.acme.Widget\" = \"org.other.Widget\"\n",
        ]),
        "catalog.aliases.com.acme.Widget shadows declared type com.acme.Widget",
    )
}

#[test]
fn accepts_alias_naming_its_own_target() -> TestResult {
    let config = parse(&["[catalog]\ntypes = [{ name = \"int\", kind = \"primitive\" }]\n\
         [catalog.aliases]\nint = \"int\"\n"])
    .map_err(|err| err.to_string())?;
    if config.catalog.aliases.get("int").map(String::as_str) != Some("int") {
        return Err("self alias should be kept".to_string());
    }
    Ok(())
}

// ============================================================================
// SECTION: Properties
// ============================================================================

#[test]
fn rejects_unknown_field_label() -> TestResult {
    assert_invalid(
        parse(&["[[properties]]\nfields = { name = \"p\", colour = \"red\" }\n"]),
        "properties.fields: unknown property field: colour",
    )
}

#[test]
fn rejects_blank_property_name() -> TestResult {
    assert_invalid(
        parse(&["[[properties]]\nfields = { name = \"  \" }\n"]),
        "properties.fields.name must be non-empty",
    )
}

#[test]
fn rejects_missing_property_name() -> TestResult {
    assert_invalid(
        parse(&["[[properties]]\nfields = { description = \"no name\" }\n"]),
        "properties.fields.name must be non-empty",
    )
}

#[test]
fn rejects_duplicate_property_name() -> TestResult {
    assert_invalid(
        parse(&[
            "[[properties]]\nfields = { name = \"p\" }\n",
            "[[properties]]\nfields = { name = \" p \" }\n",
        ]),
        "duplicate property name: p",
    )
}

// ============================================================================
// SECTION: Audit
// ============================================================================

#[test]
fn file_sink_requires_path() -> TestResult {
    assert_invalid(parse(&["[audit]\nsink = \"file\"\n"]), "audit.sink=file requires audit.path")
}

#[test]
fn path_requires_file_sink() -> TestResult {
    assert_invalid(
        parse(&["[audit]\nsink = \"stderr\"\npath = \"audit.jsonl\"\n"]),
        "audit.path only allowed when sink=file",
    )
}

#[test]
fn rejects_unknown_sink() -> TestResult {
    assert_invalid(parse(&["[audit]\nsink = \"syslog\"\n"]), "config parse error")
}
