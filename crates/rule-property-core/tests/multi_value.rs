// crates/rule-property-core/tests/multi_value.rs
// =============================================================================
// Module: Multi-Value Property Tests
// Description: Delimited type lists, validation, and item limits.
// Purpose: Ensure multi-valued descriptors share packaged validation.
// =============================================================================

//! Multi-valued type property tests for rule-property-core.

#![allow(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::use_debug,
    reason = "Test-only assertions and helpers are permitted."
)]

use rule_property_core::DescriptorCore;
use rule_property_core::LegalNamespaces;
use rule_property_core::MAX_MULTI_VALUE_ITEMS;
use rule_property_core::MAX_PARSE_ERROR_RAW_CHARS;
use rule_property_core::PackageRules;
use rule_property_core::PropertyDescriptor;
use rule_property_core::PropertyError;
use rule_property_core::TypeHandle;
use rule_property_core::TypeMultiProperty;

mod common;

fn property(legal: &[&str], delimiter: char) -> TypeMultiProperty {
    let rules =
        PackageRules::new(LegalNamespaces::normalize(legal)).with_delimiter(delimiter).unwrap();
    TypeMultiProperty::new(
        DescriptorCore::new("checkedTypes", "", 0.0).unwrap(),
        Vec::new(),
        rules,
        common::resolver(),
    )
    .unwrap()
}

#[test]
fn splits_trims_and_drops_blank_items() {
    let property = property(&[], ',');
    let value = property.create_from(" com.acme.Widget , ,int,").expect("parse");
    assert_eq!(value, vec![TypeHandle::reference("com.acme.Widget"), TypeHandle::primitive("int")]);
    assert_eq!(property.as_string(&value), "com.acme.Widget,int");
    assert!(property.is_multi_value());
}

#[test]
fn blank_input_yields_empty_list() {
    let property = property(&["com.acme"], '|');
    assert_eq!(property.create_from("  "), Ok(Vec::new()));
    assert_eq!(property.as_string(&Vec::new()), "");
}

#[test]
fn first_unknown_item_fails_the_whole_value() {
    let property = property(&[], '|');
    assert_eq!(
        property.create_from("com.acme.Widget|com.acme.Ghost|also.Missing"),
        Err(PropertyError::TypeResolution("com.acme.Ghost".to_string()))
    );
}

#[test]
fn violations_list_each_offending_item() {
    let property = property(&["com.acme"], '|');
    let err = property.value_from("org.other.Widget|com.acme.Widget|java.util.List").unwrap_err();
    assert_eq!(
        err.to_string(),
        "disallowed type: org.other.Widget, java.util.List (allowed: com.acme)"
    );
}

#[test]
fn illegal_default_item_fails_construction() {
    let rules = PackageRules::new(LegalNamespaces::normalize(["com.acme"]));
    let err = TypeMultiProperty::from_default_str(
        DescriptorCore::new("checkedTypes", "", 0.0).unwrap(),
        "com.acme.Widget|org.other.Widget",
        rules,
        common::resolver(),
    )
    .unwrap_err();
    assert_eq!(err.kind(), "namespace_violation");
}

#[test]
fn too_many_items_is_a_parse_error() {
    let property = property(&[], '|');
    let raw = vec!["int"; MAX_MULTI_VALUE_ITEMS + 1].join("|");
    assert!(matches!(property.create_from(&raw), Err(PropertyError::ValueParse { .. })));
    let raw = vec!["int"; MAX_MULTI_VALUE_ITEMS].join("|");
    assert_eq!(property.create_from(&raw).map(|items| items.len()), Ok(MAX_MULTI_VALUE_ITEMS));
}

#[test]
fn parse_error_quotes_a_bounded_prefix_of_the_input() {
    let property = property(&[], '|');
    let raw = vec!["int"; MAX_MULTI_VALUE_ITEMS + 1].join("|");
    match property.create_from(&raw) {
        Err(PropertyError::ValueParse {
            raw: quoted, ..
        }) => {
            assert_eq!(quoted.chars().count(), MAX_PARSE_ERROR_RAW_CHARS);
            assert!(raw.starts_with(&quoted));
        }
        other => panic!("expected a parse error, got {other:?}"),
    }
}

#[test]
fn delimiter_inside_values_is_not_escaped() {
    let property = property(&[], '|');
    let value = vec![TypeHandle::reference("com.acme.Widget"), TypeHandle::reference("int")];
    let text = property.as_string(&value);
    assert_eq!(text, "com.acme.Widget|int");
    assert_eq!(text.split('|').count(), value.len());
}
