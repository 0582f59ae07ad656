// crates/rule-property-core/tests/proptest_round_trip.rs
// ============================================================================
// Module: Round-Trip Property-Based Tests
// Description: Property tests for string round-trips and namespace checks.
// Purpose: Detect panics and invariant breaks across generated type names.
// ============================================================================

//! Property-based tests for descriptor serialization invariants.

#![allow(
    clippy::panic,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only assertions and helpers are permitted."
)]

use std::sync::Arc;

use proptest::prelude::*;
use rule_property_core::DescriptorCore;
use rule_property_core::LegalNamespaces;
use rule_property_core::PackageRules;
use rule_property_core::PropertyDescriptor;
use rule_property_core::StaticAliasTable;
use rule_property_core::StaticTypeLoader;
use rule_property_core::TypeHandle;
use rule_property_core::TypeMultiProperty;
use rule_property_core::TypeProperty;
use rule_property_core::TypeResolver;

fn qualified_name_strategy() -> impl Strategy<Value = String> {
    prop::collection::vec("[a-z][a-z0-9_]{0,6}", 1 .. 4)
        .prop_flat_map(|segments| ("[A-Z][A-Za-z0-9$]{0,8}", Just(segments)))
        .prop_map(|(simple, segments)| format!("{}.{simple}", segments.join(".")))
}

fn resolver_for(names: &[String]) -> TypeResolver {
    let loader: StaticTypeLoader = names.iter().map(TypeHandle::reference).collect();
    TypeResolver::new(Arc::new(StaticAliasTable::new()), Arc::new(loader))
}

fn single(resolver: TypeResolver, legal: LegalNamespaces) -> TypeProperty {
    TypeProperty::new(
        DescriptorCore::new("generated", "", 0.0).unwrap(),
        None,
        PackageRules::new(legal),
        resolver,
    )
    .unwrap()
}

proptest! {
    #[test]
    fn create_from_inverts_as_string(name in qualified_name_strategy()) {
        let property = single(resolver_for(std::slice::from_ref(&name)), LegalNamespaces::unrestricted());
        let handle = TypeHandle::reference(name.clone());
        let text = property.as_string(&Some(handle.clone()));
        prop_assert_eq!(&text, &name);
        prop_assert_eq!(property.create_from(&text), Ok(Some(handle)));
    }

    #[test]
    fn surrounding_whitespace_is_normalized(
        name in qualified_name_strategy(),
        left in "[ \t]{0,3}",
        right in "[ \t]{0,3}",
    ) {
        let property = single(resolver_for(std::slice::from_ref(&name)), LegalNamespaces::unrestricted());
        let value = property.create_from(&format!("{left}{name}{right}")).unwrap();
        prop_assert_eq!(property.as_string(&value), name);
    }

    #[test]
    fn blank_input_never_errors(blank in "[ \t\r\n]{0,8}") {
        let property = single(resolver_for(&[]), LegalNamespaces::unrestricted());
        prop_assert_eq!(property.create_from(&blank), Ok(None));
    }

    #[test]
    fn own_namespace_is_always_legal(name in qualified_name_strategy()) {
        let handle = TypeHandle::reference(name.clone());
        let namespace = handle.namespace().unwrap().to_string();
        let property = TypeProperty::new(
            DescriptorCore::new("generated", "", 0.0).unwrap(),
            Some(handle),
            PackageRules::new(LegalNamespaces::normalize([namespace])),
            resolver_for(std::slice::from_ref(&name)),
        );
        prop_assert!(property.is_ok());
    }

    #[test]
    fn multi_value_round_trips(names in prop::collection::btree_set(qualified_name_strategy(), 0 .. 6)) {
        let names: Vec<String> = names.into_iter().collect();
        let property = TypeMultiProperty::new(
            DescriptorCore::new("generated", "", 0.0).unwrap(),
            Vec::new(),
            PackageRules::unrestricted(),
            resolver_for(&names),
        )
        .unwrap();
        let handles: Vec<TypeHandle> = names.iter().map(TypeHandle::reference).collect();
        let text = property.as_string(&handles);
        prop_assert_eq!(property.create_from(&text), Ok(handles));
    }
}
