// crates/rule-property-core/tests/common/mod.rs
// =============================================================================
// Module: Core Test Helpers
// Description: Shared fixtures for descriptor and resolver tests.
// Purpose: Provide fake collaborators with observable call counts.
// =============================================================================

#![allow(dead_code, reason = "Test helpers are selectively used across suites.")]

use std::sync::Arc;
use std::sync::Mutex;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;

use rule_property_core::DescriptorAuditEvent;
use rule_property_core::LoadError;
use rule_property_core::PropertyAuditSink;
use rule_property_core::StaticAliasTable;
use rule_property_core::StaticTypeLoader;
use rule_property_core::TypeHandle;
use rule_property_core::TypeLoader;
use rule_property_core::TypeResolutionEvent;
use rule_property_core::TypeResolver;

/// Qualified names known to the fixture loader.
pub const KNOWN_TYPES: &[&str] = &[
    "com.acme.Widget",
    "com.acme.widgets.Gear",
    "com.acmecorp.Tool",
    "org.other.Widget",
    "java.lang.String",
    "java.util.List",
];

/// Loader wrapper counting every call.
pub struct CountingLoader {
    /// Wrapped loader.
    inner: StaticTypeLoader,
    /// Number of load calls observed.
    calls: AtomicUsize,
}

impl CountingLoader {
    /// Returns the number of load calls observed.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TypeLoader for CountingLoader {
    fn load(&self, qualified_name: &str) -> Result<TypeHandle, LoadError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.load(qualified_name)
    }
}

/// Audit sink retaining every event.
#[derive(Default)]
pub struct RecordingAudit {
    /// Recorded resolution events.
    pub resolutions: Mutex<Vec<TypeResolutionEvent>>,
    /// Recorded descriptor events.
    pub descriptors: Mutex<Vec<DescriptorAuditEvent>>,
}

impl PropertyAuditSink for RecordingAudit {
    fn record_resolution(&self, event: &TypeResolutionEvent) {
        self.resolutions.lock().expect("lock").push(event.clone());
    }

    fn record_descriptor(&self, event: &DescriptorAuditEvent) {
        self.descriptors.lock().expect("lock").push(event.clone());
    }
}

/// Returns the fixture alias table (`int`, `String`).
pub fn aliases() -> StaticAliasTable {
    [
        ("int".to_string(), TypeHandle::primitive("int")),
        ("String".to_string(), TypeHandle::reference("java.lang.String")),
    ]
    .into_iter()
    .collect()
}

/// Returns a counting loader over [`KNOWN_TYPES`].
pub fn counting_loader() -> Arc<CountingLoader> {
    Arc::new(CountingLoader {
        inner: KNOWN_TYPES.iter().copied().map(TypeHandle::reference).collect(),
        calls: AtomicUsize::new(0),
    })
}

/// Returns a resolver over the fixture collaborators.
pub fn resolver() -> TypeResolver {
    TypeResolver::new(Arc::new(aliases()), counting_loader())
}

/// Returns a resolver plus handles to its loader and audit sink.
pub fn observed_resolver() -> (TypeResolver, Arc<CountingLoader>, Arc<RecordingAudit>) {
    let loader = counting_loader();
    let audit = Arc::new(RecordingAudit::default());
    let resolver =
        TypeResolver::new(Arc::new(aliases()), loader.clone()).with_audit(audit.clone());
    (resolver, loader, audit)
}
