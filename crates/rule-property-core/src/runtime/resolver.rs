// crates/rule-property-core/src/runtime/resolver.rs
// ============================================================================
// Module: Type Resolver
// Description: Resolution of raw type names through aliases then a loader.
// Purpose: Provide the single rejection path for unknown type names.
// Dependencies: crate::{audit, core, interfaces}
// ============================================================================

//! ## Overview
//! [`TypeResolver`] resolves a raw string into an optional [`TypeHandle`]:
//! empty input yields the absent value, an alias hit short-circuits, and any
//! loader failure becomes [`PropertyError::TypeResolution`]. Every attempt is
//! recorded on the configured audit sink.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use crate::audit::AuditOutcome;
use crate::audit::NoopAuditSink;
use crate::audit::PropertyAuditSink;
use crate::audit::ResolutionSource;
use crate::audit::TypeResolutionEvent;
use crate::core::PropertyError;
use crate::core::TypeHandle;
use crate::interfaces::AliasTable;
use crate::interfaces::TypeLoader;

// ============================================================================
// SECTION: Resolver
// ============================================================================

/// Resolves raw type names using injected collaborators.
///
/// # Invariants
/// - Collaborators are only read, never mutated.
/// - The loader is not consulted when the alias table has an entry.
#[derive(Clone)]
pub struct TypeResolver {
    /// Fast alias lookup.
    aliases: Arc<dyn AliasTable>,
    /// General type loader fallback.
    loader: Arc<dyn TypeLoader>,
    /// Audit sink for resolution events.
    audit: Arc<dyn PropertyAuditSink>,
}

impl TypeResolver {
    /// Creates a resolver with a no-op audit sink.
    #[must_use]
    pub fn new(aliases: Arc<dyn AliasTable>, loader: Arc<dyn TypeLoader>) -> Self {
        Self {
            aliases,
            loader,
            audit: Arc::new(NoopAuditSink),
        }
    }

    /// Returns the resolver with `audit` as its audit sink.
    #[must_use]
    pub fn with_audit(mut self, audit: Arc<dyn PropertyAuditSink>) -> Self {
        self.audit = audit;
        self
    }

    /// Returns the configured audit sink.
    #[must_use]
    pub fn audit(&self) -> &Arc<dyn PropertyAuditSink> {
        &self.audit
    }

    /// Resolves `raw` into a type handle, or `None` when `raw` is blank.
    ///
    /// # Errors
    ///
    /// Returns [`PropertyError::TypeResolution`] when neither the alias table
    /// nor the loader knows the name.
    pub fn class_from(&self, raw: &str) -> Result<Option<TypeHandle>, PropertyError> {
        let name = raw.trim();
        if name.is_empty() {
            self.record(name, ResolutionSource::Absent, AuditOutcome::Ok, None);
            return Ok(None);
        }
        if let Some(handle) = self.aliases.lookup(name) {
            self.record(name, ResolutionSource::Alias, AuditOutcome::Ok, Some(&handle));
            return Ok(Some(handle));
        }
        match self.loader.load(name) {
            Ok(handle) => {
                self.record(name, ResolutionSource::Loader, AuditOutcome::Ok, Some(&handle));
                Ok(Some(handle))
            }
            Err(_) => {
                self.record(name, ResolutionSource::Loader, AuditOutcome::Error, None);
                Err(PropertyError::TypeResolution(name.to_string()))
            }
        }
    }

    /// Records a resolution event.
    fn record(
        &self,
        raw: &str,
        source: ResolutionSource,
        outcome: AuditOutcome,
        handle: Option<&TypeHandle>,
    ) {
        let qualified_name = handle.map(|handle| handle.qualified_name().to_string());
        self.audit.record_resolution(&TypeResolutionEvent::new(raw, source, outcome, qualified_name));
    }
}

impl fmt::Debug for TypeResolver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeResolver").finish_non_exhaustive()
    }
}
