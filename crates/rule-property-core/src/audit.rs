// crates/rule-property-core/src/audit.rs
// ============================================================================
// Module: Rule Property Audit Logging
// Description: Structured audit events for type resolution and descriptor builds.
// Purpose: Emit JSON-line audit logs without hard logging dependencies.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! This module defines audit event payloads and sinks for resolution and
//! factory activity. Sinks are lightweight so hosts can route events to their
//! preferred logging pipeline. Raw inputs are truncated before recording.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fs::OpenOptions;
use std::io;
use std::io::Write;
use std::path::Path;
use std::sync::Mutex;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use serde::Serialize;

use crate::core::PropertyError;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Maximum number of characters of raw input retained in an event.
pub const MAX_AUDIT_RAW_CHARS: usize = 256;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Which collaborator produced a resolution result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ResolutionSource {
    /// Input was empty; the absent value was produced.
    Absent,
    /// Resolved through the alias table.
    Alias,
    /// Resolved (or rejected) by the type loader.
    Loader,
}

/// Outcome of an audited operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AuditOutcome {
    /// Operation succeeded.
    Ok,
    /// Operation failed.
    Error,
}

/// Type resolution audit event payload.
#[derive(Debug, Clone, Serialize)]
pub struct TypeResolutionEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Raw input (truncated).
    pub raw: String,
    /// Collaborator that produced the result.
    pub source: ResolutionSource,
    /// Operation outcome.
    pub outcome: AuditOutcome,
    /// Resolved qualified name when successful.
    pub qualified_name: Option<String>,
}

impl TypeResolutionEvent {
    /// Creates a new resolution event with a consistent timestamp.
    #[must_use]
    pub fn new(
        raw: &str,
        source: ResolutionSource,
        outcome: AuditOutcome,
        qualified_name: Option<String>,
    ) -> Self {
        Self {
            event: "type_resolution",
            timestamp_ms: now_ms(),
            raw: truncate_raw(raw),
            source,
            outcome,
            qualified_name,
        }
    }
}

/// Descriptor construction audit event payload.
#[derive(Debug, Clone, Serialize)]
pub struct DescriptorAuditEvent {
    /// Event identifier.
    pub event: &'static str,
    /// Event timestamp (milliseconds since epoch).
    pub timestamp_ms: u128,
    /// Descriptor name when present in the input.
    pub name: Option<String>,
    /// Value kind label of the factory.
    pub value_kind: &'static str,
    /// Operation outcome.
    pub outcome: AuditOutcome,
    /// Error kind label on failure.
    pub error_kind: Option<&'static str>,
    /// Error message on failure.
    pub message: Option<String>,
}

impl DescriptorAuditEvent {
    /// Creates a descriptor event from a construction result.
    #[must_use]
    pub fn new(
        name: Option<&str>,
        value_kind: &'static str,
        error: Option<&PropertyError>,
    ) -> Self {
        Self {
            event: "descriptor_build",
            timestamp_ms: now_ms(),
            name: name.map(truncate_raw),
            value_kind,
            outcome: if error.is_some() { AuditOutcome::Error } else { AuditOutcome::Ok },
            error_kind: error.map(PropertyError::kind),
            message: error.map(ToString::to_string),
        }
    }
}

// ============================================================================
// SECTION: Trait
// ============================================================================

/// Audit sink for resolution and descriptor events.
pub trait PropertyAuditSink: Send + Sync {
    /// Record a type resolution event.
    fn record_resolution(&self, event: &TypeResolutionEvent);

    /// Record a descriptor construction event.
    fn record_descriptor(&self, _event: &DescriptorAuditEvent) {}
}

/// Audit sink that logs JSON lines to stderr.
pub struct StderrAuditSink;

impl PropertyAuditSink for StderrAuditSink {
    fn record_resolution(&self, event: &TypeResolutionEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }

    fn record_descriptor(&self, event: &DescriptorAuditEvent) {
        if let Ok(payload) = serde_json::to_string(event) {
            let _ = writeln!(std::io::stderr(), "{payload}");
        }
    }
}

/// Audit sink that logs JSON lines to a file.
pub struct FileAuditSink {
    /// File handle used for append-only logging.
    file: Mutex<std::fs::File>,
}

impl FileAuditSink {
    /// Opens the audit log file in append mode.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn new(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;
        Ok(Self {
            file: Mutex::new(file),
        })
    }

    /// Appends one serialized payload.
    fn append<T: Serialize>(&self, event: &T) {
        if let Ok(payload) = serde_json::to_string(event)
            && let Ok(mut file) = self.file.lock()
        {
            let _ = writeln!(file, "{payload}");
            let _ = file.flush();
        }
    }
}

impl PropertyAuditSink for FileAuditSink {
    fn record_resolution(&self, event: &TypeResolutionEvent) {
        self.append(event);
    }

    fn record_descriptor(&self, event: &DescriptorAuditEvent) {
        self.append(event);
    }
}

/// No-op audit sink.
pub struct NoopAuditSink;

impl PropertyAuditSink for NoopAuditSink {
    fn record_resolution(&self, _event: &TypeResolutionEvent) {}

    fn record_descriptor(&self, _event: &DescriptorAuditEvent) {}
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Returns the current time in milliseconds since epoch.
fn now_ms() -> u128 {
    SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis()
}

/// Truncates raw input to [`MAX_AUDIT_RAW_CHARS`] characters.
fn truncate_raw(raw: &str) -> String {
    raw.chars().take(MAX_AUDIT_RAW_CHARS).collect()
}
