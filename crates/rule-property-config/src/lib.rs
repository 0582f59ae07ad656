// crates/rule-property-config/src/lib.rs
// ============================================================================
// Module: Rule Property Config Library
// Description: Canonical catalog config model, validation, and builders.
// Purpose: Single source of truth for rule-properties.toml semantics.
// Dependencies: rule-property-core, serde, toml
// ============================================================================

//! ## Overview
//! `rule-property-config` defines the TOML catalog that injects known types
//! and aliases into the resolver, declares property definitions, and selects
//! the audit sink. Validation is strict and fail-closed.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod catalog;
pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use catalog::ConfiguredProperty;
pub use config::*;
