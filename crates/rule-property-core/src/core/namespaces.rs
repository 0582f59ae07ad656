// crates/rule-property-core/src/core/namespaces.rs
// ============================================================================
// Module: Legal Namespaces
// Description: Normalized allow-list of namespace prefixes.
// Purpose: Decide namespace membership for packaged property values.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! [`LegalNamespaces`] holds trimmed, de-duplicated prefixes in their original
//! order. An empty list imposes no restriction. Membership is a plain string
//! prefix test against each entry.

// ============================================================================
// SECTION: Imports
// ============================================================================

use serde::Serialize;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Ordered allow-list of namespace prefixes.
///
/// # Invariants
/// - Entries are non-empty, trimmed, and unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct LegalNamespaces(Vec<String>);

impl LegalNamespaces {
    /// Returns an unrestricted allow-list.
    #[must_use]
    pub const fn unrestricted() -> Self {
        Self(Vec::new())
    }

    /// Normalizes raw prefixes: trims, drops empties, and drops duplicates.
    #[must_use]
    pub fn normalize<I, S>(raw: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: Vec<String> = Vec::new();
        for candidate in raw {
            let trimmed = candidate.as_ref().trim();
            if trimmed.is_empty() || entries.iter().any(|entry| entry == trimmed) {
                continue;
            }
            entries.push(trimmed.to_string());
        }
        Self(entries)
    }

    /// Splits a delimited string into a normalized allow-list.
    #[must_use]
    pub fn split(raw: &str, delimiter: char) -> Self {
        Self::normalize(raw.split(delimiter))
    }

    /// Returns true when no restriction applies.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true when `package_name` starts with any legal prefix.
    #[must_use]
    pub fn permits(&self, package_name: &str) -> bool {
        self.0.is_empty() || self.0.iter().any(|prefix| package_name.starts_with(prefix.as_str()))
    }

    /// Returns the prefixes in order.
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Joins the prefixes with `delimiter` (no escaping).
    #[must_use]
    pub fn join(&self, delimiter: char) -> String {
        self.0.join(delimiter.to_string().as_str())
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_dedupes_in_order() {
        let legal = LegalNamespaces::normalize([" com.acme ", "", "org.example", "com.acme", "  "]);
        assert_eq!(legal.as_slice(), ["com.acme".to_string(), "org.example".to_string()]);
    }

    #[test]
    fn empty_list_permits_everything() {
        let legal = LegalNamespaces::split("  |  ", '|');
        assert!(legal.is_unrestricted());
        assert!(legal.permits("anything.at.All"));
    }

    #[test]
    fn permits_uses_prefix_match() {
        let legal = LegalNamespaces::split("com.acme|org.example.rules", '|');
        assert!(legal.permits("com.acme.Widget"));
        assert!(legal.permits("org.example.rules.Rule"));
        assert!(!legal.permits("org.example.Other"));
    }

    #[test]
    fn join_uses_delimiter() {
        let legal = LegalNamespaces::normalize(["a.b", "c.d"]);
        assert_eq!(legal.join(','), "a.b,c.d");
    }
}
