//! Domain registry
//!
//! An ordered, immutable list of the sites a search is restricted to.
//! The built-in registry is created once on first use and shared for the
//! lifetime of the process; custom registries are validated up front and
//! never mutated afterwards.

mod errors;

pub use errors::RegistryError;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::utils::BUILTIN_DOMAINS;

static BUILTIN: Lazy<DomainRegistry> = Lazy::new(|| DomainRegistry {
    domains: BUILTIN_DOMAINS
        .iter()
        .map(|d| Domain((*d).to_string()))
        .collect(),
});

/// A site or site-scoped path, e.g. `es.hu` or `www.youtube.com/@SzokyKonyhaja`.
///
/// **INVARIANT:** never empty or whitespace-only.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Domain(String);

impl Domain {
    /// Create a domain, trimming surrounding whitespace.
    ///
    /// # Errors
    ///
    /// Returns `RegistryError::EmptyDomain` if nothing remains after trimming.
    pub fn new(value: impl AsRef<str>) -> Result<Self, RegistryError> {
        Self::at(value.as_ref(), 0)
    }

    fn at(value: &str, index: usize) -> Result<Self, RegistryError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(RegistryError::EmptyDomain { index });
        }
        Ok(Self(trimmed.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Domain {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Ordered sequence of domains. Iteration order is clause order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<String>", into = "Vec<String>")]
pub struct DomainRegistry {
    domains: Vec<Domain>,
}

impl DomainRegistry {
    /// The built-in site list.
    #[must_use]
    pub fn builtin() -> &'static DomainRegistry {
        &BUILTIN
    }

    /// Build a registry from caller-supplied entries, preserving order.
    ///
    /// # Errors
    ///
    /// - `RegistryError::Empty` if no entries are given
    /// - `RegistryError::EmptyDomain` for a blank entry (index is 0-based)
    pub fn new<I, S>(entries: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let domains = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| Domain::at(entry.as_ref(), index))
            .collect::<Result<Vec<_>, _>>()?;

        if domains.is_empty() {
            return Err(RegistryError::Empty);
        }

        Ok(Self { domains })
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Domain> {
        self.domains.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.domains.len()
    }

    /// Always false for a constructed registry.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.domains.is_empty()
    }

    #[must_use]
    pub fn as_strs(&self) -> Vec<&str> {
        self.domains.iter().map(Domain::as_str).collect()
    }

    /// Human-readable list of the searched sites, comma separated.
    #[must_use]
    pub fn summary(&self) -> String {
        self.as_strs().join(", ")
    }
}

impl Default for DomainRegistry {
    fn default() -> Self {
        BUILTIN.clone()
    }
}

impl<'a> IntoIterator for &'a DomainRegistry {
    type Item = &'a Domain;
    type IntoIter = std::slice::Iter<'a, Domain>;

    fn into_iter(self) -> Self::IntoIter {
        self.domains.iter()
    }
}

impl TryFrom<Vec<String>> for DomainRegistry {
    type Error = RegistryError;

    fn try_from(entries: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(entries)
    }
}

impl From<DomainRegistry> for Vec<String> {
    fn from(registry: DomainRegistry) -> Self {
        registry.domains.into_iter().map(|d| d.0).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_keeps_declared_order() {
        let registry = DomainRegistry::builtin();
        assert_eq!(registry.len(), 8);
        assert_eq!(registry.as_strs(), BUILTIN_DOMAINS.to_vec());
    }

    #[test]
    fn blank_entry_reports_its_index() {
        let err = DomainRegistry::new(["a.com", "  ", "b.com"]).unwrap_err();
        assert_eq!(err, RegistryError::EmptyDomain { index: 1 });
    }

    #[test]
    fn empty_list_is_rejected() {
        let err = DomainRegistry::new(Vec::<String>::new()).unwrap_err();
        assert_eq!(err, RegistryError::Empty);
    }

    #[test]
    fn single_domain_validation() {
        assert_eq!(Domain::new("es.hu").unwrap().to_string(), "es.hu");
        assert!(Domain::new("\t").is_err());
    }

    #[test]
    fn entries_are_trimmed() {
        let registry = DomainRegistry::new([" x.com "]).unwrap();
        assert_eq!(registry.as_strs(), vec!["x.com"]);
    }

    #[test]
    fn deserialize_validates_entries() {
        let ok: DomainRegistry = serde_json::from_str(r#"["a.com","b.com"]"#).unwrap();
        assert_eq!(ok.summary(), "a.com, b.com");

        assert!(serde_json::from_str::<DomainRegistry>("[]").is_err());
        assert!(serde_json::from_str::<DomainRegistry>(r#"["a.com",""]"#).is_err());
    }
}
