//! Fluent builder for `SearchConfig`
//!
//! Custom domains are collected as raw strings and validated once in
//! `build()`, so a bad entry is reported with its position.

use anyhow::{Context, Result};

use super::types::{OutputMode, SearchConfig};
use crate::registry::DomainRegistry;

#[derive(Debug, Default)]
pub struct SearchConfigBuilder {
    pub(crate) domains: Option<Vec<String>>,
    pub(crate) output: OutputMode,
}

impl SearchConfigBuilder {
    /// Replace the built-in registry. An empty iterator keeps the built-in list.
    #[must_use]
    pub fn domains<I, S>(mut self, domains: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let domains: Vec<String> = domains.into_iter().map(Into::into).collect();
        self.domains = (!domains.is_empty()).then_some(domains);
        self
    }

    #[must_use]
    pub fn output(mut self, output: OutputMode) -> Self {
        self.output = output;
        self
    }

    /// Validate and build the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if a custom domain entry is blank.
    pub fn build(self) -> Result<SearchConfig> {
        let registry = match self.domains {
            Some(domains) => {
                DomainRegistry::new(&domains).context("Invalid --domain configuration")?
            }
            None => DomainRegistry::default(),
        };

        Ok(SearchConfig {
            registry,
            output: self.output,
        })
    }
}
