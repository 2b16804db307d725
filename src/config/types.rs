//! Core configuration types for domain search

use serde::{Deserialize, Serialize};

use crate::registry::DomainRegistry;

/// Where a finished search URL goes
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputMode {
    /// Open in the default browser
    #[default]
    Browser,
    /// Print to stdout
    Print,
}

/// Resolved configuration for a search session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchConfig {
    pub(crate) registry: DomainRegistry,
    pub(crate) output: OutputMode,
}

impl SearchConfig {
    #[must_use]
    pub fn builder() -> super::SearchConfigBuilder {
        super::SearchConfigBuilder::default()
    }

    #[must_use]
    pub fn registry(&self) -> &DomainRegistry {
        &self.registry
    }

    #[must_use]
    pub fn output(&self) -> OutputMode {
        self.output
    }
}
