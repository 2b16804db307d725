//! Search shell
//!
//! Holds the current search term and wires the two triggers (explicit
//! submit and the Enter key) to build-then-navigate. An empty term is
//! not an error here: the shell logs it and does nothing.

use anyhow::Result;
use tracing::{info, warn};

use crate::navigator::Navigator;
use crate::query::{BuildError, build_search_url};
use crate::registry::DomainRegistry;

/// Key press forwarded from the input field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Enter,
    Char(char),
    Other,
}

/// What a trigger did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchOutcome {
    /// URL was built and handed to the navigator
    Navigated(String),
    /// Search term was empty; no navigation
    Skipped,
    /// Key was not a trigger
    Ignored,
}

pub struct SearchShell<N: Navigator> {
    search_term: String,
    registry: DomainRegistry,
    navigator: N,
}

impl<N: Navigator> SearchShell<N> {
    pub fn new(registry: DomainRegistry, navigator: N) -> Self {
        Self {
            search_term: String::new(),
            registry,
            navigator,
        }
    }

    /// Input-change event: replace the current search term.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.search_term = text.into();
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.search_term
    }

    #[must_use]
    pub fn registry(&self) -> &DomainRegistry {
        &self.registry
    }

    #[must_use]
    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Key-press event. Only Enter triggers a search.
    ///
    /// # Errors
    ///
    /// Returns an error if the navigator fails.
    pub fn handle_key(&mut self, key: Key) -> Result<SearchOutcome> {
        match key {
            Key::Enter => self.submit(),
            Key::Char(_) | Key::Other => Ok(SearchOutcome::Ignored),
        }
    }

    /// Explicit search action.
    ///
    /// # Errors
    ///
    /// Returns an error if the navigator fails. An empty search term yields
    /// `SearchOutcome::Skipped`, not an error.
    pub fn submit(&mut self) -> Result<SearchOutcome> {
        let url = match build_search_url(&self.search_term, &self.registry) {
            Ok(url) => url,
            Err(BuildError::EmptyQuery) => {
                warn!("Search term is empty.");
                return Ok(SearchOutcome::Skipped);
            }
        };

        info!(
            "Searching {} domains for '{}'",
            self.registry.len(),
            self.search_term
        );
        self.navigator.navigate(&url)?;
        Ok(SearchOutcome::Navigated(url))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigator::RecordingNavigator;

    fn shell() -> SearchShell<RecordingNavigator> {
        let registry = DomainRegistry::new(["example.com"]).unwrap();
        SearchShell::new(registry, RecordingNavigator::new())
    }

    #[test]
    fn typing_does_not_navigate() {
        let mut shell = shell();
        shell.set_query("g");
        assert_eq!(shell.handle_key(Key::Char('g')).unwrap(), SearchOutcome::Ignored);
        assert_eq!(shell.handle_key(Key::Other).unwrap(), SearchOutcome::Ignored);
        assert!(shell.navigator().urls().is_empty());
    }

    #[test]
    fn empty_term_is_skipped() {
        let mut shell = shell();
        shell.set_query("   ");
        assert_eq!(shell.submit().unwrap(), SearchOutcome::Skipped);
        assert!(shell.navigator().urls().is_empty());
    }
}
