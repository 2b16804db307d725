pub mod config;
pub mod navigator;
pub mod query;
pub mod registry;
pub mod shell;
pub mod utils;

pub use config::{OutputMode, SearchConfig, SearchConfigBuilder};
pub use navigator::{Navigator, PrintNavigator, RecordingNavigator, SystemBrowser};
pub use query::{
    BuildError, DecodeError, DecodedQuery, build_search_url, composite_query, decode_search_url,
    encode_component, is_blank_query, site_clause,
};
pub use registry::{Domain, DomainRegistry, RegistryError};
pub use shell::{Key, SearchOutcome, SearchShell};
pub use utils::{BUILTIN_DOMAINS, SEARCH_BASE_URL};

/// Build the search URL for `query` over the built-in domain list.
///
/// # Errors
///
/// Returns `BuildError::EmptyQuery` for an empty or whitespace-only query.
pub fn search_url(query: &str) -> Result<String, BuildError> {
    build_search_url(query, DomainRegistry::builtin())
}
