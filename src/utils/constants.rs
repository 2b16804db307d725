//! Shared constants for domain search
//!
//! Fixed endpoints and the built-in site list live here so the query
//! builder, the registry and the CLI agree on a single source of truth.

/// Google search endpoint; the composite query is appended as the `q` value.
pub const SEARCH_BASE_URL: &str = "https://www.google.com/search?q=";

/// Name of the query parameter carrying the composite query.
pub const QUERY_PARAM: &str = "q";

/// Prefix of a domain-restriction clause. Never percent-encoded itself.
pub const SITE_PREFIX: &str = "site:";

/// Separator between domain-restriction clauses.
pub const OR_SEPARATOR: &str = " OR ";

/// Built-in site list, in the order the clauses are emitted.
///
/// YouTube channel entries are host + path. Google's `site:` operator may
/// not filter those down to exactly the channel; they are still encoded
/// exactly like bare hostnames.
pub const BUILTIN_DOMAINS: [&str; 8] = [
    "chiliesvanilia.hu",
    "buvosszakacs.com",
    "magyarnarancs.hu",
    "es.hu",
    "streetkitchen.hu",
    "www.youtube.com/@mateszabikonyhaja",
    "www.youtube.com/@SzokyKonyhaja",
    "www.youtube.com/@UncleJohnsCooking",
];

/// Prompt shown by the interactive shell.
pub const INTERACTIVE_PROMPT: &str = "search> ";
