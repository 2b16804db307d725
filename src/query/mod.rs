//! Search URL construction
//!
//! Turns a free-text query and an ordered domain list into one Google
//! results URL restricted to every domain via `site:` clauses joined with
//! `OR`. The query and each domain are encoded once, then the whole
//! composite query is encoded again as the `q` value. The double
//! encoding is what the search endpoint expects and must be kept as is.

mod decode;
mod encode;
mod errors;

pub use decode::{DecodedQuery, decode_search_url};
pub use encode::encode_component;
pub use errors::{BuildError, DecodeError};

use tracing::debug;

use crate::utils::{OR_SEPARATOR, SEARCH_BASE_URL, SITE_PREFIX};

/// Build the `site:<encoded-domain>` clause for one domain.
#[must_use]
pub fn site_clause(domain: &str) -> String {
    format!("{SITE_PREFIX}{}", encode_component(domain))
}

/// Composite query before the final encoding pass:
/// `<encoded query> site:<d1> OR site:<d2> ...`
///
/// The query is encoded untrimmed; trimming only decides emptiness.
#[must_use]
pub fn composite_query<I, D>(raw_query: &str, domains: I) -> String
where
    I: IntoIterator<Item = D>,
    D: AsRef<str>,
{
    let clauses = domains
        .into_iter()
        .map(|d| site_clause(d.as_ref()))
        .collect::<Vec<_>>()
        .join(OR_SEPARATOR);

    format!("{} {clauses}", encode_component(raw_query))
}

/// Whitespace as browsers trim it: ECMAScript `WhiteSpace` plus
/// `LineTerminator`. Includes U+FEFF, excludes U+0085.
fn is_query_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\u{000B}'
            | '\u{000C}'
            | ' '
            | '\u{00A0}'
            | '\u{FEFF}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\n'
            | '\r'
            | '\u{2028}'
            | '\u{2029}'
    )
}

/// True when `raw_query` has nothing left after trimming.
#[must_use]
pub fn is_blank_query(raw_query: &str) -> bool {
    raw_query.trim_matches(is_query_whitespace).is_empty()
}

/// Build the search URL for `raw_query` restricted to `domains`.
///
/// # Errors
///
/// Returns `BuildError::EmptyQuery` if `raw_query` is empty or
/// whitespace-only. Nothing is encoded in that case.
///
/// # Example
/// ```
/// use kodegen_tools_domain_search::query::build_search_url;
///
/// let url = build_search_url("goulash recipe", ["example.com"]).unwrap();
/// assert_eq!(
///     url,
///     "https://www.google.com/search?q=goulash%2520recipe%20site%3Aexample.com"
/// );
/// ```
pub fn build_search_url<I, D>(raw_query: &str, domains: I) -> Result<String, BuildError>
where
    I: IntoIterator<Item = D>,
    D: AsRef<str>,
{
    if is_blank_query(raw_query) {
        return Err(BuildError::EmptyQuery);
    }

    let composite = composite_query(raw_query, domains);
    let url = format!("{SEARCH_BASE_URL}{}", encode_component(&composite));

    debug!("Built search URL ({} chars): {}", url.len(), url);
    Ok(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clause_prefix_is_not_encoded() {
        assert_eq!(
            site_clause("www.youtube.com/@SzokyKonyhaja"),
            "site:www.youtube.com%2F%40SzokyKonyhaja"
        );
    }

    #[test]
    fn composite_joins_with_or() {
        assert_eq!(
            composite_query("a&b", ["x.com", "y.com"]),
            "a%26b site:x.com OR site:y.com"
        );
    }

    #[test]
    fn untrimmed_query_is_encoded() {
        assert_eq!(composite_query(" hi ", ["x.com"]), "%20hi%20 site:x.com");
    }

    #[test]
    fn whitespace_only_is_empty() {
        for q in ["", " ", "\t\n", "\u{3000}"] {
            assert_eq!(build_search_url(q, ["x.com"]), Err(BuildError::EmptyQuery));
        }
    }

    #[test]
    fn byte_order_mark_is_whitespace() {
        assert_eq!(build_search_url("\u{FEFF}", ["x.com"]), Err(BuildError::EmptyQuery));
        assert_eq!(
            build_search_url(" \u{FEFF}\u{2028} ", ["x.com"]),
            Err(BuildError::EmptyQuery)
        );
    }

    #[test]
    fn next_line_is_query_text() {
        let url = build_search_url("\u{85}", ["x.com"]).unwrap();
        assert_eq!(
            url,
            "https://www.google.com/search?q=%25C2%2585%20site%3Ax.com"
        );
    }

    #[test]
    fn reserved_characters_are_double_encoded() {
        let url = build_search_url("a&b", ["x.com", "y.com"]).unwrap();
        assert_eq!(
            url,
            "https://www.google.com/search?q=a%2526b%20site%3Ax.com%20OR%20site%3Ay.com"
        );
    }
}
