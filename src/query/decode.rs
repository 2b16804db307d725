//! Inspection of built search URLs
//!
//! Reverses the two encoding passes so a generated link can be checked
//! by eye or in tests.

use url::Url;

use super::errors::DecodeError;
use crate::utils::QUERY_PARAM;

/// The `q` parameter of a search URL at each decoding stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedQuery {
    /// Raw `q` value as it appears in the URL
    pub raw: String,

    /// Decoded once: the composite query with the user query and domains still encoded
    pub composite: String,

    /// Decoded twice: `<query> site:<d1> OR site:<d2> ...`
    pub query: String,
}

/// Extract the `q` parameter from `url` and decode it twice.
///
/// The raw parameter is read straight from the query string rather than
/// through form decoding, so `+` is never turned into a space.
///
/// # Errors
///
/// - `DecodeError::InvalidUrl` if `url` does not parse
/// - `DecodeError::MissingQueryParam` if there is no `q` parameter
/// - `DecodeError::InvalidEncoding` if a decoding pass yields invalid UTF-8
pub fn decode_search_url(url: &str) -> Result<DecodedQuery, DecodeError> {
    let parsed = Url::parse(url)?;
    let prefix = format!("{QUERY_PARAM}=");

    let raw = parsed
        .query()
        .unwrap_or_default()
        .split('&')
        .find_map(|pair| pair.strip_prefix(prefix.as_str()))
        .ok_or(DecodeError::MissingQueryParam(QUERY_PARAM))?
        .to_string();

    let composite = urlencoding::decode(&raw)?.into_owned();
    let query = urlencoding::decode(&composite)?.into_owned();

    Ok(DecodedQuery {
        raw,
        composite,
        query,
    })
}
