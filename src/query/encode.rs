//! URL component encoding
//!
//! Matches the browser's `encodeURIComponent`: ASCII alphanumerics and
//! `- _ . ! ~ * ' ( )` pass through, every other byte of the UTF-8 input
//! becomes `%XX` with uppercase hex. Space is `%20`, never `+`.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};
use std::borrow::Cow;

const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Percent-encode `input` as a single URL query component.
///
/// Borrows when nothing needs escaping.
#[must_use]
pub fn encode_component(input: &str) -> Cow<'_, str> {
    utf8_percent_encode(input, URI_COMPONENT).into()
}
