use crate::error::{EasyAuthError, Result};

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use url::Url;

/// Escapes everything outside the RFC 3986 unreserved set (letters, digits,
/// `-_.~`). Spaces become `%20`, and `&`/`=`/`?` in a name or value can never
/// break a parameter boundary.
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Ordered (name, value) pairs. Pairs are appended in insertion order and
/// duplicate names are kept as supplied.
pub type QueryParams = Vec<(String, String)>;

pub struct UrlBuilder;

impl UrlBuilder {
    /// Append query parameters to a base URL.
    ///
    /// The existing query component of the base URL, if any, is kept verbatim
    /// and the new pairs are appended after it. Scheme, host, path and
    /// fragment are untouched.
    ///
    /// # Arguments
    /// * `parameters` - The (name, value) pairs to append, in order. An empty
    ///   slice returns the parsed base URL unchanged.
    /// * `url` - The base URL to append to.
    ///
    /// # Errors
    /// * `EasyAuthError::InvalidUrl` - If `url` cannot be parsed as an absolute URL.
    /// * `EasyAuthError::InvalidParameter` - If a parameter name is empty.
    ///
    /// # Returns
    /// * `Result<Url>` - A new URL with the parameters percent-encoded into
    ///   its query component.
    pub fn append_query_parameters(parameters: &[(String, String)], url: &str) -> Result<Url> {
        let mut result = Url::parse(url)?;

        if parameters.is_empty() {
            return Ok(result);
        }

        let mut query_string = String::new();
        for (name, value) in parameters {
            if name.is_empty() {
                return Err(EasyAuthError::InvalidParameter(
                    "parameter name must not be empty".to_string(),
                ));
            }

            Self::append_parameter(name, value, &mut query_string);
        }

        let merged = match result.query() {
            Some(existing) if !existing.is_empty() => format!("{existing}&{query_string}"),
            _ => query_string,
        };
        result.set_query(Some(&merged));

        Ok(result)
    }

    /// Append a single percent-encoded `name=value` pair to a query-string
    /// buffer, inserting a `&` separator if the buffer is not empty.
    pub fn append_parameter(name: &str, value: &str, query_string: &mut String) {
        if !query_string.is_empty() {
            query_string.push('&');
        }

        query_string.push_str(&format!(
            "{}={}",
            utf8_percent_encode(name, QUERY_ENCODE_SET),
            utf8_percent_encode(value, QUERY_ENCODE_SET)
        ));
    }
}
