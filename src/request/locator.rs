//! Locator construction
//!
//! A locator has the form `scheme://command[?key=value[&key=value...]]`.
//! Keys and values are percent-encoded so that `&`, `=`, spaces and
//! non-ASCII text survive the trip to the receiving application.

use crate::error::{LocatorError, LocatorResult};
use crate::request::Request;

/// Default scheme registered by Marked 3
pub const DEFAULT_SCHEME: &str = "x-marked-3";

/// Check a scheme against `ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )`
pub fn is_valid_scheme(scheme: &str) -> bool {
    let mut chars = scheme.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}

/// Build the locator string for a request
pub fn build_locator(scheme: &str, request: &Request) -> LocatorResult<String> {
    if !is_valid_scheme(scheme) {
        return Err(LocatorError::InvalidScheme(scheme.to_string()));
    }

    let mut locator = format!("{}://{}", scheme, request.command);

    if !request.params.is_empty() {
        let query: Vec<String> = request
            .params
            .iter()
            .map(|(key, value)| {
                format!("{}={}", urlencoding::encode(key), urlencoding::encode(value))
            })
            .collect();
        locator.push('?');
        locator.push_str(&query.join("&"));
    }

    Ok(locator)
}
