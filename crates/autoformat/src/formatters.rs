//! The formatters
//!
//! Each formatter is total: it either returns the normalized value or a
//! [`FormatError`] holding the rejected input. None of them panic, touch
//! the network, or keep state between calls.

use crate::error::{FormatError, FormatErrorKind};
use crate::patterns::{ACCEPTABLE_EMAIL, ACCEPTABLE_URL, CSV_SEPARATOR, HAS_PROTOCOL};

/// Scheme prepended to URLs typed without one
pub const DEFAULT_PROTOCOL: &str = "https://";

/// Signature shared by every formatter: borrow the raw input, hand back an
/// owned normalized value or the rejected input.
pub type Formatter<T> = fn(&str) -> Result<T, FormatError<String>>;

/// Validate a URL, prefixing `https://` when no protocol was typed.
pub fn format_url(value: &str) -> Result<String, FormatError<String>> {
    if !ACCEPTABLE_URL.is_match(value) {
        return Err(FormatError::new(value.to_string(), FormatErrorKind::InvalidUrl));
    }

    if HAS_PROTOCOL.is_match(value) {
        Ok(value.to_string())
    } else {
        Ok(format!("{}{}", DEFAULT_PROTOCOL, value))
    }
}

/// Validate an email address.
///
/// Only checks for a single `@` with text on both sides; the domain is
/// not inspected.
pub fn format_email(value: &str) -> Result<String, FormatError<String>> {
    if ACCEPTABLE_EMAIL.is_match(value) {
        Ok(value.to_string())
    } else {
        Err(FormatError::new(value.to_string(), FormatErrorKind::InvalidEmail))
    }
}

/// Split on runs of whitespace and commas. Never fails.
pub fn format_csv(value: &str) -> Result<Vec<String>, FormatError<String>> {
    Ok(CSV_SEPARATOR
        .split(value)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect())
}
