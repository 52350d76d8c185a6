//! Error types returned by the formatters and the registry

use serde::Serialize;
use std::fmt;
use thiserror::Error;

/// Why a value was rejected. `Display` yields the user-facing message.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormatErrorKind {
    #[error("Invalid URL")]
    InvalidUrl,

    #[error("Invalid Email")]
    InvalidEmail,
}

/// A rejected input together with the reason it was rejected.
///
/// The raw value is kept so the caller can leave the user's text in place
/// while it shows the message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormatError<V> {
    pub value: V,
    pub error: FormatErrorKind,
}

impl<V> FormatError<V> {
    pub fn new(value: V, error: FormatErrorKind) -> Self {
        Self { value, error }
    }

    /// Human-readable message, e.g. "Invalid URL"
    pub fn message(&self) -> String {
        self.error.to_string()
    }

    pub fn into_value(self) -> V {
        self.value
    }

    /// Convert into a field-level error for the given field name
    pub fn to_field_error(&self, field: impl Into<String>) -> crate::field::FieldError {
        crate::field::FieldError::new(field, self.message())
    }
}

impl<V> fmt::Display for FormatError<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.error)
    }
}

impl<V: fmt::Debug> std::error::Error for FormatError<V> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.error)
    }
}

/// Errors from name-based dispatch through the registry
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    /// The requested format name is not registered.
    #[error("unknown format '{0}' (expected one of: url, email, csv)")]
    UnknownFormat(String),

    /// The formatter rejected the value.
    #[error("{0}")]
    Format(#[from] FormatError<String>),
}
