//! Formatter registry
//!
//! A static, read-only mapping from format name to formatter, plus
//! name-based dispatch for callers that only know the format at runtime
//! (e.g. from configuration).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{FormatError, RegistryError};
use crate::formatters::{format_csv, format_email, format_url, Formatter};

/// Names of the registered formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Url,
    Email,
    Csv,
}

impl Format {
    pub const ALL: [Format; 3] = [Format::Url, Format::Email, Format::Csv];

    pub fn formatter_name(&self) -> &'static str {
        match self {
            Format::Url => "url",
            Format::Email => "email",
            Format::Csv => "csv",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.formatter_name())
    }
}

impl FromStr for Format {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "url" => Ok(Format::Url),
            "email" => Ok(Format::Email),
            "csv" => Ok(Format::Csv),
            _ => Err(RegistryError::UnknownFormat(s.to_string())),
        }
    }
}

/// Successful output of a formatter picked at runtime
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Formatted {
    Text(String),
    List(Vec<String>),
}

impl Formatted {
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Formatted::Text(text) => Some(text),
            Formatted::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Formatted::Text(_) => None,
            Formatted::List(items) => Some(items),
        }
    }
}

impl fmt::Display for Formatted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Formatted::Text(text) => f.write_str(text),
            Formatted::List(items) => f.write_str(&items.join(", ")),
        }
    }
}

/// The formatter table
#[derive(Clone, Copy)]
pub struct FormatterRegistry {
    pub url: Formatter<String>,
    pub email: Formatter<String>,
    pub csv: Formatter<Vec<String>>,
}

impl FormatterRegistry {
    pub const STANDARD: FormatterRegistry = FormatterRegistry {
        url: format_url,
        email: format_email,
        csv: format_csv,
    };

    /// Run the formatter registered for `format`
    pub fn apply(&self, format: Format, value: &str) -> Result<Formatted, FormatError<String>> {
        tracing::trace!(format = %format, "applying formatter");
        match format {
            Format::Url => (self.url)(value).map(Formatted::Text),
            Format::Email => (self.email)(value).map(Formatted::Text),
            Format::Csv => (self.csv)(value).map(Formatted::List),
        }
    }
}

impl fmt::Debug for FormatterRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatterRegistry").finish_non_exhaustive()
    }
}

impl Default for FormatterRegistry {
    fn default() -> Self {
        Self::STANDARD
    }
}

static STANDARD_REGISTRY: FormatterRegistry = FormatterRegistry::STANDARD;

/// The standard registry: `{ url, email, csv }`
pub fn registry() -> &'static FormatterRegistry {
    &STANDARD_REGISTRY
}

/// Look up a format by name and apply it
pub fn format_by_name(name: &str, value: &str) -> Result<Formatted, RegistryError> {
    let format: Format = name.parse()?;
    Ok(registry().apply(format, value)?)
}
