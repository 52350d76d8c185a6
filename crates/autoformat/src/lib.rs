//! Input formatters
//!
//! Pure functions that coerce user input into canonical form or report a
//! typed error, plus the field wrappers that apply them.
//!
//! # Overview
//!
//! 1. **Formatters** - `format_url`, `format_email`, `format_csv`
//! 2. **Registry** - the static `{ url, email, csv }` table and name-based dispatch
//! 3. **Fields** - `AutoFormatField` and `FormatBuilder` for form inputs
//!
//! # Usage
//!
//! ```
//! use autoformat::{format_url, registry, Format, Formatted};
//!
//! assert_eq!(format_url("example.com").unwrap(), "https://example.com");
//!
//! let err = format_url("not a url").unwrap_err();
//! assert_eq!(err.value, "not a url");
//! assert_eq!(err.message(), "Invalid URL");
//!
//! let tags = registry().apply(Format::Csv, "a, b  c,d").unwrap();
//! assert_eq!(tags, Formatted::List(vec!["a".into(), "b".into(), "c".into(), "d".into()]));
//! ```

pub mod config;
pub mod error;
pub mod field;
pub mod formatters;
pub mod patterns;
pub mod registry;
pub mod telemetry;

pub use config::AutoFormatConfig;
pub use error::{FormatError, FormatErrorKind, RegistryError};
pub use field::{AutoFormatField, FieldError, FieldOutcome, FormatBuilder, FormatErrors};
pub use formatters::{format_csv, format_email, format_url, Formatter, DEFAULT_PROTOCOL};
pub use registry::{format_by_name, registry, Format, Formatted, FormatterRegistry};
pub use telemetry::init_tracing;
