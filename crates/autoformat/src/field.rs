//! Input fields that format what the user types
//!
//! [`AutoFormatField`] wraps a single input: every time new text arrives
//! it runs the field's formatter and remembers the outcome, so a view can
//! render either the normalized value or the error message next to the
//! untouched raw text. [`FormatBuilder`] does the same for a whole form,
//! accumulating [`FieldError`]s the way a request validator would.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::error::FormatError;
use crate::registry::{registry, Format, Formatted};

/// A field-level formatting error
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

/// Outcome of the last input applied to a field
pub type FieldOutcome = Result<Formatted, FormatError<String>>;

/// A named input bound to one formatter
#[derive(Debug, Clone)]
pub struct AutoFormatField {
    name: String,
    format: Format,
    raw: String,
    outcome: Option<FieldOutcome>,
}

impl AutoFormatField {
    pub fn new(name: impl Into<String>, format: Format) -> Self {
        Self {
            name: name.into(),
            format,
            raw: String::new(),
            outcome: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn format(&self) -> Format {
        self.format
    }

    /// Apply new user input and return the resulting outcome
    pub fn input(&mut self, raw: impl Into<String>) -> &FieldOutcome {
        self.raw = raw.into();
        let outcome = registry().apply(self.format, &self.raw);

        if let Err(err) = &outcome {
            tracing::debug!(
                field = %self.name,
                format = %self.format,
                error = %err,
                "rejected input"
            );
        }

        self.outcome.insert(outcome)
    }

    /// Text as last typed
    pub fn raw(&self) -> &str {
        &self.raw
    }

    pub fn outcome(&self) -> Option<&FieldOutcome> {
        self.outcome.as_ref()
    }

    /// Normalized value, if the last input was accepted
    pub fn value(&self) -> Option<&Formatted> {
        self.outcome.as_ref().and_then(|outcome| outcome.as_ref().ok())
    }

    /// Error message, if the last input was rejected
    pub fn error_message(&self) -> Option<String> {
        match &self.outcome {
            Some(Err(err)) => Some(err.message()),
            _ => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        matches!(self.outcome, Some(Ok(_)))
    }

    /// What the input box should show
    ///
    /// Accepted input is replaced by its normalized form; rejected input is
    /// left exactly as typed so the user can fix it.
    pub fn display(&self) -> String {
        match &self.outcome {
            Some(Ok(formatted)) => formatted.to_string(),
            Some(Err(err)) => err.value.clone(),
            None => String::new(),
        }
    }

    pub fn to_field_error(&self) -> Option<FieldError> {
        match &self.outcome {
            Some(Err(err)) => Some(err.to_field_error(&self.name)),
            _ => None,
        }
    }
}

/// Rejected form, serializable for a client
#[derive(Debug, Clone, Serialize)]
pub struct FormatErrors {
    pub error: String,
    pub message: String,
    pub errors: Vec<FieldError>,
}

impl FormatErrors {
    pub fn new(errors: Vec<FieldError>) -> Self {
        let message = if errors.len() == 1 {
            format!("Formatting failed for field '{}'", errors[0].field)
        } else {
            format!("Formatting failed for {} fields", errors.len())
        };

        Self {
            error: "FormatError".to_string(),
            message,
            errors,
        }
    }

    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        serde_json::to_value(self)
    }
}

/// Builder that formats several fields and accumulates errors
#[derive(Debug, Default)]
pub struct FormatBuilder {
    values: BTreeMap<String, Formatted>,
    errors: Vec<FieldError>,
}

impl FormatBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Format `raw` as `format` under the name `field`
    pub fn format(&mut self, field: &str, format: Format, raw: &str) -> &mut Self {
        match registry().apply(format, raw) {
            Ok(formatted) => {
                self.values.insert(field.to_string(), formatted);
            }
            Err(err) => {
                tracing::debug!(field, format = %format, error = %err, "rejected input");
                self.errors.push(err.to_field_error(field));
            }
        }
        self
    }

    /// Add an error directly
    pub fn add_error(&mut self, field: impl Into<String>, message: impl Into<String>) -> &mut Self {
        self.errors.push(FieldError::new(field, message));
        self
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.errors.len()
    }

    /// Finish building: all normalized values, or every error collected
    pub fn build(self) -> Result<BTreeMap<String, Formatted>, Vec<FieldError>> {
        if self.errors.is_empty() {
            Ok(self.values)
        } else {
            Err(self.errors)
        }
    }
}
