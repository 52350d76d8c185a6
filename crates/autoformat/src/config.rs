use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use crate::field::{FormatBuilder, FormatErrors};
use crate::registry::{Format, Formatted};

/// Config file looked up in the current directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = ".autoformat.toml";

/// Which format applies to which form field
///
/// ```toml
/// [fields]
/// homepage = "url"
/// contact = "email"
/// tags = "csv"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AutoFormatConfig {
    #[serde(default)]
    pub fields: BTreeMap<String, Format>,
}

impl AutoFormatConfig {
    /// Load config from file or use defaults
    pub fn load(config_path: Option<&Path>) -> Result<Self> {
        if let Some(path) = config_path {
            let content = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config file: {}", path.display()))?;
            Self::from_toml_str(&content)
                .with_context(|| format!("Failed to parse config file: {}", path.display()))
        } else if Path::new(DEFAULT_CONFIG_FILE).exists() {
            let content = fs::read_to_string(DEFAULT_CONFIG_FILE)?;
            Self::from_toml_str(&content)
                .with_context(|| format!("Failed to parse {}", DEFAULT_CONFIG_FILE))
        } else {
            Ok(Self::default())
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self = toml::from_str(content)?;
        tracing::debug!(fields = config.fields.len(), "loaded autoformat config");
        Ok(config)
    }

    pub fn format_for(&self, field: &str) -> Option<Format> {
        self.fields.get(field).copied()
    }

    /// Format every input by the format configured for its field name
    ///
    /// Inputs for fields with no configured format are reported as errors
    /// rather than passed through.
    pub fn format_form<K, V>(
        &self,
        inputs: impl IntoIterator<Item = (K, V)>,
    ) -> std::result::Result<BTreeMap<String, Formatted>, FormatErrors>
    where
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut builder = FormatBuilder::new();
        for (field, raw) in inputs {
            let field = field.as_ref();
            match self.format_for(field) {
                Some(format) => {
                    builder.format(field, format, raw.as_ref());
                }
                None => {
                    builder.add_error(field, "no format configured");
                }
            }
        }
        builder.build().map_err(FormatErrors::new)
    }
}
