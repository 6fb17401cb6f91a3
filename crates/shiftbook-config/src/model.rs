use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use shiftbook_domain::{NumericInputPolicy, ViewMode};

use crate::ConfigError;

/// Settings that can be changed through `Config::set`, in display order.
pub const SETTABLE_KEYS: [&str; 5] = [
    "currency",
    "default_view",
    "numeric_input",
    "ui_color_enabled",
    "data_dir",
];

/// Stores user-configurable preferences for the shift ledger.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Label of the single currency incomes are recorded in.
    #[serde(default = "Config::default_currency")]
    pub currency: String,
    /// Name the entry blob is persisted under.
    #[serde(default = "Config::default_storage_key")]
    pub storage_key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_dir: Option<PathBuf>,
    #[serde(default)]
    pub default_view: ViewMode,
    #[serde(default)]
    pub numeric_input: NumericInputPolicy,
    #[serde(default = "Config::default_ui_color_enabled")]
    pub ui_color_enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            currency: Self::default_currency(),
            storage_key: Self::default_storage_key(),
            data_dir: None,
            default_view: ViewMode::default(),
            numeric_input: NumericInputPolicy::default(),
            ui_color_enabled: Self::default_ui_color_enabled(),
        }
    }
}

impl Config {
    pub fn default_currency() -> String {
        "JPY".into()
    }

    pub fn default_storage_key() -> String {
        "timeEntries".into()
    }

    pub fn default_ui_color_enabled() -> bool {
        true
    }

    /// Directory holding the entry blob: the configured override or `<base>/data`.
    pub fn resolve_data_dir(&self, base: &Path) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| base.join("data"))
    }

    /// Current value of a settable key, formatted for display.
    pub fn get(&self, key: &str) -> Result<String, ConfigError> {
        match key {
            "currency" => Ok(self.currency.clone()),
            "default_view" => Ok(self.default_view.to_string()),
            "numeric_input" => Ok(self.numeric_input.to_string()),
            "ui_color_enabled" => Ok(self.ui_color_enabled.to_string()),
            "data_dir" => Ok(self
                .data_dir
                .as_ref()
                .map(|path| path.display().to_string())
                .unwrap_or_else(|| "(default)".into())),
            other => Err(ConfigError::UnknownKey(other.to_string())),
        }
    }

    /// Updates a settable key from its textual form.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let value = value.trim();
        let invalid = |message: &str| ConfigError::InvalidValue {
            key: key.to_string(),
            message: message.to_string(),
        };
        match key {
            "currency" => {
                if value.is_empty() {
                    return Err(invalid("currency label must not be empty"));
                }
                self.currency = value.to_string();
            }
            "default_view" => {
                self.default_view = value
                    .parse()
                    .map_err(|err: shiftbook_domain::ParseViewModeError| {
                        invalid(&err.to_string())
                    })?;
            }
            "numeric_input" => {
                self.numeric_input = NumericInputPolicy::parse(value)
                    .ok_or_else(|| invalid("expected `strict` or `lenient`"))?;
            }
            "ui_color_enabled" => {
                self.ui_color_enabled = parse_bool(value)
                    .ok_or_else(|| invalid("expected on/off, true/false or yes/no"))?;
            }
            "data_dir" => {
                self.data_dir = match value {
                    "" | "default" => None,
                    path => Some(PathBuf::from(path)),
                };
            }
            other => return Err(ConfigError::UnknownKey(other.to_string())),
        }
        Ok(())
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.to_ascii_lowercase().as_str() {
        "on" | "true" | "yes" | "1" => Some(true),
        "off" | "false" | "no" | "0" => Some(false),
        _ => None,
    }
}
