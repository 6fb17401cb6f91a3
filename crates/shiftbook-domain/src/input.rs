use std::fmt;

use serde::{de::Deserializer, Deserialize, Serialize};

/// How free-text numeric input (hours, wage) is turned into numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericInputPolicy {
    /// Reject anything that is not a finite, non-negative number.
    #[default]
    Strict,
    /// Accept unparseable input as `NaN` and let it flow into the ledger.
    Lenient,
}

impl NumericInputPolicy {
    fn from_value(value: Option<String>) -> Self {
        value
            .and_then(|v| Self::parse(&v))
            .unwrap_or_default()
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "strict" => Some(NumericInputPolicy::Strict),
            "lenient" => Some(NumericInputPolicy::Lenient),
            _ => None,
        }
    }
}

impl fmt::Display for NumericInputPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            NumericInputPolicy::Strict => "strict",
            NumericInputPolicy::Lenient => "lenient",
        };
        f.write_str(label)
    }
}

impl<'de> Deserialize<'de> for NumericInputPolicy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Option::<String>::deserialize(deserializer)?;
        Ok(NumericInputPolicy::from_value(value))
    }
}
