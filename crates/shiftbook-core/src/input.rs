//! Parsing of raw form input into ledger-ready values.

use shiftbook_domain::NumericInputPolicy;

use crate::CoreError;

/// Parses a free-text amount (hours or wage) under `policy`.
///
/// Both policies reject blank input. `Strict` also rejects anything that is
/// not a finite, non-negative number; `Lenient` turns it into `NaN` instead.
pub fn parse_amount(raw: &str, policy: NumericInputPolicy) -> Result<f64, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::Validation("a value is required".into()));
    }
    let parsed = trimmed.parse::<f64>();
    match policy {
        NumericInputPolicy::Lenient => Ok(parsed.unwrap_or(f64::NAN)),
        NumericInputPolicy::Strict => {
            let value = parsed
                .map_err(|_| CoreError::Validation(format!("`{}` is not a number", trimmed)))?;
            if !value.is_finite() {
                return Err(CoreError::Validation(format!(
                    "`{}` is not a finite number",
                    trimmed
                )));
            }
            if value < 0.0 {
                return Err(CoreError::Validation(format!(
                    "`{}` must not be negative",
                    trimmed
                )));
            }
            Ok(value)
        }
    }
}

/// Raw values collected by the entry form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EntryDraft {
    pub company_name: String,
    pub hours: String,
    pub hourly_wage: String,
}

/// A draft that passed form validation and can be handed to the ledger.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidEntry {
    pub company_name: String,
    pub hours: f64,
    pub hourly_wage: f64,
}

impl EntryDraft {
    pub fn new(
        company_name: impl Into<String>,
        hours: impl Into<String>,
        hourly_wage: impl Into<String>,
    ) -> Self {
        Self {
            company_name: company_name.into(),
            hours: hours.into(),
            hourly_wage: hourly_wage.into(),
        }
    }

    pub fn validate(&self, policy: NumericInputPolicy) -> Result<ValidEntry, CoreError> {
        let company_name = self.company_name.trim();
        if company_name.is_empty() {
            return Err(CoreError::Validation("company name is required".into()));
        }
        let hours = parse_field("hours", &self.hours, policy)?;
        let hourly_wage = parse_field("hourly wage", &self.hourly_wage, policy)?;
        Ok(ValidEntry {
            company_name: company_name.to_string(),
            hours,
            hourly_wage,
        })
    }
}

fn parse_field(label: &str, raw: &str, policy: NumericInputPolicy) -> Result<f64, CoreError> {
    parse_amount(raw, policy).map_err(|err| match err {
        CoreError::Validation(message) => CoreError::Validation(format!("{label}: {message}")),
        other => other,
    })
}
