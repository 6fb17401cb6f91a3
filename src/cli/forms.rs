//! Interactive entry form.

use dialoguer::theme::ColorfulTheme;
use shiftbook_core::{parse_amount, EntryDraft};
use shiftbook_domain::NumericInputPolicy;

use crate::cli::core::CommandError;
use crate::cli::io;

/// Collects company, hours and wage, validating each field as it is typed.
pub struct EntryForm<'a> {
    theme: &'a ColorfulTheme,
    policy: NumericInputPolicy,
}

impl<'a> EntryForm<'a> {
    pub fn new(theme: &'a ColorfulTheme, policy: NumericInputPolicy) -> Self {
        Self { theme, policy }
    }

    /// Returns `None` when the user declines the final confirmation.
    pub fn run(&self) -> Result<Option<EntryDraft>, CommandError> {
        let company_name = io::prompt_validated(self.theme, "Company name", |value| {
            if value.trim().is_empty() {
                Err("company name is required".to_string())
            } else {
                Ok(())
            }
        })?;
        let hours = self.amount("Hours worked")?;
        let hourly_wage = self.amount("Hourly wage")?;

        let summary = format!(
            "Record {} for {} hours at {}?",
            company_name.trim(),
            hours.trim(),
            hourly_wage.trim()
        );
        if !io::confirm_action(self.theme, &summary, true)? {
            return Ok(None);
        }
        Ok(Some(EntryDraft::new(company_name, hours, hourly_wage)))
    }

    fn amount(&self, prompt: &str) -> Result<String, CommandError> {
        let policy = self.policy;
        io::prompt_validated(self.theme, prompt, move |value| {
            parse_amount(value, policy)
                .map(|_| ())
                .map_err(|err| err.to_string())
        })
    }
}
