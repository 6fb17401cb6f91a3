//! Domain model for a single recorded work shift.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::common::{f64_or_nan, Amounted, Displayable, Identifiable};

/// Opaque identifier of a [`TimeEntry`].
///
/// Stored as a plain string so blobs written by older front ends (which used
/// timestamp tokens) still load. New identifiers are random UUIDs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryId(String);

impl EntryId {
    /// Generates a fresh collision-resistant identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for EntryId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl From<&str> for EntryId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// One recorded shift: date, company, hours, wage and the income derived from them.
///
/// `total_income` is computed once by [`TimeEntry::new`] and stored; it is never
/// recomputed from the other fields afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeEntry {
    pub id: EntryId,
    pub date: NaiveDate,
    pub company_name: String,
    #[serde(deserialize_with = "f64_or_nan")]
    pub hours: f64,
    #[serde(deserialize_with = "f64_or_nan")]
    pub hourly_wage: f64,
    #[serde(deserialize_with = "f64_or_nan")]
    pub total_income: f64,
}

impl TimeEntry {
    pub fn new(
        id: EntryId,
        date: NaiveDate,
        company_name: impl Into<String>,
        hours: f64,
        hourly_wage: f64,
    ) -> Self {
        Self {
            id,
            date,
            company_name: company_name.into(),
            hours,
            hourly_wage,
            total_income: hours * hourly_wage,
        }
    }

    /// True when any numeric field is NaN or infinite.
    pub fn is_tainted(&self) -> bool {
        !(self.hours.is_finite() && self.hourly_wage.is_finite() && self.total_income.is_finite())
    }
}

impl Identifiable for TimeEntry {
    type Id = EntryId;

    fn id(&self) -> &EntryId {
        &self.id
    }
}

impl Amounted for TimeEntry {
    fn amount(&self) -> f64 {
        self.total_income
    }
}

impl Displayable for TimeEntry {
    fn display_label(&self) -> String {
        format!(
            "{} {} {:.2}h x {} = {}",
            self.date, self.company_name, self.hours, self.hourly_wage, self.total_income
        )
    }
}
