use serde::{Deserialize, Serialize};

use crate::common::Amounted;
use crate::entry::TimeEntry;

/// Aggregate hours and income across a set of entries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Totals {
    pub total_hours: f64,
    pub total_income: f64,
}

impl Totals {
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a TimeEntry>) -> Self {
        entries.into_iter().fold(Self::default(), |acc, entry| Self {
            total_hours: acc.total_hours + entry.hours,
            total_income: acc.total_income + entry.amount(),
        })
    }
}
