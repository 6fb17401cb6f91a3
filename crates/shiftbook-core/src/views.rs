//! Read-only projections of the ledger used by the list, graph, calendar and
//! totals displays.

use chrono::{Datelike, NaiveDate};
use shiftbook_domain::{EntryId, TimeEntry, Totals};

/// One point of the hours/income time series.
#[derive(Debug, Clone, PartialEq)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub hours: f64,
    pub income: f64,
}

/// One point per entry, in ledger order. Dates without entries get no point
/// and days with several entries get several.
pub fn graph_series(entries: &[TimeEntry]) -> Vec<SeriesPoint> {
    entries
        .iter()
        .map(|entry| SeriesPoint {
            date: entry.date,
            hours: entry.hours,
            income: entry.total_income,
        })
        .collect()
}

/// A single labelled mark on a calendar day.
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarMarker {
    pub id: EntryId,
    pub date: NaiveDate,
    pub company_name: String,
    pub hours: f64,
    pub income: f64,
}

impl CalendarMarker {
    pub fn label(&self, currency: &str) -> String {
        format!(
            "{} {}h {} {}",
            self.company_name,
            format_hours(self.hours),
            format_income(self.income),
            currency
        )
    }
}

/// One marker per entry; entries sharing a day are not merged.
pub fn calendar_markers(entries: &[TimeEntry]) -> Vec<CalendarMarker> {
    entries
        .iter()
        .map(|entry| CalendarMarker {
            id: entry.id.clone(),
            date: entry.date,
            company_name: entry.company_name.clone(),
            hours: entry.hours,
            income: entry.total_income,
        })
        .collect()
}

/// Markers falling inside the given calendar month.
pub fn markers_in_month(markers: &[CalendarMarker], year: i32, month: u32) -> Vec<&CalendarMarker> {
    markers
        .iter()
        .filter(|marker| marker.date.year() == year && marker.date.month() == month)
        .collect()
}

/// Totals rendered for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TotalsDisplay {
    pub hours: String,
    pub income: String,
}

pub fn format_totals(totals: &Totals) -> TotalsDisplay {
    TotalsDisplay {
        hours: format_hours(totals.total_hours),
        income: format_income(totals.total_income),
    }
}

/// Hours at two decimal places.
pub fn format_hours(hours: f64) -> String {
    format!("{hours:.2}")
}

/// Income at zero decimal places.
pub fn format_income(income: f64) -> String {
    format!("{income:.0}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: &str, day: u32, company: &str, hours: f64, wage: f64) -> TimeEntry {
        TimeEntry::new(
            EntryId::from(id),
            NaiveDate::from_ymd_opt(2024, 6, day).unwrap(),
            company,
            hours,
            wage,
        )
    }

    #[test]
    fn series_keeps_ledger_order_without_gap_filling() {
        let entries = vec![
            entry("a", 10, "Acme", 4.0, 1000.0),
            entry("b", 2, "Beta", 2.0, 1500.0),
        ];
        let series = graph_series(&entries);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].date, NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());
        assert_eq!(series[1].income, 3000.0);
    }

    #[test]
    fn same_day_entries_produce_separate_markers() {
        let entries = vec![
            entry("a", 3, "Acme", 4.0, 1000.0),
            entry("b", 3, "Beta", 1.5, 1200.0),
        ];
        let markers = calendar_markers(&entries);
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[1].label("JPY"), "Beta 1.50h 1800 JPY");
    }

    #[test]
    fn month_filter_matches_year_and_month() {
        let mut entries = vec![entry("a", 3, "Acme", 1.0, 1.0)];
        entries.push(TimeEntry::new(
            EntryId::from("b"),
            NaiveDate::from_ymd_opt(2023, 6, 3).unwrap(),
            "Old",
            1.0,
            1.0,
        ));
        let markers = calendar_markers(&entries);
        let june = markers_in_month(&markers, 2024, 6);
        assert_eq!(june.len(), 1);
        assert_eq!(june[0].company_name, "Acme");
    }

    #[test]
    fn totals_use_two_and_zero_decimals() {
        let display = format_totals(&Totals {
            total_hours: 6.0,
            total_income: 7000.4,
        });
        assert_eq!(display.hours, "6.00");
        assert_eq!(display.income, "7000");
    }
}
