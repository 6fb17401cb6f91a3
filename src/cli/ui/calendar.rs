use chrono::{Datelike, Months, NaiveDate};
use shiftbook_core::CalendarMarker;

use crate::cli::ui::style::UiStyle;

const WEEKDAYS: [&str; 7] = ["Mo", "Tu", "We", "Th", "Fr", "Sa", "Su"];
const CELL_WIDTH: usize = 5;

/// A calendar month, identified by year and month number (1-12).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarMonth {
    first_day: NaiveDate,
}

impl CalendarMonth {
    pub fn new(year: i32, month: u32) -> Option<Self> {
        NaiveDate::from_ymd_opt(year, month, 1).map(|first_day| Self { first_day })
    }

    pub fn containing(date: NaiveDate) -> Self {
        Self {
            first_day: date.with_day(1).unwrap_or(date),
        }
    }

    /// Parses `YYYY-MM`.
    pub fn parse(input: &str) -> Option<Self> {
        let (year, month) = input.trim().split_once('-')?;
        Self::new(year.parse().ok()?, month.parse().ok()?)
    }

    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    pub fn first_day(&self) -> NaiveDate {
        self.first_day
    }

    pub fn days(&self) -> u32 {
        self.first_day
            .checked_add_months(Months::new(1))
            .and_then(|next| next.pred_opt())
            .map(|last| last.day())
            .unwrap_or(31)
    }

    pub fn title(&self) -> String {
        self.first_day.format("%B %Y").to_string()
    }
}

/// Month grid with per-day entry marks and a legend listing each marker.
pub struct CalendarRenderer;

impl CalendarRenderer {
    /// `markers` may span several months; only those inside `month` are drawn.
    pub fn render_lines(
        month: CalendarMonth,
        markers: &[CalendarMarker],
        currency: &str,
        style: &UiStyle,
    ) -> Vec<String> {
        let visible = shiftbook_core::markers_in_month(markers, month.year(), month.month());
        let mut counts = vec![0usize; month.days() as usize + 1];
        for marker in &visible {
            counts[marker.date.day() as usize] += 1;
        }

        let mut lines = vec![style.apply_header_style(&month.title())];
        lines.push(
            WEEKDAYS
                .iter()
                .map(|day| format!("{day:<width$}", width = CELL_WIDTH))
                .collect::<String>()
                .trim_end()
                .to_string(),
        );

        let offset = month.first_day().weekday().num_days_from_monday() as usize;
        let mut row = " ".repeat(offset * CELL_WIDTH);
        let mut column = offset;
        for day in 1..=month.days() {
            let mark = day_mark(counts[day as usize], style);
            let cell = format!("{day:>2}{mark}");
            row.push_str(&format!("{cell:<width$}", width = CELL_WIDTH));
            column += 1;
            if column == 7 {
                lines.push(row.trim_end().to_string());
                row.clear();
                column = 0;
            }
        }
        if !row.trim().is_empty() {
            lines.push(row.trim_end().to_string());
        }

        lines.push(String::new());
        if visible.is_empty() {
            lines.push("No entries this month.".to_string());
        } else {
            for marker in visible {
                lines.push(format!(
                    "{} {} {}",
                    marker.date,
                    style.marker_char(),
                    marker.label(currency)
                ));
            }
        }
        lines
    }
}

fn day_mark(count: usize, style: &UiStyle) -> String {
    match count {
        0 => String::new(),
        1 => style.marker_char().to_string(),
        n => format!("{}{}", style.marker_char(), n.min(9)),
    }
}
