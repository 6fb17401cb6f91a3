use chrono::NaiveDate;
use shiftbook_core::{format_hours, format_income, SeriesPoint};

use crate::cli::ui::style::UiStyle;

const DATE_WIDTH: usize = 10;
const MIN_BAR_WIDTH: usize = 10;

/// Draws the hours and income series as horizontal bars, one row per point.
pub struct GraphRenderer {
    width: usize,
}

impl GraphRenderer {
    pub fn new(width: usize) -> Self {
        Self { width }
    }

    pub fn render_lines(
        &self,
        series: &[SeriesPoint],
        currency: &str,
        style: &UiStyle,
    ) -> Vec<String> {
        if series.is_empty() {
            return vec!["No entries to plot.".to_string()];
        }

        let hours: Vec<(NaiveDate, f64, String)> = series
            .iter()
            .map(|point| (point.date, point.hours, format!("{}h", format_hours(point.hours))))
            .collect();
        let income: Vec<(NaiveDate, f64, String)> = series
            .iter()
            .map(|point| (point.date, point.income, format_income(point.income)))
            .collect();

        let mut lines = vec![style.apply_header_style("Hours")];
        lines.extend(self.series_rows(&hours, style));
        lines.push(String::new());
        lines.push(style.apply_header_style(&format!("Income ({currency})")));
        lines.extend(self.series_rows(&income, style));
        lines
    }

    fn series_rows(&self, rows: &[(NaiveDate, f64, String)], style: &UiStyle) -> Vec<String> {
        let label_width = rows
            .iter()
            .map(|(_, _, label)| label.chars().count())
            .max()
            .unwrap_or(0);
        let bar_width = self
            .width
            .saturating_sub(DATE_WIDTH + 3 + 1 + label_width)
            .max(MIN_BAR_WIDTH);
        let max = rows
            .iter()
            .map(|(_, value, _)| *value)
            .filter(|value| value.is_finite())
            .fold(0.0_f64, f64::max);

        rows.iter()
            .map(|(date, value, label)| {
                let length = bar_length(*value, max, bar_width);
                let bar: String = std::iter::repeat(style.bar_char()).take(length).collect();
                format!(
                    "{date} {sep} {bar:<bar_width$} {label:>label_width$}",
                    sep = style.vertical()
                )
            })
            .collect()
    }
}

/// Bar cells for `value` on a scale where `max` fills `width`. Non-finite and
/// non-positive values draw nothing; any positive value draws at least one cell.
fn bar_length(value: f64, max: f64, width: usize) -> usize {
    if !value.is_finite() || value <= 0.0 || max <= 0.0 {
        return 0;
    }
    let scaled = (value / max * width as f64).round() as usize;
    scaled.clamp(1, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bar_length_scales_against_maximum() {
        assert_eq!(bar_length(10.0, 10.0, 20), 20);
        assert_eq!(bar_length(5.0, 10.0, 20), 10);
        assert_eq!(bar_length(0.01, 10.0, 20), 1);
        assert_eq!(bar_length(f64::NAN, 10.0, 20), 0);
        assert_eq!(bar_length(0.0, 0.0, 20), 0);
    }

    #[test]
    fn renders_hours_then_income_sections() {
        let day = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let series = vec![
            SeriesPoint {
                date: day,
                hours: 8.0,
                income: 8000.0,
            },
            SeriesPoint {
                date: day,
                hours: 2.0,
                income: 2000.0,
            },
        ];
        let lines = GraphRenderer::new(39).render_lines(&series, "JPY", &UiStyle::plain());

        assert_eq!(lines[0], "Hours");
        assert!(lines[1].starts_with("2024-06-01 | ##"));
        assert!(lines[1].ends_with("8.00h"));
        assert!(lines[2].ends_with("2.00h"));
        assert_eq!(lines[4], "Income (JPY)");
        assert!(lines[6].ends_with("2000"));

        let long = lines[1].matches('#').count();
        let short = lines[2].matches('#').count();
        assert_eq!(long, 4 * short);
    }

    #[test]
    fn empty_series_has_placeholder() {
        let lines = GraphRenderer::new(80).render_lines(&[], "JPY", &UiStyle::plain());
        assert_eq!(lines, vec!["No entries to plot.".to_string()]);
    }
}
