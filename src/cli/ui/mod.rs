pub mod calendar;
pub mod graph;
pub mod style;
pub mod table;

pub use calendar::{CalendarMonth, CalendarRenderer};
pub use graph::GraphRenderer;
pub use style::UiStyle;
pub use table::{Align, Table, TableColumn, TableRenderer};

use std::io::IsTerminal;

const FALLBACK_WIDTH: usize = 80;

/// Width available for rendering: the terminal's column count, or 80 when
/// stdout is not a terminal.
pub fn terminal_width() -> usize {
    if !std::io::stdout().is_terminal() {
        return FALLBACK_WIDTH;
    }
    crossterm::terminal::size()
        .map(|(columns, _)| usize::from(columns))
        .unwrap_or(FALLBACK_WIDTH)
}
