use colored::Colorize;

use crate::cli::output::{current_preferences, OutputPreferences};

/// Glyph and colour choices shared by the table, graph and calendar renderers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UiStyle {
    pub use_color: bool,
    pub plain_mode: bool,
}

impl UiStyle {
    pub fn from_preferences(prefs: &OutputPreferences) -> Self {
        Self {
            use_color: prefs.color_enabled,
            plain_mode: prefs.plain_mode,
        }
    }

    pub fn current() -> Self {
        Self::from_preferences(&current_preferences())
    }

    /// ASCII-only, uncoloured output.
    pub fn plain() -> Self {
        Self {
            use_color: false,
            plain_mode: true,
        }
    }

    pub fn horizontal_line(&self, width: usize) -> String {
        let ch = if self.plain_mode { '-' } else { '─' };
        std::iter::repeat(ch).take(width).collect()
    }

    pub fn vertical(&self) -> char {
        if self.plain_mode {
            '|'
        } else {
            '│'
        }
    }

    pub fn bar_char(&self) -> char {
        if self.plain_mode {
            '#'
        } else {
            '█'
        }
    }

    pub fn marker_char(&self) -> char {
        if self.plain_mode {
            '*'
        } else {
            '•'
        }
    }

    pub fn apply_header_style(&self, text: &str) -> String {
        if self.use_color {
            text.bold().to_string()
        } else {
            text.to_string()
        }
    }
}
