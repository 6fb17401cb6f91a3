use crate::cli::ui::style::UiStyle;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// Declarative description of a table column. Widths grow to fit content.
#[derive(Debug, Clone)]
pub struct TableColumn {
    pub header: String,
    pub align: Align,
}

impl TableColumn {
    pub fn left(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            align: Align::Left,
        }
    }

    pub fn right(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
            align: Align::Right,
        }
    }
}

/// Simple table model used for rendering read-only overviews.
#[derive(Debug, Clone)]
pub struct Table {
    pub title: Option<String>,
    pub columns: Vec<TableColumn>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new<T: Into<String>>(title: Option<T>, columns: Vec<TableColumn>) -> Self {
        Self {
            title: title.map(|value| value.into()),
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row<S: Into<String>>(&mut self, cells: Vec<S>) {
        self.rows
            .push(cells.into_iter().map(|value| value.into()).collect());
    }

    fn widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(idx))
                    .map(|cell| cell.chars().count())
                    .chain(std::iter::once(column.header.chars().count()))
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }
}

/// Renders [`Table`] instances using padded columns.
pub struct TableRenderer;

impl TableRenderer {
    pub fn render_lines(table: &Table, style: &UiStyle) -> Vec<String> {
        let mut lines = Vec::new();
        if let Some(title) = &table.title {
            lines.push(style.apply_header_style(title));
        }
        if table.columns.is_empty() {
            return lines;
        }

        let widths = table.widths();
        let total_width = widths.iter().sum::<usize>() + 2 * widths.len().saturating_sub(1);

        let headers: Vec<String> = table.columns.iter().map(|c| c.header.clone()).collect();
        lines.push(style.apply_header_style(&format_row(&headers, &table.columns, &widths)));
        lines.push(style.horizontal_line(total_width));
        for row in &table.rows {
            lines.push(format_row(row, &table.columns, &widths));
        }
        lines
    }
}

fn format_row(cells: &[String], columns: &[TableColumn], widths: &[usize]) -> String {
    let rendered: Vec<String> = columns
        .iter()
        .zip(widths)
        .enumerate()
        .map(|(idx, (column, width))| {
            let cell = cells.get(idx).map(String::as_str).unwrap_or("");
            match column.align {
                Align::Left => format!("{cell:<width$}"),
                Align::Right => format!("{cell:>width$}"),
            }
        })
        .collect();
    rendered.join("  ").trim_end().to_string()
}
