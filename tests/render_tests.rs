use shiftbook::cli::ui::{CalendarMonth, Table, TableColumn, TableRenderer, UiStyle};

#[test]
fn table_columns_grow_to_fit_content() {
    let mut table = Table::new(
        Some("Entries (2)"),
        vec![TableColumn::right("#"), TableColumn::left("Company"), TableColumn::right("Hours")],
    );
    table.add_row(vec!["1", "Acme", "7.50"]);
    table.add_row(vec!["2", "Beta Corporation", "12.25"]);

    let lines = TableRenderer::render_lines(&table, &UiStyle::plain());
    assert_eq!(
        lines,
        vec![
            "Entries (2)".to_string(),
            "#  Company           Hours".to_string(),
            "-".repeat(26),
            "1  Acme               7.50".to_string(),
            "2  Beta Corporation  12.25".to_string(),
        ]
    );
}

#[test]
fn table_without_columns_renders_only_title() {
    let table = Table::new(Some("Empty"), Vec::new());
    assert_eq!(
        TableRenderer::render_lines(&table, &UiStyle::plain()),
        vec!["Empty".to_string()]
    );
}

#[test]
fn calendar_month_parsing() {
    let month = CalendarMonth::parse("2023-11").expect("valid month");
    assert_eq!(month.title(), "November 2023");
    assert_eq!(month.days(), 30);
    assert!(CalendarMonth::parse("November").is_none());
    assert!(CalendarMonth::parse("2023-00").is_none());
}
