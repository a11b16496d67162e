//! Bordered table rendering.

use osctl_core::FieldValue;
use prettytable::{Cell, Row, Table};

/// Render headers and rows as a bordered table.
pub fn render_rows<I>(headers: &[&str], rows: I) -> String
where
    I: Iterator<Item = Vec<String>>,
{
    let mut table = Table::new();
    table.set_titles(Row::new(headers.iter().map(|h| Cell::new(h)).collect()));
    for row in rows {
        table.add_row(Row::new(row.iter().map(|cell| Cell::new(cell)).collect()));
    }
    table.to_string()
}

/// Render attribute pairs as a two-column `Field | Value` table.
pub fn render_fields(fields: &[(&str, FieldValue)]) -> String {
    let mut table = Table::new();
    table.set_titles(Row::new(vec![Cell::new("Field"), Cell::new("Value")]));
    for (name, value) in fields {
        table.add_row(Row::new(vec![
            Cell::new(name),
            Cell::new(&value.to_string()),
        ]));
    }
    table.to_string()
}
