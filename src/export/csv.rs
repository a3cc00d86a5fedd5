use crate::models::{Cell, Table};

/// Renders a table as comma-separated values with a header row.
pub fn to_csv(table: &Table) -> String {
    let mut output = String::new();

    let header: Vec<String> = table.column_names().into_iter().map(escape).collect();
    output.push_str(&header.join(","));
    output.push('\n');

    for row in table.rows() {
        let fields: Vec<String> = row.into_iter().map(format_cell).collect();
        output.push_str(&fields.join(","));
        output.push('\n');
    }

    output
}

fn format_cell(cell: &Cell) -> String {
    match cell {
        Cell::Text(s) => escape(s),
        other => other.to_string(),
    }
}

fn escape(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}
