//! Plain-text table rendering

use crate::record::{Field, StudentRecord};

pub const NO_RECORDS: &str = "No records found";

/// Renders records as an aligned text table with a header row.
pub fn render_table<'a, I>(records: I) -> String
where
    I: IntoIterator<Item = &'a StudentRecord>,
{
    let rows: Vec<Vec<String>> = records
        .into_iter()
        .map(|record| Field::ALL.iter().map(|&f| record.field_text(f)).collect())
        .collect();

    if rows.is_empty() {
        return format!("{}\n", NO_RECORDS);
    }

    let mut widths: Vec<usize> = Field::ALL.iter().map(|f| f.label().len()).collect();
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let header: Vec<String> = Field::ALL.iter().map(|f| f.label().to_string()).collect();
    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();

    let mut out = String::new();
    push_row(&mut out, &header, &widths);
    push_row(&mut out, &rule, &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out
}

fn push_row(out: &mut String, cells: &[String], widths: &[usize]) {
    let line: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{:<width$}", cell, width = width))
        .collect();
    out.push_str(line.join(" | ").trim_end());
    out.push('\n');
}
