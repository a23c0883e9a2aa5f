//! GitHub-flavoured pipe tables.
//!
//! Rows come in already sanitized (see [`sanitize`](crate::sanitize)) and are
//! laid out as:
//!
//! ```text
//! | sku   |   qty | note    |
//! |-------|-------|---------|
//! | W-1   |     2 | fragile |
//! | G-22  |    10 |         |
//! ```
//!
//! Every column is at least two characters wider than its header. Numeric
//! columns are right-aligned with their decimal points lined up; everything
//! else is left-aligned. A row missing a column gets an empty cell.

use crate::sanitize::SanitizedRow;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ColumnKind {
    Integer,
    Float,
    Text,
}

/// Extra width every column gets beyond its header.
const HEADER_PADDING: usize = 2;

/// Renders `rows` as a pipe table with one column per entry of `headers`.
///
/// With `numeric_alignment` disabled every column is left-aligned.
///
/// # Examples
///
/// ```rust
/// use content_report::table::write_table;
/// use content_report::sanitize::SanitizedRow;
///
/// let mut row = SanitizedRow::new();
/// row.insert("name".to_string(), "Widget".to_string());
/// row.insert("qty".to_string(), "3".to_string());
///
/// let headers = vec!["name".to_string(), "qty".to_string()];
/// let table = write_table(&headers, &[row], true);
/// assert_eq!(
///     table,
///     "| name   |   qty |\n|--------|-------|\n| Widget |     3 |"
/// );
/// ```
#[must_use]
pub fn write_table(headers: &[String], rows: &[SanitizedRow], numeric_alignment: bool) -> String {
    // A pipe table needs at least one column.
    if headers.is_empty() {
        return String::new();
    }

    let mut columns: Vec<Vec<String>> = Vec::with_capacity(headers.len());
    let mut right_aligned: Vec<bool> = Vec::with_capacity(headers.len());

    for header in headers {
        let cells: Vec<Option<&str>> = rows
            .iter()
            .map(|row| row.get(header).map(String::as_str))
            .collect();
        let kind = if numeric_alignment {
            column_kind(cells.iter().flatten().copied())
        } else {
            ColumnKind::Text
        };

        let cells = match kind {
            ColumnKind::Text => cells
                .iter()
                .map(|cell| cell.unwrap_or_default().to_string())
                .collect(),
            ColumnKind::Integer | ColumnKind::Float => align_decimals(&cells),
        };
        columns.push(cells);
        right_aligned.push(kind != ColumnKind::Text);
    }

    let widths: Vec<usize> = headers
        .iter()
        .zip(&columns)
        .map(|(header, cells)| {
            cells
                .iter()
                .map(|c| c.chars().count())
                .chain(std::iter::once(header.chars().count() + HEADER_PADDING))
                .max()
                .unwrap_or(HEADER_PADDING)
        })
        .collect();

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(write_row(
        headers.iter().map(String::as_str),
        &widths,
        &right_aligned,
    ));
    lines.push(format!(
        "|{}|",
        widths
            .iter()
            .map(|w| "-".repeat(w + 2))
            .collect::<Vec<_>>()
            .join("|")
    ));
    for index in 0..rows.len() {
        lines.push(write_row(
            columns.iter().map(|column| column[index].as_str()),
            &widths,
            &right_aligned,
        ));
    }

    lines.join("\n")
}

fn write_row<'a>(
    cells: impl Iterator<Item = &'a str>,
    widths: &[usize],
    right_aligned: &[bool],
) -> String {
    let padded: Vec<String> = cells
        .zip(widths.iter().zip(right_aligned))
        .map(|(cell, (&width, &right))| {
            if right {
                format!("{:>width$}", cell, width = width)
            } else {
                format!("{:<width$}", cell, width = width)
            }
        })
        .collect();
    format!("| {} |", padded.join(" | "))
}

fn column_kind<'a>(mut cells: impl Iterator<Item = &'a str> + Clone) -> ColumnKind {
    if cells.clone().next().is_none() {
        return ColumnKind::Text;
    }
    if cells.clone().all(is_integer) {
        ColumnKind::Integer
    } else if cells.all(is_number) {
        ColumnKind::Float
    } else {
        ColumnKind::Text
    }
}

/// Pads cells on the right so that their decimal points line up.
fn align_decimals(cells: &[Option<&str>]) -> Vec<String> {
    let decimals: Vec<isize> = cells
        .iter()
        .map(|cell| cell.map_or(-1, digits_after_point))
        .collect();
    let max_decimals = decimals.iter().copied().max().unwrap_or(-1);

    cells
        .iter()
        .zip(decimals)
        .map(|(cell, places)| {
            let padding = (max_decimals - places).max(0) as usize;
            format!("{}{}", cell.unwrap_or_default(), " ".repeat(padding))
        })
        .collect()
}

fn is_integer(cell: &str) -> bool {
    cell.parse::<i64>().is_ok()
}

fn is_number(cell: &str) -> bool {
    match cell.parse::<f64>() {
        Ok(n) if n.is_finite() => true,
        Ok(_) => matches!(cell.to_ascii_lowercase().as_str(), "inf" | "-inf" | "nan"),
        Err(_) => false,
    }
}

/// Characters after the decimal point (or exponent marker); `-1` when there are none.
fn digits_after_point(cell: &str) -> isize {
    if !is_number(cell) || is_integer(cell) {
        return -1;
    }
    let lowered = cell.to_ascii_lowercase();
    match lowered.rfind('.').or_else(|| lowered.rfind('e')) {
        Some(pos) => (cell.len() - pos - 1) as isize,
        None => -1,
    }
}
