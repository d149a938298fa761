//! Turning cell windows into printable row lines

use crate::layout::{FormulaScanSpec, TableSpec};
use crate::reader::{CellValue, Sheet};
use log::debug;

/// Separator between the tokens of one row
pub const SEPARATOR: &str = " | ";

/// A titled block of output lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub gap_before: usize,
    pub lines: Vec<String>,
}

/// Keep the first `max_len` characters (not bytes) of `text`
pub fn truncate(text: &str, max_len: usize) -> String {
    text.chars().take(max_len).collect()
}

/// `R<NN>: a | b | c`
pub fn row_line(row: u32, tokens: &[String]) -> String {
    format!("R{:02}: {}", row, tokens.join(SEPARATOR))
}

/// Token for a plain table cell. Falsy values print as nothing.
pub fn table_token(value: Option<&CellValue>, max_len: usize) -> String {
    match value {
        Some(v) if !v.is_blank() => truncate(&v.to_string(), max_len),
        _ => String::new(),
    }
}

/// Token for the formula-aware scan. Any text starting with `=` is shown
/// bracketed, whether it came from a formula or from a literal string.
pub fn scan_token(value: Option<&CellValue>, max_len: usize, formula_len: usize) -> String {
    let Some(value) = value.filter(|v| !v.is_empty()) else {
        return String::new();
    };

    let text = value.to_string();
    if text.starts_with('=') {
        format!("[{}]", truncate(&text, formula_len))
    } else {
        truncate(&text, max_len)
    }
}

/// Render every row of a table window, blank rows included
pub fn render_table(sheet: &Sheet, spec: &TableSpec) -> Section {
    let lines: Vec<String> = spec
        .window
        .rows()
        .map(|row| {
            let tokens: Vec<String> = spec
                .window
                .cols()
                .map(|col| table_token(sheet.value_at(row, col), spec.max_len))
                .collect();
            row_line(row, &tokens)
        })
        .collect();

    debug!("{}: {} lines from '{}'", spec.title, lines.len(), sheet.name);
    Section {
        title: spec.title.to_string(),
        gap_before: spec.gap_before,
        lines,
    }
}

/// Render the formula-aware scan, skipping rows with nothing to show
pub fn render_formula_scan(sheet: &Sheet, spec: &FormulaScanSpec) -> Section {
    let mut lines = Vec::new();

    for row in spec.window.rows() {
        let tokens: Vec<String> = spec
            .window
            .cols()
            .map(|col| scan_token(sheet.value_at(row, col), spec.max_len, spec.formula_len))
            .collect();

        if tokens.iter().any(|t| !t.is_empty()) {
            lines.push(row_line(row, &tokens));
        }
    }

    debug!("{}: {} lines from '{}'", spec.title, lines.len(), sheet.name);
    Section {
        title: spec.title.to_string(),
        gap_before: spec.gap_before,
        lines,
    }
}
