//! Excel/ODS file reader using calamine

use crate::error::DumpError;
use anyhow::Result;
use calamine::{Data, Range, Reader, Sheets, open_workbook_auto};
use log::{debug, info};
use std::collections::HashMap;
use std::path::Path;

pub mod workbook;

pub use workbook::{CellValue, Sheet, Workbook};

/// Read a workbook from a file path, keeping formulas as formula text.
///
/// Failing to open the file, or to read either the values or the formulas of
/// any sheet, is fatal.
pub fn read_workbook<P: AsRef<Path>>(path: P) -> Result<Workbook> {
    let path = path.as_ref();
    let mut excel: Sheets<_> = open_workbook_auto(path).map_err(|source| DumpError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let sheet_names = excel.sheet_names();
    info!(
        "Opened workbook {} ({} sheets)",
        path.display(),
        sheet_names.len()
    );

    let mut sheets = Vec::with_capacity(sheet_names.len());
    for sheet_name in &sheet_names {
        let values = excel.worksheet_range(sheet_name);
        let formulas = excel.worksheet_formula(sheet_name);
        let sheet = load_sheet(path, sheet_name, values, formulas)?;
        debug!("Sheet '{}': {} cells", sheet.name, sheet.cells.len());
        sheets.push(sheet);
    }

    Ok(Workbook {
        path: path.to_path_buf(),
        sheets,
    })
}

/// Build one sheet from calamine's value and formula reads. A sheet without
/// readable formulas would print cached results in their place, so that is a
/// load failure too.
fn load_sheet(
    path: &Path,
    name: &str,
    values: Result<Range<Data>, calamine::Error>,
    formulas: Result<Range<String>, calamine::Error>,
) -> Result<Sheet, DumpError> {
    let values = values.map_err(|source| DumpError::ReadSheet {
        sheet: name.to_string(),
        path: path.to_path_buf(),
        source,
    })?;
    let formulas = formulas.map_err(|source| DumpError::ReadFormulas {
        sheet: name.to_string(),
        path: path.to_path_buf(),
        source,
    })?;

    Ok(parse_sheet(name, &values, &formulas))
}

/// Merge the value grid and the formula grid of one sheet. Formulas win over
/// their cached values.
fn parse_sheet(name: &str, values: &Range<Data>, formulas: &Range<String>) -> Sheet {
    let mut cells = HashMap::new();

    if let Some((row0, col0)) = values.start() {
        for (r, c, data) in values.used_cells() {
            cells.insert((row0 + r as u32, col0 + c as u32), parse_cell_value(data));
        }
    }

    if let Some((row0, col0)) = formulas.start() {
        for (r, c, formula) in formulas.used_cells() {
            let formula = formula.strip_prefix('=').unwrap_or(formula);
            cells.insert(
                (row0 + r as u32, col0 + c as u32),
                CellValue::Formula(formula.to_string()),
            );
        }
    }

    Sheet {
        name: name.to_string(),
        cells,
    }
}

fn parse_cell_value(data: &Data) -> CellValue {
    match data {
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Bool(b) => CellValue::Boolean(*b),
        Data::Error(e) => CellValue::Error(e.to_string()),
        Data::Empty => CellValue::Empty,
        Data::DateTime(dt) => match dt.as_datetime() {
            Some(ndt) => CellValue::Text(ndt.format("%Y-%m-%d %H:%M:%S").to_string()),
            None => CellValue::Number(dt.as_f64()),
        },
        Data::DateTimeIso(s) => CellValue::Text(s.replacen('T', " ", 1)),
        Data::DurationIso(s) => CellValue::Text(s.clone()),
    }
}
