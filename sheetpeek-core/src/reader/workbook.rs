//! Workbook data structures

use std::collections::HashMap;
use std::fmt;
use std::path::PathBuf;

/// Represents a loaded workbook
#[derive(Debug, Clone, Default)]
pub struct Workbook {
    pub path: PathBuf,
    pub sheets: Vec<Sheet>,
}

impl Workbook {
    /// Get a sheet by name
    pub fn get_sheet(&self, name: &str) -> Option<&Sheet> {
        self.sheets.iter().find(|s| s.name == name)
    }

    /// Get all sheet names
    pub fn sheet_names(&self) -> Vec<&str> {
        self.sheets.iter().map(|s| s.name.as_str()).collect()
    }
}

/// Represents a worksheet
#[derive(Debug, Clone, Default)]
pub struct Sheet {
    pub name: String,
    /// Non-empty values keyed by 0-based (row, col)
    pub cells: HashMap<(u32, u32), CellValue>,
}

impl Sheet {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cells: HashMap::new(),
        }
    }

    /// Builder-style insert at a 1-based position
    #[cfg(test)]
    pub(crate) fn with_cell(mut self, row: u32, col: u32, value: CellValue) -> Self {
        if let (Some(row), Some(col)) = (row.checked_sub(1), col.checked_sub(1)) {
            self.cells.insert((row, col), value);
        }
        self
    }

    /// Get the value at the given 0-based position
    pub fn get_value(&self, row: u32, col: u32) -> Option<&CellValue> {
        self.cells.get(&(row, col))
    }

    /// Get the value at a 1-based (row, column). Row 0 or column 0 is never
    /// populated.
    pub fn value_at(&self, row: u32, col: u32) -> Option<&CellValue> {
        self.get_value(row.checked_sub(1)?, col.checked_sub(1)?)
    }
}

/// Cell value types
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Empty,
    Number(f64),
    Text(String),
    Boolean(bool),
    Error(String),
    /// Formula text as stored in the file, without the leading `=`
    Formula(String),
}

impl CellValue {
    /// Check if the cell is empty
    pub fn is_empty(&self) -> bool {
        matches!(self, CellValue::Empty)
    }

    /// Falsy values: empty, empty text, zero and `false`. The data tables
    /// print these as blanks.
    pub fn is_blank(&self) -> bool {
        match self {
            CellValue::Empty => true,
            CellValue::Number(n) => *n == 0.0,
            CellValue::Text(s) => s.is_empty(),
            CellValue::Boolean(b) => !b,
            CellValue::Error(_) | CellValue::Formula(_) => false,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Empty => Ok(()),
            CellValue::Number(n) => f.write_str(&format_number(*n)),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Boolean(true) => f.write_str("True"),
            CellValue::Boolean(false) => f.write_str("False"),
            CellValue::Error(e) => f.write_str(e),
            CellValue::Formula(formula) => write!(f, "={}", formula),
        }
    }
}

/// Whole numbers print without a fraction. Others use the shortest
/// round-trip digits, switching to `1.5e-05` / `1e+16` style outside
/// `1e-4 <= |n| < 1e16`.
fn format_number(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e16 {
        return format!("{}", n as i64);
    }

    let sci = format!("{:e}", n);
    let Some((mantissa, exp)) = sci.split_once('e') else {
        return n.to_string();
    };
    match exp.parse::<i32>() {
        Ok(exp) if !(-4..16).contains(&exp) => {
            let sign = if exp < 0 { '-' } else { '+' };
            format!("{}e{}{:02}", mantissa, sign, exp.abs())
        }
        _ => n.to_string(),
    }
}
