//! The fixed cell windows printed for an incentive workbook.
//!
//! All positions are 1-based and inclusive. The windows match one workbook's
//! layout; nothing here discovers ranges.

use std::ops::RangeInclusive;

/// Workbook opened when no path is given on the command line
pub const DEFAULT_WORKBOOK_PATH: &str = "public/INCENTIVE DL SI V1 - Modify 11.12 (1).xlsx";

pub const DATA_SHEET: &str = "Data";
pub const INCENTIVE_SHEET: &str = "INCENTIVE";

/// Inclusive rectangle of cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellWindow {
    pub first_row: u32,
    pub last_row: u32,
    pub first_col: u32,
    pub last_col: u32,
}

impl CellWindow {
    pub const fn new(rows: (u32, u32), cols: (u32, u32)) -> Self {
        Self {
            first_row: rows.0,
            last_row: rows.1,
            first_col: cols.0,
            last_col: cols.1,
        }
    }

    pub fn rows(&self) -> RangeInclusive<u32> {
        self.first_row..=self.last_row
    }

    pub fn cols(&self) -> RangeInclusive<u32> {
        self.first_col..=self.last_col
    }
}

/// A plain table: every row in the window is printed, every token is cut to
/// `max_len` characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableSpec {
    pub title: &'static str,
    pub sheet: &'static str,
    pub window: CellWindow,
    pub max_len: usize,
    /// Blank lines printed before the title
    pub gap_before: usize,
}

/// A formula-aware scan: formulas are bracketed, empty rows are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormulaScanSpec {
    pub title: &'static str,
    pub sheet: &'static str,
    pub window: CellWindow,
    pub max_len: usize,
    pub formula_len: usize,
    pub gap_before: usize,
}

/// Everything one dump prints, in order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    pub banner: &'static str,
    pub tables: Vec<TableSpec>,
    pub scan: FormulaScanSpec,
}

impl Layout {
    /// Sheet names the layout reads, in first-use order
    pub fn sheet_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = Vec::new();
        for name in self
            .tables
            .iter()
            .map(|t| t.sheet)
            .chain(std::iter::once(self.scan.sheet))
        {
            if !names.contains(&name) {
                names.push(name);
            }
        }
        names
    }
}

impl Default for Layout {
    fn default() -> Self {
        Self {
            banner: "=== PHÂN TÍCH CHI TIẾT SHEET DATA ===",
            tables: DATA_TABLES.to_vec(),
            scan: INCENTIVE_SCAN,
        }
    }
}

pub const DATA_TABLES: [TableSpec; 4] = [
    TableSpec {
        title: "BẢNG 1: TỶ LỆ THƯỞNG THEO KỲ HẠN",
        sheet: DATA_SHEET,
        // F..K
        window: CellWindow::new((2, 11), (6, 11)),
        max_len: 15,
        gap_before: 0,
    },
    TableSpec {
        title: "BẢNG 2: CHỈ TIÊU VÀ TIỀN THƯỞNG",
        sheet: DATA_SHEET,
        // G..M
        window: CellWindow::new((14, 18), (7, 13)),
        max_len: 12,
        gap_before: 1,
    },
    TableSpec {
        title: "BẢNG 3: BẢO HIỂM THEO DSGN VÀ KỲ HẠN",
        sheet: DATA_SHEET,
        window: CellWindow::new((22, 31), (7, 13)),
        max_len: 15,
        gap_before: 1,
    },
    TableSpec {
        title: "BẢNG 4: HỆ SỐ PR3/PR6",
        sheet: DATA_SHEET,
        window: CellWindow::new((32, 51), (7, 13)),
        max_len: 15,
        gap_before: 1,
    },
];

pub const INCENTIVE_SCAN: FormulaScanSpec = FormulaScanSpec {
    title: "PHÂN TÍCH INCENTIVE SHEET",
    sheet: INCENTIVE_SHEET,
    // A..I
    window: CellWindow::new((1, 39), (1, 9)),
    max_len: 25,
    formula_len: 80,
    gap_before: 2,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_layout_sheets() {
        assert_eq!(Layout::default().sheet_names(), vec!["Data", "INCENTIVE"]);
    }

    #[test]
    fn test_table_widths() {
        let widths: Vec<usize> = DATA_TABLES.iter().map(|t| t.window.cols().count()).collect();
        assert_eq!(widths, vec![6, 7, 7, 7]);
        assert_eq!(INCENTIVE_SCAN.window.rows().count(), 39);
    }

    #[test]
    fn test_table_three_stops_before_table_four() {
        assert_eq!(DATA_TABLES[2].window.last_row, 31);
        assert_eq!(DATA_TABLES[3].window.first_row, 32);
        assert_eq!(DATA_TABLES[3].window.rows().count(), 20);
    }
}
