//! sheetpeek-core: print fixed cell windows of an incentive workbook
//!
//! The workbook is loaded once with formulas kept as text, the `Data` tables
//! and the `INCENTIVE` scan are rendered to lines, and the caller writes the
//! resulting [`Report`] wherever it wants.

pub mod error;
pub mod layout;
pub mod reader;
pub mod render;

use anyhow::Result;
use std::fmt;
use std::io::{self, Write};
use std::path::Path;

pub use error::DumpError;
pub use layout::Layout;
pub use reader::{CellValue, Sheet, Workbook, read_workbook};
pub use render::Section;

/// Main dumper interface
pub struct Dumper {
    layout: Layout,
}

impl Dumper {
    /// Create a dumper for the incentive workbook layout
    pub fn new() -> Self {
        Self::with_layout(Layout::default())
    }

    pub fn with_layout(layout: Layout) -> Self {
        Self { layout }
    }

    /// Load a workbook and render it. Nothing is rendered unless the file
    /// opens and every sheet the layout needs is present.
    pub fn dump_file<P: AsRef<Path>>(&self, path: P) -> Result<Report> {
        let workbook = read_workbook(path)?;
        self.dump_workbook(&workbook)
    }

    pub fn dump_workbook(&self, workbook: &Workbook) -> Result<Report> {
        for name in self.layout.sheet_names() {
            require_sheet(workbook, name)?;
        }

        let mut sections = Vec::with_capacity(self.layout.tables.len() + 1);
        for table in &self.layout.tables {
            let sheet = require_sheet(workbook, table.sheet)?;
            sections.push(render::render_table(sheet, table));
        }

        let scan = &self.layout.scan;
        let sheet = require_sheet(workbook, scan.sheet)?;
        sections.push(render::render_formula_scan(sheet, scan));

        Ok(Report {
            banner: self.layout.banner.to_string(),
            sections,
        })
    }
}

impl Default for Dumper {
    fn default() -> Self {
        Self::new()
    }
}

fn require_sheet<'a>(workbook: &'a Workbook, name: &str) -> Result<&'a Sheet, DumpError> {
    workbook
        .get_sheet(name)
        .ok_or_else(|| DumpError::MissingSheet {
            sheet: name.to_string(),
            path: workbook.path.clone(),
            available: workbook.sheet_names().into_iter().map(String::from).collect(),
        })
}

/// Rendered output of one dump
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub banner: String,
    pub sections: Vec<Section>,
}

impl Report {
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{}", self)?;
        out.flush()
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.banner)?;
        writeln!(f)?;

        for section in &self.sections {
            for _ in 0..section.gap_before {
                writeln!(f)?;
            }
            writeln!(f, "=== {} ===", section.title)?;
            for line in &section.lines {
                writeln!(f, "{}", line)?;
            }
        }

        Ok(())
    }
}
