use std::path::PathBuf;
use thiserror::Error;

/// Load failures. Every variant is fatal to a dump run.
#[derive(Error, Debug)]
pub enum DumpError {
    #[error("Failed to open workbook: {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("Failed to read sheet '{sheet}' in {}", .path.display())]
    ReadSheet {
        sheet: String,
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("Failed to read formulas of sheet '{sheet}' in {}", .path.display())]
    ReadFormulas {
        sheet: String,
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error(
        "Sheet '{sheet}' not found in {} (available: {})",
        .path.display(),
        .available.join(", ")
    )]
    MissingSheet {
        sheet: String,
        path: PathBuf,
        available: Vec<String>,
    },
}
