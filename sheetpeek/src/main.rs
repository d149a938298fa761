use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use log::LevelFilter;
use sheetpeek_core::Dumper;
use sheetpeek_core::layout::DEFAULT_WORKBOOK_PATH;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "sheetpeek")]
#[command(about = "Print the incentive tables of a workbook for manual review", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to the Excel/ODS file
    #[arg(value_name = "FILE", default_value = DEFAULT_WORKBOOK_PATH)]
    file: PathBuf,

    /// Log more to stderr (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    };

    // RUST_LOG, when set, wins over the flag
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let report = Dumper::new().dump_file(&cli.file)?;

    let mut out = io::stdout().lock();
    report
        .write_to(&mut out)
        .context("Failed to write report to stdout")?;

    Ok(())
}
