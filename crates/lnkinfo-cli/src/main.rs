//! lnkinfo - Print the metadata stored in Windows Shell Link files
//!
//! This tool decodes a `.lnk` file and prints its header timestamps,
//! target paths and string data as a field-by-field report.

use anyhow::{bail, Context, Result};
use clap::Parser;
use lnkinfo_core::{LnkParser, Report, ReportConfig};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, trace, Level};
use tracing_subscriber::EnvFilter;

/// Print the metadata stored in a Windows Shell Link (.lnk) file
#[derive(Parser, Debug)]
#[command(name = "lnkinfo")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Path to the .lnk file
    file: PathBuf,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Also list the names of the set link flags
    #[arg(long)]
    flags: bool,

    /// Also list the skipped extra data blocks
    #[arg(long)]
    extra: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let report = process_file(&cli, &cli.file)?;
    print!("{}", report);
    Ok(())
}

/// Decode a single link file and render its report
fn process_file(cli: &Cli, file: &Path) -> Result<String> {
    if !file.is_file() {
        bail!("Input path is not a file: {}", file.display());
    }

    trace!("Reading {}", file.display());
    let data = fs::read(file)
        .with_context(|| format!("Failed to read input file: {}", file.display()))?;
    debug!("Read {} bytes from {}", data.len(), file.display());

    let lnk = LnkParser::new()
        .parse(&data)
        .with_context(|| format!("Failed to parse link file: {}", file.display()))?;

    let config = ReportConfig::new()
        .show_flags(cli.flags)
        .show_extra_blocks(cli.extra);
    Ok(Report::new(&lnk).with_config(config).render())
}
