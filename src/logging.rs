//! File-backed logging
//!
//! The play screen owns the terminal, so log lines go to a file instead of
//! stderr. Without a log file nothing is installed and the `log` macros are
//! no-ops.

use anyhow::{Context, Result};
use simplelog::{Config, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::Path;

pub fn init_file_logger(path: &Path, level: LevelFilter) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create log file {}", path.display()))?;
    WriteLogger::init(level, Config::default(), file).context("Failed to initialize logger")?;
    Ok(())
}

/// `-v` count to level: warn by default, then info, then debug
pub fn level_from_verbosity(verbose: u8) -> LevelFilter {
    match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        _ => LevelFilter::Debug,
    }
}
