//! Startup side effects: logging to a file (the TUI owns the terminal, so
//! nothing may print to stdout/stderr once it is up).

use std::fs::File;
use std::path::PathBuf;
use std::str::FromStr;

use haptica_core::Config;
use simplelog::WriteLogger;

fn log_path() -> Option<PathBuf> {
    let dir = dirs::state_dir()
        .or_else(dirs::data_local_dir)?
        .join("haptica");
    std::fs::create_dir_all(&dir).ok()?;
    Some(dir.join("haptica.log"))
}

/// Initialize file logging. Failure to open the log file is not fatal; the
/// app just runs without diagnostics.
pub fn init_logging(config: &Config) {
    let level = log::LevelFilter::from_str(&config.log_level).unwrap_or(log::LevelFilter::Info);
    if level == log::LevelFilter::Off {
        return;
    }
    let Some(path) = log_path() else { return };
    if let Ok(file) = File::create(&path) {
        let _ = WriteLogger::init(level, simplelog::Config::default(), file);
    }
}
