//! Logging setup
//!
//! The terminal is owned by the UI, so log output goes to a file in the data
//! directory.

use crate::config::Config;
use anyhow::Result;
use std::fs;
use std::sync::Mutex;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub const LOG_FILE: &str = "finance-tui.log";
pub const LOG_ENV: &str = "FINANCE_TUI_LOG";

/// Resolve the filter: `RUST_LOG`, then `FINANCE_TUI_LOG`, then the config
fn build_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_from_env(LOG_ENV))
        .or_else(|_| EnvFilter::try_new(&config.log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

pub fn initialize_logging(config: &Config) -> Result<()> {
    let directory = config.data_path();
    fs::create_dir_all(&directory)?;
    let log_file = fs::File::create(directory.join(LOG_FILE))?;

    let file_layer = fmt::layer()
        .with_file(true)
        .with_line_number(true)
        .with_writer(Mutex::new(log_file))
        .with_target(false)
        .with_ansi(false)
        .with_filter(build_filter(config));

    tracing_subscriber::registry().with(file_layer).try_init()?;
    Ok(())
}
