// ABOUTME: CLI argument parsing for teapot
//
// teapot [--debug] [--output-dir DIR] [--config FILE]
// Always launches the wizard; flags only tune logging, output and config.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::config::AppConfig;

/// Interactive wizard that scaffolds a monorepo configuration
#[derive(Debug, Parser)]
#[command(name = "teapot")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Verbose logging to the log file
    #[arg(long)]
    pub debug: bool,

    /// Directory the generated teapot.yml is written to
    #[arg(long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Use this config file instead of the default search path
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// `tracing` filter directive for this run
    pub const fn log_filter(&self) -> &'static str {
        if self.debug {
            "teapot=debug"
        } else {
            "teapot=info"
        }
    }

    /// Loads config from `--config` or the default locations, then applies
    /// flag overrides.
    pub fn resolve_config(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::load_from_file(path)?,
            None => AppConfig::load()?,
        };
        if let Some(dir) = &self.output_dir {
            config.output.directory = dir.clone();
        }
        Ok(config)
    }
}
