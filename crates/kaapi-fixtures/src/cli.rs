use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Parser;

use crate::config::{load_config, GeneratorConfig};
use crate::error::FixtureResult;

#[derive(Debug, Parser)]
#[command(
    name = "kaapi-fixtures",
    about = "synthetic point-of-sale ledger fixtures, one CSV per simulated day"
)]
pub struct Args {
    /// YAML file providing the base configuration.
    #[arg(long, env = "KAAPI_FIXTURES_CONFIG")]
    pub config: Option<PathBuf>,
    #[arg(long, env = "KAAPI_FIXTURES_DIR")]
    pub output_dir: Option<PathBuf>,
    /// First simulated day, as YYYY-MM-DD.
    #[arg(long)]
    pub start_date: Option<NaiveDate>,
    #[arg(long)]
    pub days: Option<u32>,
    #[arg(long)]
    pub min_transactions: Option<u32>,
    #[arg(long)]
    pub max_transactions: Option<u32>,
    #[arg(long)]
    pub prefix: Option<String>,
    /// Seed for a reproducible run; omitted means OS entropy.
    #[arg(long, env = "KAAPI_FIXTURES_SEED")]
    pub seed: Option<u64>,
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Defaults, then the config file, then command-line overrides.
    pub fn resolve_config(&self) -> FixtureResult<GeneratorConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path)?,
            None => GeneratorConfig::default(),
        };

        if let Some(dir) = &self.output_dir {
            config.output_dir = dir.clone();
        }
        if let Some(date) = self.start_date {
            config.start_date = date;
        }
        if let Some(days) = self.days {
            config.day_count = days;
        }
        if let Some(min) = self.min_transactions {
            config.txn_count_range.min = min;
        }
        if let Some(max) = self.max_transactions {
            config.txn_count_range.max = max;
        }
        if let Some(prefix) = &self.prefix {
            config.file_prefix = prefix.clone();
        }

        config.validate()?;
        Ok(config)
    }

    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "info"
        }
    }
}
