use std::path::{Path, PathBuf};

use chrono::{Days, NaiveDate};
use serde::Deserialize;

use crate::catalog::{default_catalog, default_payment_methods, Product};
use crate::distribution::DiscreteDistribution;
use crate::error::{FixtureError, FixtureResult};

pub const DEFAULT_OUTPUT_DIR: &str = "test-data";
pub const DEFAULT_FILE_PREFIX: &str = "kaapi_ledger";
pub const DEFAULT_FILE_EXTENSION: &str = "csv";
pub const DEFAULT_DAY_COUNT: u32 = 5;

/// Inclusive bounds on the number of transactions drawn for one day.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize)]
pub struct CountRange {
    pub min: u32,
    pub max: u32,
}

/// Inclusive opening hours; minutes are always drawn from the whole hour.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize)]
pub struct HourRange {
    pub start: u32,
    pub end: u32,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Deserialize)]
pub struct QuantityWeight {
    pub value: u32,
    pub weight: u32,
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    pub start_date: NaiveDate,
    pub day_count: u32,
    pub txn_count_range: CountRange,
    pub catalog: Vec<Product>,
    pub payment_methods: Vec<String>,
    pub hour_range: HourRange,
    pub quantity_weights: Vec<QuantityWeight>,
    pub output_dir: PathBuf,
    pub file_prefix: String,
    pub file_extension: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            start_date: NaiveDate::from_ymd_opt(2026, 2, 8).unwrap_or_default(),
            day_count: DEFAULT_DAY_COUNT,
            txn_count_range: CountRange { min: 100, max: 300 },
            catalog: default_catalog(),
            payment_methods: default_payment_methods(),
            hour_range: HourRange { start: 7, end: 18 },
            quantity_weights: vec![
                QuantityWeight { value: 1, weight: 80 },
                QuantityWeight { value: 2, weight: 15 },
                QuantityWeight { value: 3, weight: 5 },
            ],
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            file_prefix: DEFAULT_FILE_PREFIX.to_string(),
            file_extension: DEFAULT_FILE_EXTENSION.to_string(),
        }
    }
}

impl GeneratorConfig {
    pub fn validate(&self) -> FixtureResult<()> {
        if self.day_count == 0 {
            return Err(FixtureError::InvalidArgument(
                "day_count must be at least 1".to_string(),
            ));
        }
        let _ = self.simulated_date(self.day_count - 1)?;

        let CountRange { min, max } = self.txn_count_range;
        if min > max {
            return Err(FixtureError::InvalidArgument(format!(
                "txn_count_range min {min} exceeds max {max}"
            )));
        }

        if self.catalog.is_empty() {
            return Err(FixtureError::InvalidArgument(
                "catalog must not be empty".to_string(),
            ));
        }
        if let Some(product) = self.catalog.iter().find(|p| p.name.trim().is_empty()) {
            return Err(FixtureError::InvalidArgument(format!(
                "catalog product with category '{}' has an empty name",
                product.category
            )));
        }

        if self.payment_methods.is_empty() {
            return Err(FixtureError::InvalidArgument(
                "payment_methods must not be empty".to_string(),
            ));
        }
        if self.payment_methods.iter().any(|m| m.trim().is_empty()) {
            return Err(FixtureError::InvalidArgument(
                "payment_methods must not contain empty labels".to_string(),
            ));
        }

        let HourRange { start, end } = self.hour_range;
        if start > end || end > 23 {
            return Err(FixtureError::InvalidArgument(format!(
                "hour_range {start}..={end} must be ordered and within 0..=23"
            )));
        }

        if self.quantity_weights.iter().any(|q| q.value == 0) {
            return Err(FixtureError::InvalidArgument(
                "quantity_weights values must be positive".to_string(),
            ));
        }
        let _ = self.quantity_distribution()?;

        validate_file_token("file_prefix", &self.file_prefix)?;
        validate_file_token("file_extension", &self.file_extension)?;
        Ok(())
    }

    pub fn quantity_distribution(&self) -> FixtureResult<DiscreteDistribution<u32>> {
        DiscreteDistribution::new(self.quantity_weights.iter().map(|q| (q.value, q.weight)))
    }

    /// Date of the simulated day `offset` days after `start_date`.
    pub fn simulated_date(&self, offset: u32) -> FixtureResult<NaiveDate> {
        self.start_date
            .checked_add_days(Days::new(u64::from(offset)))
            .ok_or_else(|| {
                FixtureError::InvalidArgument(format!(
                    "start_date {} plus {offset} days is out of range",
                    self.start_date
                ))
            })
    }
}

fn validate_file_token(field: &str, value: &str) -> FixtureResult<()> {
    if value.is_empty() {
        return Err(FixtureError::InvalidArgument(format!(
            "{field} must not be empty"
        )));
    }
    if matches!(value, "." | "..") {
        return Err(FixtureError::InvalidArgument(format!(
            "{field} '{value}' is not allowed"
        )));
    }
    if !value
        .bytes()
        .all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'-' | b'_'))
    {
        return Err(FixtureError::InvalidArgument(format!(
            "{field} contains invalid characters; allowed: [A-Za-z0-9._-]"
        )));
    }
    Ok(())
}

/// Reads a YAML config; absent fields keep their defaults. The result is not
/// validated so callers can apply overrides first.
pub fn load_config(path: impl AsRef<Path>) -> FixtureResult<GeneratorConfig> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| FixtureError::io(path, source))?;
    serde_yaml::from_slice::<GeneratorConfig>(&bytes).map_err(|error| FixtureError::Config {
        path: path.to_path_buf(),
        message: error.to_string(),
    })
}
