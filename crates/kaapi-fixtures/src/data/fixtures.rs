use std::fs::{self, File};
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use csv::{Terminator, WriterBuilder};
use rand::Rng;
use tracing::{debug, info};

use super::generator::generate_day_with;
use super::record::{TransactionRecord, CSV_HEADER};
use crate::config::GeneratorConfig;
use crate::error::{FixtureError, FixtureResult};

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GeneratedFile {
    pub date: NaiveDate,
    pub path: PathBuf,
    pub rows: usize,
}

pub fn fixture_file_name(config: &GeneratorConfig, date: NaiveDate) -> String {
    format!(
        "{}_{}.{}",
        config.file_prefix,
        date.format("%Y_%m_%d"),
        config.file_extension
    )
}

pub fn fixture_path(config: &GeneratorConfig, date: NaiveDate) -> PathBuf {
    config.output_dir.join(fixture_file_name(config, date))
}

/// Writes the header and `records` to `path`, truncating any existing file.
pub fn write_day_file(path: &Path, records: &[TransactionRecord]) -> FixtureResult<()> {
    let file = File::create(path).map_err(|source| FixtureError::io(path, source))?;
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::Any(b'\n'))
        .from_writer(file);

    writer
        .write_record(CSV_HEADER)
        .map_err(|source| FixtureError::csv(path, source))?;
    for record in records {
        writer
            .write_record(record.to_fields())
            .map_err(|source| FixtureError::csv(path, source))?;
    }
    writer
        .flush()
        .map_err(|source| FixtureError::io(path, source))?;
    Ok(())
}

/// Generates one file per simulated day, in date order.
pub fn generate_fixtures<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    rng: &mut R,
) -> FixtureResult<Vec<GeneratedFile>> {
    config.validate()?;
    let quantities = config.quantity_distribution()?;
    debug!(
        start_date = %config.start_date,
        days = config.day_count,
        min_rows = config.txn_count_range.min,
        max_rows = config.txn_count_range.max,
        output_dir = %config.output_dir.display(),
        "generating fixtures"
    );
    fs::create_dir_all(&config.output_dir)
        .map_err(|source| FixtureError::io(&config.output_dir, source))?;

    let mut out = Vec::with_capacity(config.day_count as usize);
    for offset in 0..config.day_count {
        let date = config.simulated_date(offset)?;
        let records = generate_day_with(config, &quantities, date, rng)?;
        let path = fixture_path(config, date);
        write_day_file(&path, &records)?;
        info!(
            path = %path.display(),
            %date,
            rows = records.len(),
            "generated fixture file"
        );
        out.push(GeneratedFile {
            date,
            path,
            rows: records.len(),
        });
    }

    Ok(out)
}
