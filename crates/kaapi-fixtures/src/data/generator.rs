use chrono::NaiveDate;
use rand::Rng;

use super::record::{TransactionDraw, TransactionRecord};
use crate::config::GeneratorConfig;
use crate::distribution::DiscreteDistribution;
use crate::error::FixtureResult;

const MINUTES_PER_HOUR: u32 = 60;

/// Draws one row's choices. `config` must already be validated.
pub fn draw_transaction<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    quantities: &DiscreteDistribution<u32>,
    rng: &mut R,
) -> TransactionDraw {
    let product = rng.gen_range(0..config.catalog.len());
    let quantity = *quantities.sample(rng);
    let hour = rng.gen_range(config.hour_range.start..=config.hour_range.end);
    let minute = rng.gen_range(0..MINUTES_PER_HOUR);
    let payment = rng.gen_range(0..config.payment_methods.len());
    TransactionDraw {
        product,
        quantity,
        hour,
        minute,
        payment,
    }
}

/// Validates `config` before drawing, so it is safe to call on its own.
pub fn generate_day<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    date: NaiveDate,
    rng: &mut R,
) -> FixtureResult<Vec<TransactionRecord>> {
    config.validate()?;
    let quantities = config.quantity_distribution()?;
    generate_day_with(config, &quantities, date, rng)
}

/// One day's rows from an already validated `config` and its quantity
/// distribution.
pub fn generate_day_with<R: Rng + ?Sized>(
    config: &GeneratorConfig,
    quantities: &DiscreteDistribution<u32>,
    date: NaiveDate,
    rng: &mut R,
) -> FixtureResult<Vec<TransactionRecord>> {
    let count = rng.gen_range(config.txn_count_range.min..=config.txn_count_range.max) as usize;

    let mut out = Vec::with_capacity(count);
    for index in 0..count {
        let draw = draw_transaction(config, quantities, rng);
        out.push(TransactionRecord::from_draw(config, date, index, draw)?);
    }

    Ok(out)
}
