use rand::distributions::{Distribution, WeightedIndex};
use rand::Rng;

use crate::error::{FixtureError, FixtureResult};

/// A finite value→weight mapping sampled in proportion to the weights.
#[derive(Clone, Debug)]
pub struct DiscreteDistribution<T> {
    values: Vec<T>,
    weights: Vec<u32>,
    index: WeightedIndex<u32>,
}

impl<T> DiscreteDistribution<T> {
    pub fn new(entries: impl IntoIterator<Item = (T, u32)>) -> FixtureResult<Self> {
        let (values, weights): (Vec<T>, Vec<u32>) = entries.into_iter().unzip();
        if values.is_empty() {
            return Err(FixtureError::InvalidArgument(
                "distribution must have at least one value".to_string(),
            ));
        }
        let total: u64 = weights.iter().map(|w| u64::from(*w)).sum();
        if total == 0 {
            return Err(FixtureError::InvalidArgument(
                "distribution weights must not all be zero".to_string(),
            ));
        }
        if total > u64::from(u32::MAX) {
            return Err(FixtureError::InvalidArgument(format!(
                "distribution weights sum to {total}, above the maximum of {}",
                u32::MAX
            )));
        }
        let index = WeightedIndex::new(&weights).map_err(|error| {
            FixtureError::InvalidArgument(format!("invalid distribution weights: {error}"))
        })?;
        Ok(Self {
            values,
            weights,
            index,
        })
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> &T {
        &self.values[self.index.sample(rng)]
    }

    pub fn values(&self) -> &[T] {
        &self.values
    }

    pub fn total_weight(&self) -> u64 {
        self.weights.iter().map(|w| u64::from(*w)).sum()
    }
}

impl<T: PartialEq> DiscreteDistribution<T> {
    pub fn probability(&self, value: &T) -> f64 {
        let matching: u64 = self
            .values
            .iter()
            .zip(&self.weights)
            .filter(|(v, _)| *v == value)
            .map(|(_, w)| u64::from(*w))
            .sum();
        matching as f64 / self.total_weight() as f64
    }
}
