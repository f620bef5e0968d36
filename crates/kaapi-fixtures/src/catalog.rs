use std::fmt;

use serde::Deserialize;

use crate::error::FixtureError;

/// Unit prices above this are rejected so that `price * qty` stays in `u64`.
const MAX_PRICE_CENTS: u64 = u32::MAX as u64;

pub const DEFAULT_PAYMENT_METHODS: [&str; 3] = ["Credit Card", "Digital Wallet", "Cash"];

const DEFAULT_CATALOG: [(&str, u64, &str); 10] = [
    ("Latte", 450, "Coffee"),
    ("Espresso", 300, "Coffee"),
    ("Cappuccino", 400, "Coffee"),
    ("Americano", 350, "Coffee"),
    ("Oat Milk Latte", 550, "Coffee"),
    ("Croissant", 375, "Pastry"),
    ("Blueberry Muffin", 350, "Pastry"),
    ("Avocado Toast", 900, "Food"),
    ("Breakfast Sandwich", 850, "Food"),
    ("Hot Tea", 300, "Tea"),
];

/// A non-negative amount held as whole cents.
///
/// Config files spell prices as decimals (`4.50`); they are rounded to the
/// nearest cent on the way in and always rendered with two fraction digits.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize)]
#[serde(try_from = "f64")]
pub struct Money(u64);

impl Money {
    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    pub const fn cents(self) -> u64 {
        self.0
    }

    pub fn times(self, quantity: u32) -> Money {
        Money(self.0.saturating_mul(u64::from(quantity)))
    }
}

impl TryFrom<f64> for Money {
    type Error = FixtureError;

    fn try_from(value: f64) -> Result<Self, Self::Error> {
        if !value.is_finite() || value < 0.0 {
            return Err(FixtureError::InvalidArgument(format!(
                "price {value} must be a finite, non-negative amount"
            )));
        }
        let cents = (value * 100.0).round();
        if cents > MAX_PRICE_CENTS as f64 {
            return Err(FixtureError::InvalidArgument(format!(
                "price {value} exceeds the supported maximum"
            )));
        }
        Ok(Money(cents as u64))
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

#[derive(Clone, Debug, Eq, PartialEq, Deserialize)]
pub struct Product {
    pub name: String,
    pub price: Money,
    pub category: String,
}

impl Product {
    pub fn new(name: impl Into<String>, price: Money, category: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            price,
            category: category.into(),
        }
    }
}

pub fn default_catalog() -> Vec<Product> {
    DEFAULT_CATALOG
        .iter()
        .map(|(name, cents, category)| Product::new(*name, Money::from_cents(*cents), *category))
        .collect()
}

pub fn default_payment_methods() -> Vec<String> {
    DEFAULT_PAYMENT_METHODS
        .iter()
        .map(|method| method.to_string())
        .collect()
}
