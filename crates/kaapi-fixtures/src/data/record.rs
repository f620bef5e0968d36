use chrono::{NaiveDate, NaiveTime};

use crate::catalog::Money;
use crate::config::GeneratorConfig;
use crate::error::{FixtureError, FixtureResult};

pub const CSV_HEADER: [&str; 9] = [
    "Transaction ID",
    "Date",
    "Time",
    "Product",
    "Category",
    "Qty",
    "Price",
    "Total",
    "Payment Method",
];

/// Raw random choices for one row, as indices into the config's tables.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TransactionDraw {
    pub product: usize,
    pub quantity: u32,
    pub hour: u32,
    pub minute: u32,
    pub payment: usize,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct TransactionRecord {
    pub id: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub product: String,
    pub category: String,
    pub quantity: u32,
    pub price: Money,
    pub total: Money,
    pub payment_method: String,
}

impl TransactionRecord {
    pub fn from_draw(
        config: &GeneratorConfig,
        date: NaiveDate,
        index: usize,
        draw: TransactionDraw,
    ) -> FixtureResult<Self> {
        let product = config.catalog.get(draw.product).ok_or_else(|| {
            FixtureError::InvalidArgument(format!(
                "product index {} out of range for a catalog of {}",
                draw.product,
                config.catalog.len()
            ))
        })?;
        let payment_method = config.payment_methods.get(draw.payment).ok_or_else(|| {
            FixtureError::InvalidArgument(format!(
                "payment index {} out of range for {} payment methods",
                draw.payment,
                config.payment_methods.len()
            ))
        })?;
        let time = NaiveTime::from_hms_opt(draw.hour, draw.minute, 0).ok_or_else(|| {
            FixtureError::InvalidArgument(format!(
                "invalid wall-clock time {}:{}",
                draw.hour, draw.minute
            ))
        })?;

        Ok(Self {
            id: transaction_id(date, index),
            date,
            time,
            product: product.name.clone(),
            category: product.category.clone(),
            quantity: draw.quantity,
            price: product.price,
            total: product.price.times(draw.quantity),
            payment_method: payment_method.clone(),
        })
    }

    /// Field values in `CSV_HEADER` order.
    pub fn to_fields(&self) -> [String; 9] {
        [
            self.id.clone(),
            self.date.format("%Y-%m-%d").to_string(),
            self.time.format("%H:%M").to_string(),
            self.product.clone(),
            self.category.clone(),
            self.quantity.to_string(),
            self.price.to_string(),
            self.total.to_string(),
            self.payment_method.clone(),
        ]
    }
}

pub fn transaction_id(date: NaiveDate, index: usize) -> String {
    format!("TXN-{}-{index:03}", date.format("%Y%m%d"))
}
