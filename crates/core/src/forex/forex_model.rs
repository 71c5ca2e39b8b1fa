//! Response shapes for the forex lookup tool.
//!
//! Field names and message wording follow the gateway's wire contract;
//! currency codes are uppercased on display while the cached records keep
//! the feed's lowercase form.

use paisa_feeds::RateRecord;
use serde::Serialize;

/// Result of a forex lookup: either the whole table or a single rate.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ForexLookup {
    All(ForexTable),
    Single(ForexRate),
}

/// The full rate table with a count and summary line.
#[derive(Debug, Clone, Serialize)]
pub struct ForexTable {
    pub success: bool,
    pub rates: Vec<RateRecord>,
    pub count: usize,
    pub message: String,
}

impl ForexTable {
    pub fn new(rates: Vec<RateRecord>) -> Self {
        let count = rates.len();
        Self {
            success: true,
            rates,
            count,
            message: format!("Retrieved {} forex rates", count),
        }
    }
}

/// A single matched rate with a descriptive summary.
#[derive(Debug, Clone, Serialize)]
pub struct ForexRate {
    pub success: bool,
    pub currency: String,
    pub unit: f64,
    pub buy: f64,
    pub sell: f64,
    pub date: String,
    pub message: String,
}

impl ForexRate {
    pub fn from_record(record: &RateRecord) -> Self {
        let currency = record.currency.to_uppercase();
        let message = format!(
            "{} - Buy: NPR {}, Sell: NPR {} per {} unit(s)",
            currency, record.buy, record.sell, record.unit
        );
        Self {
            success: true,
            currency,
            unit: record.unit,
            buy: record.buy,
            sell: record.sell,
            date: record.date.clone(),
            message,
        }
    }
}
