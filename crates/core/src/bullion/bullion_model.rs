//! Response shape for the bullion lookup tool.

use paisa_feeds::BullionSnapshot;
use serde::Serialize;

/// Gold/silver prices with a summary line and cache provenance.
#[derive(Debug, Clone, Serialize)]
pub struct BullionReport {
    pub success: bool,
    pub fine_gold: f64,
    pub silver: f64,
    pub unit: String,
    pub date: String,
    pub message: String,
    /// True when the response was served from the cache rather than a fetch.
    pub cached: bool,
}

impl BullionReport {
    pub fn from_snapshot(snapshot: &BullionSnapshot, cached: bool) -> Self {
        Self {
            success: true,
            fine_gold: snapshot.fine_gold,
            silver: snapshot.silver,
            unit: snapshot.unit.clone(),
            date: snapshot.date.clone(),
            message: format!(
                "Fine Gold: {} per {}, Silver: {} per {} (as of {})",
                snapshot.fine_gold, snapshot.unit, snapshot.silver, snapshot.unit, snapshot.date
            ),
            cached,
        }
    }
}
