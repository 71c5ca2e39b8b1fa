//! Typed payloads for the upstream feeds.
//!
//! These mirror the wire shapes of the feeds exactly; no renaming or
//! normalization happens at this layer. The forex feed stores currency codes
//! lowercase and the tool layer uppercases them for display.

use serde::{Deserialize, Serialize};

/// One exchange-rate row from the forex feed.
///
/// The feed returns an ordered array of these; the whole array is cached as
/// a single unit and never merged across refreshes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RateRecord {
    /// Currency code, lowercase as stored by the feed (e.g. "usd")
    pub currency: String,
    /// Unit multiplier the buy/sell prices are quoted per (e.g. 1, 10, 100)
    pub unit: f64,
    /// Buying rate in NPR
    pub buy: f64,
    /// Selling rate in NPR
    pub sell: f64,
    /// Quote date as published by the feed
    pub date: String,
}

/// The bullion feed's daily gold/silver quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BullionSnapshot {
    /// Fine gold price in NPR
    pub fine_gold: f64,
    /// Silver price in NPR
    pub silver: f64,
    /// Unit the prices are quoted per (e.g. "tola")
    pub unit: String,
    /// Quote date as published by the feed
    pub date: String,
}

/// Response from the ExchangeRate-API pair-conversion endpoint.
///
/// The API signals failure in-band: `result` is `"error"` and `error_type`
/// carries a short code instead of the numeric fields being present.
#[derive(Debug, Clone, Deserialize)]
pub struct PairConversion {
    /// "success" or "error"
    pub result: String,
    /// Error code when `result` is "error" (e.g. "invalid-key")
    #[serde(rename = "error-type")]
    pub error_type: Option<String>,
    /// Rate used for the conversion
    pub conversion_rate: Option<f64>,
    /// Converted amount
    pub conversion_result: Option<f64>,
    /// Human-readable timestamp of the rate's last update
    pub time_last_update_utc: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_record_deserializes_feed_row() {
        let json = r#"{
            "currency": "usd",
            "unit": 1,
            "buy": 139.03,
            "sell": 139.63,
            "date": "2026-08-26"
        }"#;
        let record: RateRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.currency, "usd");
        assert_eq!(record.unit, 1.0);
        assert_eq!(record.buy, 139.03);
        assert_eq!(record.sell, 139.63);
        assert_eq!(record.date, "2026-08-26");
    }

    #[test]
    fn test_bullion_snapshot_deserializes_feed_object() {
        let json = r#"{
            "fine_gold": 191000,
            "silver": 2370,
            "unit": "tola",
            "date": "2026-08-26"
        }"#;
        let snapshot: BullionSnapshot = serde_json::from_str(json).unwrap();
        assert_eq!(snapshot.fine_gold, 191000.0);
        assert_eq!(snapshot.silver, 2370.0);
        assert_eq!(snapshot.unit, "tola");
    }

    #[test]
    fn test_pair_conversion_error_shape() {
        let json = r#"{"result": "error", "error-type": "invalid-key"}"#;
        let conversion: PairConversion = serde_json::from_str(json).unwrap();
        assert_eq!(conversion.result, "error");
        assert_eq!(conversion.error_type.as_deref(), Some("invalid-key"));
        assert!(conversion.conversion_rate.is_none());
    }

    #[test]
    fn test_pair_conversion_success_shape() {
        let json = r#"{
            "result": "success",
            "conversion_rate": 0.85,
            "conversion_result": 85.0,
            "time_last_update_utc": "Wed, 26 Aug 2026 00:00:01 +0000"
        }"#;
        let conversion: PairConversion = serde_json::from_str(json).unwrap();
        assert_eq!(conversion.result, "success");
        assert_eq!(conversion.conversion_rate, Some(0.85));
        assert_eq!(conversion.conversion_result, Some(85.0));
    }
}
