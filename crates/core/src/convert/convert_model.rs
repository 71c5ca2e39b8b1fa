//! Response shape for the currency conversion tool.

use serde::Serialize;

/// A completed conversion with the rate that was applied.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionReceipt {
    pub success: bool,
    pub from: String,
    pub to: String,
    pub amount: f64,
    pub conversion_rate: f64,
    pub converted_amount: f64,
    /// Provider's "last updated" timestamp, verbatim
    pub last_update: Option<String>,
    pub message: String,
}

impl ConversionReceipt {
    pub fn new(
        from: String,
        to: String,
        amount: f64,
        conversion_rate: f64,
        converted_amount: f64,
        last_update: Option<String>,
    ) -> Self {
        let message = format!("{} {} = {:.2} {}", amount, from, converted_amount, to);
        Self {
            success: true,
            from,
            to,
            amount,
            conversion_rate,
            converted_amount,
            last_update,
            message,
        }
    }
}
