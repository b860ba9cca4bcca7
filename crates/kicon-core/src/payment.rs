//! Payment presentation wire types.
//!
//! Fetched from `GET /api/payments/bank-details` and displayed verbatim:
//! the client never recomputes any of the amounts.

use serde::{Deserialize, Serialize};

/// Remittance account details.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BankDetails {
    pub bank_name: String,
    pub account_name: String,
    pub account_number: String,
    pub ifsc_code: String,
    pub branch: String,
}

/// Backend-computed fee schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentCalculation {
    pub usd_amount: f64,
    pub exchange_rate: f64,
    pub base_inr_amount: f64,
    pub gst_percentage: f64,
    pub gst_amount: f64,
    pub total_inr_amount: f64,
}

/// Everything the confirmation view shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentInfo {
    pub bank_details: BankDetails,
    pub payment_calculation: PaymentCalculation,
    #[serde(default)]
    pub instructions: String,
}
