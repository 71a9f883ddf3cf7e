//! Balance models: raw wallet balances and their formatted report rows.

use crate::decimal::Amount;
use serde::{Deserialize, Serialize};

/// A raw wallet balance as supplied by the wallet state.
///
/// Constructed externally (CSV input or caller-built); the pipeline only
/// reads it.
#[derive(Debug, Clone, Deserialize)]
pub struct WalletBalance {
    /// Currency symbol, e.g. `ETH`
    pub currency: String,

    /// Token amount held
    pub amount: Amount,

    /// Blockchain the balance lives on, e.g. `Ethereum`
    pub blockchain: String,
}

/// A balance augmented with display formatting, USD valuation, and its
/// blockchain priority.
///
/// Derived, never mutated after creation. `priority` is deterministic given
/// the blockchain alone; `usd_value` given the amount and price table alone.
#[derive(Debug, Clone, Serialize)]
pub struct FormattedBalance {
    /// Currency symbol
    pub currency: String,

    /// Token amount held
    pub amount: Amount,

    /// Amount rendered with exactly 2 decimal digits
    pub formatted: String,

    /// USD valuation: `price * amount`, zero when the price is missing
    pub usd_value: Amount,

    /// Blockchain priority; higher sorts first in the report
    pub priority: i32,
}
