//! # Wallet Report
//!
//! A balance pipeline that filters, formats, and sorts wallet balances
//! into a priority-ordered report, plus two small companion exercises
//! (sum-to-n and currency swap quotes).
//!
//! ## Design Principles
//!
//! - **Exact arithmetic**: Balances and prices use `rust_decimal`
//! - **Total pipeline functions**: Missing prices value at zero, unknown
//!   chains are filtered; the pipeline never errors
//! - **Stable ordering**: Equal-priority rows keep input order
//! - **Streaming input**: Memory-efficient CSV processing
//!
//! ## Example
//!
//! ```
//! use std::str::FromStr;
//! use wallet_report::{formatted_balances, Amount, PriceTable, WalletBalance};
//!
//! let balances = vec![WalletBalance {
//!     currency: "ETH".to_string(),
//!     amount: Amount::from_str("2").unwrap(),
//!     blockchain: "Ethereum".to_string(),
//! }];
//!
//! let mut prices = PriceTable::new();
//! prices.insert("ETH", Amount::from_str("3000").unwrap());
//!
//! let report = formatted_balances(&balances, &prices);
//! assert_eq!(report[0].usd_value.to_string(), "6000");
//! assert_eq!(report[0].formatted, "2.00");
//! ```

pub mod balance;
pub mod decimal;
pub mod error;
pub mod pipeline;
pub mod prices;
pub mod priority;
pub mod report;
pub mod sums;
pub mod swap;

pub use balance::{FormattedBalance, WalletBalance};
pub use decimal::Amount;
pub use error::{ReportError, Result, SwapError};
pub use pipeline::{format_balance, formatted_balances, is_valid, sort_descending_by_priority};
pub use prices::{PriceEntry, PriceTable};
pub use priority::{priority_of, UNKNOWN_PRIORITY};
pub use report::WalletReport;
pub use swap::{quote, Quote, SwapRequest};
