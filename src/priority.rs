//! Blockchain priority table.
//!
//! Priorities control report ordering: higher sorts first. The table is
//! static; chains not listed resolve to [`UNKNOWN_PRIORITY`] and are
//! dropped by the pipeline's validity filter.

/// Sentinel priority for blockchains not in the table.
pub const UNKNOWN_PRIORITY: i32 = -99;

/// Returns the priority of a blockchain.
///
/// Pure and total: unknown chains resolve to [`UNKNOWN_PRIORITY`] rather
/// than erroring.
pub fn priority_of(blockchain: &str) -> i32 {
    match blockchain {
        "Osmosis" => 100,
        "Ethereum" => 50,
        "Arbitrum" => 30,
        "Zilliqa" => 20,
        "Neo" => 20,
        _ => UNKNOWN_PRIORITY,
    }
}
