//! The balance pipeline: `filter → format → sort`.
//!
//! Pure functions over in-memory lists. No I/O, no side effects; every
//! function is total over its input domain. Missing prices value a balance
//! at zero USD, unknown blockchains are filtered out, neither is an error.

use crate::balance::{FormattedBalance, WalletBalance};
use crate::decimal::Amount;
use crate::priority::{priority_of, UNKNOWN_PRIORITY};
use crate::prices::PriceTable;
use std::cmp::Reverse;

/// Returns `true` if a balance should appear in the report.
///
/// Valid means the blockchain is in the priority table and the amount is
/// strictly positive. Zero and negative amounts are dropped.
pub fn is_valid(balance: &WalletBalance) -> bool {
    priority_of(&balance.blockchain) > UNKNOWN_PRIORITY && balance.amount.is_positive()
}

/// Formats a balance into a report row.
///
/// `usd_value` is `price * amount` when the price table has an entry for
/// the currency, zero otherwise. `formatted` renders the amount with
/// exactly 2 decimal digits for every currency.
pub fn format_balance(balance: &WalletBalance, prices: &PriceTable) -> FormattedBalance {
    let usd_value = prices
        .get(&balance.currency)
        .map(|price| price * balance.amount)
        .unwrap_or(Amount::ZERO);

    FormattedBalance {
        currency: balance.currency.clone(),
        amount: balance.amount,
        formatted: balance.amount.formatted(),
        usd_value,
        priority: priority_of(&balance.blockchain),
    }
}

/// Sorts report rows by priority, highest first.
///
/// `sort_by_key` is a stable sort, so rows with equal priority keep their
/// relative input order.
pub fn sort_descending_by_priority(rows: &mut [FormattedBalance]) {
    rows.sort_by_key(|row| Reverse(row.priority));
}

/// Runs the full pipeline: filter invalid balances, format the rest, and
/// sort by descending priority.
///
/// Empty input yields empty output regardless of the price table.
pub fn formatted_balances(balances: &[WalletBalance], prices: &PriceTable) -> Vec<FormattedBalance> {
    let mut rows: Vec<FormattedBalance> = balances
        .iter()
        .filter(|balance| is_valid(balance))
        .map(|balance| format_balance(balance, prices))
        .collect();
    sort_descending_by_priority(&mut rows);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn balance(currency: &str, amount: &str, blockchain: &str) -> WalletBalance {
        WalletBalance {
            currency: currency.to_string(),
            amount: Amount::from_str(amount).unwrap(),
            blockchain: blockchain.to_string(),
        }
    }

    fn prices(entries: &[(&str, &str)]) -> PriceTable {
        let mut table = PriceTable::new();
        for (currency, price) in entries {
            table.insert(currency, Amount::from_str(price).unwrap());
        }
        table
    }

    #[test]
    fn test_is_valid_requires_known_chain_and_positive_amount() {
        assert!(is_valid(&balance("ETH", "2", "Ethereum")));
        assert!(!is_valid(&balance("ETH", "0", "Ethereum")));
        assert!(!is_valid(&balance("ETH", "-1.5", "Ethereum")));
        assert!(!is_valid(&balance("X", "1", "Unknown")));
    }

    #[test]
    fn test_format_with_price_present() {
        let table = prices(&[("ETH", "3000")]);
        let row = format_balance(&balance("ETH", "2", "Ethereum"), &table);

        assert_eq!(row.currency, "ETH");
        assert_eq!(row.formatted, "2.00");
        assert_eq!(row.usd_value.to_string(), "6000");
        assert_eq!(row.priority, 50);
    }

    #[test]
    fn test_format_missing_price_values_zero() {
        let table = prices(&[]);
        let row = format_balance(&balance("OSMO", "5", "Osmosis"), &table);

        assert!(row.usd_value.is_zero());
        assert_eq!(row.formatted, "5.00");
        assert_eq!(row.priority, 100);
    }

    #[test]
    fn test_sort_is_descending() {
        let table = prices(&[]);
        let rows = formatted_balances(
            &[
                balance("ZIL", "1", "Zilliqa"),
                balance("OSMO", "1", "Osmosis"),
                balance("ETH", "1", "Ethereum"),
            ],
            &table,
        );

        let priorities: Vec<i32> = rows.iter().map(|r| r.priority).collect();
        assert_eq!(priorities, vec![100, 50, 20]);
    }

    #[test]
    fn test_sort_stability_on_priority_ties() {
        // Zilliqa and Neo share priority 20; input order must survive.
        let table = prices(&[]);
        let rows = formatted_balances(
            &[
                balance("ZIL", "1", "Zilliqa"),
                balance("NEO", "1", "Neo"),
                balance("ZIL2", "1", "Zilliqa"),
            ],
            &table,
        );

        let currencies: Vec<&str> = rows.iter().map(|r| r.currency.as_str()).collect();
        assert_eq!(currencies, vec!["ZIL", "NEO", "ZIL2"]);
    }

    #[test]
    fn test_worked_example() {
        let table = prices(&[("ETH", "3000"), ("OSMO", "1")]);
        let rows = formatted_balances(
            &[
                balance("ETH", "2", "Ethereum"),
                balance("OSMO", "5", "Osmosis"),
                balance("X", "1", "Unknown"),
            ],
            &table,
        );

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].currency, "OSMO");
        assert_eq!(rows[0].usd_value.to_string(), "5");
        assert_eq!(rows[0].priority, 100);
        assert_eq!(rows[1].currency, "ETH");
        assert_eq!(rows[1].usd_value.to_string(), "6000");
        assert_eq!(rows[1].priority, 50);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let table = prices(&[("ETH", "3000")]);
        assert!(formatted_balances(&[], &table).is_empty());
    }
}
