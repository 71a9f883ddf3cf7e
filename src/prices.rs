//! USD price table and price feed parsing.
//!
//! The price feed is a JSON array of `{ currency, price, date? }` entries.
//! The feed may repeat a currency; the first occurrence wins, matching how
//! the feed is consumed upstream.

use crate::decimal::Amount;
use crate::error::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::io::Read;

/// One entry of the price feed.
#[derive(Debug, Clone, Deserialize)]
pub struct PriceEntry {
    /// Currency symbol
    pub currency: String,

    /// USD unit price
    pub price: Amount,

    /// Feed timestamp; carried but unused
    #[serde(default)]
    pub date: Option<String>,
}

/// Mapping from currency symbol to USD unit price.
///
/// May omit entries; lookups for missing currencies return `None` and the
/// pipeline values such balances at zero USD.
#[derive(Debug, Clone, Default)]
pub struct PriceTable {
    prices: HashMap<String, Amount>,
}

impl PriceTable {
    /// Creates an empty price table.
    pub fn new() -> Self {
        PriceTable::default()
    }

    /// Parses a JSON price feed, keeping the first entry per currency.
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self> {
        let entries: Vec<PriceEntry> = serde_json::from_reader(reader)?;
        Ok(Self::from_entries(entries))
    }

    /// Builds a table from feed entries, keeping the first entry per currency.
    pub fn from_entries(entries: Vec<PriceEntry>) -> Self {
        let mut prices = HashMap::new();
        for entry in entries {
            prices.entry(entry.currency).or_insert(entry.price);
        }
        PriceTable { prices }
    }

    /// Sets the price for a currency, replacing any existing entry.
    pub fn insert(&mut self, currency: &str, price: Amount) {
        self.prices.insert(currency.to_string(), price);
    }

    /// Looks up the USD unit price for a currency.
    pub fn get(&self, currency: &str) -> Option<Amount> {
        self.prices.get(currency).copied()
    }

    /// Returns `true` if the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}
