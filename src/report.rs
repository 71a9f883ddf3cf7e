//! CSV-facing report engine.
//!
//! Streams balance records from CSV, runs each through the pipeline's
//! filter and formatter, and writes the final priority-ordered report.
//! Malformed rows are logged and skipped, never fatal.

use crate::balance::{FormattedBalance, WalletBalance};
use crate::error::Result;
use crate::pipeline::{format_balance, is_valid, sort_descending_by_priority};
use crate::prices::PriceTable;
use csv::{ReaderBuilder, Trim};
use log::{debug, warn};
use std::io::{Read, Write};

/// The wallet report engine.
///
/// Holds the price table and the report rows accumulated so far. Rows are
/// filtered and formatted as they are read; sorting happens once at output
/// time so the stable-order guarantee covers the whole input.
pub struct WalletReport {
    /// USD prices used for valuation.
    prices: PriceTable,

    /// Accepted rows in input order.
    rows: Vec<FormattedBalance>,
}

impl WalletReport {
    /// Creates an engine with the given price table.
    pub fn new(prices: PriceTable) -> Self {
        WalletReport {
            prices,
            rows: Vec::new(),
        }
    }

    /// Reads balance records from CSV in streaming fashion.
    ///
    /// Expected columns: `currency,amount,blockchain`. Records are read one
    /// at a time; rows that fail to parse are logged at warn level and
    /// skipped, rows dropped by the validity filter at debug level.
    pub fn process_csv<R: Read>(&mut self, reader: R) -> Result<()> {
        let mut csv_reader = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        for (row_idx, result) in csv_reader.deserialize::<WalletBalance>().enumerate() {
            let row_num = row_idx + 2; // 1-indexed, accounting for header row

            match result {
                Ok(balance) => self.process_balance(balance, row_num),
                Err(e) => {
                    warn!("Row {}: CSV parse error: {}", row_num, e);
                }
            }
        }

        Ok(())
    }

    /// Runs a single balance through the filter and formatter.
    fn process_balance(&mut self, balance: WalletBalance, row: usize) {
        if !is_valid(&balance) {
            debug!(
                "Row {}: Filtered out {} on {} (amount {})",
                row, balance.currency, balance.blockchain, balance.amount
            );
            return;
        }

        let formatted = format_balance(&balance, &self.prices);
        debug!(
            "Row {}: Accepted {} with priority {} worth {} USD",
            row, formatted.currency, formatted.priority, formatted.usd_value
        );
        self.rows.push(formatted);
    }

    /// Writes the report to CSV, highest priority first.
    ///
    /// Rows with equal priority appear in input order. Formatted amounts
    /// carry exactly 2 decimal places.
    pub fn write_output<W: Write>(&self, writer: W) -> Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);

        csv_writer.write_record(["currency", "amount", "formatted", "usd_value", "priority"])?;

        let mut rows = self.rows.clone();
        sort_descending_by_priority(&mut rows);

        for row in &rows {
            csv_writer.write_record([
                row.currency.clone(),
                row.amount.to_string(),
                row.formatted.clone(),
                row.usd_value.to_string(),
                row.priority.to_string(),
            ])?;
        }

        csv_writer.flush()?;
        Ok(())
    }

    /// Returns the accepted rows in input order (for testing).
    #[cfg(test)]
    pub fn rows(&self) -> &[FormattedBalance] {
        &self.rows
    }
}
