//! Wallet Report CLI
//!
//! Reads wallet balances from CSV and a USD price feed from JSON, then
//! writes the priority-ordered balance report to stdout.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- balances.csv prices.json > report.csv
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use std::env;
use std::fs::File;
use std::io::{self, BufReader};
use std::process;
use wallet_report::{PriceTable, ReportError, Result, WalletReport};

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 3 {
        return Err(ReportError::MissingArgument);
    }

    let balances_path = &args[1];
    let prices_path = &args[2];

    let prices_file = File::open(prices_path)?;
    let prices = PriceTable::from_json_reader(BufReader::new(prices_file))?;

    let balances_file = File::open(balances_path)?;
    let reader = BufReader::new(balances_file);

    let mut report = WalletReport::new(prices);
    report.process_csv(reader)?;

    let stdout = io::stdout();
    let handle = stdout.lock();
    report.write_output(handle)?;

    Ok(())
}
