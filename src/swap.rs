//! Currency swap quotes.
//!
//! The pure core of the swap form: validate a request and price it against
//! the USD table. Fetching prices and rendering the form are the caller's
//! concern.

use crate::decimal::Amount;
use crate::error::SwapError;
use crate::prices::PriceTable;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Decimal places in the quoted receive amount.
const QUOTE_SCALE: u32 = 8;

/// A swap request as entered by the user.
#[derive(Debug, Clone)]
pub struct SwapRequest {
    /// Currency being sold
    pub from_currency: String,

    /// Currency being bought
    pub to_currency: String,

    /// Amount of the from-currency to swap
    pub amount: Amount,
}

/// A priced swap quote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quote {
    /// Currency being sold
    pub from_currency: String,

    /// Currency being bought
    pub to_currency: String,

    /// Amount of the from-currency sold
    pub amount_sent: Amount,

    /// Amount of the to-currency received, rounded to 8 decimal places
    pub amount_received: Amount,
}

/// Validates a swap request and computes the quote.
///
/// The receive amount is `amount * from_price / to_price` (both prices are
/// USD unit prices), rounded to 8 decimal places. Fails if either currency
/// is empty, the amount is not positive or below the 0.01 minimum, or
/// either price is missing or zero.
pub fn quote(request: &SwapRequest, prices: &PriceTable) -> Result<Quote, SwapError> {
    if request.from_currency.is_empty() {
        return Err(SwapError::EmptyCurrency("from"));
    }
    if request.to_currency.is_empty() {
        return Err(SwapError::EmptyCurrency("to"));
    }
    if !request.amount.is_positive() {
        return Err(SwapError::NonPositiveAmount);
    }

    let minimum = Amount::new(Decimal::new(1, 2)); // 0.01
    if request.amount < minimum {
        return Err(SwapError::BelowMinimum);
    }

    let from_price = usable_price(prices, &request.from_currency)?;
    let to_price = usable_price(prices, &request.to_currency)?;

    let received = (request.amount * from_price / to_price).round_dp(QUOTE_SCALE);

    Ok(Quote {
        from_currency: request.from_currency.clone(),
        to_currency: request.to_currency.clone(),
        amount_sent: request.amount,
        amount_received: received,
    })
}

/// Looks up a price that is present and nonzero.
fn usable_price(prices: &PriceTable, currency: &str) -> Result<Amount, SwapError> {
    match prices.get(currency) {
        Some(price) if !price.is_zero() => Ok(price),
        _ => Err(SwapError::PriceUnavailable(currency.to_string())),
    }
}

impl SwapRequest {
    /// Convenience constructor from string inputs.
    pub fn parse(
        from_currency: &str,
        to_currency: &str,
        amount: &str,
    ) -> Result<Self, rust_decimal::Error> {
        Ok(SwapRequest {
            from_currency: from_currency.trim().to_string(),
            to_currency: to_currency.trim().to_string(),
            amount: Amount::from_str(amount)?,
        })
    }
}
