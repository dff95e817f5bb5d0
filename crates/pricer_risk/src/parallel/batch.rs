//! Single-precision batch pricing front end.
//!
//! Prices large quote sets of plain vanilla options at f32 width with the
//! same generalised Black-Scholes formula used by the scalar pricer
//! (carry b = r, multiplier M = 1).

use pricer_models::analytical::{AnalyticalError, BlackScholes};
use pricer_models::instruments::OptionType;

use super::{parallel_map, ParallelConfig};

/// One vanilla quote to price.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BatchQuote {
    /// Spot price
    pub spot: f32,
    /// Strike price
    pub strike: f32,
    /// Time to expiry in years
    pub expiry: f32,
    /// Risk-free rate (also used as carry)
    pub rate: f32,
    /// Volatility
    pub volatility: f32,
    /// true for a call, false for a put
    pub is_call: bool,
}

impl BatchQuote {
    /// Prices this quote on the calling thread.
    ///
    /// # Errors
    /// `AnalyticalError` if any input lies outside the model domain.
    pub fn price(&self) -> Result<f32, AnalyticalError> {
        let model = BlackScholes::new(self.spot, self.rate, self.rate, self.volatility)?;
        model.price(
            self.strike,
            self.expiry,
            OptionType::from_is_call(self.is_call),
        )
    }
}

/// Prices every quote, one result per input in input order.
///
/// Runs in parallel when `quotes.len()` reaches the configured threshold.
///
/// # Examples
/// ```
/// use pricer_risk::parallel::{price_batch, BatchQuote, ParallelConfig};
///
/// let quotes = vec![
///     BatchQuote { spot: 100.0, strike: 100.0, expiry: 1.0, rate: 0.05, volatility: 0.2, is_call: true },
///     BatchQuote { spot: 100.0, strike: 100.0, expiry: 1.0, rate: 0.05, volatility: -0.2, is_call: true },
/// ];
///
/// let prices = price_batch(&quotes, &ParallelConfig::default());
/// assert!((prices[0].as_ref().unwrap() - 10.45).abs() < 0.01);
/// assert!(prices[1].is_err());
/// ```
pub fn price_batch(
    quotes: &[BatchQuote],
    config: &ParallelConfig,
) -> Vec<Result<f32, AnalyticalError>> {
    parallel_map(quotes, config, BatchQuote::price)
}
