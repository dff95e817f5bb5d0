//! The pricing capability shared by every instrument kind.
//!
//! All implementors are expected to be enum-dispatched; the risk layer is
//! generic over `P: Priceable<T>` so no trait objects are needed.

use num_traits::Float;

use crate::market_data::MarketSnapshot;
use crate::types::PricingError;

/// Trait for entities that can be priced against a market snapshot.
///
/// # Type Parameters
/// * `T` - Floating-point type (f32 or f64)
///
/// # Design
///
/// Pricing takes the market explicitly instead of reading it from the
/// instrument. Repricing the same contract under a different market (the
/// previous period, a stressed scenario) is then a plain function call
/// and never requires mutating the instrument.
///
/// ```
/// use pricer_core::market_data::MarketSnapshot;
/// use pricer_core::traits::priceable::Priceable;
/// use pricer_core::types::PricingError;
///
/// struct Stock;
///
/// impl Priceable<f64> for Stock {
///     fn price(&self, market: &MarketSnapshot<f64>) -> Result<f64, PricingError> {
///         Ok(market.spot())
///     }
/// }
///
/// let market = MarketSnapshot::new(100.0, 0.2, 0.05);
/// assert_eq!(Stock.price(&market).unwrap(), 100.0);
/// assert_eq!(Stock.scaling_factor(), 1.0);
/// ```
pub trait Priceable<T: Float> {
    /// Calculate the price of one contract under `market`.
    ///
    /// # Invariants
    /// - Deterministic: the same market always yields the same price
    /// - No side effects on `self`
    ///
    /// # Errors
    /// `PricingError::InvalidInput` when the market (or the contract terms)
    /// fall outside the model domain.
    fn price(&self, market: &MarketSnapshot<T>) -> Result<T, PricingError>;

    /// Factor converting a per-contract price difference into a P&L figure.
    ///
    /// Defaults to one.
    fn scaling_factor(&self) -> T {
        T::one()
    }
}
