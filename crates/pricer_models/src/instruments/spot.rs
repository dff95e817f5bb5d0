//! Spot position in the underlying.

use num_traits::Float;
use pricer_core::market_data::MarketSnapshot;
use pricer_core::traits::priceable::Priceable;
use pricer_core::types::PricingError;

use super::error::InstrumentError;
use super::params::check_helper_rate;
use crate::analytical::AnalyticalError;

/// Direct holding of the underlying, valued at the spot price.
///
/// The FX helper rate H converts a foreign-currency spot into the
/// reporting currency when risk is aggregated; it defaults to 1.
///
/// # Examples
/// ```
/// use pricer_core::market_data::MarketSnapshot;
/// use pricer_core::traits::priceable::Priceable;
/// use pricer_models::instruments::Spot;
///
/// let usd_stock = Spot::new().with_helper_rate(5.2_f64).unwrap();
/// let market = MarketSnapshot::new(30.0, 0.25, 0.05);
///
/// assert_eq!(usd_stock.price(&market).unwrap(), 30.0);
/// assert_eq!(usd_stock.scaling_factor(), 5.2);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawSpot<T>",
        bound(deserialize = "T: serde::Deserialize<'de>")
    )
)]
pub struct Spot<T: Float> {
    helper_rate: T,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawSpot<T: Float> {
    helper_rate: T,
}

#[cfg(feature = "serde")]
impl<T: Float> TryFrom<RawSpot<T>> for Spot<T> {
    type Error = InstrumentError;

    fn try_from(raw: RawSpot<T>) -> Result<Self, Self::Error> {
        Self::new().with_helper_rate(raw.helper_rate)
    }
}

impl<T: Float> Default for Spot<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> Spot<T> {
    /// Creates a domestic spot position (H = 1).
    pub fn new() -> Self {
        Self {
            helper_rate: T::one(),
        }
    }

    /// Sets the FX helper rate.
    ///
    /// # Errors
    /// `InstrumentError::InvalidHelperRate` if `helper_rate` is not positive.
    pub fn with_helper_rate(mut self, helper_rate: T) -> Result<Self, InstrumentError> {
        self.helper_rate = check_helper_rate(helper_rate)?;
        Ok(self)
    }

    /// Returns the FX helper rate.
    #[inline]
    pub fn helper_rate(&self) -> T {
        self.helper_rate
    }
}

impl<T: Float> Priceable<T> for Spot<T> {
    fn price(&self, market: &MarketSnapshot<T>) -> Result<T, PricingError> {
        let spot = market.spot();
        if !spot.is_finite() {
            return Err(AnalyticalError::NonFiniteInput { name: "spot" }.into());
        }
        if spot <= T::zero() {
            return Err(AnalyticalError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(f64::NAN),
            }
            .into());
        }
        Ok(spot)
    }

    fn scaling_factor(&self) -> T {
        self.helper_rate
    }
}
