//! Vanilla option definitions.
//!
//! This module provides the European vanilla option, priced with the
//! generalised Black-Scholes model and scaled by its contract multiplier.

use num_traits::Float;
use pricer_core::market_data::MarketSnapshot;
use pricer_core::traits::priceable::Priceable;
use pricer_core::types::PricingError;

use super::error::InstrumentError;
use super::params::{check_helper_rate, InstrumentParams};
use super::payoff::OptionType;
use crate::analytical::{AnalyticalError, BlackScholes, Greeks};

/// European vanilla option.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use pricer_core::market_data::MarketSnapshot;
/// use pricer_core::traits::priceable::Priceable;
/// use pricer_models::instruments::{InstrumentParams, OptionType, VanillaOption};
///
/// let params = InstrumentParams::new(100.0_f64, 1.0, 10.0).unwrap();
/// let call = VanillaOption::new(params, OptionType::Call);
/// let market = MarketSnapshot::new(100.0, 0.2, 0.05);
///
/// // Ten contracts' worth of the 10.45 unit price
/// let price = call.price(&market).unwrap();
/// assert!((price - 104.5).abs() < 0.1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawVanillaOption<T>",
        bound(deserialize = "T: serde::Deserialize<'de>")
    )
)]
pub struct VanillaOption<T: Float> {
    params: InstrumentParams<T>,
    option_type: OptionType,
    helper_rate: T,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawVanillaOption<T: Float> {
    params: InstrumentParams<T>,
    option_type: OptionType,
    helper_rate: T,
}

#[cfg(feature = "serde")]
impl<T: Float> TryFrom<RawVanillaOption<T>> for VanillaOption<T> {
    type Error = InstrumentError;

    fn try_from(raw: RawVanillaOption<T>) -> Result<Self, Self::Error> {
        Self::new(raw.params, raw.option_type).with_helper_rate(raw.helper_rate)
    }
}

impl<T: Float> VanillaOption<T> {
    /// Creates a new vanilla option with H = 1.
    pub fn new(params: InstrumentParams<T>, option_type: OptionType) -> Self {
        Self {
            params,
            option_type,
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

    /// Returns a reference to the contract terms.
    #[inline]
    pub fn params(&self) -> &InstrumentParams<T> {
        &self.params
    }

    /// Returns the call/put flag.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> T {
        self.params.strike()
    }

    /// Returns the time to maturity.
    #[inline]
    pub fn expiry(&self) -> T {
        self.params.expiry()
    }

    /// Returns the contract multiplier.
    #[inline]
    pub fn multiplier(&self) -> T {
        self.params.multiplier()
    }

    /// Returns the FX helper rate.
    #[inline]
    pub fn helper_rate(&self) -> T {
        self.helper_rate
    }

    /// Prices the option: M × Black-Scholes unit price.
    ///
    /// # Errors
    /// `AnalyticalError` if the market falls outside the model domain.
    pub fn theoretical_price(&self, market: &MarketSnapshot<T>) -> Result<T, AnalyticalError> {
        let model = BlackScholes::from_market(market)?;
        let unit = model.price(self.strike(), self.expiry(), self.option_type)?;
        Ok(self.multiplier() * unit)
    }

    /// Greeks of the whole contract (unit Greeks × M).
    ///
    /// # Examples
    /// ```
    /// use pricer_core::market_data::MarketSnapshot;
    /// use pricer_models::instruments::{InstrumentParams, OptionType, VanillaOption};
    ///
    /// let params = InstrumentParams::new(100.0_f64, 1.0, 1.0).unwrap();
    /// let call = VanillaOption::new(params, OptionType::Call);
    /// let greeks = call.greeks(&MarketSnapshot::new(100.0, 0.2, 0.05)).unwrap();
    /// assert!((greeks.vega - 37.52).abs() < 0.1);
    /// ```
    pub fn greeks(&self, market: &MarketSnapshot<T>) -> Result<Greeks<T>, AnalyticalError> {
        let model = BlackScholes::from_market(market)?;
        let unit = model.greeks(self.strike(), self.expiry(), self.option_type)?;
        Ok(unit.scaled(self.multiplier()))
    }
}

impl<T: Float> Priceable<T> for VanillaOption<T> {
    fn price(&self, market: &MarketSnapshot<T>) -> Result<T, PricingError> {
        Ok(self.theoretical_price(market)?)
    }

    fn scaling_factor(&self) -> T {
        self.helper_rate
    }
}
