//! Futures contract definitions.
//!
//! Futures are priced with the cost-of-carry model, scaled by the contract
//! multiplier. The carry term is either a yield held by the contract,
//! F = S·e^((r-q)T), or the market snapshot's net carry, F = S·e^(bT).

use chrono::NaiveDate;
use num_traits::Float;
use pricer_core::market_data::MarketSnapshot;
use pricer_core::traits::priceable::Priceable;
use pricer_core::types::{DayCountConvention, PricingError};

use super::error::InstrumentError;
use super::params::{check_helper_rate, is_positive};
use crate::analytical::AnalyticalError;

/// Source of the carry exponent in a futures price.
///
/// With `Yield(q)` the domestic rate moves the futures price while q stays
/// fixed (dividend yield, foreign rate, convenience yield). With `Market`
/// the price follows the snapshot's cost of carry b and ignores the rate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FutureCarry<T: Float> {
    /// F = S·e^((r-q)T) with the contract yield q
    Yield(T),
    /// F = S·e^(bT) with the snapshot carry b
    Market,
}

impl<T: Float> Default for FutureCarry<T> {
    fn default() -> Self {
        FutureCarry::Yield(T::zero())
    }
}

/// Futures contract on a spot underlying.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use pricer_core::market_data::MarketSnapshot;
/// use pricer_core::traits::priceable::Priceable;
/// use pricer_core::types::DayCountConvention;
/// use pricer_models::instruments::Future;
///
/// // FX future: 90 days on ACT/360, 50 units per contract, 10 contracts,
/// // foreign rate 5.3%
/// let future = Future::from_days(90, 50.0_f64, 10.0, DayCountConvention::Actual360)
///     .unwrap()
///     .with_yield(0.053)
///     .unwrap();
///
/// let market = MarketSnapshot::new(5.0, 0.12, 0.1075);
/// let price = future.price(&market).unwrap();
/// let expected = 50.0 * 5.0 * (0.0545_f64 * 0.25).exp();
/// assert!((price - expected).abs() < 1e-9);
/// assert_eq!(future.scaling_factor(), 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawFuture<T>",
        bound(deserialize = "T: serde::Deserialize<'de>")
    )
)]
pub struct Future<T: Float> {
    expiry: T,
    multiplier: T,
    contracts: T,
    helper_rate: T,
    carry: FutureCarry<T>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
struct RawFuture<T: Float> {
    expiry: T,
    multiplier: T,
    contracts: T,
    helper_rate: T,
    #[serde(default)]
    carry: FutureCarry<T>,
}

#[cfg(feature = "serde")]
impl<T: Float> TryFrom<RawFuture<T>> for Future<T> {
    type Error = InstrumentError;

    fn try_from(raw: RawFuture<T>) -> Result<Self, Self::Error> {
        Self::new(raw.expiry, raw.multiplier, raw.contracts)?
            .with_helper_rate(raw.helper_rate)?
            .with_carry(raw.carry)
    }
}

impl<T: Float> Future<T> {
    /// Creates a future with maturity in years and zero carry yield.
    ///
    /// # Arguments
    /// * `expiry` - Time to maturity in years (must be positive)
    /// * `multiplier` - Contract multiplier M (must be positive)
    /// * `contracts` - Number of contracts N (must be positive)
    pub fn new(expiry: T, multiplier: T, contracts: T) -> Result<Self, InstrumentError> {
        if !is_positive(expiry) {
            return Err(InstrumentError::InvalidExpiry {
                expiry: expiry.to_f64().unwrap_or(f64::NAN),
            });
        }
        if !is_positive(multiplier) {
            return Err(InstrumentError::InvalidMultiplier {
                multiplier: multiplier.to_f64().unwrap_or(f64::NAN),
            });
        }
        if !is_positive(contracts) {
            return Err(InstrumentError::InvalidContracts {
                contracts: contracts.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(Self {
            expiry,
            multiplier,
            contracts,
            helper_rate: T::one(),
            carry: FutureCarry::default(),
        })
    }

    /// Creates a future with maturity given as calendar days.
    pub fn from_days(
        days: i64,
        multiplier: T,
        contracts: T,
        convention: DayCountConvention,
    ) -> Result<Self, InstrumentError> {
        let invalid = InstrumentError::InvalidExpiry {
            expiry: days as f64,
        };
        let years = convention
            .year_fraction_days(days)
            .ok()
            .and_then(T::from)
            .ok_or(invalid)?;
        Self::new(years, multiplier, contracts)
    }

    /// Creates a future maturing on `maturity`, valued on `valuation`.
    pub fn from_dates(
        valuation: NaiveDate,
        maturity: NaiveDate,
        multiplier: T,
        contracts: T,
        convention: DayCountConvention,
    ) -> Result<Self, InstrumentError> {
        Self::from_days(
            (maturity - valuation).num_days(),
            multiplier,
            contracts,
            convention,
        )
    }

    /// Sets the FX helper rate.
    ///
    /// # Errors
    /// `InstrumentError::InvalidHelperRate` if `helper_rate` is not positive.
    pub fn with_helper_rate(mut self, helper_rate: T) -> Result<Self, InstrumentError> {
        self.helper_rate = check_helper_rate(helper_rate)?;
        Ok(self)
    }

    /// Replaces the carry term.
    ///
    /// # Errors
    /// `InstrumentError::InvalidYield` if a yield is not finite.
    pub fn with_carry(mut self, carry: FutureCarry<T>) -> Result<Self, InstrumentError> {
        if let FutureCarry::Yield(yield_rate) = carry {
            if !yield_rate.is_finite() {
                return Err(InstrumentError::InvalidYield {
                    yield_rate: yield_rate.to_f64().unwrap_or(f64::NAN),
                });
            }
        }
        self.carry = carry;
        Ok(self)
    }

    /// Holds the carry yield q fixed against the domestic rate.
    pub fn with_yield(self, yield_rate: T) -> Result<Self, InstrumentError> {
        self.with_carry(FutureCarry::Yield(yield_rate))
    }

    /// Prices off the snapshot's cost of carry instead of the rate.
    pub fn with_market_carry(mut self) -> Self {
        self.carry = FutureCarry::Market;
        self
    }

    /// Returns the time to maturity in years.
    #[inline]
    pub fn expiry(&self) -> T {
        self.expiry
    }

    /// Returns the contract multiplier.
    #[inline]
    pub fn multiplier(&self) -> T {
        self.multiplier
    }

    /// Returns the number of contracts.
    #[inline]
    pub fn contracts(&self) -> T {
        self.contracts
    }

    /// Returns the FX helper rate.
    #[inline]
    pub fn helper_rate(&self) -> T {
        self.helper_rate
    }

    /// Returns the carry term.
    #[inline]
    pub fn carry(&self) -> FutureCarry<T> {
        self.carry
    }

    /// Theoretical futures price M·S·e^((r-q)T), or M·S·e^(bT) on market carry.
    ///
    /// # Errors
    /// `AnalyticalError` if spot is not positive or an input is not finite.
    pub fn theoretical_price(&self, market: &MarketSnapshot<T>) -> Result<T, AnalyticalError> {
        let spot = market.spot();
        if !spot.is_finite() {
            return Err(AnalyticalError::NonFiniteInput { name: "spot" });
        }
        if spot <= T::zero() {
            return Err(AnalyticalError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(f64::NAN),
            });
        }

        let growth = match self.carry {
            FutureCarry::Yield(yield_rate) => {
                let rate = market.rate();
                if !rate.is_finite() {
                    return Err(AnalyticalError::NonFiniteInput { name: "rate" });
                }
                rate - yield_rate
            }
            FutureCarry::Market => {
                let carry = market.carry();
                if !carry.is_finite() {
                    return Err(AnalyticalError::NonFiniteInput { name: "carry" });
                }
                carry
            }
        };
        Ok(self.multiplier * spot * (growth * self.expiry).exp())
    }
}

impl<T: Float> Priceable<T> for Future<T> {
    fn price(&self, market: &MarketSnapshot<T>) -> Result<T, PricingError> {
        Ok(self.theoretical_price(market)?)
    }

    /// H × N.
    fn scaling_factor(&self) -> T {
        self.helper_rate * self.contracts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_new_validation() {
        assert!(Future::new(1.0_f64, 1.0, 1.0).is_ok());
        assert!(matches!(
            Future::new(0.0_f64, 1.0, 1.0),
            Err(InstrumentError::InvalidExpiry { .. })
        ));
        assert!(matches!(
            Future::new(1.0_f64, -1.0, 1.0),
            Err(InstrumentError::InvalidMultiplier { .. })
        ));
        assert!(matches!(
            Future::new(1.0_f64, 1.0, 0.0),
            Err(InstrumentError::InvalidContracts { .. })
        ));
    }

    #[test]
    fn test_from_days_actual_360() {
        let future = Future::from_days(180, 1.0_f64, 1.0, DayCountConvention::Actual360).unwrap();
        assert_relative_eq!(future.expiry(), 0.5, epsilon = 1e-12);

        assert!(matches!(
            Future::from_days(-5, 1.0_f64, 1.0, DayCountConvention::Actual360),
            Err(InstrumentError::InvalidExpiry { .. })
        ));
        assert!(Future::from_days(0, 1.0_f64, 1.0, DayCountConvention::Actual360).is_err());
    }

    #[test]
    fn test_from_dates() {
        let valuation = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        let maturity = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let future = Future::from_dates(
            valuation,
            maturity,
            1.0_f64,
            1.0,
            DayCountConvention::Actual365Fixed,
        )
        .unwrap();
        assert_relative_eq!(future.expiry(), 366.0 / 365.0, epsilon = 1e-12);
    }

    #[test]
    fn test_yield_price() {
        let future = Future::new(0.5_f64, 10.0, 1.0)
            .unwrap()
            .with_yield(0.02)
            .unwrap();
        let market = MarketSnapshot::new(100.0, 0.2, 0.05);
        assert_relative_eq!(
            future.price(&market).unwrap(),
            10.0 * 100.0 * (0.015_f64).exp(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_market_carry_price() {
        let future = Future::new(0.5_f64, 10.0, 1.0)
            .unwrap()
            .with_market_carry();
        let market = MarketSnapshot::new(100.0, 0.2, 0.05).with_carry(0.03);
        assert_relative_eq!(
            future.price(&market).unwrap(),
            10.0 * 100.0 * (0.015_f64).exp(),
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_rate_moves_price_under_yield() {
        let future = Future::new(1.0_f64, 1.0, 1.0).unwrap();
        let before = MarketSnapshot::new(100.0, 0.2, 0.05);
        let mut after = before;
        after.set_rate(0.10);

        assert_eq!(future.carry(), FutureCarry::Yield(0.0));
        let moved = future.price(&after).unwrap() - future.price(&before).unwrap();
        assert_relative_eq!(
            moved,
            100.0 * ((0.10_f64).exp() - (0.05_f64).exp()),
            epsilon = 1e-9
        );

        // The carry field alone does not move a yield-based future
        let mut carried = before;
        carried.set_carry(0.0);
        assert_eq!(
            future.price(&carried).unwrap(),
            future.price(&before).unwrap()
        );

        // On market carry the rate no longer matters
        let on_market = future.with_market_carry();
        assert_eq!(
            on_market.price(&after).unwrap(),
            on_market.price(&before).unwrap()
        );
    }

    #[test]
    fn test_invalid_yield() {
        let future = Future::new(1.0_f64, 1.0, 1.0).unwrap();
        assert!(matches!(
            future.with_yield(f64::INFINITY),
            Err(InstrumentError::InvalidYield { .. })
        ));
        assert!(future.with_yield(-0.01).is_ok());
    }

    #[test]
    fn test_price_ignores_volatility() {
        let future = Future::new(1.0_f64, 1.0, 1.0).unwrap();
        let calm = MarketSnapshot::new(100.0, 0.1, 0.05);
        let wild = MarketSnapshot::new(100.0, 0.9, 0.05);
        assert_eq!(future.price(&calm).unwrap(), future.price(&wild).unwrap());
    }

    #[test]
    fn test_scaling_factor() {
        let future = Future::new(1.0_f64, 50.0, 4.0)
            .unwrap()
            .with_helper_rate(5.0)
            .unwrap();
        assert_eq!(future.scaling_factor(), 20.0);
    }

    #[test]
    fn test_invalid_market() {
        let future = Future::new(1.0_f64, 1.0, 1.0).unwrap();
        assert!(future.price(&MarketSnapshot::new(0.0, 0.2, 0.05)).is_err());
        assert!(future
            .price(&MarketSnapshot::new(100.0, 0.2, f64::NAN).with_carry(0.05))
            .is_err());
        assert!(future
            .with_market_carry()
            .price(&MarketSnapshot::new(100.0, 0.2, 0.05).with_carry(f64::NAN))
            .is_err());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_validates_terms() {
        let future: Future<f64> = toml::from_str(
            "expiry = 0.5\nmultiplier = 10.0\ncontracts = 2.0\nhelper_rate = 1.0\ncarry = { yield = 0.02 }",
        )
        .unwrap();
        assert_eq!(future.carry(), FutureCarry::Yield(0.02));

        let defaulted: Future<f64> =
            toml::from_str("expiry = 0.5\nmultiplier = 10.0\ncontracts = 2.0\nhelper_rate = 1.0")
                .unwrap();
        assert_eq!(defaulted.carry(), FutureCarry::Yield(0.0));

        assert!(toml::from_str::<Future<f64>>(
            "expiry = 0.5\nmultiplier = 10.0\ncontracts = 0.0\nhelper_rate = 1.0"
        )
        .is_err());
    }
}
