//! Point-in-time market state for a single underlying.
//!
//! A `MarketSnapshot` carries the market-dependent inputs of the
//! generalised Black-Scholes model: spot (S), volatility (σ), domestic rate
//! (r) and cost of carry (b). Contract terms (strike, maturity, multiplier)
//! live on the instruments, so one snapshot type can describe the current
//! market, the previous period's market, or a stressed scenario.
//!
//! Snapshots are plain values. They are not validated on construction;
//! pricers reject out-of-domain values when they are used.

use num_traits::Float;

use crate::traits::risk::{RiskFactorType, ShiftType};

/// Market-dependent inputs of an instrument at one point in time.
///
/// # Examples
/// ```
/// use pricer_core::market_data::MarketSnapshot;
///
/// // Domestic underlying: carry defaults to the rate
/// let market = MarketSnapshot::new(100.0_f64, 0.2, 0.05);
/// assert_eq!(market.carry(), 0.05);
///
/// // FX underlying: carry is the rate differential
/// let fx = MarketSnapshot::new(5.10_f64, 0.12, 0.1075).with_carry(0.1075 - 0.053);
/// assert!((fx.carry() - 0.0545).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MarketSnapshot<T: Float> {
    spot: T,
    volatility: T,
    rate: T,
    carry: T,
}

impl<T: Float> MarketSnapshot<T> {
    /// Creates a snapshot whose cost of carry equals the domestic rate.
    ///
    /// # Arguments
    /// * `spot` - Spot price of the underlying (S)
    /// * `volatility` - Annualised volatility (σ)
    /// * `rate` - Continuously compounded domestic rate (r)
    pub fn new(spot: T, volatility: T, rate: T) -> Self {
        Self {
            spot,
            volatility,
            rate,
            carry: rate,
        }
    }

    /// Returns a copy with an explicit cost of carry.
    #[inline]
    pub fn with_carry(mut self, carry: T) -> Self {
        self.carry = carry;
        self
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    /// Returns the domestic rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the cost of carry.
    #[inline]
    pub fn carry(&self) -> T {
        self.carry
    }

    /// Sets the spot price.
    #[inline]
    pub fn set_spot(&mut self, spot: T) {
        self.spot = spot;
    }

    /// Sets the volatility.
    #[inline]
    pub fn set_volatility(&mut self, volatility: T) {
        self.volatility = volatility;
    }

    /// Sets the domestic rate. The cost of carry is left untouched.
    #[inline]
    pub fn set_rate(&mut self, rate: T) {
        self.rate = rate;
    }

    /// Sets the cost of carry.
    #[inline]
    pub fn set_carry(&mut self, carry: T) {
        self.carry = carry;
    }

    /// Reads the field addressed by `factor`.
    pub fn factor(&self, factor: RiskFactorType) -> T {
        match factor {
            RiskFactorType::Spot => self.spot,
            RiskFactorType::Volatility => self.volatility,
            RiskFactorType::InterestRate => self.rate,
            RiskFactorType::CostOfCarry => self.carry,
        }
    }

    /// Returns a copy with the field addressed by `factor` shifted.
    ///
    /// # Examples
    /// ```
    /// use pricer_core::market_data::MarketSnapshot;
    /// use pricer_core::traits::risk::{RiskFactorType, ShiftType};
    ///
    /// let base = MarketSnapshot::new(100.0_f64, 0.2, 0.05);
    /// let bumped = base.shifted(RiskFactorType::Spot, ShiftType::relative(-0.1));
    /// assert!((bumped.spot() - 90.0).abs() < 1e-12);
    /// assert_eq!(bumped.volatility(), base.volatility());
    /// ```
    pub fn shifted(&self, factor: RiskFactorType, shift: ShiftType<T>) -> Self {
        let mut out = *self;
        let value = shift.apply(self.factor(factor));
        match factor {
            RiskFactorType::Spot => out.spot = value,
            RiskFactorType::Volatility => out.volatility = value,
            RiskFactorType::InterestRate => out.rate = value,
            RiskFactorType::CostOfCarry => out.carry = value,
        }
        out
    }

    /// Returns true if every field is finite.
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.spot.is_finite()
            && self.volatility.is_finite()
            && self.rate.is_finite()
            && self.carry.is_finite()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_carry_defaults_to_rate() {
        let market = MarketSnapshot::new(100.0_f64, 0.2, 0.05);
        assert_eq!(market.carry(), market.rate());
    }

    #[test]
    fn test_set_rate_keeps_carry() {
        let mut market = MarketSnapshot::new(100.0_f64, 0.2, 0.05);
        market.set_rate(0.07);
        assert_eq!(market.rate(), 0.07);
        assert_eq!(market.carry(), 0.05);
    }

    #[test]
    fn test_setters() {
        let mut market = MarketSnapshot::new(100.0_f64, 0.2, 0.05);
        market.set_spot(110.0);
        market.set_volatility(0.25);
        market.set_carry(0.01);
        assert_eq!(market.spot(), 110.0);
        assert_eq!(market.volatility(), 0.25);
        assert_eq!(market.carry(), 0.01);
    }

    #[test]
    fn test_factor_accessor_matches_fields() {
        let market = MarketSnapshot::new(100.0_f64, 0.2, 0.05).with_carry(0.03);
        assert_eq!(market.factor(RiskFactorType::Spot), 100.0);
        assert_eq!(market.factor(RiskFactorType::Volatility), 0.2);
        assert_eq!(market.factor(RiskFactorType::InterestRate), 0.05);
        assert_eq!(market.factor(RiskFactorType::CostOfCarry), 0.03);
    }

    #[test]
    fn test_shifted_touches_only_one_field() {
        let base = MarketSnapshot::new(100.0_f64, 0.2, 0.05).with_carry(0.03);
        for factor in RiskFactorType::ALL {
            let bumped = base.shifted(factor, ShiftType::absolute(0.01));
            for other in RiskFactorType::ALL {
                if other == factor {
                    assert_relative_eq!(
                        bumped.factor(other),
                        base.factor(other) + 0.01,
                        epsilon = 1e-12
                    );
                } else {
                    assert_eq!(bumped.factor(other), base.factor(other));
                }
            }
        }
    }

    #[test]
    fn test_is_finite() {
        assert!(MarketSnapshot::new(100.0_f64, 0.2, 0.05).is_finite());
        assert!(!MarketSnapshot::new(f64::NAN, 0.2, 0.05).is_finite());
        assert!(!MarketSnapshot::new(100.0_f64, 0.2, 0.05)
            .with_carry(f64::INFINITY)
            .is_finite());
    }
}
