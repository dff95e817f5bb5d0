//! Generalised Black-Scholes pricing model for European options.
//!
//! This module provides the cost-of-carry form of the Black-Scholes model
//! together with its analytical Greeks.
//!
//! ## Mathematical Formulas
//!
//! **Call Price**: C = S·e^((b-r)T)·N(d₁) - K·e^(-rT)·N(d₂)
//! **Put Price**: P = K·e^(-rT)·N(-d₂) - S·e^((b-r)T)·N(-d₁)
//!
//! Where:
//! - d₁ = (ln(S/K) + (b + σ²/2)T) / (σ√T)
//! - d₂ = d₁ - σ√T
//!
//! The carry b selects the underlying: b = r for a non-dividend stock,
//! b = r - q for a stock with continuous yield q, b = r - r_f for FX.

use num_traits::Float;
use pricer_core::market_data::MarketSnapshot;

use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;
use crate::instruments::OptionType;

/// The five first-order sensitivities of a European option.
///
/// Values are per unit of underlying; instruments scale them by their
/// contract multiplier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Greeks<T: Float> {
    /// ∂V/∂S
    pub delta: T,
    /// ∂²V/∂S²
    pub gamma: T,
    /// ∂V/∂σ
    pub vega: T,
    /// ∂V/∂t (calendar time, so usually negative)
    pub theta: T,
    /// ∂V/∂r with the carry moving together with the rate
    pub rho: T,
}

impl<T: Float> Greeks<T> {
    /// Multiplies every sensitivity by `factor`.
    #[inline]
    pub fn scaled(self, factor: T) -> Self {
        Self {
            delta: self.delta * factor,
            gamma: self.gamma * factor,
            vega: self.vega * factor,
            theta: self.theta * factor,
            rho: self.rho * factor,
        }
    }
}

/// Generalised Black-Scholes model for European option pricing.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Examples
/// ```
/// use pricer_models::analytical::BlackScholes;
/// use pricer_models::instruments::OptionType;
///
/// let bs = BlackScholes::new(100.0_f64, 0.05, 0.05, 0.2).unwrap();
/// let call = bs.price(100.0, 1.0, OptionType::Call).unwrap();
/// let put = bs.price(100.0, 1.0, OptionType::Put).unwrap();
///
/// // Put-call parity: C - P = S - K*exp(-rT)
/// let parity = call - put - (100.0 - 100.0 * (-0.05_f64).exp());
/// assert!(parity.abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BlackScholes<T: Float> {
    /// Spot price (S)
    spot: T,
    /// Risk-free interest rate (r)
    rate: T,
    /// Cost of carry (b)
    carry: T,
    /// Volatility (σ)
    volatility: T,
}

impl<T: Float> BlackScholes<T> {
    /// Creates a new Black-Scholes model.
    ///
    /// # Arguments
    /// * `spot` - Current spot price (must be positive)
    /// * `rate` - Risk-free interest rate (annualised)
    /// * `carry` - Cost of carry (annualised)
    /// * `volatility` - Volatility (must be positive)
    ///
    /// # Errors
    /// - `AnalyticalError::NonFiniteInput` if any input is NaN or infinite
    /// - `AnalyticalError::InvalidSpot` if spot <= 0
    /// - `AnalyticalError::InvalidVolatility` if volatility <= 0
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    ///
    /// assert!(BlackScholes::new(100.0_f64, 0.05, 0.05, 0.2).is_ok());
    /// assert!(BlackScholes::new(-100.0_f64, 0.05, 0.05, 0.2).is_err());
    /// assert!(BlackScholes::new(100.0_f64, 0.05, 0.05, 0.0).is_err());
    /// ```
    pub fn new(spot: T, rate: T, carry: T, volatility: T) -> Result<Self, AnalyticalError> {
        let zero = T::zero();

        for (name, value) in [
            ("spot", spot),
            ("rate", rate),
            ("carry", carry),
            ("volatility", volatility),
        ] {
            if !value.is_finite() {
                return Err(AnalyticalError::NonFiniteInput { name });
            }
        }

        if spot <= zero {
            return Err(AnalyticalError::InvalidSpot {
                spot: spot.to_f64().unwrap_or(f64::NAN),
            });
        }

        if volatility <= zero {
            return Err(AnalyticalError::InvalidVolatility {
                volatility: volatility.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            spot,
            rate,
            carry,
            volatility,
        })
    }

    /// Creates a model from the market-dependent fields of a snapshot.
    #[inline]
    pub fn from_market(market: &MarketSnapshot<T>) -> Result<Self, AnalyticalError> {
        Self::new(
            market.spot(),
            market.rate(),
            market.carry(),
            market.volatility(),
        )
    }

    /// Returns the spot price.
    #[inline]
    pub fn spot(&self) -> T {
        self.spot
    }

    /// Returns the risk-free rate.
    #[inline]
    pub fn rate(&self) -> T {
        self.rate
    }

    /// Returns the cost of carry.
    #[inline]
    pub fn carry(&self) -> T {
        self.carry
    }

    /// Returns the volatility.
    #[inline]
    pub fn volatility(&self) -> T {
        self.volatility
    }

    fn check_terms(strike: T, expiry: T) -> Result<(), AnalyticalError> {
        let zero = T::zero();

        if !strike.is_finite() {
            return Err(AnalyticalError::NonFiniteInput { name: "strike" });
        }
        if !expiry.is_finite() {
            return Err(AnalyticalError::NonFiniteInput { name: "expiry" });
        }
        if strike <= zero {
            return Err(AnalyticalError::InvalidStrike {
                strike: strike.to_f64().unwrap_or(f64::NAN),
            });
        }
        if expiry <= zero {
            return Err(AnalyticalError::InvalidExpiry {
                expiry: expiry.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(())
    }

    /// Computes the d1 term.
    ///
    /// d₁ = (ln(S/K) + (b + σ²/2)T) / (σ√T)
    ///
    /// # Errors
    /// `AnalyticalError` if strike or expiry is non-positive or non-finite.
    #[inline]
    pub fn d1(&self, strike: T, expiry: T) -> Result<T, AnalyticalError> {
        Self::check_terms(strike, expiry)?;
        Ok(self.d1_unchecked(strike, expiry))
    }

    /// Computes the d2 term.
    ///
    /// d₂ = d₁ - σ√T
    ///
    /// # Errors
    /// `AnalyticalError` if strike or expiry is non-positive or non-finite.
    #[inline]
    pub fn d2(&self, strike: T, expiry: T) -> Result<T, AnalyticalError> {
        Ok(self.d1(strike, expiry)? - self.volatility * expiry.sqrt())
    }

    #[inline]
    fn d1_unchecked(&self, strike: T, expiry: T) -> T {
        let half = T::from(0.5).unwrap();
        let vol_sqrt_t = self.volatility * expiry.sqrt();
        let log_moneyness = (self.spot / strike).ln();
        let drift = (self.carry + half * self.volatility * self.volatility) * expiry;

        (log_moneyness + drift) / vol_sqrt_t
    }

    /// Carry-adjusted spot factor e^((b-r)T).
    #[inline]
    fn carry_factor(&self, expiry: T) -> T {
        ((self.carry - self.rate) * expiry).exp()
    }

    /// Computes the price of one European option on one unit of underlying.
    ///
    /// # Arguments
    /// * `strike` - Strike price (K)
    /// * `expiry` - Time to expiration in years (T)
    /// * `option_type` - Call or put
    ///
    /// # Errors
    /// `AnalyticalError` if strike or expiry is non-positive or non-finite.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::analytical::BlackScholes;
    /// use pricer_models::instruments::OptionType;
    ///
    /// let bs = BlackScholes::new(100.0_f64, 0.05, 0.05, 0.2).unwrap();
    /// let call = bs.price(100.0, 1.0, OptionType::Call).unwrap();
    /// assert!((call - 10.45).abs() < 0.01);
    ///
    /// assert!(bs.price(100.0, 0.0, OptionType::Call).is_err());
    /// ```
    pub fn price(&self, strike: T, expiry: T, option_type: OptionType) -> Result<T, AnalyticalError> {
        Self::check_terms(strike, expiry)?;

        let d1 = self.d1_unchecked(strike, expiry);
        let d2 = d1 - self.volatility * expiry.sqrt();
        let forward_spot = self.spot * self.carry_factor(expiry);
        let discounted_strike = strike * (-self.rate * expiry).exp();

        Ok(match option_type {
            OptionType::Call => forward_spot * norm_cdf(d1) - discounted_strike * norm_cdf(d2),
            OptionType::Put => discounted_strike * norm_cdf(-d2) - forward_spot * norm_cdf(-d1),
        })
    }

    /// Computes the European call price.
    #[inline]
    pub fn price_call(&self, strike: T, expiry: T) -> Result<T, AnalyticalError> {
        self.price(strike, expiry, OptionType::Call)
    }

    /// Computes the European put price.
    #[inline]
    pub fn price_put(&self, strike: T, expiry: T) -> Result<T, AnalyticalError> {
        self.price(strike, expiry, OptionType::Put)
    }

    /// Computes Delta (∂V/∂S).
    ///
    /// - Call Delta = e^((b-r)T)·N(d₁)
    /// - Put Delta = e^((b-r)T)·(N(d₁) - 1)
    pub fn delta(&self, strike: T, expiry: T, option_type: OptionType) -> Result<T, AnalyticalError> {
        let d1 = self.d1(strike, expiry)?;
        let carry_factor = self.carry_factor(expiry);

        Ok(match option_type {
            OptionType::Call => carry_factor * norm_cdf(d1),
            OptionType::Put => carry_factor * (norm_cdf(d1) - T::one()),
        })
    }

    /// Computes Gamma (∂²V/∂S²).
    ///
    /// Gamma = φ(d₁)·e^((b-r)T) / (S·σ·√T), identical for calls and puts.
    pub fn gamma(&self, strike: T, expiry: T) -> Result<T, AnalyticalError> {
        let d1 = self.d1(strike, expiry)?;
        let vol_sqrt_t = self.volatility * expiry.sqrt();

        Ok(norm_pdf(d1) * self.carry_factor(expiry) / (self.spot * vol_sqrt_t))
    }

    /// Computes Vega (∂V/∂σ).
    ///
    /// Vega = S·e^((b-r)T)·φ(d₁)·√T, identical for calls and puts.
    pub fn vega(&self, strike: T, expiry: T) -> Result<T, AnalyticalError> {
        let d1 = self.d1(strike, expiry)?;

        Ok(self.spot * self.carry_factor(expiry) * norm_pdf(d1) * expiry.sqrt())
    }

    /// Computes Theta (∂V/∂t).
    ///
    /// - Call Theta = -S·e^((b-r)T)·φ(d₁)·σ/(2√T) - (b-r)·S·e^((b-r)T)·N(d₁) - r·K·e^(-rT)·N(d₂)
    /// - Put Theta = -S·e^((b-r)T)·φ(d₁)·σ/(2√T) + (b-r)·S·e^((b-r)T)·N(-d₁) + r·K·e^(-rT)·N(-d₂)
    ///
    /// This is the rate of change with respect to calendar time, which is
    /// typically negative (time decay).
    pub fn theta(&self, strike: T, expiry: T, option_type: OptionType) -> Result<T, AnalyticalError> {
        let d1 = self.d1(strike, expiry)?;
        let d2 = d1 - self.volatility * expiry.sqrt();
        let two = T::from(2.0).unwrap();
        let forward_spot = self.spot * self.carry_factor(expiry);
        let discounted_strike = strike * (-self.rate * expiry).exp();
        let carry_spread = self.carry - self.rate;

        let decay = -(forward_spot * norm_pdf(d1) * self.volatility) / (two * expiry.sqrt());

        Ok(match option_type {
            OptionType::Call => {
                decay
                    - carry_spread * forward_spot * norm_cdf(d1)
                    - self.rate * discounted_strike * norm_cdf(d2)
            }
            OptionType::Put => {
                decay
                    + carry_spread * forward_spot * norm_cdf(-d1)
                    + self.rate * discounted_strike * norm_cdf(-d2)
            }
        })
    }

    /// Computes Rho (∂V/∂r, carry moving with the rate).
    ///
    /// - Call Rho = K·T·e^(-rT)·N(d₂)
    /// - Put Rho = -K·T·e^(-rT)·N(-d₂)
    pub fn rho(&self, strike: T, expiry: T, option_type: OptionType) -> Result<T, AnalyticalError> {
        let d2 = self.d2(strike, expiry)?;
        let discounted_strike = strike * (-self.rate * expiry).exp();

        Ok(match option_type {
            OptionType::Call => discounted_strike * expiry * norm_cdf(d2),
            OptionType::Put => -discounted_strike * expiry * norm_cdf(-d2),
        })
    }

    /// Computes all five Greeks in one call.
    pub fn greeks(
        &self,
        strike: T,
        expiry: T,
        option_type: OptionType,
    ) -> Result<Greeks<T>, AnalyticalError> {
        Ok(Greeks {
            delta: self.delta(strike, expiry, option_type)?,
            gamma: self.gamma(strike, expiry)?,
            vega: self.vega(strike, expiry)?,
            theta: self.theta(strike, expiry, option_type)?,
            rho: self.rho(strike, expiry, option_type)?,
        })
    }
}
