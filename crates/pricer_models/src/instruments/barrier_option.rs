//! Barrier option instrument.

use num_traits::Float;
use pricer_core::market_data::MarketSnapshot;
use pricer_core::traits::priceable::Priceable;
use pricer_core::types::PricingError;

use super::barrier::{BarrierConfig, BarrierPolicy};
use super::error::InstrumentError;
use super::params::{check_helper_rate, InstrumentParams};
use super::payoff::OptionType;
use crate::analytical::{AnalyticalError, BarrierResolver};

/// European option with limit, knock-in and knock-out conditions.
///
/// Vanilla contract terms plus a validated [`BarrierConfig`] and the
/// [`BarrierPolicy`] constants used by the resolver.
///
/// # Examples
/// ```
/// use pricer_core::market_data::MarketSnapshot;
/// use pricer_core::traits::priceable::Priceable;
/// use pricer_models::instruments::{
///     BarrierConfig, BarrierDirection, BarrierOption, InstrumentParams, OptionType,
/// };
///
/// let params = InstrumentParams::new(100.0_f64, 1.0, 1.0).unwrap();
/// let config = BarrierConfig::from_levels(0.0, 0.0, 110.0, 3.0, BarrierDirection::Up).unwrap();
/// let option = BarrierOption::new(params, OptionType::Call, config);
///
/// // Spot at the up-and-out level: only the discounted rebate is left
/// let knocked = option.price(&MarketSnapshot::new(110.0, 0.2, 0.05)).unwrap();
/// assert!((knocked - 3.0 * (-0.05_f64).exp()).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawBarrierOption<T>",
        bound(deserialize = "T: serde::Deserialize<'de>")
    )
)]
pub struct BarrierOption<T: Float> {
    params: InstrumentParams<T>,
    option_type: OptionType,
    config: BarrierConfig<T>,
    policy: BarrierPolicy,
    helper_rate: T,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawBarrierOption<T: Float> {
    params: InstrumentParams<T>,
    option_type: OptionType,
    config: BarrierConfig<T>,
    #[serde(default)]
    policy: BarrierPolicy,
    helper_rate: T,
}

#[cfg(feature = "serde")]
impl<T: Float> TryFrom<RawBarrierOption<T>> for BarrierOption<T> {
    type Error = InstrumentError;

    fn try_from(raw: RawBarrierOption<T>) -> Result<Self, Self::Error> {
        Self::new(raw.params, raw.option_type, raw.config)
            .with_policy(raw.policy)?
            .with_helper_rate(raw.helper_rate)
    }
}

impl<T: Float> BarrierOption<T> {
    /// Creates a barrier option with the default policy and H = 1.
    pub fn new(params: InstrumentParams<T>, option_type: OptionType, config: BarrierConfig<T>) -> Self {
        Self {
            params,
            option_type,
            config,
            policy: BarrierPolicy::default(),
            helper_rate: T::one(),
        }
    }

    /// Replaces the barrier policy.
    ///
    /// # Errors
    /// `InstrumentError::InvalidBarrierConfiguration` if the policy is out of range.
    pub fn with_policy(mut self, policy: BarrierPolicy) -> Result<Self, InstrumentError> {
        policy.validate()?;
        self.policy = policy;
        Ok(self)
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

    /// Returns a reference to the barrier configuration.
    #[inline]
    pub fn config(&self) -> &BarrierConfig<T> {
        &self.config
    }

    /// Returns the barrier policy.
    #[inline]
    pub fn policy(&self) -> BarrierPolicy {
        self.policy
    }

    /// Returns the FX helper rate.
    #[inline]
    pub fn helper_rate(&self) -> T {
        self.helper_rate
    }

    /// Builds the rule evaluator for `market`.
    pub fn resolver(&self, market: &MarketSnapshot<T>) -> Result<BarrierResolver<T>, AnalyticalError> {
        BarrierResolver::new(
            market,
            &self.params,
            self.option_type,
            &self.config,
            self.policy,
        )
    }

    /// Prices the option under `market`.
    ///
    /// # Errors
    /// `AnalyticalError` if the market falls outside the model domain.
    pub fn theoretical_price(&self, market: &MarketSnapshot<T>) -> Result<T, AnalyticalError> {
        Ok(self.resolver(market)?.resolve())
    }
}

impl<T: Float> Priceable<T> for BarrierOption<T> {
    fn price(&self, market: &MarketSnapshot<T>) -> Result<T, PricingError> {
        Ok(self.theoretical_price(market)?)
    }

    fn scaling_factor(&self) -> T {
        self.helper_rate
    }
}
