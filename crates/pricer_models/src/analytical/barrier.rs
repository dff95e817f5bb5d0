//! Barrier option resolution.
//!
//! Prices a barrier option by selecting one of seven closed-form rules from
//! the active [`BarrierSet`], comparing the current spot against each level
//! with the configured breach direction.
//!
//! ## Rules
//!
//! | Active set | Price |
//! |---|---|
//! | {B} | breached(S,B) ? vanilla × haircut : 0 |
//! | {Hin} | breached(S,Hin) ? vanilla : rebatePV |
//! | {Hout} | breached(S,Hout) ? rebatePV : vanilla |
//! | {B, Hin} | breached(S,B) ? {Hin} : 0 |
//! | {B, Hout} | breached(S,B) ? {Hout} : 0 |
//! | {Hin, Hout} | breached(S,Hout) ? rebatePV : breached(S,Hin) ? {Hout} : dormant |
//! | {B, Hin, Hout} | breached(S,B) ? {Hin, Hout} : 0 |
//!
//! where vanilla = max(M × Black-Scholes, 0) and rebatePV = R·e^(-rT).
//! The {Hin, Hout} rule re-enters the dispatch with the derived knock-out
//! set once the knock-in level is hit; that set is a leaf, so the recursion
//! depth is at most one.

use num_traits::Float;
use pricer_core::market_data::MarketSnapshot;
use tracing::debug;

use super::black_scholes::BlackScholes;
use super::error::AnalyticalError;
use crate::instruments::{
    BarrierConfig, BarrierDirection, BarrierPolicy, BarrierSet, DormantRule, InstrumentParams,
    OptionType,
};

/// Barrier rule evaluator for one option under one market.
///
/// The vanilla price and discounted rebate are computed once at
/// construction, which is also where out-of-domain market data is rejected.
///
/// # Examples
/// ```
/// use pricer_core::market_data::MarketSnapshot;
/// use pricer_models::analytical::BarrierResolver;
/// use pricer_models::instruments::{
///     BarrierConfig, BarrierDirection, BarrierPolicy, InstrumentParams, OptionType,
/// };
///
/// let market = MarketSnapshot::new(100.0_f64, 0.2, 0.05);
/// let params = InstrumentParams::new(100.0, 1.0, 1.0).unwrap();
/// let config = BarrierConfig::from_levels(0.0, 0.0, 110.0, 3.0, BarrierDirection::Up).unwrap();
///
/// let resolver = BarrierResolver::new(
///     &market, &params, OptionType::Call, &config, BarrierPolicy::default(),
/// ).unwrap();
///
/// // Spot is below the up-and-out level, so the option is still alive
/// assert_eq!(resolver.resolve(), resolver.vanilla());
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BarrierResolver<T: Float> {
    spot: T,
    reference_spot: T,
    vanilla: T,
    rebate_pv: T,
    direction: BarrierDirection,
    barriers: BarrierSet<T>,
    policy: BarrierPolicy,
}

impl<T: Float> BarrierResolver<T> {
    /// Prepares the resolver.
    ///
    /// # Errors
    /// `AnalyticalError` if the market or contract terms fall outside the
    /// Black-Scholes domain.
    pub fn new(
        market: &MarketSnapshot<T>,
        params: &InstrumentParams<T>,
        option_type: OptionType,
        config: &BarrierConfig<T>,
        policy: BarrierPolicy,
    ) -> Result<Self, AnalyticalError> {
        let model = BlackScholes::from_market(market)?;
        let unit = model.price(params.strike(), params.expiry(), option_type)?;
        let vanilla = (params.multiplier() * unit).max(T::zero());
        let rebate_pv = config.rebate() * (-market.rate() * params.expiry()).exp();

        Ok(Self {
            spot: market.spot(),
            reference_spot: config.reference_spot().unwrap_or(market.spot()),
            vanilla,
            rebate_pv,
            direction: config.direction(),
            barriers: config.barriers(),
            policy,
        })
    }

    /// Floored vanilla price M × BS.
    #[inline]
    pub fn vanilla(&self) -> T {
        self.vanilla
    }

    /// Discounted rebate R·e^(-rT).
    #[inline]
    pub fn rebate_pv(&self) -> T {
        self.rebate_pv
    }

    /// Prices the configured barrier set.
    pub fn resolve(&self) -> T {
        let price = self.dispatch(self.barriers).max(T::zero());
        debug!(
            barriers = self.barriers.name(),
            spot = self.spot.to_f64().unwrap_or(f64::NAN),
            price = price.to_f64().unwrap_or(f64::NAN),
            "barrier rule resolved"
        );
        price
    }

    #[inline]
    fn breached(&self, level: T) -> bool {
        self.direction.breached(self.spot, level)
    }

    fn dispatch(&self, barriers: BarrierSet<T>) -> T {
        let zero = T::zero();
        match barriers {
            BarrierSet::Limit { limit } => {
                if self.breached(limit) {
                    self.vanilla * T::from(self.policy.limit_haircut).unwrap()
                } else {
                    zero
                }
            }
            BarrierSet::KnockIn { knock_in } => {
                if self.breached(knock_in) {
                    self.vanilla
                } else {
                    self.rebate_pv
                }
            }
            BarrierSet::KnockOut { knock_out } => {
                if self.breached(knock_out) {
                    self.rebate_pv
                } else {
                    self.vanilla
                }
            }
            BarrierSet::LimitKnockIn { limit, knock_in } => {
                if self.breached(limit) {
                    self.dispatch(BarrierSet::KnockIn { knock_in })
                } else {
                    zero
                }
            }
            BarrierSet::LimitKnockOut { limit, knock_out } => {
                if self.breached(limit) {
                    self.dispatch(BarrierSet::KnockOut { knock_out })
                } else {
                    zero
                }
            }
            BarrierSet::KnockInKnockOut {
                knock_in,
                knock_out,
            } => self.knock_in_knock_out(knock_in, knock_out),
            BarrierSet::LimitKnockInKnockOut {
                limit,
                knock_in,
                knock_out,
            } => {
                if self.breached(limit) {
                    self.knock_in_knock_out(knock_in, knock_out)
                } else {
                    zero
                }
            }
        }
    }

    fn knock_in_knock_out(&self, knock_in: T, knock_out: T) -> T {
        if self.breached(knock_out) {
            return self.rebate_pv;
        }
        if self.breached(knock_in) {
            debug!("knock-in hit, re-dispatching on knock-out leg");
            return self.dispatch(BarrierSet::KnockOut { knock_out });
        }

        match self.policy.dormant {
            DormantRule::Rebate => self.rebate_pv,
            DormantRule::Fractional { aligned, opposed } => {
                let same_side =
                    (knock_out > self.reference_spot) == (knock_in > self.reference_spot);
                let factor = if same_side { aligned } else { opposed };
                T::from(factor).unwrap() * self.dispatch(BarrierSet::KnockIn { knock_in })
            }
        }
    }
}
