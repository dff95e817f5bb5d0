//! Financial instrument definitions.
//!
//! This module provides instrument definitions for pricing with an
//! enum dispatch architecture.
//!
//! # Architecture
//!
//! Uses enum dispatch (NOT trait objects) for static dispatch:
//! - `Instrument<T>` enum wraps all instrument types
//! - All types generic over `T: Float` (f64 for books, f32 for batch work)
//! - Contract terms live on the instrument; market data is passed in as a
//!   [`MarketSnapshot`](pricer_core::market_data::MarketSnapshot)
//!
//! # Instrument Types
//!
//! - [`Spot`]: Direct holding of the underlying
//! - [`VanillaOption`]: European call/put under generalised Black-Scholes
//! - [`BarrierOption`]: Vanilla terms plus limit / knock-in / knock-out levels
//! - [`Future`]: Cost-of-carry futures contract
//!
//! # Examples
//!
//! ```
//! use pricer_core::market_data::MarketSnapshot;
//! use pricer_core::traits::priceable::Priceable;
//! use pricer_models::instruments::{Instrument, InstrumentParams, OptionType, VanillaOption};
//!
//! let params = InstrumentParams::new(100.0_f64, 1.0, 1.0).unwrap();
//! let call = VanillaOption::new(params, OptionType::Call);
//! let instrument = Instrument::Vanilla(call);
//!
//! let price = instrument.price(&MarketSnapshot::new(100.0, 0.2, 0.05)).unwrap();
//! assert!((price - 10.45).abs() < 0.01);
//! ```

// Core types
mod barrier;
mod error;
mod params;
mod payoff;

// Instrument implementations
mod barrier_option;
mod future;
mod spot;
mod vanilla;

pub use barrier::{
    BarrierConfig, BarrierDirection, BarrierKind, BarrierPolicy, BarrierSet, DormantRule,
};
pub use barrier_option::BarrierOption;
pub use error::InstrumentError;
pub use future::{Future, FutureCarry};
pub use params::InstrumentParams;
pub use payoff::OptionType;
pub use spot::Spot;
pub use vanilla::VanillaOption;

use num_traits::Float;
use pricer_core::market_data::MarketSnapshot;
use pricer_core::traits::priceable::Priceable;
use pricer_core::types::PricingError;

/// Unified instrument enum for static dispatch.
///
/// # Type Parameters
/// * `T` - Floating-point type implementing `Float` (e.g., `f64`, `f32`)
///
/// # Variants
/// - `Spot`: Underlying held outright
/// - `Vanilla`: European vanilla option
/// - `Barrier`: Barrier option
/// - `Future`: Futures contract
///
/// # Examples
/// ```
/// use pricer_core::market_data::MarketSnapshot;
/// use pricer_core::traits::priceable::Priceable;
/// use pricer_models::instruments::{Future, Instrument, Spot};
///
/// let market = MarketSnapshot::new(100.0_f64, 0.2, 0.05);
///
/// let stock = Instrument::Spot(Spot::new());
/// let future = Instrument::Future(Future::new(1.0, 1.0, 5.0).unwrap());
///
/// assert_eq!(stock.price(&market).unwrap(), 100.0);
/// assert!(future.price(&market).unwrap() > 100.0);
/// assert_eq!(future.scaling_factor(), 5.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Instrument<T: Float> {
    /// Spot holding
    Spot(Spot<T>),
    /// Vanilla option (Call, Put)
    Vanilla(VanillaOption<T>),
    /// Barrier option
    Barrier(BarrierOption<T>),
    /// Futures contract
    Future(Future<T>),
}

impl<T: Float> Instrument<T> {
    /// Returns the instrument kind as a static string.
    pub fn kind(&self) -> &'static str {
        match self {
            Instrument::Spot(_) => "spot",
            Instrument::Vanilla(_) => "vanilla",
            Instrument::Barrier(_) => "barrier",
            Instrument::Future(_) => "future",
        }
    }

    /// Returns the time to expiry in years, `None` for spot holdings.
    ///
    /// # Examples
    /// ```
    /// use pricer_models::instruments::{Future, Instrument, Spot};
    ///
    /// let future = Instrument::Future(Future::new(0.5_f64, 1.0, 1.0).unwrap());
    /// assert_eq!(future.expiry(), Some(0.5));
    /// assert_eq!(Instrument::Spot(Spot::<f64>::new()).expiry(), None);
    /// ```
    #[inline]
    pub fn expiry(&self) -> Option<T> {
        match self {
            Instrument::Spot(_) => None,
            Instrument::Vanilla(option) => Some(option.expiry()),
            Instrument::Barrier(option) => Some(option.params().expiry()),
            Instrument::Future(future) => Some(future.expiry()),
        }
    }

    /// Returns the FX helper rate.
    #[inline]
    pub fn helper_rate(&self) -> T {
        match self {
            Instrument::Spot(spot) => spot.helper_rate(),
            Instrument::Vanilla(option) => option.helper_rate(),
            Instrument::Barrier(option) => option.helper_rate(),
            Instrument::Future(future) => future.helper_rate(),
        }
    }

    /// Returns whether this is a spot holding.
    #[inline]
    pub fn is_spot(&self) -> bool {
        matches!(self, Instrument::Spot(_))
    }

    /// Returns whether this is a vanilla option.
    #[inline]
    pub fn is_vanilla(&self) -> bool {
        matches!(self, Instrument::Vanilla(_))
    }

    /// Returns whether this is a barrier option.
    #[inline]
    pub fn is_barrier(&self) -> bool {
        matches!(self, Instrument::Barrier(_))
    }

    /// Returns whether this is a futures contract.
    #[inline]
    pub fn is_future(&self) -> bool {
        matches!(self, Instrument::Future(_))
    }

    /// Returns a reference to the vanilla option if this is a Vanilla variant.
    pub fn as_vanilla(&self) -> Option<&VanillaOption<T>> {
        match self {
            Instrument::Vanilla(option) => Some(option),
            _ => None,
        }
    }

    /// Returns a reference to the barrier option if this is a Barrier variant.
    pub fn as_barrier(&self) -> Option<&BarrierOption<T>> {
        match self {
            Instrument::Barrier(option) => Some(option),
            _ => None,
        }
    }

    /// Returns a reference to the future if this is a Future variant.
    pub fn as_future(&self) -> Option<&Future<T>> {
        match self {
            Instrument::Future(future) => Some(future),
            _ => None,
        }
    }
}

impl<T: Float> Priceable<T> for Instrument<T> {
    #[inline]
    fn price(&self, market: &MarketSnapshot<T>) -> Result<T, PricingError> {
        match self {
            Instrument::Spot(spot) => spot.price(market),
            Instrument::Vanilla(option) => option.price(market),
            Instrument::Barrier(option) => option.price(market),
            Instrument::Future(future) => future.price(market),
        }
    }

    #[inline]
    fn scaling_factor(&self) -> T {
        match self {
            Instrument::Spot(spot) => spot.scaling_factor(),
            Instrument::Vanilla(option) => option.scaling_factor(),
            Instrument::Barrier(option) => option.scaling_factor(),
            Instrument::Future(future) => future.scaling_factor(),
        }
    }
}

impl<T: Float> From<Spot<T>> for Instrument<T> {
    fn from(spot: Spot<T>) -> Self {
        Instrument::Spot(spot)
    }
}

impl<T: Float> From<VanillaOption<T>> for Instrument<T> {
    fn from(option: VanillaOption<T>) -> Self {
        Instrument::Vanilla(option)
    }
}

impl<T: Float> From<BarrierOption<T>> for Instrument<T> {
    fn from(option: BarrierOption<T>) -> Self {
        Instrument::Barrier(option)
    }
}

impl<T: Float> From<Future<T>> for Instrument<T> {
    fn from(future: Future<T>) -> Self {
        Instrument::Future(future)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn market() -> MarketSnapshot<f64> {
        MarketSnapshot::new(100.0, 0.2, 0.05)
    }

    fn vanilla() -> VanillaOption<f64> {
        let params = InstrumentParams::new(100.0, 1.0, 1.0).unwrap();
        VanillaOption::new(params, OptionType::Call)
    }

    // ========================================================================
    // Dispatch Tests
    // ========================================================================

    #[test]
    fn test_dispatch_matches_inner_price() {
        let option = vanilla();
        let instrument = Instrument::from(option);
        assert_relative_eq!(
            instrument.price(&market()).unwrap(),
            option.price(&market()).unwrap(),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_dispatch_scaling_factor() {
        let future = Future::new(1.0, 10.0, 3.0)
            .unwrap()
            .with_helper_rate(2.0)
            .unwrap();
        assert_eq!(Instrument::from(future).scaling_factor(), 6.0);

        let spot = Spot::new().with_helper_rate(4.0).unwrap();
        assert_eq!(Instrument::from(spot).scaling_factor(), 4.0);
    }

    #[test]
    fn test_barrier_dispatch() {
        let params = InstrumentParams::new(100.0, 1.0, 1.0).unwrap();
        let config =
            BarrierConfig::from_levels(0.0, 0.0, 90.0, 0.0, BarrierDirection::Down).unwrap();
        let instrument = Instrument::from(BarrierOption::new(params, OptionType::Call, config));

        // Down-and-out above the barrier is still the vanilla
        assert_relative_eq!(
            instrument.price(&market()).unwrap(),
            vanilla().price(&market()).unwrap(),
            epsilon = 1e-12
        );
    }

    // ========================================================================
    // Accessor Tests
    // ========================================================================

    #[test]
    fn test_kind_and_predicates() {
        let instrument = Instrument::from(vanilla());
        assert_eq!(instrument.kind(), "vanilla");
        assert!(instrument.is_vanilla());
        assert!(!instrument.is_spot());
        assert!(!instrument.is_barrier());
        assert!(!instrument.is_future());
        assert!(instrument.as_vanilla().is_some());
        assert!(instrument.as_barrier().is_none());
        assert!(instrument.as_future().is_none());
    }

    #[test]
    fn test_expiry_and_helper_rate() {
        let instrument = Instrument::from(vanilla().with_helper_rate(1.5).unwrap());
        assert_eq!(instrument.expiry(), Some(1.0));
        assert_eq!(instrument.helper_rate(), 1.5);
        assert_eq!(Instrument::Spot(Spot::<f64>::new()).kind(), "spot");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_deserialize_rejects_invalid_terms() {
        let document = |strike: f64| {
            format!(
                r#"
                [Vanilla]
                option_type = "Put"
                helper_rate = 1.0

                [Vanilla.params]
                strike = {strike:?}
                expiry = 1.0
                multiplier = 1.0
                "#
            )
        };

        let instrument: Instrument<f64> = toml::from_str(&document(100.0)).unwrap();
        assert!(instrument.is_vanilla());
        assert!(toml::from_str::<Instrument<f64>>(&document(-100.0)).is_err());
    }
}
