//! Period-over-period market risk.
//!
//! Market risk is the P&L explained by moving an instrument's market from
//! the previous snapshot to the current one, holding the contract fixed:
//!
//! ```text
//! risk = (price(current) - price(previous)) × scaling_factor
//! ```
//!
//! [`market_risk`] is the pure form. [`Position`] owns both snapshots and
//! splits the stateful query into [`Position::measure_risk`] (pure) and
//! [`Position::commit`] (previous := current).

use pricer_core::market_data::MarketSnapshot;
use pricer_core::traits::priceable::Priceable;
use pricer_core::traits::Float;
use pricer_core::types::PricingError;
use pricer_models::instruments::Instrument;
use tracing::{debug, trace};

/// Bump-and-reprice P&L between two market snapshots.
///
/// # Errors
/// Propagates the first pricing failure (current market first).
///
/// # Examples
/// ```
/// use pricer_core::market_data::MarketSnapshot;
/// use pricer_models::instruments::Spot;
/// use pricer_risk::pnl::market_risk;
///
/// let usd_stock = Spot::new().with_helper_rate(5.0_f64).unwrap();
/// let yesterday = MarketSnapshot::new(20.0, 0.3, 0.05);
/// let today = MarketSnapshot::new(21.0, 0.3, 0.05);
///
/// assert_eq!(market_risk(&usd_stock, &today, &yesterday).unwrap(), 5.0);
/// ```
pub fn market_risk<T, P>(
    instrument: &P,
    current: &MarketSnapshot<T>,
    previous: &MarketSnapshot<T>,
) -> Result<T, PricingError>
where
    T: Float,
    P: Priceable<T>,
{
    let now = instrument.price(current)?;
    let before = instrument.price(previous)?;
    Ok((now - before) * instrument.scaling_factor())
}

/// An instrument together with its current and previous market.
///
/// A new position starts with both snapshots equal, so the first risk
/// query returns zero. Market setters touch only the current snapshot.
///
/// # Examples
/// ```
/// use pricer_core::market_data::MarketSnapshot;
/// use pricer_models::instruments::{Instrument, InstrumentParams, OptionType, VanillaOption};
/// use pricer_risk::pnl::Position;
///
/// let params = InstrumentParams::new(100.0_f64, 1.0, 1.0).unwrap();
/// let call = Instrument::from(VanillaOption::new(params, OptionType::Call));
/// let mut position = Position::new(call, MarketSnapshot::new(100.0, 0.2, 0.05));
///
/// assert_eq!(position.risk().unwrap(), 0.0);
///
/// position.set_spot(105.0);
/// assert!(position.risk().unwrap() > 0.0);
///
/// // Already committed: nothing moved since
/// assert_eq!(position.risk().unwrap(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Position<T: Float, P = Instrument<T>> {
    instrument: P,
    current: MarketSnapshot<T>,
    previous: MarketSnapshot<T>,
}

impl<T: Float, P: Priceable<T>> Position<T, P> {
    /// Opens a position; the previous snapshot starts equal to `market`.
    pub fn new(instrument: P, market: MarketSnapshot<T>) -> Self {
        Self {
            instrument,
            current: market,
            previous: market,
        }
    }

    /// Returns a reference to the instrument.
    #[inline]
    pub fn instrument(&self) -> &P {
        &self.instrument
    }

    /// Returns the current market snapshot.
    #[inline]
    pub fn market(&self) -> &MarketSnapshot<T> {
        &self.current
    }

    /// Returns the previous market snapshot.
    #[inline]
    pub fn previous(&self) -> &MarketSnapshot<T> {
        &self.previous
    }

    /// Replaces the current market snapshot.
    pub fn update_market(&mut self, market: MarketSnapshot<T>) {
        self.current = market;
    }

    /// Sets the current spot.
    pub fn set_spot(&mut self, spot: T) {
        self.current.set_spot(spot);
    }

    /// Sets the current volatility.
    pub fn set_volatility(&mut self, volatility: T) {
        self.current.set_volatility(volatility);
    }

    /// Sets the current domestic rate (carry unchanged).
    pub fn set_rate(&mut self, rate: T) {
        self.current.set_rate(rate);
    }

    /// Sets the current cost of carry.
    pub fn set_carry(&mut self, carry: T) {
        self.current.set_carry(carry);
    }

    /// Overrides the previous snapshot, e.g. to restore yesterday's close.
    pub fn set_previous(&mut self, previous: MarketSnapshot<T>) {
        self.previous = previous;
    }

    /// Price under the current market.
    pub fn price(&self) -> Result<T, PricingError> {
        self.instrument.price(&self.current)
    }

    /// Risk between the two owned snapshots, without advancing.
    pub fn measure_risk(&self) -> Result<T, PricingError> {
        let risk = market_risk(&self.instrument, &self.current, &self.previous)?;
        trace!(risk = risk.to_f64().unwrap_or(f64::NAN), "risk measured");
        Ok(risk)
    }

    /// Advances the previous snapshot to the current one.
    pub fn commit(&mut self) {
        debug!(
            spot = self.current.spot().to_f64().unwrap_or(f64::NAN),
            "previous snapshot advanced"
        );
        self.previous = self.current;
    }

    /// Measures risk, then commits.
    ///
    /// On error neither snapshot changes.
    pub fn risk(&mut self) -> Result<T, PricingError> {
        let risk = self.measure_risk()?;
        self.commit();
        Ok(risk)
    }
}
