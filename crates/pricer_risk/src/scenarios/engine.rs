//! Scenario revaluation.
//!
//! Reprices instruments under a stressed copy of their current market and
//! reports the P&L against the unstressed value. Values are price ×
//! scaling factor, so a scenario P&L is directly comparable to a
//! period risk figure.

use super::shifts::Scenario;
use crate::portfolio::{Book, PortfolioError, PositionId};
use pricer_core::market_data::MarketSnapshot;
use pricer_core::traits::priceable::Priceable;
use pricer_core::traits::Float;
use pricer_core::types::PricingError;
use tracing::debug;

/// P&L result from a single scenario.
#[derive(Clone, Debug, PartialEq)]
pub struct ScenarioPnL<T: Float> {
    /// Scenario name
    pub scenario_name: String,
    /// Base value before scenario
    pub base_value: T,
    /// Stressed value after scenario
    pub stressed_value: T,
    /// P&L (stressed - base)
    pub pnl: T,
    /// P&L as percentage of base
    pub pnl_pct: T,
}

impl<T: Float> ScenarioPnL<T> {
    /// Create a new scenario P&L result.
    pub fn new(scenario_name: impl Into<String>, base_value: T, stressed_value: T) -> Self {
        let pnl = stressed_value - base_value;
        let pnl_pct = if base_value != T::zero() {
            pnl / base_value.abs()
        } else {
            T::zero()
        };
        Self {
            scenario_name: scenario_name.into(),
            base_value,
            stressed_value,
            pnl,
            pnl_pct,
        }
    }

    /// Check if P&L is a loss (negative).
    pub fn is_loss(&self) -> bool {
        self.pnl < T::zero()
    }

    /// Check if P&L is a gain (positive).
    pub fn is_gain(&self) -> bool {
        self.pnl > T::zero()
    }
}

/// Result of one scenario over a whole book.
#[derive(Clone, Debug, PartialEq)]
pub struct ScenarioResult<T: Float> {
    /// Scenario that was executed
    pub scenario_name: String,
    /// P&L by position, in book order
    pub position_pnls: Vec<(PositionId, ScenarioPnL<T>)>,
    /// Book-level P&L
    pub book_pnl: ScenarioPnL<T>,
}

impl<T: Float> ScenarioResult<T> {
    /// Get position count.
    pub fn position_count(&self) -> usize {
        self.position_pnls.len()
    }

    /// Get worst position P&L.
    pub fn worst_position_pnl(&self) -> Option<&(PositionId, ScenarioPnL<T>)> {
        self.position_pnls.iter().min_by(|a, b| {
            a.1.pnl
                .partial_cmp(&b.1.pnl)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    }
}

/// Revalues one instrument under `scenario` applied to `market`.
///
/// # Examples
/// ```
/// use pricer_core::market_data::MarketSnapshot;
/// use pricer_models::instruments::Spot;
/// use pricer_risk::scenarios::{revalue, MarketShift, Scenario};
///
/// let crash = Scenario::named("Crash").with_shift(MarketShift::spot_relative(-0.1_f64));
/// let pnl = revalue(&Spot::new(), &MarketSnapshot::new(40.0, 0.3, 0.1), &crash).unwrap();
/// assert!((pnl.pnl + 4.0).abs() < 1e-12);
/// ```
pub fn revalue<T, P>(
    instrument: &P,
    market: &MarketSnapshot<T>,
    scenario: &Scenario<T>,
) -> Result<ScenarioPnL<T>, PricingError>
where
    T: Float,
    P: Priceable<T>,
{
    let scale = instrument.scaling_factor();
    let base = instrument.price(market)? * scale;
    let stressed = instrument.price(&scenario.apply(market))? * scale;
    Ok(ScenarioPnL::new(scenario.name(), base, stressed))
}

/// Revalues every position of `book` under its own current market.
///
/// # Errors
/// `PortfolioError::Pricing` for the first position that fails.
pub fn revalue_book<T: Float>(
    book: &Book<T>,
    scenario: &Scenario<T>,
) -> Result<ScenarioResult<T>, PortfolioError> {
    let mut position_pnls = Vec::with_capacity(book.len());
    let mut base = T::zero();
    let mut stressed = T::zero();

    for (id, position) in book.iter() {
        let pnl = revalue(position.instrument(), position.market(), scenario).map_err(
            |source| PortfolioError::Pricing {
                id: id.to_string(),
                source,
            },
        )?;
        base = base + pnl.base_value;
        stressed = stressed + pnl.stressed_value;
        position_pnls.push((id.clone(), pnl));
    }

    let book_pnl = ScenarioPnL::new(scenario.name(), base, stressed);
    debug!(
        scenario = scenario.name(),
        pnl = book_pnl.pnl.to_f64().unwrap_or(f64::NAN),
        "scenario revalued"
    );
    Ok(ScenarioResult {
        scenario_name: scenario.name().to_string(),
        position_pnls,
        book_pnl,
    })
}

/// Runs a set of scenarios against books and keeps the results.
#[derive(Clone, Debug)]
pub struct ScenarioEngine<T: Float> {
    scenarios: Vec<Scenario<T>>,
    results: Vec<ScenarioResult<T>>,
}

impl<T: Float> Default for ScenarioEngine<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> ScenarioEngine<T> {
    /// Create a new scenario engine.
    pub fn new() -> Self {
        Self {
            scenarios: Vec::new(),
            results: Vec::new(),
        }
    }

    /// Add a scenario.
    pub fn add_scenario(&mut self, scenario: Scenario<T>) {
        self.scenarios.push(scenario);
    }

    /// Add multiple scenarios.
    pub fn add_scenarios(&mut self, scenarios: impl IntoIterator<Item = Scenario<T>>) {
        self.scenarios.extend(scenarios);
    }

    /// Get registered scenarios.
    pub fn scenarios(&self) -> &[Scenario<T>] {
        &self.scenarios
    }

    /// Get scenario count.
    pub fn scenario_count(&self) -> usize {
        self.scenarios.len()
    }

    /// Revalues `book` under every registered scenario.
    ///
    /// Results replace those of any previous run.
    pub fn run(&mut self, book: &Book<T>) -> Result<&[ScenarioResult<T>], PortfolioError> {
        let results = self
            .scenarios
            .iter()
            .map(|scenario| revalue_book(book, scenario))
            .collect::<Result<Vec<_>, _>>()?;
        self.results = results;
        Ok(&self.results)
    }

    /// Get all results.
    pub fn results(&self) -> &[ScenarioResult<T>] {
        &self.results
    }

    /// Get the worst-case scenario (largest loss).
    pub fn worst_case(&self) -> Option<&ScenarioResult<T>> {
        self.results.iter().min_by(|a, b| {
            a.book_pnl
                .pnl
                .partial_cmp(&b.book_pnl.pnl)
                .unwrap_or(std::cmp::Ordering::Equal)
        })
    }

    /// Clear scenarios and results.
    pub fn clear(&mut self) {
        self.scenarios.clear();
        self.results.clear();
    }
}
