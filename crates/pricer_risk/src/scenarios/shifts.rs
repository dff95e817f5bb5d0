//! Market shifts and named scenarios.
//!
//! Provides infrastructure for defining market data shocks:
//! - `MarketShift`: One shift applied to one snapshot field
//! - `Scenario`: Named, ordered collection of shifts

use pricer_core::market_data::MarketSnapshot;
use pricer_core::traits::risk::{RiskFactorType, ShiftType};
use pricer_core::traits::Float;

/// Shift of a single market factor.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MarketShift<T: Float> {
    factor: RiskFactorType,
    shift: ShiftType<T>,
}

impl<T: Float> MarketShift<T> {
    /// Create a new market shift.
    pub fn new(factor: RiskFactorType, shift: ShiftType<T>) -> Self {
        Self { factor, shift }
    }

    /// Relative spot move, e.g. `-0.1` for a 10% fall.
    pub fn spot_relative(percentage: T) -> Self {
        Self::new(RiskFactorType::Spot, ShiftType::Relative(percentage))
    }

    /// Absolute volatility move, e.g. `0.05` for +5 vol points.
    pub fn volatility_shift(amount: T) -> Self {
        Self::new(RiskFactorType::Volatility, ShiftType::Absolute(amount))
    }

    /// Parallel move of the domestic rate (carry unchanged).
    pub fn rate_parallel(amount: T) -> Self {
        Self::new(RiskFactorType::InterestRate, ShiftType::Absolute(amount))
    }

    /// Parallel move of the cost of carry.
    pub fn carry_parallel(amount: T) -> Self {
        Self::new(RiskFactorType::CostOfCarry, ShiftType::Absolute(amount))
    }

    /// Get the factor type.
    pub fn factor_type(&self) -> RiskFactorType {
        self.factor
    }

    /// Get the shift.
    pub fn shift(&self) -> &ShiftType<T> {
        &self.shift
    }

    /// Returns `market` with this shift applied.
    pub fn apply(&self, market: &MarketSnapshot<T>) -> MarketSnapshot<T> {
        market.shifted(self.factor, self.shift)
    }
}

/// A named scenario: shifts applied in order to a base snapshot.
///
/// # Examples
/// ```
/// use pricer_core::market_data::MarketSnapshot;
/// use pricer_risk::scenarios::{MarketShift, Scenario};
///
/// let crash = Scenario::named("Crash")
///     .with_shift(MarketShift::spot_relative(-0.2_f64))
///     .with_shift(MarketShift::volatility_shift(0.1));
///
/// let stressed = crash.apply(&MarketSnapshot::new(100.0, 0.2, 0.05));
/// assert!((stressed.spot() - 80.0).abs() < 1e-12);
/// assert!((stressed.volatility() - 0.3).abs() < 1e-12);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Scenario<T: Float> {
    name: String,
    description: String,
    shifts: Vec<MarketShift<T>>,
}

impl<T: Float> Scenario<T> {
    /// Create a new scenario with no shifts.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            shifts: Vec::new(),
        }
    }

    /// Create a scenario whose description is its name.
    pub fn named(name: impl Into<String>) -> Self {
        let name_str = name.into();
        Self::new(name_str.clone(), name_str)
    }

    /// Add a shift to the scenario.
    pub fn with_shift(mut self, shift: MarketShift<T>) -> Self {
        self.shifts.push(shift);
        self
    }

    /// Add multiple shifts.
    pub fn with_shifts(mut self, shifts: impl IntoIterator<Item = MarketShift<T>>) -> Self {
        self.shifts.extend(shifts);
        self
    }

    /// Get scenario name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get scenario description.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Get all shifts.
    pub fn shifts(&self) -> &[MarketShift<T>] {
        &self.shifts
    }

    /// Check if the scenario has any shift for a given factor type.
    pub fn has_shifts_for(&self, factor: RiskFactorType) -> bool {
        self.shifts.iter().any(|s| s.factor == factor)
    }

    /// Returns `market` with every shift applied in order.
    pub fn apply(&self, market: &MarketSnapshot<T>) -> MarketSnapshot<T> {
        self.shifts
            .iter()
            .fold(*market, |acc, shift| shift.apply(&acc))
    }
}
