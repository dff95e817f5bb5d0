//! Preset scenarios for common stress tests.
//!
//! Provides ready-to-use scenarios for typical risk analysis:
//! - Spot shocks (±10%, -20%)
//! - Volatility shocks (±5 vol points)
//! - Parallel rate shifts (±100bp)

use super::shifts::{MarketShift, Scenario};
use pricer_core::traits::Float;

/// Types of preset scenarios.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PresetScenarioType {
    /// Spot +10%
    SpotUp10Pct,
    /// Spot -10%
    SpotDown10Pct,
    /// Spot -20%
    SpotDown20Pct,
    /// Volatility +5 points
    VolUp5Pts,
    /// Volatility -5 points
    VolDown5Pts,
    /// Domestic rate +100bp
    RateUp100bp,
    /// Domestic rate -100bp
    RateDown100bp,
}

impl PresetScenarioType {
    /// Every preset.
    pub const ALL: [PresetScenarioType; 7] = [
        Self::SpotUp10Pct,
        Self::SpotDown10Pct,
        Self::SpotDown20Pct,
        Self::VolUp5Pts,
        Self::VolDown5Pts,
        Self::RateUp100bp,
        Self::RateDown100bp,
    ];

    /// Get the standard stress set.
    pub fn stress_scenarios() -> Vec<Self> {
        vec![Self::SpotDown20Pct, Self::VolUp5Pts, Self::RateUp100bp]
    }

    /// Get human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SpotUp10Pct => "Spot +10%",
            Self::SpotDown10Pct => "Spot -10%",
            Self::SpotDown20Pct => "Spot -20%",
            Self::VolUp5Pts => "Vol +5pts",
            Self::VolDown5Pts => "Vol -5pts",
            Self::RateUp100bp => "Rate +100bp",
            Self::RateDown100bp => "Rate -100bp",
        }
    }

    /// Builds the scenario.
    pub fn scenario<T: Float>(&self) -> Scenario<T> {
        let c = |x: f64| T::from(x).unwrap();
        let shift = match self {
            Self::SpotUp10Pct => MarketShift::spot_relative(c(0.10)),
            Self::SpotDown10Pct => MarketShift::spot_relative(c(-0.10)),
            Self::SpotDown20Pct => MarketShift::spot_relative(c(-0.20)),
            Self::VolUp5Pts => MarketShift::volatility_shift(c(0.05)),
            Self::VolDown5Pts => MarketShift::volatility_shift(c(-0.05)),
            Self::RateUp100bp => MarketShift::rate_parallel(c(0.01)),
            Self::RateDown100bp => MarketShift::rate_parallel(c(-0.01)),
        };
        Scenario::named(self.name()).with_shift(shift)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pricer_core::market_data::MarketSnapshot;

    #[test]
    fn test_all_presets_have_one_shift() {
        for preset in PresetScenarioType::ALL {
            let scenario = preset.scenario::<f64>();
            assert_eq!(scenario.name(), preset.name());
            assert_eq!(scenario.shifts().len(), 1);
        }
    }

    #[test]
    fn test_spot_down_20() {
        let market = MarketSnapshot::new(50.0_f64, 0.2, 0.05);
        let stressed = PresetScenarioType::SpotDown20Pct.scenario().apply(&market);
        assert_relative_eq!(stressed.spot(), 40.0, epsilon = 1e-12);
    }

    #[test]
    fn test_stress_set() {
        let stresses = PresetScenarioType::stress_scenarios();
        assert_eq!(stresses.len(), 3);
        assert!(stresses.contains(&PresetScenarioType::VolUp5Pts));
    }
}
