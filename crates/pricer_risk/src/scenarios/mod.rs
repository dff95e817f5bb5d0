//! Scenario analysis.
//!
//! This module provides infrastructure for:
//! - Market shifts on snapshot fields (spot, volatility, rate, carry)
//! - Named scenarios and preset stresses
//! - Revaluation of instruments and books under a scenario
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │              Scenario Engine                 │
//! ├──────────────────────────────────────────────┤
//! │  MarketShift      - One factor shift         │
//! │  Scenario         - Named set of shifts      │
//! │  revalue          - Stressed vs base P&L     │
//! │  ScenarioEngine   - Runs scenarios on books  │
//! └──────────────────────────────────────────────┘
//! ```

mod engine;
mod presets;
mod shifts;

pub use engine::{revalue, revalue_book, ScenarioEngine, ScenarioPnL, ScenarioResult};
pub use presets::PresetScenarioType;
pub use shifts::{MarketShift, Scenario};
