//! # pricer_core: Foundation for the Carry-Risk Pricing Workspace
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Market snapshots: `MarketSnapshot` (`market_data`)
//! - Traits for pricing and risk factors (`traits`)
//! - Day-count conventions: `DayCountConvention` (`types::time`)
//! - Error types: `PricingError`, `DayCountError` (`types::error`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other pricer_* crates, with minimal external dependencies:
//! - num-traits: Traits for generic numerical computation
//! - chrono: Date arithmetic for day counts
//! - thiserror: Error derives
//! - serde: Serialisation support (optional)
//!
//! ## Usage Examples
//!
//! ```rust
//! use chrono::NaiveDate;
//! use pricer_core::market_data::MarketSnapshot;
//! use pricer_core::traits::risk::{RiskFactorType, ShiftType};
//! use pricer_core::types::DayCountConvention;
//!
//! let trade = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let expiry = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
//! let tau = DayCountConvention::Actual360.year_fraction(trade, expiry).unwrap();
//! assert!((tau - 182.0 / 360.0).abs() < 1e-12);
//!
//! let market = MarketSnapshot::new(100.0_f64, 0.2, 0.05);
//! let stressed = market.shifted(RiskFactorType::Volatility, ShiftType::absolute(0.05));
//! assert!((stressed.volatility() - 0.25).abs() < 1e-12);
//! ```
//!
//! ## Feature Flags
//!
//! - `serde`: Enable serialisation for snapshots, risk factors and day-count conventions

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod market_data;
pub mod traits;
pub mod types;
