//! # Pricer Risk (L4: Application)
//!
//! Period-over-period market risk for books of instruments.
//!
//! This crate provides:
//! - The bump-and-reprice risk protocol (`pnl`): a pure `market_risk`
//!   function and a stateful `Position` with an explicit commit
//! - Books of positions with rayon-parallel risk runs (`portfolio`)
//! - Scenario revaluation and preset stresses (`scenarios`)
//! - An f32 batch pricing front end (`parallel::batch`)
//! - Configuration loading (`config`) and tracing setup (`telemetry`)
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            pricer_risk (L4)             │
//! ├─────────────────────────────────────────┤
//! │  pnl/        - market_risk, Position    │
//! │  portfolio/  - Book, PositionId         │
//! │  scenarios/  - Scenario, revalue        │
//! │  parallel/   - Rayon utilities, batch   │
//! │  config/     - RiskConfig (TOML + env)  │
//! └─────────────────────────────────────────┘
//!          ↓
//! ┌─────────────────────────────────────────┐
//! │           pricer_models (L2)            │
//! │  Black-Scholes, barriers, instruments   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use pricer_core::market_data::MarketSnapshot;
//! use pricer_models::instruments::{Future, Instrument, InstrumentParams, OptionType, VanillaOption};
//! use pricer_risk::pnl::Position;
//! use pricer_risk::portfolio::{Book, PositionId};
//!
//! let market = MarketSnapshot::new(100.0_f64, 0.2, 0.05);
//! let params = InstrumentParams::new(100.0, 0.5, 100.0).unwrap();
//!
//! let mut book = Book::new();
//! book.insert("call", Position::new(Instrument::from(VanillaOption::new(params, OptionType::Call)), market)).unwrap();
//! book.insert("future", Position::new(Instrument::from(Future::new(0.5, 10.0, 5.0).unwrap()), market)).unwrap();
//!
//! // Nothing moved yet
//! assert_eq!(book.risk_all().total(), 0.0);
//!
//! let mut rally = market;
//! rally.set_spot(103.0);
//! book.update_market(&PositionId::new("call"), rally).unwrap();
//! book.update_market(&PositionId::new("future"), rally).unwrap();
//!
//! let risk = book.risk_all();
//! assert!(risk.is_complete());
//! assert!(risk.total() > 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod config;
pub mod parallel;
pub mod pnl;
pub mod portfolio;
pub mod scenarios;
pub mod telemetry;

// Re-export commonly used types
pub use config::{ConfigError, LogLevel, RiskConfig};
pub use parallel::{ParallelConfig, DEFAULT_BATCH_SIZE};
pub use pnl::{market_risk, Position};
pub use portfolio::{Book, BookRisk, PortfolioError, PositionId};
pub use scenarios::{revalue, Scenario, ScenarioPnL};
pub use telemetry::init_tracing;
