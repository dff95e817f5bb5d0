//! # Pricer Models (L2: Business Logic)
//!
//! Instrument definitions and the analytical pricers behind them.
//!
//! This crate provides:
//! - Normal distribution primitives
//! - The generalised Black-Scholes pricer and its Greeks
//! - Barrier option resolution (limit, knock-in, knock-out and combinations)
//! - Instrument definitions (spot, vanilla, barrier, future)
//!
//! ## Design Principles
//!
//! - **Enum-based instruments** for static dispatch
//! - **Market passed explicitly** so any instrument reprices under any snapshot
//! - **Builder pattern** for optional terms with sensible defaults
//!
//! ## Example
//!
//! ```
//! use pricer_core::market_data::MarketSnapshot;
//! use pricer_core::traits::priceable::Priceable;
//! use pricer_models::instruments::{
//!     BarrierConfig, BarrierDirection, BarrierOption, Instrument, InstrumentParams, OptionType,
//! };
//!
//! let params = InstrumentParams::new(100.0_f64, 0.5, 1.0).unwrap();
//! let config = BarrierConfig::from_levels(0.0, 95.0, 0.0, 1.0, BarrierDirection::Down).unwrap();
//! let option = Instrument::from(BarrierOption::new(params, OptionType::Put, config));
//!
//! // Down-and-in not yet triggered: worth the discounted rebate
//! let price = option.price(&MarketSnapshot::new(100.0, 0.25, 0.04)).unwrap();
//! assert!((price - (-0.02_f64).exp()).abs() < 1e-12);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
