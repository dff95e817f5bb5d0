//! Core time and error types.
//!
//! This module provides:
//! - `time`: Day-count conventions for year-fraction calculations
//! - `error`: Structured error types for pricing and day-count operations
//!
//! # Re-exports
//!
//! - [`DayCountConvention`] from `time`
//! - [`PricingError`], [`DayCountError`] from `error`

pub mod error;
pub mod time;

pub use error::{DayCountError, PricingError};
pub use time::DayCountConvention;
