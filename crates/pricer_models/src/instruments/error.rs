//! Instrument error types.
//!
//! This module provides structured error handling for instrument
//! construction: contract terms and barrier configurations.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Instrument-related errors.
///
/// # Variants
/// - `InvalidStrike`: Strike price is non-positive
/// - `InvalidExpiry`: Time to maturity is non-positive
/// - `InvalidMultiplier`: Contract multiplier is non-positive
/// - `InvalidHelperRate`: FX helper scaling rate is non-positive
/// - `InvalidContracts`: Number of future contracts is non-positive
/// - `InvalidYield`: Futures carry yield is non-finite
/// - `InvalidBarrierConfiguration`: Barrier levels, rebate or direction rejected
///
/// # Examples
/// ```
/// use pricer_models::instruments::InstrumentError;
///
/// let err = InstrumentError::InvalidStrike { strike: -100.0 };
/// assert!(format!("{}", err).contains("-100"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InstrumentError {
    /// Invalid strike price (non-positive).
    #[error("Invalid strike: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid time to maturity (non-positive).
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },

    /// Invalid contract multiplier (non-positive).
    #[error("Invalid multiplier: M = {multiplier}")]
    InvalidMultiplier {
        /// The invalid multiplier value
        multiplier: f64,
    },

    /// Invalid FX helper scaling rate (non-positive).
    #[error("Invalid helper rate: H = {helper_rate}")]
    InvalidHelperRate {
        /// The invalid helper rate value
        helper_rate: f64,
    },

    /// Invalid number of contracts (non-positive).
    #[error("Invalid number of contracts: N = {contracts}")]
    InvalidContracts {
        /// The invalid contract count
        contracts: f64,
    },

    /// Invalid futures carry yield (non-finite).
    #[error("Invalid carry yield: q = {yield_rate}")]
    InvalidYield {
        /// The invalid yield value
        yield_rate: f64,
    },

    /// Barrier configuration rejected at construction.
    #[error("Invalid barrier configuration: {message}")]
    InvalidBarrierConfiguration {
        /// Description of the configuration error
        message: String,
    },
}

impl InstrumentError {
    pub(crate) fn barrier(message: impl Into<String>) -> Self {
        InstrumentError::InvalidBarrierConfiguration {
            message: message.into(),
        }
    }
}

impl From<InstrumentError> for PricingError {
    fn from(err: InstrumentError) -> Self {
        match err {
            InstrumentError::InvalidBarrierConfiguration { .. } => {
                PricingError::InvalidConfiguration(err.to_string())
            }
            _ => PricingError::InvalidInput(err.to_string()),
        }
    }
}
