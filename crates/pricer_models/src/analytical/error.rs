//! Error types for analytical pricing operations.
//!
//! This module provides:
//! - `AnalyticalError`: Out-of-domain inputs rejected by the closed-form pricers

use pricer_core::types::PricingError;
use thiserror::Error;

/// Analytical pricing errors.
///
/// Every variant describes an input outside the domain of the closed-form
/// formulas. The pricers check these at price time so a NaN never leaks out
/// of a bad spot, strike, volatility or maturity.
///
/// # Examples
/// ```
/// use pricer_models::analytical::AnalyticalError;
///
/// let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
/// assert!(format!("{}", err).contains("volatility"));
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum AnalyticalError {
    /// Invalid spot price (non-positive).
    #[error("Invalid spot price: S = {spot}")]
    InvalidSpot {
        /// The invalid spot price value
        spot: f64,
    },

    /// Invalid strike price (non-positive).
    #[error("Invalid strike price: K = {strike}")]
    InvalidStrike {
        /// The invalid strike value
        strike: f64,
    },

    /// Invalid volatility (non-positive).
    #[error("Invalid volatility: σ = {volatility}")]
    InvalidVolatility {
        /// The invalid volatility value
        volatility: f64,
    },

    /// Invalid time to maturity (non-positive).
    #[error("Invalid expiry: T = {expiry}")]
    InvalidExpiry {
        /// The invalid expiry value
        expiry: f64,
    },

    /// A NaN or infinite input.
    #[error("Non-finite input: {name}")]
    NonFiniteInput {
        /// Name of the offending input
        name: &'static str,
    },
}

impl From<AnalyticalError> for PricingError {
    fn from(err: AnalyticalError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_volatility_display() {
        let err = AnalyticalError::InvalidVolatility { volatility: -0.2 };
        assert_eq!(format!("{}", err), "Invalid volatility: σ = -0.2");
    }

    #[test]
    fn test_invalid_spot_display() {
        let err = AnalyticalError::InvalidSpot { spot: -100.0 };
        assert_eq!(format!("{}", err), "Invalid spot price: S = -100");
    }

    #[test]
    fn test_invalid_strike_and_expiry_display() {
        let err = AnalyticalError::InvalidStrike { strike: 0.0 };
        assert_eq!(format!("{}", err), "Invalid strike price: K = 0");

        let err = AnalyticalError::InvalidExpiry { expiry: -1.0 };
        assert_eq!(format!("{}", err), "Invalid expiry: T = -1");
    }

    #[test]
    fn test_non_finite_display() {
        let err = AnalyticalError::NonFiniteInput { name: "rate" };
        assert_eq!(format!("{}", err), "Non-finite input: rate");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = AnalyticalError::InvalidVolatility { volatility: 0.0 };
        let _: &dyn std::error::Error = &err;
    }

    // ==========================================================
    // From<AnalyticalError> for PricingError tests
    // ==========================================================

    #[test]
    fn test_every_variant_is_a_domain_error() {
        let errors = [
            AnalyticalError::InvalidSpot { spot: -1.0 },
            AnalyticalError::InvalidStrike { strike: 0.0 },
            AnalyticalError::InvalidVolatility { volatility: 0.0 },
            AnalyticalError::InvalidExpiry { expiry: 0.0 },
            AnalyticalError::NonFiniteInput { name: "spot" },
        ];
        for err in errors {
            let pricing_err: PricingError = err.into();
            assert!(pricing_err.is_domain_error());
        }
    }

    #[test]
    fn test_message_is_preserved() {
        let pricing_err: PricingError = AnalyticalError::InvalidSpot { spot: -50.0 }.into();
        match pricing_err {
            PricingError::InvalidInput(msg) => assert!(msg.contains("spot")),
            _ => panic!("Expected InvalidInput variant"),
        }
    }
}
