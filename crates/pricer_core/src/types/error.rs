//! Error types for structured error handling.
//!
//! This module provides:
//! - `PricingError`: Umbrella error for every pricing and risk operation
//! - `DayCountError`: Errors from day-count year-fraction calculations

use std::fmt;
use thiserror::Error;

/// Categorised pricing errors.
///
/// Every crate-specific error in the workspace converts into this type, so
/// callers that only care about "did the computation succeed" can work with
/// a single error.
///
/// # Variants
/// - `InvalidInput`: Market data or contract terms outside the model domain
/// - `InvalidConfiguration`: Statically invalid instrument configuration
/// - `NumericalInstability`: Computation produced a non-finite value
/// - `UnsupportedInstrument`: Instrument type not supported by the pricer
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PricingError {
    /// Invalid input data or parameters
    InvalidInput(String),

    /// Instrument configuration rejected at construction
    InvalidConfiguration(String),

    /// Numerical instability during computation
    NumericalInstability(String),

    /// Instrument type not supported
    UnsupportedInstrument(String),
}

impl PricingError {
    /// Returns true if the error was caused by out-of-domain inputs.
    #[inline]
    pub fn is_domain_error(&self) -> bool {
        matches!(self, PricingError::InvalidInput(_))
    }

    /// Returns true if the error was caused by an invalid configuration.
    #[inline]
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, PricingError::InvalidConfiguration(_))
    }
}

impl fmt::Display for PricingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PricingError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            PricingError::InvalidConfiguration(msg) => {
                write!(f, "Invalid configuration: {}", msg)
            }
            PricingError::NumericalInstability(msg) => {
                write!(f, "Numerical instability: {}", msg)
            }
            PricingError::UnsupportedInstrument(msg) => {
                write!(f, "Unsupported instrument: {}", msg)
            }
        }
    }
}

impl std::error::Error for PricingError {}

/// Day-count errors.
///
/// # Examples
/// ```
/// use pricer_core::types::DayCountError;
///
/// let err = DayCountError::NegativePeriod { days: -3 };
/// assert_eq!(format!("{}", err), "Negative accrual period: -3 days");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DayCountError {
    /// End date precedes start date.
    #[error("Negative accrual period: {days} days")]
    NegativePeriod {
        /// Signed day count between the two dates
        days: i64,
    },
}

impl From<DayCountError> for PricingError {
    fn from(err: DayCountError) -> Self {
        PricingError::InvalidInput(err.to_string())
    }
}
