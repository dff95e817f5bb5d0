//! Book error types.
//!
//! This module provides structured error types for book operations
//! using `thiserror` for derivation.

use pricer_core::types::PricingError;
use thiserror::Error;

/// Errors that can occur during book operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PortfolioError {
    /// Position not found in the book.
    #[error("Position not found: {0}")]
    PositionNotFound(String),

    /// Duplicate position ID encountered.
    #[error("Duplicate position ID: {0}")]
    DuplicatePosition(String),

    /// Pricing a specific position failed.
    #[error("Pricing failed for position {id}: {source}")]
    Pricing {
        /// Position that failed
        id: String,
        /// Underlying pricing error
        #[source]
        source: PricingError,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display_position_not_found() {
        let err = PortfolioError::PositionNotFound("P001".to_string());
        assert_eq!(format!("{}", err), "Position not found: P001");
    }

    #[test]
    fn test_error_display_duplicate_position() {
        let err = PortfolioError::DuplicatePosition("P001".to_string());
        assert_eq!(format!("{}", err), "Duplicate position ID: P001");
    }

    #[test]
    fn test_error_display_pricing() {
        let err = PortfolioError::Pricing {
            id: "P001".to_string(),
            source: PricingError::InvalidInput("Invalid volatility".to_string()),
        };
        assert_eq!(
            format!("{}", err),
            "Pricing failed for position P001: Invalid input: Invalid volatility"
        );
    }

    #[test]
    fn test_error_source_chain() {
        use std::error::Error as _;
        let err = PortfolioError::Pricing {
            id: "P001".to_string(),
            source: PricingError::InvalidInput("x".to_string()),
        };
        assert!(err.source().is_some());
    }
}
