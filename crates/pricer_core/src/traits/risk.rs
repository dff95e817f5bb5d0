//! Risk factor types and shifts for bump-and-reprice analysis.
//!
//! This module provides the core abstractions for perturbing market inputs:
//! - `RiskFactorType`: The market-dependent fields an instrument is repriced on
//! - `ShiftType`: How a factor is moved (absolute or relative)
//!
//! ## Example
//!
//! ```rust
//! use pricer_core::traits::risk::{RiskFactorType, ShiftType};
//!
//! let factor = RiskFactorType::InterestRate;
//! assert!(factor.affects_discounting());
//!
//! let shift = ShiftType::absolute(0.0001_f64); // 1bp
//! assert!((shift.apply(0.05) - 0.0501).abs() < 1e-12);
//! ```

use super::Float;

/// Classification of the market-dependent fields of an instrument.
///
/// Each variant names exactly one field of a
/// [`MarketSnapshot`](crate::market_data::MarketSnapshot).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RiskFactorType {
    /// Spot price of the underlying (S)
    Spot,
    /// Volatility of the underlying (σ)
    Volatility,
    /// Domestic risk-free rate (r)
    InterestRate,
    /// Cost of carry (b)
    CostOfCarry,
}

impl RiskFactorType {
    /// All factor types in snapshot field order.
    pub const ALL: [RiskFactorType; 4] = [
        RiskFactorType::Spot,
        RiskFactorType::Volatility,
        RiskFactorType::InterestRate,
        RiskFactorType::CostOfCarry,
    ];

    /// Returns true if this factor type enters discount factors.
    #[inline]
    pub fn affects_discounting(&self) -> bool {
        matches!(self, RiskFactorType::InterestRate)
    }

    /// Returns true if this is a price factor.
    #[inline]
    pub fn is_price_factor(&self) -> bool {
        matches!(self, RiskFactorType::Spot)
    }

    /// Returns true if the factor must stay strictly positive after a shift.
    #[inline]
    pub fn requires_positive(&self) -> bool {
        matches!(self, RiskFactorType::Spot | RiskFactorType::Volatility)
    }

    /// Get the name of this factor type.
    pub fn name(&self) -> &'static str {
        match self {
            RiskFactorType::Spot => "Spot",
            RiskFactorType::Volatility => "Volatility",
            RiskFactorType::InterestRate => "InterestRate",
            RiskFactorType::CostOfCarry => "CostOfCarry",
        }
    }
}

/// Types of market data shifts.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ShiftType<T: Float> {
    /// Absolute shift: add a fixed value.
    ///
    /// `new_value = old_value + shift_amount`
    Absolute(T),

    /// Relative shift: multiply by (1 + percentage).
    ///
    /// `new_value = old_value * (1 + shift_percentage)`
    Relative(T),
}

impl<T: Float> ShiftType<T> {
    /// Create a new absolute shift.
    pub fn absolute(amount: T) -> Self {
        ShiftType::Absolute(amount)
    }

    /// Create a new relative shift.
    pub fn relative(percentage: T) -> Self {
        ShiftType::Relative(percentage)
    }

    /// Apply this shift to a value.
    #[inline]
    pub fn apply(&self, value: T) -> T {
        match *self {
            ShiftType::Absolute(amount) => value + amount,
            ShiftType::Relative(pct) => value * (T::one() + pct),
        }
    }
}
