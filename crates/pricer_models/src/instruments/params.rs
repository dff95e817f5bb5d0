//! Common instrument parameters.
//!
//! This module provides the contract terms shared by the option
//! instruments, with validation.

use num_traits::Float;

use super::error::InstrumentError;

/// Contract terms shared by vanilla and barrier options.
///
/// Holds strike price, time to maturity and contract multiplier, all
/// validated to be positive and finite.
///
/// # Examples
/// ```
/// use pricer_models::instruments::InstrumentParams;
///
/// let params = InstrumentParams::new(100.0_f64, 1.0, 10.0).unwrap();
/// assert_eq!(params.strike(), 100.0);
/// assert_eq!(params.expiry(), 1.0);
/// assert_eq!(params.multiplier(), 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawInstrumentParams<T>",
        bound(deserialize = "T: serde::Deserialize<'de>")
    )
)]
pub struct InstrumentParams<T: Float> {
    strike: T,
    expiry: T,
    multiplier: T,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawInstrumentParams<T: Float> {
    strike: T,
    expiry: T,
    multiplier: T,
}

#[cfg(feature = "serde")]
impl<T: Float> TryFrom<RawInstrumentParams<T>> for InstrumentParams<T> {
    type Error = InstrumentError;

    fn try_from(raw: RawInstrumentParams<T>) -> Result<Self, Self::Error> {
        Self::new(raw.strike, raw.expiry, raw.multiplier)
    }
}

impl<T: Float> InstrumentParams<T> {
    /// Creates new contract terms with validation.
    ///
    /// # Arguments
    /// * `strike` - Strike price (must be positive)
    /// * `expiry` - Time to maturity in years (must be positive)
    /// * `multiplier` - Contract multiplier (must be positive)
    ///
    /// # Examples
    /// ```
    /// use pricer_models::instruments::InstrumentParams;
    ///
    /// assert!(InstrumentParams::new(100.0_f64, 1.0, 1.0).is_ok());
    /// assert!(InstrumentParams::new(-100.0_f64, 1.0, 1.0).is_err());
    /// ```
    pub fn new(strike: T, expiry: T, multiplier: T) -> Result<Self, InstrumentError> {
        if !is_positive(strike) {
            return Err(InstrumentError::InvalidStrike {
                strike: strike.to_f64().unwrap_or(f64::NAN),
            });
        }

        if !is_positive(expiry) {
            return Err(InstrumentError::InvalidExpiry {
                expiry: expiry.to_f64().unwrap_or(f64::NAN),
            });
        }

        if !is_positive(multiplier) {
            return Err(InstrumentError::InvalidMultiplier {
                multiplier: multiplier.to_f64().unwrap_or(f64::NAN),
            });
        }

        Ok(Self {
            strike,
            expiry,
            multiplier,
        })
    }

    /// Returns the strike price.
    #[inline]
    pub fn strike(&self) -> T {
        self.strike
    }

    /// Returns the time to maturity in years.
    #[inline]
    pub fn expiry(&self) -> T {
        self.expiry
    }

    /// Returns the contract multiplier.
    #[inline]
    pub fn multiplier(&self) -> T {
        self.multiplier
    }
}

/// Strictly positive and finite. NaN fails both comparisons.
#[inline]
pub(crate) fn is_positive<T: Float>(value: T) -> bool {
    value > T::zero() && value.is_finite()
}

/// Validates an FX helper scaling rate.
pub(crate) fn check_helper_rate<T: Float>(helper_rate: T) -> Result<T, InstrumentError> {
    if is_positive(helper_rate) {
        Ok(helper_rate)
    } else {
        Err(InstrumentError::InvalidHelperRate {
            helper_rate: helper_rate.to_f64().unwrap_or(f64::NAN),
        })
    }
}
