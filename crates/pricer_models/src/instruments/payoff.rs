//! Option type definitions.
//!
//! This module provides the call/put flag shared by the vanilla and
//! barrier option pricers.

use num_traits::Float;

/// Call/put flag of a European option.
///
/// # Examples
/// ```
/// use pricer_models::instruments::OptionType;
///
/// let call = OptionType::Call;
/// assert_eq!(call.intrinsic(110.0_f64, 100.0), 10.0);
/// assert_eq!(OptionType::Put.intrinsic(110.0_f64, 100.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OptionType {
    /// Call option: max(S - K, 0)
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

impl OptionType {
    /// Builds the flag from a boolean call indicator.
    #[inline]
    pub fn from_is_call(is_call: bool) -> Self {
        if is_call {
            OptionType::Call
        } else {
            OptionType::Put
        }
    }

    /// Returns true for a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Returns true for a put.
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, OptionType::Put)
    }

    /// Exercise value at the given spot.
    #[inline]
    pub fn intrinsic<T: Float>(&self, spot: T, strike: T) -> T {
        let value = match self {
            OptionType::Call => spot - strike,
            OptionType::Put => strike - spot,
        };
        value.max(T::zero())
    }
}

impl std::fmt::Display for OptionType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OptionType::Call => write!(f, "Call"),
            OptionType::Put => write!(f, "Put"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_is_call() {
        assert_eq!(OptionType::from_is_call(true), OptionType::Call);
        assert_eq!(OptionType::from_is_call(false), OptionType::Put);
    }

    #[test]
    fn test_flags() {
        assert!(OptionType::Call.is_call());
        assert!(!OptionType::Call.is_put());
        assert!(OptionType::Put.is_put());
    }

    #[test]
    fn test_intrinsic() {
        assert_eq!(OptionType::Call.intrinsic(90.0_f64, 100.0), 0.0);
        assert_eq!(OptionType::Put.intrinsic(90.0_f64, 100.0), 10.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", OptionType::Put), "Put");
    }
}
