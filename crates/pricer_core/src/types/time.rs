//! Day-count conventions for converting calendar periods into year fractions.
//!
//! Maturities on futures are usually quoted in days or as a delivery date,
//! while every pricing formula in this workspace expects time in years.

use chrono::NaiveDate;

use super::error::DayCountError;

/// Day count convention for year-fraction calculation.
///
/// # Examples
///
/// ```
/// use pricer_core::types::time::DayCountConvention;
///
/// let yf = DayCountConvention::Actual360.year_fraction_days(180).unwrap();
/// assert!((yf - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DayCountConvention {
    /// Actual/365 Fixed: actual_days / 365.0
    Actual365Fixed,

    /// Actual/360: actual_days / 360.0
    ///
    /// Money-market convention, and the one futures maturities use here.
    #[default]
    Actual360,
}

impl DayCountConvention {
    /// Returns the standard convention name.
    ///
    /// ```
    /// use pricer_core::types::time::DayCountConvention;
    ///
    /// assert_eq!(DayCountConvention::Actual365Fixed.name(), "ACT/365F");
    /// assert_eq!(DayCountConvention::Actual360.name(), "ACT/360");
    /// ```
    pub fn name(&self) -> &'static str {
        match self {
            DayCountConvention::Actual365Fixed => "ACT/365F",
            DayCountConvention::Actual360 => "ACT/360",
        }
    }

    #[inline]
    fn denominator(&self) -> f64 {
        match self {
            DayCountConvention::Actual365Fixed => 365.0,
            DayCountConvention::Actual360 => 360.0,
        }
    }

    /// Converts a number of calendar days into a year fraction.
    ///
    /// # Errors
    /// `DayCountError::NegativePeriod` if `days < 0`.
    pub fn year_fraction_days(&self, days: i64) -> Result<f64, DayCountError> {
        if days < 0 {
            return Err(DayCountError::NegativePeriod { days });
        }
        Ok(days as f64 / self.denominator())
    }

    /// Calculates the year fraction between two dates.
    ///
    /// # Errors
    /// `DayCountError::NegativePeriod` if `end` precedes `start`.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::time::DayCountConvention;
    /// use chrono::NaiveDate;
    ///
    /// let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
    /// let end = NaiveDate::from_ymd_opt(2024, 7, 1).unwrap();
    ///
    /// let yf_365 = DayCountConvention::Actual365Fixed.year_fraction(start, end).unwrap();
    /// assert!((yf_365 - 0.4986).abs() < 0.001);
    ///
    /// let yf_360 = DayCountConvention::Actual360.year_fraction(start, end).unwrap();
    /// assert!((yf_360 - 0.5056).abs() < 0.001);
    /// ```
    pub fn year_fraction(&self, start: NaiveDate, end: NaiveDate) -> Result<f64, DayCountError> {
        self.year_fraction_days((end - start).num_days())
    }
}

impl std::fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_actual_360_days() {
        let dc = DayCountConvention::Actual360;
        assert_relative_eq!(dc.year_fraction_days(180).unwrap(), 0.5, epsilon = 1e-12);
        assert_relative_eq!(dc.year_fraction_days(360).unwrap(), 1.0, epsilon = 1e-12);
        assert_eq!(dc.year_fraction_days(0).unwrap(), 0.0);
    }

    #[test]
    fn test_actual_365_days() {
        let dc = DayCountConvention::Actual365Fixed;
        assert_relative_eq!(dc.year_fraction_days(180).unwrap(), 0.4932, epsilon = 1e-4);
    }

    #[test]
    fn test_negative_days_rejected() {
        let result = DayCountConvention::Actual360.year_fraction_days(-1);
        assert_eq!(result, Err(DayCountError::NegativePeriod { days: -1 }));
    }

    #[test]
    fn test_year_fraction_dates() {
        let yf = DayCountConvention::Actual365Fixed
            .year_fraction(date(2024, 1, 1), date(2025, 1, 1))
            .unwrap();
        // 2024 is a leap year
        assert_relative_eq!(yf, 366.0 / 365.0, epsilon = 1e-12);
    }

    #[test]
    fn test_reversed_dates_rejected() {
        let result =
            DayCountConvention::Actual360.year_fraction(date(2024, 7, 1), date(2024, 1, 1));
        assert!(matches!(result, Err(DayCountError::NegativePeriod { .. })));
    }

    #[test]
    fn test_default_and_display() {
        assert_eq!(DayCountConvention::default(), DayCountConvention::Actual360);
        assert_eq!(format!("{}", DayCountConvention::Actual360), "ACT/360");
    }
}
