//! Barrier configuration for barrier options.
//!
//! A barrier option carries up to three levels: a limit B, a knock-in
//! level Hin and a knock-out level Hout. Which of them are active selects
//! one of seven pricing rules, so the active subset is held as the closed
//! enum [`BarrierSet`] instead of three nullable numbers.
//!
//! # Examples
//!
//! ```
//! use pricer_models::instruments::{BarrierConfig, BarrierDirection, BarrierSet};
//!
//! // Up-and-out at 120 with a rebate of 2
//! let config = BarrierConfig::from_levels(0.0_f64, 0.0, 120.0, 2.0, BarrierDirection::Up).unwrap();
//! assert_eq!(config.barriers(), BarrierSet::KnockOut { knock_out: 120.0 });
//! assert!(config.breached(125.0, 120.0));
//!
//! // No level at all is rejected
//! assert!(BarrierConfig::from_levels(0.0_f64, 0.0, 0.0, 0.0, BarrierDirection::Up).is_err());
//! ```

use num_traits::Float;

use super::error::InstrumentError;

/// Direction in which a barrier is breached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BarrierDirection {
    /// Breached when the price is at or above the level (η = +1)
    Up,
    /// Breached when the price is at or below the level (η = -1)
    Down,
}

impl BarrierDirection {
    /// Builds the direction from an up/down indicator η ∈ {+1, -1}.
    ///
    /// # Errors
    /// `InstrumentError::InvalidBarrierConfiguration` for any other value.
    pub fn from_indicator(indicator: i32) -> Result<Self, InstrumentError> {
        match indicator {
            1 => Ok(BarrierDirection::Up),
            -1 => Ok(BarrierDirection::Down),
            other => Err(InstrumentError::barrier(format!(
                "up/down indicator must be +1 or -1, got {}",
                other
            ))),
        }
    }

    /// Returns the indicator η.
    #[inline]
    pub fn indicator(&self) -> i32 {
        match self {
            BarrierDirection::Up => 1,
            BarrierDirection::Down => -1,
        }
    }

    /// Breach predicate: `price >= barrier` for up, `price <= barrier` for down.
    ///
    /// ```
    /// use pricer_models::instruments::BarrierDirection;
    ///
    /// assert!(BarrierDirection::Up.breached(110.0_f64, 110.0));
    /// assert!(!BarrierDirection::Up.breached(109.9_f64, 110.0));
    /// assert!(BarrierDirection::Down.breached(90.0_f64, 90.0));
    /// ```
    #[inline]
    pub fn breached<T: Float>(&self, price: T, barrier: T) -> bool {
        match self {
            BarrierDirection::Up => price >= barrier,
            BarrierDirection::Down => price <= barrier,
        }
    }
}

/// The active subset of {B, Hin, Hout}.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BarrierSet<T: Float> {
    /// {B}
    Limit {
        /// Limit level B
        limit: T,
    },
    /// {Hin}
    KnockIn {
        /// Knock-in level Hin
        knock_in: T,
    },
    /// {Hout}
    KnockOut {
        /// Knock-out level Hout
        knock_out: T,
    },
    /// {B, Hin}
    LimitKnockIn {
        /// Limit level B
        limit: T,
        /// Knock-in level Hin
        knock_in: T,
    },
    /// {B, Hout}
    LimitKnockOut {
        /// Limit level B
        limit: T,
        /// Knock-out level Hout
        knock_out: T,
    },
    /// {Hin, Hout}
    KnockInKnockOut {
        /// Knock-in level Hin
        knock_in: T,
        /// Knock-out level Hout
        knock_out: T,
    },
    /// {B, Hin, Hout}
    LimitKnockInKnockOut {
        /// Limit level B
        limit: T,
        /// Knock-in level Hin
        knock_in: T,
        /// Knock-out level Hout
        knock_out: T,
    },
}

impl<T: Float> BarrierSet<T> {
    /// Selects the active subset from three levels where 0 means inactive.
    ///
    /// # Errors
    /// `InstrumentError::InvalidBarrierConfiguration` when every level is
    /// zero, a level is negative or non-finite, or Hin equals Hout while
    /// both are active.
    pub fn from_levels(limit: T, knock_in: T, knock_out: T) -> Result<Self, InstrumentError> {
        let zero = T::zero();
        for (name, level) in [("limit", limit), ("knock-in", knock_in), ("knock-out", knock_out)] {
            check_level(name, level)?;
        }

        let set = match (limit > zero, knock_in > zero, knock_out > zero) {
            (true, false, false) => BarrierSet::Limit { limit },
            (false, true, false) => BarrierSet::KnockIn { knock_in },
            (false, false, true) => BarrierSet::KnockOut { knock_out },
            (true, true, false) => BarrierSet::LimitKnockIn { limit, knock_in },
            (true, false, true) => BarrierSet::LimitKnockOut { limit, knock_out },
            (false, true, true) => BarrierSet::KnockInKnockOut {
                knock_in,
                knock_out,
            },
            (true, true, true) => BarrierSet::LimitKnockInKnockOut {
                limit,
                knock_in,
                knock_out,
            },
            (false, false, false) => {
                return Err(InstrumentError::barrier("all barrier levels are zero"))
            }
        };
        set.validate()?;
        Ok(set)
    }

    /// Checks the levels of a directly constructed set.
    pub fn validate(&self) -> Result<(), InstrumentError> {
        for (name, level) in [
            ("limit", self.limit()),
            ("knock-in", self.knock_in()),
            ("knock-out", self.knock_out()),
        ] {
            if let Some(level) = level {
                check_level(name, level)?;
                if level == T::zero() {
                    return Err(InstrumentError::barrier(format!(
                        "active {} level must be positive",
                        name
                    )));
                }
            }
        }

        if let (Some(knock_in), Some(knock_out)) = (self.knock_in(), self.knock_out()) {
            if knock_in == knock_out {
                return Err(InstrumentError::barrier(
                    "knock-in and knock-out levels must differ",
                ));
            }
        }
        Ok(())
    }

    /// Limit level B, if active.
    pub fn limit(&self) -> Option<T> {
        match *self {
            BarrierSet::Limit { limit }
            | BarrierSet::LimitKnockIn { limit, .. }
            | BarrierSet::LimitKnockOut { limit, .. }
            | BarrierSet::LimitKnockInKnockOut { limit, .. } => Some(limit),
            _ => None,
        }
    }

    /// Knock-in level Hin, if active.
    pub fn knock_in(&self) -> Option<T> {
        match *self {
            BarrierSet::KnockIn { knock_in }
            | BarrierSet::LimitKnockIn { knock_in, .. }
            | BarrierSet::KnockInKnockOut { knock_in, .. }
            | BarrierSet::LimitKnockInKnockOut { knock_in, .. } => Some(knock_in),
            _ => None,
        }
    }

    /// Knock-out level Hout, if active.
    pub fn knock_out(&self) -> Option<T> {
        match *self {
            BarrierSet::KnockOut { knock_out }
            | BarrierSet::LimitKnockOut { knock_out, .. }
            | BarrierSet::KnockInKnockOut { knock_out, .. }
            | BarrierSet::LimitKnockInKnockOut { knock_out, .. } => Some(knock_out),
            _ => None,
        }
    }

    /// Short name of the active subset.
    pub fn name(&self) -> &'static str {
        match self {
            BarrierSet::Limit { .. } => "B",
            BarrierSet::KnockIn { .. } => "Hin",
            BarrierSet::KnockOut { .. } => "Hout",
            BarrierSet::LimitKnockIn { .. } => "B+Hin",
            BarrierSet::LimitKnockOut { .. } => "B+Hout",
            BarrierSet::KnockInKnockOut { .. } => "Hin+Hout",
            BarrierSet::LimitKnockInKnockOut { .. } => "B+Hin+Hout",
        }
    }
}

fn check_level<T: Float>(name: &str, level: T) -> Result<(), InstrumentError> {
    if !level.is_finite() || level < T::zero() {
        return Err(InstrumentError::barrier(format!(
            "{} level must be finite and non-negative, got {}",
            name,
            level.to_f64().unwrap_or(f64::NAN)
        )));
    }
    Ok(())
}

/// Kind of a single-level barrier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BarrierKind {
    /// Limit barrier B
    Limit,
    /// Knock-in barrier Hin
    KnockIn,
    /// Knock-out barrier Hout
    KnockOut,
}

/// Validated barrier levels, rebate and direction.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(
        try_from = "RawBarrierConfig<T>",
        bound(deserialize = "T: serde::Deserialize<'de>")
    )
)]
pub struct BarrierConfig<T: Float> {
    barriers: BarrierSet<T>,
    rebate: T,
    direction: BarrierDirection,
    reference_spot: Option<T>,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(bound(deserialize = "T: serde::Deserialize<'de>"))]
struct RawBarrierConfig<T: Float> {
    barriers: BarrierSet<T>,
    rebate: T,
    direction: BarrierDirection,
    #[serde(default)]
    reference_spot: Option<T>,
}

#[cfg(feature = "serde")]
impl<T: Float> TryFrom<RawBarrierConfig<T>> for BarrierConfig<T> {
    type Error = InstrumentError;

    fn try_from(raw: RawBarrierConfig<T>) -> Result<Self, Self::Error> {
        let config = Self::new(raw.barriers, raw.rebate, raw.direction)?;
        match raw.reference_spot {
            Some(spot) => config.with_reference_spot(spot),
            None => Ok(config),
        }
    }
}

impl<T: Float> BarrierConfig<T> {
    /// Creates a configuration from an explicit barrier set.
    ///
    /// # Errors
    /// `InstrumentError::InvalidBarrierConfiguration` if the set fails
    /// [`BarrierSet::validate`] or the rebate is negative or non-finite.
    pub fn new(
        barriers: BarrierSet<T>,
        rebate: T,
        direction: BarrierDirection,
    ) -> Result<Self, InstrumentError> {
        barriers.validate()?;
        if !rebate.is_finite() || rebate < T::zero() {
            return Err(InstrumentError::barrier(format!(
                "rebate must be finite and non-negative, got {}",
                rebate.to_f64().unwrap_or(f64::NAN)
            )));
        }
        Ok(Self {
            barriers,
            rebate,
            direction,
            reference_spot: None,
        })
    }

    /// Fixes the spot against which the fractional dormant rule orients
    /// the knock-in and knock-out levels, typically the trade-date spot.
    ///
    /// Without it the current spot is used, and since neither level is
    /// breached in the dormant state both then lie on the same side.
    ///
    /// # Errors
    /// `InstrumentError::InvalidBarrierConfiguration` if `spot` is not
    /// positive and finite.
    pub fn with_reference_spot(mut self, spot: T) -> Result<Self, InstrumentError> {
        if !spot.is_finite() || spot <= T::zero() {
            return Err(InstrumentError::barrier(format!(
                "reference spot must be positive and finite, got {}",
                spot.to_f64().unwrap_or(f64::NAN)
            )));
        }
        self.reference_spot = Some(spot);
        Ok(self)
    }

    /// Creates a configuration from three levels (0 = inactive).
    pub fn from_levels(
        limit: T,
        knock_in: T,
        knock_out: T,
        rebate: T,
        direction: BarrierDirection,
    ) -> Result<Self, InstrumentError> {
        Self::new(
            BarrierSet::from_levels(limit, knock_in, knock_out)?,
            rebate,
            direction,
        )
    }

    /// Creates a configuration with a single active level.
    ///
    /// ```
    /// use pricer_models::instruments::{BarrierConfig, BarrierDirection, BarrierKind, BarrierSet};
    ///
    /// let config = BarrierConfig::single(BarrierKind::KnockIn, 90.0_f64, 0.0, BarrierDirection::Down).unwrap();
    /// assert_eq!(config.barriers(), BarrierSet::KnockIn { knock_in: 90.0 });
    /// ```
    pub fn single(
        kind: BarrierKind,
        level: T,
        rebate: T,
        direction: BarrierDirection,
    ) -> Result<Self, InstrumentError> {
        let barriers = match kind {
            BarrierKind::Limit => BarrierSet::Limit { limit: level },
            BarrierKind::KnockIn => BarrierSet::KnockIn { knock_in: level },
            BarrierKind::KnockOut => BarrierSet::KnockOut { knock_out: level },
        };
        Self::new(barriers, rebate, direction)
    }

    /// Returns the active barrier set.
    #[inline]
    pub fn barriers(&self) -> BarrierSet<T> {
        self.barriers
    }

    /// Returns the rebate R.
    #[inline]
    pub fn rebate(&self) -> T {
        self.rebate
    }

    /// Returns the breach direction.
    #[inline]
    pub fn direction(&self) -> BarrierDirection {
        self.direction
    }

    /// Returns the reference spot, if fixed.
    #[inline]
    pub fn reference_spot(&self) -> Option<T> {
        self.reference_spot
    }

    /// Breach predicate under this configuration's direction.
    #[inline]
    pub fn breached(&self, price: T, barrier: T) -> bool {
        self.direction.breached(price, barrier)
    }
}

/// How the {Hin, Hout} rule prices the state where neither barrier is breached.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "rule", rename_all = "snake_case"))]
pub enum DormantRule {
    /// Discounted rebate.
    #[default]
    Rebate,
    /// Fraction of the {Hin} rule price. `aligned` applies when Hout and
    /// Hin lie on the same side of the reference spot, `opposed` otherwise.
    Fractional {
        /// Fraction when both levels lie on the same side of spot
        aligned: f64,
        /// Fraction when the levels straddle spot
        opposed: f64,
    },
}

impl DormantRule {
    /// Fractional rule with factors 0.7 and 0.5.
    pub fn fractional() -> Self {
        DormantRule::Fractional {
            aligned: 0.7,
            opposed: 0.5,
        }
    }
}

/// Tunable constants of the barrier rules.
///
/// ```
/// use pricer_models::instruments::{BarrierPolicy, DormantRule};
///
/// let policy = BarrierPolicy::default();
/// assert_eq!(policy.limit_haircut, 0.95);
/// assert_eq!(policy.dormant, DormantRule::Rebate);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawBarrierPolicy"))]
pub struct BarrierPolicy {
    /// Factor applied to the vanilla price when the limit is breached, in (0, 1]
    pub limit_haircut: f64,
    /// Dormant-state rule of the {Hin, Hout} pattern
    pub dormant: DormantRule,
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
#[serde(default)]
struct RawBarrierPolicy {
    limit_haircut: f64,
    dormant: DormantRule,
}

#[cfg(feature = "serde")]
impl Default for RawBarrierPolicy {
    fn default() -> Self {
        let policy = BarrierPolicy::default();
        Self {
            limit_haircut: policy.limit_haircut,
            dormant: policy.dormant,
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<RawBarrierPolicy> for BarrierPolicy {
    type Error = InstrumentError;

    fn try_from(raw: RawBarrierPolicy) -> Result<Self, Self::Error> {
        let policy = BarrierPolicy {
            limit_haircut: raw.limit_haircut,
            dormant: raw.dormant,
        };
        policy.validate()?;
        Ok(policy)
    }
}

impl Default for BarrierPolicy {
    fn default() -> Self {
        Self {
            limit_haircut: 0.95,
            dormant: DormantRule::Rebate,
        }
    }
}

impl BarrierPolicy {
    /// Checks the factor ranges.
    ///
    /// # Errors
    /// `InstrumentError::InvalidBarrierConfiguration` if the haircut is
    /// outside (0, 1] or a fractional factor is outside [0, 1].
    pub fn validate(&self) -> Result<(), InstrumentError> {
        if !(self.limit_haircut > 0.0 && self.limit_haircut <= 1.0) {
            return Err(InstrumentError::barrier(format!(
                "limit haircut must be in (0, 1], got {}",
                self.limit_haircut
            )));
        }
        if let DormantRule::Fractional { aligned, opposed } = self.dormant {
            for (name, factor) in [("aligned", aligned), ("opposed", opposed)] {
                if !(0.0..=1.0).contains(&factor) {
                    return Err(InstrumentError::barrier(format!(
                        "{} dormant factor must be in [0, 1], got {}",
                        name, factor
                    )));
                }
            }
        }
        Ok(())
    }
}
