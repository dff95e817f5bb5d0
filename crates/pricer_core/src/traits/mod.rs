//! Core traits for priceable instruments and risk factors.
//!
//! This module defines fundamental abstractions for:
//! - Generic floating-point operations (`Float` trait)
//! - Price calculation against a market snapshot (`Priceable` trait)
//! - Risk factor classification and shifts (`risk` module)
//!
//! All traits are designed for static dispatch (enum-based).

/// Generic floating-point trait for numeric computations.
///
/// Every pricing routine in the workspace is written against this trait so
/// the same formula serves both the f64 scalar path and the f32 batch path.
///
/// # Examples
/// ```
/// use pricer_core::traits::Float;
///
/// fn compute_discount<T: Float>(rate: T, time: T) -> T {
///     (-rate * time).exp()
/// }
///
/// let discount_f64: f64 = compute_discount(0.05, 1.0);
/// assert!((discount_f64 - 0.951229).abs() < 1e-5);
/// ```
pub use num_traits::Float;

pub mod priceable;
pub mod risk;

pub use priceable::Priceable;
pub use risk::{RiskFactorType, ShiftType};
