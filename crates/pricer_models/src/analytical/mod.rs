//! Analytical pricing formulas for European and barrier options.
//!
//! This module provides closed-form solutions for option pricing:
//! - Normal distribution primitives
//! - Generalised Black-Scholes model (with cost of carry)
//! - Analytical Greeks (Delta, Gamma, Vega, Theta, Rho)
//! - Barrier rule resolution on top of the vanilla price
//!
//! ## Design Principles
//!
//! - **Generic over `T: Float`**: Supports both `f64` and `f32`
//! - **Validated inputs**: Out-of-domain data returns an [`AnalyticalError`]
//!   instead of NaN

pub mod barrier;
pub mod black_scholes;
pub mod distributions;
pub mod error;

// Re-export main types at module level
pub use barrier::BarrierResolver;
pub use black_scholes::{BlackScholes, Greeks};
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
