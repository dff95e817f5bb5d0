//! Market data structures consumed by the pricers.
//!
//! All structures are generic over `T: Float` so the same snapshot type
//! serves the f64 scalar path and the f32 batch path.
//!
//! # Components
//!
//! - [`snapshot`]: Point-in-time market inputs (S, σ, r, b)
//!
//! # Example
//!
//! ```
//! use pricer_core::market_data::MarketSnapshot;
//!
//! let previous = MarketSnapshot::new(100.0_f64, 0.20, 0.05);
//! let mut current = previous;
//! current.set_spot(104.0);
//!
//! assert_ne!(previous, current);
//! ```

pub mod snapshot;

pub use snapshot::MarketSnapshot;
