//! Books of positions.
//!
//! - [`PositionId`]: Strongly-typed position identifier
//! - [`Book`]: Ordered positions with parallel risk runs
//! - [`PortfolioError`]: Book operation failures

mod book;
mod error;
mod ids;

pub use book::{Book, BookRisk};
pub use error::PortfolioError;
pub use ids::PositionId;
