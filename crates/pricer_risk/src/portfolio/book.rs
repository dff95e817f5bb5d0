//! Book of positions with batched risk.

use pricer_core::market_data::MarketSnapshot;
use pricer_core::traits::Float;
use pricer_core::types::PricingError;
use rayon::prelude::*;
use tracing::{info, warn};

use super::error::PortfolioError;
use super::ids::PositionId;
use crate::parallel::ParallelConfig;
use crate::pnl::Position;

#[derive(Debug, Clone)]
struct BookEntry<T: Float> {
    id: PositionId,
    position: Position<T>,
}

/// Per-position outcome of a book risk run.
#[derive(Debug, Clone, PartialEq)]
pub struct BookRisk<T: Float> {
    /// Results in book insertion order
    pub entries: Vec<(PositionId, Result<T, PricingError>)>,
}

impl<T: Float> BookRisk<T> {
    /// Sum of the successful position risks.
    pub fn total(&self) -> T {
        self.entries
            .iter()
            .filter_map(|(_, result)| result.as_ref().ok())
            .fold(T::zero(), |acc, &risk| acc + risk)
    }

    /// Number of positions that failed to price.
    pub fn failures(&self) -> usize {
        self.entries.iter().filter(|(_, r)| r.is_err()).count()
    }

    /// Returns true if every position priced.
    pub fn is_complete(&self) -> bool {
        self.failures() == 0
    }

    /// Looks up the result for one position.
    pub fn get(&self, id: &PositionId) -> Option<&Result<T, PricingError>> {
        self.entries
            .iter()
            .find(|(entry_id, _)| entry_id == id)
            .map(|(_, result)| result)
    }
}

/// Ordered collection of uniquely identified positions.
///
/// Risk runs go parallel with rayon (one position per task) once the book
/// reaches the configured threshold. Each position owns its previous
/// snapshot, so tasks never share mutable state.
///
/// # Examples
/// ```
/// use pricer_core::market_data::MarketSnapshot;
/// use pricer_models::instruments::{Instrument, Spot};
/// use pricer_risk::pnl::Position;
/// use pricer_risk::portfolio::{Book, PositionId};
///
/// let mut book = Book::new();
/// let market = MarketSnapshot::new(30.0_f64, 0.3, 0.1);
/// book.insert("STOCK", Position::new(Instrument::from(Spot::new()), market)).unwrap();
///
/// book.update_market(&PositionId::new("STOCK"), MarketSnapshot::new(31.5, 0.3, 0.1)).unwrap();
/// let risk = book.risk_all();
/// assert_eq!(risk.total(), 1.5);
/// ```
#[derive(Debug, Clone)]
pub struct Book<T: Float> {
    entries: Vec<BookEntry<T>>,
    config: ParallelConfig,
}

impl<T: Float> Default for Book<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Float> Book<T> {
    /// Creates an empty book with the default parallel configuration.
    pub fn new() -> Self {
        Self::with_config(ParallelConfig::default())
    }

    /// Creates an empty book with an explicit parallel configuration.
    pub fn with_config(config: ParallelConfig) -> Self {
        Self {
            entries: Vec::new(),
            config,
        }
    }

    /// Returns the parallel configuration.
    pub fn config(&self) -> &ParallelConfig {
        &self.config
    }

    /// Number of positions.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the book holds no positions.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn index_of(&self, id: &PositionId) -> Option<usize> {
        self.entries.iter().position(|entry| &entry.id == id)
    }

    fn not_found(id: &PositionId) -> PortfolioError {
        PortfolioError::PositionNotFound(id.to_string())
    }

    /// Adds a position.
    ///
    /// # Errors
    /// `PortfolioError::DuplicatePosition` if the ID is already present.
    pub fn insert(
        &mut self,
        id: impl Into<PositionId>,
        position: Position<T>,
    ) -> Result<(), PortfolioError> {
        let id = id.into();
        if self.index_of(&id).is_some() {
            return Err(PortfolioError::DuplicatePosition(id.to_string()));
        }
        self.entries.push(BookEntry { id, position });
        Ok(())
    }

    /// Removes and returns a position.
    pub fn remove(&mut self, id: &PositionId) -> Result<Position<T>, PortfolioError> {
        let index = self.index_of(id).ok_or_else(|| Self::not_found(id))?;
        Ok(self.entries.remove(index).position)
    }

    /// Returns a reference to a position.
    pub fn get(&self, id: &PositionId) -> Option<&Position<T>> {
        self.index_of(id).map(|i| &self.entries[i].position)
    }

    /// Returns a mutable reference to a position.
    pub fn get_mut(&mut self, id: &PositionId) -> Option<&mut Position<T>> {
        let index = self.index_of(id)?;
        Some(&mut self.entries[index].position)
    }

    /// Iterates over positions in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&PositionId, &Position<T>)> {
        self.entries.iter().map(|entry| (&entry.id, &entry.position))
    }

    /// Replaces the current market of one position.
    pub fn update_market(
        &mut self,
        id: &PositionId,
        market: MarketSnapshot<T>,
    ) -> Result<(), PortfolioError> {
        let position = self.get_mut(id).ok_or_else(|| Self::not_found(id))?;
        position.update_market(market);
        Ok(())
    }

    /// Prices one position under its current market.
    pub fn price(&self, id: &PositionId) -> Result<T, PortfolioError> {
        let position = self.get(id).ok_or_else(|| Self::not_found(id))?;
        position.price().map_err(|source| PortfolioError::Pricing {
            id: id.to_string(),
            source,
        })
    }

    /// Measures and commits the risk of one position.
    pub fn risk(&mut self, id: &PositionId) -> Result<T, PortfolioError> {
        let position = self.get_mut(id).ok_or_else(|| Self::not_found(id))?;
        position.risk().map_err(|source| PortfolioError::Pricing {
            id: id.to_string(),
            source,
        })
    }
}

impl<T: Float + Send + Sync> Book<T> {
    /// Measures and commits the risk of every position.
    ///
    /// Positions that fail keep both snapshots and are reported in the
    /// result; the others are committed.
    pub fn risk_all(&mut self) -> BookRisk<T> {
        let parallel = self.config.should_parallelize(self.entries.len());
        let results: Vec<Result<T, PricingError>> = if parallel {
            self.entries
                .par_iter_mut()
                .with_min_len(self.config.batch_size)
                .map(|entry| entry.position.risk())
                .collect()
        } else {
            self.entries
                .iter_mut()
                .map(|entry| entry.position.risk())
                .collect()
        };
        self.report(results, parallel)
    }

    /// Measures the risk of every position without committing.
    pub fn measure_all(&self) -> BookRisk<T> {
        let parallel = self.config.should_parallelize(self.entries.len());
        let results: Vec<Result<T, PricingError>> = if parallel {
            self.entries
                .par_iter()
                .with_min_len(self.config.batch_size)
                .map(|entry| entry.position.measure_risk())
                .collect()
        } else {
            self.entries
                .iter()
                .map(|entry| entry.position.measure_risk())
                .collect()
        };
        self.report(results, parallel)
    }

    fn report(&self, results: Vec<Result<T, PricingError>>, parallel: bool) -> BookRisk<T> {
        let entries: Vec<(PositionId, Result<T, PricingError>)> = self
            .entries
            .iter()
            .zip(results)
            .map(|(entry, result)| {
                if let Err(err) = &result {
                    warn!(position = %entry.id, error = %err, "position risk failed");
                }
                (entry.id.clone(), result)
            })
            .collect();

        let risk = BookRisk { entries };
        info!(
            positions = risk.entries.len(),
            failures = risk.failures(),
            parallel,
            total = risk.total().to_f64().unwrap_or(f64::NAN),
            "book risk computed"
        );
        risk
    }
}
