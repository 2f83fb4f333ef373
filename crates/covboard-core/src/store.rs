//! The `StatStore` trait.
//!
//! Implemented by storage backends (e.g. `covboard-store-sqlite`). The web
//! layer depends on this abstraction, not on any concrete backend.

use std::future::Future;

use crate::stat::{CovidStat, StatRow};

/// Abstraction over the single-table statistics store.
///
/// The store owns the full lifecycle of the `covid_stats` table: every
/// refresh drops and recreates it, so rows have no identity across loads.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait StatStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  /// Drop the statistics table if it exists and recreate it empty.
  /// Idempotent: calling twice leaves an empty table with the same columns.
  fn reset_schema(&self)
  -> impl Future<Output = Result<(), Self::Error>> + Send + '_;

  /// Insert `stats` row by row on one connection, committing once at the
  /// end. Returns the number of rows inserted.
  fn load(
    &self,
    stats: Vec<CovidStat>,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;

  /// Return all rows ordered by `deaths` ascending (NULL deaths first, the
  /// backend default). A missing table is not an error: it yields an empty
  /// sequence.
  fn read_all(
    &self,
  ) -> impl Future<Output = Result<Vec<StatRow>, Self::Error>> + Send + '_;
}
