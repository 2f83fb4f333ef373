//! Full-refresh orchestration: fetch → flatten → reset → load.

use chrono::Utc;
use covboard_core::{TRACKED_COUNTRIES, flatten, store::StatStore};
use covboard_fetch::{StringencyClient, year_to_date};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RefreshError {
  #[error("fetch error: {0}")]
  Fetch(#[from] covboard_fetch::Error),

  #[error("store error: {0}")]
  Store(#[source] Box<dyn std::error::Error + Send + Sync>),
}

/// Run one full refresh: fetch the year-to-date range, flatten it through
/// the country allow-list, then drop-and-reload the table.
///
/// A fetch failure aborts before the schema is touched, so the previous
/// table contents survive. The reset and the load are separate operations;
/// no transaction spans both.
pub async fn refresh<S>(
  store: &S,
  client: &StringencyClient,
) -> Result<usize, RefreshError>
where
  S: StatStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let (from, to) = year_to_date(Utc::now().date_naive());
  let payload = client.fetch(from, to).await?;

  let rows = flatten(&payload, &TRACKED_COUNTRIES);

  store
    .reset_schema()
    .await
    .map_err(|e| RefreshError::Store(Box::new(e)))?;
  let inserted = store
    .load(rows)
    .await
    .map_err(|e| RefreshError::Store(Box::new(e)))?;

  Ok(inserted)
}

/// One-time startup step, invoked explicitly by the server binary: establish
/// the schema, then attempt an initial refresh.
///
/// A refresh failure here is logged but not fatal — the server starts and
/// serves an empty table until `/renew` succeeds. A schema failure is fatal.
pub async fn initialize<S>(
  store: &S,
  client: &StringencyClient,
) -> Result<(), RefreshError>
where
  S: StatStore,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  store
    .reset_schema()
    .await
    .map_err(|e| RefreshError::Store(Box::new(e)))?;

  match refresh(store, client).await {
    Ok(rows) => tracing::info!(rows, "initial refresh complete"),
    Err(e) => tracing::warn!(error = %e, "initial refresh failed; starting with an empty table"),
  }

  Ok(())
}
