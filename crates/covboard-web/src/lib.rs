//! Web layer for covboard.
//!
//! Exposes an axum [`Router`] with exactly two routes, backed by any
//! [`StatStore`]:
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`  | `/` | HTML table of all rows, deaths ascending |
//! | `GET`  | `/renew` | full refresh, then 303 → `/` |

pub mod error;
pub mod page;
pub mod refresh;

pub use error::Error;
pub use refresh::{RefreshError, initialize, refresh};

use std::{path::PathBuf, sync::Arc};

use axum::{
  Router,
  extract::State,
  response::{Html, Redirect},
  routing::get,
};
use covboard_core::store::StatStore;
use covboard_fetch::StringencyClient;
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and/or
/// `COVBOARD_*` environment variables.
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  pub host:         String,
  pub port:         u16,
  pub store_path:   PathBuf,
  pub api_base_url: String,
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S: StatStore> {
  pub store:  Arc<S>,
  pub client: StringencyClient,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the axum [`Router`] for the statistics site.
pub fn router<S>(state: AppState<S>) -> Router
where
  S: StatStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  Router::new()
    .route("/", get(index::<S>))
    .route("/renew", get(renew::<S>))
    .layer(TraceLayer::new_for_http())
    .with_state(state)
}

// ─── Route handlers ──────────────────────────────────────────────────────────

/// `GET /` — render every persisted row, ordered by deaths ascending.
async fn index<S>(
  State(state): State<AppState<S>>,
) -> Result<Html<String>, Error>
where
  S: StatStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  let rows = state
    .store
    .read_all()
    .await
    .map_err(|e| Error::Store(Box::new(e)))?;
  Ok(Html(page::render_index(&rows)))
}

/// `GET /renew` — run a full refresh, then redirect home.
///
/// A failed refresh is logged and leaves the previous table contents in
/// place; the redirect is issued either way, so the caller always lands back
/// on `/` with whatever data survived.
async fn renew<S>(State(state): State<AppState<S>>) -> Redirect
where
  S: StatStore + Clone + Send + Sync + 'static,
  S::Error: std::error::Error + Send + Sync + 'static,
{
  match refresh(state.store.as_ref(), &state.client).await {
    Ok(rows) => tracing::info!(rows, "refresh complete"),
    Err(e) => tracing::warn!(error = %e, "refresh failed; serving previous data"),
  }
  Redirect::to("/")
}
