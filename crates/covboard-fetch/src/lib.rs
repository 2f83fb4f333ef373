//! HTTP client for the OxCGRT policy-stringency API.
//!
//! One endpoint is consumed: the date-range report, a JSON document keyed by
//! date, then by country code. See [`StringencyClient::fetch`].

mod client;

pub mod error;

pub use client::{StringencyClient, year_to_date};
pub use error::{Error, Result};
