//! Row types for per-country, per-date stringency statistics.
//!
//! The upstream API embeds `date_value` and `country_code` inside each
//! per-country record, so [`CovidStat`] deserialises straight out of the
//! nested payload with no re-keying.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The `data` field of the upstream date-range response: date string →
/// country code → record.
pub type RawPayload = BTreeMap<String, BTreeMap<String, CovidStat>>;

/// One country's statistics for one date, as published by the upstream API.
///
/// `confirmed`, `deaths`, and both stringency indices may be null upstream;
/// the source is trusted and no further validation is applied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CovidStat {
  pub date_value:        NaiveDate,
  pub country_code:      String,
  pub confirmed:         Option<i64>,
  pub deaths:            Option<i64>,
  pub stringency_actual: Option<f64>,
  pub stringency:        Option<f64>,
}

/// A persisted statistics row.
///
/// `id` is assigned by the store on insert and is not stable across
/// refreshes — every refresh drops and recreates the table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatRow {
  pub id:   i64,
  #[serde(flatten)]
  pub stat: CovidStat,
}
