//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Calendar dates are stored as ISO 8601 strings; every other column maps
//! directly onto a native SQLite type.

use chrono::NaiveDate;
use covboard_core::{CovidStat, StatRow};

use crate::{Error, Result};

pub fn encode_date(d: NaiveDate) -> String { d.format("%Y-%m-%d").to_string() }

pub fn decode_date(s: &str) -> Result<NaiveDate> {
  s.parse::<NaiveDate>()
    .map_err(|e| Error::DateParse(format!("{s:?}: {e}")))
}

/// Raw values read directly from a `covid_stats` row, before the date column
/// is parsed.
pub struct RawStatRow {
  pub id:                i64,
  pub date_value:        String,
  pub country_code:      String,
  pub confirmed:         Option<i64>,
  pub deaths:            Option<i64>,
  pub stringency_actual: Option<f64>,
  pub stringency:        Option<f64>,
}

impl RawStatRow {
  pub fn into_row(self) -> Result<StatRow> {
    Ok(StatRow {
      id:   self.id,
      stat: CovidStat {
        date_value:        decode_date(&self.date_value)?,
        country_code:      self.country_code,
        confirmed:         self.confirmed,
        deaths:            self.deaths,
        stringency_actual: self.stringency_actual,
        stringency:        self.stringency,
      },
    })
  }
}
