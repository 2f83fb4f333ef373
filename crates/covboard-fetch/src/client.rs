//! Async HTTP client wrapping the stringency date-range endpoint.

use std::time::Duration;

use chrono::{Datelike, NaiveDate};
use covboard_core::RawPayload;
use serde::Deserialize;

use crate::{Error, Result};

/// How long a single upstream request may take before it is abandoned.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(15);

/// Envelope of the date-range response; only `data` is consumed.
#[derive(Debug, Deserialize)]
struct DateRangeResponse {
  data: RawPayload,
}

/// Async client for the stringency API.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct StringencyClient {
  client:   reqwest::Client,
  base_url: String,
}

impl StringencyClient {
  /// Build a client for the API rooted at `base_url`
  /// (e.g. `https://covidtrackerapi.bsg.ox.ac.uk`).
  pub fn new(base_url: impl Into<String>) -> Result<Self> {
    let client = reqwest::Client::builder()
      .timeout(REQUEST_TIMEOUT)
      .build()?;
    Ok(Self {
      client,
      base_url: base_url.into(),
    })
  }

  fn url(&self, from: NaiveDate, to: NaiveDate) -> String {
    format!(
      "{}/api/v2/stringency/date-range/{from}/{to}",
      self.base_url.trim_end_matches('/'),
    )
  }

  /// `GET /api/v2/stringency/date-range/{from}/{to}`
  ///
  /// Fetch the raw nested payload for the inclusive date range. The range is
  /// passed through as-is — an inverted range is the upstream's problem.
  /// Returns the `data` field of the decoded body.
  pub async fn fetch(&self, from: NaiveDate, to: NaiveDate) -> Result<RawPayload> {
    let resp = self.client.get(self.url(from, to)).send().await?;

    if !resp.status().is_success() {
      return Err(Error::Status(resp.status()));
    }

    let body: DateRangeResponse = resp.json().await?;
    Ok(body.data)
  }
}

/// The full refresh range: January 1st of `today`'s year through `today`.
pub fn year_to_date(today: NaiveDate) -> (NaiveDate, NaiveDate) {
  // Jan 1 always exists for any year chrono can represent.
  let start = NaiveDate::from_ymd_opt(today.year(), 1, 1)
    .unwrap_or(today);
  (start, today)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn url_interpolates_iso_dates() {
    let client = StringencyClient::new("https://example.com/").unwrap();
    let from = NaiveDate::from_ymd_opt(2021, 1, 1).unwrap();
    let to = NaiveDate::from_ymd_opt(2021, 3, 15).unwrap();

    assert_eq!(
      client.url(from, to),
      "https://example.com/api/v2/stringency/date-range/2021-01-01/2021-03-15"
    );
  }

  #[test]
  fn year_to_date_starts_january_first() {
    let today = NaiveDate::from_ymd_opt(2021, 6, 30).unwrap();
    let (from, to) = year_to_date(today);
    assert_eq!(from, NaiveDate::from_ymd_opt(2021, 1, 1).unwrap());
    assert_eq!(to, today);
  }

  #[test]
  fn date_range_response_decodes_nested_payload() {
    let body = r#"{
      "data": {
        "2021-01-01": {
          "USA": {
            "date_value": "2021-01-01",
            "country_code": "USA",
            "confirmed": 100,
            "deaths": 5,
            "stringency_actual": 42.123,
            "stringency": 42.1
          },
          "FRA": {
            "date_value": "2021-01-01",
            "country_code": "FRA",
            "confirmed": null,
            "deaths": null,
            "stringency_actual": null,
            "stringency": 11.5
          }
        }
      },
      "scale": "full"
    }"#;

    let decoded: DateRangeResponse = serde_json::from_str(body).unwrap();
    let day = &decoded.data["2021-01-01"];

    assert_eq!(day.len(), 2);
    assert_eq!(day["USA"].deaths, Some(5));
    assert_eq!(day["FRA"].confirmed, None);
    assert_eq!(day["FRA"].stringency, Some(11.5));
  }
}
