//! Flattening of the nested upstream payload into insertable rows.

use crate::stat::{CovidStat, RawPayload};

/// The fixed set of country codes retained during transformation; records for
/// any other code are discarded.
pub const TRACKED_COUNTRIES: [&str; 10] = [
  "RUS", "USA", "CHN", "CAN", "DEU", "ITA", "GBR", "JPN", "BRA", "IND",
];

/// Flatten the date → country → record payload into a linear row sequence,
/// keeping only countries named in `allowlist`.
///
/// Pure: no sorting and no I/O. Output order follows the payload's map
/// iteration order (dates ascending, then country codes ascending), which
/// callers must not rely on — the store re-orders on read.
pub fn flatten(payload: &RawPayload, allowlist: &[&str]) -> Vec<CovidStat> {
  let mut rows = Vec::new();
  for by_country in payload.values() {
    for (code, stat) in by_country {
      if allowlist.contains(&code.as_str()) {
        rows.push(stat.clone());
      }
    }
  }
  rows
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;

  use super::*;

  fn stat(date: &str, code: &str, deaths: Option<i64>) -> CovidStat {
    CovidStat {
      date_value:        date.parse::<NaiveDate>().unwrap(),
      country_code:      code.to_owned(),
      confirmed:         Some(100),
      deaths,
      stringency_actual: Some(42.123),
      stringency:        Some(42.1),
    }
  }

  fn payload(entries: &[(&str, &str, Option<i64>)]) -> RawPayload {
    let mut payload = RawPayload::new();
    for (date, code, deaths) in entries {
      payload
        .entry((*date).to_owned())
        .or_default()
        .insert((*code).to_owned(), stat(date, code, *deaths));
    }
    payload
  }

  #[test]
  fn keeps_only_allowlisted_countries() {
    let payload = payload(&[
      ("2021-01-01", "USA", Some(5)),
      ("2021-01-01", "FRA", Some(9)),
      ("2021-01-02", "DEU", Some(3)),
      ("2021-01-02", "ESP", None),
    ]);

    let rows = flatten(&payload, &TRACKED_COUNTRIES);

    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| TRACKED_COUNTRIES.contains(&r.country_code.as_str())));
    assert!(rows.iter().any(|r| r.country_code == "USA"));
    assert!(rows.iter().any(|r| r.country_code == "DEU"));
  }

  #[test]
  fn one_row_per_date_country_occurrence() {
    let payload = payload(&[
      ("2021-01-01", "USA", Some(5)),
      ("2021-01-02", "USA", Some(6)),
      ("2021-01-03", "USA", Some(7)),
    ]);

    let rows = flatten(&payload, &TRACKED_COUNTRIES);
    assert_eq!(rows.len(), 3);

    let dates: Vec<_> = rows.iter().map(|r| r.date_value.to_string()).collect();
    assert_eq!(dates, ["2021-01-01", "2021-01-02", "2021-01-03"]);
  }

  #[test]
  fn empty_payload_flattens_to_empty() {
    let rows = flatten(&RawPayload::new(), &TRACKED_COUNTRIES);
    assert!(rows.is_empty());
  }

  #[test]
  fn empty_allowlist_matches_nothing() {
    let payload = payload(&[("2021-01-01", "USA", Some(5))]);
    let rows = flatten(&payload, &[]);
    assert!(rows.is_empty());
  }

  #[test]
  fn record_values_pass_through_unchanged() {
    let payload = payload(&[("2021-01-01", "USA", Some(5))]);
    let rows = flatten(&payload, &TRACKED_COUNTRIES);

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0], stat("2021-01-01", "USA", Some(5)));
  }
}
