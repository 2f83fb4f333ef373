//! HTML rendering for the index page.
//!
//! No template engine: the page is one table and a refresh link, so the
//! markup is assembled directly, the same way the protocol bodies elsewhere
//! in this workspace are.

use covboard_core::StatRow;

/// Render the full index page for `rows` (already ordered by the store).
pub fn render_index(rows: &[StatRow]) -> String {
  let mut body = String::with_capacity(512 + rows.len() * 160);

  body.push_str(
    "<!DOCTYPE html>\n\
     <html lang=\"en\">\n\
     <head>\n\
     <meta charset=\"utf-8\">\n\
     <title>COVID policy stringency</title>\n\
     </head>\n\
     <body>\n\
     <h1>COVID policy stringency</h1>\n\
     <p><a href=\"/renew\">Renew data</a></p>\n\
     <table border=\"1\">\n\
     <tr>\
     <th>id</th><th>date</th><th>country</th>\
     <th>confirmed</th><th>deaths</th>\
     <th>stringency (actual)</th><th>stringency</th>\
     </tr>\n",
  );

  for row in rows {
    body.push_str("<tr>");
    push_cell(&mut body, &row.id.to_string());
    push_cell(&mut body, &row.stat.date_value.to_string());
    push_cell(&mut body, &escape(&row.stat.country_code));
    push_opt_cell(&mut body, row.stat.confirmed.map(|v| v.to_string()));
    push_opt_cell(&mut body, row.stat.deaths.map(|v| v.to_string()));
    push_opt_cell(&mut body, row.stat.stringency_actual.map(|v| v.to_string()));
    push_opt_cell(&mut body, row.stat.stringency.map(|v| v.to_string()));
    body.push_str("</tr>\n");
  }

  body.push_str("</table>\n</body>\n</html>\n");
  body
}

fn push_cell(body: &mut String, value: &str) {
  body.push_str("<td>");
  body.push_str(value);
  body.push_str("</td>");
}

fn push_opt_cell(body: &mut String, value: Option<String>) {
  match value {
    Some(v) => push_cell(body, &v),
    None => push_cell(body, ""),
  }
}

/// Minimal HTML escaping for upstream-supplied text.
fn escape(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for c in s.chars() {
    match c {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      _ => out.push(c),
    }
  }
  out
}

#[cfg(test)]
mod tests {
  use chrono::NaiveDate;
  use covboard_core::{CovidStat, StatRow};

  use super::*;

  fn row(id: i64, code: &str, deaths: Option<i64>) -> StatRow {
    StatRow {
      id,
      stat: CovidStat {
        date_value:        NaiveDate::from_ymd_opt(2021, 1, 1).unwrap(),
        country_code:      code.to_owned(),
        confirmed:         Some(100),
        deaths,
        stringency_actual: Some(42.123),
        stringency:        Some(42.1),
      },
    }
  }

  #[test]
  fn renders_rows_in_given_order() {
    let html = render_index(&[row(1, "DEU", Some(3)), row(2, "USA", Some(50))]);

    let deu = html.find("DEU").unwrap();
    let usa = html.find("USA").unwrap();
    assert!(deu < usa);
  }

  #[test]
  fn renders_empty_table_without_rows() {
    let html = render_index(&[]);
    assert!(html.contains("<table"));
    assert!(!html.contains("<td>"));
  }

  #[test]
  fn null_metrics_render_as_empty_cells() {
    let html = render_index(&[row(1, "JPN", None)]);
    assert!(html.contains("<td></td>"));
  }

  #[test]
  fn escapes_markup_in_country_codes() {
    let html = render_index(&[row(1, "<b>", Some(1))]);
    assert!(html.contains("&lt;b&gt;"));
    assert!(!html.contains("<td><b></td>"));
  }
}
