//! Report rendering for resolved pairs.

use std::fmt::Write;

use serde::Serialize;

use crate::event::Event;
use crate::pair::Pair;

/// Marker used for any absent side of a half-open pair.
pub const PLACEHOLDER: &str = " --- ";

/// Renders one report line per pair, in the pairs' given order.
#[must_use]
pub fn render(pairs: &[Pair]) -> String {
    let mut output = String::new();
    for pair in pairs {
        let (start, start_full) = side_fields(pair.admission());
        let (end, end_full) = side_fields(pair.discharge());
        writeln!(
            output,
            "Start time: {start}, End time: {end}, ID: {id}, \
             Start full line: {start_full}, End full line: {end_full}.",
            id = pair.identifier()
        )
        .unwrap();
    }
    output
}

fn side_fields(side: Option<&Event>) -> (&str, &str) {
    side.map_or((PLACEHOLDER, PLACEHOLDER), |event| {
        (event.timestamp_text.as_str(), event.raw_line.as_str())
    })
}

// ========== JSON Output ==========

/// JSON report structure.
#[derive(Debug, Serialize)]
pub struct JsonReport {
    pub pairs: Vec<JsonPair>,
    pub totals: JsonTotals,
}

/// One pair in the JSON report; absent sides serialize as `null`.
#[derive(Debug, Serialize)]
pub struct JsonPair {
    pub id: String,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub start_line: Option<String>,
    pub end_line: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct JsonTotals {
    pub pair_count: usize,
    pub matched: usize,
    pub open_admissions: usize,
    pub open_discharges: usize,
}

/// Renders the pairs as pretty-printed JSON.
pub fn render_json(pairs: &[Pair]) -> serde_json::Result<String> {
    let json_pairs: Vec<JsonPair> = pairs
        .iter()
        .map(|pair| JsonPair {
            id: pair.identifier().to_string(),
            start_time: pair.admission().map(|e| e.timestamp_text.clone()),
            end_time: pair.discharge().map(|e| e.timestamp_text.clone()),
            start_line: pair.admission().map(|e| e.raw_line.clone()),
            end_line: pair.discharge().map(|e| e.raw_line.clone()),
        })
        .collect();

    let report = JsonReport {
        totals: JsonTotals {
            pair_count: pairs.len(),
            matched: pairs
                .iter()
                .filter(|p| p.admission().is_some() && p.discharge().is_some())
                .count(),
            open_admissions: pairs.iter().filter(|p| p.discharge().is_none()).count(),
            open_discharges: pairs.iter().filter(|p| p.admission().is_none()).count(),
        },
        pairs: json_pairs,
    };

    serde_json::to_string_pretty(&report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::EventCategory;
    use chrono::{TimeZone, Utc};
    use insta::assert_snapshot;

    fn event(category: EventCategory, hour: u32) -> Event {
        Event {
            category,
            identifier: "12-AB-xyz".to_string(),
            timestamp: Utc.with_ymd_and_hms(2023, 1, 5, hour, 0, 0).unwrap(),
            timestamp_text: format!("Jan 5 {hour:02}:00:00 2023"),
            raw_line: format!(
                "Jan 5 {hour:02}:00:00 2023 {} 12-AB-xyz",
                category.label()
            ),
        }
    }

    #[test]
    fn renders_matched_pair_line() {
        let pair = Pair::Matched {
            admission: event(EventCategory::Admission, 8),
            discharge: event(EventCategory::Discharge, 9),
        };

        assert_eq!(
            render(&[pair]),
            "Start time: Jan 5 08:00:00 2023, End time: Jan 5 09:00:00 2023, \
             ID: 12-AB-xyz, Start full line: Jan 5 08:00:00 2023 new patient 12-AB-xyz, \
             End full line: Jan 5 09:00:00 2023 patient discharged 12-AB-xyz.\n"
        );
    }

    #[test]
    fn absent_sides_use_placeholder() {
        let pair = Pair::DischargeOnly(event(EventCategory::Discharge, 9));
        let line = render(&[pair]);

        assert!(line.starts_with("Start time:  --- , End time: Jan 5 09:00:00 2023"));
        assert!(line.contains("Start full line:  --- ,"));
    }

    #[test]
    fn line_count_equals_pair_count() {
        let pairs = vec![
            Pair::AdmissionOnly(event(EventCategory::Admission, 8)),
            Pair::DischargeOnly(event(EventCategory::Discharge, 9)),
            Pair::Matched {
                admission: event(EventCategory::Admission, 10),
                discharge: event(EventCategory::Discharge, 11),
            },
        ];

        assert_eq!(render(&pairs).lines().count(), pairs.len());
    }

    #[test]
    fn empty_pairs_render_empty_report() {
        assert_eq!(render(&[]), "");
    }

    #[test]
    fn report_snapshot() {
        let pairs = vec![
            Pair::Matched {
                admission: event(EventCategory::Admission, 8),
                discharge: event(EventCategory::Discharge, 9),
            },
            Pair::AdmissionOnly(event(EventCategory::Admission, 10)),
        ];

        assert_snapshot!(render(&pairs), @r"
        Start time: Jan 5 08:00:00 2023, End time: Jan 5 09:00:00 2023, ID: 12-AB-xyz, Start full line: Jan 5 08:00:00 2023 new patient 12-AB-xyz, End full line: Jan 5 09:00:00 2023 patient discharged 12-AB-xyz.
        Start time: Jan 5 10:00:00 2023, End time:  --- , ID: 12-AB-xyz, Start full line: Jan 5 10:00:00 2023 new patient 12-AB-xyz, End full line:  --- .
        ");
    }

    #[test]
    fn json_report_counts_open_sides() {
        let pairs = vec![
            Pair::Matched {
                admission: event(EventCategory::Admission, 8),
                discharge: event(EventCategory::Discharge, 9),
            },
            Pair::AdmissionOnly(event(EventCategory::Admission, 10)),
            Pair::DischargeOnly(event(EventCategory::Discharge, 11)),
        ];

        let json = render_json(&pairs).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["totals"]["pair_count"], 3);
        assert_eq!(value["totals"]["matched"], 1);
        assert_eq!(value["totals"]["open_admissions"], 1);
        assert_eq!(value["totals"]["open_discharges"], 1);
        assert_eq!(value["pairs"][1]["end_time"], serde_json::Value::Null);
        assert_eq!(value["pairs"][2]["start_line"], serde_json::Value::Null);
    }
}
