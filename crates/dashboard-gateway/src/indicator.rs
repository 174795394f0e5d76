//! Indicator Endpoint Payload
//!
//! The macro endpoint answers `[paging-meta, rows]` with rows newest first
//! and annual figures that may be null for recent years; the first non-null
//! value is the figure of record.

use serde::Deserialize;

#[derive(Clone, Debug, Deserialize)]
pub(crate) struct IndicatorRow {
    #[allow(dead_code)]
    pub date: Option<String>,
    pub value: Option<f64>,
}

pub(crate) fn latest_value(rows: &[IndicatorRow]) -> Option<f64> {
    rows.iter().find_map(|r| r.value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_non_null_wins() {
        let rows: Vec<IndicatorRow> = serde_json::from_str(
            r#"[{"date":"2025","value":null},
                {"date":"2024","value":1390000000000},
                {"date":"2023","value":1320000000000}]"#,
        )
        .unwrap();
        assert_eq!(latest_value(&rows), Some(1_390_000_000_000.0));
    }

    #[test]
    fn all_null_is_unavailable() {
        let rows: Vec<IndicatorRow> =
            serde_json::from_str(r#"[{"date":"2025","value":null}]"#).unwrap();
        assert_eq!(latest_value(&rows), None);
    }
}
