//! Replication sync windows: deleted and updated record IDs over a date range.
//!
//! The deleted/updated endpoints take `start` and `end` timestamps formatted
//! as `yyyy-MM-dd'T'HH:mm:ssZ` with a numeric zone offset and no fractional
//! seconds. A UTC instant renders as `2014-01-02T00:00:00+0000`, and the `+`
//! must travel as `%2B` in the query string or the service misparses the
//! zone; the colons stay literal.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Strftime pattern for sync-window timestamps. `%z` renders `+0000` for UTC.
pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Format an instant for the `start`/`end` query parameters.
///
/// The result still carries a literal `+`; escape it to `%2B` before
/// splicing into a query string.
pub(crate) fn format_timestamp(instant: &DateTime<Utc>) -> String {
    instant.format(TIMESTAMP_FORMAT).to_string()
}

/// Serde adapter for the sync-window timestamp encoding.
pub(crate) mod timestamp {
    use super::{DateTime, Utc, TIMESTAMP_FORMAT};
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(instant: &DateTime<Utc>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&super::format_timestamp(instant))
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        DateTime::parse_from_str(&raw, TIMESTAMP_FORMAT)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(serde::de::Error::custom)
    }
}

/// One record deleted inside the requested window.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DeletedRecord {
    pub id: String,
    #[serde(rename = "deletedDate", with = "timestamp")]
    pub deleted_date: DateTime<Utc>,
}

/// Deleted-record IDs for a type within a date window, plus the bounds the
/// service actually covered.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GetDeletedResult {
    #[serde(rename = "deletedRecords", default)]
    pub deleted_records: Vec<DeletedRecord>,
    #[serde(rename = "earliestDateAvailable", with = "timestamp")]
    pub earliest_date_available: DateTime<Utc>,
    #[serde(rename = "latestDateCovered", with = "timestamp")]
    pub latest_date_covered: DateTime<Utc>,
}

/// Updated-record IDs for a type within a date window.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct GetUpdatedResult {
    #[serde(default)]
    pub ids: Vec<String>,
    #[serde(rename = "latestDateCovered", with = "timestamp")]
    pub latest_date_covered: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_renders_numeric_utc_offset() {
        let instant = Utc.with_ymd_and_hms(2014, 1, 2, 0, 0, 0).unwrap();
        assert_eq!(format_timestamp(&instant), "2014-01-02T00:00:00+0000");
    }

    #[test]
    fn test_format_carries_literal_plus() {
        let instant = Utc.with_ymd_and_hms(2014, 1, 3, 0, 0, 0).unwrap();
        let formatted = format_timestamp(&instant);
        assert!(formatted.ends_with("+0000"));
        assert_eq!(formatted.replace('+', "%2B"), "2014-01-03T00:00:00%2B0000");
    }

    #[test]
    fn test_deleted_result_deserialization() {
        let result: GetDeletedResult = serde_json::from_str(
            r#"{
                "deletedRecords": [
                    {"id": "001Z000000gFpeGIAS", "deletedDate": "2014-01-02T16:33:19+0000"}
                ],
                "earliestDateAvailable": "2013-11-20T00:00:00+0000",
                "latestDateCovered": "2014-01-02T16:30:00+0000"
            }"#,
        )
        .unwrap();

        assert_eq!(result.deleted_records.len(), 1);
        assert_eq!(result.deleted_records[0].id, "001Z000000gFpeGIAS");
        assert_eq!(
            result.deleted_records[0].deleted_date,
            Utc.with_ymd_and_hms(2014, 1, 2, 16, 33, 19).unwrap()
        );
        assert_eq!(
            result.latest_date_covered,
            Utc.with_ymd_and_hms(2014, 1, 2, 16, 30, 0).unwrap()
        );
    }

    #[test]
    fn test_empty_window_deserializes_to_empty_vec() {
        let result: GetDeletedResult = serde_json::from_str(
            r#"{
                "earliestDateAvailable": "2013-11-20T00:00:00+0000",
                "latestDateCovered": "2014-01-02T16:30:00+0000"
            }"#,
        )
        .unwrap();
        assert!(result.deleted_records.is_empty());
    }

    #[test]
    fn test_non_utc_offset_normalizes_to_utc() {
        let record: DeletedRecord = serde_json::from_str(
            r#"{"id": "001x", "deletedDate": "2014-01-02T18:33:19+0200"}"#,
        )
        .unwrap();
        assert_eq!(
            record.deleted_date,
            Utc.with_ymd_and_hms(2014, 1, 2, 16, 33, 19).unwrap()
        );
    }

    #[test]
    fn test_malformed_date_fails() {
        let result = serde_json::from_str::<DeletedRecord>(
            r#"{"id": "001x", "deletedDate": "2014-01-02"}"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_updated_result_deserialization() {
        let result: GetUpdatedResult = serde_json::from_str(
            r#"{
                "ids": ["001Z000000gFpeGIAS", "001Z000000gFpeHIAS"],
                "latestDateCovered": "2014-01-02T16:30:00+0000"
            }"#,
        )
        .unwrap();
        assert_eq!(result.ids.len(), 2);
    }
}
