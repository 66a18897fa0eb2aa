//! Custom serialization for Record to match the backend's JSON shape.
//!
//! ## Write Format (Serialization)
//!
//! When serializing a Record for create/update operations:
//! - The id, when set, serializes as `"id": 7` or `"id": "7"` matching its
//!   original type.
//! - Regular fields serialize normally: `"award_name": "Best Performer"`.
//! - Null fields are skipped (the backend treats absent and null alike).
//!
//! ## Read Format (Deserialization)
//!
//! When deserializing from backend responses:
//! - `"id"` may be a number or a string; both become [`RecordId`].
//! - Date-looking strings (`YYYY-MM-DD`) become [`Value::Date`], RFC 3339
//!   strings become [`Value::DateTime`].
//! - Objects become nested [`Record`]s, arrays of objects become
//!   [`Value::Records`]. Anything else falls back to [`Value::Json`].

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::ser::SerializeMap;

use super::Record;
use super::RecordId;
use super::Value;

// =============================================================================
// Serialization (for writes)
// =============================================================================

impl Serialize for Record {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(None)?;

        if let Some(id) = &self.id {
            match id {
                RecordId::Int(n) => map.serialize_entry("id", n)?,
                RecordId::Text(s) => map.serialize_entry("id", s)?,
            }
        }

        for (key, value) in &self.fields {
            if value.is_null() {
                // Skip null values in serialization
                continue;
            }
            map.serialize_entry(key, value)?;
        }

        map.end()
    }
}

// =============================================================================
// Deserialization (from reads)
// =============================================================================

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let map = serde_json::Map::deserialize(deserializer)?;
        Ok(record_from_map(map))
    }
}

/// Builds a Record from a JSON object, pulling out the `id` key.
pub(crate) fn record_from_map(map: serde_json::Map<String, serde_json::Value>) -> Record {
    let mut record = Record::new();

    for (key, value) in map {
        if key == "id" {
            match value {
                serde_json::Value::Number(n) => {
                    if let Some(i) = n.as_i64() {
                        record.id = Some(RecordId::Int(i));
                    } else {
                        record.id = Some(RecordId::Text(n.to_string()));
                    }
                }
                serde_json::Value::String(s) => {
                    record.id = Some(RecordId::Text(s));
                }
                // A null or malformed id is treated as absent; the record is
                // still displayed, keyed by index at the rendering layer.
                _ => {}
            }
            continue;
        }

        record.fields.insert(key, json_value_to_value(value));
    }

    record
}

/// Converts a serde_json::Value to our Value enum.
fn json_value_to_value(json: serde_json::Value) -> Value {
    match json {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                if i >= i32::MIN as i64 && i <= i32::MAX as i64 {
                    Value::Int(i as i32)
                } else {
                    Value::Long(i)
                }
            } else if let Some(f) = n.as_f64() {
                Value::Float(f)
            } else {
                Value::Json(serde_json::Value::Number(n))
            }
        }
        serde_json::Value::String(s) => {
            // Try to parse as a date-only string (the backend's usual format)
            if let Ok(date) = chrono::NaiveDate::parse_from_str(&s, "%Y-%m-%d") {
                Value::Date(date)
            }
            // Try to parse as DateTime (ISO 8601)
            else if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(&s) {
                Value::DateTime(dt.with_timezone(&chrono::Utc))
            }
            // Otherwise keep as string
            else {
                Value::String(s)
            }
        }
        serde_json::Value::Array(arr) => {
            // An array of objects is a nested record collection
            if !arr.is_empty() && arr.iter().all(|v| v.is_object()) {
                let records = arr
                    .into_iter()
                    .filter_map(|v| match v {
                        serde_json::Value::Object(obj) => Some(record_from_map(obj)),
                        _ => None,
                    })
                    .collect();
                Value::Records(records)
            } else {
                Value::Json(serde_json::Value::Array(arr))
            }
        }
        serde_json::Value::Object(obj) => Value::Record(Box::new(record_from_map(obj))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serialize_simple_fields() {
        let record = Record::new()
            .set("award_name", "Best Performer")
            .set("cash_price", 1_500i64);

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"award_name\":\"Best Performer\""));
        assert!(json.contains("\"cash_price\":1500"));
    }

    #[test]
    fn test_serialize_skips_null_fields() {
        let record = Record::new().set("gift", Value::Null).set("month", "June");

        let json = serde_json::to_string(&record).unwrap();
        assert!(!json.contains("gift"));
        assert!(json.contains("\"month\":\"June\""));
    }

    #[test]
    fn test_serialize_id_keeps_type() {
        let numeric = Record::with_id(7).set("status", "Pending");
        assert!(serde_json::to_string(&numeric).unwrap().contains("\"id\":7"));

        let text = Record::with_id("a1b2").set("status", "Pending");
        assert!(
            serde_json::to_string(&text)
                .unwrap()
                .contains("\"id\":\"a1b2\"")
        );
    }

    #[test]
    fn test_deserialize_simple_fields() {
        let json = r#"{"id": 3, "complaint_title": "Overtime dispute", "open": true}"#;
        let record: Record = serde_json::from_str(json).unwrap();

        assert_eq!(record.id(), Some(&RecordId::Int(3)));
        assert_eq!(
            record.get_string("complaint_title").unwrap(),
            Some("Overtime dispute")
        );
        assert_eq!(record.get_bool("open").unwrap(), Some(true));
    }

    #[test]
    fn test_deserialize_string_id() {
        let json = r#"{"id": "42", "status": "Approved"}"#;
        let record: Record = serde_json::from_str(json).unwrap();

        // String-coerced equality makes "42" match 42.
        assert!(record.has_id(&RecordId::from(42)));
    }

    #[test]
    fn test_deserialize_date_string() {
        let json = r#"{"resignation_date": "2025-03-14"}"#;
        let record: Record = serde_json::from_str(json).unwrap();

        let date = record.get_date("resignation_date").unwrap().unwrap();
        assert_eq!(date.to_string(), "2025-03-14");
    }

    #[test]
    fn test_deserialize_nested_employee() {
        let json = r#"{
            "id": 9,
            "employee": {"id": 21, "first_name": "Amira", "last_name": "Haddad"}
        }"#;
        let record: Record = serde_json::from_str(json).unwrap();

        let employee = record.get_record("employee").unwrap().unwrap();
        assert_eq!(employee.get_string("first_name").unwrap(), Some("Amira"));
        assert_eq!(employee.id(), Some(&RecordId::Int(21)));
    }

    #[test]
    fn test_deserialize_array_of_objects() {
        let json = r#"{"approvals": [{"step": 1}, {"step": 2}]}"#;
        let record: Record = serde_json::from_str(json).unwrap();

        let approvals = record.get_records("approvals").unwrap().unwrap();
        assert_eq!(approvals.len(), 2);
    }

    #[test]
    fn test_deserialize_missing_id_is_displayed() {
        let json = r#"{"warning_title": "Late arrival"}"#;
        let record: Record = serde_json::from_str(json).unwrap();

        assert_eq!(record.id(), None);
        assert_eq!(
            record.display_text("warning_title"),
            Some("Late arrival".to_string())
        );
    }
}
