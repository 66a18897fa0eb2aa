//! Response envelope normalization
//!
//! The backend is inconsistent about how it wraps payloads: the same list
//! endpoint has been observed returning a bare array, `{"data": [...]}`,
//! `{"data": {"data": [...]}}`, and the employee lookup additionally nests
//! under an `employees` key. Rather than branching at every call site, all
//! responses pass through one unwrapping function with a fixed probe order.

use crate::error::ApiError;
use crate::model::Record;

/// Candidate locations for a list payload, probed in priority order:
///
/// 1. the body itself
/// 2. `data`
/// 3. `data.data`
/// 4. `employees`
/// 5. `data.employees`
/// 6. `data.data.employees`
const LIST_PATHS: [&[&str]; 6] = [
    &[],
    &["data"],
    &["data", "data"],
    &["employees"],
    &["data", "employees"],
    &["data", "data", "employees"],
];

/// Extracts the record list from a response body, whatever envelope the
/// backend chose this time.
pub fn unwrap_records(body: serde_json::Value) -> Result<Vec<Record>, ApiError> {
    for path in LIST_PATHS {
        let Some(candidate) = value_at(&body, path) else {
            continue;
        };
        if candidate.is_array() {
            return parse_records(candidate.clone());
        }
    }

    Err(ApiError::parse_with_body(
        "No record array found in response envelope",
        body.to_string(),
    ))
}

/// Extracts a single record from a response body.
///
/// Probes `data.data`, then `data`, then the body itself; the first object
/// found wins. Used for create/update responses, which return the server's
/// copy of the record.
pub fn unwrap_record(body: serde_json::Value) -> Result<Record, ApiError> {
    for path in [&["data", "data"][..], &["data"][..], &[][..]] {
        let Some(candidate) = value_at(&body, path) else {
            continue;
        };
        if candidate.is_object() {
            return serde_json::from_value(candidate.clone())
                .map_err(|e| ApiError::parse(format!("Malformed record in response: {}", e)));
        }
    }

    Err(ApiError::parse_with_body(
        "No record object found in response envelope",
        body.to_string(),
    ))
}

fn value_at<'a>(body: &'a serde_json::Value, path: &[&str]) -> Option<&'a serde_json::Value> {
    let mut current = body;
    for key in path {
        current = current.get(key)?;
    }
    Some(current)
}

fn parse_records(array: serde_json::Value) -> Result<Vec<Record>, ApiError> {
    serde_json::from_value(array)
        .map_err(|e| ApiError::parse(format!("Malformed record in list response: {}", e)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn names(records: &[Record]) -> Vec<String> {
        records
            .iter()
            .filter_map(|r| r.display_text("name"))
            .collect()
    }

    #[test]
    fn test_unwrap_bare_array() {
        let body = json!([{"id": 1, "name": "a"}, {"id": 2, "name": "b"}]);
        let records = unwrap_records(body).unwrap();
        assert_eq!(names(&records), vec!["a", "b"]);
    }

    #[test]
    fn test_unwrap_data() {
        let body = json!({"data": [{"id": 1, "name": "a"}]});
        assert_eq!(unwrap_records(body).unwrap().len(), 1);
    }

    #[test]
    fn test_unwrap_data_data() {
        let body = json!({"data": {"data": [{"id": 1, "name": "a"}]}});
        assert_eq!(unwrap_records(body).unwrap().len(), 1);
    }

    #[test]
    fn test_unwrap_employees() {
        let body = json!({"employees": [{"id": 1, "name": "a"}]});
        assert_eq!(unwrap_records(body).unwrap().len(), 1);
    }

    #[test]
    fn test_unwrap_data_employees() {
        let body = json!({"data": {"employees": [{"id": 1, "name": "a"}]}});
        assert_eq!(unwrap_records(body).unwrap().len(), 1);
    }

    #[test]
    fn test_unwrap_data_data_employees() {
        let body = json!({"data": {"data": {"employees": [{"id": 1, "name": "a"}]}}});
        assert_eq!(unwrap_records(body).unwrap().len(), 1);
    }

    #[test]
    fn test_priority_prefers_outer_shape() {
        // When `data` is itself an array, it wins over deeper nesting.
        let body = json!({"data": [{"id": 1, "name": "outer"}]});
        let records = unwrap_records(body).unwrap();
        assert_eq!(names(&records), vec!["outer"]);
    }

    #[test]
    fn test_unwrap_records_rejects_unknown_shape() {
        let body = json!({"status": "ok"});
        assert!(unwrap_records(body).is_err());
    }

    #[test]
    fn test_unwrap_single_record() {
        let body = json!({"data": {"id": 5, "status": "Approved"}});
        let record = unwrap_record(body).unwrap();
        assert_eq!(record.get_string("status").unwrap(), Some("Approved"));
    }

    #[test]
    fn test_unwrap_single_record_bare_object() {
        let body = json!({"id": 5, "status": "Approved"});
        assert!(unwrap_record(body).is_ok());
    }
}
