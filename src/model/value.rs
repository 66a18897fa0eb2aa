//! Value enum for dynamic field values

use std::cmp::Ordering;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;
use serde::Serialize;

/// A dynamic value that can hold any field type the HR backend returns.
///
/// Used in [`Record`](super::Record) to store field values dynamically.
///
/// # Example
///
/// ```
/// use hrdesk::model::Value;
///
/// let name = Value::from("Service Excellence");
/// let amount = Value::from(1_500i64);
/// let approved = Value::from(true);
/// let empty = Value::Null;
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Null/empty value.
    Null,
    /// Boolean value.
    Bool(bool),
    /// 32-bit integer.
    Int(i32),
    /// 64-bit integer.
    Long(i64),
    /// 64-bit floating point.
    Float(f64),
    /// String value.
    String(String),
    /// Date-only value (e.g. an effective date).
    Date(NaiveDate),
    /// Date and time with timezone.
    DateTime(DateTime<Utc>),
    /// Nested record (e.g. an embedded employee object).
    Record(Box<super::Record>),
    /// Collection of nested records.
    Records(Vec<super::Record>),
    /// Fallback for unrecognized JSON values.
    Json(serde_json::Value),
}

impl Value {
    /// Returns `true` if this is a null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the type name of this value.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Long(_) => "long",
            Value::Float(_) => "float",
            Value::String(_) => "string",
            Value::Date(_) => "date",
            Value::DateTime(_) => "datetime",
            Value::Record(_) => "record",
            Value::Records(_) => "records",
            Value::Json(_) => "json",
        }
    }

    /// Returns the display string for this value, or `None` for null.
    ///
    /// This is the text the table renders when no custom formatter is set,
    /// and the text the search scan matches against. Nested records expose
    /// their own field values, joined in field-name order so the output is
    /// deterministic.
    pub fn display_text(&self) -> Option<String> {
        match self {
            Value::Null => None,
            Value::Bool(b) => Some(b.to_string()),
            Value::Int(n) => Some(n.to_string()),
            Value::Long(n) => Some(n.to_string()),
            Value::Float(n) => Some(n.to_string()),
            Value::String(s) => Some(s.clone()),
            Value::Date(d) => Some(d.format("%Y-%m-%d").to_string()),
            Value::DateTime(dt) => Some(dt.to_rfc3339()),
            Value::Record(r) => Some(record_text(r)),
            Value::Records(rs) => {
                let parts: Vec<String> = rs.iter().map(|r| record_text(r)).collect();
                Some(parts.join(" "))
            }
            Value::Json(j) => match j {
                serde_json::Value::String(s) => Some(s.clone()),
                other => Some(other.to_string()),
            },
        }
    }

    /// Returns the numeric value as `f64`, if this is any numeric variant.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Long(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Compares two non-null values for column sorting.
    ///
    /// Values rank by type class first (booleans, then numbers, then dates,
    /// then strings, then everything else), then within the class: strings
    /// compare case-insensitively, numeric variants by value across
    /// `Int`/`Long`/`Float`, dates and timestamps chronologically. The class
    /// ranking keeps the ordering total when a column's values mix types, as
    /// the inconsistent backend sometimes sends.
    pub fn cmp_for_sort(&self, other: &Value) -> Ordering {
        let by_class = self.type_class().cmp(&other.type_class());
        if by_class != Ordering::Equal {
            return by_class;
        }
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::String(a), Value::String(b)) => a.to_lowercase().cmp(&b.to_lowercase()),
            _ => {
                if let (Some(a), Some(b)) = (self.as_f64(), other.as_f64()) {
                    return a.partial_cmp(&b).unwrap_or(Ordering::Equal);
                }
                if let (Some(a), Some(b)) = (self.as_instant(), other.as_instant()) {
                    return a.cmp(&b);
                }
                let a = self.display_text().unwrap_or_default().to_lowercase();
                let b = other.display_text().unwrap_or_default().to_lowercase();
                a.cmp(&b)
            }
        }
    }

    /// Ranks values into comparison classes, so cross-type comparisons agree
    /// with within-type comparisons and the sort order stays total.
    fn type_class(&self) -> u8 {
        match self {
            Value::Null => 0,
            Value::Bool(_) => 1,
            Value::Int(_) | Value::Long(_) | Value::Float(_) => 2,
            Value::Date(_) | Value::DateTime(_) => 3,
            Value::String(_) => 4,
            Value::Record(_) | Value::Records(_) | Value::Json(_) => 5,
        }
    }

    /// Returns the value as a UTC instant, if this is a date or timestamp.
    /// Date-only values count from midnight.
    fn as_instant(&self) -> Option<DateTime<Utc>> {
        match self {
            Value::Date(d) => d.and_hms_opt(0, 0, 0).map(|t| t.and_utc()),
            Value::DateTime(dt) => Some(*dt),
            _ => None,
        }
    }
}

/// Joins a record's field display strings, in field-name order.
fn record_text(record: &super::Record) -> String {
    let mut keys: Vec<&String> = record.fields().keys().collect();
    keys.sort();
    let parts: Vec<String> = keys
        .into_iter()
        .filter_map(|k| record.get(k).and_then(Value::display_text))
        .collect();
    parts.join(" ")
}

// =============================================================================
// From implementations
// =============================================================================

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Long(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<NaiveDate> for Value {
    fn from(v: NaiveDate) -> Self {
        Value::Date(v)
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(v: DateTime<Utc>) -> Self {
        Value::DateTime(v)
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Value::Json(v)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        match v {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}

impl Default for Value {
    fn default() -> Self {
        Value::Null
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Record;

    #[test]
    fn test_display_text_scalars() {
        assert_eq!(Value::Null.display_text(), None);
        assert_eq!(Value::from(true).display_text(), Some("true".to_string()));
        assert_eq!(Value::from(42i32).display_text(), Some("42".to_string()));
        assert_eq!(
            Value::from("Bonus").display_text(),
            Some("Bonus".to_string())
        );
    }

    #[test]
    fn test_display_text_nested_record() {
        let employee = Record::new()
            .set("first_name", "Jordan")
            .set("last_name", "Reyes");
        let value = Value::Record(Box::new(employee));

        // Field-name order: first_name before last_name.
        assert_eq!(value.display_text(), Some("Jordan Reyes".to_string()));
    }

    #[test]
    fn test_cmp_numeric_across_variants() {
        assert_eq!(
            Value::Int(3).cmp_for_sort(&Value::Float(3.5)),
            Ordering::Less
        );
        assert_eq!(
            Value::Long(10).cmp_for_sort(&Value::Int(10)),
            Ordering::Equal
        );
    }

    #[test]
    fn test_cmp_strings_case_insensitive() {
        assert_eq!(
            Value::from("apple").cmp_for_sort(&Value::from("Banana")),
            Ordering::Less
        );
        assert_eq!(
            Value::from("HR").cmp_for_sort(&Value::from("hr")),
            Ordering::Equal
        );
    }

    #[test]
    fn test_cmp_mixed_types_rank_by_class() {
        // Numbers rank before strings, whatever the string looks like.
        assert_eq!(
            Value::Int(2).cmp_for_sort(&Value::from("10 days")),
            Ordering::Less
        );
        assert_eq!(
            Value::from("zz").cmp_for_sort(&Value::Float(9999.0)),
            Ordering::Greater
        );
    }

    #[test]
    fn test_cmp_mixed_types_is_transitive() {
        // 2 < 10 numerically and 10 < "1z" by class; 2 < "1z" must follow,
        // or a mixed column would sort order-dependently.
        let two = Value::Int(2);
        let ten = Value::Int(10);
        let text = Value::from("1z");

        assert_eq!(two.cmp_for_sort(&ten), Ordering::Less);
        assert_eq!(ten.cmp_for_sort(&text), Ordering::Less);
        assert_eq!(two.cmp_for_sort(&text), Ordering::Less);
    }

    #[test]
    fn test_cmp_date_and_datetime_share_a_class() {
        let date = Value::from(chrono::NaiveDate::from_ymd_opt(2025, 3, 14).unwrap());
        let later = Value::DateTime(
            chrono::DateTime::parse_from_rfc3339("2025-03-14T09:00:00Z")
                .unwrap()
                .with_timezone(&chrono::Utc),
        );
        assert_eq!(date.cmp_for_sort(&later), Ordering::Less);
        assert_eq!(later.cmp_for_sort(&date), Ordering::Greater);
    }
}
