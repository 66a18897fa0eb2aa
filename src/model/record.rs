//! Dynamic HR record

use std::collections::HashMap;
use std::fmt;
use std::hash::Hash;
use std::hash::Hasher;

use chrono::DateTime;
use chrono::NaiveDate;
use chrono::Utc;

use super::Value;
use crate::error::FieldError;

/// The unique identifier of a record.
///
/// The backend is inconsistent about id types: some modules return numeric
/// ids, others strings. Equality and hashing go through the canonical string
/// form, so `RecordId::from(7)` equals `RecordId::from("7")`.
#[derive(Debug, Clone)]
pub enum RecordId {
    /// Numeric id.
    Int(i64),
    /// String id.
    Text(String),
}

impl RecordId {
    /// Returns the canonical string form of the id.
    pub fn canonical(&self) -> String {
        match self {
            RecordId::Int(n) => n.to_string(),
            RecordId::Text(s) => s.clone(),
        }
    }
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Int(n) => write!(f, "{}", n),
            RecordId::Text(s) => write!(f, "{}", s),
        }
    }
}

impl PartialEq for RecordId {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (RecordId::Int(a), RecordId::Int(b)) => a == b,
            (RecordId::Text(a), RecordId::Text(b)) => a == b,
            _ => self.canonical() == other.canonical(),
        }
    }
}

impl Eq for RecordId {}

impl Hash for RecordId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Must agree with the string-coercing equality.
        self.canonical().hash(state);
    }
}

impl From<i64> for RecordId {
    fn from(v: i64) -> Self {
        RecordId::Int(v)
    }
}

impl From<i32> for RecordId {
    fn from(v: i32) -> Self {
        RecordId::Int(v as i64)
    }
}

impl From<String> for RecordId {
    fn from(v: String) -> Self {
        RecordId::Text(v)
    }
}

impl From<&str> for RecordId {
    fn from(v: &str) -> Self {
        RecordId::Text(v.to_string())
    }
}

/// A dynamic record from the HR backend.
///
/// Records hold field values as a `HashMap<String, Value>`, allowing dynamic
/// access to any field. Typed getter methods provide safe access with proper
/// error handling. The record's fields are never mutated by the view layer;
/// it only reorders, filters, and slices collections of them.
///
/// # Example
///
/// ```
/// use hrdesk::model::Record;
///
/// // Build a record for a create round-trip
/// let record = Record::new()
///     .set("award_name", "Employee of the Month")
///     .set("gift", "Watch");
///
/// assert_eq!(record.get_string("gift").unwrap(), Some("Watch"));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Record {
    /// The unique identifier, if the record has been persisted.
    pub(crate) id: Option<RecordId>,

    /// The field values.
    pub(crate) fields: HashMap<String, Value>,
}

impl Record {
    /// Creates a new empty record.
    pub fn new() -> Self {
        Self {
            id: None,
            fields: HashMap::new(),
        }
    }

    /// Creates a new record with the given id.
    pub fn with_id(id: impl Into<RecordId>) -> Self {
        Self {
            id: Some(id.into()),
            fields: HashMap::new(),
        }
    }

    /// Returns the record id, if set.
    pub fn id(&self) -> Option<&RecordId> {
        self.id.as_ref()
    }

    /// Sets the record id.
    pub fn set_id(&mut self, id: impl Into<RecordId>) {
        self.id = Some(id.into());
    }

    /// Returns `true` if this record has the given id.
    ///
    /// Records without an id never match.
    pub fn has_id(&self, id: &RecordId) -> bool {
        self.id.as_ref().is_some_and(|own| own == id)
    }

    // =========================================================================
    // Raw field access
    // =========================================================================

    /// Returns a reference to the field value, if it exists.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    /// Returns `true` if the record contains the given field.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// Returns a reference to all fields.
    pub fn fields(&self) -> &HashMap<String, Value> {
        &self.fields
    }

    /// Returns a mutable reference to all fields.
    pub fn fields_mut(&mut self) -> &mut HashMap<String, Value> {
        &mut self.fields
    }

    /// Returns the display string for a field, or `None` when the field is
    /// missing or null. A missing field renders as blank and never matches a
    /// search.
    pub fn display_text(&self, field: &str) -> Option<String> {
        self.fields.get(field).and_then(Value::display_text)
    }

    // =========================================================================
    // Setters
    // =========================================================================

    /// Sets a field value (builder pattern).
    pub fn set(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    /// Inserts a field value.
    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<Value>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Removes a field and returns its value.
    pub fn remove(&mut self, field: &str) -> Option<Value> {
        self.fields.remove(field)
    }

    // =========================================================================
    // Typed getters
    //
    // Return Err if field is missing or wrong type.
    // Return Ok(None) only if the field exists and is Value::Null.
    // =========================================================================

    /// Gets a string field value.
    pub fn get_string(&self, field: &str) -> Result<Option<&str>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(other) => Err(FieldError::wrong_type(
                field,
                "string",
                other.type_name(),
            )),
        }
    }

    /// Gets a boolean field value.
    pub fn get_bool(&self, field: &str) -> Result<Option<bool>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(other) => Err(FieldError::wrong_type(field, "bool", other.type_name())),
        }
    }

    /// Gets an i32 field value.
    pub fn get_int(&self, field: &str) -> Result<Option<i32>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Int(n)) => Ok(Some(*n)),
            Some(other) => Err(FieldError::wrong_type(field, "int", other.type_name())),
        }
    }

    /// Gets an i64 field value.
    pub fn get_long(&self, field: &str) -> Result<Option<i64>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Long(n)) => Ok(Some(*n)),
            Some(Value::Int(n)) => Ok(Some(*n as i64)), // Allow widening
            Some(other) => Err(FieldError::wrong_type(field, "long", other.type_name())),
        }
    }

    /// Gets an f64 field value.
    pub fn get_float(&self, field: &str) -> Result<Option<f64>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Float(n)) => Ok(Some(*n)),
            Some(other) => Err(FieldError::wrong_type(field, "float", other.type_name())),
        }
    }

    /// Gets a date-only field value.
    pub fn get_date(&self, field: &str) -> Result<Option<NaiveDate>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Date(d)) => Ok(Some(*d)),
            Some(other) => Err(FieldError::wrong_type(field, "date", other.type_name())),
        }
    }

    /// Gets a DateTime field value.
    pub fn get_datetime(&self, field: &str) -> Result<Option<DateTime<Utc>>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::DateTime(dt)) => Ok(Some(*dt)),
            Some(other) => Err(FieldError::wrong_type(
                field,
                "datetime",
                other.type_name(),
            )),
        }
    }

    /// Gets a nested Record field value (e.g. an embedded employee object).
    pub fn get_record(&self, field: &str) -> Result<Option<&Record>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Record(r)) => Ok(Some(r.as_ref())),
            Some(other) => Err(FieldError::wrong_type(
                field,
                "record",
                other.type_name(),
            )),
        }
    }

    /// Gets a collection of nested Records.
    pub fn get_records(&self, field: &str) -> Result<Option<&Vec<Record>>, FieldError> {
        match self.fields.get(field) {
            None => Err(FieldError::missing(field)),
            Some(Value::Null) => Ok(None),
            Some(Value::Records(r)) => Ok(Some(r)),
            Some(other) => Err(FieldError::wrong_type(
                field,
                "records",
                other.type_name(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_coerces_to_string_for_equality() {
        assert_eq!(RecordId::from(7), RecordId::from("7"));
        assert_ne!(RecordId::from(7), RecordId::from("07"));
    }

    #[test]
    fn test_typed_getter_missing_field() {
        let record = Record::new();
        assert!(record.get_string("name").is_err());
    }

    #[test]
    fn test_typed_getter_null_field() {
        let record = Record::new().set("remarks", Value::Null);
        assert_eq!(record.get_string("remarks").unwrap(), None);
    }

    #[test]
    fn test_typed_getter_wrong_type() {
        let record = Record::new().set("amount", 100i64);
        let err = record.get_string("amount").unwrap_err();
        assert!(matches!(err, FieldError::WrongType { .. }));
    }

    #[test]
    fn test_has_id() {
        let record = Record::with_id(12);
        assert!(record.has_id(&RecordId::from("12")));
        assert!(!Record::new().has_id(&RecordId::from("12")));
    }
}
