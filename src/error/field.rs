//! Field access errors
//!
//! The dynamic field map on [`Record`](crate::model::Record) makes every
//! typed access fallible: the backend may never have sent the field, or may
//! have sent a different type than the screen expects (a numeric id one day,
//! a string the next). The getters distinguish the two so forms can tell a
//! blank from a malformed record.

/// Error returned by [`Record`](crate::model::Record)'s typed getters.
#[derive(Debug, Clone, thiserror::Error)]
pub enum FieldError {
    /// The record has no such field.
    #[error("Record has no field '{field}'")]
    Missing { field: String },

    /// The field is present but holds a different type.
    #[error("Field '{field}' holds {actual}, expected {expected}")]
    WrongType {
        field: String,
        expected: &'static str,
        actual: &'static str,
    },
}

impl FieldError {
    /// Creates a missing-field error.
    pub fn missing(field: impl Into<String>) -> Self {
        Self::Missing {
            field: field.into(),
        }
    }

    /// Creates a wrong-type error.
    pub fn wrong_type(field: impl Into<String>, expected: &'static str, actual: &'static str) -> Self {
        Self::WrongType {
            field: field.into(),
            expected,
            actual,
        }
    }

    /// Returns the name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            Self::Missing { field } => field,
            Self::WrongType { field, .. } => field,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_field() {
        let missing = FieldError::missing("gift");
        assert_eq!(missing.to_string(), "Record has no field 'gift'");
        assert_eq!(missing.field(), "gift");

        let wrong = FieldError::wrong_type("cash_price", "float", "string");
        assert_eq!(
            wrong.to_string(),
            "Field 'cash_price' holds string, expected float"
        );
        assert_eq!(wrong.field(), "cash_price");
    }
}
