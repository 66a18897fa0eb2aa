//! Client-side form validation
//!
//! Each module's add/edit dialog supplies its own field rules as simple
//! predicates; the validator runs them all and reports every failing field
//! so the form can highlight them at once.

use super::Record;
use super::Value;
use crate::error::FieldValidationError;
use crate::error::ValidationError;

type Predicate = Box<dyn Fn(Option<&Value>) -> bool + Send + Sync>;

struct Rule {
    field: String,
    message: String,
    check: Predicate,
}

/// Validates a record against caller-supplied field rules.
///
/// # Example
///
/// ```
/// use hrdesk::model::{FormValidator, Record, Value};
///
/// let validator = FormValidator::new()
///     .required("employee_id")
///     .required("award_name")
///     .rule("cash_price", "Cash price must be positive", |value| {
///         value.and_then(Value::as_f64).is_none_or(|n| n > 0.0)
///     });
///
/// let draft = Record::new().set("award_name", "Top Seller");
/// let err = validator.validate(&draft).unwrap_err();
/// assert_eq!(err.errors.len(), 1);
/// ```
#[derive(Default)]
pub struct FormValidator {
    rules: Vec<Rule>,
}

impl FormValidator {
    /// Creates a validator with no rules.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requires the field to be present, non-null, and non-blank.
    pub fn required(self, field: impl Into<String>) -> Self {
        let field = field.into();
        let message = format!("{} is required", field);
        self.rule(field, message, |value| match value {
            None | Some(Value::Null) => false,
            Some(Value::String(s)) => !s.trim().is_empty(),
            Some(_) => true,
        })
    }

    /// Adds a rule with a custom predicate.
    ///
    /// The predicate receives the field's value (`None` when absent) and
    /// returns `true` when the value is acceptable.
    pub fn rule(
        mut self,
        field: impl Into<String>,
        message: impl Into<String>,
        check: impl Fn(Option<&Value>) -> bool + Send + Sync + 'static,
    ) -> Self {
        self.rules.push(Rule {
            field: field.into(),
            message: message.into(),
            check: Box::new(check),
        });
        self
    }

    /// Runs every rule against the record.
    ///
    /// Collects all failures rather than stopping at the first.
    pub fn validate(&self, record: &Record) -> Result<(), ValidationError> {
        let errors: Vec<FieldValidationError> = self
            .rules
            .iter()
            .filter(|rule| !(rule.check)(record.get(&rule.field)))
            .map(|rule| FieldValidationError::new(&rule.field, &rule.message))
            .collect();

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationError::new(errors))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_missing_and_blank() {
        let validator = FormValidator::new().required("reason");

        assert!(validator.validate(&Record::new()).is_err());
        assert!(
            validator
                .validate(&Record::new().set("reason", "   "))
                .is_err()
        );
        assert!(
            validator
                .validate(&Record::new().set("reason", "Relocation"))
                .is_ok()
        );
    }

    #[test]
    fn test_collects_every_failure() {
        let validator = FormValidator::new()
            .required("employee_id")
            .required("transfer_date")
            .rule("department", "Department must be set", |v| v.is_some());

        let err = validator.validate(&Record::new()).unwrap_err();
        assert_eq!(err.errors.len(), 3);
        assert_eq!(
            err.message_for("transfer_date"),
            Some("transfer_date is required")
        );
    }

    #[test]
    fn test_custom_predicate() {
        let validator = FormValidator::new().rule("amount", "Amount must be positive", |v| {
            v.and_then(Value::as_f64).is_none_or(|n| n > 0.0)
        });

        assert!(
            validator
                .validate(&Record::new().set("amount", -5i64))
                .is_err()
        );
        assert!(
            validator
                .validate(&Record::new().set("amount", 250i64))
                .is_ok()
        );
    }
}
