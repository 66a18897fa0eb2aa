//! Column declarations for table views

use std::fmt;

use crate::model::Record;

type RenderFn = Box<dyn Fn(&Record) -> String + Send + Sync>;

/// A table's declaration of one displayable field.
///
/// Columns control display and sortability only; the search scan covers
/// every record field regardless of which columns exist.
///
/// # Example
///
/// ```
/// use hrdesk::view::Column;
///
/// let columns = vec![
///     Column::new("award_name", "Award").sortable(),
///     Column::new("employee", "Employee").render(|r| {
///         r.display_text("employee").unwrap_or_default()
///     }),
/// ];
/// ```
pub struct Column {
    key: String,
    label: String,
    sortable: bool,
    render: Option<RenderFn>,
}

impl Column {
    /// Creates a non-sortable column for a field.
    pub fn new(key: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            sortable: false,
            render: None,
        }
    }

    /// Marks the column as sortable.
    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    /// Sets a custom formatter for the column's cells.
    pub fn render(mut self, f: impl Fn(&Record) -> String + Send + Sync + 'static) -> Self {
        self.render = Some(Box::new(f));
        self
    }

    /// Returns the field name this column displays.
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the header label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Returns `true` if the column offers a sort toggle.
    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    /// Renders one cell: the custom formatter when set, otherwise the raw
    /// field's display string. Missing and null fields render blank.
    pub fn display(&self, record: &Record) -> String {
        match &self.render {
            Some(f) => f(record),
            None => record.display_text(&self.key).unwrap_or_default(),
        }
    }
}

impl fmt::Debug for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("label", &self.label)
            .field("sortable", &self.sortable)
            .field("render", &self.render.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_falls_back_to_raw_value() {
        let column = Column::new("month", "Month");
        let record = Record::new().set("month", "June");
        assert_eq!(column.display(&record), "June");
    }

    #[test]
    fn test_display_blank_for_missing_field() {
        let column = Column::new("gift", "Gift");
        assert_eq!(column.display(&Record::new()), "");
    }

    #[test]
    fn test_custom_render() {
        let column = Column::new("cash_price", "Cash Price")
            .render(|r| format!("${}", r.display_text("cash_price").unwrap_or_default()));
        let record = Record::new().set("cash_price", 1500i64);
        assert_eq!(column.display(&record), "$1500");
    }
}
