//! Table view derivation: filter, sort, paginate
//!
//! The view is a pure function of `(records, state)`: it is re-derived from
//! scratch on every call and never holds hidden state, so identical inputs
//! always produce identical output. The records themselves are borrowed for
//! display and never mutated.

use std::cmp::Ordering;
use std::fmt;

use super::Column;
use super::Direction;
use super::TableState;
use crate::model::Record;

/// A table view-model: column declarations plus interaction state.
///
/// Every list screen binds one of these to its own columns and record type.
///
/// # Example
///
/// ```
/// use hrdesk::model::Record;
/// use hrdesk::view::{Column, Table};
///
/// let mut table = Table::new(vec![
///     Column::new("award_name", "Award").sortable(),
///     Column::new("month", "Month").sortable(),
/// ]);
///
/// let records = vec![
///     Record::with_id(1).set("award_name", "Top Seller").set("month", "June"),
///     Record::with_id(2).set("award_name", "Best Attendance").set("month", "May"),
/// ];
///
/// table.sort_by("award_name");
/// let view = table.view(&records);
/// assert_eq!(view.rows[0].display_text("award_name").as_deref(), Some("Best Attendance"));
/// assert_eq!(view.summary.to_string(), "Showing 1-2 of 2");
/// ```
pub struct Table {
    columns: Vec<Column>,
    state: TableState,
}

impl Table {
    /// Creates a table with the default page size of 100.
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            state: TableState::new(),
        }
    }

    /// Creates a table with a custom page size.
    pub fn with_page_size(columns: Vec<Column>, page_size: usize) -> Self {
        Self {
            columns,
            state: TableState::with_page_size(page_size),
        }
    }

    /// Returns the column declarations.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// Returns the current interaction state.
    pub fn state(&self) -> &TableState {
        &self.state
    }

    /// Updates the search term (resets to page 1 on change).
    pub fn search(&mut self, term: impl Into<String>) {
        self.state.set_search(term);
    }

    /// Handles a header click on the column with the given key.
    ///
    /// Clicks on unknown or non-sortable columns are ignored.
    pub fn sort_by(&mut self, key: &str) {
        let sortable = self
            .columns
            .iter()
            .any(|c| c.key() == key && c.is_sortable());
        if sortable {
            self.state.toggle_sort(key);
        }
    }

    /// Jumps to the given page.
    pub fn goto_page(&mut self, page: usize) {
        self.state.set_page(page);
    }

    /// Advances to the next page.
    pub fn next_page(&mut self) {
        self.state.next_page();
    }

    /// Returns to the previous page.
    pub fn prev_page(&mut self) {
        self.state.prev_page();
    }

    /// Derives what the user currently sees from the full record set.
    pub fn view<'a>(&self, records: &'a [Record]) -> TableView<'a> {
        derive_view(records, &self.state)
    }
}

/// The visible slice of a table plus its pagination metadata.
#[derive(Debug)]
pub struct TableView<'a> {
    /// The records on the current page, filtered and sorted.
    pub rows: Vec<&'a Record>,
    /// The effective page, clamped to `[1, total_pages]`.
    pub page: usize,
    /// Total pages over the filtered set; at least 1 even when empty.
    pub total_pages: usize,
    /// Number of records after filtering.
    pub total: usize,
    /// The "Showing X-Y of Z" line.
    pub summary: Summary,
    /// Page-selector entries: at most 5 numbers and 2 gaps.
    pub pages: Vec<PageEntry>,
    /// Whether the previous control is enabled.
    pub has_prev: bool,
    /// Whether the next control is enabled.
    pub has_next: bool,
}

/// The range summary shown in the pagination footer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    /// 1-based index of the first visible record; 0 when the set is empty.
    pub from: usize,
    /// 1-based index of the last visible record.
    pub to: usize,
    /// Number of records after filtering.
    pub total: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Showing {}-{} of {}", self.from, self.to, self.total)
    }
}

/// One entry in the page selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageEntry {
    /// A clickable page number.
    Page(usize),
    /// An ellipsis; clicking it does nothing.
    Gap,
}

/// Derives the visible slice and pagination metadata for a record set.
///
/// This is the full pipeline: filter by the search term, sort by the active
/// column, clamp the requested page to the shrunken result set, slice.
pub fn derive_view<'a>(records: &'a [Record], state: &TableState) -> TableView<'a> {
    let mut rows = filter(records, state.search());

    if let Some((field, direction)) = state.sort() {
        sort_rows(&mut rows, field, direction);
    }

    let total = rows.len();
    let page_size = state.page_size();
    let total_pages = total.div_ceil(page_size).max(1);

    // A page left dangling past the end (e.g. after filtering shrank the
    // set) clamps down to the last page.
    let page = state.page().min(total_pages);

    let offset = (page - 1) * page_size;
    let to = (offset + page_size).min(total);
    let rows: Vec<&'a Record> = rows.drain(offset..to).collect();

    TableView {
        rows,
        page,
        total_pages,
        total,
        summary: Summary {
            from: (offset + 1).min(total),
            to,
            total,
        },
        pages: page_numbers(page, total_pages),
        has_prev: page > 1,
        has_next: page < total_pages,
    }
}

/// Returns the records matching a search term.
///
/// An empty term matches everything. Otherwise a record matches when at
/// least one field's display string contains the term, case-insensitively.
/// The scan covers every field on the record, not just the ones a table
/// displays, so a search can match a field no column renders. Null and
/// absent fields never match.
pub fn filter<'a>(records: &'a [Record], term: &str) -> Vec<&'a Record> {
    if term.is_empty() {
        return records.iter().collect();
    }

    let needle = term.to_lowercase();
    records
        .iter()
        .filter(|record| {
            record.fields().values().any(|value| {
                value
                    .display_text()
                    .is_some_and(|text| text.to_lowercase().contains(&needle))
            })
        })
        .collect()
}

/// Sorts rows by a field, stably.
///
/// Null and absent values sort first in ascending order and last in
/// descending order, regardless of type. Ties keep their relative order.
pub fn sort_rows(rows: &mut [&Record], field: &str, direction: Direction) {
    rows.sort_by(|a, b| {
        let a_value = a.get(field).filter(|v| !v.is_null());
        let b_value = b.get(field).filter(|v| !v.is_null());

        let ordering = match (a_value, b_value) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => Ordering::Less,
            (Some(_), None) => Ordering::Greater,
            (Some(a), Some(b)) => a.cmp_for_sort(b),
        };

        match direction {
            Direction::Asc => ordering,
            Direction::Desc => ordering.reverse(),
        }
    });
}

/// Computes the page-selector entries for the current page.
///
/// Up to 5 pages are listed in full. Beyond that the window shows the first
/// page, the last page, and the neighborhood of the current page, with gaps
/// for the elided ranges; never more than 7 entries total.
pub fn page_numbers(page: usize, total_pages: usize) -> Vec<PageEntry> {
    use PageEntry::Gap;
    use PageEntry::Page;

    if total_pages <= 5 {
        (1..=total_pages).map(Page).collect()
    } else if page <= 3 {
        vec![Page(1), Page(2), Page(3), Page(4), Gap, Page(total_pages)]
    } else if page >= total_pages - 2 {
        vec![
            Page(1),
            Gap,
            Page(total_pages - 3),
            Page(total_pages - 2),
            Page(total_pages - 1),
            Page(total_pages),
        ]
    } else {
        vec![
            Page(1),
            Gap,
            Page(page - 1),
            Page(page),
            Page(page + 1),
            Gap,
            Page(total_pages),
        ]
    }
}
