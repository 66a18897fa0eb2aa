//! Interaction state for one table instance

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 100;

/// Sort direction for a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Ascending order (A-Z, 0-9). Nulls sort first.
    Asc,
    /// Descending order (Z-A, 9-0). Nulls sort last.
    Desc,
}

impl Direction {
    /// Returns the opposite direction.
    pub fn toggled(self) -> Self {
        match self {
            Direction::Asc => Direction::Desc,
            Direction::Desc => Direction::Asc,
        }
    }
}

/// The mutable interaction state of one table instance: search term, sort
/// key and direction, and current page.
///
/// Each table instance owns its state exclusively; there is no sharing
/// across tables. Mutators enforce the reset rules: any change to the search
/// term, sort, or page size returns to page 1.
#[derive(Debug, Clone)]
pub struct TableState {
    search: String,
    sort: Option<(String, Direction)>,
    page: usize,
    page_size: usize,
}

impl Default for TableState {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort: None,
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl TableState {
    /// Creates state with the default page size.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates state with a custom page size (minimum 1).
    pub fn with_page_size(page_size: usize) -> Self {
        Self {
            page_size: page_size.max(1),
            ..Self::default()
        }
    }

    /// Returns the current search term.
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Returns the active sort key and direction, if any.
    pub fn sort(&self) -> Option<(&str, Direction)> {
        self.sort.as_ref().map(|(field, dir)| (field.as_str(), *dir))
    }

    /// Returns the requested page (1-based; clamping happens at derivation).
    pub fn page(&self) -> usize {
        self.page
    }

    /// Returns the page size.
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Sets the search term. A changed term resets to page 1.
    pub fn set_search(&mut self, term: impl Into<String>) {
        let term = term.into();
        if term != self.search {
            self.search = term;
            self.page = 1;
        }
    }

    /// Handles a click on a column header.
    ///
    /// First click on a column sorts ascending; clicking the active column
    /// toggles direction; clicking a different column makes it the sort key,
    /// ascending. Any change resets to page 1.
    pub fn toggle_sort(&mut self, field: &str) {
        self.sort = match self.sort.take() {
            Some((active, direction)) if active == field => Some((active, direction.toggled())),
            _ => Some((field.to_string(), Direction::Asc)),
        };
        self.page = 1;
    }

    /// Sets the requested page (minimum 1).
    pub fn set_page(&mut self, page: usize) {
        self.page = page.max(1);
    }

    /// Advances to the next page.
    pub fn next_page(&mut self) {
        self.page += 1;
    }

    /// Returns to the previous page.
    pub fn prev_page(&mut self) {
        self.page = self.page.saturating_sub(1).max(1);
    }

    /// Changes the page size (minimum 1) and resets to page 1.
    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
        self.page = 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_change_resets_page() {
        let mut state = TableState::new();
        state.set_page(4);
        state.set_search("june");
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_same_search_keeps_page() {
        let mut state = TableState::new();
        state.set_search("june");
        state.set_page(3);
        state.set_search("june");
        assert_eq!(state.page(), 3);
    }

    #[test]
    fn test_sort_click_sequence() {
        let mut state = TableState::new();

        state.toggle_sort("name");
        assert_eq!(state.sort(), Some(("name", Direction::Asc)));

        state.toggle_sort("name");
        assert_eq!(state.sort(), Some(("name", Direction::Desc)));

        // A different column resets to ascending.
        state.toggle_sort("date");
        assert_eq!(state.sort(), Some(("date", Direction::Asc)));
    }

    #[test]
    fn test_sort_change_resets_page() {
        let mut state = TableState::new();
        state.set_page(4);
        state.toggle_sort("name");
        assert_eq!(state.page(), 1);

        state.set_page(2);
        state.toggle_sort("name"); // toggling direction also resets
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_page_floor_is_one() {
        let mut state = TableState::new();
        state.prev_page();
        assert_eq!(state.page(), 1);
        state.set_page(0);
        assert_eq!(state.page(), 1);
    }

    #[test]
    fn test_page_size_change_resets_page() {
        let mut state = TableState::with_page_size(10);
        state.set_page(5);
        state.set_page_size(25);
        assert_eq!(state.page(), 1);
        assert_eq!(state.page_size(), 25);
    }
}
