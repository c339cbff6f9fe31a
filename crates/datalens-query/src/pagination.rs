//! Pagination state
//!
//! A [`Paginator`] is a fixed-size, 1-indexed window over a shared table.
//! The current page is always within `1..=total_pages`, and an empty table
//! still has one (empty) page.

use std::sync::Arc;

use datalens_core::{DatalensError, Result, Table};

/// Rows per page unless configured otherwise
pub const DEFAULT_PAGE_SIZE: usize = 5;

/// Outcome of a relative page move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageMove {
    /// The page changed
    Moved,
    /// `next` on the last page; nothing changed
    NoMorePages,
    /// `prev` on the first page; nothing changed
    AlreadyAtFirst,
}

impl PageMove {
    /// Message to show when the move was refused
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::Moved => None,
            Self::NoMorePages => Some("No more pages."),
            Self::AlreadyAtFirst => Some("Already at first page."),
        }
    }
}

/// Pagination state bound to one table
#[derive(Debug, Clone)]
pub struct Paginator {
    table: Arc<Table>,
    /// Records per page, at least 1
    page_size: usize,
    /// Current page number (1-indexed)
    current_page: usize,
}

impl Paginator {
    /// Create a paginator on page 1. Fails if `page_size` is zero.
    pub fn new(table: Arc<Table>, page_size: usize) -> Result<Self> {
        if page_size == 0 {
            return Err(DatalensError::InvalidPageSize(page_size));
        }
        Ok(Self {
            table,
            page_size,
            current_page: 1,
        })
    }

    /// Rebind to another table, keeping the page size and returning to page 1
    pub fn bind(&mut self, table: Arc<Table>) {
        self.table = table;
        self.current_page = 1;
    }

    /// Change the page size and return to page 1
    pub fn set_page_size(&mut self, page_size: usize) -> Result<()> {
        if page_size == 0 {
            return Err(DatalensError::InvalidPageSize(page_size));
        }
        self.page_size = page_size;
        self.current_page = 1;
        Ok(())
    }

    /// Bound table
    pub fn table(&self) -> &Arc<Table> {
        &self.table
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Calculate total number of pages. Never less than 1.
    pub fn total_pages(&self) -> usize {
        let total = self.table.row_count();
        total.div_ceil(self.page_size).max(1)
    }

    /// Index of the first row on the current page
    pub fn offset(&self) -> usize {
        (self.current_page - 1) * self.page_size
    }

    pub fn can_go_next(&self) -> bool {
        self.current_page < self.total_pages()
    }

    pub fn can_go_prev(&self) -> bool {
        self.current_page > 1
    }

    pub fn go_next(&mut self) -> PageMove {
        if self.can_go_next() {
            self.current_page += 1;
            PageMove::Moved
        } else {
            PageMove::NoMorePages
        }
    }

    pub fn go_prev(&mut self) -> PageMove {
        if self.can_go_prev() {
            self.current_page -= 1;
            PageMove::Moved
        } else {
            PageMove::AlreadyAtFirst
        }
    }

    /// Navigate to a specific page, clamped to `1..=total_pages`
    pub fn go_to_page(&mut self, page: usize) {
        self.current_page = page.clamp(1, self.total_pages());
    }

    /// Rows of the current page as a new table (the last page may be short)
    pub fn view(&self) -> Table {
        let start = self.offset();
        self.table.slice(start..start.saturating_add(self.page_size))
    }

    /// `Page i/N | Rows: R`
    pub fn status_text(&self) -> String {
        format!(
            "Page {}/{} | Rows: {}",
            self.current_page,
            self.total_pages(),
            self.table.row_count()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use datalens_core::Value;
    use pretty_assertions::assert_eq;

    fn numbers(count: i64) -> Arc<Table> {
        Arc::new(Table::new(
            vec!["n".to_string()],
            (0..count).map(|n| vec![Value::Int(n)]).collect(),
        ))
    }

    #[test]
    fn total_pages_rounds_up_and_is_at_least_one() {
        assert_eq!(Paginator::new(numbers(0), 5).unwrap().total_pages(), 1);
        assert_eq!(Paginator::new(numbers(5), 5).unwrap().total_pages(), 1);
        assert_eq!(Paginator::new(numbers(6), 5).unwrap().total_pages(), 2);
        assert_eq!(Paginator::new(numbers(3), 1).unwrap().total_pages(), 3);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        assert!(matches!(
            Paginator::new(numbers(3), 0),
            Err(DatalensError::InvalidPageSize(0))
        ));

        let mut pager = Paginator::new(numbers(3), 2).unwrap();
        pager.go_next();
        assert!(pager.set_page_size(0).is_err());
        assert_eq!(pager.page_size(), 2);
        assert_eq!(pager.current_page(), 2);
    }

    #[test]
    fn navigation_stops_at_edges() {
        let mut pager = Paginator::new(numbers(7), 3).unwrap();
        assert_eq!(pager.go_prev(), PageMove::AlreadyAtFirst);
        assert_eq!(pager.go_next(), PageMove::Moved);
        assert_eq!(pager.go_next(), PageMove::Moved);
        assert_eq!(pager.current_page(), 3);
        assert_eq!(pager.go_next(), PageMove::NoMorePages);
        assert_eq!(pager.current_page(), 3);
        assert_eq!(PageMove::NoMorePages.message(), Some("No more pages."));
    }

    #[test]
    fn go_to_page_clamps() {
        let mut pager = Paginator::new(numbers(3), 2).unwrap();
        pager.go_to_page(5);
        assert_eq!(pager.current_page(), 2);
        assert_eq!(pager.status_text(), "Page 2/2 | Rows: 3");
        pager.go_to_page(0);
        assert_eq!(pager.current_page(), 1);
    }

    #[test]
    fn view_is_clipped_to_last_page() {
        let mut pager = Paginator::new(numbers(7), 3).unwrap();
        pager.go_to_page(3);
        let view = pager.view();
        assert_eq!(view.rows(), &[vec![Value::Int(6)]]);
        assert_eq!(view.columns(), &["n".to_string()]);

        let empty = Paginator::new(numbers(0), 3).unwrap();
        assert!(empty.view().is_empty());
    }

    #[test]
    fn bind_and_resize_return_to_first_page() {
        let mut pager = Paginator::new(numbers(10), 2).unwrap();
        pager.go_to_page(4);
        pager.bind(numbers(4));
        assert_eq!(pager.current_page(), 1);
        assert_eq!(pager.page_size(), 2);

        pager.go_next();
        pager.set_page_size(3).unwrap();
        assert_eq!(pager.current_page(), 1);
        assert_eq!(pager.total_pages(), 2);
    }
}
