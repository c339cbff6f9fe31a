//! datalens query engine
//!
//! Turns short textual expressions into table transforms:
//!
//! ```text
//! Table → filter ("Age>=28,Dept==IT") → sort ("Age,desc") → Paginator → display | export
//! ```
//!
//! Every transform is a pure function from `(&Table, &str)` to a new `Table`;
//! only the [`Paginator`] carries state between commands.
//!
//! # Example
//!
//! ```rust,ignore
//! let filtered = run_filter(&table, "Age>=28,Dept==IT")?;
//! let sorted = run_sort(&filtered, "Age,desc")?;
//! let mut pager = Paginator::new(Arc::new(sorted), DEFAULT_PAGE_SIZE)?;
//! let first_page = pager.view();
//! ```

mod coercion;
mod evaluator;
mod filter;
mod filter_types;
mod pagination;
mod sorting;

pub use coercion::coerce_value;
pub use evaluator::{SelectionMask, evaluate};
pub use filter::{parse_filter_expression, run_filter};
pub use filter_types::{FilterCondition, FilterOperator, SortCriterion, SortDirection};
pub use pagination::{DEFAULT_PAGE_SIZE, PageMove, Paginator};
pub use sorting::{MultiColumnSort, NullPosition, SortColumn, parse_sort_expression, run_sort};
