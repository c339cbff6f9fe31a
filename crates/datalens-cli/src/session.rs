//! Session controller
//!
//! Holds the table as loaded, the current (filtered/sorted) table and the
//! paginator bound to it. Commands either succeed completely or leave the
//! session untouched.

use std::sync::Arc;

use datalens_core::{ColumnType, Result, Table};
use datalens_interchange::export_table;
use datalens_query::{Paginator, run_filter, run_sort};

use crate::command::{Command, HELP};

/// What a command produced, for the caller to render
#[derive(Debug, Clone, PartialEq)]
pub enum Response {
    /// Nothing to print
    Nothing,
    /// One or more lines of text
    Message(String),
    /// A table slice followed by a footer line
    Rows { table: Table, footer: String },
    /// Column names with inferred types
    Types(Vec<(String, ColumnType)>),
    /// The argument was missing or malformed; nothing changed
    Usage(&'static str),
    /// The command word was not recognized; nothing changed
    Unknown(String),
    /// The user asked to leave
    Exit,
}

impl Response {
    /// Usage hints and unknown commands are refusals, not errors
    pub fn is_refusal(&self) -> bool {
        matches!(self, Response::Usage(_) | Response::Unknown(_))
    }
}

/// Interactive session state
#[derive(Debug)]
pub struct Session {
    /// Snapshot taken at load time; never modified
    original: Table,
    current: Arc<Table>,
    pager: Paginator,
    /// Page size restored by `reset`
    default_page_size: usize,
}

impl Session {
    /// Start a session on a freshly loaded table
    pub fn new(table: Table, default_page_size: usize) -> Result<Self> {
        let current = Arc::new(table.clone());
        let pager = Paginator::new(Arc::clone(&current), default_page_size)?;
        Ok(Self {
            original: table,
            current,
            pager,
            default_page_size,
        })
    }

    pub fn original(&self) -> &Table {
        &self.original
    }

    pub fn current(&self) -> &Table {
        &self.current
    }

    pub fn pager(&self) -> &Paginator {
        &self.pager
    }

    /// Execute one command against the session
    pub fn execute(&mut self, command: Command) -> Result<Response> {
        let response = match command {
            Command::Empty => Response::Nothing,
            Command::Help => Response::Message(HELP.to_string()),
            Command::Show(None) => Response::Rows {
                table: self.pager.view(),
                footer: self.pager.status_text(),
            },
            Command::Show(Some(n)) => Response::Rows {
                table: self.current.head(n),
                footer: format!("Rows in view: {}", self.current.row_count()),
            },
            Command::Cols => Response::Message(self.current.columns().join(", ")),
            Command::Dtypes => Response::Types(
                self.current
                    .dtypes()
                    .into_iter()
                    .map(|(name, kind)| (name.to_string(), kind))
                    .collect(),
            ),
            Command::Filter(expr) => {
                let filtered = run_filter(&self.current, &expr)?;
                self.replace_current(filtered);
                Response::Message(format!(
                    "Filtered rows: {} (Page {}/{})",
                    self.current.row_count(),
                    self.pager.current_page(),
                    self.pager.total_pages()
                ))
            }
            Command::Sort(expr) => {
                let sorted = run_sort(&self.current, &expr)?;
                self.replace_current(sorted);
                Response::Message("Sorted.".to_string())
            }
            Command::PageSize(size) => {
                self.pager.set_page_size(size)?;
                Response::Message(format!("Page size: {}", self.pager.page_size()))
            }
            Command::Page(page) => {
                self.pager.go_to_page(page);
                Response::Message(self.page_position())
            }
            Command::Next => {
                let moved = self.pager.go_next();
                Response::Message(self.with_position(moved.message()))
            }
            Command::Prev => {
                let moved = self.pager.go_prev();
                Response::Message(self.with_position(moved.message()))
            }
            Command::Export(path) => {
                export_table(&self.current, &path)?;
                Response::Message(format!("Saved visible rows: {}", path.display()))
            }
            Command::ExportPage(path) => {
                export_table(&self.pager.view(), &path)?;
                Response::Message(format!("Saved current page: {}", path.display()))
            }
            Command::Reset => {
                self.reset()?;
                Response::Message(format!(
                    "Reset to original data and default pagesize ({}).",
                    self.default_page_size
                ))
            }
            Command::Exit => Response::Exit,
            Command::Usage(usage) => Response::Usage(usage),
            Command::Unknown(word) => Response::Unknown(word),
        };
        Ok(response)
    }

    /// Restore the loaded table, the default page size and page 1
    pub fn reset(&mut self) -> Result<()> {
        let current = Arc::new(self.original.clone());
        self.pager = Paginator::new(Arc::clone(&current), self.default_page_size)?;
        self.current = current;
        tracing::debug!(rows = self.current.row_count(), "session reset");
        Ok(())
    }

    fn replace_current(&mut self, table: Table) {
        self.current = Arc::new(table);
        self.pager.bind(Arc::clone(&self.current));
    }

    fn page_position(&self) -> String {
        format!(
            "Page {}/{}",
            self.pager.current_page(),
            self.pager.total_pages()
        )
    }

    fn with_position(&self, notice: Option<&str>) -> String {
        match notice {
            Some(notice) => format!("{notice}\n{}", self.page_position()),
            None => self.page_position(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use datalens_core::Value;
    use pretty_assertions::assert_eq;

    fn session() -> Session {
        let table = Table::new(
            vec!["Age".into(), "Dept".into()],
            vec![
                vec![Value::Int(20), "HR".into()],
                vec![Value::Int(30), "IT".into()],
                vec![Value::Int(40), "IT".into()],
            ],
        );
        Session::new(table, 5).unwrap()
    }

    fn message(response: Response) -> String {
        match response {
            Response::Message(text) => text,
            other => panic!("expected a message, got {other:?}"),
        }
    }

    #[test]
    fn filter_reports_rows_and_page() {
        let mut session = session();
        let text = message(
            session
                .execute(Command::Filter("Age>=28,Dept==IT".into()))
                .unwrap(),
        );
        assert_eq!(text, "Filtered rows: 2 (Page 1/1)");
        assert_eq!(session.current().row_count(), 2);
        assert_eq!(session.original().row_count(), 3);
    }

    #[test]
    fn failed_command_changes_nothing() {
        let mut session = session();
        session.execute(Command::PageSize(2)).unwrap();
        session.execute(Command::Next).unwrap();

        assert!(session.execute(Command::Filter("Salary>1".into())).is_err());
        assert!(session.execute(Command::Sort("Age,sideways".into())).is_err());
        assert!(session.execute(Command::PageSize(0)).is_err());

        assert_eq!(session.current(), session.original());
        assert_eq!(session.pager().current_page(), 2);
        assert_eq!(session.pager().page_size(), 2);
    }

    #[test]
    fn next_and_prev_report_edges() {
        let mut session = session();
        assert_eq!(
            message(session.execute(Command::Prev).unwrap()),
            "Already at first page.\nPage 1/1"
        );
        assert_eq!(
            message(session.execute(Command::Next).unwrap()),
            "No more pages.\nPage 1/1"
        );
    }

    #[test]
    fn show_head_and_page() {
        let mut session = session();
        match session.execute(Command::Show(Some(2))).unwrap() {
            Response::Rows { table, footer } => {
                assert_eq!(table.row_count(), 2);
                // The footer counts the whole current table, not just the rows shown
                assert_eq!(footer, "Rows in view: 3");
            }
            other => panic!("unexpected response: {other:?}"),
        }
        match session.execute(Command::Show(None)).unwrap() {
            Response::Rows { table, footer } => {
                assert_eq!(table.row_count(), 3);
                assert_eq!(footer, "Page 1/1 | Rows: 3");
            }
            other => panic!("unexpected response: {other:?}"),
        }
    }

    #[test]
    fn refusals_are_passed_through() {
        let mut session = session();
        let response = session.execute(Command::parse("page x")).unwrap();
        assert_eq!(response, Response::Usage("Usage: page N"));
        assert!(response.is_refusal());
        assert!(session.execute(Command::parse("bogus")).unwrap().is_refusal());
        assert_eq!(session.execute(Command::Exit).unwrap(), Response::Exit);
    }
}
