//! Command parsing
//!
//! A line is a command word followed by an optional argument (the rest of the
//! line, trimmed). The command word is matched case-insensitively.

use std::path::PathBuf;

pub const HELP: &str = "\
Commands:
  help                      Show help
  show [N]                  Show current page (or top N rows)
  cols                      List columns
  dtypes                    Show data types
  filter <cond>[,<cond>...] Apply filters (AND); operators: == != >= <= > < ~
  sort <col>[,asc|desc]     Sort rows; chain keys with ';'
  pagesize N                Set rows per page
  page N                    Jump to page
  next                      Next page
  prev                      Previous page
  export <file>             Export all visible rows (filtered/sorted)
  export_page <file>        Export only current page
  reset                     Reset data + pagesize + page
  exit                      Quit program";

/// A parsed input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Help,
    /// Current page, or the first N rows of the current table
    Show(Option<usize>),
    Cols,
    Dtypes,
    Filter(String),
    Sort(String),
    PageSize(usize),
    Page(usize),
    Next,
    Prev,
    /// Export the whole current table
    Export(PathBuf),
    /// Export only the current page
    ExportPage(PathBuf),
    Reset,
    Exit,
    /// Argument missing or malformed; carries the usage hint
    Usage(&'static str),
    /// Unrecognized command word
    Unknown(String),
    /// Blank line
    Empty,
}

impl Command {
    /// Parse a line of input into a command.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Command::Empty;
        }

        let (word, arg) = match trimmed.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (trimmed, ""),
        };

        match word.to_lowercase().as_str() {
            "help" => Command::Help,
            "show" if arg.is_empty() => Command::Show(None),
            "show" => parse_count(arg)
                .map(|n| Command::Show(Some(n)))
                .unwrap_or(Command::Usage("Usage: show [N]")),
            "cols" => Command::Cols,
            "dtypes" => Command::Dtypes,
            "filter" => with_text(arg, Command::Filter, "Usage: filter <cond>[,<cond>...]"),
            "sort" => with_text(arg, Command::Sort, "Usage: sort <col>[,asc|desc]"),
            "pagesize" => parse_count(arg)
                .map(Command::PageSize)
                .unwrap_or(Command::Usage("Usage: pagesize N")),
            "page" => parse_count(arg)
                .map(Command::Page)
                .unwrap_or(Command::Usage("Usage: page N")),
            "next" => Command::Next,
            "prev" => Command::Prev,
            "export" => with_text(
                arg,
                |path| Command::Export(PathBuf::from(path)),
                "Usage: export <file>",
            ),
            "export_page" => with_text(
                arg,
                |path| Command::ExportPage(PathBuf::from(path)),
                "Usage: export_page <file>",
            ),
            "reset" => Command::Reset,
            "exit" | "quit" => Command::Exit,
            _ => Command::Unknown(word.to_string()),
        }
    }

    /// Name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Command::Help => "help",
            Command::Show(_) => "show",
            Command::Cols => "cols",
            Command::Dtypes => "dtypes",
            Command::Filter(_) => "filter",
            Command::Sort(_) => "sort",
            Command::PageSize(_) => "pagesize",
            Command::Page(_) => "page",
            Command::Next => "next",
            Command::Prev => "prev",
            Command::Export(_) => "export",
            Command::ExportPage(_) => "export_page",
            Command::Reset => "reset",
            Command::Exit => "exit",
            Command::Usage(_) => "usage",
            Command::Unknown(_) => "unknown",
            Command::Empty => "empty",
        }
    }
}

/// Digits only, so `-1` and `+2` are usage errors rather than numbers.
fn parse_count(arg: &str) -> Option<usize> {
    if arg.is_empty() || !arg.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    arg.parse().ok()
}

fn with_text(arg: &str, build: impl FnOnce(String) -> Command, usage: &'static str) -> Command {
    if arg.is_empty() {
        Command::Usage(usage)
    } else {
        build(arg.to_string())
    }
}
