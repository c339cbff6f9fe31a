//! datalens command-line explorer
//!
//! A [`Session`](session::Session) owns the loaded table and the paginator;
//! [`Command`](command::Command)s parsed from REPL lines, `-e` arguments or
//! script files are executed against it and rendered by [`output`].

pub mod args;
pub mod command;
pub mod driver;
pub mod logging;
pub mod output;
pub mod repl;
pub mod session;
pub mod settings;
