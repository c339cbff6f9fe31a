//! Command loops: interactive REPL and non-interactive batches
//!
//! Both loops feed [`Command`]s through the same [`Session`]. Interactively a
//! failing command is reported and the loop goes on; in a batch the first
//! failure stops the run.

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::command::Command;
use crate::logging::TimingGuard;
use crate::output::{UNKNOWN_COMMAND, write_response};
use crate::repl::{Repl, ReplInput};
use crate::session::{Response, Session};

/// Whether the loop should keep reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Exit,
}

/// Execute one command interactively. Engine errors go to `err` as a single
/// `Error: ...` line and the session is left as it was.
pub fn run_interactive<O: Write, E: Write>(
    session: &mut Session,
    command: Command,
    out: &mut O,
    err: &mut E,
) -> std::io::Result<Flow> {
    let _timer = TimingGuard::new(command.name());
    let name = command.name();

    match session.execute(command) {
        Ok(Response::Exit) => Ok(Flow::Exit),
        Ok(response) => {
            write_response(&response, out)?;
            Ok(Flow::Continue)
        }
        Err(e) => {
            tracing::warn!(command = name, error = %e, "command failed");
            writeln!(err, "Error: {e}")?;
            Ok(Flow::Continue)
        }
    }
}

/// Run commands in order, stopping at `exit` or at the first command that
/// fails, prints a usage hint or is not recognized.
pub fn run_batch<I, S, O>(session: &mut Session, lines: I, out: &mut O) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
    O: Write,
{
    for line in lines {
        let line = line.as_ref().trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let command = Command::parse(line);
        let _timer = TimingGuard::new(command.name());
        let response = session
            .execute(command)
            .with_context(|| format!("Command failed: {line}"))?;

        match response {
            Response::Exit => break,
            Response::Usage(usage) => anyhow::bail!("{usage}"),
            Response::Unknown(word) => anyhow::bail!("{UNKNOWN_COMMAND} ('{word}')"),
            response => {
                write_response(&response, out)?;
            }
        }
    }
    Ok(())
}

/// Read a script file, one command per line
pub fn read_script(path: &Path) -> Result<Vec<String>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script: {}", path.display()))?;
    Ok(text.lines().map(str::to_string).collect())
}

/// Run the interactive loop until `exit`, Ctrl-D or Ctrl-C.
pub fn run_repl(session: &mut Session, history: Option<&Path>) -> Result<()> {
    let mut repl = Repl::new().context("Failed to start line editor")?;
    if let Some(path) = history {
        repl = repl.with_history(path);
    }

    let stdout = std::io::stdout();
    let stderr = std::io::stderr();

    loop {
        match repl.read_input()? {
            ReplInput::Exit => {
                println!("Goodbye!");
                break;
            }
            ReplInput::Command(command) => {
                let flow =
                    run_interactive(session, command, &mut stdout.lock(), &mut stderr.lock())?;
                if flow == Flow::Exit {
                    println!("Goodbye!");
                    break;
                }
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use datalens_core::{Table, Value};

    fn session() -> Session {
        let table = Table::new(
            vec!["n".into()],
            (1..=7).map(|n| vec![Value::Int(n)]).collect(),
        );
        Session::new(table, 5).unwrap()
    }

    #[test]
    fn interactive_errors_go_to_stderr() {
        let mut session = session();
        let (mut out, mut err) = (Vec::new(), Vec::new());

        let flow = run_interactive(
            &mut session,
            Command::parse("sort missing"),
            &mut out,
            &mut err,
        )
        .unwrap();

        assert_eq!(flow, Flow::Continue);
        assert!(out.is_empty());
        assert_eq!(
            String::from_utf8(err).unwrap(),
            "Error: Unknown column 'missing'. Available: n\n"
        );
    }

    #[test]
    fn interactive_exit() {
        let mut session = session();
        let (mut out, mut err) = (Vec::new(), Vec::new());
        let flow = run_interactive(&mut session, Command::Exit, &mut out, &mut err).unwrap();
        assert_eq!(flow, Flow::Exit);
    }

    #[test]
    fn batch_skips_comments_and_stops_at_exit() {
        let mut session = session();
        let mut out = Vec::new();
        run_batch(
            &mut session,
            ["# comment", "", "pagesize 3", "next", "exit", "next"],
            &mut out,
        )
        .unwrap();

        assert_eq!(session.pager().current_page(), 2);
        assert_eq!(String::from_utf8(out).unwrap(), "Page size: 3\nPage 2/3\n");
    }

    #[test]
    fn batch_aborts_on_failure() {
        let mut session = session();
        let mut out = Vec::new();
        let err = run_batch(&mut session, ["filter n>3", "filter x>1", "sort n,desc"], &mut out)
            .unwrap_err();

        assert_eq!(err.to_string(), "Command failed: filter x>1");
        assert_eq!(session.current().row_count(), 4);
    }

    #[test]
    fn batch_treats_refusals_as_failures() {
        let mut session = session();
        let mut out = Vec::new();
        assert!(run_batch(&mut session, ["page"], &mut out).is_err());
        assert!(run_batch(&mut session, ["dance"], &mut out).is_err());
    }
}
