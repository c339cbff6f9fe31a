//! Interactive REPL (Read-Eval-Print Loop).

use std::path::{Path, PathBuf};

use rustyline::error::ReadlineError;
use rustyline::{DefaultEditor, Result as RlResult};

use crate::command::Command;

const PROMPT: &str = ">> ";

/// Input from the REPL - either a command or a request to quit.
#[derive(Debug)]
pub enum ReplInput {
    /// User provided input
    Command(Command),
    /// User pressed Ctrl-D or Ctrl-C
    Exit,
}

/// Line editor with optional persistent history.
pub struct Repl {
    editor: DefaultEditor,
    history_file: Option<PathBuf>,
}

impl Repl {
    /// Create a new REPL instance.
    pub fn new() -> RlResult<Self> {
        let editor = DefaultEditor::new()?;
        Ok(Self {
            editor,
            history_file: None,
        })
    }

    /// Load history from `path` and save it back there when dropped.
    pub fn with_history(mut self, path: &Path) -> Self {
        if let Some(parent) = path.parent() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::debug!("Could not create history directory: {}", e);
            }
        }
        if let Err(e) = self.editor.load_history(path) {
            tracing::debug!("Could not load history: {}", e);
        }
        self.history_file = Some(path.to_path_buf());
        self
    }

    /// Read a single line and parse it.
    pub fn read_input(&mut self) -> RlResult<ReplInput> {
        self.read_line(PROMPT).map(|line| match line {
            Some(line) => ReplInput::Command(Command::parse(&line)),
            None => ReplInput::Exit,
        })
    }

    /// Read one raw line. `None` on Ctrl-D or Ctrl-C.
    pub fn read_line(&mut self, prompt: &str) -> RlResult<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.editor.add_history_entry(line.as_str());
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Eof) | Err(ReadlineError::Interrupted) => Ok(None),
            Err(e) => Err(e),
        }
    }

    /// Save history to file.
    pub fn save_history(&mut self) {
        if let Some(ref path) = self.history_file {
            if let Err(e) = self.editor.save_history(path) {
                tracing::debug!("Could not save history: {}", e);
            }
        }
    }
}

impl Drop for Repl {
    fn drop(&mut self) {
        self.save_history();
    }
}
