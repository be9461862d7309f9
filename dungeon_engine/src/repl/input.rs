//! Terminal input handling for the dungeon REPL.
//!
//! Wraps rustyline configuration and verb completion, falling back to plain
//! stdin when there is no terminal or rustyline gives up.

use std::fs;
use std::io::{self, IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use log::{info, warn};
use rustyline::completion::{Completer, Pair};
use rustyline::error::ReadlineError;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::command::COMMANDS;
use crate::room::Direction;

/// Outcome of reading a line from the REPL input.
pub enum InputEvent {
    Line(String),
    Eof,
    Interrupted,
}

static COMMAND_TERMS: LazyLock<Vec<String>> = LazyLock::new(build_command_terms);

type ReplEditor = rustyline::Editor<DungeonHelper, DefaultHistory>;

#[derive(Default)]
struct DungeonHelper;

impl Helper for DungeonHelper {}

impl Completer for DungeonHelper {
    type Candidate = Pair;

    fn complete(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> rustyline::Result<(usize, Vec<Self::Candidate>)> {
        let (start, prefix) = current_prefix(line, pos);
        // only the verb is completed; item names depend on where the player stands
        if prefix.is_empty() || prefix.contains(char::is_whitespace) {
            return Ok((start, Vec::new()));
        }
        let lower = prefix.to_lowercase();
        let pairs = COMMAND_TERMS
            .iter()
            .filter(|term| term.starts_with(&lower))
            .map(|term| Pair {
                display: term.clone(),
                replacement: term.clone(),
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Hinter for DungeonHelper {
    type Hint = String;
}

impl Highlighter for DungeonHelper {}

impl Validator for DungeonHelper {}

fn current_prefix(line: &str, pos: usize) -> (usize, String) {
    let slice = &line[..pos];
    let trimmed = slice.trim_start_matches(char::is_whitespace);
    let start = pos - trimmed.len();
    (start, trimmed.to_string())
}

fn build_command_terms() -> Vec<String> {
    let mut terms: Vec<String> = COMMANDS
        .iter()
        .flat_map(|command| command.verbs.iter())
        .filter(|verb| verb.len() > 1)
        .map(|verb| verb.to_lowercase())
        .collect();
    terms.extend(Direction::ALL.iter().map(ToString::to_string));
    terms.sort_unstable();
    terms.dedup();
    terms
}

pub struct InputManager {
    backend: Backend,
}

impl InputManager {
    pub fn new(keep_history: bool) -> Self {
        let backend = if io::stdin().is_terminal() {
            match RustylineInput::new(keep_history) {
                Ok(editor) => {
                    info!("using rustyline-backed REPL input");
                    Backend::Rustyline(editor)
                },
                Err(err) => {
                    warn!("failed to initialize rustyline ({err}), falling back to basic stdin");
                    Backend::plain()
                },
            }
        } else {
            info!("stdin is not a TTY; using basic input mode");
            Backend::plain()
        };
        Self { backend }
    }

    /// Read a line from the current backend. If the interactive backend reports an
    /// unrecoverable error, switch to the plain stdin backend and retry once.
    pub fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self.backend.read_line(prompt) {
            Ok(event) => Ok(event),
            Err(err) => {
                if self.backend.is_rustyline() {
                    warn!("rustyline input failed: {err} -- switching to basic stdin");
                    self.backend = Backend::plain();
                    self.backend.read_line(prompt)
                } else {
                    Err(err)
                }
            },
        }
    }
}

enum Backend {
    Rustyline(Box<RustylineInput>),
    Plain(StdinInput),
}

impl Backend {
    fn plain() -> Self {
        Backend::Plain(StdinInput::default())
    }

    fn is_rustyline(&self) -> bool {
        matches!(self, Backend::Rustyline(_))
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self {
            Backend::Rustyline(editor) => editor.read_line(prompt),
            Backend::Plain(stdin) => stdin.read_line(prompt),
        }
    }
}

struct RustylineInput {
    editor: ReplEditor,
    history_path: Option<PathBuf>,
}

impl RustylineInput {
    fn new(keep_history: bool) -> io::Result<Box<Self>> {
        let mut editor = rustyline::Editor::<DungeonHelper, _>::new().map_err(map_io_err)?;
        editor.set_helper(Some(DungeonHelper));
        let history_path = if keep_history { history_file_path() } else { None };
        if let Some(path) = history_path.as_ref() {
            if let Some(dir) = path.parent()
                && let Err(err) = fs::create_dir_all(dir)
            {
                warn!("failed to create history directory {}: {err}", dir.display());
            }
            if let Err(err) = editor.load_history(path) {
                match err {
                    ReadlineError::Io(ref io_err) if io_err.kind() == io::ErrorKind::NotFound => {
                        info!("no prior history found at {}, starting fresh", path.display());
                    },
                    other => {
                        warn!("failed to load history from {}: {other}", path.display());
                    },
                }
            }
        }
        Ok(Box::new(Self { editor, history_path }))
    }

    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(err) = self.editor.add_history_entry(line.as_str()) {
                        warn!("failed to append to history: {err}");
                    }
                    if let Some(path) = self.history_path.as_ref()
                        && let Err(err) = self.editor.save_history(path)
                    {
                        warn!("failed to persist history to {}: {err}", path.display());
                    }
                }
                Ok(InputEvent::Line(line))
            },
            Err(err) => convert_readline_error(err),
        }
    }
}

#[derive(Default)]
struct StdinInput {
    buffer: String,
}

impl StdinInput {
    fn read_line(&mut self, prompt: &str) -> io::Result<InputEvent> {
        print!("{prompt}");
        io::stdout().flush()?;
        self.buffer.clear();
        let bytes = io::stdin().read_line(&mut self.buffer)?;
        if bytes == 0 {
            return Ok(InputEvent::Eof);
        }
        if self.buffer.ends_with('\n') {
            self.buffer.pop();
            if self.buffer.ends_with('\r') {
                self.buffer.pop();
            }
        }
        Ok(InputEvent::Line(self.buffer.clone()))
    }
}

fn convert_readline_error(err: ReadlineError) -> io::Result<InputEvent> {
    match err {
        ReadlineError::Interrupted => Ok(InputEvent::Interrupted),
        ReadlineError::Eof => Ok(InputEvent::Eof),
        ReadlineError::Io(io_err) => Err(io_err),
        other => Err(io::Error::other(other)),
    }
}

fn map_io_err(err: ReadlineError) -> io::Error {
    match err {
        ReadlineError::Io(io_err) => io_err,
        other => io::Error::other(other),
    }
}

fn history_file_path() -> Option<PathBuf> {
    dirs::data_dir()
        .or_else(dirs::data_local_dir)
        .map(|base| build_history_path(&base))
}

fn build_history_path(base: &Path) -> PathBuf {
    let mut path = base.to_path_buf();
    path.push("dungeon_engine");
    path.push("history.txt");
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_readline_ctrl_c_to_interrupt() {
        let result = convert_readline_error(ReadlineError::Interrupted).unwrap();
        assert!(matches!(result, InputEvent::Interrupted));
        let result = convert_readline_error(ReadlineError::Eof).unwrap();
        assert!(matches!(result, InputEvent::Eof));
    }

    #[test]
    fn history_path_appends_components() {
        let base = PathBuf::from("/tmp/dungeon-test");
        let path = build_history_path(&base);
        assert!(path.ends_with(Path::new("dungeon_engine/history.txt")));
    }

    #[test]
    fn command_terms_cover_verbs_and_directions() {
        assert!(COMMAND_TERMS.iter().any(|term| term == "inventory"));
        assert!(COMMAND_TERMS.iter().any(|term| term == "attack"));
        assert!(COMMAND_TERMS.iter().any(|term| term == "north"));
        assert!(!COMMAND_TERMS.iter().any(|term| term == "i"));
    }

    #[test]
    fn prefix_starts_after_leading_whitespace() {
        assert_eq!(current_prefix("  tak", 5), (2, "tak".to_string()));
    }
}
