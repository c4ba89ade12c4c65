//! Line-oriented shell over a [`Notebook`]
//!
//! Reads one [`Command`] per line and writes results to the output. Input and
//! notebook errors are reported inline and the shell keeps going; only I/O
//! failures end the session.

use crate::command::{Command, EditField, ParseError, HELP};
use crate::render;
use amogbook_core::{CaseId, CaseUpdate, DisplayMode, KeyBinding, Notebook, NotebookError};
use std::io::{self, BufRead, Write};

/// Shell failure
#[derive(Debug, thiserror::Error)]
pub enum ShellError {
    /// Line not understood
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Notebook refused the operation
    #[error(transparent)]
    Notebook(#[from] NotebookError),

    /// Case number past the end of the list
    #[error("no case #{0}")]
    NoSuchRow(usize),

    /// Output failed
    #[error("output failed: {0}")]
    Io(#[from] io::Error),

    /// JSON encoding failed
    #[error("json encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl ShellError {
    /// Check if the session can continue after this error
    #[inline]
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::Io(_) | Self::Json(_))
    }
}

/// Whether to keep reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read next line
    Continue,
    /// Stop
    Quit,
}

/// Notebook plus output sink
#[derive(Debug)]
pub struct Shell<W> {
    notebook: Notebook,
    out: W,
    json: bool,
}

impl<W: Write> Shell<W> {
    /// Create shell writing to `out`
    pub fn new(notebook: Notebook, out: W) -> Self {
        Self {
            notebook,
            out,
            json: false,
        }
    }

    /// Emit listings as JSON
    #[must_use]
    pub fn with_json(mut self, json: bool) -> Self {
        self.json = json;
        self
    }

    /// Underlying notebook
    pub fn notebook(&self) -> &Notebook {
        &self.notebook
    }

    /// Consume shell, returning the output sink
    pub fn into_output(self) -> W {
        self.out
    }

    /// Process every line of `input` until EOF or `quit`
    ///
    /// # Errors
    /// Returns [`ShellError::Io`] / [`ShellError::Json`] if output fails or
    /// input cannot be read.
    pub fn run<R: BufRead>(&mut self, input: R) -> Result<(), ShellError> {
        for line in input.lines() {
            let line = line?;
            if line.trim().is_empty() || line.trim_start().starts_with('#') {
                continue;
            }

            match self.execute(&line) {
                Ok(Flow::Continue) => {}
                Ok(Flow::Quit) => break,
                Err(err) if err.is_recoverable() => {
                    tracing::warn!(%line, error = %err, "command rejected");
                    writeln!(self.out, "error: {err}")?;
                }
                Err(err) => return Err(err),
            }
        }
        self.out.flush()?;
        Ok(())
    }

    /// Execute a single line
    ///
    /// # Errors
    /// Returns [`ShellError`] for bad input, refused operations or output
    /// failures.
    pub fn execute(&mut self, line: &str) -> Result<Flow, ShellError> {
        let command: Command = line.parse()?;
        tracing::debug!(?command, "executing");

        match command {
            Command::Help => self.say(HELP)?,
            Command::Palette => {
                let text = render::palette(self.notebook.palette());
                self.say(&text)?;
            }

            Command::Victim(name) => {
                let name = self.resolve(&name);
                self.notebook.set_victim(name.clone())?;
                self.say(&format!("Victim: {name}"))?;
            }
            Command::Location(text) => self.notebook.set_location(text),
            Command::Notes(text) => self.notebook.set_notes(text),
            Command::Suspect(name) => {
                let name = self.resolve(&name);
                let index = self.notebook.assign_suspect(name.clone())?;
                self.say(&format!("slot {}: {name}", index + 1))?;
            }
            Command::Slot(n, name) => {
                let name = self.resolve(&name);
                self.notebook.assign_suspect_at(n - 1, name)?;
            }
            Command::Unslot(n) => {
                self.notebook.remove_suspect_slot(n - 1)?;
            }
            Command::Draft => {
                let text = render::draft(self.notebook.draft());
                self.say(&text)?;
            }
            Command::Save => {
                let id = self.notebook.save_case()?;
                self.say(&format!("saved {id}"))?;
            }
            Command::Clear => self.notebook.clear_draft(),

            Command::Cases => {
                if self.json {
                    let records: Vec<_> = self.notebook.cases().iter().collect();
                    let text = serde_json::to_string(&records)?;
                    self.say(&text)?;
                } else {
                    let text = render::numbered(&self.notebook.case_lines());
                    self.say(&text)?;
                }
            }
            Command::Select(n) => {
                let id = self.row(n)?;
                self.notebook.select_case(&id)?;
                let text = render::mini(&self.notebook);
                self.say(&text)?;
            }
            Command::Show(n) => {
                let id = self.row(n)?;
                let text = render::case(self.notebook.case(&id)?);
                self.say(&text)?;
            }
            Command::Edit(n, field) => {
                let id = self.row(n)?;
                let mut update = CaseUpdate::from_record(self.notebook.case(&id)?);
                match field {
                    EditField::Location(text) => update.location = text,
                    EditField::Notes(text) => update.notes = text,
                    EditField::Suspects(names) => {
                        update.suspects = names.iter().map(|name| self.resolve(name)).collect();
                    }
                }
                self.notebook.update_case(&id, update)?;
                self.say(&format!("updated {id}"))?;
            }
            Command::Remove(n) => {
                let id = self.row(n)?;
                self.notebook.remove_case(&id)?;
                self.say(&format!("removed {id}"))?;
            }

            Command::Sus(name, score) => {
                let name = self.resolve(&name);
                let score = self.notebook.set_suspicion(name.clone(), score)?;
                self.say(&format!("{name}: {score}"))?;
            }
            Command::Unsus(name) => {
                let name = self.resolve(&name);
                self.notebook.remove_suspicion(&name)?;
            }
            Command::Board => {
                if self.json {
                    let text = serde_json::to_string(&self.notebook.ranked_suspicion())?;
                    self.say(&text)?;
                } else {
                    let rows = self.notebook.board_lines();
                    let text = if rows.is_empty() { "(none)".to_string() } else { rows.join("\n") };
                    self.say(&text)?;
                }
            }

            Command::Log(text) => {
                let line = self.notebook.append_log(text)?.to_string();
                self.say(&line)?;
            }
            Command::History => {
                if self.json {
                    let text = serde_json::to_string(self.notebook.log().render())?;
                    self.say(&text)?;
                } else {
                    let text = self.notebook.log_lines().join("\n");
                    self.say(&text)?;
                }
            }

            Command::Toggle => {
                self.notebook.toggle_overlay();
                self.show_view()?;
            }
            Command::Full => {
                self.notebook.show_full();
                self.show_view()?;
            }
            Command::Key(combo) => {
                let pressed: KeyBinding = combo.parse().map_err(NotebookError::from)?;
                if self.notebook.handle_key(pressed.key(), pressed.modifiers()) {
                    self.show_view()?;
                }
            }
            Command::View => self.show_view()?,
            Command::Quit => return Ok(Flow::Quit),
        }

        Ok(Flow::Continue)
    }

    /// Map palette names case-insensitively; unknown names pass through
    fn resolve(&self, name: &str) -> String {
        self.notebook
            .palette()
            .resolve(name)
            .map_or_else(|| name.trim().to_string(), String::from)
    }

    fn row(&self, n: usize) -> Result<CaseId, ShellError> {
        n.checked_sub(1)
            .and_then(|i| self.notebook.cases().get_index(i))
            .map(|record| record.id().clone())
            .ok_or(ShellError::NoSuchRow(n))
    }

    fn show_view(&mut self) -> Result<(), ShellError> {
        let text = if self.json && self.notebook.mode() == DisplayMode::Mini {
            serde_json::to_string(self.notebook.mini_view())?
        } else {
            render::view(&self.notebook)
        };
        self.say(&text)
    }

    fn say(&mut self, text: &str) -> Result<(), ShellError> {
        if !text.is_empty() {
            writeln!(self.out, "{text}")?;
        }
        Ok(())
    }
}
