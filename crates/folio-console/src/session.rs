//! The console session state machine.
//!
//! Lifecycle: created `Closed` with one seeded help line; opens on
//! request; each submitted line commits (and clears) the input buffer
//! and appends to the transcript per the dispatch table. The transcript
//! is append-only — only the explicit clear command resets it, and
//! nothing reorders or truncates it. The session is owned by exactly
//! one view and discarded, not archived, when that view goes away.

use crate::commands::{dispatch, Dispatch};

/// Prompt marker prefixing every committed command line.
pub const PROMPT: &str = "guest@folio:~$";

/// Line seeded into the transcript of every new session.
const SEED_LINE: &str = "Type \"help\" to see available commands.";

/// What a submission did, for callers driving an interactive loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Transcript gained lines (or none, for empty input); still open.
    Continued,
    /// Transcript was reset to empty; still open.
    Cleared,
    /// The session closed.
    Closed,
    /// Ignored: the session was not open.
    NotOpen,
}

/// An interactive console session.
#[derive(Debug, Clone)]
pub struct ConsoleSession {
    is_open: bool,
    input_buffer: String,
    transcript: Vec<String>,
}

impl ConsoleSession {
    /// Create a closed session with the seeded help line.
    pub fn new() -> Self {
        Self {
            is_open: false,
            input_buffer: String::new(),
            transcript: vec![SEED_LINE.to_string()],
        }
    }

    /// Whether the console is open.
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Current uncommitted input.
    pub fn input(&self) -> &str {
        &self.input_buffer
    }

    /// The transcript, oldest line first.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Open the console.
    pub fn open(&mut self) {
        self.is_open = true;
    }

    /// Close the console without submitting anything.
    ///
    /// The transcript is untouched; reopening resumes where it left off.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Replace the uncommitted input.
    pub fn set_input(&mut self, text: impl Into<String>) {
        self.input_buffer = text.into();
    }

    /// Commit the input buffer as one submitted line.
    ///
    /// The buffer always resets to empty. Submissions on a closed
    /// session are ignored.
    pub fn submit(&mut self) -> Submission {
        if !self.is_open {
            log::debug!("submit ignored: console is closed");
            return Submission::NotOpen;
        }

        let line = std::mem::take(&mut self.input_buffer);

        match dispatch(&line) {
            Dispatch::Close => {
                self.is_open = false;
                Submission::Closed
            }
            Dispatch::ClearTranscript => {
                self.transcript.clear();
                Submission::Cleared
            }
            Dispatch::PromptOnly => {
                self.transcript.push(format!("{PROMPT} {line}"));
                Submission::Continued
            }
            Dispatch::Respond(response) => {
                self.transcript.push(format!("{PROMPT} {line}"));
                self.transcript.push(response);
                Submission::Continued
            }
        }
    }

    /// Convenience: set the input and submit it in one call.
    pub fn submit_line(&mut self, line: &str) -> Submission {
        self.set_input(line);
        self.submit()
    }
}

impl Default for ConsoleSession {
    fn default() -> Self {
        Self::new()
    }
}
