//! The fixed command dispatch table.
//!
//! Dispatch is a total function: every submitted line resolves to
//! exactly one [`Dispatch`] outcome. Recognized commands form a finite
//! mapping from normalized text to a pure response producer, with one
//! explicit default branch for everything else.

use chrono::Local;

/// Keyword that closes the console.
pub const CLOSE_KEYWORD: &str = "exit";

/// Keyword that clears the transcript.
pub const CLEAR_KEYWORD: &str = "clear";

/// Outcome of dispatching one submitted line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Append the prompt line and this response line.
    Respond(String),
    /// Append the prompt line only (empty input).
    PromptOnly,
    /// Reset the transcript to empty; stay open.
    ClearTranscript,
    /// Close the console; transcript untouched.
    Close,
}

/// Recognized commands, resolved from normalized input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Builtin {
    Help,
    Ls,
    Whoami,
    Contact,
    Sudo,
    Date,
}

impl Builtin {
    fn resolve(normalized: &str) -> Option<Self> {
        match normalized {
            "help" => Some(Self::Help),
            "ls" => Some(Self::Ls),
            "whoami" => Some(Self::Whoami),
            "contact" => Some(Self::Contact),
            "sudo" => Some(Self::Sudo),
            "date" => Some(Self::Date),
            _ => None,
        }
    }

    fn respond(self) -> String {
        match self {
            Self::Help => "Available commands: ls, whoami, contact, clear, exit, date".to_string(),
            Self::Ls => "drwx------ home/\ndrwxr-xr-x writeups/\ndrwxr-xr-x projects/\n-r--r--r-- about_me.txt".to_string(),
            Self::Whoami => "Visitor (UID: 1001) | Gid: 1001 | Groups: 1001(guest)".to_string(),
            Self::Contact => "GitHub: https://github.com/folio-sh\nLinkedIn: https://www.linkedin.com/company/folio-sh".to_string(),
            Self::Sudo => "user is not in the sudoers file. This incident will be reported.".to_string(),
            Self::Date => Local::now().to_rfc2822(),
        }
    }
}

/// Dispatch one submitted line.
///
/// Matching uses the trimmed, ASCII-case-folded text; the
/// command-not-found response echoes the trimmed literal (so `SL`
/// reports `SL`, not `sl`).
pub fn dispatch(submitted: &str) -> Dispatch {
    let literal = submitted.trim();
    let normalized = literal.to_ascii_lowercase();

    match normalized.as_str() {
        "" => Dispatch::PromptOnly,
        CLEAR_KEYWORD => Dispatch::ClearTranscript,
        CLOSE_KEYWORD => Dispatch::Close,
        cmd => match Builtin::resolve(cmd) {
            Some(builtin) => Dispatch::Respond(builtin.respond()),
            None => Dispatch::Respond(format!("bash: {literal}: command not found")),
        },
    }
}
