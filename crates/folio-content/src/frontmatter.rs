//! Front-matter splitting and metadata parsing.
//!
//! A source may begin with a header block fenced by `---` marker lines:
//!
//! ```text
//! ---
//! id: sqli-basics
//! title: "SQLi from first principles"
//! date: 2024-01-10
//! tags: [web, sqli]
//! ---
//! Body starts here.
//! ```
//!
//! The fence must be at the very start of the text. Absence of the
//! marker means "no metadata, the whole text is the body". Both LF and
//! CRLF line endings are accepted, so a source splits the same way
//! regardless of the host platform.

use crate::document::Metadata;
use folio_core::{Error, Result};

/// The fence line that delimits a header block.
const FENCE: &str = "---";

/// Split raw text into its header block and body.
///
/// Returns `Some((header, body))` when the text opens with a fence line
/// and a closing fence is found; `None` otherwise (including an opening
/// fence that is never closed — there is no header to speak of then).
///
/// The header slice excludes both fence lines. The body slice is the
/// remaining raw text after the closing fence line and its line ending.
pub fn split(text: &str) -> Option<(&str, &str)> {
    let mut lines = line_spans(text);

    let (first_start, first_end) = lines.next()?;
    if text[first_start..first_end].trim_end_matches('\r') != FENCE {
        return None;
    }

    let header_start = line_end_with_newline(text, first_end);
    for (start, end) in lines {
        if text[start..end].trim_end_matches('\r') == FENCE {
            let body_start = line_end_with_newline(text, end);
            return Some((&text[header_start..start], &text[body_start..]));
        }
    }

    None
}

/// Parse a header block into a [`Metadata`] mapping.
///
/// An empty (or whitespace-only) header yields an empty mapping. Any
/// syntax error is returned to the caller, which degrades the document
/// rather than aborting the load.
pub fn parse_metadata(header: &str) -> Result<Metadata> {
    if header.trim().is_empty() {
        return Ok(Metadata::default());
    }

    serde_yaml::from_str(header)
        .map_err(|e| Error::invalid_data(format!("front matter: {e}")))
}

/// Extract metadata and body from raw text, degrading on failure.
///
/// - No header marker: empty metadata, the whole text is the body.
/// - Well-formed header: parsed metadata, body after the fence.
/// - Malformed header: empty metadata and the **entire original text**
///   as body, so no content is silently lost. The failure is logged.
pub fn extract<'a>(name: &str, text: &'a str) -> (Metadata, &'a str) {
    match split(text) {
        Some((header, body)) => match parse_metadata(header) {
            Ok(metadata) => (metadata, body),
            Err(e) => {
                log::warn!("{name}: malformed header block, keeping raw text: {e}");
                (Metadata::default(), text)
            }
        },
        None => (Metadata::default(), text),
    }
}

/// Iterate over `(start, end)` byte spans of each line, excluding the
/// line terminator.
fn line_spans(text: &str) -> impl Iterator<Item = (usize, usize)> + '_ {
    let mut pos = 0;
    text.split_inclusive('\n').map(move |line| {
        let start = pos;
        pos += line.len();
        let end = start + line.trim_end_matches('\n').len();
        (start, end)
    })
}

/// Byte offset just past the line ending that follows `line_end`.
fn line_end_with_newline(text: &str, line_end: usize) -> usize {
    if text[line_end..].starts_with('\n') {
        line_end + 1
    } else {
        line_end
    }
}
