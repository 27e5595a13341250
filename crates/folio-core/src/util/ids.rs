//! Document identifier derivation.
//!
//! Identity resolution is a two-step contract: an explicit `id` metadata
//! field wins, otherwise the identifier is derived from the source's
//! storage name with its extension stripped. This module implements the
//! storage-name half so it stays testable in isolation from any
//! filesystem details.

/// Derive an identifier from a source's storage name.
///
/// Strips the final extension only; the remainder is kept verbatim
/// (case-sensitive, stable across reloads).
///
/// # Example
///
/// ```
/// use folio_core::util::ids::id_from_name;
///
/// assert_eq!(id_from_name("sqli-basics.md"), "sqli-basics");
/// assert_eq!(id_from_name("notes.backup.md"), "notes.backup");
/// assert_eq!(id_from_name("README"), "README");
/// ```
pub fn id_from_name(name: &str) -> String {
    match name.rsplit_once('.') {
        Some((stem, _ext)) if !stem.is_empty() => stem.to_string(),
        _ => name.to_string(),
    }
}

/// Normalize an explicit identifier from metadata.
///
/// Returns `None` when the value is empty or whitespace-only, in which
/// case callers fall back to [`id_from_name`].
pub fn normalize_id(id: &str) -> Option<String> {
    let trimmed = id.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}
