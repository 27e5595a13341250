//! File and identifier utilities shared across Folio crates.

pub mod files;
pub mod ids;
