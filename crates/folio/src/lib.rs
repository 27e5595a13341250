#![doc = include_str!("../README.md")]

pub use folio_console as console;
pub use folio_content as content;
pub use folio_core as core;

#[cfg(feature = "cli")]
pub use folio_cli as cli;
#[cfg(feature = "metrics")]
pub use folio_metrics as metrics;

pub use folio_core::{Error, Result};
