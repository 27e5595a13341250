//! The Folio command console.
//!
//! A console session is a small state machine: `Closed` or `Open`, an
//! uncommitted input buffer, and an append-only transcript. Command
//! resolution is synchronous and total — every submitted line maps to
//! exactly one response or one of the two special transitions (clear,
//! close).
//!
//! # Modules
//!
//! - [`commands`]: the fixed dispatch table
//! - [`session`]: [`ConsoleSession`] and its transitions

#![doc = include_str!("../README.md")]

pub mod commands;
pub mod session;

pub use commands::{dispatch, Dispatch};
pub use session::{ConsoleSession, Submission, PROMPT};
