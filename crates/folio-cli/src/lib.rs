//! Folio CLI application.
//!
//! # Modules
//!
//! - [`cli`]: clap argument types
//! - [`config`]: [`FolioConfig`](config::FolioConfig) loading
//! - [`app`]: the [`FolioCli`](app::FolioCli) application

#![doc = include_str!("../README.md")]

pub mod app;
pub mod cli;
pub mod config;

pub use app::FolioCli;
pub use cli::CliArgs;
pub use config::FolioConfig;
