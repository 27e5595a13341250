//! Front-matter parsing and the Folio document collection.
//!
//! This crate implements the content repository: raw text sources go in,
//! an immutable ordered [`Collection`] of [`Document`]s comes out.
//!
//! # Modules
//!
//! - [`document`]: [`RawSource`], [`Metadata`], and [`Document`]
//! - [`frontmatter`]: header-block splitting and metadata parsing
//! - [`dates`]: sort-key derivation from free-text dates
//! - [`repository`]: the [`Collection`] and its loaders

#![doc = include_str!("../README.md")]

pub mod dates;
pub mod document;
pub mod frontmatter;
pub mod repository;

pub use document::{Document, Metadata, RawSource};
pub use repository::Collection;
