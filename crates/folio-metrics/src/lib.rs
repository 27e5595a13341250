//! Client for the remote view-metrics service.
//!
//! The service contract (consumed, not implemented here):
//!
//! - `POST {base}/api/view` with body `{"slug": <document id>}`
//! - `GET {base}/api/metrics/{id}` returning `{"views": n, ...}`
//!
//! Everything in this crate is fire-and-forget from the content core's
//! perspective: failures are logged and degrade the displayed count,
//! never the document.
//!
//! # Modules
//!
//! - [`client`]: [`MetricsApi`] trait, [`MetricsClient`], [`ViewMetrics`]
//! - [`tracker`]: the per-mount [`ViewTracker`] guard

#![doc = include_str!("../README.md")]

pub mod client;
pub mod tracker;

pub use client::{MetricsApi, MetricsClient, ViewMetrics};
pub use tracker::ViewTracker;
