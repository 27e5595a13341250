//! Core traits for Folio application configuration.
//!
//! These traits define the extension points that host applications implement
//! to tell the Folio crates where content lives and how to reach external
//! services. The primary trait is [`ConfigProvider`].

use std::path::PathBuf;

use crate::Result;

/// Trait for application-specific configuration.
///
/// Every Folio-based application implements this trait to provide the
/// settings the Folio crates need: the project identity, where raw
/// content sources live, and (optionally) the base URL of the remote
/// view-metrics service.
///
/// # Bounds
///
/// - `Send + Sync`: configuration must be shareable across tasks
/// - `Clone`: configuration can be duplicated for passing to subsystems
/// - `'static`: configuration lifetime is not borrowed
///
/// # Example
///
/// ```
/// use std::path::PathBuf;
/// use folio_core::traits::ConfigProvider;
/// use folio_core::Result;
///
/// #[derive(Clone)]
/// struct SiteConfig {
///     content_dir: PathBuf,
/// }
///
/// impl ConfigProvider for SiteConfig {
///     fn project_name(&self) -> &str {
///         "my-site"
///     }
///
///     fn content_path(&self) -> Result<PathBuf> {
///         Ok(self.content_dir.clone())
///     }
///
///     fn metrics_base_url(&self) -> Option<String> {
///         None
///     }
/// }
/// ```
pub trait ConfigProvider: Send + Sync + Clone + 'static {
    /// The project name, used for env var prefixes and default paths.
    fn project_name(&self) -> &str;

    /// Directory holding the raw content sources (one document per file).
    ///
    /// # Errors
    ///
    /// Returns an error if the path cannot be determined (e.g., missing
    /// environment variable or invalid configuration).
    fn content_path(&self) -> Result<PathBuf>;

    /// Base URL of the remote view-metrics service, if configured.
    ///
    /// `None` disables metrics entirely; content display must still work.
    fn metrics_base_url(&self) -> Option<String> {
        None
    }
}
