//! FolioCli application framework.
//!
//! Binds the content repository, the console, and the metrics client
//! behind the command-line surface. Generic over [`ConfigProvider`] so
//! tests and embedders can supply their own configuration.

use std::io::Write as _;
use std::sync::Arc;

use tokio::io::AsyncBufReadExt;
use tracing_subscriber::EnvFilter;

use folio_console::{ConsoleSession, Submission, PROMPT};
use folio_content::Collection;
use folio_core::traits::ConfigProvider;
use folio_core::Result;
use folio_metrics::{MetricsClient, ViewTracker};

use crate::cli::{CliArgs, Command};
use crate::config::FolioConfig;

/// The CLI application, parameterized over a config provider.
pub struct FolioCli<C: ConfigProvider> {
    name: String,
    config: Arc<C>,
    version: String,
}

impl FolioCli<FolioConfig> {
    /// Create from CLI args, loading config from file/env.
    pub fn from_args(name: impl Into<String>, args: &CliArgs) -> Result<Self> {
        let config = FolioConfig::load(args.config.as_deref())?;
        Ok(Self::new(name, config))
    }
}

impl<C: ConfigProvider> FolioCli<C> {
    /// Create a new CLI application.
    pub fn new(name: impl Into<String>, config: C) -> Self {
        Self {
            name: name.into(),
            config: Arc::new(config),
            version: env!("CARGO_PKG_VERSION").to_string(),
        }
    }

    /// Override the version string.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Get a reference to the config provider.
    pub fn config(&self) -> &C {
        &self.config
    }

    /// Initialise tracing-based logging.
    ///
    /// Uses `RUST_LOG` env var if set, otherwise defaults based on verbosity flags.
    pub fn init_logging(&self, verbose: bool, quiet: bool) {
        let filter = if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else if quiet {
            EnvFilter::new("warn")
        } else if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        };

        // Ignore error if a subscriber is already set (e.g. in tests).
        let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
    }

    /// Run the CLI with the given arguments.
    pub async fn run(&self, args: CliArgs) -> Result<()> {
        self.init_logging(args.verbose, args.quiet);

        match args.command {
            Some(Command::List) => self.handle_list().await,
            Some(Command::Show { id, no_metrics }) => self.handle_show(&id, no_metrics).await,
            Some(Command::Console) => self.handle_console().await,
            Some(Command::Version) => {
                println!("{} {}", self.name, self.version);
                Ok(())
            }
            None => {
                println!("{} {} — use --help for usage", self.name, self.version);
                Ok(())
            }
        }
    }

    /// Load the collection once for this invocation.
    async fn load_collection(&self) -> Result<Collection> {
        Collection::load_dir(&self.config.content_path()?).await
    }

    async fn handle_list(&self) -> Result<()> {
        let collection = self.load_collection().await?;

        if collection.is_empty() {
            println!("./content: directory is empty");
            return Ok(());
        }

        for doc in &collection {
            println!(
                "{:<12} {:<24} {}",
                doc.date_display().unwrap_or("-"),
                doc.id,
                doc.title().unwrap_or("(untitled)")
            );
        }
        Ok(())
    }

    async fn handle_show(&self, id: &str, no_metrics: bool) -> Result<()> {
        let collection = self.load_collection().await?;

        let Some(doc) = collection.find_by_id(id) else {
            // Not-found is a rendered state, not a failure.
            println!("404: FILE NOT FOUND: {id}");
            return Ok(());
        };

        if let Some(title) = doc.title() {
            println!("# {title}");
        }
        if let Some(date) = doc.date_display() {
            println!("date: {date}");
        }
        let tags = doc.tags();
        if !tags.is_empty() {
            println!("tags: {}", tags.join(", "));
        }

        if !no_metrics {
            if let Some(base_url) = self.config.metrics_base_url() {
                let mut tracker = ViewTracker::new(MetricsClient::new(base_url));
                println!("views: {}", tracker.on_display(id).await);
            }
        }

        println!();
        println!("{}", doc.body);
        Ok(())
    }

    async fn handle_console(&self) -> Result<()> {
        let mut session = ConsoleSession::new();
        for line in session.transcript() {
            println!("{line}");
        }
        session.open();

        let stdin = tokio::io::BufReader::new(tokio::io::stdin());
        let mut lines = stdin.lines();

        loop {
            print!("{PROMPT} ");
            std::io::stdout().flush()?;

            let Some(line) = lines.next_line().await? else {
                break;
            };

            let before = session.transcript().len();
            match session.submit_line(&line) {
                Submission::Closed | Submission::NotOpen => break,
                Submission::Cleared => {}
                Submission::Continued => {
                    // The prompt line was already echoed by the terminal;
                    // print only the response lines.
                    for appended in &session.transcript()[before + 1..] {
                        println!("{appended}");
                    }
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::path::PathBuf;

    #[derive(Clone)]
    struct TestConfig {
        content: PathBuf,
    }

    impl ConfigProvider for TestConfig {
        fn project_name(&self) -> &str {
            "test-site"
        }

        fn content_path(&self) -> Result<PathBuf> {
            Ok(self.content.clone())
        }
    }

    fn test_config(content: PathBuf) -> TestConfig {
        TestConfig { content }
    }

    #[test]
    fn test_folio_cli_new() {
        let cli = FolioCli::new("folio", test_config(PathBuf::from("/tmp")));
        assert_eq!(cli.name, "folio");
        assert_eq!(cli.config().project_name(), "test-site");
    }

    #[test]
    fn test_folio_cli_with_version() {
        let cli = FolioCli::new("folio", test_config(PathBuf::from("/tmp"))).with_version("1.2.3");
        assert_eq!(cli.version, "1.2.3");
    }

    #[tokio::test]
    async fn test_run_version_command() {
        let cli = FolioCli::new("folio", test_config(PathBuf::from("/tmp")));
        let args = CliArgs::parse_from(["folio", "version"]);
        assert!(cli.run(args).await.is_ok());
    }

    #[tokio::test]
    async fn test_run_no_command() {
        let cli = FolioCli::new("folio", test_config(PathBuf::from("/tmp")));
        let args = CliArgs::parse_from(["folio"]);
        assert!(cli.run(args).await.is_ok());
    }

    #[tokio::test]
    async fn test_run_list_on_missing_root() {
        let temp = tempfile::TempDir::new().unwrap();
        let cli = FolioCli::new("folio", test_config(temp.path().join("nope")));
        let args = CliArgs::parse_from(["folio", "list"]);
        // An absent collection root is an empty collection, not an error.
        assert!(cli.run(args).await.is_ok());
    }

    #[tokio::test]
    async fn test_run_list_with_content() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("a.md"),
            "---\ntitle: A\ndate: 2024-01-10\n---\nBody\n",
        )
        .unwrap();

        let cli = FolioCli::new("folio", test_config(temp.path().to_path_buf()));
        let args = CliArgs::parse_from(["folio", "list"]);
        assert!(cli.run(args).await.is_ok());
    }

    #[tokio::test]
    async fn test_run_show_not_found_is_ok() {
        let temp = tempfile::TempDir::new().unwrap();
        let cli = FolioCli::new("folio", test_config(temp.path().to_path_buf()));
        let args = CliArgs::parse_from(["folio", "show", "missing", "--no-metrics"]);
        assert!(cli.run(args).await.is_ok());
    }

    #[tokio::test]
    async fn test_run_show_found() {
        let temp = tempfile::TempDir::new().unwrap();
        std::fs::write(
            temp.path().join("x.md"),
            "---\nid: x\ntitle: X\ndate: 2024-01-10\ntags: [a]\n---\nThe body.\n",
        )
        .unwrap();

        let cli = FolioCli::new("folio", test_config(temp.path().to_path_buf()));
        let args = CliArgs::parse_from(["folio", "show", "x", "--no-metrics"]);
        assert!(cli.run(args).await.is_ok());
    }

    #[test]
    fn test_init_logging_does_not_panic() {
        let cli = FolioCli::new("folio", test_config(PathBuf::from("/tmp")));
        cli.init_logging(false, false);
        cli.init_logging(true, false);
        cli.init_logging(false, true);
    }

    #[test]
    fn test_from_args_default() {
        let args = CliArgs::parse_from(["folio"]);
        let cli = FolioCli::from_args("folio", &args).unwrap();
        assert_eq!(cli.config().project_name(), "folio");
    }
}
