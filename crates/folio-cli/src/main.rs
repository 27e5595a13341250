//! Entry point for the `folio` binary.

use clap::Parser;

use folio_cli::{CliArgs, FolioCli};

#[tokio::main]
async fn main() -> folio_core::Result<()> {
    let args = CliArgs::parse();
    let cli = FolioCli::from_args("folio", &args)?;
    cli.run(args).await
}
