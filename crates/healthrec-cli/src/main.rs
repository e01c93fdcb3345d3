//! healthrec CLI - train the diagnosis model, serve the web UI, or predict
//! from the terminal.

use anyhow::Result;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use healthrec_cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive("healthrec=info".parse()?))
        .init();

    let cli = Cli::parse();
    debug!("Parsed arguments: {:?}", cli);

    match cli.command {
        Commands::Train(cmd) => cmd.run().await?,
        Commands::Serve(cmd) => cmd.run().await?,
        Commands::Predict(cmd) => cmd.run().await?,
        Commands::GenerateData(cmd) => cmd.run().await?,
    }

    Ok(())
}
