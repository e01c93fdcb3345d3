//! Serve Command Implementation
//!
//! Loads the trained artifacts and serves the prediction web UI until
//! Ctrl-C. Artifact problems abort startup before the port is bound.

use anyhow::{Context, Result};
use clap::Args;
use healthrec_model::{DEFAULT_MODEL_FILE, DEFAULT_SCHEMA_FILE};
use healthrec_serving::{Server, ServerConfig};
use std::path::PathBuf;
use tracing::info;

/// Serve the web UI
///
/// # Example
///
/// ```bash
/// healthrec serve --host 0.0.0.0 --port 8501
/// ```
#[derive(Args, Debug, Clone)]
pub struct ServeCommand {
    /// Model file written by `healthrec train`
    #[arg(long, short = 'm', default_value = DEFAULT_MODEL_FILE, env = "HEALTHREC_MODEL")]
    pub model: PathBuf,

    /// Feature-schema file written by `healthrec train`
    #[arg(long, short = 's', default_value = DEFAULT_SCHEMA_FILE, env = "HEALTHREC_SCHEMA")]
    pub schema: PathBuf,

    /// Host address to bind to
    #[arg(long, default_value = "127.0.0.1", env = "HEALTHREC_HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(long, short = 'p', default_value = "8501", env = "HEALTHREC_PORT")]
    pub port: u16,
}

impl ServeCommand {
    /// Server configuration built from the flags.
    pub fn server_config(&self) -> ServerConfig {
        ServerConfig::builder()
            .host(self.host.clone())
            .port(self.port)
            .model_path(&self.model)
            .schema_path(&self.schema)
            .build()
    }

    /// Execute the serve command
    pub async fn run(&self) -> Result<()> {
        let config = self.server_config();
        info!("Model: {:?}, schema: {:?}", config.model_path, config.schema_path);

        Server::new(config)
            .serve()
            .await
            .context("Server failed")?;
        Ok(())
    }
}
