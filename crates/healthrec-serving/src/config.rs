//! Web server configuration.

use healthrec_model::{ArtifactPaths, DEFAULT_MODEL_FILE, DEFAULT_SCHEMA_FILE};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for the prediction web server.
///
/// # Example
///
/// ```
/// use healthrec_serving::config::ServerConfig;
///
/// let config = ServerConfig::builder()
///     .host("0.0.0.0")
///     .port(9000)
///     .model_path("/models/disease_model.json")
///     .build();
/// assert_eq!(config.socket_addr(), "0.0.0.0:9000");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host address to bind to (default: "127.0.0.1")
    pub host: String,

    /// Port to listen on (default: 8501)
    pub port: u16,

    /// Model artifact written by the trainer
    pub model_path: PathBuf,

    /// Feature-schema artifact written by the trainer
    pub schema_path: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8501,
            model_path: PathBuf::from(DEFAULT_MODEL_FILE),
            schema_path: PathBuf::from(DEFAULT_SCHEMA_FILE),
        }
    }
}

impl ServerConfig {
    /// Create a new configuration builder.
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Get the socket address string for binding.
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Model and schema locations as [`ArtifactPaths`].
    pub fn artifact_paths(&self) -> ArtifactPaths {
        ArtifactPaths::new(&self.model_path, &self.schema_path)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.trim().is_empty() {
            return Err(ConfigError::EmptyHost);
        }
        if self.port == 0 {
            return Err(ConfigError::InvalidPort);
        }
        if self.model_path == self.schema_path {
            return Err(ConfigError::SameArtifactPath(self.model_path.clone()));
        }
        Ok(())
    }
}

/// Builder for [`ServerConfig`].
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    host: Option<String>,
    port: Option<u16>,
    model_path: Option<PathBuf>,
    schema_path: Option<PathBuf>,
}

impl ServerConfigBuilder {
    /// Set the host address.
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    /// Set the port number.
    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Set the model artifact path.
    pub fn model_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.model_path = Some(path.into());
        self
    }

    /// Set the feature-schema artifact path.
    pub fn schema_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.schema_path = Some(path.into());
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ServerConfig {
        let default = ServerConfig::default();
        ServerConfig {
            host: self.host.unwrap_or(default.host),
            port: self.port.unwrap_or(default.port),
            model_path: self.model_path.unwrap_or(default.model_path),
            schema_path: self.schema_path.unwrap_or(default.schema_path),
        }
    }
}

/// Configuration errors.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ConfigError {
    /// Invalid port number
    #[error("Invalid port number: port cannot be 0")]
    InvalidPort,

    /// Empty host
    #[error("Invalid host: must not be empty")]
    EmptyHost,

    /// Both artifacts point at the same file
    #[error("Model and schema artifacts must be different files, both are {0}")]
    SameArtifactPath(PathBuf),
}
