//! Prediction serving for healthrec.
//!
//! - [`model_loader`]: loads the trained artifacts once and shares them
//! - [`predictor`]: validates a [`PatientInput`](healthrec_core::PatientInput),
//!   runs the model and looks up advice
//! - [`render`]: the HTML page and the terminal text block
//! - [`server`]: the axum router and server lifecycle
//!
//! # Example
//!
//! ```no_run
//! use healthrec_serving::{ServerConfig, Server};
//!
//! # async fn example() -> healthrec_serving::ServingResult<()> {
//! let config = ServerConfig::builder().port(8501).build();
//! Server::new(config).serve().await
//! # }
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod model_loader;
pub mod predictor;
pub mod render;
pub mod server;

pub use config::{ConfigError, ServerConfig, ServerConfigBuilder};
pub use error::{ErrorResponse, ServingError, ServingResult};
pub use model_loader::{LoadedModel, ModelLoader};
pub use predictor::{PredictionOutcome, Predictor};
pub use render::{escape_html, render_page, render_text, DISCLAIMER};
pub use server::{create_router, AppState, PredictResponse, Server};
