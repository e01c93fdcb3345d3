//! CLI Command Implementations
//!
//! - [`train`]: offline training
//! - [`serve`]: the web UI
//! - [`predict`]: one-shot terminal prediction
//! - [`generate`]: synthetic training data

mod generate;
mod predict;
mod serve;
mod train;

pub use generate::GenerateDataCommand;
pub use predict::PredictCommand;
pub use serve::ServeCommand;
pub use train::TrainCommand;
