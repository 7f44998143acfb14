//! Application-facing detector capability.
//!
//! [`Detector`] is the interface detection UIs program against. Each
//! backend provides one implementation; [`TaskApiDetector`] is the one
//! that wraps a pre-built [`InferenceEngine`](crate::engine::InferenceEngine).

mod config;
mod recognition;
mod task_api;

use thiserror::Error;

use crate::engine::{Bitmap, EngineError};

pub use config::{DetectorConfig, NUM_DETECTIONS};
pub use recognition::Recognition;
pub use task_api::TaskApiDetector;

/// Error type for detector failures.
#[derive(Debug, Error)]
pub enum DetectorError {
    /// The model resource could not be read or parsed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// A configuration value the detector cannot honor.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// A capability this detector does not expose.
    #[error("Unsupported operation: {0}")]
    Unsupported(String),
    /// The wrapped engine failed during inference.
    #[error(transparent)]
    Engine(#[from] EngineError),
    /// The engine returned a detection without any category.
    #[error("Detection {index} has no categories")]
    MissingCategory { index: usize },
    /// The detector was used after `close`.
    #[error("Detector is closed")]
    Closed,
}

/// Object detector shared by every inference backend.
pub trait Detector {
    /// Detect objects in `bitmap`, in the backend's ranking order.
    fn detect(&mut self, bitmap: &Bitmap) -> Result<Vec<Recognition>, DetectorError>;

    /// Toggle collection of backend statistics.
    fn enable_stat_logging(&mut self, log_stats: bool);

    /// Backend statistics collected since stat logging was enabled.
    fn stat_string(&self) -> String;

    /// Release backend resources. Further `detect` calls fail.
    fn close(&mut self);

    /// Set the number of inference threads.
    fn set_thread_count(&mut self, num_threads: i32) -> Result<(), DetectorError>;

    /// Toggle hardware acceleration.
    fn set_accelerator(&mut self, enabled: bool) -> Result<(), DetectorError>;
}
