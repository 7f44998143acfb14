//! Inference engine seam.
//!
//! Everything a detector needs from the model backend: the input image
//! representation, the raw detection output, the option set used when
//! loading a model, and the traits a backend implements.

mod detection;
mod inference;
mod options;
mod rect;
mod tensor_image;

use thiserror::Error;

pub use detection::{Category, Detection};
pub use inference::{InferenceEngine, LoadEngine};
pub use options::{ObjectDetectorOptions, ObjectDetectorOptionsBuilder};
pub use rect::RectF;
pub use tensor_image::{Bitmap, TensorImage};

#[cfg(feature = "burn-backend")]
mod burn_backend;

#[cfg(feature = "burn-backend")]
pub use burn_backend::{BurnEngine, BurnModel, ModelOutput};

/// Error type for engine failures.
#[derive(Debug, Error)]
pub enum EngineError {
    /// Model bytes could not be parsed.
    #[error("Invalid model: {0}")]
    InvalidModel(String),
    /// Input image has invalid dimensions (channels, height, width).
    #[error("Invalid input dimensions: expected {expected:?}, got {got:?}")]
    InvalidInput {
        expected: (u32, u32, u32),
        got: (u32, u32, u32),
    },
    /// Pixel buffer does not fit the tensor shape.
    #[error("Tensor shape error: {0}")]
    Shape(#[from] ndarray::ShapeError),
    /// Model inference failed.
    #[error("Inference error: {0}")]
    Inference(String),
}
