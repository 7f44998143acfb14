//! Object detector adapter over pluggable inference engines.
//!
//! A [`TaskApiDetector`] wraps an [`InferenceEngine`], caps its output at
//! [`NUM_DETECTIONS`] results and reshapes each raw [`Detection`] into a
//! [`Recognition`] for application code.

pub mod detector;
pub mod engine;

pub use detector::{
    Detector, DetectorConfig, DetectorError, NUM_DETECTIONS, Recognition, TaskApiDetector,
};
pub use engine::{
    Bitmap, Category, Detection, EngineError, InferenceEngine, LoadEngine, ObjectDetectorOptions,
    RectF, TensorImage,
};

#[cfg(feature = "burn-backend")]
pub use engine::{BurnEngine, BurnModel, ModelOutput};
