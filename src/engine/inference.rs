//! Traits for object detection inference engines.

use crate::engine::{Detection, EngineError, ObjectDetectorOptions, TensorImage};

/// Opaque inference backend wrapped by a detector.
///
/// Implement this trait to plug any detection model behind
/// [`TaskApiDetector`](crate::detector::TaskApiDetector).
///
/// # Example
///
/// ```ignore
/// use task_detector_rs::{Detection, EngineError, InferenceEngine, TensorImage};
///
/// struct MyEngine {
///     // Your model here
/// }
///
/// impl InferenceEngine for MyEngine {
///     fn detect(&mut self, image: &TensorImage) -> Result<Vec<Detection>, EngineError> {
///         // Run inference and return detections, best first
///         Ok(vec![])
///     }
/// }
/// ```
pub trait InferenceEngine {
    /// Run inference on an image and return ranked detections.
    fn detect(&mut self, image: &TensorImage) -> Result<Vec<Detection>, EngineError>;

    /// Release the engine's resources.
    fn close(self)
    where
        Self: Sized,
    {
    }
}

/// Engines that can be built from serialized model bytes.
pub trait LoadEngine: InferenceEngine + Sized {
    /// Parse `model` and configure the engine with `options`.
    fn from_buffer(model: &[u8], options: &ObjectDetectorOptions) -> Result<Self, EngineError>;
}
