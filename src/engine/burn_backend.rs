//! Burn inference backend for object detection.
//!
//! This module provides a `BurnEngine` that implements `InferenceEngine`
//! for running object detection models built with the Burn framework.
//!
//! # Example
//!
//! ```ignore
//! use task_detector_rs::{BurnEngine, BurnModel, TaskApiDetector};
//! use burn::backend::NdArray;
//!
//! // Implement BurnModel for your detection model
//! struct MySsdModel { /* ... */ }
//!
//! impl BurnModel<NdArray> for MySsdModel {
//!     // load / forward / labels
//! }
//!
//! let detector =
//!     TaskApiDetector::<BurnEngine<NdArray, MySsdModel>>::create("ssd.mpk", "", 300, false)?;
//! ```

use burn::prelude::*;
use burn::tensor::Tensor;

use crate::engine::{
    Category, Detection, EngineError, InferenceEngine, LoadEngine, ObjectDetectorOptions, RectF,
    TensorImage,
};

/// Raw model output before ranking and label lookup.
#[derive(Debug, Clone)]
pub struct ModelOutput {
    /// Bounding box: [x1, y1, x2, y2] or [cx, cy, w, h] depending on model
    pub bbox: [f32; 4],
    /// Confidence score
    pub score: f32,
    /// Index into the model's label map
    pub class_id: usize,
}

/// Trait for Burn-based detection models.
///
/// Implement this trait for your specific model architecture.
pub trait BurnModel<B: Backend>: Sized + Send + Sync {
    /// Deserialize model weights from `bytes` onto `device`.
    fn load(bytes: &[u8], device: &B::Device) -> Result<Self, EngineError>;

    /// Run forward pass on the input tensor.
    ///
    /// # Arguments
    /// * `input` - Input tensor of shape [batch, channels, height, width]
    fn forward(&self, input: Tensor<B, 4>) -> Vec<ModelOutput>;

    /// Label map indexed by `ModelOutput::class_id`.
    fn labels(&self) -> &[String];

    /// Get the expected input size (channels, height, width).
    fn input_size(&self) -> (u32, u32, u32) {
        (3, 300, 300) // SSD MobileNet input size
    }

    /// Whether bbox output is in XYWH format (vs TLBR).
    fn bbox_is_xywh(&self) -> bool {
        false
    }
}

/// Burn-based engine implementing `InferenceEngine`.
pub struct BurnEngine<B: Backend, M: BurnModel<B>> {
    model: M,
    device: B::Device,
    options: ObjectDetectorOptions,
}

impl<B: Backend, M: BurnModel<B>> BurnEngine<B, M> {
    /// Create a new Burn engine with the given model, device and options.
    pub fn new(model: M, device: B::Device, options: ObjectDetectorOptions) -> Self {
        Self {
            model,
            device,
            options,
        }
    }

    pub fn options(&self) -> &ObjectDetectorOptions {
        &self.options
    }

    /// Convert a tensor image to a Burn tensor.
    ///
    /// The image must already match the model's input size.
    pub fn preprocess(&self, image: &TensorImage) -> Result<Tensor<B, 4>, EngineError> {
        let (channels, target_h, target_w) = self.model.input_size();
        let got = (
            image.channels() as u32,
            image.height() as u32,
            image.width() as u32,
        );

        if got != (channels, target_h, target_w) {
            return Err(EngineError::InvalidInput {
                expected: (channels, target_h, target_w),
                got,
            });
        }

        let data = image.to_normalized_nchw();

        // Create tensor [C * H * W] then reshape to [1, C, H, W]
        let tensor = Tensor::<B, 1>::from_floats(data.as_slice(), &self.device).reshape([
            1,
            channels as usize,
            target_h as usize,
            target_w as usize,
        ]);

        Ok(tensor)
    }

    /// Rank raw model outputs and attach labels.
    fn postprocess(&self, mut outputs: Vec<ModelOutput>) -> Vec<Detection> {
        outputs.retain(|o| !o.score.is_nan());
        if let Some(threshold) = self.options.score_threshold {
            outputs.retain(|o| o.score >= threshold);
        }
        outputs.sort_by(|a, b| b.score.total_cmp(&a.score));
        if let Some(max_results) = self.options.max_results {
            outputs.truncate(max_results);
        }

        let labels = self.model.labels();
        outputs
            .into_iter()
            .map(|o| {
                let label = labels
                    .get(o.class_id)
                    .cloned()
                    .unwrap_or_else(|| o.class_id.to_string());
                let [a, b, c, d] = o.bbox;
                let bounding_box = if self.model.bbox_is_xywh() {
                    RectF::from_xywh(a, b, c, d)
                } else {
                    RectF::new(a, b, c, d)
                };
                Detection::new(
                    vec![Category::new(label, o.score).with_index(o.class_id)],
                    bounding_box,
                )
            })
            .collect()
    }
}

impl<B: Backend, M: BurnModel<B>> InferenceEngine for BurnEngine<B, M> {
    fn detect(&mut self, image: &TensorImage) -> Result<Vec<Detection>, EngineError> {
        let tensor = self.preprocess(image)?;
        let outputs = self.model.forward(tensor);
        Ok(self.postprocess(outputs))
    }
}

impl<B: Backend, M: BurnModel<B>> LoadEngine for BurnEngine<B, M> {
    fn from_buffer(model: &[u8], options: &ObjectDetectorOptions) -> Result<Self, EngineError> {
        let device = B::Device::default();
        let model = M::load(model, &device)?;
        Ok(Self::new(model, device, options.clone()))
    }
}
