use std::path::{Path, PathBuf};

use crate::engine::ObjectDetectorOptions;

/// Only return this many results.
pub const NUM_DETECTIONS: usize = 10;

/// Settings fixed when a detector is created.
#[derive(Debug, Clone, PartialEq)]
pub struct DetectorConfig {
    max_results: usize,
    model: PathBuf,
}

impl DetectorConfig {
    pub fn new(model: impl Into<PathBuf>) -> Self {
        Self {
            max_results: NUM_DETECTIONS,
            model: model.into(),
        }
    }

    pub fn max_results(&self) -> usize {
        self.max_results
    }

    pub fn model(&self) -> &Path {
        &self.model
    }

    /// Option set the engine is loaded with.
    pub fn engine_options(&self) -> ObjectDetectorOptions {
        ObjectDetectorOptions::builder()
            .max_results(self.max_results)
            .build()
    }
}
