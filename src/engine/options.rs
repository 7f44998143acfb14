//! Option set handed to an engine when it is loaded.

/// Engine options, built with [`ObjectDetectorOptions::builder`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectDetectorOptions {
    /// Maximum number of detections the engine should return.
    pub max_results: Option<usize>,
    /// Detections scoring below this are dropped by the engine.
    pub score_threshold: Option<f32>,
}

impl ObjectDetectorOptions {
    pub fn builder() -> ObjectDetectorOptionsBuilder {
        ObjectDetectorOptionsBuilder::new()
    }
}

/// Builder for [`ObjectDetectorOptions`].
#[derive(Debug, Clone, Default)]
pub struct ObjectDetectorOptionsBuilder {
    max_results: Option<usize>,
    score_threshold: Option<f32>,
}

impl ObjectDetectorOptionsBuilder {
    /// Create a new options builder with every option unset.
    pub fn new() -> Self {
        Self::default()
    }

    /// Cap the number of returned detections.
    pub fn max_results(mut self, max_results: usize) -> Self {
        self.max_results = Some(max_results);
        self
    }

    /// Set the minimum confidence score.
    pub fn score_threshold(mut self, threshold: f32) -> Self {
        self.score_threshold = Some(threshold);
        self
    }

    /// Build the final `ObjectDetectorOptions`.
    pub fn build(self) -> ObjectDetectorOptions {
        ObjectDetectorOptions {
            max_results: self.max_results,
            score_threshold: self.score_threshold,
        }
    }
}
