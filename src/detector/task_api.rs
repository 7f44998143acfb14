//! Detector backed by a pre-built inference engine.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, trace, trace_span};

use super::{Detector, DetectorConfig, DetectorError, Recognition};
use crate::engine::{Bitmap, InferenceEngine, LoadEngine, TensorImage};

/// Adapter from an [`InferenceEngine`] to the [`Detector`] interface.
///
/// The engine is configured once with a fixed result cap. Thread count and
/// accelerator selection are not configurable through this adapter.
pub struct TaskApiDetector<E: InferenceEngine> {
    engine: Option<E>,
    config: DetectorConfig,
}

impl<E: LoadEngine> TaskApiDetector<E> {
    /// Load the model at `model_filename` into a new engine.
    ///
    /// `label_filename`, `input_size` and `is_quantized` are accepted for
    /// compatibility with other detector backends and ignored: the engine
    /// reads labels and input shape from the model itself.
    pub fn create(
        model_filename: impl AsRef<Path>,
        _label_filename: impl AsRef<Path>,
        _input_size: u32,
        _is_quantized: bool,
    ) -> Result<Self, DetectorError> {
        let config = DetectorConfig::new(model_filename.as_ref());
        let model = fs::read(config.model())?;
        let engine = E::from_buffer(&model, &config.engine_options())
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        debug!(
            model = %config.model().display(),
            max_results = config.max_results(),
            "object detector created"
        );

        Ok(Self {
            engine: Some(engine),
            config,
        })
    }
}

impl<E: InferenceEngine> TaskApiDetector<E> {
    /// Wrap an engine that was already loaded from `model`.
    pub fn with_engine(engine: E, model: impl Into<PathBuf>) -> Self {
        Self {
            engine: Some(engine),
            config: DetectorConfig::new(model),
        }
    }

    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    pub fn is_closed(&self) -> bool {
        self.engine.is_none()
    }
}

impl<E: InferenceEngine> Detector for TaskApiDetector<E> {
    fn detect(&mut self, bitmap: &Bitmap) -> Result<Vec<Recognition>, DetectorError> {
        let _span = trace_span!("recognize_image").entered();

        let engine = self.engine.as_mut().ok_or(DetectorError::Closed)?;
        let results = engine.detect(&TensorImage::from_bitmap(bitmap)?)?;

        let recognitions = results
            .into_iter()
            .take(self.config.max_results())
            .enumerate()
            .map(|(index, detection)| {
                let category = detection
                    .top_category()
                    .ok_or(DetectorError::MissingCategory { index })?;
                Ok(Recognition::new(
                    index.to_string(),
                    category.label.clone(),
                    category.score,
                    detection.bounding_box,
                ))
            })
            .collect::<Result<Vec<_>, DetectorError>>()?;

        trace!(count = recognitions.len(), "recognitions ready");
        Ok(recognitions)
    }

    fn enable_stat_logging(&mut self, _log_stats: bool) {}

    fn stat_string(&self) -> String {
        String::new()
    }

    fn close(&mut self) {
        if let Some(engine) = self.engine.take() {
            engine.close();
            debug!("object detector closed");
        }
    }

    fn set_thread_count(&mut self, num_threads: i32) -> Result<(), DetectorError> {
        if num_threads != 1 {
            return Err(DetectorError::InvalidArgument(format!(
                "cannot use {num_threads} threads: this engine binding does not support \
                 changing the thread count and runs on a single thread"
            )));
        }
        Ok(())
    }

    fn set_accelerator(&mut self, _enabled: bool) -> Result<(), DetectorError> {
        Err(DetectorError::Unsupported(
            "this engine binding does not support selecting hardware accelerators; \
             only CPU is used"
                .into(),
        ))
    }
}
