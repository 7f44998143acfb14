use std::fs;
use std::path::PathBuf;

use image::{DynamicImage, RgbImage};
use task_detector_rs::{
    Category, Detection, Detector, DetectorError, EngineError, InferenceEngine, LoadEngine,
    ObjectDetectorOptions, RectF, TaskApiDetector, TensorImage,
};

/// Engine whose "model" is a text file of `label score left top right bottom` lines.
struct ScriptedEngine {
    detections: Vec<Detection>,
    max_results: Option<usize>,
}

impl LoadEngine for ScriptedEngine {
    fn from_buffer(model: &[u8], options: &ObjectDetectorOptions) -> Result<Self, EngineError> {
        let text = std::str::from_utf8(model)
            .map_err(|e| EngineError::InvalidModel(e.to_string()))?;
        let mut detections = Vec::new();
        for line in text.lines().filter(|l| !l.trim().is_empty()) {
            let fields: Vec<&str> = line.split_whitespace().collect();
            let [label, rest @ ..] = fields.as_slice() else {
                unreachable!()
            };
            let nums = rest
                .iter()
                .map(|s| s.parse::<f32>())
                .collect::<Result<Vec<_>, _>>()
                .map_err(|e| EngineError::InvalidModel(e.to_string()))?;
            let [score, l, t, r, b] = nums.as_slice() else {
                return Err(EngineError::InvalidModel(format!("bad line: {line}")));
            };
            detections.push(Detection::new(
                vec![Category::new(*label, *score)],
                RectF::new(*l, *t, *r, *b),
            ));
        }
        Ok(Self {
            detections,
            max_results: options.max_results,
        })
    }
}

impl InferenceEngine for ScriptedEngine {
    fn detect(&mut self, _image: &TensorImage) -> Result<Vec<Detection>, EngineError> {
        let mut out = self.detections.clone();
        if let Some(max) = self.max_results {
            out.truncate(max);
        }
        Ok(out)
    }
}

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_test_writer()
        .try_init();
}

fn model_file(name: &str, contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!(
        "task-detector-{}-{}.model",
        std::process::id(),
        name
    ));
    fs::write(&path, contents).unwrap();
    path
}

fn bitmap() -> DynamicImage {
    DynamicImage::ImageRgb8(RgbImage::new(8, 8))
}

#[test]
fn test_create_and_detect() {
    init_tracing();
    let path = model_file(
        "basic",
        "cat 0.9 0 0 10 10\n\
         dog 0.8 5 5 20 20\n",
    );

    let mut detector =
        TaskApiDetector::<ScriptedEngine>::create(&path, "labels.txt", 300, true).unwrap();
    let results = detector.detect(&bitmap()).unwrap();

    assert_eq!(results.len(), 2);
    assert_eq!(results[0].id, "0");
    assert_eq!(results[0].title, "cat");
    assert_eq!(results[0].confidence, 0.9);
    assert_eq!(results[0].location, RectF::new(0.0, 0.0, 10.0, 10.0));
    assert_eq!(results[1].id, "1");
    assert_eq!(results[1].title, "dog");
    assert_eq!(detector.config().model(), path.as_path());

    detector.close();
    assert!(matches!(
        detector.detect(&bitmap()),
        Err(DetectorError::Closed)
    ));
    fs::remove_file(path).unwrap();
}

#[test]
fn test_engine_receives_fixed_cap() {
    init_tracing();
    let lines: String = (0..25)
        .map(|i| format!("obj{i} 0.5 0 0 1 1\n"))
        .collect();
    let path = model_file("cap", &lines);

    let mut detector = TaskApiDetector::<ScriptedEngine>::create(&path, "", 0, false).unwrap();
    let results = detector.detect(&bitmap()).unwrap();

    assert_eq!(results.len(), 10);
    let ids: Vec<&str> = results.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["0", "1", "2", "3", "4", "5", "6", "7", "8", "9"]);
    fs::remove_file(path).unwrap();
}

#[test]
fn test_create_missing_model() {
    let path = std::env::temp_dir().join("task-detector-does-not-exist.model");

    let err = TaskApiDetector::<ScriptedEngine>::create(&path, "", 0, false)
        .err()
        .unwrap();

    match err {
        DetectorError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::NotFound),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_create_invalid_model() {
    let path = model_file("invalid", "cat not-a-number 0 0 1 1\n");

    let err = TaskApiDetector::<ScriptedEngine>::create(&path, "", 0, false)
        .err()
        .unwrap();

    match err {
        DetectorError::Io(e) => assert_eq!(e.kind(), std::io::ErrorKind::InvalidData),
        other => panic!("unexpected error: {other}"),
    }
    fs::remove_file(path).unwrap();
}

#[test]
fn test_dyn_detector_configuration() {
    let path = model_file("dyn", "person 0.7 1 2 3 4\n");
    let mut detector: Box<dyn Detector> =
        Box::new(TaskApiDetector::<ScriptedEngine>::create(&path, "", 0, false).unwrap());

    assert!(detector.set_thread_count(1).is_ok());
    assert!(matches!(
        detector.set_thread_count(4),
        Err(DetectorError::InvalidArgument(_))
    ));
    assert!(matches!(
        detector.set_accelerator(true),
        Err(DetectorError::Unsupported(_))
    ));
    assert!(matches!(
        detector.set_accelerator(false),
        Err(DetectorError::Unsupported(_))
    ));

    detector.enable_stat_logging(true);
    assert_eq!(detector.stat_string(), "");

    let results = detector.detect(&bitmap()).unwrap();
    assert_eq!(results[0].to_string(), "[0] person (70.0%) RectF(1, 2, 3, 4)");
    fs::remove_file(path).unwrap();
}
