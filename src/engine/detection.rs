//! Raw detection output of an inference engine.

use crate::engine::rect::RectF;

/// A single (label, score) candidate attached to a detection.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    /// Label as stored in the model's label map
    pub label: String,
    /// Confidence score
    pub score: f32,
    /// Human readable name, when the model ships one
    pub display_name: Option<String>,
    /// Index into the model's label map, when known
    pub index: Option<usize>,
}

impl Category {
    pub fn new(label: impl Into<String>, score: f32) -> Self {
        Self {
            label: label.into(),
            score,
            display_name: None,
            index: None,
        }
    }

    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    pub fn with_display_name(mut self, display_name: impl Into<String>) -> Self {
        self.display_name = Some(display_name.into());
        self
    }
}

/// One object reported by an engine.
///
/// `categories` is ranked best first.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection {
    pub categories: Vec<Category>,
    pub bounding_box: RectF,
}

impl Detection {
    pub fn new(categories: Vec<Category>, bounding_box: RectF) -> Self {
        Self {
            categories,
            bounding_box,
        }
    }

    /// Highest-ranked category, if the engine produced any.
    pub fn top_category(&self) -> Option<&Category> {
        self.categories.first()
    }
}
