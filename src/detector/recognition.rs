use crate::engine::RectF;

/// A recognized object, as handed to application code.
#[derive(Debug, Clone, PartialEq)]
pub struct Recognition {
    /// Position of the result within one detect call, as text.
    pub id: String,
    /// Display label of the recognized object.
    pub title: String,
    /// Score in [0, 1]; higher is better.
    pub confidence: f32,
    /// Location of the object within the source image.
    pub location: RectF,
}

impl Recognition {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        confidence: f32,
        location: RectF,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            confidence,
            location,
        }
    }
}

impl std::fmt::Display for Recognition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}] {} ({:.1}%) {}",
            self.id,
            self.title,
            self.confidence * 100.0,
            self.location
        )
    }
}
