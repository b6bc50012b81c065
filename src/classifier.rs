use std::collections::HashMap;

use thiserror::Error;

use crate::frame::Frame;

#[derive(Debug, Error)]
pub enum ClassificationError {
    #[error("classifier backend failed: {0}")]
    Backend(String),
    #[error("frame could not be decoded: {0}")]
    InvalidFrame(String),
}

/// Face bounding box in frame pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl BoundingBox {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Integer centroid, matching the box coordinate space.
    pub fn centroid(&self) -> (i32, i32) {
        (
            self.x + self.width as i32 / 2,
            self.y + self.height as i32 / 2,
        )
    }
}

/// One detected face with its per-emotion confidence scores.
#[derive(Debug, Clone)]
pub struct Detection {
    pub bounds: BoundingBox,
    pub emotions: HashMap<String, f32>,
}

impl Detection {
    /// The emotion label with the highest confidence, if any scores exist.
    pub fn dominant_emotion(&self) -> Option<(&str, f32)> {
        self.emotions
            .iter()
            .max_by(|a, b| a.1.partial_cmp(b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(label, score)| (label.as_str(), *score))
    }

    /// Mean of all emotion scores for this detection.
    pub fn mean_score(&self) -> f32 {
        if self.emotions.is_empty() {
            return 0.0;
        }
        self.emotions.values().sum::<f32>() / self.emotions.len() as f32
    }
}

/// Capability boundary for the external emotion-classification model.
/// The engine treats it as a fallible black box so tests can script it.
pub trait EmotionClassifier: Send + Sync {
    fn detect(&self, frame: &Frame) -> Result<Vec<Detection>, ClassificationError>;
}
