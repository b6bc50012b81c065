//! Rolling aggregate mood of everyone the camera has seen.
//!
//! Reduces the retained history of dominant-emotion labels to a single
//! environment label by relative frequency. Recomputed from scratch on
//! every call, so the result is order-independent. History is a capped
//! ring buffer; the original implementation grew without bound.

use std::collections::VecDeque;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mood {
    Positive,
    Negative,
    Neutral,
    Undefined,
}

impl Mood {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Positive => "Positive Environment",
            Self::Negative => "Negative Environment",
            Self::Neutral => "Neutral Environment",
            Self::Undefined => "Undefined",
        }
    }
}

pub struct MoodAggregator {
    history: VecDeque<String>,
    cap: usize,
}

impl MoodAggregator {
    pub fn new(cap: usize) -> Self {
        Self {
            history: VecDeque::with_capacity(cap.min(1024)),
            cap,
        }
    }

    pub fn record(&mut self, emotion: &str) {
        if self.history.len() == self.cap {
            self.history.pop_front();
        }
        self.history.push_back(emotion.to_string());
    }

    pub fn summarize(&self) -> Mood {
        let total = self.history.len();
        if total == 0 {
            return Mood::Undefined;
        }
        let positive = self.history.iter().filter(|e| *e == "happy").count();
        let negative = self
            .history
            .iter()
            .filter(|e| *e == "angry" || *e == "sad")
            .count();

        if positive as f64 / total as f64 > 0.5 {
            Mood::Positive
        } else if negative as f64 / total as f64 > 0.5 {
            Mood::Negative
        } else {
            Mood::Neutral
        }
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}
