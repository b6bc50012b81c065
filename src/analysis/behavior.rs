//! Fixed-threshold mapping from an instantaneous emotion reading to a
//! behavioral category, plus the anger-tier predicates that drive alerts.

use serde::{Deserialize, Serialize};

/// Score above which a dominant emotion counts as a behavior signal.
const BEHAVIOR_THRESHOLD: f32 = 0.6;
/// Anger score that raises the per-tick population alert flag.
const EXTREME_ANGER_THRESHOLD: f32 = 0.8;
/// Anger score that triggers the cooldown-gated snapshot path.
const CRITICAL_ANGER_THRESHOLD: f32 = 0.9;

/// Coarse behavioral category. Wire labels match the ingestion API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Behavior {
    #[serde(rename = "potencialmente agressivo")]
    Aggressive,
    #[serde(rename = "depressivo")]
    Depressive,
    #[serde(rename = "positivo")]
    Positive,
    #[serde(rename = "neutro")]
    Neutral,
}

impl Behavior {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Aggressive => "potencialmente agressivo",
            Self::Depressive => "depressivo",
            Self::Positive => "positivo",
            Self::Neutral => "neutro",
        }
    }
}

/// Classify a dominant emotion reading. Rules are checked in order, first
/// match wins; anything below threshold is neutral.
pub fn classify(dominant_emotion: &str, score: f32) -> Behavior {
    if dominant_emotion == "angry" && score > BEHAVIOR_THRESHOLD {
        Behavior::Aggressive
    } else if dominant_emotion == "sad" && score > BEHAVIOR_THRESHOLD {
        Behavior::Depressive
    } else if dominant_emotion == "happy" && score > BEHAVIOR_THRESHOLD {
        Behavior::Positive
    } else {
        Behavior::Neutral
    }
}

/// Anger strong enough for the per-tick population alert.
pub fn is_extreme_anger(dominant_emotion: &str, score: f32) -> bool {
    dominant_emotion == "angry" && score > EXTREME_ANGER_THRESHOLD
}

/// Anger strong enough for the cooldown-gated snapshot/record path.
pub fn is_critical_anger(dominant_emotion: &str, score: f32) -> bool {
    dominant_emotion == "angry" && score > CRITICAL_ANGER_THRESHOLD
}

/// Negative reading for the stress monitor's event log.
pub fn is_negative(dominant_emotion: &str, score: f32) -> bool {
    (dominant_emotion == "angry" || dominant_emotion == "sad") && score > BEHAVIOR_THRESHOLD
}
