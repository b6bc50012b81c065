//! Finalized behavioral event record.
//!
//! Field names follow the ingestion API's wire format. Scores are rounded
//! to two decimals at construction; the record is immutable afterwards.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::analysis::Behavior;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BehaviorEvent {
    #[serde(rename = "id_evento")]
    pub event_id: Uuid,
    pub timestamp: DateTime<Utc>,
    pub camera_id: String,
    #[serde(rename = "expressao_dominante")]
    pub dominant_emotion: String,
    #[serde(rename = "pontuacao")]
    pub score: f32,
    #[serde(rename = "media_emocoes")]
    pub mean_emotion_score: f32,
    #[serde(rename = "comportamento")]
    pub behavior: Behavior,
    #[serde(rename = "pessoas_unicas_ate_agora")]
    pub unique_people_count: usize,
}

impl BehaviorEvent {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        camera_id: &str,
        dominant_emotion: &str,
        score: f32,
        mean_emotion_score: f32,
        behavior: Behavior,
        unique_people_count: usize,
    ) -> Self {
        Self {
            event_id: Uuid::new_v4(),
            timestamp: Utc::now(),
            camera_id: camera_id.to_string(),
            dominant_emotion: dominant_emotion.to_string(),
            score: round2(score),
            mean_emotion_score: round2(mean_emotion_score),
            behavior,
            unique_people_count,
        }
    }
}

fn round2(value: f32) -> f32 {
    (value * 100.0).round() / 100.0
}
