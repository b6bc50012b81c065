use std::path::PathBuf;
use std::time::Duration;

/// Configuration for the detection engine with tunable thresholds.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Minimum bounding-box side (pixels) for a detection to count as a face
    pub min_face_size: u32,

    /// Maximum centroid distance (pixels) to match a detection to a tracked face
    pub max_match_distance: f64,

    /// A tracked face not re-seen within this window is dropped
    pub face_inactive_timeout: Duration,

    /// Minimum spacing between critical-anger snapshot firings
    pub extreme_anger_cooldown: Duration,

    /// Sliding window for the population stress monitor
    pub stress_window: Duration,

    /// Negative events within the window required to raise a stress spike
    pub stress_threshold: usize,

    /// Delay between detection ticks
    pub poll_interval: Duration,

    /// Shorter retry delay when no frame is available
    pub frame_retry_delay: Duration,

    /// Timeout for one event POST
    pub emit_timeout: Duration,

    /// Camera identifier stamped onto every event
    pub camera_id: String,

    /// Event ingestion endpoint
    pub endpoint: String,

    /// Where critical-anger frames are written; None disables snapshots
    pub snapshot_dir: Option<PathBuf>,

    /// Retained mood-history entries (ring buffer cap)
    pub mood_history_cap: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_face_size: 80,
            max_match_distance: 80.0,
            face_inactive_timeout: Duration::from_secs(3),
            extreme_anger_cooldown: Duration::from_secs(10),
            stress_window: Duration::from_secs(60),
            stress_threshold: 3,
            poll_interval: Duration::from_secs(1),
            frame_retry_delay: Duration::from_millis(200),
            emit_timeout: Duration::from_secs(3),
            camera_id: "entrada_1".to_string(),
            endpoint: "http://127.0.0.1:8000/evento".to_string(),
            snapshot_dir: None,
            mood_history_cap: 1000,
        }
    }
}
