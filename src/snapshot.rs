//! Alert frame snapshots for critical-anger detections.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Utc;

use crate::frame::Frame;

/// Write the frame as a timestamped JPEG into `dir`, creating the
/// directory if needed. Returns the written path.
pub fn save_alert_frame(frame: &Frame, dir: &Path) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create snapshot dir {}", dir.display()))?;

    let filename = format!("alerta_raiva_{}.jpg", Utc::now().format("%Y%m%d_%H%M%S"));
    let path = dir.join(filename);
    frame
        .save(&path)
        .with_context(|| format!("failed to write snapshot {}", path.display()))?;
    Ok(path)
}
