//! Spatial-proximity face re-identification.
//!
//! A deliberately simple roster tracker: no prediction, no appearance
//! features. A detection within `max_match_distance` of a tracked
//! centroid is the same person; anything else becomes a new entry; entries
//! unseen for `inactive_timeout` are dropped. Roster length is the
//! "unique people currently present" estimate stamped onto events.
//!
//! Association is first-match over the roster in insertion order, not
//! nearest-match. Switching to nearest-match would change observable
//! unique counts, so the ambiguity is kept: when two detections in one
//! frame both fall within range of the same entry, both update it and the
//! last one wins.

use std::time::{Duration, Instant};

use log::debug;

#[derive(Debug, Clone, Copy)]
struct TrackedFace {
    centroid: (i32, i32),
    last_seen: Instant,
}

pub struct FaceTracker {
    faces: Vec<TrackedFace>,
    max_match_distance: f64,
    inactive_timeout: Duration,
}

impl FaceTracker {
    pub fn new(max_match_distance: f64, inactive_timeout: Duration) -> Self {
        Self {
            faces: Vec::new(),
            max_match_distance,
            inactive_timeout,
        }
    }

    /// Drop every face not re-seen within the inactivity window. Called
    /// once per tick before the frame's detections are observed.
    pub fn begin_frame(&mut self, now: Instant) {
        let timeout = self.inactive_timeout;
        let before = self.faces.len();
        self.faces
            .retain(|face| now.duration_since(face.last_seen) < timeout);
        if self.faces.len() < before {
            debug!(
                "[TRACKER] pruned {} inactive face(s), {} remain",
                before - self.faces.len(),
                self.faces.len()
            );
        }
    }

    /// Match one detection centroid against the roster. The first entry
    /// within range absorbs it (centroid + last_seen refreshed); otherwise
    /// a new entry is appended.
    pub fn observe(&mut self, centroid: (i32, i32), now: Instant) {
        for face in self.faces.iter_mut() {
            if distance(centroid, face.centroid) < self.max_match_distance {
                face.centroid = centroid;
                face.last_seen = now;
                return;
            }
        }
        self.faces.push(TrackedFace {
            centroid,
            last_seen: now,
        });
    }

    /// Current roster size, the unique-people estimate for this tick.
    pub fn unique_count(&self) -> usize {
        self.faces.len()
    }
}

fn distance(a: (i32, i32), b: (i32, i32)) -> f64 {
    let dx = (a.0 - b.0) as f64;
    let dy = (a.1 - b.1) as f64;
    (dx * dx + dy * dy).sqrt()
}
