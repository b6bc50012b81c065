//! Frame access boundary between the capture side and the detection loop.
//!
//! The capture loop (camera reader, RTSP client, test harness) publishes
//! into a single-slot `SharedFrame`; the detection loop reads the latest
//! frame through a copy-returning accessor so neither side ever holds the
//! lock for longer than a clone.

use std::sync::{Arc, Mutex};

pub type Frame = image::RgbImage;

/// Read side of the frame pipeline. Returns the most recent frame, or
/// `None` when nothing has been captured yet.
pub trait FrameSource: Send + Sync {
    fn latest_frame(&self) -> Option<Frame>;
}

/// Single-slot latest-frame holder. Publishing overwrites the slot;
/// readers get a clone, never the buffer itself.
#[derive(Clone, Default)]
pub struct SharedFrame {
    slot: Arc<Mutex<Option<Frame>>>,
}

impl SharedFrame {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn publish(&self, frame: Frame) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = Some(frame);
        }
    }

    pub fn clear(&self) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = None;
        }
    }
}

impl FrameSource for SharedFrame {
    fn latest_frame(&self) -> Option<Frame> {
        // A poisoned slot reads as "no frame"; the loop retries shortly
        self.slot.lock().ok()?.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_slot_yields_none() {
        let shared = SharedFrame::new();
        assert!(shared.latest_frame().is_none());
    }

    #[test]
    fn publish_overwrites_previous_frame() {
        let shared = SharedFrame::new();
        shared.publish(Frame::new(4, 4));
        shared.publish(Frame::new(8, 8));

        let frame = shared.latest_frame().unwrap();
        assert_eq!(frame.dimensions(), (8, 8));
    }

    #[test]
    fn clear_empties_the_slot() {
        let shared = SharedFrame::new();
        shared.publish(Frame::new(4, 4));
        shared.clear();
        assert!(shared.latest_frame().is_none());
    }
}
