//! Population-level stress detection over a sliding time window.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Watches the log of negative-emotion events and raises an alert when
/// their frequency inside the window crosses the threshold. The log is
/// compacted on every record so it stays bounded by the event rate
/// within one window.
pub struct StressMonitor {
    window: Duration,
    threshold: usize,
    events: VecDeque<Instant>,
}

impl StressMonitor {
    pub fn new(window: Duration, threshold: usize) -> Self {
        Self {
            window,
            threshold,
            events: VecDeque::new(),
        }
    }

    pub fn record(&mut self, now: Instant) {
        let window = self.window;
        while let Some(&front) = self.events.front() {
            if now.duration_since(front) >= window {
                self.events.pop_front();
            } else {
                break;
            }
        }
        self.events.push_back(now);
    }

    pub fn is_spiking(&self, now: Instant) -> bool {
        let recent = self
            .events
            .iter()
            .filter(|&&t| now.duration_since(t) < self.window)
            .count();
        recent >= self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monitor() -> StressMonitor {
        StressMonitor::new(Duration::from_secs(60), 3)
    }

    #[test]
    fn three_events_inside_window_spike() {
        let mut m = monitor();
        let t0 = Instant::now();
        m.record(t0);
        m.record(t0 + Duration::from_secs(10));
        m.record(t0 + Duration::from_secs(20));
        assert!(m.is_spiking(t0 + Duration::from_secs(20)));
    }

    #[test]
    fn two_events_do_not_spike() {
        let mut m = monitor();
        let t0 = Instant::now();
        m.record(t0);
        m.record(t0 + Duration::from_secs(10));
        assert!(!m.is_spiking(t0 + Duration::from_secs(10)));
    }

    #[test]
    fn events_spread_past_the_window_do_not_spike() {
        let mut m = monitor();
        let t0 = Instant::now();
        // Pairwise 61s apart: at most two fall inside any 60s window
        m.record(t0);
        m.record(t0 + Duration::from_secs(61));
        m.record(t0 + Duration::from_secs(122));
        assert!(!m.is_spiking(t0 + Duration::from_secs(122)));
    }

    #[test]
    fn spike_decays_as_the_window_slides() {
        let mut m = monitor();
        let t0 = Instant::now();
        m.record(t0);
        m.record(t0 + Duration::from_secs(1));
        m.record(t0 + Duration::from_secs(2));
        assert!(m.is_spiking(t0 + Duration::from_secs(2)));
        assert!(!m.is_spiking(t0 + Duration::from_secs(62)));
    }

    #[test]
    fn record_compacts_expired_entries() {
        let mut m = monitor();
        let t0 = Instant::now();
        m.record(t0);
        m.record(t0 + Duration::from_secs(61));
        assert_eq!(m.events.len(), 1);
    }
}
