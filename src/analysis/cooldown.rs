use std::time::{Duration, Instant};

/// Single global gate for the extreme-event side effect. Any critical
/// detection from any face can hold or release it; it never fires twice
/// within the window.
pub struct CooldownGuard {
    window: Duration,
    last_fired: Option<Instant>,
}

impl CooldownGuard {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_fired: None,
        }
    }

    /// Returns true (and arms the cooldown) if the window has elapsed
    /// since the last firing; false suppresses the side effect.
    pub fn try_fire(&mut self, now: Instant) -> bool {
        let elapsed = match self.last_fired {
            Some(last) => now.duration_since(last) >= self.window,
            None => true,
        };
        if elapsed {
            self.last_fired = Some(now);
        }
        elapsed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_attempt_always_fires() {
        let mut guard = CooldownGuard::new(Duration::from_secs(10));
        assert!(guard.try_fire(Instant::now()));
    }

    #[test]
    fn second_attempt_within_window_is_suppressed() {
        let mut guard = CooldownGuard::new(Duration::from_secs(10));
        let t0 = Instant::now();
        assert!(guard.try_fire(t0));
        assert!(!guard.try_fire(t0 + Duration::from_secs(5)));
    }

    #[test]
    fn fires_again_after_window_elapses() {
        let mut guard = CooldownGuard::new(Duration::from_secs(10));
        let t0 = Instant::now();
        assert!(guard.try_fire(t0));
        assert!(guard.try_fire(t0 + Duration::from_secs(11)));
    }

    #[test]
    fn suppressed_attempt_does_not_extend_the_window() {
        let mut guard = CooldownGuard::new(Duration::from_secs(10));
        let t0 = Instant::now();
        assert!(guard.try_fire(t0));
        assert!(!guard.try_fire(t0 + Duration::from_secs(9)));
        // 10s after the original firing, not after the suppressed attempt
        assert!(guard.try_fire(t0 + Duration::from_secs(10)));
    }
}
