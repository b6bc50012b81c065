pub mod behavior;
pub mod cooldown;
pub mod mood;
pub mod stress;

pub use behavior::{classify, Behavior};
pub use cooldown::CooldownGuard;
pub use mood::{Mood, MoodAggregator};
pub use stress::StressMonitor;
