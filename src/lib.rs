//! moodwatch: turns a noisy per-frame stream of face/emotion detections
//! into a stable, de-duplicated, rate-limited sequence of behavioral
//! events.
//!
//! The engine polls a [`frame::FrameSource`], runs frames through an
//! [`classifier::EmotionClassifier`], re-identifies faces by spatial
//! proximity, classifies emotions into behaviors, suppresses repeated
//! extreme alerts with a cooldown, keeps a rolling environment mood, and
//! watches for population-level stress spikes. Finalized events leave via
//! an [`emitter::EventEmitter`]. Camera capture, the classification model
//! and the ingestion API live outside this crate, behind those traits.

pub mod analysis;
pub mod classifier;
pub mod config;
pub mod emitter;
pub mod engine;
pub mod event;
pub mod frame;
pub mod snapshot;
pub mod tracking;

pub use analysis::{Behavior, Mood};
pub use classifier::{BoundingBox, ClassificationError, Detection, EmotionClassifier};
pub use config::EngineConfig;
pub use emitter::{EmissionError, EventEmitter, HttpEventEmitter};
pub use engine::DetectionEngine;
pub use event::BehaviorEvent;
pub use frame::{Frame, FrameSource, SharedFrame};
pub use tracking::FaceTracker;
