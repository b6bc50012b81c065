use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use log::{debug, info, warn};
use tokio_util::sync::CancellationToken;

use crate::analysis::{behavior, CooldownGuard, MoodAggregator, StressMonitor};
use crate::classifier::EmotionClassifier;
use crate::config::EngineConfig;
use crate::emitter::EventEmitter;
use crate::event::BehaviorEvent;
use crate::frame::FrameSource;
use crate::snapshot::save_alert_frame;
use crate::tracking::FaceTracker;

/// Per-loop mutable state. The loop task is its sole writer, so none of
/// it needs synchronization beyond start/stop coordination.
struct TickState {
    tracker: FaceTracker,
    mood: MoodAggregator,
    stress: StressMonitor,
    cooldown: CooldownGuard,
}

impl TickState {
    fn new(config: &EngineConfig) -> Self {
        Self {
            tracker: FaceTracker::new(config.max_match_distance, config.face_inactive_timeout),
            mood: MoodAggregator::new(config.mood_history_cap),
            stress: StressMonitor::new(config.stress_window, config.stress_threshold),
            cooldown: CooldownGuard::new(config.extreme_anger_cooldown),
        }
    }
}

enum TickOutcome {
    Processed,
    NoFrame,
}

pub(crate) async fn detection_loop(
    config: EngineConfig,
    source: Arc<dyn FrameSource>,
    classifier: Arc<dyn EmotionClassifier>,
    emitter: Arc<dyn EventEmitter>,
    cancel_token: CancellationToken,
) {
    info!("[DETECTOR] detection loop starting");

    let mut state = TickState::new(&config);
    // First tick runs immediately; later ticks wait out the chosen delay
    let mut delay = Duration::ZERO;

    loop {
        tokio::select! {
            _ = tokio::time::sleep(delay) => {}
            _ = cancel_token.cancelled() => {
                info!("[DETECTOR] detection loop shutting down");
                break;
            }
        }

        delay = match process_tick(&config, &source, &classifier, &emitter, &mut state).await {
            Ok(TickOutcome::Processed) => config.poll_interval,
            Ok(TickOutcome::NoFrame) => config.frame_retry_delay,
            Err(err) => {
                // Recoverable by design: log, wait a full interval, keep going
                warn!("[DETECTOR] tick failed: {err:?}");
                config.poll_interval
            }
        };
    }

    info!("[DETECTOR] detection loop stopped");
}

async fn process_tick(
    config: &EngineConfig,
    source: &Arc<dyn FrameSource>,
    classifier: &Arc<dyn EmotionClassifier>,
    emitter: &Arc<dyn EventEmitter>,
    state: &mut TickState,
) -> Result<TickOutcome> {
    let Some(frame) = source.latest_frame() else {
        debug!("[DETECTOR] no frame available, retrying shortly");
        return Ok(TickOutcome::NoFrame);
    };

    // Model inference is CPU-bound; keep it off the async worker threads
    let detections = {
        let classifier = Arc::clone(classifier);
        let frame = frame.clone();
        tokio::task::spawn_blocking(move || classifier.detect(&frame))
            .await
            .context("classifier worker join failed")?
            .context("emotion classification failed")?
    };

    let now = Instant::now();
    state.tracker.begin_frame(now);
    let mut extreme_anger = false;

    for detection in &detections {
        // Small boxes are noise, not faces: excluded from tracking and
        // event derivation alike
        if detection.bounds.width < config.min_face_size
            || detection.bounds.height < config.min_face_size
        {
            continue;
        }

        state.tracker.observe(detection.bounds.centroid(), now);

        let Some((emotion, score)) = detection.dominant_emotion() else {
            debug!("[DETECTOR] detection carries no emotion scores, skipping event");
            continue;
        };

        let behavior_label = behavior::classify(emotion, score);

        if behavior::is_extreme_anger(emotion, score) {
            extreme_anger = true;
        }

        if behavior::is_critical_anger(emotion, score) && state.cooldown.try_fire(now) {
            save_snapshot(config, &frame).await?;
        }

        if behavior::is_negative(emotion, score) {
            state.stress.record(now);
        }

        let event = BehaviorEvent::new(
            &config.camera_id,
            emotion,
            score,
            detection.mean_score(),
            behavior_label,
            state.tracker.unique_count(),
        );

        let emit_result = {
            let emitter = Arc::clone(emitter);
            let event = event.clone();
            tokio::task::spawn_blocking(move || emitter.emit(&event))
                .await
                .context("emitter worker join failed")?
        };
        match emit_result {
            Ok(()) => info!(
                "[API] event sent: {} ({})",
                event.dominant_emotion,
                event.behavior.as_str()
            ),
            Err(err) => warn!("[API] failed to send event, dropping it: {err}"),
        }

        state.mood.record(emotion);
    }

    if state.stress.is_spiking(now) {
        warn!("[ALERTA GERAL] stress spike in the environment");
    }
    if extreme_anger {
        warn!("[ALERTA] person with high anger detected");
    }
    info!(
        "[DETECTOR] unique people: {} | mood: {} ({} readings)",
        state.tracker.unique_count(),
        state.mood.summarize().as_str(),
        state.mood.len()
    );

    Ok(TickOutcome::Processed)
}

/// Cooldown has already fired at this point; the write itself is
/// best-effort and never aborts the tick.
async fn save_snapshot(config: &EngineConfig, frame: &crate::frame::Frame) -> Result<()> {
    let Some(dir) = &config.snapshot_dir else {
        return Ok(());
    };

    let frame = frame.clone();
    let dir = dir.clone();
    let saved = tokio::task::spawn_blocking(move || save_alert_frame(&frame, &dir))
        .await
        .context("snapshot worker join failed")?;

    match saved {
        Ok(path) => info!("[SALVO] critical-anger frame saved as {}", path.display()),
        Err(err) => warn!("[SALVO] failed to save alert frame: {err:?}"),
    }
    Ok(())
}
