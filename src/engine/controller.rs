//! Lifecycle control for the detection loop.
//!
//! Two states: stopped and running. `start`/`stop` are idempotent and
//! guarded by a single async mutex so concurrent callers (e.g. from
//! concurrent API requests) cannot race into duplicate loops. `stop`
//! waits a bounded time for the loop to exit and proceeds anyway if it
//! does not — soft cancellation, never a forced kill.

use std::sync::Arc;
use std::time::Duration;

use log::{info, warn};
use tokio::sync::Mutex;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::classifier::EmotionClassifier;
use crate::config::EngineConfig;
use crate::emitter::{EventEmitter, HttpEventEmitter};
use crate::frame::FrameSource;

use super::loop_worker::detection_loop;

const STOP_JOIN_TIMEOUT: Duration = Duration::from_secs(3);

struct EngineInner {
    handle: Option<JoinHandle<()>>,
    cancel_token: Option<CancellationToken>,
}

pub struct DetectionEngine {
    config: EngineConfig,
    source: Arc<dyn FrameSource>,
    classifier: Arc<dyn EmotionClassifier>,
    emitter: Arc<dyn EventEmitter>,
    inner: Mutex<EngineInner>,
}

impl DetectionEngine {
    pub fn new(
        config: EngineConfig,
        source: Arc<dyn FrameSource>,
        classifier: Arc<dyn EmotionClassifier>,
        emitter: Arc<dyn EventEmitter>,
    ) -> Self {
        Self {
            config,
            source,
            classifier,
            emitter,
            inner: Mutex::new(EngineInner {
                handle: None,
                cancel_token: None,
            }),
        }
    }

    /// Wire the HTTP emitter from the config's endpoint and timeout.
    pub fn with_http_emitter(
        config: EngineConfig,
        source: Arc<dyn FrameSource>,
        classifier: Arc<dyn EmotionClassifier>,
    ) -> Self {
        let emitter = Arc::new(HttpEventEmitter::new(
            config.endpoint.clone(),
            config.emit_timeout,
        ));
        Self::new(config, source, classifier, emitter)
    }

    /// Spawn the detection loop. No-op (with a warning) when already
    /// running.
    pub async fn start(&self) {
        let mut inner = self.inner.lock().await;

        if let Some(handle) = &inner.handle {
            if !handle.is_finished() {
                warn!("[DETECTOR] start requested but detector already running");
                return;
            }
        }

        let cancel_token = CancellationToken::new();
        let handle = tokio::spawn(detection_loop(
            self.config.clone(),
            Arc::clone(&self.source),
            Arc::clone(&self.classifier),
            Arc::clone(&self.emitter),
            cancel_token.clone(),
        ));

        inner.handle = Some(handle);
        inner.cancel_token = Some(cancel_token);
        info!("[DETECTOR] detector task started");
    }

    /// Signal the loop to exit and wait (bounded) for it to finish.
    /// No-op (with a warning) when already stopped.
    pub async fn stop(&self) {
        let mut inner = self.inner.lock().await;

        let Some(handle) = inner.handle.take() else {
            warn!("[DETECTOR] stop requested but detector not running");
            return;
        };
        if let Some(token) = inner.cancel_token.take() {
            token.cancel();
        }

        match tokio::time::timeout(STOP_JOIN_TIMEOUT, handle).await {
            Ok(Ok(())) => info!("[DETECTOR] detector stopped"),
            Ok(Err(err)) => warn!("[DETECTOR] detection loop task failed: {err}"),
            Err(_) => warn!(
                "[DETECTOR] detection loop did not exit within {:?}, proceeding",
                STOP_JOIN_TIMEOUT
            ),
        }
    }

    pub async fn is_running(&self) -> bool {
        let inner = self.inner.lock().await;
        inner
            .handle
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }
}
