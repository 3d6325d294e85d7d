//! Load timing, frame rate sampling and captured script faults.
//!
//! Everything here only logs; nothing feeds back into page behavior.

use std::time::Duration;

use serde::Deserialize;

use lingo_core::Millis;

//
// ─── LOAD TIMING ───────────────────────────────────────────────────────────────
//

/// Navigation timing breakdown reported by the webview, in milliseconds.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct NavigationTiming {
    pub dns_ms: f64,
    pub connect_ms: f64,
    pub response_ms: f64,
    pub dom_processing_ms: f64,
    pub load_event_ms: f64,
}

/// Logged once per page load, when the loading screen goes away.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadReport {
    pub total: Duration,
    pub navigation: Option<NavigationTiming>,
}

impl LoadReport {
    #[must_use]
    pub fn new(started_at: Millis, ready_at: Millis) -> Self {
        Self {
            total: ready_at.since(started_at),
            navigation: None,
        }
    }

    #[must_use]
    pub fn with_navigation(mut self, navigation: Option<NavigationTiming>) -> Self {
        self.navigation = navigation;
        self
    }

    pub fn log(&self) {
        let total_ms = u64::try_from(self.total.as_millis()).unwrap_or(u64::MAX);
        match &self.navigation {
            Some(nav) => tracing::info!(
                total_ms,
                dns_ms = nav.dns_ms,
                connect_ms = nav.connect_ms,
                response_ms = nav.response_ms,
                dom_processing_ms = nav.dom_processing_ms,
                load_event_ms = nav.load_event_ms,
                "page loaded"
            ),
            None => tracing::info!(total_ms, "page loaded"),
        }
    }
}

//
// ─── FRAME RATE ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameRateSample {
    pub fps: f64,
    pub window: Duration,
    threshold: f64,
}

impl FrameRateSample {
    #[must_use]
    pub fn is_low(&self) -> bool {
        self.fps < self.threshold
    }

    pub fn log(&self) {
        if self.is_low() {
            tracing::warn!(fps = self.fps, "low frame rate");
        } else {
            tracing::trace!(fps = self.fps, "frame rate");
        }
    }
}

/// Estimates frame rate over rolling one-second windows.
#[derive(Debug, Clone)]
pub struct FrameRateMeter {
    window: Duration,
    threshold: f64,
    window_start: Option<Millis>,
    frames: u64,
}

impl FrameRateMeter {
    #[must_use]
    pub fn new(threshold: f64) -> Self {
        Self {
            window: Duration::from_secs(1),
            threshold,
            window_start: None,
            frames: 0,
        }
    }

    /// Adds `frames` painted up to `now`; returns a sample when a window closes.
    ///
    /// The first report only opens the window.
    pub fn record(&mut self, now: Millis, frames: u64) -> Option<FrameRateSample> {
        let Some(start) = self.window_start else {
            self.window_start = Some(now);
            return None;
        };

        self.frames += frames;
        let elapsed = now.since(start);
        if elapsed < self.window {
            return None;
        }

        #[allow(clippy::cast_precision_loss)]
        let fps = self.frames as f64 / elapsed.as_secs_f64();
        self.window_start = Some(now);
        self.frames = 0;
        Some(FrameRateSample {
            fps,
            window: elapsed,
            threshold: self.threshold,
        })
    }
}

//
// ─── SCRIPT FAULTS ─────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaultKind {
    Error,
    Rejection,
}

/// An uncaught error or unhandled promise rejection in the page.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ScriptFault {
    pub kind: FaultKind,
    pub message: String,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub line: Option<u32>,
}

impl ScriptFault {
    pub fn log(&self) {
        match self.kind {
            FaultKind::Error => tracing::error!(
                message = %self.message,
                source = self.source.as_deref().unwrap_or("<unknown>"),
                line = self.line.unwrap_or_default(),
                "uncaught script error"
            ),
            FaultKind::Rejection => {
                tracing::error!(reason = %self.message, "unhandled promise rejection");
            }
        }
    }
}
