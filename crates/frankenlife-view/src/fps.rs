//! Sliding-window frame-rate meter.

use std::collections::VecDeque;
use std::fmt;

use serde::Serialize;

/// Maximum number of instantaneous samples retained.
pub const FPS_WINDOW: usize = 100;

/// Frame-rate meter over a bounded window of instantaneous rates.
///
/// Each [`FpsMeter::sample`] converts the delta since the previous
/// timestamp into frames per second (`1000 / Δt`). A zero delta yields
/// `+∞`; the window statistics simply reflect it. No smoothing beyond the
/// window bound.
#[derive(Debug, Clone)]
pub struct FpsMeter {
    last_timestamp_ms: f64,
    window: VecDeque<f64>,
}

impl FpsMeter {
    /// Create a meter anchored at `now_ms` (the host's monotonic clock,
    /// typically `performance.now()`).
    #[must_use]
    pub fn new(now_ms: f64) -> Self {
        Self {
            last_timestamp_ms: now_ms,
            window: VecDeque::with_capacity(FPS_WINDOW),
        }
    }

    /// Record one frame boundary and report statistics over the window.
    ///
    /// Evicts the oldest sample first once the window holds [`FPS_WINDOW`]
    /// entries.
    pub fn sample(&mut self, now_ms: f64) -> FpsStats {
        let delta = now_ms - self.last_timestamp_ms;
        self.last_timestamp_ms = now_ms;
        let latest = 1000.0 / delta;

        self.window.push_back(latest);
        if self.window.len() > FPS_WINDOW {
            self.window.pop_front();
        }

        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        let mut sum = 0.0;
        for &rate in &self.window {
            sum += rate;
            min = min.min(rate);
            max = max.max(rate);
        }
        let mean = sum / self.window.len() as f64;

        FpsStats {
            latest,
            mean,
            min,
            max,
        }
    }

    /// Number of samples currently held.
    #[must_use]
    pub fn window_len(&self) -> usize {
        self.window.len()
    }
}

/// Latest/mean/min/max over the current window, in frames per second.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FpsStats {
    pub latest: f64,
    pub mean: f64,
    pub min: f64,
    pub max: f64,
}

impl FpsStats {
    /// Serialize for machine-readable readback.
    #[must_use]
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

impl fmt::Display for FpsStats {
    /// The HUD text block, each figure rounded to the nearest integer.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Frames per Second:\n         latest = {}\navg of last 100 = {}\nmin of last 100 = {}\nmax of last 100 = {}",
            self.latest.round(),
            self.mean.round(),
            self.min.round(),
            self.max.round(),
        )
    }
}
