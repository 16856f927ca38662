//! Horizontal swipe recognition.
//!
//! A [`SwipeRecognizer`] is fed the start/move/end triple of one contact
//! sequence and decides whether it was a left or right swipe. It keeps no
//! state between gestures and knows nothing about navigation; callers attach
//! callbacks and decide what a swipe means.

use serde::Deserialize;
use yew::Callback;

use super::touch::{ContactPoint, GestureSample};
use crate::model::SwipeDirection;
use crate::util::clog;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct SwipeConfig {
    /// Minimum horizontal displacement in pixels.
    pub threshold: f64,
    /// Minimum speed in pixels per millisecond.
    pub velocity: f64,
    /// Horizontal displacement after which a move counts as a swipe in progress.
    pub lock_distance: f64,
}

impl Default for SwipeConfig {
    fn default() -> Self {
        Self {
            threshold: 100.0,
            velocity: 0.3,
            lock_distance: 20.0,
        }
    }
}

impl SwipeConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    fn qualifies(&self, delta_x: f64, delta_time_ms: f64) -> bool {
        if delta_time_ms.is_nan() || delta_time_ms <= 0.0 || !delta_x.is_finite() {
            return false;
        }
        let speed = delta_x.abs() / delta_time_ms;
        delta_x.abs() > self.threshold && speed > self.velocity
    }
}

#[derive(Default)]
pub struct SwipeRecognizer {
    config: SwipeConfig,
    on_swipe_left: Option<Callback<()>>,
    on_swipe_right: Option<Callback<()>>,
    sample: Option<GestureSample>,
}

impl SwipeRecognizer {
    pub fn new(config: SwipeConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    pub fn on_swipe_left(mut self, cb: Callback<()>) -> Self {
        self.on_swipe_left = Some(cb);
        self
    }

    pub fn on_swipe_right(mut self, cb: Callback<()>) -> Self {
        self.on_swipe_right = Some(cb);
        self
    }

    /// Signed horizontal displacement of a latched swipe.
    pub fn drag_offset(&self) -> Option<f64> {
        self.sample
            .as_ref()
            .filter(|s| s.is_swiping)
            .map(GestureSample::offset_x)
    }

    /// Begins a new contact sequence, replacing any unfinished one.
    pub fn on_contact_start(&mut self, point: ContactPoint, now_ms: f64) {
        self.sample = Some(GestureSample::begin(point, now_ms));
    }

    /// Returns true when the caller should suppress default scrolling for this move.
    pub fn on_contact_move(&mut self, point: ContactPoint) -> bool {
        let lock = self.config.lock_distance;
        let Some(sample) = self.sample.as_mut() else {
            return false;
        };
        sample.current_x = point.x;
        let delta_x = (point.x - sample.start_x).abs();
        let delta_y = (point.y - sample.start_y).abs();
        if delta_x > lock && delta_x > delta_y {
            sample.is_swiping = true;
            return true;
        }
        false
    }

    /// Finishes the contact sequence and emits the matching callback on a
    /// qualifying swipe. The sample is cleared whatever the outcome.
    pub fn on_contact_end(&mut self, point: ContactPoint, now_ms: f64) -> Option<SwipeDirection> {
        let sample = self.sample.take()?;
        if !sample.is_swiping {
            return None;
        }
        let delta_x = point.x - sample.start_x;
        let delta_time_ms = now_ms - sample.start_time_ms;
        if !self.config.qualifies(delta_x, delta_time_ms) {
            clog(&format!(
                "swipe: rejected dx={:.1} dt={:.0}ms",
                delta_x, delta_time_ms
            ));
            return None;
        }
        let dir = if delta_x > 0.0 {
            SwipeDirection::Right
        } else {
            SwipeDirection::Left
        };
        clog(&format!("swipe: {} dx={:.1} dt={:.0}ms", dir.as_str(), delta_x, delta_time_ms));
        let cb = match dir {
            SwipeDirection::Right => self.on_swipe_right.as_ref(),
            SwipeDirection::Left => self.on_swipe_left.as_ref(),
        };
        if let Some(cb) = cb {
            cb.emit(());
        }
        Some(dir)
    }

    /// Drops the active sequence without emitting anything (touchcancel).
    pub fn on_contact_cancel(&mut self) {
        self.sample = None;
    }
}
