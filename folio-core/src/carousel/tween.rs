//! Time-based tween that moves the render surface toward the controller's
//! offset, or snaps there when the controller asks for an instant jump.

use std::time::{Duration, Instant};

/// Easing curve applied to normalized time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    Linear,
    EaseIn,
    #[default]
    EaseOut,
    EaseInOut,
}

impl Easing {
    /// Map `t` in `0..=1` onto the curve (quadratic variants).
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::EaseIn => t * t,
            Easing::EaseOut => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseInOut => {
                if t < 0.5 {
                    2.0 * t * t
                } else {
                    1.0 - 2.0 * (1.0 - t) * (1.0 - t)
                }
            }
        }
    }
}

#[derive(Debug, Clone)]
pub struct OffsetTween {
    active: bool,
    start: f32,
    target: f32,
    current: f32,
    started_at: Instant,
    duration: Duration,
    easing: Easing,
}

impl Default for OffsetTween {
    fn default() -> Self {
        Self {
            active: false,
            start: 0.0,
            target: 0.0,
            current: 0.0,
            started_at: Instant::now(),
            duration: Duration::from_millis(500),
            easing: Easing::EaseInOut,
        }
    }
}

impl OffsetTween {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Last value produced by `tick` or `jump_to`.
    pub fn current(&self) -> f32 {
        self.current
    }

    pub fn target(&self) -> f32 {
        self.target
    }

    /// Animate from the current value to `target`. Restarting toward the
    /// same target while already animating keeps the running animation.
    pub fn animate_to(
        &mut self,
        target: f32,
        duration: Duration,
        easing: Easing,
        now: Instant,
    ) {
        if self.active && (self.target - target).abs() <= f32::EPSILON {
            return;
        }
        if !self.active && (self.current - target).abs() <= f32::EPSILON {
            return;
        }
        self.active = true;
        self.start = self.current;
        self.target = target;
        self.started_at = now;
        self.duration = duration;
        self.easing = easing;
    }

    /// Move to `target` immediately, cancelling any running animation.
    pub fn jump_to(&mut self, target: f32) -> f32 {
        self.active = false;
        self.start = target;
        self.target = target;
        self.current = target;
        target
    }

    /// Returns `Some(next_value)` while animating (the final call yields the
    /// target exactly), or `None` when inactive.
    pub fn tick(&mut self, now: Instant) -> Option<f32> {
        if !self.active {
            return None;
        }
        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed >= self.duration || self.duration.is_zero() {
            self.active = false;
            self.current = self.target;
            return Some(self.target);
        }
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32())
            .clamp(0.0, 1.0);
        let eased = self.easing.apply(t);
        self.current = self.start + (self.target - self.start) * eased;
        Some(self.current)
    }

    /// Cancel the current animation, leaving the value where it is.
    pub fn cancel(&mut self) {
        self.active = false;
    }
}
