//! Animation timing primitives.

use std::time::Duration;

/// Progress of `elapsed` through `duration`, clamped to `0.0..=1.0`.
///
/// A zero duration is treated as already complete.
#[must_use]
pub fn normalized_progress(elapsed: Duration, duration: Duration) -> f32 {
    if duration.is_zero() {
        return 1.0;
    }

    let elapsed = elapsed.as_secs_f32();
    let total = duration.as_secs_f32();
    (elapsed / total).clamp(0.0, 1.0)
}

/// Accumulating timer for a fixed-duration effect.
#[derive(Debug, Clone)]
pub struct EffectTimer {
    elapsed: Duration,
    duration: Duration,
}

impl EffectTimer {
    #[must_use]
    pub fn new(duration: Duration) -> Self {
        Self {
            elapsed: Duration::ZERO,
            duration,
        }
    }

    /// A timer that is already complete.
    #[must_use]
    pub fn finished(duration: Duration) -> Self {
        Self {
            elapsed: duration,
            duration,
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        self.elapsed = self.elapsed.saturating_add(delta);
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        normalized_progress(self.elapsed, self.duration)
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.elapsed >= self.duration
    }
}

/// An [`EffectTimer`] that only starts counting after an initial delay.
///
/// Models a transition with a start delay: progress stays at zero while the
/// delay drains, then runs through the inner timer.
#[derive(Debug, Clone)]
pub struct DelayedTimer {
    delay_remaining: Duration,
    timer: EffectTimer,
}

impl DelayedTimer {
    #[must_use]
    pub fn new(delay: Duration, duration: Duration) -> Self {
        Self {
            delay_remaining: delay,
            timer: EffectTimer::new(duration),
        }
    }

    /// A timer that has already run to completion, delay and all.
    #[must_use]
    pub fn completed(duration: Duration) -> Self {
        Self {
            delay_remaining: Duration::ZERO,
            timer: EffectTimer::finished(duration),
        }
    }

    pub fn advance(&mut self, delta: Duration) {
        if self.delay_remaining.is_zero() {
            self.timer.advance(delta);
            return;
        }

        if delta <= self.delay_remaining {
            self.delay_remaining -= delta;
            return;
        }

        let overflow = delta - self.delay_remaining;
        self.delay_remaining = Duration::ZERO;
        self.timer.advance(overflow);
    }

    #[must_use]
    pub fn progress(&self) -> f32 {
        if self.delay_remaining.is_zero() {
            self.timer.progress()
        } else {
            0.0
        }
    }

    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.delay_remaining.is_zero() && self.timer.is_finished()
    }
}

/// The standard eased curve: cubic-bezier(0.4, 0, 0.2, 1).
///
/// Solved by bisection on the x component so the timing matches the curve
/// rather than a named approximation.
#[must_use]
pub fn standard_ease(t: f32) -> f32 {
    cubic_bezier(0.4, 0.0, 0.2, 1.0, t)
}

fn cubic_bezier(x1: f32, y1: f32, x2: f32, y2: f32, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t == 0.0 || t == 1.0 {
        return t;
    }

    // Bezier component for control points (0, c1, c2, 1).
    let component = |c1: f32, c2: f32, s: f32| {
        let inv = 1.0 - s;
        3.0 * inv * inv * s * c1 + 3.0 * inv * s * s * c2 + s * s * s
    };

    // Find the curve parameter whose x equals t.
    let mut lo = 0.0f32;
    let mut hi = 1.0f32;
    let mut s = t;
    for _ in 0..24 {
        let x = component(x1, x2, s);
        if (x - t).abs() < 1e-4 {
            break;
        }
        if x < t {
            lo = s;
        } else {
            hi = s;
        }
        s = (lo + hi) / 2.0;
    }

    component(y1, y2, s)
}
