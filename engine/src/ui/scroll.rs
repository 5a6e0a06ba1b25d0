//! Scroll state for the page viewport.
//!
//! The offset is measured in rows from the top of the rendered document.
//! Navigation actions glide to their target with the eased curve; manual
//! scrolling cancels any glide in flight.

use std::time::Duration;

use vitrine_types::ui::{EffectTimer, standard_ease};

/// Length of a smooth-scroll glide.
pub const SMOOTH_SCROLL: Duration = Duration::from_millis(400);

#[derive(Debug, Clone)]
struct Glide {
    from: f32,
    to: f32,
    timer: EffectTimer,
}

#[derive(Debug, Default)]
pub struct PageScroll {
    offset: u16,
    max: u16,
    glide: Option<Glide>,
}

impl PageScroll {
    #[must_use]
    pub fn offset(&self) -> u16 {
        self.offset
    }

    #[must_use]
    pub fn max(&self) -> u16 {
        self.max
    }

    /// Clamp to a new scrollable range (content height minus viewport).
    pub fn set_max(&mut self, max: u16) {
        self.max = max;
        self.offset = self.offset.min(max);
    }

    /// Manual scroll; cancels any glide in flight.
    pub fn scroll_by(&mut self, delta: i32) {
        self.glide = None;
        let target = i32::from(self.offset).saturating_add(delta);
        self.offset = target.clamp(0, i32::from(self.max)) as u16;
    }

    /// Jump without animation.
    pub fn jump_to(&mut self, row: u16) {
        self.glide = None;
        self.offset = row.min(self.max);
    }

    /// Start an eased glide toward `row`.
    pub fn glide_to(&mut self, row: u16) {
        let to = row.min(self.max);
        if to == self.offset {
            self.glide = None;
            return;
        }
        self.glide = Some(Glide {
            from: f32::from(self.offset),
            to: f32::from(to),
            timer: EffectTimer::new(SMOOTH_SCROLL),
        });
    }

    #[must_use]
    pub fn is_gliding(&self) -> bool {
        self.glide.is_some()
    }

    pub fn advance(&mut self, delta: Duration) {
        let Some(glide) = &mut self.glide else {
            return;
        };
        glide.timer.advance(delta);
        let eased = standard_ease(glide.timer.progress());
        let position = glide.from + (glide.to - glide.from) * eased;
        self.offset = (position.round().max(0.0) as u16).min(self.max);
        if glide.timer.is_finished() {
            self.offset = (glide.to as u16).min(self.max);
            self.glide = None;
        }
    }
}
