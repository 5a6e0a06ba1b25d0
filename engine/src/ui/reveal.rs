//! Scroll-triggered reveal state machines.
//!
//! Each marked block owns a monotonic `Hidden -> Pending -> Revealed` machine.
//! Two stagger layers combine: a fixed per-element transition delay assigned
//! at registration (`index * 100 ms`), and a per-batch arming delay computed
//! when several blocks cross the visibility threshold in the same tick
//! (`position in batch * 150 ms`). A block reveals at most once per session.

use std::time::Duration;

use vitrine_types::ui::{DelayedTimer, standard_ease};

/// Length of the reveal transition once it starts.
pub const REVEAL_TRANSITION: Duration = Duration::from_millis(800);
/// Per-element transition start delay, multiplied by the element index.
pub const ELEMENT_DELAY_STEP: Duration = Duration::from_millis(100);
/// Spacing between blocks that crossed the threshold in the same tick.
pub const BATCH_DELAY_STEP: Duration = Duration::from_millis(150);
/// Fraction of a block's rows that must be inside the trigger zone.
pub const VISIBLE_FRACTION: f32 = 0.1;
/// Rows shaved off the bottom of the viewport when testing visibility, so
/// blocks must be well on-screen before they animate.
pub const BOTTOM_MARGIN_ROWS: u16 = 3;
/// Vertical offset of a hidden block, in source units (16 units per row).
pub const HIDDEN_OFFSET: f32 = 50.0;
/// Scale of a hidden block.
pub const HIDDEN_SCALE: f32 = 0.95;

/// Lifecycle of one marked block. No transition ever goes back to `Hidden`.
#[derive(Debug, Clone)]
pub enum RevealPhase {
    Hidden,
    /// Intersected; waiting out the remaining batch stagger delay.
    Pending(Duration),
    /// Transitioning (or settled) to the visible state.
    Revealed(DelayedTimer),
}

/// Presentation values for one block at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RevealStyle {
    /// 0.0 (transparent) to 1.0 (opaque).
    pub opacity: f32,
    /// Downward offset in source units; 0.0 when settled.
    pub offset: f32,
    /// 0.95 (hidden) to 1.0 (settled).
    pub scale: f32,
}

impl RevealStyle {
    pub const HIDDEN: Self = Self {
        opacity: 0.0,
        offset: HIDDEN_OFFSET,
        scale: HIDDEN_SCALE,
    };

    pub const VISIBLE: Self = Self {
        opacity: 1.0,
        offset: 0.0,
        scale: 1.0,
    };

    fn at(progress: f32) -> Self {
        let eased = standard_ease(progress);
        Self {
            opacity: eased,
            offset: HIDDEN_OFFSET * (1.0 - eased),
            scale: HIDDEN_SCALE + (1.0 - HIDDEN_SCALE) * eased,
        }
    }
}

#[derive(Debug, Clone)]
struct RevealBlock {
    phase: RevealPhase,
    transition_delay: Duration,
}

impl RevealBlock {
    fn advance(&mut self, delta: Duration) {
        match &mut self.phase {
            RevealPhase::Hidden => {}
            RevealPhase::Pending(remaining) => {
                if delta < *remaining {
                    *remaining -= delta;
                    return;
                }
                // The arming delay drained mid-tick; the overflow belongs to
                // the transition so same-tick time is not lost.
                let overflow = delta - *remaining;
                let mut timer = DelayedTimer::new(self.transition_delay, REVEAL_TRANSITION);
                timer.advance(overflow);
                self.phase = RevealPhase::Revealed(timer);
            }
            RevealPhase::Revealed(timer) => timer.advance(delta),
        }
    }
}

/// All reveal machines for the page, in document order.
#[derive(Debug)]
pub struct RevealController {
    blocks: Vec<RevealBlock>,
    instant: bool,
}

impl RevealController {
    /// Register `count` marked blocks, all `Hidden`. With `instant` set
    /// (reduced motion), intersection reveals a block fully with no
    /// animation.
    #[must_use]
    pub fn new(count: usize, instant: bool) -> Self {
        let blocks = (0..count)
            .map(|index| RevealBlock {
                phase: RevealPhase::Hidden,
                transition_delay: ELEMENT_DELAY_STEP * index as u32,
            })
            .collect();
        Self { blocks, instant }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Advance every armed timer. Pending blocks whose stagger delay has
    /// drained start their transition.
    pub fn advance(&mut self, delta: Duration) {
        for block in &mut self.blocks {
            block.advance(delta);
        }
    }

    /// Feed the current visibility of every block (document order, aligned
    /// with registration). Hidden blocks that are now visible form this
    /// tick's batch and arm with `position in batch * 150 ms`.
    pub fn observe(&mut self, visible: &[bool]) {
        debug_assert_eq!(visible.len(), self.blocks.len());
        let instant = self.instant;
        let mut batch = 0u32;
        for (block, seen) in self.blocks.iter_mut().zip(visible) {
            if !seen || !matches!(block.phase, RevealPhase::Hidden) {
                continue;
            }
            block.phase = if instant {
                RevealPhase::Revealed(DelayedTimer::completed(REVEAL_TRANSITION))
            } else {
                RevealPhase::Pending(BATCH_DELAY_STEP * batch)
            };
            batch += 1;
        }
    }

    /// Presentation values for the block at `index`.
    #[must_use]
    pub fn style(&self, index: usize) -> RevealStyle {
        match self.blocks.get(index).map(|block| &block.phase) {
            Some(RevealPhase::Revealed(timer)) => RevealStyle::at(timer.progress()),
            Some(RevealPhase::Hidden | RevealPhase::Pending(_)) => RevealStyle::HIDDEN,
            None => RevealStyle::VISIBLE,
        }
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        matches!(
            self.blocks.get(index).map(|block| &block.phase),
            Some(RevealPhase::Revealed(_))
        )
    }
}

/// Whether a block intersects the trigger zone: at least [`VISIBLE_FRACTION`]
/// of its rows inside the viewport shrunk by [`BOTTOM_MARGIN_ROWS`].
#[must_use]
pub fn is_intersecting(start: u16, rows: u16, scroll_offset: u16, viewport_rows: u16) -> bool {
    if rows == 0 {
        return false;
    }
    let zone_start = scroll_offset;
    let zone_end = scroll_offset.saturating_add(viewport_rows.saturating_sub(BOTTOM_MARGIN_ROWS));
    let block_end = start.saturating_add(rows);
    let overlap = block_end.min(zone_end).saturating_sub(start.max(zone_start));
    f32::from(overlap) >= f32::from(rows) * VISIBLE_FRACTION
}
