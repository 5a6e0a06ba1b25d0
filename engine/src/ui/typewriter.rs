//! The hero title typewriter.
//!
//! The heading starts empty on mount; the first grapheme appears on the first
//! tick and each subsequent one 100 ms after the previous, exactly once. The
//! state lives here and is advanced by `App::tick`, so dropping the app
//! cancels any remaining reveals.

use std::time::Duration;

use unicode_segmentation::UnicodeSegmentation;

/// Interval between consecutive characters.
pub const TYPE_INTERVAL: Duration = Duration::from_millis(100);

#[derive(Debug)]
pub struct Typewriter {
    text: String,
    /// Byte length of each grapheme prefix, in order.
    prefix_ends: Vec<usize>,
    shown: usize,
    elapsed: Duration,
}

impl Typewriter {
    #[must_use]
    pub fn new(text: &str) -> Self {
        let prefix_ends = text
            .grapheme_indices(true)
            .map(|(index, grapheme)| index + grapheme.len())
            .collect();
        Self {
            text: text.to_string(),
            prefix_ends,
            shown: 0,
            elapsed: Duration::ZERO,
        }
    }

    /// A typewriter that has already finished (reduced motion).
    #[must_use]
    pub fn completed(text: &str) -> Self {
        let mut typewriter = Self::new(text);
        typewriter.shown = typewriter.prefix_ends.len();
        typewriter
    }

    /// Advance by `delta`. The first grapheme shows as soon as any time has
    /// passed; one more every [`TYPE_INTERVAL`] after that.
    pub fn advance(&mut self, delta: Duration) {
        if self.is_complete() {
            return;
        }
        self.elapsed = self.elapsed.saturating_add(delta);
        let intervals = (self.elapsed.as_micros() / TYPE_INTERVAL.as_micros()) as usize;
        self.shown = (intervals + 1).min(self.prefix_ends.len());
    }

    /// The currently revealed prefix.
    #[must_use]
    pub fn visible(&self) -> &str {
        if self.shown == 0 {
            ""
        } else {
            &self.text[..self.prefix_ends[self.shown - 1]]
        }
    }

    #[must_use]
    pub fn full_text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.shown == self.prefix_ends.len()
    }
}
