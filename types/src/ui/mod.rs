//! UI-facing types shared by the engine and the renderer.

mod animation;

pub use animation::{DelayedTimer, EffectTimer, normalized_progress, standard_ease};

/// UI configuration options derived from config/environment.
#[derive(Debug, Clone, Copy, Default)]
pub struct UiOptions {
    /// Use ASCII-only glyphs for icons and decorations.
    pub ascii_only: bool,
    /// Enable a high-contrast color palette.
    pub high_contrast: bool,
    /// Skip animations and motion effects; render final states directly.
    pub reduced_motion: bool,
}
