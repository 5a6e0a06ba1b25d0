//! Session state that animates: reveal machines, the typewriter, scroll and
//! the background particle field.

mod particles;
mod reveal;
mod scroll;
mod typewriter;

pub use particles::ParticleField;
pub use reveal::{
    BATCH_DELAY_STEP, BOTTOM_MARGIN_ROWS, ELEMENT_DELAY_STEP, HIDDEN_OFFSET, HIDDEN_SCALE,
    REVEAL_TRANSITION, RevealController, RevealPhase, RevealStyle, VISIBLE_FRACTION,
    is_intersecting,
};
pub use scroll::{PageScroll, SMOOTH_SCROLL};
pub use typewriter::{TYPE_INTERVAL, Typewriter};
