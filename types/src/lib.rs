//! Core domain types for Vitrine.
//!
//! This crate holds the leaf data model: the portfolio content types, the
//! transient cursor position, and the animation timing primitives. It has no
//! IO and no async; everything here is plain data consumed by the engine and
//! the TUI.

mod content;
mod cursor;
pub mod ui;

pub use content::{EducationEntry, ExperienceEntry, PortfolioContent, Profile, SkillSet};
pub use cursor::CursorPosition;
