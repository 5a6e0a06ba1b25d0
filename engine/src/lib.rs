//! Core engine for Vitrine - the portfolio page state machine.
//!
//! This crate contains everything that changes during a session, without any
//! TUI dependency:
//!
//! - **Content store**: the compiled-in portfolio content ([`App::content`])
//! - **Navigation**: the four nav actions and their section targets
//! - **Scroll**: manual offset plus eased smooth-scroll glides
//! - **Reveal**: per-block `Hidden -> Pending -> Revealed` state machines with
//!   layered stagger delays
//! - **Typewriter**: the grapheme-by-grapheme hero title
//! - **Configuration**: `~/.vitrine/config.toml`
//!
//! The TUI layer (`vitrine-tui`) reads state from [`App`], reports the
//! computed page layout back via [`App::update_layout`], and forwards input.
//! No rendering logic lives in this crate.

mod app;
mod config;
mod content;
pub mod submission;
pub mod ui;

pub use app::{App, NavItem, PageLayout, RowSpan, Section, StatusKind};
pub use config::{AppConfig, ConfigError, VitrineConfig};

// Re-export the data model for downstream crates.
pub use vitrine_types::ui::UiOptions;
pub use vitrine_types::{
    CursorPosition, EducationEntry, ExperienceEntry, PortfolioContent, Profile, SkillSet,
};
