//! The page state machine.
//!
//! [`App`] owns every piece of state that changes during a session: scroll,
//! reveal machines, the typewriter, the cursor position and the status line.
//! The renderer reads from it, reports the computed layout back through
//! [`App::update_layout`], and the event loop drives time through
//! [`App::tick`]. Because all timers live here, dropping the `App` cancels
//! everything in flight.

use std::time::{Duration, Instant};

use vitrine_types::ui::UiOptions;
use vitrine_types::{CursorPosition, PortfolioContent};

use crate::content;
use crate::ui::{
    PageScroll, ParticleField, RevealController, RevealStyle, Typewriter, is_intersecting,
};

const STATUS_TTL: Duration = Duration::from_secs(4);

/// The four addressable page regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Hero,
    Experience,
    Skills,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Hero,
        Section::Experience,
        Section::Skills,
        Section::Contact,
    ];

    /// Region identifier, also the anchor name in the original page.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Section::Hero => "hero",
            Section::Experience => "experience",
            Section::Skills => "skills",
            Section::Contact => "contact",
        }
    }
}

/// The four navigation bar actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    Home,
    Experience,
    Skills,
    Connect,
}

impl NavItem {
    pub const ALL: [NavItem; 4] = [
        NavItem::Home,
        NavItem::Experience,
        NavItem::Skills,
        NavItem::Connect,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            NavItem::Home => "Home",
            NavItem::Experience => "Experience",
            NavItem::Skills => "Skills",
            NavItem::Connect => "Connect",
        }
    }

    /// The region this action scrolls to.
    #[must_use]
    pub fn target(self) -> Section {
        match self {
            NavItem::Home => Section::Hero,
            NavItem::Experience => Section::Experience,
            NavItem::Skills => Section::Skills,
            NavItem::Connect => Section::Contact,
        }
    }

    /// Map the number keys 1-4 onto the nav actions.
    #[must_use]
    pub fn from_digit(digit: char) -> Option<Self> {
        match digit {
            '1' => Some(NavItem::Home),
            '2' => Some(NavItem::Experience),
            '3' => Some(NavItem::Skills),
            '4' => Some(NavItem::Connect),
            _ => None,
        }
    }
}

/// A run of document rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowSpan {
    pub start: u16,
    pub rows: u16,
}

/// Geometry the renderer reports back after building a frame.
///
/// Row numbers are measured in the virtual document, not the screen; the
/// engine combines them with the scroll offset for intersection tests and
/// scroll targets.
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    pub total_rows: u16,
    pub viewport_rows: u16,
    /// Start row of each rendered region.
    pub sections: Vec<(Section, u16)>,
    /// Marked blocks in document order, aligned with the reveal controller.
    pub reveal_blocks: Vec<RowSpan>,
    /// Clickable nav label extents: (item, first column, last column).
    pub nav_hits: Vec<(NavItem, u16, u16)>,
    /// Screen row the nav labels sit on.
    pub nav_row: u16,
}

impl PageLayout {
    #[must_use]
    pub fn section_start(&self, section: Section) -> Option<u16> {
        self.sections
            .iter()
            .find(|(candidate, _)| *candidate == section)
            .map(|(_, start)| *start)
    }

    #[must_use]
    pub fn nav_hit(&self, column: u16, row: u16) -> Option<NavItem> {
        if row != self.nav_row {
            return None;
        }
        self.nav_hits
            .iter()
            .find(|(_, first, last)| (*first..=*last).contains(&column))
            .map(|(item, _, _)| *item)
    }
}

/// Severity of a status-line message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

#[derive(Debug)]
struct StatusMessage {
    text: String,
    kind: StatusKind,
    since: Instant,
}

/// Application state. See the crate docs for the architecture.
#[derive(Debug)]
pub struct App {
    content: &'static PortfolioContent,
    options: UiOptions,
    scroll: PageScroll,
    reveal: RevealController,
    typewriter: Typewriter,
    particles: ParticleField,
    cursor: Option<CursorPosition>,
    layout: PageLayout,
    status: Option<StatusMessage>,
    last_tick: Instant,
}

impl App {
    #[must_use]
    pub fn new(options: UiOptions) -> Self {
        let content = content::load();
        let name = content.profile.name;
        let typewriter = if options.reduced_motion {
            Typewriter::completed(name)
        } else {
            Typewriter::new(name)
        };
        Self {
            content,
            options,
            scroll: PageScroll::default(),
            reveal: RevealController::new(reveal_block_count(content), options.reduced_motion),
            typewriter,
            particles: ParticleField::new(options.reduced_motion),
            cursor: None,
            layout: PageLayout::default(),
            status: None,
            last_tick: Instant::now(),
        }
    }

    #[must_use]
    pub fn content(&self) -> &'static PortfolioContent {
        self.content
    }

    #[must_use]
    pub fn ui_options(&self) -> UiOptions {
        self.options
    }

    // === Cursor tracking ===

    /// Record a pointer-move event. Last write wins; no throttling.
    pub fn set_cursor_position(&mut self, column: u16, row: u16) {
        self.cursor = Some(CursorPosition { column, row });
    }

    #[must_use]
    pub fn cursor(&self) -> Option<CursorPosition> {
        self.cursor
    }

    // === Typewriter ===

    /// The hero heading as currently typed.
    #[must_use]
    pub fn typed_title(&self) -> &str {
        self.typewriter.visible()
    }

    // === Reveal ===

    #[must_use]
    pub fn reveal_len(&self) -> usize {
        self.reveal.len()
    }

    #[must_use]
    pub fn reveal_style(&self, index: usize) -> RevealStyle {
        self.reveal.style(index)
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.reveal.is_revealed(index)
    }

    // === Particles ===

    #[must_use]
    pub fn particle_cells(&self, width: u16, height: u16) -> Vec<(u16, u16)> {
        self.particles.cells(width, height)
    }

    // === Scroll and navigation ===

    #[must_use]
    pub fn scroll_offset(&self) -> u16 {
        self.scroll.offset()
    }

    #[must_use]
    pub fn scroll_max(&self) -> u16 {
        self.scroll.max()
    }

    pub fn scroll_by(&mut self, delta: i32) {
        self.scroll.scroll_by(delta);
    }

    pub fn page_up(&mut self) {
        self.scroll.scroll_by(-self.page_rows());
    }

    pub fn page_down(&mut self) {
        self.scroll.scroll_by(self.page_rows());
    }

    pub fn scroll_home(&mut self) {
        self.scroll.jump_to(0);
    }

    pub fn scroll_end(&mut self) {
        let max = self.scroll.max();
        self.scroll.jump_to(max);
    }

    fn page_rows(&self) -> i32 {
        i32::from(self.layout.viewport_rows.saturating_sub(2).max(1))
    }

    /// Smooth-scroll to a nav target. Silently no-ops when the region is
    /// absent from the current layout.
    pub fn scroll_to(&mut self, item: NavItem) {
        let Some(row) = self.layout.section_start(item.target()) else {
            return;
        };
        if self.options.reduced_motion {
            self.scroll.jump_to(row);
        } else {
            self.scroll.glide_to(row);
        }
    }

    /// Hit-test the nav bar at a clicked cell.
    #[must_use]
    pub fn nav_hit(&self, column: u16, row: u16) -> Option<NavItem> {
        self.layout.nav_hit(column, row)
    }

    // === Layout feedback ===

    /// Accept the geometry computed while drawing the last frame.
    pub fn update_layout(&mut self, layout: PageLayout) {
        self.scroll
            .set_max(layout.total_rows.saturating_sub(layout.viewport_rows));
        self.layout = layout;
    }

    #[must_use]
    pub fn layout(&self) -> &PageLayout {
        &self.layout
    }

    // === Status line ===

    pub fn set_status(&mut self, kind: StatusKind, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            text: text.into(),
            kind,
            since: Instant::now(),
        });
    }

    /// The current status message, if it has not expired.
    #[must_use]
    pub fn status(&self) -> Option<(&str, StatusKind)> {
        self.status
            .as_ref()
            .filter(|status| status.since.elapsed() < STATUS_TTL)
            .map(|status| (status.text.as_str(), status.kind))
    }

    // === Time ===

    /// Advance all animation state by wall-clock time since the last tick.
    pub fn tick(&mut self) {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick);
        self.last_tick = now;
        self.advance(delta);
    }

    /// Advance all animation state by an explicit delta.
    ///
    /// Visibility is observed first so a batch armed this tick starts
    /// consuming the tick's time immediately; the viewport it sees is the one
    /// from before this tick's scroll movement, one frame behind, like a real
    /// intersection observer.
    pub fn advance(&mut self, delta: Duration) {
        self.observe_visibility();
        self.typewriter.advance(delta);
        self.scroll.advance(delta);
        self.particles.advance(delta);
        self.reveal.advance(delta);
    }

    /// Evaluate block visibility against the current viewport and feed the
    /// reveal controller. Blocks crossing the threshold in the same tick form
    /// one batch.
    fn observe_visibility(&mut self) {
        if self.layout.viewport_rows == 0 || self.layout.reveal_blocks.len() != self.reveal.len() {
            return;
        }
        let offset = self.scroll.offset();
        let viewport = self.layout.viewport_rows;
        let visible: Vec<bool> = self
            .layout
            .reveal_blocks
            .iter()
            .map(|span| is_intersecting(span.start, span.rows, offset, viewport))
            .collect();
        self.reveal.observe(&visible);
    }
}

/// Number of marked blocks the page carries, in document order:
/// the experience heading, one per experience card, the skills heading, the
/// skills and education cards, the contact heading and the contact links.
#[must_use]
pub fn reveal_block_count(content: &PortfolioContent) -> usize {
    1 + content.experience.len() + 1 + 2 + 1 + 1
}
