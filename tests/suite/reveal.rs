//! Scroll-reveal behavior across the whole page.

use std::time::Duration;

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use vitrine_engine::ui::{RevealStyle, is_intersecting};
use vitrine_engine::{App, NavItem};
use vitrine_tui::draw;
use vitrine_types::ui::UiOptions;

fn drawn_app(width: u16, height: u16) -> App {
    let mut app = App::new(UiOptions::default());
    let backend = TestBackend::new(width, height);
    let mut terminal = Terminal::new(backend).expect("failed to create terminal");
    terminal.draw(|frame| draw(frame, &mut app)).expect("draw");
    app
}

/// Drive time the way the frame loop does, in small ticks, so a glide passes
/// through every intermediate viewport and the blocks it uncovers settle.
fn settle(app: &mut App) {
    for _ in 0..600 {
        app.advance(Duration::from_millis(16));
    }
}

#[test]
fn all_blocks_start_with_the_hidden_contract() {
    let app = App::new(UiOptions::default());
    for index in 0..app.reveal_len() {
        let style = app.reveal_style(index);
        assert!((style.opacity).abs() < f32::EPSILON, "block {index}");
        assert!((style.offset - 50.0).abs() < f32::EPSILON, "block {index}");
        assert!((style.scale - 0.95).abs() < f32::EPSILON, "block {index}");
    }
}

#[test]
fn off_screen_blocks_stay_hidden() {
    let mut app = drawn_app(80, 24);
    app.advance(Duration::from_secs(30));

    // The hero fills the first viewport, so at scroll offset 0 at least the
    // later blocks (education, contact) must still be hidden.
    let last = app.reveal_len() - 1;
    assert!(!app.is_revealed(last));
    assert_eq!(app.reveal_style(last), RevealStyle::HIDDEN);
}

#[test]
fn scrolling_to_the_end_reveals_everything() {
    let mut app = drawn_app(80, 24);

    // Walk the page the way a reader would, settling at each stop.
    for item in [NavItem::Experience, NavItem::Skills, NavItem::Connect] {
        app.scroll_to(item);
        settle(&mut app);
    }
    app.scroll_end();
    settle(&mut app);

    for index in 0..app.reveal_len() {
        assert!(app.is_revealed(index), "block {index} never revealed");
        assert_eq!(app.reveal_style(index), RevealStyle::VISIBLE);
    }
}

#[test]
fn revealed_blocks_survive_scrolling_away() {
    let mut app = drawn_app(80, 24);
    app.scroll_to(NavItem::Experience);
    settle(&mut app);
    let revealed: Vec<usize> = (0..app.reveal_len())
        .filter(|index| app.is_revealed(*index))
        .collect();
    assert!(!revealed.is_empty());

    app.scroll_to(NavItem::Home);
    settle(&mut app);
    for index in revealed {
        assert!(app.is_revealed(index), "block {index} reverted");
        assert_eq!(app.reveal_style(index), RevealStyle::VISIBLE);
    }
}

#[test]
fn threshold_needs_a_tenth_of_the_block() {
    // 20-row block, 30-row viewport, 3-row bottom margin: the trigger zone
    // covers rows scroll..scroll+27.
    assert!(!is_intersecting(100, 20, 60, 30)); // zone ends at 87
    assert!(!is_intersecting(100, 20, 74, 30)); // zone ends at 101, 1 row < 2
    assert!(is_intersecting(100, 20, 75, 30)); // 2 rows = 10%
    assert!(is_intersecting(100, 20, 100, 30));
}

#[test]
fn reduced_motion_reveals_without_animation() {
    let mut app = App::new(UiOptions {
        reduced_motion: true,
        ..UiOptions::default()
    });
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).expect("failed to create terminal");
    terminal.draw(|frame| draw(frame, &mut app)).expect("draw");

    app.scroll_end();
    app.advance(Duration::from_millis(8));
    terminal.draw(|frame| draw(frame, &mut app)).expect("draw");
    app.advance(Duration::from_millis(8));

    // Everything in view is fully visible with no transition in flight.
    let last = app.reveal_len() - 1;
    assert!(app.is_revealed(last));
    assert_eq!(app.reveal_style(last), RevealStyle::VISIBLE);
}
