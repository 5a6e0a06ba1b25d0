//! Full-page rendering tests through a vt100 virtual terminal.


use std::time::Duration;

use insta::assert_snapshot;
use ratatui::Terminal;

use vitrine_engine::App;
use vitrine_tui::{draw, glyphs};
use vitrine_types::ui::UiOptions;

use vt100_backend::VT100Backend;

const WIDTH: u16 = 80;
const HEIGHT: u16 = 30;

fn terminal() -> Terminal<VT100Backend> {
    Terminal::new(VT100Backend::new(WIDTH, HEIGHT)).expect("failed to create terminal")
}

#[test]
fn nav_bar_lists_all_four_actions() {
    let mut app = App::new(UiOptions::default());
    let mut terminal = terminal();
    terminal.draw(|frame| draw(frame, &mut app)).expect("draw");

    let screen = terminal.backend().to_string();
    for label in ["Home", "Experience", "Skills", "Connect"] {
        assert!(screen.contains(label), "nav missing {label}");
    }
}

#[test]
fn hero_heading_is_cleared_at_mount() {
    let mut app = App::new(UiOptions::default());
    let mut terminal = terminal();
    terminal.draw(|frame| draw(frame, &mut app)).expect("draw");

    // The name only exists in the hero title (the footer is off-screen), and
    // the typewriter has not produced anything yet.
    let screen = terminal.backend().to_string();
    assert!(!screen.contains("Raghav Arora"));
}

#[test]
fn hero_heading_types_out_the_full_name() {
    let mut app = App::new(UiOptions::default());
    let mut terminal = terminal();
    terminal.draw(|frame| draw(frame, &mut app)).expect("draw");
    app.advance(Duration::from_secs(10));
    terminal.draw(|frame| draw(frame, &mut app)).expect("draw");

    assert!(terminal.backend().to_string().contains("Raghav Arora"));
}

#[test]
fn hero_shows_tagline_and_summary() {
    let mut app = App::new(UiOptions::default());
    let mut terminal = terminal();
    terminal.draw(|frame| draw(frame, &mut app)).expect("draw");

    let screen = terminal.backend().to_string();
    assert!(screen.contains("Business Analytics"));
    assert!(screen.contains("logistics"));
}

#[test]
fn contact_region_renders_exact_targets() {
    let mut app = App::new(UiOptions::default());
    let mut terminal = terminal();
    terminal.draw(|frame| draw(frame, &mut app)).expect("draw");

    app.scroll_end();
    app.advance(Duration::from_secs(30));
    terminal.draw(|frame| draw(frame, &mut app)).expect("draw");

    let screen = terminal.backend().to_string();
    assert!(screen.contains("mailto:ar.raghav07@outlook.com"));
    assert!(screen.contains("https://www.linkedin.com/in/raghav-4-r7r4"));
    assert!(screen.contains("© 2024 Raghav Arora"));
}

#[test]
fn status_bar_offers_the_copy_actions() {
    let mut app = App::new(UiOptions::default());
    let mut terminal = terminal();
    terminal.draw(|frame| draw(frame, &mut app)).expect("draw");

    let screen = terminal.backend().to_string();
    assert!(screen.contains("copy email"));
    assert!(screen.contains("copy profile"));
    assert!(screen.contains("quit"));
}

#[test]
fn cursor_follower_tracks_the_pointer() {
    let mut app = App::new(UiOptions::default());
    let mut terminal = terminal();
    app.set_cursor_position(40, 10);
    terminal.draw(|frame| draw(frame, &mut app)).expect("draw");

    assert!(terminal.backend().to_string().contains('✦'));
}

#[test]
fn ascii_mode_renders_without_multibyte_glyphs() {
    let mut app = App::new(UiOptions {
        ascii_only: true,
        ..UiOptions::default()
    });
    let mut terminal = terminal();
    terminal.draw(|frame| draw(frame, &mut app)).expect("draw");
    app.scroll_end();
    app.advance(Duration::from_secs(30));
    terminal.draw(|frame| draw(frame, &mut app)).expect("draw");

    let screen = terminal.backend().to_string();
    let ok = screen
        .chars()
        .all(|c| c.is_ascii() || c == '©' || c == '╭' || c == '╮' || c == '╰' || c == '╯' || c == '─' || c == '│');
    assert!(ok, "unexpected non-ascii glyph in: {screen}");
}

#[test]
fn glyph_sets_are_stable() {
    let unicode = glyphs(UiOptions::default());
    let ascii = glyphs(UiOptions {
        ascii_only: true,
        ..UiOptions::default()
    });

    assert_snapshot!(
        format!("{unicode:?}"),
        @r#"Glyphs { bullet: "•", sparkle: "✦", particle: "·", mail: "✉", link: "↗", separator: "│", underline: "─", arrow_up: "↑", arrow_down: "↓", track: "│", thumb: "█" }"#
    );
    assert_snapshot!(
        format!("{ascii:?}"),
        @r##"Glyphs { bullet: "*", sparkle: "+", particle: ".", mail: "@", link: ">", separator: "|", underline: "=", arrow_up: "^", arrow_down: "v", track: "|", thumb: "#" }"##
    );
}
