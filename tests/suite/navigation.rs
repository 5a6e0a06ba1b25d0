//! Navigation surface tests: the four labels, their targets, and the
//! silent-no-op policy for missing regions.

use std::time::Duration;

use ratatui::Terminal;
use ratatui::backend::TestBackend;

use vitrine_engine::{App, NavItem, Section};
use vitrine_tui::draw;
use vitrine_types::ui::UiOptions;

fn app_with_layout() -> App {
    let mut app = App::new(UiOptions::default());
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).expect("failed to create terminal");
    terminal.draw(|frame| draw(frame, &mut app)).expect("draw");
    app
}

#[test]
fn labels_map_to_their_regions() {
    let pairs = [
        (NavItem::Home, "hero"),
        (NavItem::Experience, "experience"),
        (NavItem::Skills, "skills"),
        (NavItem::Connect, "contact"),
    ];
    for (item, id) in pairs {
        assert_eq!(item.target().id(), id);
    }
}

#[test]
fn every_label_scrolls_to_its_region() {
    for item in NavItem::ALL {
        let mut app = app_with_layout();
        let expected = app.layout().section_start(item.target()).unwrap();
        let expected = expected.min(app.scroll_max());

        app.scroll_to(item);
        app.advance(Duration::from_secs(2));
        assert_eq!(app.scroll_offset(), expected, "{}", item.label());
    }
}

#[test]
fn connect_reaches_the_contact_region() {
    let mut app = app_with_layout();
    app.scroll_to(NavItem::Connect);
    app.advance(Duration::from_secs(2));
    let contact = app.layout().section_start(Section::Contact).unwrap();
    assert_eq!(app.scroll_offset(), contact.min(app.scroll_max()));
    assert!(app.scroll_offset() > 0);
}

#[test]
fn nav_clicks_resolve_through_the_rendered_bar() {
    let mut app = app_with_layout();
    let hits = app.layout().nav_hits.clone();
    assert_eq!(hits.len(), 4);

    let nav_row = app.layout().nav_row;
    for (item, first, last) in hits {
        assert_eq!(app.nav_hit(first, nav_row), Some(item));
        assert_eq!(app.nav_hit(last, nav_row), Some(item));
    }
    // Clicking outside the bar hits nothing.
    assert_eq!(app.nav_hit(0, nav_row), None);
    assert_eq!(app.nav_hit(0, nav_row + 10), None);
}

#[test]
fn missing_region_is_a_silent_no_op() {
    // No layout has been reported yet, so every region is absent.
    let mut app = App::new(UiOptions::default());
    app.scroll_to(NavItem::Connect);
    app.advance(Duration::from_secs(2));
    assert_eq!(app.scroll_offset(), 0);
}

#[test]
fn smooth_scroll_passes_through_intermediate_offsets() {
    let mut app = app_with_layout();
    app.scroll_to(NavItem::Skills);
    app.advance(Duration::from_millis(200));
    let midway = app.scroll_offset();
    let target = app
        .layout()
        .section_start(Section::Skills)
        .unwrap()
        .min(app.scroll_max());
    assert!(midway > 0 && midway < target);
}

#[test]
fn reduced_motion_jumps_instantly() {
    let mut app = App::new(UiOptions {
        reduced_motion: true,
        ..UiOptions::default()
    });
    let backend = TestBackend::new(80, 24);
    let mut terminal = Terminal::new(backend).expect("failed to create terminal");
    terminal.draw(|frame| draw(frame, &mut app)).expect("draw");

    let target = app
        .layout()
        .section_start(Section::Experience)
        .unwrap()
        .min(app.scroll_max());
    app.scroll_to(NavItem::Experience);
    assert_eq!(app.scroll_offset(), target);
}
