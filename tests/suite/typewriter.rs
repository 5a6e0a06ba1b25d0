//! Hero title typing behavior.

use std::time::Duration;

use vitrine_engine::App;
use vitrine_engine::ui::TYPE_INTERVAL;
use vitrine_types::ui::UiOptions;

#[test]
fn heading_starts_cleared() {
    let app = App::new(UiOptions::default());
    assert_eq!(app.typed_title(), "");
}

#[test]
fn grows_one_character_per_interval() {
    let mut app = App::new(UiOptions::default());
    let full = "Raghav Arora";

    app.advance(Duration::from_millis(1));
    for expected_len in 1..=full.len() {
        assert_eq!(app.typed_title(), &full[..expected_len]);
        app.advance(TYPE_INTERVAL);
    }
    assert_eq!(app.typed_title(), full);
}

#[test]
fn never_exceeds_the_full_name() {
    let mut app = App::new(UiOptions::default());
    for _ in 0..100 {
        app.advance(Duration::from_millis(500));
        assert!(app.typed_title().len() <= "Raghav Arora".len());
    }
    assert_eq!(app.typed_title(), "Raghav Arora");
}

#[test]
fn twelve_characters_take_eleven_intervals() {
    let mut app = App::new(UiOptions::default());
    app.advance(TYPE_INTERVAL * 11);
    assert_eq!(app.typed_title(), "Raghav Arora");

    let mut app = App::new(UiOptions::default());
    app.advance(TYPE_INTERVAL * 11 - Duration::from_millis(1));
    assert_eq!(app.typed_title(), "Raghav Aror");
}
