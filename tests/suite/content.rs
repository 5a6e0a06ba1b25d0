//! Content store tests

use vitrine_engine::App;
use vitrine_types::ui::UiOptions;

#[test]
fn profile_targets_are_exact() {
    let app = App::new(UiOptions::default());
    let profile = app.content().profile;
    assert_eq!(profile.name, "Raghav Arora");
    assert_eq!(profile.mailto(), "mailto:ar.raghav07@outlook.com");
    assert_eq!(profile.linkedin, "https://www.linkedin.com/in/raghav-4-r7r4");
}

#[test]
fn experience_preserves_display_order() {
    let app = App::new(UiOptions::default());
    let companies: Vec<&str> = app
        .content()
        .experience
        .iter()
        .map(|entry| entry.company)
        .collect();
    assert_eq!(
        companies,
        [
            "SOAK & STEP",
            "Missionaries of Charity",
            "SBI Life Insurance Co. Ltd.",
            "Himvikas Industries",
        ]
    );
}

#[test]
fn every_experience_entry_has_responsibilities() {
    let app = App::new(UiOptions::default());
    for entry in app.content().experience {
        assert!(!entry.responsibilities.is_empty(), "{}", entry.company);
    }
}

#[test]
fn skills_and_education_are_complete() {
    let app = App::new(UiOptions::default());
    let content = app.content();
    assert_eq!(content.skills.skills.len(), 3);
    assert_eq!(content.skills.certifications.len(), 4);
    assert_eq!(content.education.len(), 2);
    assert_eq!(content.education[0].institution, "Christ University, Bangalore");
}
