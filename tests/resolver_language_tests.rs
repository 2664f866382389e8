//! Tests for localized asset resolution and display-language selection.
//! Testing library/framework: Rust built-in test framework.

mod fixtures;

use chalkboard::{
    navigate, open_lesson, resolve_asset, select_display_language, AssetKey, AssetResolution,
    Direction, ItemId, NavigationOutcome,
};
use fixtures::{bilingual_program, en, hi, video_lesson};

#[test]
fn requested_language_always_beats_primary() {
    let program = bilingual_program();
    let intro = &program.lessons()[0];

    let resolution = resolve_asset(&intro.item, AssetKey::Video, &hi());
    match resolution {
        AssetResolution::Resolved { language, url } => {
            assert_eq!(language, hi());
            assert_eq!(url, "https://cdn.example/lesson-intro-hi.mp4");
        }
        AssetResolution::Unavailable => panic!("hi video should resolve"),
    }
}

#[test]
fn partial_coverage_falls_back_per_asset() {
    let program = bilingual_program();
    let intro = &program.lessons()[0];

    // Thumbnails only exist in en; the hi viewer still gets one.
    let resolution = resolve_asset(&intro.item, AssetKey::ThumbnailLandscape, &hi());
    match resolution {
        AssetResolution::Resolved { language, .. } => assert_eq!(language, en()),
        AssetResolution::Unavailable => panic!("thumbnail should fall back to en"),
    }
}

#[test]
fn absent_asset_is_unavailable_not_empty() {
    let lesson = video_lesson("lesson-1", "Intro", 1);
    let resolution = resolve_asset(&lesson.item, AssetKey::PosterPortrait, &en());
    assert_eq!(resolution, AssetResolution::Unavailable);
    assert_eq!(resolution.url(), None);
}

#[test]
fn session_language_survives_navigation_when_covered() {
    let program = bilingual_program();
    let intro = &program.lessons()[0];
    assert_eq!(select_display_language(&intro.item, Some(&hi())), hi());
}

#[test]
fn walkthrough_hindi_viewer_lands_on_english_basics() {
    // Lesson #1 carries en+hi, lesson #2 only en. A viewer reading #1 in
    // hi who navigates forward must land on #2 in en, not silently keep
    // a language the lesson does not have.
    let program = bilingual_program();
    let intro = &program.lessons()[0];

    let opened_intro = open_lesson(intro, Some(&hi()));
    assert_eq!(opened_intro.language, hi());

    let next = navigate(&program, &ItemId::from("lesson-intro"), Direction::Next);
    let basics = match next {
        NavigationOutcome::Moved(lesson) => lesson,
        other => panic!("expected to move to lesson #2, got {other:?}"),
    };

    let opened_basics = open_lesson(basics, Some(&opened_intro.language));
    assert_eq!(opened_basics.language, en());
    assert_eq!(opened_basics.lesson.lesson_number, 2);

    // And the video resolves in the language that was actually selected.
    let resolution = resolve_asset(&basics.item, AssetKey::Video, &opened_basics.language);
    assert!(matches!(resolution, AssetResolution::Resolved { language, .. } if language == en()));
}
