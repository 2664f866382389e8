// Shared builders for integration tests
#![allow(dead_code)]

use chalkboard::{
    AssetKey, ContentItem, ContentKind, ItemId, LanguageCode, Lesson, Program, PublicationStatus,
};
use chrono::{DateTime, TimeZone, Utc};

pub fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 8, 7, 12, 0, 0).unwrap()
}

pub fn en() -> LanguageCode {
    LanguageCode::new("en")
}

pub fn hi() -> LanguageCode {
    LanguageCode::new("hi")
}

pub fn draft_item(id: &str, title: &str) -> ContentItem {
    ContentItem::new(ItemId::from(id), title, en())
}

pub fn video_lesson(id: &str, title: &str, number: u32) -> Lesson {
    let item = draft_item(id, title)
        .with_asset(en(), AssetKey::Video, format!("https://cdn.example/{id}-en.mp4"))
        .with_asset(
            en(),
            AssetKey::ThumbnailLandscape,
            format!("https://cdn.example/{id}-l.jpg"),
        )
        .with_asset(
            en(),
            AssetKey::ThumbnailPortrait,
            format!("https://cdn.example/{id}-p.jpg"),
        );
    Lesson::new(item, number, ContentKind::Video)
}

pub fn published(mut lesson: Lesson, published_at: DateTime<Utc>) -> Lesson {
    lesson.item = lesson.item.with_status(PublicationStatus::Published, None);
    lesson.item.published_at = Some(published_at);
    lesson
}

/// The walkthrough program: lesson #1 "Intro" in en+hi, lesson #2
/// "Basics" in en only. Both published.
pub fn bilingual_program() -> Program {
    let intro = {
        let mut lesson = video_lesson("lesson-intro", "Intro", 1);
        lesson.item = lesson.item.with_asset(
            hi(),
            AssetKey::Video,
            "https://cdn.example/lesson-intro-hi.mp4",
        );
        published(lesson, t0())
    };
    let basics = published(video_lesson("lesson-basics", "Basics", 2), t0());

    let program_item = draft_item("prog-foundations", "Foundations")
        .with_status(PublicationStatus::Published, None);
    let mut program = Program::new(program_item, "Two-lesson walkthrough");
    program.push_lesson(intro).unwrap();
    program.push_lesson(basics).unwrap();
    program
}
