// Sequential lesson traversal within a program

use crate::catalog::item::{Lesson, Program};
use crate::catalog::types::{ItemId, LanguageCode};
use crate::resolver::language::select_display_language;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Previous,
}

/// Where a navigation request landed.
#[derive(Debug, Clone, PartialEq)]
pub enum NavigationOutcome<'a> {
    Moved(&'a Lesson),
    /// First lesson going back, or last lesson going forward. No
    /// wraparound.
    AtBoundary,
    /// The current id is not in the program's sequence (stale reference
    /// after a server-side edit). Never guesses a position.
    UnknownLesson,
}

/// A lesson together with the display language chosen for it.
#[derive(Debug, Clone, PartialEq)]
pub struct OpenedLesson<'a> {
    pub lesson: &'a Lesson,
    pub language: LanguageCode,
}

/// Step through the program's stored lesson sequence. The order lessons
/// arrived in is authoritative; nothing here re-sorts.
pub fn navigate<'a>(
    program: &'a Program,
    current_lesson_id: &ItemId,
    direction: Direction,
) -> NavigationOutcome<'a> {
    let lessons = program.lessons();
    let Some(index) = lessons.iter().position(|l| l.id() == current_lesson_id) else {
        return NavigationOutcome::UnknownLesson;
    };

    let neighbor = match direction {
        Direction::Next => index.checked_add(1).and_then(|i| lessons.get(i)),
        Direction::Previous => index.checked_sub(1).map(|i| &lessons[i]),
    };

    match neighbor {
        Some(lesson) => NavigationOutcome::Moved(lesson),
        None => NavigationOutcome::AtBoundary,
    }
}

/// Open a lesson and pick its display language in one step, so arriving
/// at a lesson can never skip the language re-selection.
pub fn open_lesson<'a>(
    lesson: &'a Lesson,
    previous_language: Option<&LanguageCode>,
) -> OpenedLesson<'a> {
    OpenedLesson {
        language: select_display_language(&lesson.item, previous_language),
        lesson,
    }
}
