//! Published-only views for the end-user catalog.
//!
//! The CMS sees everything; the public catalog sees published content
//! only, programs newest-first by publish stamp, lessons in stored order.

use crate::catalog::item::{Lesson, Program};
use crate::publication::types::PublicationStatus;

/// Whether the public catalog may show this program at all. An
/// unpublished program hides its lessons too, published or not.
pub fn is_publicly_visible(program: &Program) -> bool {
    program.item.status == PublicationStatus::Published
}

/// Published programs, most recently published first. Programs without a
/// publish stamp sort last, keeping their relative order.
pub fn published_programs(programs: &[Program]) -> Vec<&Program> {
    let mut visible: Vec<&Program> = programs.iter().filter(|p| is_publicly_visible(p)).collect();
    visible.sort_by(|a, b| b.item.published_at.cmp(&a.item.published_at));
    visible
}

/// The program's published lessons in stored order. Callers check
/// [`is_publicly_visible`] on the program before showing any of these.
pub fn published_lessons(program: &Program) -> Vec<&Lesson> {
    program
        .lessons()
        .iter()
        .filter(|l| l.item.status == PublicationStatus::Published)
        .collect()
}
