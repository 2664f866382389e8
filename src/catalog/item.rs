//! Content model shared by the CMS and catalog views.
//!
//! `ContentItem` carries everything the publication machine and resolver
//! need; `Lesson` and `Program` wrap it with their own fields. Items are
//! hydrated from the store collaborator and treated as plain values here.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use thiserror::Error;

use crate::catalog::types::{AssetBundle, AssetKey, ContentKind, ItemId, LanguageCode};
use crate::publication::types::{PublicationStatus, StatusChange};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("lesson number {number} already exists in program {program}")]
    DuplicateLessonNumber { program: ItemId, number: u32 },
}

/// A program or lesson as the publication machine and resolver see it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: ItemId,
    pub title: String,
    pub status: PublicationStatus,
    /// Only meaningful while `status` is `Scheduled`.
    pub publish_at: Option<DateTime<Utc>>,
    /// Stamped when a publish transition is committed. Informational only.
    pub published_at: Option<DateTime<Utc>>,
    pub primary_language: LanguageCode,
    pub available_languages: Vec<LanguageCode>,
    pub assets_by_language: HashMap<LanguageCode, AssetBundle>,
}

impl ContentItem {
    /// New draft item. The primary language is always available.
    pub fn new(id: ItemId, title: impl Into<String>, primary: LanguageCode) -> Self {
        Self {
            id,
            title: title.into(),
            status: PublicationStatus::Draft,
            publish_at: None,
            published_at: None,
            available_languages: vec![primary.clone()],
            primary_language: primary,
            assets_by_language: HashMap::new(),
        }
    }

    /// Hydrate an item that already exists server-side in a given state.
    /// Status mutation for live items goes through the publication
    /// machine, never through this.
    pub fn with_status(
        mut self,
        status: PublicationStatus,
        publish_at: Option<DateTime<Utc>>,
    ) -> Self {
        self.status = status;
        self.publish_at = publish_at;
        self
    }

    pub fn with_language(mut self, language: LanguageCode) -> Self {
        if !self.available_languages.contains(&language) {
            self.available_languages.push(language);
        }
        self
    }

    pub fn with_asset(mut self, language: LanguageCode, key: AssetKey, url: impl Into<String>) -> Self {
        self = self.with_language(language.clone());
        self.assets_by_language
            .entry(language)
            .or_default()
            .set(key, url);
        self
    }

    pub fn is_language_available(&self, language: &LanguageCode) -> bool {
        self.available_languages.contains(language)
    }

    pub fn assets_for(&self, language: &LanguageCode) -> Option<&AssetBundle> {
        self.assets_by_language.get(language)
    }

    /// Adopt a status change the store confirmed. Keeps the
    /// scheduled-implies-publish_at invariant in one place.
    pub fn apply(&mut self, change: &StatusChange) {
        self.status = change.status;
        self.publish_at = change.publish_at;
        self.published_at = change.published_at;
    }
}

/// One unit of content inside a program.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    pub item: ContentItem,
    /// Position label within the program. Unique, ascending as stored;
    /// the stored sequence stays authoritative for traversal.
    pub lesson_number: u32,
    pub kind: ContentKind,
    pub duration_ms: u64,
    pub is_paid: bool,
}

impl Lesson {
    pub fn new(item: ContentItem, lesson_number: u32, kind: ContentKind) -> Self {
        Self {
            item,
            lesson_number,
            kind,
            duration_ms: 0,
            is_paid: false,
        }
    }

    pub fn with_duration_ms(mut self, duration_ms: u64) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    pub fn with_paid(mut self, is_paid: bool) -> Self {
        self.is_paid = is_paid;
        self
    }

    pub fn id(&self) -> &ItemId {
        &self.item.id
    }
}

/// A program owns the ordering of its lessons. Lessons keep their own
/// publication lifecycle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub item: ContentItem,
    pub description: String,
    lessons: Vec<Lesson>,
}

impl Program {
    pub fn new(item: ContentItem, description: impl Into<String>) -> Self {
        Self {
            item,
            description: description.into(),
            lessons: Vec::new(),
        }
    }

    pub fn id(&self) -> &ItemId {
        &self.item.id
    }

    /// Append a lesson in server order. Lesson numbers must be unique
    /// within the program.
    pub fn push_lesson(&mut self, lesson: Lesson) -> Result<(), CatalogError> {
        if self.lessons.iter().any(|l| l.lesson_number == lesson.lesson_number) {
            return Err(CatalogError::DuplicateLessonNumber {
                program: self.item.id.clone(),
                number: lesson.lesson_number,
            });
        }
        self.lessons.push(lesson);
        Ok(())
    }

    /// Lessons in stored order. Never re-sorted.
    pub fn lessons(&self) -> &[Lesson] {
        &self.lessons
    }
}
