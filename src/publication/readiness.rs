//! Pre-publish asset validation.
//!
//! Publishing is blocked upstream until the primary language carries its
//! required assets: the playable/readable content URL for the lesson's
//! kind plus both thumbnail orientations, and both poster orientations
//! for a program. Callers run this before requesting a publish
//! transition; gaps are expected conditions, not errors.

use std::fmt;

use crate::catalog::item::{ContentItem, Lesson, Program};
use crate::catalog::types::{AssetKey, LanguageCode};

/// One missing requirement for publishing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadinessGap {
    pub key: AssetKey,
    pub language: LanguageCode,
}

impl fmt::Display for ReadinessGap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "missing {} for {}", self.key, self.language)
    }
}

/// Gaps blocking a lesson publish. Empty means ready.
pub fn lesson_publish_readiness(lesson: &Lesson) -> Vec<ReadinessGap> {
    bundle_gaps(
        &lesson.item,
        &[
            lesson.kind.primary_asset(),
            AssetKey::ThumbnailLandscape,
            AssetKey::ThumbnailPortrait,
        ],
    )
}

/// Gaps blocking a program publish. Empty means ready.
pub fn program_publish_readiness(program: &Program) -> Vec<ReadinessGap> {
    bundle_gaps(
        &program.item,
        &[AssetKey::PosterLandscape, AssetKey::PosterPortrait],
    )
}

fn bundle_gaps(item: &ContentItem, required: &[AssetKey]) -> Vec<ReadinessGap> {
    let primary = &item.primary_language;
    let bundle = item.assets_for(primary);
    required
        .iter()
        .filter(|key| !bundle.is_some_and(|b| b.has(**key)))
        .map(|key| ReadinessGap {
            key: *key,
            language: primary.clone(),
        })
        .collect()
}
