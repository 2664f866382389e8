// Core vocabulary for catalog content - ids, languages, asset slots

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use uuid::Uuid;

/// Identifier for a program or lesson. Opaque to this crate; the server
/// hands them out and we never inspect the contents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ItemId(pub String);

impl ItemId {
    pub fn generate() -> Self {
        ItemId(Uuid::new_v4().to_string())
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ItemId {
    fn from(s: &str) -> Self {
        ItemId(s.to_string())
    }
}

/// Language tag, normalized to lowercase on construction so that "EN",
/// "en" and " en " compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String")]
pub struct LanguageCode(String);

impl LanguageCode {
    pub fn new(tag: impl AsRef<str>) -> Self {
        LanguageCode(tag.as_ref().trim().to_ascii_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for LanguageCode {
    fn from(tag: String) -> Self {
        LanguageCode::new(tag)
    }
}

impl From<&str> for LanguageCode {
    fn from(tag: &str) -> Self {
        LanguageCode::new(tag)
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Named asset slots a language bundle can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AssetKey {
    Video,
    Article,
    ThumbnailLandscape,
    ThumbnailPortrait,
    PosterLandscape,
    PosterPortrait,
}

impl fmt::Display for AssetKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AssetKey::Video => "video",
            AssetKey::Article => "article",
            AssetKey::ThumbnailLandscape => "thumbnailLandscape",
            AssetKey::ThumbnailPortrait => "thumbnailPortrait",
            AssetKey::PosterLandscape => "posterLandscape",
            AssetKey::PosterPortrait => "posterPortrait",
        };
        write!(f, "{}", label)
    }
}

/// What a lesson actually is, which decides its primary asset slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentKind {
    Video,
    Article,
}

impl ContentKind {
    /// The asset slot that holds this kind's playable/readable content.
    pub fn primary_asset(self) -> AssetKey {
        match self {
            ContentKind::Video => AssetKey::Video,
            ContentKind::Article => AssetKey::Article,
        }
    }
}

impl Default for ContentKind {
    fn default() -> Self {
        ContentKind::Video
    }
}

/// Asset URLs for a single language. A language listed as available does
/// not have to populate every slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AssetBundle {
    urls: HashMap<AssetKey, String>,
}

impl AssetBundle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, key: AssetKey, url: impl Into<String>) {
        self.urls.insert(key, url.into());
    }

    /// Returns the URL for a slot. Empty strings count as absent; the
    /// upstream CMS seeds bundles with `""` placeholders.
    pub fn url(&self, key: AssetKey) -> Option<&str> {
        self.urls
            .get(&key)
            .map(String::as_str)
            .filter(|url| !url.is_empty())
    }

    pub fn has(&self, key: AssetKey) -> bool {
        self.url(key).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.urls.values().all(String::is_empty)
    }
}
