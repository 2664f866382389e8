//! Localized asset resolution.
//!
//! The fallback ladder is a hard contract: the requested language always
//! wins when it carries the asset, the primary language backs it up, and
//! a miss is an explicit result rather than an empty URL or a panic. A
//! learner who picked a language keeps it through lessons with partial
//! coverage instead of being bounced to the primary by one missing file.

use crate::catalog::item::ContentItem;
use crate::catalog::types::{AssetKey, LanguageCode};

/// Outcome of resolving one asset slot for display.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssetResolution {
    /// The URL to render and the language it is actually in.
    Resolved { language: LanguageCode, url: String },
    /// Neither the requested nor the primary language carries the slot.
    Unavailable,
}

impl AssetResolution {
    pub fn url(&self) -> Option<&str> {
        match self {
            AssetResolution::Resolved { url, .. } => Some(url),
            AssetResolution::Unavailable => None,
        }
    }
}

/// Resolve `key` for display in `requested`, falling back to the item's
/// primary language.
pub fn resolve_asset(
    item: &ContentItem,
    key: AssetKey,
    requested: &LanguageCode,
) -> AssetResolution {
    if item.is_language_available(requested) {
        if let Some(url) = item.assets_for(requested).and_then(|b| b.url(key)) {
            return AssetResolution::Resolved {
                language: requested.clone(),
                url: url.to_string(),
            };
        }
    }

    if let Some(url) = item.assets_for(&item.primary_language).and_then(|b| b.url(key)) {
        tracing::debug!(
            item = %item.id,
            asset = %key,
            requested = %requested,
            fallback = %item.primary_language,
            "asset fell back to primary language"
        );
        return AssetResolution::Resolved {
            language: item.primary_language.clone(),
            url: url.to_string(),
        };
    }

    tracing::debug!(item = %item.id, asset = %key, requested = %requested, "asset unavailable");
    AssetResolution::Unavailable
}
