// Display-language selection on item open

use crate::catalog::item::ContentItem;
use crate::catalog::types::LanguageCode;

/// Pick the display language when opening an item.
///
/// A viewer who chose a language keeps it across items that carry it;
/// otherwise the item's own primary language wins. Evaluated once per
/// item-open. Per-asset fallback is a separate concern handled in
/// [`crate::resolver::assets::resolve_asset`].
pub fn select_display_language(
    item: &ContentItem,
    previous: Option<&LanguageCode>,
) -> LanguageCode {
    match previous {
        Some(language) if item.is_language_available(language) => language.clone(),
        _ => item.primary_language.clone(),
    }
}
