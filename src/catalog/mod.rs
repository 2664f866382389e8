// Catalog data model and public-catalog visibility rules

pub mod item;
pub mod types;
pub mod visibility;

pub use item::{CatalogError, ContentItem, Lesson, Program};
pub use types::{AssetBundle, AssetKey, ContentKind, ItemId, LanguageCode};
pub use visibility::{is_publicly_visible, published_lessons, published_programs};
