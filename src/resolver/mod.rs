// Content Resolver Module - localized asset selection and traversal

pub mod assets;
pub mod language;
pub mod navigation;

pub use assets::{resolve_asset, AssetResolution};
pub use language::select_display_language;
pub use navigation::{navigate, open_lesson, Direction, NavigationOutcome, OpenedLesson};
