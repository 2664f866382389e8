// Chalkboard Library - Publication Lifecycle and Content Resolution
// The computational core of an educational catalog CMS: callers fetch
// content through the store boundary, decide transitions and resolutions
// here, and persist the returned values.

pub mod catalog;
pub mod config;
pub mod publication;
pub mod resolver;
pub mod store;
pub mod telemetry;

// Re-export key types for easy access
pub use catalog::{
    is_publicly_visible, published_lessons, published_programs, AssetBundle, AssetKey,
    CatalogError, ContentItem, ContentKind, ItemId, LanguageCode, Lesson, Program,
};
pub use config::{config, init_config, ChalkboardConfig};
pub use publication::{
    due_for_publish, is_due, lesson_publish_readiness, plan_due_publications,
    program_publish_readiness, request_transition, Actor, CmsAction, PublicationError,
    PublicationStatus, PublishAuthority, ReadinessGap, Role, RoleMatrix, StatusChange,
    TransitionOptions,
};
pub use resolver::{
    navigate, open_lesson, resolve_asset, select_display_language, AssetResolution, Direction,
    NavigationOutcome, OpenedLesson,
};
pub use store::{CatalogStore, StoreError};
pub use telemetry::{
    create_catalog_span, generate_correlation_id, init_telemetry, shutdown_telemetry,
};
