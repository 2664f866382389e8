// Persistence boundary - the core never talks to a server itself

use async_trait::async_trait;
use thiserror::Error;

use crate::catalog::item::{ContentItem, Lesson};
use crate::catalog::types::ItemId;
use crate::publication::types::StatusChange;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("item not found: {id}")]
    NotFound { id: ItemId },

    #[error("store backend error: {0}")]
    Backend(String),
}

/// The external persistence collaborator. Callers fetch items through
/// this, run transitions and resolutions in-memory, and commit the
/// returned [`StatusChange`] back. The authoritative mutable state lives
/// behind this trait; everything on this side is a provisional value
/// until a commit round-trips.
#[async_trait]
pub trait CatalogStore {
    async fn fetch_item(&self, id: &ItemId) -> Result<ContentItem, StoreError>;

    /// A program's lessons in server order. That order is authoritative
    /// for traversal.
    async fn fetch_program_lessons(&self, program_id: &ItemId) -> Result<Vec<Lesson>, StoreError>;

    async fn commit_status(&self, id: &ItemId, change: &StatusChange) -> Result<(), StoreError>;
}
