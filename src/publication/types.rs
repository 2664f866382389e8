// Status vocabulary and errors for the publication lifecycle

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Lifecycle status of a program or lesson. Serializes as the lowercase
/// strings the API speaks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PublicationStatus {
    Draft,
    Scheduled,
    Published,
    Archived,
}

impl PublicationStatus {
    /// Archived items take no further transitions.
    pub fn is_terminal(self) -> bool {
        matches!(self, PublicationStatus::Archived)
    }
}

impl fmt::Display for PublicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PublicationStatus::Draft => "draft",
            PublicationStatus::Scheduled => "scheduled",
            PublicationStatus::Published => "published",
            PublicationStatus::Archived => "archived",
        };
        write!(f, "{}", label)
    }
}

/// CMS actions that pass through an authority check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CmsAction {
    Publish,
    Schedule,
    CancelSchedule,
    Archive,
}

impl fmt::Display for CmsAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            CmsAction::Publish => "publish",
            CmsAction::Schedule => "schedule",
            CmsAction::CancelSchedule => "cancel-schedule",
            CmsAction::Archive => "archive",
        };
        write!(f, "{}", label)
    }
}

/// The outcome of an accepted transition: the pair the caller persists
/// through the store collaborator. Never a reference back into the input
/// item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusChange {
    pub status: PublicationStatus,
    pub publish_at: Option<DateTime<Utc>>,
    pub published_at: Option<DateTime<Utc>>,
}

impl StatusChange {
    pub fn draft() -> Self {
        Self {
            status: PublicationStatus::Draft,
            publish_at: None,
            published_at: None,
        }
    }

    pub fn scheduled(publish_at: DateTime<Utc>) -> Self {
        Self {
            status: PublicationStatus::Scheduled,
            publish_at: Some(publish_at),
            published_at: None,
        }
    }

    /// Entering Published stamps the publish time.
    pub fn published(now: DateTime<Utc>) -> Self {
        Self {
            status: PublicationStatus::Published,
            publish_at: None,
            published_at: Some(now),
        }
    }

    /// Archiving clears any pending schedule but keeps an existing
    /// publish stamp for the record.
    pub fn archived(published_at: Option<DateTime<Utc>>) -> Self {
        Self {
            status: PublicationStatus::Archived,
            publish_at: None,
            published_at,
        }
    }
}

/// Errors a transition request can come back with. All recoverable by the
/// caller; none are raised mid-resolution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PublicationError {
    #[error("invalid transition: {from} -> {to}")]
    InvalidTransition {
        from: PublicationStatus,
        to: PublicationStatus,
    },

    #[error("scheduling requires a future publish time")]
    MissingSchedule,

    #[error("actor may not {action} this item")]
    Forbidden { action: CmsAction },
}
