//! The publication state machine.
//!
//! One pure function decides every status change in the system. It never
//! mutates the item it inspects and holds no history: callers hand the
//! returned [`StatusChange`] to the store collaborator and re-read. That
//! makes every request safe to retry and safe to abandon mid-persist.
//!
//! Transition table:
//!
//! | from      | to        | precondition                              |
//! |-----------|-----------|-------------------------------------------|
//! | draft     | published | publish authority                         |
//! | draft     | scheduled | publish authority, future publish time    |
//! | scheduled | published | publish authority, due or forced          |
//! | scheduled | draft     | cancel, no authority needed               |
//! | published | archived  | archive authority                         |
//! | scheduled | archived  | archive authority, clears the schedule    |
//! | draft     | archived  | archive authority                         |
//! | any       | same      | idempotent no-op                          |
//!
//! The time-triggered scheduled -> published promotion lives in
//! [`crate::publication::schedule`]; this function is the caller-initiated
//! path and always checks authority.

use chrono::{DateTime, Utc};

use crate::catalog::item::ContentItem;
use crate::publication::policy::Actor;
use crate::publication::schedule::is_due;
use crate::publication::traits::PublishAuthority;
use crate::publication::types::{CmsAction, PublicationError, PublicationStatus, StatusChange};

/// Per-request inputs. Carrying `now` explicitly keeps the decision a
/// pure function of its arguments; nothing in here reads the clock.
#[derive(Debug, Clone)]
pub struct TransitionOptions {
    pub now: DateTime<Utc>,
    /// Required when requesting `Scheduled`.
    pub publish_at: Option<DateTime<Utc>>,
    /// Publish a scheduled item before its time.
    pub force: bool,
}

impl TransitionOptions {
    pub fn at(now: DateTime<Utc>) -> Self {
        Self {
            now,
            publish_at: None,
            force: false,
        }
    }

    pub fn with_publish_at(mut self, publish_at: DateTime<Utc>) -> Self {
        self.publish_at = Some(publish_at);
        self
    }

    pub fn forced(mut self) -> Self {
        self.force = true;
        self
    }
}

/// Decide a requested status change for `item`.
///
/// Returns the new `(status, publish_at, published_at)` triple on success.
/// Same-status requests are accepted as no-ops without an authority check,
/// so a retried commit never turns into an error.
pub fn request_transition(
    item: &ContentItem,
    target: PublicationStatus,
    actor: &Actor,
    authority: &dyn PublishAuthority,
    opts: &TransitionOptions,
) -> Result<StatusChange, PublicationError> {
    let from = item.status;

    if from == target {
        return Ok(StatusChange {
            status: from,
            publish_at: item.publish_at,
            published_at: item.published_at,
        });
    }

    use PublicationStatus::*;
    let change = match (from, target) {
        (Draft, Published) => {
            require(authority.may_publish(actor), CmsAction::Publish, item, actor)?;
            StatusChange::published(opts.now)
        }
        (Draft, Scheduled) => {
            require(authority.may_publish(actor), CmsAction::Schedule, item, actor)?;
            let publish_at = opts
                .publish_at
                .filter(|at| *at > opts.now)
                .ok_or(PublicationError::MissingSchedule)?;
            StatusChange::scheduled(publish_at)
        }
        (Scheduled, Published) => {
            // Authority is checked even when the schedule has elapsed:
            // the unattended path goes through the sweep, not here.
            require(authority.may_publish(actor), CmsAction::Publish, item, actor)?;
            if !is_due(item, opts.now) && !opts.force {
                return Err(invalid(item, from, target));
            }
            StatusChange::published(opts.now)
        }
        (Scheduled, Draft) => StatusChange::draft(),
        (Draft, Archived) | (Scheduled, Archived) | (Published, Archived) => {
            require(authority.may_archive(actor), CmsAction::Archive, item, actor)?;
            StatusChange::archived(item.published_at)
        }
        _ => return Err(invalid(item, from, target)),
    };

    tracing::info!(
        item = %item.id,
        from = %from,
        to = %change.status,
        publish_at = ?change.publish_at,
        actor = %actor.id,
        "publication transition accepted"
    );

    Ok(change)
}

fn require(
    allowed: bool,
    action: CmsAction,
    item: &ContentItem,
    actor: &Actor,
) -> Result<(), PublicationError> {
    if allowed {
        Ok(())
    } else {
        tracing::warn!(
            item = %item.id,
            actor = %actor.id,
            action = %action,
            "publication transition denied"
        );
        Err(PublicationError::Forbidden { action })
    }
}

fn invalid(
    item: &ContentItem,
    from: PublicationStatus,
    to: PublicationStatus,
) -> PublicationError {
    tracing::warn!(item = %item.id, from = %from, to = %to, "publication transition rejected");
    PublicationError::InvalidTransition { from, to }
}
