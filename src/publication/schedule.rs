//! Scheduled-publish timing.
//!
//! An external scheduler owns the timer loop; this module only answers
//! "is it time yet" and plans the batch of promotions for a sweep, the
//! same shape as the upstream worker's sixty-second pass over scheduled
//! rows.

use chrono::{DateTime, Utc};

use crate::catalog::item::ContentItem;
use crate::catalog::types::ItemId;
use crate::publication::types::{PublicationStatus, StatusChange};

/// True once a scheduled item's publish time has arrived. Exactly-at-time
/// counts as due. False for any other status.
pub fn is_due(item: &ContentItem, now: DateTime<Utc>) -> bool {
    item.status == PublicationStatus::Scheduled
        && item.publish_at.is_some_and(|at| at <= now)
}

/// The scheduled items whose time has arrived.
pub fn due_for_publish<'a, I>(items: I, now: DateTime<Utc>) -> Vec<&'a ContentItem>
where
    I: IntoIterator<Item = &'a ContentItem>,
{
    items.into_iter().filter(|item| is_due(item, now)).collect()
}

/// Plan the time-triggered promotions for one sweep: every due item maps
/// to a published change for the caller to commit. No authority is
/// involved on this path; the schedule itself was the authorized act.
pub fn plan_due_publications<'a, I>(items: I, now: DateTime<Utc>) -> Vec<(ItemId, StatusChange)>
where
    I: IntoIterator<Item = &'a ContentItem>,
{
    let planned: Vec<(ItemId, StatusChange)> = due_for_publish(items, now)
        .into_iter()
        .map(|item| (item.id.clone(), StatusChange::published(now)))
        .collect();

    if !planned.is_empty() {
        tracing::info!(count = planned.len(), "planned scheduled publications");
    }

    planned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::item::ContentItem;
    use crate::catalog::types::LanguageCode;
    use chrono::{Duration, TimeZone, Utc};

    fn scheduled(id: &str, publish_at: DateTime<Utc>) -> ContentItem {
        ContentItem::new(id.into(), id.to_string(), LanguageCode::new("en"))
            .with_status(PublicationStatus::Scheduled, Some(publish_at))
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 8, 7, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_due_exactly_at_publish_time() {
        let item = scheduled("lesson-1", now());
        assert!(is_due(&item, now()));
    }

    #[test]
    fn test_not_due_before_publish_time() {
        let item = scheduled("lesson-1", now() + Duration::minutes(1));
        assert!(!is_due(&item, now()));
    }

    #[test]
    fn test_non_scheduled_items_never_due() {
        let item = ContentItem::new("lesson-1".into(), "Intro", LanguageCode::new("en"));
        assert!(!is_due(&item, now()));

        let published = item.with_status(PublicationStatus::Published, None);
        assert!(!is_due(&published, now()));
    }

    #[test]
    fn test_sweep_plans_only_due_items() {
        let due = scheduled("lesson-due", now() - Duration::minutes(5));
        let pending = scheduled("lesson-pending", now() + Duration::minutes(5));
        let draft = ContentItem::new("lesson-draft".into(), "Intro", LanguageCode::new("en"));

        let planned = plan_due_publications([&due, &pending, &draft], now());
        assert_eq!(planned.len(), 1);

        let (id, change) = &planned[0];
        assert_eq!(id, &due.id);
        assert_eq!(change.status, PublicationStatus::Published);
        assert_eq!(change.publish_at, None);
        assert_eq!(change.published_at, Some(now()));
    }
}
