//! Notification filtering for stage tabs.
//!
//! Notifications arrive as tagged events with a free-form `contents` object
//! referencing the post, timeline, or phase they belong to. The stage card
//! filters the global unread set into per-tab subsets through criteria.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::model::{Phase, Post};
use super::timeline::Timeline;

/// Event type tags emitted by the portal.
pub mod events {
    pub const POST_CREATED: &str = "portal.post.created";
    pub const POST_UPDATED: &str = "portal.post.updated";
    pub const MILESTONE_ACTIVATED: &str = "portal.timeline.milestone.activated";
    pub const MILESTONE_COMPLETED: &str = "portal.timeline.milestone.completed";
    pub const TIMELINE_ADJUSTED: &str = "portal.timeline.adjusted";
    pub const SPECIFICATION_MODIFIED: &str = "portal.product.specification.modified";
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: i64,
    pub event_type: String,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub contents: Value,
}

/// A single matching rule: event type plus a set of content fields that must
/// all be present with equal values.
#[derive(Debug, Clone, PartialEq)]
pub struct NotificationCriterion {
    pub event_type: String,
    pub contents: Value,
}

impl NotificationCriterion {
    pub fn new(event_type: &str, contents: Value) -> Self {
        Self {
            event_type: event_type.to_owned(),
            contents,
        }
    }

    fn matches(&self, notification: &Notification) -> bool {
        notification.event_type == self.event_type
            && contents_subset(&self.contents, &notification.contents)
    }
}

fn contents_subset(expected: &Value, actual: &Value) -> bool {
    match expected.as_object() {
        Some(fields) => fields
            .iter()
            .all(|(key, value)| actual.get(key) == Some(value)),
        None => true,
    }
}

/// Keeps only unread notifications.
pub fn filter_unread(notifications: &[Notification]) -> Vec<&Notification> {
    notifications.iter().filter(|n| !n.read).collect()
}

/// Keeps notifications referencing one of the given posts.
pub fn filter_by_posts<'a>(
    notifications: &[&'a Notification],
    posts: &[Post],
) -> Vec<&'a Notification> {
    notifications
        .iter()
        .filter(|n| {
            n.contents
                .get("postId")
                .and_then(Value::as_i64)
                .is_some_and(|post_id| posts.iter().any(|post| post.id == post_id))
        })
        .copied()
        .collect()
}

/// Keeps notifications matching any of the criteria.
pub fn filter_by_criteria<'a>(
    notifications: &[&'a Notification],
    criteria: &[NotificationCriterion],
) -> Vec<&'a Notification> {
    notifications
        .iter()
        .filter(|n| criteria.iter().any(|criterion| criterion.matches(n)))
        .copied()
        .collect()
}

/// Criteria matching timeline events of the given timeline.
pub fn phase_timeline_criteria(timeline: &Timeline) -> Vec<NotificationCriterion> {
    [
        events::MILESTONE_ACTIVATED,
        events::MILESTONE_COMPLETED,
        events::TIMELINE_ADJUSTED,
    ]
    .into_iter()
    .map(|event| {
        NotificationCriterion::new(event, serde_json::json!({ "timelineId": timeline.id }))
    })
    .collect()
}

/// Criteria matching specification changes of the given phase.
pub fn phase_specification_criteria(phase: &Phase) -> Vec<NotificationCriterion> {
    vec![NotificationCriterion::new(
        events::SPECIFICATION_MODIFIED,
        serde_json::json!({ "phaseId": phase.id }),
    )]
}
