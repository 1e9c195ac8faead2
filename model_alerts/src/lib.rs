#![deny(missing_docs)]
//! This crate provides the notification ("alert") types shared between the
//! admin console feed and the remote notification service, plus the fixed
//! vocabulary mappings the console renders with.
//! Please avoid writing real business logic in this crate unless it is
//! applicable specifically to only the types that exist inside this crate.

use chrono::{DateTime, Utc, serde::ts_seconds};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

mod raw;
pub use raw::*;

#[cfg(test)]
mod tests;

/// The closed set of alert kinds the console knows how to render.
/// Kinds select the icon and color of an alert; they are derived from the
/// remote category via [`AlertKind::from`] and never stored remotely.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Display, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
#[strum(serialize_all = "camelCase")]
pub enum AlertKind {
    /// Something about a user account (permission change, profile, ...)
    User,
    /// A platform-wide broadcast or system alert
    Broadcast,
    /// Positive feedback, only produced locally by toasts
    Success,
    /// A message was flagged by the community
    Flagged,
    /// A moderation action was taken on a message
    MsgModeration,
    /// A warning the operator should look at (sleeping users, ...)
    Warning,
}

/// The category vocabulary of the remote notification service.
/// Unrecognized values land in [`AlertCategory::Other`] so additions to the
/// remote vocabulary fail closed instead of failing the payload.
#[derive(Debug, Clone, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertCategory {
    /// Platform-wide announcement
    Broadcast,
    /// A moderator acted on a message
    ModerationAction,
    /// A message was flagged for review
    MessageFlagged,
    /// Automated system alert
    SystemAlert,
    /// A user's permissions changed
    PermissionChange,
    /// A user account was put to sleep
    UserSleep,
    /// An admin put a user account to sleep
    UserSleepAdmin,
    /// Any category this build does not know about
    #[strum(default)]
    Other(String),
}

impl AlertCategory {
    /// Parse the remote category string. The default variant makes the parse
    /// infallible: unknown values land in [AlertCategory::Other].
    pub fn from_wire(category: &str) -> Self {
        category
            .parse()
            .unwrap_or_else(|_| AlertCategory::Other(category.to_owned()))
    }
}

// The fixed category -> kind table. Keep this exhaustive: a new category must
// either get its own kind or explicitly fall through to Broadcast.
impl From<AlertCategory> for AlertKind {
    fn from(category: AlertCategory) -> Self {
        match category {
            AlertCategory::Broadcast => AlertKind::Broadcast,
            AlertCategory::ModerationAction => AlertKind::MsgModeration,
            AlertCategory::MessageFlagged => AlertKind::Flagged,
            AlertCategory::SystemAlert => AlertKind::Broadcast,
            AlertCategory::PermissionChange => AlertKind::User,
            AlertCategory::UserSleep => AlertKind::Warning,
            AlertCategory::UserSleepAdmin => AlertKind::Warning,
            AlertCategory::Other(_) => AlertKind::Broadcast,
        }
    }
}

/// The type of the entity an alert points at.
#[derive(Debug, Clone, PartialEq, Eq, Display, EnumString)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertEntityType {
    /// A broadcast / community message
    Message,
    /// A user account
    User,
    /// The platform itself
    System,
    /// Any entity type this build does not know about
    #[strum(default)]
    Other(String),
}

impl AlertEntityType {
    /// Parse the remote entity type string. The default variant makes the
    /// parse infallible: unknown values land in [AlertEntityType::Other].
    pub fn from_wire(entity_type: &str) -> Self {
        entity_type
            .parse()
            .unwrap_or_else(|_| AlertEntityType::Other(entity_type.to_owned()))
    }
}

/// The entity that triggered an alert: a type plus an optional server id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertEntity {
    /// What the alert points at
    pub entity_type: AlertEntityType,
    /// The server id of that entity, when the type carries one
    pub entity_id: Option<i64>,
}

impl AlertEntity {
    /// Build an entity from the raw wire strings.
    pub fn new(entity_type: &str, entity_id: Option<i64>) -> Self {
        Self {
            entity_type: AlertEntityType::from_wire(entity_type),
            entity_id,
        }
    }

    /// The fixed entity -> navigation-target table.
    /// Unknown types and a `User` entity without an id resolve to the no-op
    /// target `#`; a malformed record must never fail link resolution.
    pub fn link(&self) -> String {
        match (&self.entity_type, self.entity_id) {
            (AlertEntityType::Message, _) => "/BroadCast".to_string(),
            (AlertEntityType::User, Some(id)) => format!("/user/{id}"),
            (AlertEntityType::User, None) => "#".to_string(),
            (AlertEntityType::System, _) => "/settings/notifications".to_string(),
            (AlertEntityType::Other(_), _) => "#".to_string(),
        }
    }
}

/// A notification as the console holds and renders it.
///
/// Remote-sourced alerts come out of [`RawAlert`]; toast alerts are built
/// locally and never round-trip to the service.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    /// Unique id. Server-assigned for ledger alerts, locally generated
    /// (epoch millis) for toasts.
    pub id: i64,
    /// Render kind, derived from the remote category
    pub kind: AlertKind,
    /// Short display string
    pub title: String,
    /// Longer display string
    pub body: String,
    /// Resolved navigation target, derived from the remote entity pair
    pub link: String,
    /// Whether the user has read this alert
    pub is_read: bool,
    /// Server creation time (local time for toasts)
    #[serde(with = "ts_seconds")]
    pub created_at: DateTime<Utc>,
}
