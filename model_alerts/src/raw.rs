use crate::{Alert, AlertCategory, AlertEntity, AlertKind};
use chrono::{DateTime, Utc, serde::ts_seconds};
use serde::{Deserialize, Serialize};

/// NOTE: This should only be used for deserialization of the service payload.
/// In business logic or rendering code, use the [Alert] type.
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct RawAlert {
    /// The server-assigned id of the notification
    #[serde(rename = "NotificationID")]
    pub notification_id: i64,
    /// The remote category string (see [AlertCategory])
    #[serde(rename = "NotificationType")]
    pub notification_type: String,
    /// The type of the entity that triggered the notification
    #[serde(rename = "EntityType")]
    pub entity_type: String,
    /// The id of the entity that triggered the notification, if any
    #[serde(rename = "EntityID", default)]
    pub entity_id: Option<i64>,
    /// Short display string
    #[serde(rename = "Title")]
    pub title: String,
    /// Longer display string
    #[serde(rename = "Message")]
    pub message: String,
    /// The time the notification was created, epoch seconds
    #[serde(rename = "CreatedAt", with = "ts_seconds")]
    pub created_at: DateTime<Utc>,
    /// Whether the user has read the notification
    #[serde(rename = "IsRead")]
    pub is_read: bool,
}

// This conversion is total: unrecognized categories and entity types fall
// through to the default table entries (broadcast kind, `#` link), so a
// well-formed record can never fail to map.
impl From<RawAlert> for Alert {
    fn from(raw: RawAlert) -> Self {
        let kind = AlertKind::from(AlertCategory::from_wire(&raw.notification_type));
        let link = AlertEntity::new(&raw.entity_type, raw.entity_id).link();

        Alert {
            id: raw.notification_id,
            kind,
            title: raw.title,
            body: raw.message,
            link,
            is_read: raw.is_read,
            created_at: raw.created_at,
        }
    }
}
