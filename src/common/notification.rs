use super::{
    newtypes::{NotificationId, TranslationId},
    utils::int_bool,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Upper bound for a single inbox fetch.
pub const NOTIFICATIONS_FETCH_LIMIT: i32 = 1000;

/// Closed set of notification categories. Categories the backend adds later
/// deserialize into `Other` with the raw value preserved, so they degrade to a
/// generic rendering instead of failing the whole list.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NotificationKind {
    DiscussionReply,
    TranslationApproved,
    TranslationRejected,
    Other(String),
}

impl NotificationKind {
    pub fn as_str(&self) -> &str {
        use NotificationKind::*;
        match self {
            DiscussionReply => "discussion_reply",
            TranslationApproved => "translation_approved",
            TranslationRejected => "translation_rejected",
            Other(raw) => raw,
        }
    }

    pub fn label(&self) -> &'static str {
        use NotificationKind::*;
        match self {
            DiscussionReply => "Discussion reply",
            TranslationApproved => "Translation approved",
            TranslationRejected => "Translation rejected",
            Other(_) => "Notification",
        }
    }
}

impl From<String> for NotificationKind {
    fn from(raw: String) -> Self {
        use NotificationKind::*;
        match raw.as_str() {
            "discussion_reply" => DiscussionReply,
            "translation_approved" => TranslationApproved,
            "translation_rejected" => TranslationRejected,
            _ => Other(raw),
        }
    }
}

impl From<NotificationKind> for String {
    fn from(kind: NotificationKind) -> Self {
        kind.as_str().to_string()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub message: String,
    /// 0/1 on the wire.
    #[serde(with = "int_bool")]
    pub read: bool,
    pub created_at: DateTime<Utc>,
    /// Absent for notifications which don't reference a translation.
    #[serde(default)]
    pub translation_id: Option<TranslationId>,
    #[serde(default)]
    pub created_by_username: Option<String>,
    #[serde(default)]
    pub created_by_display_name: Option<String>,
}

impl Notification {
    /// Attribution shown for the notification, display name preferred over username.
    pub fn author(&self) -> Option<&str> {
        self.created_by_display_name
            .as_deref()
            .or(self.created_by_username.as_deref())
    }

    /// Target of the translation-review view, for notifications which reference one.
    pub fn review_path(&self) -> Option<String> {
        self.translation_id
            .map(|id| format!("/translation/{}/review", id.0))
    }
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ListNotificationsParams {
    pub limit: i32,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct MarkAsReadParams {
    pub id: NotificationId,
}

#[derive(Deserialize, Serialize, Debug, Clone, Default)]
pub struct NotificationsResponse {
    pub notifications: Vec<Notification>,
}

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_kind_from_raw() {
        assert_eq!(
            NotificationKind::DiscussionReply,
            NotificationKind::from("discussion_reply".to_string())
        );
        let unknown = NotificationKind::from("goal_completed".to_string());
        assert_eq!(NotificationKind::Other("goal_completed".to_string()), unknown);
        // unknown categories keep their raw value across a roundtrip
        assert_eq!("goal_completed", unknown.as_str());
    }

    #[test]
    fn test_notification_wire_format() {
        let json = r#"{
            "id": 7,
            "type": "translation_approved",
            "message": "Your translation was approved",
            "read": 0,
            "created_at": "2024-01-10T12:00:00Z",
            "translation_id": 42,
            "created_by_username": "reviewer"
        }"#;
        let notif: Notification = serde_json::from_str(json).expect("deserialize");
        assert_eq!(NotificationKind::TranslationApproved, notif.kind);
        assert!(!notif.read);
        assert_eq!(Some("reviewer"), notif.author());
        assert_eq!(Some("/translation/42/review".to_string()), notif.review_path());
    }

    #[test]
    fn test_author_prefers_display_name() {
        let json = r#"{
            "id": 1,
            "type": "discussion_reply",
            "message": "hello",
            "read": 1,
            "created_at": "2024-01-10T12:00:00Z",
            "created_by_username": "alice",
            "created_by_display_name": "Alice Lidell"
        }"#;
        let notif: Notification = serde_json::from_str(json).expect("deserialize");
        assert_eq!(Some("Alice Lidell"), notif.author());
        assert_eq!(None, notif.review_path());
    }
}
