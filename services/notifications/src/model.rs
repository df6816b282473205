use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

pub type NotificationId = Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationType {
    Message,
    System,
    Alert,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationPriority {
    Low,
    Medium,
    High,
}

impl NotificationType {
    pub const ALL: [NotificationType; 3] = [
        NotificationType::Message,
        NotificationType::System,
        NotificationType::Alert,
    ];
}

impl NotificationPriority {
    pub const ALL: [NotificationPriority; 3] = [
        NotificationPriority::Low,
        NotificationPriority::Medium,
        NotificationPriority::High,
    ];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: NotificationId,
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub priority: NotificationPriority,
    pub date: DateTime<Utc>,
    pub read: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
}

impl Notification {
    pub fn is_urgent(&self) -> bool {
        self.priority == NotificationPriority::High && !self.read
    }
}

/// What a caller supplies to `NotificationStore::add`; the store assigns
/// the id, the date and the read flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewNotification {
    pub title: String,
    pub message: String,
    #[serde(rename = "type")]
    pub kind: NotificationType,
    pub priority: NotificationPriority,
    #[serde(default)]
    pub link: Option<String>,
}

impl NewNotification {
    pub fn new(
        title: impl Into<String>,
        message: impl Into<String>,
        kind: NotificationType,
        priority: NotificationPriority,
    ) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            kind,
            priority,
            link: None,
        }
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }
}

/// Transient messages for the view's banner area. Never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Banner {
    HighPriority {
        id: NotificationId,
        title: String,
        message: String,
    },
    UnreadSummary {
        unread: usize,
    },
}

impl fmt::Display for Banner {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Banner::HighPriority { title, message, .. } => write!(f, "{}: {}", title, message),
            Banner::UnreadSummary { unread: 1 } => write!(f, "You have 1 unread notification"),
            Banner::UnreadSummary { unread } => {
                write!(f, "You have {} unread notifications", unread)
            }
        }
    }
}
