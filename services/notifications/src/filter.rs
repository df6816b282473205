//! Notification filtering, search and the counts shown on badges.
//!
//! Everything here works on a slice of records and is recomputed on every
//! call; the store never caches a count.

use crate::model::{Notification, NotificationPriority, NotificationType};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationFilter {
    #[default]
    All,
    Unread,
    High,
    Messages,
    System,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown notification filter {0:?} (expected all, unread, high, messages or system)")]
pub struct FilterParseError(pub String);

impl NotificationFilter {
    pub const ALL: [NotificationFilter; 5] = [
        NotificationFilter::All,
        NotificationFilter::Unread,
        NotificationFilter::High,
        NotificationFilter::Messages,
        NotificationFilter::System,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            NotificationFilter::All => "all",
            NotificationFilter::Unread => "unread",
            NotificationFilter::High => "high",
            NotificationFilter::Messages => "messages",
            NotificationFilter::System => "system",
        }
    }

    pub fn matches(&self, notification: &Notification) -> bool {
        match self {
            NotificationFilter::All => true,
            NotificationFilter::Unread => !notification.read,
            NotificationFilter::High => notification.priority == NotificationPriority::High,
            NotificationFilter::Messages => notification.kind == NotificationType::Message,
            NotificationFilter::System => notification.kind == NotificationType::System,
        }
    }
}

impl FromStr for NotificationFilter {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(NotificationFilter::All),
            "unread" => Ok(NotificationFilter::Unread),
            "high" => Ok(NotificationFilter::High),
            "messages" => Ok(NotificationFilter::Messages),
            "system" => Ok(NotificationFilter::System),
            _ => Err(FilterParseError(s.to_string())),
        }
    }
}

impl fmt::Display for NotificationFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A filter plus an optional free-text search over title and message.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationQuery {
    pub filter: NotificationFilter,
    search: Option<String>,
}

impl NotificationQuery {
    pub fn new(filter: NotificationFilter) -> Self {
        Self { filter, search: None }
    }

    /// Blank terms are ignored so an emptied search box shows everything.
    pub fn with_search(mut self, term: &str) -> Self {
        let term = term.trim();
        self.search = if term.is_empty() {
            None
        } else {
            Some(term.to_lowercase())
        };
        self
    }

    pub fn search(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn matches(&self, notification: &Notification) -> bool {
        if !self.filter.matches(notification) {
            return false;
        }
        match &self.search {
            None => true,
            Some(term) => {
                notification.title.to_lowercase().contains(term)
                    || notification.message.to_lowercase().contains(term)
            }
        }
    }

    pub fn apply(&self, notifications: &[Notification]) -> Vec<Notification> {
        notifications
            .iter()
            .filter(|n| self.matches(n))
            .cloned()
            .collect()
    }
}

/// Badge counts for each filter entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCounts {
    pub all: usize,
    pub unread: usize,
    pub high: usize,
    pub messages: usize,
    pub system: usize,
}

impl FilterCounts {
    pub fn compute(notifications: &[Notification]) -> Self {
        let count = |filter: NotificationFilter| {
            notifications.iter().filter(|n| filter.matches(n)).count()
        };
        Self {
            all: notifications.len(),
            unread: count(NotificationFilter::Unread),
            high: count(NotificationFilter::High),
            messages: count(NotificationFilter::Messages),
            system: count(NotificationFilter::System),
        }
    }

    pub fn get(&self, filter: NotificationFilter) -> usize {
        match filter {
            NotificationFilter::All => self.all,
            NotificationFilter::Unread => self.unread,
            NotificationFilter::High => self.high,
            NotificationFilter::Messages => self.messages,
            NotificationFilter::System => self.system,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationSummary {
    pub total: usize,
    pub unread: usize,
    /// High priority and still unread.
    pub urgent: usize,
}

impl NotificationSummary {
    pub fn compute(notifications: &[Notification]) -> Self {
        Self {
            total: notifications.len(),
            unread: notifications.iter().filter(|n| !n.read).count(),
            urgent: notifications.iter().filter(|n| n.is_urgent()).count(),
        }
    }
}
