use crate::filter::{FilterCounts, NotificationQuery, NotificationSummary};
use crate::model::{
    Banner, NewNotification, Notification, NotificationId, NotificationPriority, NotificationType,
};
use chrono::Utc;
use crossbeam::channel::{self, Receiver, Sender};
use parking_lot::{Mutex, RwLock};
use shared::logger::sanitize_for_log;
use std::collections::HashSet;
use std::sync::atomic::{AtomicBool, Ordering};
use uuid::Uuid;

const LOGGED_TITLE_CHARS: usize = 32;

/// Session-lived notification collection, newest first.
///
/// A store is live from construction until [`NotificationStore::close`].
/// Every operation on a closed store panics: holding on to a store after
/// its hub was torn down is a wiring bug, not a runtime condition.
pub struct NotificationStore {
    notifications: RwLock<Vec<Notification>>,
    banner_tx: Sender<Banner>,
    banner_rx: Mutex<Option<Receiver<Banner>>>,
    active: AtomicBool,
}

impl NotificationStore {
    pub fn new() -> Self {
        Self::with_notifications(Vec::new())
    }

    /// Start from an existing collection, kept in the given order.
    ///
    /// # Panics
    ///
    /// If two records share an id. Every operation addresses records by id,
    /// so such a collection is a wiring bug.
    pub fn with_notifications(initial: Vec<Notification>) -> Self {
        let mut seen = HashSet::with_capacity(initial.len());
        if let Some(dup) = initial.iter().find(|n| !seen.insert(n.id)) {
            panic!("NotificationStore seeded with duplicate notification id {}", dup.id);
        }

        let (tx, rx) = channel::unbounded();

        Self {
            notifications: RwLock::new(initial),
            banner_tx: tx,
            banner_rx: Mutex::new(Some(rx)),
            active: AtomicBool::new(true),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active.load(Ordering::SeqCst)
    }

    pub fn close(&self) {
        if self.active.swap(false, Ordering::SeqCst) {
            tracing::info!("notification store closed");
        }
    }

    fn ensure_active(&self, operation: &str) {
        if !self.is_active() {
            panic!(
                "NotificationStore::{} called outside its lifecycle: the store was torn down",
                operation
            );
        }
    }

    /// Hand the banner stream to the view layer. Only the first caller gets it.
    pub fn take_banner_receiver(&self) -> Option<Receiver<Banner>> {
        self.ensure_active("take_banner_receiver");
        self.banner_rx.lock().take()
    }

    pub(crate) fn emit(&self, banner: Banner) {
        if self.banner_tx.send(banner).is_err() {
            tracing::debug!("banner receiver dropped, banner discarded");
        }
    }

    // ==================== Mutations ====================

    pub fn add(&self, new: NewNotification) -> Notification {
        self.ensure_active("add");

        let mut notifications = self.notifications.write();

        let mut id = Uuid::new_v4();
        while notifications.iter().any(|n| n.id == id) {
            id = Uuid::new_v4();
        }

        let notification = Notification {
            id,
            title: new.title,
            message: new.message,
            kind: new.kind,
            priority: new.priority,
            date: Utc::now(),
            read: false,
            link: new.link,
        };

        notifications.insert(0, notification.clone());
        drop(notifications);

        tracing::info!(
            notification_id = %notification.id,
            kind = ?notification.kind,
            priority = ?notification.priority,
            title = %sanitize_for_log(&notification.title, LOGGED_TITLE_CHARS),
            "notification added"
        );

        if notification.priority == NotificationPriority::High {
            self.emit(Banner::HighPriority {
                id: notification.id,
                title: notification.title.clone(),
                message: notification.message.clone(),
            });
        }

        notification
    }

    /// Returns whether a record with `id` exists. Unknown ids are ignored.
    pub fn mark_read(&self, id: NotificationId) -> bool {
        self.ensure_active("mark_read");
        self.set_read(id, true)
    }

    pub fn mark_unread(&self, id: NotificationId) -> bool {
        self.ensure_active("mark_unread");
        self.set_read(id, false)
    }

    fn set_read(&self, id: NotificationId, read: bool) -> bool {
        let mut notifications = self.notifications.write();
        match notifications.iter_mut().find(|n| n.id == id) {
            Some(notification) => {
                notification.read = read;
                tracing::debug!(notification_id = %id, read, "notification read flag set");
                true
            }
            None => {
                tracing::debug!(notification_id = %id, "unknown notification, read flag unchanged");
                false
            }
        }
    }

    /// Returns how many records changed state.
    pub fn mark_all_read(&self) -> usize {
        self.ensure_active("mark_all_read");

        let mut changed = 0;
        for notification in self.notifications.write().iter_mut() {
            if !notification.read {
                notification.read = true;
                changed += 1;
            }
        }
        tracing::info!(changed, "all notifications marked read");
        changed
    }

    pub fn remove(&self, id: NotificationId) -> bool {
        self.ensure_active("remove");

        let mut notifications = self.notifications.write();
        let before = notifications.len();
        notifications.retain(|n| n.id != id);
        let removed = notifications.len() != before;

        if removed {
            tracing::info!(notification_id = %id, "notification removed");
        }
        removed
    }

    /// Returns how many records were dropped.
    pub fn clear_all(&self) -> usize {
        self.ensure_active("clear_all");

        let cleared = std::mem::take(&mut *self.notifications.write()).len();
        tracing::info!(cleared, "notifications cleared");
        cleared
    }

    // ==================== Reads ====================

    pub fn snapshot(&self) -> Vec<Notification> {
        self.ensure_active("snapshot");
        self.notifications.read().clone()
    }

    pub fn get(&self, id: NotificationId) -> Option<Notification> {
        self.ensure_active("get");
        self.notifications.read().iter().find(|n| n.id == id).cloned()
    }

    pub fn total_count(&self) -> usize {
        self.ensure_active("total_count");
        self.notifications.read().len()
    }

    pub fn unread_count(&self) -> usize {
        self.ensure_active("unread_count");
        self.notifications.read().iter().filter(|n| !n.read).count()
    }

    pub fn count_by_priority(&self, priority: NotificationPriority) -> usize {
        self.ensure_active("count_by_priority");
        self.notifications
            .read()
            .iter()
            .filter(|n| n.priority == priority)
            .count()
    }

    pub fn count_by_type(&self, kind: NotificationType) -> usize {
        self.ensure_active("count_by_type");
        self.notifications
            .read()
            .iter()
            .filter(|n| n.kind == kind)
            .count()
    }

    pub fn summary(&self) -> NotificationSummary {
        self.ensure_active("summary");
        NotificationSummary::compute(&self.notifications.read())
    }

    pub fn filter_counts(&self) -> FilterCounts {
        self.ensure_active("filter_counts");
        FilterCounts::compute(&self.notifications.read())
    }

    pub fn query(&self, query: &NotificationQuery) -> Vec<Notification> {
        self.ensure_active("query");
        query.apply(&self.notifications.read())
    }
}

impl Default for NotificationStore {
    fn default() -> Self {
        Self::new()
    }
}
