//! Explicit lifecycle around the notification store.
//!
//! Views never reach for a global: they are handed a `NotificationHub` (or
//! the `Arc<NotificationStore>` it returns) and call `store()` on it. Asking
//! for the store before `setup` or after `teardown` panics.

use crate::model::{Banner, Notification};
use crate::seed::mock_notifications;
use crate::store::NotificationStore;
use chrono::Utc;
use parking_lot::RwLock;
use shared::config::NotificationSettings;
use std::sync::Arc;

#[derive(Default)]
pub struct NotificationHub {
    current: RwLock<Option<Arc<NotificationStore>>>,
}

impl NotificationHub {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set up the store from settings, seeding the demo data when asked to.
    ///
    /// # Panics
    ///
    /// If the hub is already set up.
    pub fn setup(&self, settings: &NotificationSettings) -> Arc<NotificationStore> {
        let initial = if settings.seed_mock_data {
            mock_notifications(Utc::now())
        } else {
            Vec::new()
        };
        self.setup_with(initial, settings.announce_unread_on_setup)
    }

    /// # Panics
    ///
    /// If the hub is already set up, or if `initial` repeats an id.
    pub fn setup_with(
        &self,
        initial: Vec<Notification>,
        announce_unread: bool,
    ) -> Arc<NotificationStore> {
        let mut current = self.current.write();
        if current.is_some() {
            panic!("NotificationHub::setup called twice without teardown");
        }

        let store = Arc::new(NotificationStore::with_notifications(initial));

        let unread = store.unread_count();
        if announce_unread && unread > 0 {
            store.emit(Banner::UnreadSummary { unread });
        }

        tracing::info!(total = store.total_count(), unread, "notification store set up");

        *current = Some(store.clone());
        store
    }

    pub fn is_active(&self) -> bool {
        self.current.read().is_some()
    }

    /// # Panics
    ///
    /// If called before `setup` or after `teardown`.
    pub fn store(&self) -> Arc<NotificationStore> {
        match self.current.read().as_ref() {
            Some(store) => store.clone(),
            None => panic!(
                "NotificationHub::store called outside an active notification scope; \
                 call setup first"
            ),
        }
    }

    pub fn try_store(&self) -> Option<Arc<NotificationStore>> {
        self.current.read().clone()
    }

    /// Close the store and forget it. Handles still held by views become
    /// unusable. Returns `false` when there was nothing to tear down.
    pub fn teardown(&self) -> bool {
        match self.current.write().take() {
            Some(store) => {
                store.close();
                tracing::info!("notification hub torn down");
                true
            }
            None => false,
        }
    }
}
