//! Fixtures shared by the cross-crate scenarios in `tests/`.

use notifications_service::{NotificationHub, NotificationStore};
use shared::Settings;
use std::sync::Arc;
use subscriptions_service::{CatalogError, TestCatalog};

/// One dashboard session: the notification hub, its live store and the
/// scheduled-test catalog, wired from the same settings.
pub struct DashboardSession {
    pub hub: NotificationHub,
    pub notifications: Arc<NotificationStore>,
    pub catalog: TestCatalog,
}

impl DashboardSession {
    pub fn start(settings: &Settings) -> Result<Self, CatalogError> {
        let hub = NotificationHub::new();
        let notifications = hub.setup(&settings.notifications);
        let catalog = TestCatalog::from_settings(&settings.subscriptions)?;
        Ok(Self {
            hub,
            notifications,
            catalog,
        })
    }

    pub fn end(self) {
        self.hub.teardown();
    }
}
