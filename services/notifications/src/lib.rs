pub mod filter;
pub mod hub;
pub mod model;
pub mod seed;
pub mod store;


pub use filter::{FilterCounts, NotificationFilter, NotificationQuery, NotificationSummary};
pub use hub::NotificationHub;
pub use model::{
    Banner, NewNotification, Notification, NotificationId, NotificationPriority, NotificationType,
};
pub use store::NotificationStore;
