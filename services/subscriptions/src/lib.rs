pub mod catalog;
pub mod cost;
pub mod error;
pub mod model;
pub mod seed;


pub use catalog::{SubscriptionReceipt, TestCatalog};
pub use cost::{is_full, probable_cost, CostPreview};
pub use error::{CatalogError, SubscriptionError};
pub use model::{NewScheduledTest, ScheduledTest, TestStatus};
