use shared::types::TestId;
use thiserror::Error;

/// Recoverable outcome of a subscribe attempt. The view shows the message
/// and offers `TestCatalog::find_alternatives` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubscriptionError {
    #[error("test {test_id} is full ({max_subscribers} participants); search for an alternative session")]
    CapacityExceeded { test_id: TestId, max_subscribers: u32 },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    #[error("invalid scheduled test {test_id}: {reason}")]
    InvalidTest { test_id: TestId, reason: String },

    #[error("a scheduled test with id {0} already exists")]
    DuplicateTest(TestId),
}
