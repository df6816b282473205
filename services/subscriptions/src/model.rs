use crate::cost;
use crate::error::{CatalogError, SubscriptionError};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use shared::types::{ProductId, TestId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TestStatus {
    InProgress,
    Planned,
    Validated,
}

/// Request to schedule a test; validated into a [`ScheduledTest`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewScheduledTest {
    pub id: TestId,
    pub product_id: ProductId,
    pub product_name: String,
    pub test_name: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub description: Option<String>,
    pub status: TestStatus,
    pub initial_cost: Decimal,
    #[serde(default)]
    pub current_subscribers: u32,
    pub max_subscribers: u32,
}

/// A test session whose cost is shared between its participants.
///
/// Cost and capacity fields are private so `0 <= current_subscribers <=
/// max_subscribers` always holds; the per-participant cost is derived on
/// demand through [`cost::current_cost`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "NewScheduledTest")]
pub struct ScheduledTest {
    pub id: TestId,
    pub product_id: ProductId,
    pub product_name: String,
    pub test_name: String,
    pub date: NaiveDate,
    pub description: Option<String>,
    pub status: TestStatus,
    initial_cost: Decimal,
    current_subscribers: u32,
    max_subscribers: u32,
}

impl ScheduledTest {
    pub fn new(request: NewScheduledTest) -> Result<Self, CatalogError> {
        let invalid = |reason: &str| CatalogError::InvalidTest {
            test_id: request.id,
            reason: reason.to_string(),
        };

        if request.initial_cost < Decimal::ZERO {
            return Err(invalid("initial cost is negative"));
        }
        if !request.initial_cost.fract().is_zero() {
            return Err(invalid("initial cost must be a whole number of currency units"));
        }
        if request.max_subscribers == 0 {
            return Err(invalid("capacity must be at least one participant"));
        }
        if request.current_subscribers > request.max_subscribers {
            return Err(invalid("more participants than the test's capacity"));
        }

        Ok(Self {
            id: request.id,
            product_id: request.product_id,
            product_name: request.product_name,
            test_name: request.test_name,
            date: request.date,
            description: request.description,
            status: request.status,
            initial_cost: request.initial_cost.normalize(),
            current_subscribers: request.current_subscribers,
            max_subscribers: request.max_subscribers,
        })
    }

    pub fn initial_cost(&self) -> Decimal {
        self.initial_cost
    }

    pub fn current_subscribers(&self) -> u32 {
        self.current_subscribers
    }

    pub fn max_subscribers(&self) -> u32 {
        self.max_subscribers
    }

    pub fn current_cost(&self) -> Decimal {
        cost::current_cost(self)
    }

    pub fn is_full(&self) -> bool {
        cost::is_full(self)
    }

    pub fn seats_left(&self) -> u32 {
        self.max_subscribers - self.current_subscribers
    }

    /// Take one more participant. The capacity check and the increment
    /// happen under the same `&mut` borrow.
    pub(crate) fn admit(&mut self) -> Result<(), SubscriptionError> {
        if self.is_full() {
            return Err(SubscriptionError::CapacityExceeded {
                test_id: self.id,
                max_subscribers: self.max_subscribers,
            });
        }
        self.current_subscribers += 1;
        Ok(())
    }

    pub(crate) fn matches_search(&self, term: &str) -> bool {
        self.product_name.to_lowercase().contains(term)
            || self.test_name.to_lowercase().contains(term)
    }
}

impl TryFrom<NewScheduledTest> for ScheduledTest {
    type Error = CatalogError;

    fn try_from(request: NewScheduledTest) -> Result<Self, Self::Error> {
        ScheduledTest::new(request)
    }
}
