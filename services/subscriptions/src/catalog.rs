use crate::cost::CostPreview;
use crate::error::{CatalogError, SubscriptionError};
use crate::model::ScheduledTest;
use crate::seed::mock_scheduled_tests;
use chrono::NaiveDate;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use shared::config::SubscriptionSettings;
use shared::types::{Currency, Money, TestId};
use std::collections::BTreeSet;
use std::fmt;

/// Result of a successful subscribe.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubscriptionReceipt {
    pub test_id: TestId,
    pub previous_cost: Money,
    pub new_cost: Money,
    pub subscribers: u32,
    pub max_subscribers: u32,
}

impl fmt::Display for SubscriptionReceipt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "New cost per participant is {} ({} → {})",
            self.new_cost, self.previous_cost, self.new_cost
        )
    }
}

/// Scheduled tests keyed by id.
///
/// Subscribing holds the entry's write lock across the capacity check and
/// the increment, so concurrent joins cannot over-admit.
pub struct TestCatalog {
    tests: DashMap<TestId, ScheduledTest>,
    currency: Currency,
}

impl TestCatalog {
    pub fn new(currency: Currency) -> Self {
        Self {
            tests: DashMap::new(),
            currency,
        }
    }

    pub fn with_tests(currency: Currency, tests: Vec<ScheduledTest>) -> Result<Self, CatalogError> {
        let catalog = Self::new(currency);
        for test in tests {
            catalog.insert(test)?;
        }
        Ok(catalog)
    }

    pub fn from_settings(settings: &SubscriptionSettings) -> Result<Self, CatalogError> {
        let tests = if settings.seed_mock_data {
            mock_scheduled_tests()?
        } else {
            Vec::new()
        };
        let catalog = Self::with_tests(settings.currency, tests)?;
        tracing::info!(tests = catalog.len(), currency = ?settings.currency, "test catalog loaded");
        Ok(catalog)
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    pub fn insert(&self, test: ScheduledTest) -> Result<(), CatalogError> {
        match self.tests.entry(test.id) {
            Entry::Occupied(_) => Err(CatalogError::DuplicateTest(test.id)),
            Entry::Vacant(slot) => {
                tracing::debug!(
                    test_id = test.id,
                    test_name = %test.test_name,
                    "scheduled test added"
                );
                slot.insert(test);
                Ok(())
            }
        }
    }

    pub fn get(&self, id: TestId) -> Option<ScheduledTest> {
        self.tests.get(&id).map(|t| t.clone())
    }

    pub fn len(&self) -> usize {
        self.tests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    /// All tests, by date then id.
    pub fn list(&self) -> Vec<ScheduledTest> {
        self.collect_sorted(|_| true)
    }

    /// Case-insensitive match on product or test name. A blank term lists
    /// everything.
    pub fn search(&self, term: &str) -> Vec<ScheduledTest> {
        let term = term.trim().to_lowercase();
        if term.is_empty() {
            return self.list();
        }
        self.collect_sorted(|t| t.matches_search(&term))
    }

    pub fn scheduled_on(&self, date: NaiveDate) -> Vec<ScheduledTest> {
        self.collect_sorted(|t| t.date == date)
    }

    /// Distinct days that have at least one test, ascending.
    pub fn scheduled_dates(&self) -> Vec<NaiveDate> {
        self.tests
            .iter()
            .map(|t| t.date)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn preview(&self, id: TestId) -> Option<CostPreview> {
        self.tests.get(&id).map(|t| CostPreview::of(&t, self.currency))
    }

    /// Join a test as one more participant.
    ///
    /// Unknown ids are ignored (`Ok(None)`); a full test yields
    /// `SubscriptionError::CapacityExceeded`.
    pub fn subscribe(&self, id: TestId) -> Result<Option<SubscriptionReceipt>, SubscriptionError> {
        let mut test = match self.tests.get_mut(&id) {
            Some(test) => test,
            None => {
                tracing::debug!(test_id = id, "subscribe to unknown test ignored");
                return Ok(None);
            }
        };

        let previous_cost = test.current_cost();

        if let Err(e) = test.admit() {
            tracing::warn!(
                test_id = id,
                max_subscribers = test.max_subscribers(),
                "subscription rejected, test is full"
            );
            return Err(e);
        }

        let receipt = SubscriptionReceipt {
            test_id: id,
            previous_cost: Money::new(previous_cost, self.currency),
            new_cost: Money::new(test.current_cost(), self.currency),
            subscribers: test.current_subscribers(),
            max_subscribers: test.max_subscribers(),
        };

        tracing::info!(
            test_id = id,
            subscribers = receipt.subscribers,
            max_subscribers = receipt.max_subscribers,
            previous_cost = %receipt.previous_cost,
            new_cost = %receipt.new_cost,
            "subscription accepted"
        );

        Ok(Some(receipt))
    }

    /// Other sessions of the same test that still have seats, by date.
    pub fn find_alternatives(&self, id: TestId) -> Vec<ScheduledTest> {
        let test_name = match self.tests.get(&id) {
            Some(test) => test.test_name.to_lowercase(),
            None => return Vec::new(),
        };

        let alternatives = self.collect_sorted(|t| {
            t.id != id && !t.is_full() && t.test_name.to_lowercase() == test_name
        });

        tracing::debug!(test_id = id, found = alternatives.len(), "alternative sessions searched");
        alternatives
    }

    fn collect_sorted<F>(&self, keep: F) -> Vec<ScheduledTest>
    where
        F: Fn(&ScheduledTest) -> bool,
    {
        let mut tests: Vec<ScheduledTest> = self
            .tests
            .iter()
            .filter(|t| keep(t.value()))
            .map(|t| t.value().clone())
            .collect();
        tests.sort_by(|a, b| a.date.cmp(&b.date).then(a.id.cmp(&b.id)));
        tests
    }
}
