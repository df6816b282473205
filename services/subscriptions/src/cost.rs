//! Cost sharing for scheduled tests.
//!
//! The total cost of a test is split evenly between its participants and
//! rounded to whole currency units, half away from zero (750.5 → 751).
//! Every view asks this module; nothing stores a per-participant cost.

use crate::model::ScheduledTest;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};
use shared::types::{Currency, Money};

pub fn round_cost(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Per-participant share of `initial_cost`. Zero participants are billed as
/// one: whoever schedules a test carries its full cost.
pub fn share(initial_cost: Decimal, participants: u32) -> Decimal {
    round_cost(initial_cost / Decimal::from(participants.max(1)))
}

pub fn is_full_at(current_subscribers: u32, max_subscribers: u32) -> bool {
    current_subscribers >= max_subscribers
}

pub fn probable_cost_at(
    initial_cost: Decimal,
    current_subscribers: u32,
    max_subscribers: u32,
) -> Option<Decimal> {
    if is_full_at(current_subscribers, max_subscribers) {
        return None;
    }
    Some(share(initial_cost, current_subscribers + 1))
}

pub fn is_full(test: &ScheduledTest) -> bool {
    is_full_at(test.current_subscribers(), test.max_subscribers())
}

/// Cost per participant if one more participant joined, `None` when the
/// test is full.
pub fn probable_cost(test: &ScheduledTest) -> Option<Decimal> {
    probable_cost_at(
        test.initial_cost(),
        test.current_subscribers(),
        test.max_subscribers(),
    )
}

pub fn current_cost(test: &ScheduledTest) -> Decimal {
    share(test.initial_cost(), test.current_subscribers())
}

/// Everything a test card, table row or subscription dialog displays,
/// priced in the catalog's currency like a `SubscriptionReceipt`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostPreview {
    pub initial_cost: Money,
    pub current_cost: Money,
    pub probable_cost: Option<Money>,
    pub subscribers: u32,
    pub max_subscribers: u32,
    pub seats_left: u32,
    pub is_full: bool,
}

impl CostPreview {
    pub fn of(test: &ScheduledTest, currency: Currency) -> Self {
        let money = |amount| Money::new(amount, currency);
        Self {
            initial_cost: money(test.initial_cost()),
            current_cost: money(current_cost(test)),
            probable_cost: probable_cost(test).map(money),
            subscribers: test.current_subscribers(),
            max_subscribers: test.max_subscribers(),
            seats_left: test.max_subscribers().saturating_sub(test.current_subscribers()),
            is_full: is_full(test),
        }
    }

    /// How much each participant saves if one more joins.
    pub fn saving_if_joined(&self) -> Option<Money> {
        self.probable_cost.map(|probable| {
            Money::new(self.current_cost.amount - probable.amount, self.current_cost.currency)
        })
    }
}
