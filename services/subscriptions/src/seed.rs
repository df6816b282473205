//! Demo sessions for the test calendar. Per-participant costs are derived
//! from the subscriber counts, never copied in.

use crate::error::CatalogError;
use crate::model::{NewScheduledTest, ScheduledTest, TestStatus};
use chrono::NaiveDate;
use rust_decimal::Decimal;
use shared::types::TestId;

fn date(test_id: TestId, year: i32, month: u32, day: u32) -> Result<NaiveDate, CatalogError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| CatalogError::InvalidTest {
        test_id,
        reason: format!("no such date {}-{:02}-{:02}", year, month, day),
    })
}

pub fn mock_scheduled_tests() -> Result<Vec<ScheduledTest>, CatalogError> {
    let requests = vec![
        NewScheduledTest {
            id: 1,
            product_id: 1,
            product_name: "Alpha-X Cosmetic".to_string(),
            test_name: "Skin irritation test".to_string(),
            date: date(1, 2025, 5, 5)?,
            description: Some(
                "Assesses the skin irritation potential of the product on reconstructed skin models following ISO 10993."
                    .to_string(),
            ),
            status: TestStatus::InProgress,
            initial_cost: Decimal::from(1500),
            current_subscribers: 1,
            max_subscribers: 5,
        },
        NewScheduledTest {
            id: 2,
            product_id: 2,
            product_name: "Eco-Plus Cleaner".to_string(),
            test_name: "Biodegradability test".to_string(),
            date: date(2, 2025, 5, 12)?,
            description: Some(
                "Evaluates how readily the product breaks down in the environment following OECD 301 guidelines."
                    .to_string(),
            ),
            status: TestStatus::Planned,
            initial_cost: Decimal::from(2000),
            current_subscribers: 2,
            max_subscribers: 4,
        },
        NewScheduledTest {
            id: 3,
            product_id: 3,
            product_name: "BioVital Supplement".to_string(),
            test_name: "Genotoxicity test".to_string(),
            date: date(3, 2025, 5, 18)?,
            description: Some(
                "Detects substances that can damage DNA using the Ames test and the in vitro micronucleus assay."
                    .to_string(),
            ),
            status: TestStatus::Validated,
            initial_cost: Decimal::from(3000),
            current_subscribers: 3,
            max_subscribers: 6,
        },
        NewScheduledTest {
            id: 4,
            product_id: 4,
            product_name: "NatureTone Paint".to_string(),
            test_name: "VOC emissions test".to_string(),
            date: date(4, 2025, 5, 25)?,
            description: None,
            status: TestStatus::Planned,
            initial_cost: Decimal::from(2500),
            current_subscribers: 4,
            max_subscribers: 8,
        },
    ];

    requests.into_iter().map(ScheduledTest::new).collect()
}
