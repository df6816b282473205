//! End-to-end dashboard flows across the notification store and the test
//! catalog.

use integration_tests::DashboardSession;
use notifications_service::{
    Banner, NewNotification, NotificationFilter, NotificationPriority, NotificationQuery,
    NotificationSummary, NotificationType,
};
use rust_decimal_macros::dec;
use shared::config::{NotificationSettings, SubscriptionSettings};
use shared::Settings;
use subscriptions_service::{is_full, probable_cost, SubscriptionError};

fn settings() -> Settings {
    Settings::default()
}

fn quiet_settings() -> Settings {
    Settings {
        notifications: NotificationSettings {
            seed_mock_data: false,
            announce_unread_on_setup: false,
        },
        subscriptions: SubscriptionSettings::default(),
        ..Settings::default()
    }
}

// =============================================================================
// Session start
// =============================================================================

#[test]
fn test_session_starts_with_seeded_data() {
    let session = DashboardSession::start(&settings()).unwrap();

    assert_eq!(
        session.notifications.summary(),
        NotificationSummary { total: 7, unread: 3, urgent: 2 }
    );
    assert_eq!(session.catalog.len(), 4);

    let banners: Vec<Banner> = session
        .notifications
        .take_banner_receiver()
        .unwrap()
        .try_iter()
        .collect();
    assert_eq!(banners, vec![Banner::UnreadSummary { unread: 3 }]);

    session.end();
}

#[test]
fn test_settings_document_drives_session() {
    let settings = Settings::from_toml(
        r#"
        [notifications]
        seed_mock_data = false

        [subscriptions]
        currency = "USD"
        "#,
    )
    .unwrap();

    let session = DashboardSession::start(&settings).unwrap();

    assert_eq!(session.notifications.total_count(), 0);
    let receipt = session.catalog.subscribe(1).unwrap().unwrap();
    assert_eq!(receipt.new_cost.to_string(), "750 $");
}

// =============================================================================
// Subscribe then notify
// =============================================================================

#[test]
fn test_subscribe_scenario_from_test_card() {
    let session = DashboardSession::start(&quiet_settings()).unwrap();

    // Card shows 1500 now, 750 if one more joins
    let test = session.catalog.get(1).unwrap();
    assert_eq!(test.initial_cost(), dec!(1500));
    assert_eq!(test.current_subscribers(), 1);
    assert_eq!(test.max_subscribers(), 5);
    assert_eq!(test.current_cost(), dec!(1500));
    assert_eq!(probable_cost(&test), Some(dec!(750)));

    let receipt = session.catalog.subscribe(1).unwrap().unwrap();
    session.notifications.add(NewNotification::new(
        "Subscription confirmed",
        receipt.to_string(),
        NotificationType::System,
        NotificationPriority::Medium,
    ).with_link("/tests"));

    let test = session.catalog.get(1).unwrap();
    assert_eq!(test.current_subscribers(), 2);
    assert_eq!(test.current_cost(), dec!(750));

    let found = session
        .notifications
        .query(&NotificationQuery::new(NotificationFilter::System).with_search("750 €"));
    assert_eq!(found.len(), 1);
    assert_eq!(session.notifications.unread_count(), 1);
}

#[test]
fn test_full_test_offers_alternatives() {
    let session = DashboardSession::start(&quiet_settings()).unwrap();

    // Fill test 2 (2 of 4 taken)
    session.catalog.subscribe(2).unwrap();
    session.catalog.subscribe(2).unwrap();
    let test = session.catalog.get(2).unwrap();
    assert!(is_full(&test));
    assert_eq!(probable_cost(&test), None);

    let err = session.catalog.subscribe(2).unwrap_err();
    assert!(matches!(
        err,
        SubscriptionError::CapacityExceeded { test_id: 2, max_subscribers: 4 }
    ));

    // Only one session of this test exists in the seed
    assert!(session.catalog.find_alternatives(2).is_empty());
}

#[test]
fn test_capacity_alert_is_a_high_priority_banner() {
    let session = DashboardSession::start(&quiet_settings()).unwrap();
    let banners = session.notifications.take_banner_receiver().unwrap();

    for _ in 0..4 {
        session.catalog.subscribe(4).unwrap();
    }
    let err = session.catalog.subscribe(4).unwrap_err();

    session.notifications.add(NewNotification::new(
        "Test full",
        err.to_string(),
        NotificationType::Alert,
        NotificationPriority::High,
    ));

    let received: Vec<Banner> = banners.try_iter().collect();
    assert_eq!(received.len(), 1);
    assert!(matches!(&received[0], Banner::HighPriority { title, .. } if title == "Test full"));
    assert_eq!(session.notifications.summary().urgent, 1);
}

#[test]
fn test_low_priority_notice_has_no_banner() {
    let session = DashboardSession::start(&quiet_settings()).unwrap();
    let banners = session.notifications.take_banner_receiver().unwrap();

    session.notifications.add(NewNotification::new(
        "Calendar updated",
        "A new session was scheduled",
        NotificationType::System,
        NotificationPriority::Low,
    ));

    assert_eq!(banners.try_iter().count(), 0);
    assert_eq!(session.notifications.total_count(), 1);
}

// =============================================================================
// Notification housekeeping
// =============================================================================

#[test]
fn test_mark_all_read_then_clear() {
    let session = DashboardSession::start(&settings()).unwrap();

    session.notifications.mark_all_read();
    assert_eq!(session.notifications.unread_count(), 0);
    assert_eq!(session.notifications.summary().urgent, 0);

    session.notifications.clear_all();
    assert_eq!(session.notifications.filter_counts().all, 0);
}

#[test]
fn test_remove_twice_matches_remove_once() {
    let session = DashboardSession::start(&settings()).unwrap();
    let target = session.notifications.snapshot()[2].id;

    session.notifications.remove(target);
    let once = session.notifications.snapshot();
    session.notifications.remove(target);

    assert_eq!(session.notifications.snapshot(), once);
    assert_eq!(once.len(), 6);
}

#[test]
#[should_panic(expected = "outside its lifecycle")]
fn test_store_used_after_session_end_panics() {
    let session = DashboardSession::start(&quiet_settings()).unwrap();
    let store = session.notifications.clone();
    session.end();

    store.mark_all_read();
}
