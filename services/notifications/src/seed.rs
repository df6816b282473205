//! The fixed demo collection every session starts with.

use crate::model::{Notification, NotificationPriority, NotificationType};
use chrono::{DateTime, Duration, Utc};
use uuid::Uuid;

struct SeedRecord {
    title: &'static str,
    message: &'static str,
    kind: NotificationType,
    priority: NotificationPriority,
    age_minutes: i64,
    read: bool,
    link: Option<&'static str>,
}

const SEED: [SeedRecord; 7] = [
    SeedRecord {
        title: "New result available",
        message: "Results for test TXL-457 are now available. Review them now.",
        kind: NotificationType::System,
        priority: NotificationPriority::High,
        age_minutes: 30,
        read: false,
        link: Some("/tests"),
    },
    SeedRecord {
        title: "Appointment reminder",
        message: "You have a test scheduled tomorrow at 14:00 at the central laboratory.",
        kind: NotificationType::System,
        priority: NotificationPriority::Medium,
        age_minutes: 2 * 60,
        read: false,
        link: None,
    },
    SeedRecord {
        title: "Message from Dr. Martin",
        message: "Could you specify the protocol used for sample TX-789? I need it to finalize the report.",
        kind: NotificationType::Message,
        priority: NotificationPriority::Medium,
        age_minutes: 5 * 60,
        read: true,
        link: None,
    },
    SeedRecord {
        title: "System update",
        message: "The system will be under maintenance tomorrow between 2:00 and 4:00. Some features may be unavailable.",
        kind: NotificationType::System,
        priority: NotificationPriority::Low,
        age_minutes: 12 * 60,
        read: true,
        link: None,
    },
    SeedRecord {
        title: "Equipment fault detected",
        message: "An anomaly was detected on equipment #E-342. An inspection is required as soon as possible.",
        kind: NotificationType::Alert,
        priority: NotificationPriority::High,
        age_minutes: 16 * 60,
        read: false,
        link: None,
    },
    SeedRecord {
        title: "New procedure available",
        message: "A new toxicity testing procedure has been published. Please review it before your next test.",
        kind: NotificationType::System,
        priority: NotificationPriority::Medium,
        age_minutes: 24 * 60,
        read: true,
        link: Some("/procedures"),
    },
    SeedRecord {
        title: "Message from the Central laboratory",
        message: "Samples for test T-567 are ready for collection. Please pick them up before 17:00.",
        kind: NotificationType::Message,
        priority: NotificationPriority::Medium,
        age_minutes: 25 * 60,
        read: true,
        link: None,
    },
];

/// Demo notifications dated relative to `now`, newest first.
pub fn mock_notifications(now: DateTime<Utc>) -> Vec<Notification> {
    SEED.iter()
        .map(|record| Notification {
            id: Uuid::new_v4(),
            title: record.title.to_string(),
            message: record.message.to_string(),
            kind: record.kind,
            priority: record.priority,
            date: now - Duration::minutes(record.age_minutes),
            read: record.read,
            link: record.link.map(str::to_string),
        })
        .collect()
}
