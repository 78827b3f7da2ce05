use crate::domain::amount::Amount;
use serde::Serialize;
use std::sync::atomic::{AtomicI64, Ordering};

/// Senders longer than this many characters are cut and suffixed with an ellipsis.
pub const SENDER_DISPLAY_LIMIT: usize = 20;

pub const NOTIFICATION_TITLE: &str = "New UPI Transaction";

/// Delivery channel every transaction notification is posted on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NotificationChannel {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub importance: Priority,
    pub vibration: bool,
}

pub const UPI_CHANNEL: NotificationChannel = NotificationChannel {
    id: "upi_transactions",
    name: "UPI Transactions",
    description: "Notifications for new UPI transactions",
    importance: Priority::High,
    vibration: true,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
}

/// Everything a notifier needs to post one alert.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NotificationRequest {
    pub id: i64,
    pub channel: &'static str,
    pub title: String,
    pub text: String,
    pub amount: Amount,
    pub sender_display: String,
    pub priority: Priority,
    pub sound: bool,
    pub vibrate: bool,
    pub auto_cancel: bool,
}

impl NotificationRequest {
    pub fn new(id: i64, amount: Amount, sender: &str) -> Self {
        let sender_display = sender_display(sender);
        Self {
            id,
            channel: UPI_CHANNEL.id,
            title: NOTIFICATION_TITLE.to_string(),
            text: format!("₹{} from {}", amount.display(), sender_display),
            amount,
            sender_display,
            priority: Priority::High,
            sound: true,
            vibrate: true,
            auto_cancel: true,
        }
    }
}

/// Shortens a sender address for display.
pub fn sender_display(sender: &str) -> String {
    if sender.chars().count() > SENDER_DISPLAY_LIMIT {
        let head: String = sender.chars().take(SENDER_DISPLAY_LIMIT).collect();
        format!("{head}...")
    } else {
        sender.to_string()
    }
}

/// Hands out notification ids based on the wall clock in milliseconds.
///
/// Ids are strictly increasing, so two notifications raised within the same
/// millisecond never replace each other.
#[derive(Debug, Default)]
pub struct NotificationIds {
    last: AtomicI64,
}

impl NotificationIds {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn next_id(&self) -> i64 {
        let now = chrono::Utc::now().timestamp_millis();
        let previous = self
            .last
            .fetch_update(Ordering::SeqCst, Ordering::SeqCst, |last| {
                Some(now.max(last + 1))
            })
            .unwrap_or_else(|last| last);
        now.max(previous + 1)
    }
}
