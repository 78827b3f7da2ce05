use async_trait::async_trait;
use sms_upi_tracker::domain::notification::NotificationRequest;
use sms_upi_tracker::domain::ports::Notifier;
use sms_upi_tracker::error::{Result, TrackerError};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Fails every delivery, like a host without notification permission.
/// Counts attempts so tests can check that each message was still tried.
#[derive(Default, Clone)]
pub struct DeniedNotifier {
    attempts: Arc<AtomicUsize>,
}

impl DeniedNotifier {
    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Notifier for DeniedNotifier {
    async fn notify(&self, _request: &NotificationRequest) -> Result<()> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(TrackerError::NotificationError(
            "POST_NOTIFICATIONS not granted".to_string(),
        ))
    }
}

/// Fails only for senders listed in `blocked`.
pub struct FlakyNotifier {
    pub blocked: Vec<String>,
    pub delivered: Arc<std::sync::Mutex<Vec<String>>>,
}

#[async_trait]
impl Notifier for FlakyNotifier {
    async fn notify(&self, request: &NotificationRequest) -> Result<()> {
        if self.blocked.contains(&request.sender_display) {
            return Err(TrackerError::NotificationError("channel blocked".to_string()));
        }
        self.delivered
            .lock()
            .unwrap()
            .push(request.sender_display.clone());
        Ok(())
    }
}
