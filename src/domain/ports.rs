use super::notification::NotificationRequest;
use crate::error::Result;
use async_trait::async_trait;

/// Outbound port for posting transaction alerts.
///
/// Delivery is best effort: callers treat an `Err` as a missed notification, not as a
/// processing failure.
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn notify(&self, request: &NotificationRequest) -> Result<()>;
}

pub type NotifierBox = Box<dyn Notifier>;
