use crate::domain::notification::NotificationRequest;
use crate::domain::ports::Notifier;
use crate::error::Result;
use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe notifier that keeps every request in memory.
///
/// Clones share the same log, so a test can hand one clone to the tracker and inspect
/// the other afterwards.
#[derive(Default, Clone)]
pub struct InMemoryNotifier {
    requests: Arc<RwLock<Vec<NotificationRequest>>>,
}

impl InMemoryNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the requests received so far, in delivery order.
    pub async fn requests(&self) -> Vec<NotificationRequest> {
        self.requests.read().await.clone()
    }
}

#[async_trait]
impl Notifier for InMemoryNotifier {
    async fn notify(&self, request: &NotificationRequest) -> Result<()> {
        let mut requests = self.requests.write().await;
        requests.push(request.clone());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::amount::Amount;
    use rust_decimal_macros::dec;

    #[tokio::test]
    async fn test_in_memory_notifier_records_in_order() {
        let notifier = InMemoryNotifier::new();
        let first = NotificationRequest::new(1, Amount::new(dec!(10)).unwrap(), "A");
        let second = NotificationRequest::new(2, Amount::new(dec!(20)).unwrap(), "B");

        notifier.notify(&first).await.unwrap();
        notifier.clone().notify(&second).await.unwrap();

        let recorded = notifier.requests().await;
        assert_eq!(recorded, vec![first, second]);
    }
}
