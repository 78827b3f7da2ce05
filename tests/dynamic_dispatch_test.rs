use rust_decimal_macros::dec;
use sms_upi_tracker::domain::amount::Amount;
use sms_upi_tracker::domain::notification::NotificationRequest;
use sms_upi_tracker::domain::ports::NotifierBox;
use sms_upi_tracker::infrastructure::console::{ConsoleNotifier, OutputFormat};
use sms_upi_tracker::infrastructure::in_memory_notifier::InMemoryNotifier;

#[tokio::test]
async fn test_notifiers_as_trait_objects() {
    let recorder = InMemoryNotifier::new();
    let notifiers: Vec<NotifierBox> = vec![
        Box::new(recorder.clone()),
        Box::new(ConsoleNotifier::new(std::io::sink(), OutputFormat::Json)),
    ];

    let request = NotificationRequest::new(1, Amount::new(dec!(99.5)).unwrap(), "VK-AXISBK");

    // Verify Send + Sync by spawning tasks
    let handles: Vec<_> = notifiers
        .into_iter()
        .map(|notifier| {
            let request = request.clone();
            tokio::spawn(async move { notifier.notify(&request).await })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    assert_eq!(recorder.requests().await, vec![request]);
}
