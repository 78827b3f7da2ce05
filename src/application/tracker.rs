use crate::domain::classifier::is_transaction;
use crate::domain::extractor::AmountExtractor;
use crate::domain::message::{InboundEvent, Message};
use crate::domain::notification::{NotificationIds, NotificationRequest};
use crate::domain::ports::NotifierBox;
use crate::error::Result;
use tracing::{debug, warn};

/// What happened to a single message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessOutcome {
    /// The classifier did not consider the message a transaction.
    NotTransaction,
    /// Looked like a transaction, but no valid amount was found.
    NoAmount,
    Notified(NotificationRequest),
    /// The notifier failed; the failure was logged and swallowed.
    Suppressed(NotificationRequest),
}

/// Per-kind counts over a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ProcessSummary {
    pub not_transaction: usize,
    pub no_amount: usize,
    pub notified: usize,
    pub suppressed: usize,
}

impl ProcessSummary {
    pub fn from_outcomes<'a>(outcomes: impl IntoIterator<Item = &'a ProcessOutcome>) -> Self {
        let mut summary = Self::default();
        for outcome in outcomes {
            summary.record(outcome);
        }
        summary
    }

    pub fn record(&mut self, outcome: &ProcessOutcome) {
        match outcome {
            ProcessOutcome::NotTransaction => self.not_transaction += 1,
            ProcessOutcome::NoAmount => self.no_amount += 1,
            ProcessOutcome::Notified(_) => self.notified += 1,
            ProcessOutcome::Suppressed(_) => self.suppressed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.not_transaction + self.no_amount + self.notified + self.suppressed
    }
}

/// Entry point for inbound messages.
///
/// `TransactionTracker` runs each message through classification, amount extraction
/// and notification. Messages are handled one at a time; every notifier call is awaited
/// before the next message is looked at.
pub struct TransactionTracker {
    extractor: AmountExtractor,
    notifier: NotifierBox,
    ids: NotificationIds,
}

impl TransactionTracker {
    /// Creates a new `TransactionTracker` posting alerts through `notifier`.
    ///
    /// Fails only if the extraction patterns cannot be compiled.
    pub fn new(notifier: NotifierBox) -> Result<Self> {
        Ok(Self {
            extractor: AmountExtractor::new()?,
            notifier,
            ids: NotificationIds::new(),
        })
    }

    /// Processes one message to completion.
    ///
    /// Never fails: a notifier error is logged and reported as
    /// [`ProcessOutcome::Suppressed`].
    pub async fn process_message(&self, message: &Message) -> ProcessOutcome {
        if !is_transaction(&message.body) {
            debug!(sender = %message.sender, "Not a transaction message");
            return ProcessOutcome::NotTransaction;
        }

        let Some(extraction) = self.extractor.extract_amount(&message.body) else {
            debug!(sender = %message.sender, "Transaction message without a usable amount");
            return ProcessOutcome::NoAmount;
        };

        debug!(
            sender = %message.sender,
            amount = %extraction.amount,
            rule = %extraction.rule,
            "Extracted amount"
        );

        let request =
            NotificationRequest::new(self.ids.next_id(), extraction.amount, &message.sender);
        match self.notifier.notify(&request).await {
            Ok(()) => ProcessOutcome::Notified(request),
            Err(e) => {
                warn!(id = request.id, error = %e, "Notification could not be delivered");
                ProcessOutcome::Suppressed(request)
            }
        }
    }

    /// Processes a host delivery in order.
    ///
    /// Events carrying any action other than
    /// [`SMS_RECEIVED_ACTION`](crate::domain::message::SMS_RECEIVED_ACTION) are ignored
    /// and yield no outcomes.
    pub async fn process_event(&self, event: &InboundEvent) -> Vec<ProcessOutcome> {
        if !event.is_sms_received() {
            debug!(action = %event.action, "Ignoring event");
            return Vec::new();
        }

        let mut outcomes = Vec::with_capacity(event.messages.len());
        for message in &event.messages {
            outcomes.push(self.process_message(message).await);
        }
        outcomes
    }
}
