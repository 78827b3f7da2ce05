/// Intent action under which the host delivers received text messages.
pub const SMS_RECEIVED_ACTION: &str = "android.provider.Telephony.SMS_RECEIVED";

/// A single inbound text message.
///
/// Both fields may be empty. Sources that can report a missing body or originating
/// address go through [`Message::from_parts`], which maps `None` to the empty string.
#[derive(Debug, PartialEq, Eq, Clone, Default)]
pub struct Message {
    pub sender: String,
    pub body: String,
}

impl Message {
    pub fn new(sender: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            sender: sender.into(),
            body: body.into(),
        }
    }

    pub fn from_parts(sender: Option<String>, body: Option<String>) -> Self {
        Self {
            sender: sender.unwrap_or_default(),
            body: body.unwrap_or_default(),
        }
    }
}

/// A batch of messages handed over by the host in one delivery.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct InboundEvent {
    pub action: String,
    pub messages: Vec<Message>,
}

impl InboundEvent {
    /// Wraps messages in an event carrying [`SMS_RECEIVED_ACTION`].
    pub fn sms_received(messages: Vec<Message>) -> Self {
        Self {
            action: SMS_RECEIVED_ACTION.to_string(),
            messages,
        }
    }

    pub fn is_sms_received(&self) -> bool {
        self.action == SMS_RECEIVED_ACTION
    }
}
