use crate::domain::notification::NotificationRequest;
use crate::domain::ports::Notifier;
use crate::error::Result;
use async_trait::async_trait;
use std::io::Write;
use std::sync::Mutex;
use tracing::info;

/// Line format used by [`ConsoleNotifier`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// `[New UPI Transaction] ₹500.00 from VM-HDFCBK`
    #[default]
    Text,
    /// One serialized request per line.
    Json,
}

/// Posts notifications by writing them to a stream, typically stdout.
pub struct ConsoleNotifier<W: Write + Send> {
    writer: Mutex<W>,
    format: OutputFormat,
}

impl<W: Write + Send> ConsoleNotifier<W> {
    pub fn new(writer: W, format: OutputFormat) -> Self {
        Self {
            writer: Mutex::new(writer),
            format,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
            .into_inner()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[async_trait]
impl<W: Write + Send + 'static> Notifier for ConsoleNotifier<W> {
    async fn notify(&self, request: &NotificationRequest) -> Result<()> {
        let line = match self.format {
            OutputFormat::Text => format!("[{}] {}", request.title, request.text),
            OutputFormat::Json => serde_json::to_string(request)?,
        };

        let mut writer = self
            .writer
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        writeln!(writer, "{line}")?;
        writer.flush()?;

        info!(id = request.id, channel = request.channel, "Notification posted");
        Ok(())
    }
}
