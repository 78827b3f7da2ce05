use clap::{Parser, ValueEnum};
use miette::{IntoDiagnostic, Result};
use sms_upi_tracker::application::tracker::{ProcessSummary, TransactionTracker};
use sms_upi_tracker::domain::message::InboundEvent;
use sms_upi_tracker::domain::ports::NotifierBox;
use sms_upi_tracker::infrastructure::console::{ConsoleNotifier, OutputFormat};
use sms_upi_tracker::interfaces::csv::message_reader::MessageReader;
use std::fs::File;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use tracing::{info, warn};

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Text,
    Json,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Text => OutputFormat::Text,
            Format::Json => OutputFormat::Json,
        }
    }
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input messages CSV file with `sender,body` columns. Reads stdin when omitted.
    input: Option<PathBuf>,

    /// How notifications are written to stdout.
    #[arg(long, value_enum, default_value = "text")]
    format: Format,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(io::stderr)
        .with_ansi(io::stderr().is_terminal())
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let notifier: NotifierBox = Box::new(ConsoleNotifier::new(io::stdout(), cli.format.into()));
    let tracker = TransactionTracker::new(notifier).into_diagnostic()?;

    let source: Box<dyn Read> = match cli.input {
        Some(path) => Box::new(File::open(path).into_diagnostic()?),
        None => Box::new(io::stdin()),
    };

    // The whole input is delivered as one batch, like a multi-part host delivery.
    let mut messages = Vec::new();
    for message in MessageReader::new(source).messages() {
        match message {
            Ok(message) => messages.push(message),
            Err(e) => warn!(error = %e, "Error reading message"),
        }
    }

    let outcomes = tracker
        .process_event(&InboundEvent::sms_received(messages))
        .await;

    let summary = ProcessSummary::from_outcomes(&outcomes);
    info!(
        total = summary.total(),
        notified = summary.notified,
        suppressed = summary.suppressed,
        no_amount = summary.no_amount,
        not_transaction = summary.not_transaction,
        "Processed messages"
    );

    Ok(())
}
