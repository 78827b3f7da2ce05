use crate::domain::message::Message;
use crate::error::{Result, TrackerError};
use std::io::Read;

/// Reads messages from a CSV export with a header row followed by `sender,body` rows.
///
/// Columns are taken by position. A row with only a sender, or an empty row, yields a
/// message whose missing fields are empty strings; extra columns are ignored.
pub struct MessageReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> MessageReader<R> {
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_reader(source);
        Self { reader }
    }

    /// Yields one item per data row. A row that cannot be decoded (e.g. invalid UTF-8)
    /// comes back as an `Err` and does not stop the rows after it.
    pub fn messages(self) -> impl Iterator<Item = Result<Message>> {
        self.reader.into_records().map(|result| {
            let record = result.map_err(TrackerError::from)?;
            Ok(Message::from_parts(
                record.get(0).map(str::to_string),
                record.get(1).map(str::to_string),
            ))
        })
    }
}
