//! Detects UPI transaction alerts in text messages and raises a notification for each.
//!
//! A message is first classified with a keyword heuristic
//! ([`domain::classifier`]); if it looks like a transaction, an amount is pulled out with
//! an ordered list of patterns ([`domain::extractor`]) and handed to a
//! [`Notifier`](domain::ports::Notifier).

pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod interfaces;
