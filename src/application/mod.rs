//! Application layer wiring the domain pieces together.
//!
//! `TransactionTracker` is the entry point for inbound messages: it classifies each one,
//! extracts an amount and hands a notification request to the configured notifier.

pub mod tracker;
