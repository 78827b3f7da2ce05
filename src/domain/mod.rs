pub mod amount;
pub mod classifier;
pub mod extractor;
pub mod message;
pub mod notification;
pub mod ports;
