//! Adapters implementing the [`Notifier`](crate::domain::ports::Notifier) port.

pub mod console;
pub mod in_memory_notifier;
