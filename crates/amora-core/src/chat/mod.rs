//! Chat domain types.

pub mod message;

pub use message::{ChatMessage, MessageRole};
