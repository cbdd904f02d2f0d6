//! AI boundary for Amora.
//!
//! This crate owns everything that talks to the Gemini REST API: the
//! credential-bound client, the wire-level request/response types, the
//! conversational chat session, and the one-shot portrait generator.
//! Higher layers depend on the [`ChatProvider`] and [`PortraitProvider`]
//! seams rather than on the HTTP client directly.

pub mod chat;
pub mod error;
pub mod gemini;
pub mod image;

pub use chat::{ChatProvider, ChatSession, GeminiChatProvider};
pub use error::GeminiError;
pub use gemini::GeminiClient;
pub use image::{GeminiPortraitProvider, PortraitProvider};
