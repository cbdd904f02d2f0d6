//! Conversational chat session against the Gemini API.
//!
//! A session owns its own [`GeminiClient`] (credential fixed at creation
//! time) plus the accumulated turn history, which is resent on every call.
//! Sessions carry no recovery logic of their own: after a failed exchange
//! the owner must discard the handle and start a fresh session.

use std::sync::Arc;

use amora_core::secret::SecretService;
use async_trait::async_trait;

use crate::error::GeminiError;
use crate::gemini::{Content, GeminiClient, GenerateContentRequest};

/// Default model for matchmaking conversations.
pub const DEFAULT_CHAT_MODEL: &str = "gemini-3-pro-preview";

/// Opens conversational sessions bound to a fixed system instruction.
#[async_trait]
pub trait ChatProvider: Send + Sync {
    /// Creates a fresh session with no prior turns.
    ///
    /// The credential is resolved here, once per session lifetime.
    async fn start_session(
        &self,
        system_instruction: &str,
    ) -> Result<Box<dyn ChatSession>, GeminiError>;
}

/// A live conversational context.
#[async_trait]
pub trait ChatSession: Send + Sync {
    /// Sends one user turn and awaits a single reply.
    ///
    /// Returns `Ok(None)` when the model answered without any text. An
    /// `Err` leaves the session in an unspecified state; it must not be
    /// reused.
    async fn send(&mut self, text: &str) -> Result<Option<String>, GeminiError>;
}

/// [`ChatProvider`] implementation backed by the Gemini REST API.
pub struct GeminiChatProvider {
    secrets: Arc<dyn SecretService>,
    model: String,
}

impl GeminiChatProvider {
    pub fn new(secrets: Arc<dyn SecretService>, model: impl Into<String>) -> Self {
        Self {
            secrets,
            model: model.into(),
        }
    }
}

#[async_trait]
impl ChatProvider for GeminiChatProvider {
    async fn start_session(
        &self,
        system_instruction: &str,
    ) -> Result<Box<dyn ChatSession>, GeminiError> {
        let api_key = self
            .secrets
            .api_key()
            .await
            .ok_or(GeminiError::MissingCredential)?;

        tracing::debug!(model = %self.model, "starting chat session");

        Ok(Box::new(GeminiChatSession {
            client: GeminiClient::new(api_key),
            model: self.model.clone(),
            system_instruction: system_instruction.to_string(),
            history: Vec::new(),
        }))
    }
}

/// Gemini-backed session holding the turn history.
struct GeminiChatSession {
    client: GeminiClient,
    model: String,
    system_instruction: String,
    history: Vec<Content>,
}

#[async_trait]
impl ChatSession for GeminiChatSession {
    async fn send(&mut self, text: &str) -> Result<Option<String>, GeminiError> {
        self.history.push(Content::user_text(text));

        let request = GenerateContentRequest {
            contents: self.history.clone(),
            system_instruction: Some(Content::system_text(&self.system_instruction)),
            generation_config: None,
        };

        let response = self.client.generate_content(&self.model, &request).await?;

        let reply = response.first_text().filter(|text| !text.is_empty());
        if let Some(text) = &reply {
            self.history.push(Content::model_text(text));
        }

        Ok(reply)
    }
}
