//! Matchmaking conversation service.
//!
//! Owns the single lazily-created chat session and the in-memory
//! transcript. The service is deliberately fail-soft: callers always get a
//! displayable reply string back, never an error. Internally each exchange
//! is a `Result`, so tests can still distinguish success from failure; the
//! string substitution happens only at this service's public boundary.

use std::sync::{Arc, RwLock};

use amora_core::chat::ChatMessage;
use amora_interaction::{ChatProvider, ChatSession, GeminiError};
use tokio::sync::Mutex;

/// Shown when the model answered without any text.
pub const REPLY_FALLBACK: &str = "Sorry, I didn't quite catch that. Could you say it again?";

/// Shown when the exchange failed outright.
pub const CONNECTION_APOLOGY: &str =
    "I'm having a little trouble reaching the matchmaking database right now. \
     Please try again in a moment.";

/// Fixed persona for the matchmaking assistant. Not configurable.
const SYSTEM_INSTRUCTION: &str = "\
You are an AI matchmaker. Your goal is to help the user find a romantic partner.
You should:
1. Be polite, empathetic, and professional.
2. Ask questions to understand the user's preferences (location, hobbies, personality).
3. Pretend to search a database and recommend matches based on their criteria.
4. Emphasize the importance of safety and real-name verification.
5. If asked for icebreakers or opening lines, offer 3 unique, personalized openers based on the match's background or the user's interests.
6. Keep replies concise and natural, like a chat.
Always reply in English.";

/// Service driving the matchmaking conversation.
///
/// At most one session is live at a time. A healthy session is reused
/// across sends; a failed exchange invalidates it, and the next send
/// transparently starts a fresh one.
pub struct MatchmakerService {
    provider: Arc<dyn ChatProvider>,
    /// The single live session handle, if any. The mutex also serializes
    /// concurrent sends.
    session: Mutex<Option<Box<dyn ChatSession>>>,
    transcript: RwLock<Vec<ChatMessage>>,
}

impl MatchmakerService {
    pub fn new(provider: Arc<dyn ChatProvider>) -> Self {
        Self {
            provider,
            session: Mutex::new(None),
            transcript: RwLock::new(Vec::new()),
        }
    }

    /// Sends one user message and returns the assistant's reply message.
    ///
    /// Never fails and never returns empty text: an empty model reply
    /// becomes [`REPLY_FALLBACK`], and any transport or API error becomes
    /// [`CONNECTION_APOLOGY`] after the session handle is dropped.
    pub async fn send_message(&self, text: &str) -> ChatMessage {
        self.record(ChatMessage::user(text));

        let reply_text = match self.exchange(text).await {
            Ok(Some(reply)) => reply,
            Ok(None) => REPLY_FALLBACK.to_string(),
            Err(err) => {
                tracing::warn!(error = %err, "chat exchange failed, session dropped");
                CONNECTION_APOLOGY.to_string()
            }
        };

        let reply = ChatMessage::model(reply_text);
        self.record(reply.clone());
        reply
    }

    /// Returns a snapshot of the conversation transcript.
    pub fn transcript(&self) -> Vec<ChatMessage> {
        self.transcript
            .read()
            .expect("transcript lock poisoned")
            .clone()
    }

    /// One full exchange: ensure a session exists, forward the text, and
    /// invalidate the handle on failure so the next call starts fresh.
    async fn exchange(&self, text: &str) -> Result<Option<String>, GeminiError> {
        let mut slot = self.session.lock().await;

        if slot.is_none() {
            *slot = Some(self.provider.start_session(SYSTEM_INSTRUCTION).await?);
        }
        let session = slot.as_mut().expect("session ensured above");

        match session.send(text).await {
            Ok(reply) => Ok(reply),
            Err(err) => {
                // Never reuse a handle after a failed exchange.
                *slot = None;
                Err(err)
            }
        }
    }

    fn record(&self, message: ChatMessage) {
        self.transcript
            .write()
            .expect("transcript lock poisoned")
            .push(message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use amora_core::chat::MessageRole;
    use async_trait::async_trait;
    use std::collections::VecDeque;
    use std::sync::Mutex as StdMutex;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// One scripted outcome per send, shared between provider and sessions.
    type Script = Arc<StdMutex<VecDeque<Result<Option<String>, GeminiError>>>>;

    struct FakeChatProvider {
        script: Script,
        sessions_started: Arc<AtomicUsize>,
        fail_start: bool,
    }

    impl FakeChatProvider {
        fn new(outcomes: Vec<Result<Option<String>, GeminiError>>) -> (Self, Arc<AtomicUsize>) {
            let counter = Arc::new(AtomicUsize::new(0));
            let provider = Self {
                script: Arc::new(StdMutex::new(outcomes.into())),
                sessions_started: counter.clone(),
                fail_start: false,
            };
            (provider, counter)
        }
    }

    #[async_trait]
    impl ChatProvider for FakeChatProvider {
        async fn start_session(
            &self,
            _system_instruction: &str,
        ) -> Result<Box<dyn ChatSession>, GeminiError> {
            if self.fail_start {
                return Err(GeminiError::MissingCredential);
            }
            self.sessions_started.fetch_add(1, Ordering::SeqCst);
            Ok(Box::new(FakeSession {
                script: self.script.clone(),
            }))
        }
    }

    struct FakeSession {
        script: Script,
    }

    #[async_trait]
    impl ChatSession for FakeSession {
        async fn send(&mut self, _text: &str) -> Result<Option<String>, GeminiError> {
            self.script
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or(Ok(Some("out of script".to_string())))
        }
    }

    fn network_error() -> GeminiError {
        GeminiError::Network("connection reset".to_string())
    }

    #[tokio::test]
    async fn test_reply_is_returned_and_recorded() {
        let (provider, _) = FakeChatProvider::new(vec![Ok(Some("Nice to meet you!".to_string()))]);
        let service = MatchmakerService::new(Arc::new(provider));

        let reply = service.send_message("hello").await;

        assert_eq!(reply.role, MessageRole::Model);
        assert_eq!(reply.text, "Nice to meet you!");

        let transcript = service.transcript();
        assert_eq!(transcript.len(), 2);
        assert_eq!(transcript[0].role, MessageRole::User);
        assert_eq!(transcript[0].text, "hello");
        assert_eq!(transcript[1].text, "Nice to meet you!");
    }

    #[tokio::test]
    async fn test_empty_reply_becomes_fallback_and_keeps_session() {
        let (provider, starts) = FakeChatProvider::new(vec![
            Ok(None),
            Ok(Some("still here".to_string())),
        ]);
        let service = MatchmakerService::new(Arc::new(provider));

        let reply = service.send_message("hello?").await;
        assert_eq!(reply.text, REPLY_FALLBACK);
        assert!(!reply.text.is_empty());

        // An empty reply is not an error: the session survives.
        service.send_message("are you there?").await;
        assert_eq!(starts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_error_returns_apology_and_recreates_session_once() {
        let (provider, starts) = FakeChatProvider::new(vec![
            Err(network_error()),
            Ok(Some("back online".to_string())),
        ]);
        let service = MatchmakerService::new(Arc::new(provider));

        let reply = service.send_message("hello").await;
        assert_eq!(reply.text, CONNECTION_APOLOGY);

        let before_retry = starts.load(Ordering::SeqCst);
        let reply = service.send_message("hello again").await;
        assert_eq!(reply.text, "back online");

        // Exactly one new session across the error + retry pair.
        assert_eq!(starts.load(Ordering::SeqCst), before_retry + 1);
    }

    #[tokio::test]
    async fn test_healthy_session_is_reused() {
        let (provider, starts) = FakeChatProvider::new(vec![
            Ok(Some("first".to_string())),
            Ok(Some("second".to_string())),
        ]);
        let service = MatchmakerService::new(Arc::new(provider));

        service.send_message("one").await;
        service.send_message("two").await;

        assert_eq!(starts.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_failed_session_start_is_soft() {
        let (mut provider, starts) = FakeChatProvider::new(vec![]);
        provider.fail_start = true;
        let service = MatchmakerService::new(Arc::new(provider));

        let reply = service.send_message("hello").await;

        assert_eq!(reply.text, CONNECTION_APOLOGY);
        assert_eq!(starts.load(Ordering::SeqCst), 0);
        // Both turns are still recorded locally.
        assert_eq!(service.transcript().len(), 2);
    }
}
