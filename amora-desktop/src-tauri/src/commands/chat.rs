//! Matchmaking chat commands.
//!
//! `send_chat_message` never surfaces an error to the webview: the
//! matchmaker service converts failures into displayable fallback text and
//! quietly re-establishes its session on the next send. The front-end is
//! expected to disable the input while a send is pending.

use amora_core::chat::ChatMessage;
use tauri::State;

use crate::app::AppState;

/// Sends one user message and returns the assistant's reply message.
#[tauri::command]
pub async fn send_chat_message(
    text: String,
    state: State<'_, AppState>,
) -> Result<ChatMessage, String> {
    Ok(state.matchmaker.send_message(&text).await)
}

/// Returns the in-memory conversation transcript.
#[tauri::command]
pub async fn get_chat_transcript(state: State<'_, AppState>) -> Result<Vec<ChatMessage>, String> {
    Ok(state.matchmaker.transcript())
}
