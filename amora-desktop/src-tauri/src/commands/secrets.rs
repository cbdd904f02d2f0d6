//! API-key gate commands.

use amora_infrastructure::paths::AmoraPaths;
use tauri::State;

use crate::app::AppState;

/// Whether a usable Gemini API key is configured (env var or secret.json).
#[tauri::command]
pub async fn has_api_key(state: State<'_, AppState>) -> Result<bool, String> {
    Ok(state.secret_service.has_api_key().await)
}

/// Stores the Gemini API key in secret.json.
///
/// Later AI calls pick the new key up on their next credential read; no
/// restart is required.
#[tauri::command]
pub async fn set_api_key(api_key: String, state: State<'_, AppState>) -> Result<(), String> {
    let api_key = api_key.trim();
    if api_key.is_empty() {
        return Err("API key must not be empty".to_string());
    }

    state
        .secret_service
        .store_api_key(api_key.to_string())
        .await
        .map_err(|e| e.to_string())
}

/// Path of the secret file, for display in the key-setup screen.
#[tauri::command]
pub async fn get_secret_path() -> Result<String, String> {
    AmoraPaths::secret_file()
        .map(|path| path.display().to_string())
        .map_err(|e| e.to_string())
}
