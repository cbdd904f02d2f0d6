//! Mock authentication gate.
//!
//! There is no real identity behind this: login always succeeds and only
//! flips the shell-level flag that gates the tabbed UI.

use tauri::State;

use crate::app::AppState;

#[tauri::command]
pub async fn login(state: State<'_, AppState>) -> Result<bool, String> {
    let mut authenticated = state
        .authenticated
        .lock()
        .map_err(|e| format!("Failed to lock auth state: {}", e))?;
    *authenticated = true;

    tracing::info!("[login] mock one-tap login accepted");
    Ok(true)
}

#[tauri::command]
pub async fn logout(state: State<'_, AppState>) -> Result<(), String> {
    let mut authenticated = state
        .authenticated
        .lock()
        .map_err(|e| format!("Failed to lock auth state: {}", e))?;
    *authenticated = false;

    Ok(())
}

#[tauri::command]
pub async fn is_authenticated(state: State<'_, AppState>) -> Result<bool, String> {
    state
        .authenticated
        .lock()
        .map(|authenticated| *authenticated)
        .map_err(|e| format!("Failed to lock auth state: {}", e))
}
