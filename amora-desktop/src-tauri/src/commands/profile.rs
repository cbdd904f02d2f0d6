//! User profile commands.

use std::time::Duration;

use amora_core::profile::{PrivacySetting, UserProfile};
use tauri::State;

use crate::app::AppState;

/// How long the simulated video-verification flow takes.
const VIDEO_VERIFICATION_DELAY: Duration = Duration::from_secs(2);

#[tauri::command]
pub async fn get_user_profile(state: State<'_, AppState>) -> Result<UserProfile, String> {
    Ok(state.profile_service.get_profile())
}

#[tauri::command]
pub async fn update_user_profile(
    profile: UserProfile,
    state: State<'_, AppState>,
) -> Result<UserProfile, String> {
    state.profile_service.update_profile(profile);
    Ok(state.profile_service.get_profile())
}

/// Flips one privacy switch and returns the updated profile.
///
/// Toggling the same switch twice restores the original value.
#[tauri::command]
pub async fn toggle_privacy_setting(
    setting: PrivacySetting,
    state: State<'_, AppState>,
) -> Result<UserProfile, String> {
    Ok(state.profile_service.toggle_privacy(setting))
}

/// Simulated video verification: a short delay, then the gold badge.
#[tauri::command]
pub async fn start_video_verification(
    state: State<'_, AppState>,
) -> Result<UserProfile, String> {
    tokio::time::sleep(VIDEO_VERIFICATION_DELAY).await;

    tracing::info!("[profile] video verification completed");
    Ok(state.profile_service.set_video_verified())
}
