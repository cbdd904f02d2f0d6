//! Portrait-gallery commands.
//!
//! Unlike chat, generation errors DO reach the webview, which shows a
//! generic failure message. A successful call that produced no image comes
//! back as `Ok(None)` and is presented differently (model refused or busy).

use amora_core::gallery::{GeneratedImage, ImageResolution};
use tauri::State;

use crate::app::AppState;

/// Generates one portrait for the given description.
#[tauri::command]
pub async fn generate_partner_image(
    prompt: String,
    resolution: ImageResolution,
    state: State<'_, AppState>,
) -> Result<Option<GeneratedImage>, String> {
    state
        .gallery
        .generate(&prompt, resolution)
        .await
        .map_err(|e| {
            tracing::error!(error = %e, "portrait generation failed");
            e.to_string()
        })
}

/// Returns the generation history, most recent first.
#[tauri::command]
pub async fn list_generated_images(
    state: State<'_, AppState>,
) -> Result<Vec<GeneratedImage>, String> {
    Ok(state.gallery.images())
}
