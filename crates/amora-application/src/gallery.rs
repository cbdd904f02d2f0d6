//! Portrait gallery service.
//!
//! Orchestrates single portrait generations and keeps the in-memory,
//! most-recent-first history. Unlike the chat path this service is
//! fail-loud: errors propagate to the caller, and only a successful
//! generation touches the history.

use std::sync::{Arc, RwLock};

use amora_core::gallery::{GeneratedImage, ImageResolution};
use amora_interaction::{GeminiError, PortraitProvider};

/// Service owning the generated-portrait history.
pub struct GalleryService {
    provider: Arc<dyn PortraitProvider>,
    /// Most-recent-completed first. Never deduplicated, never persisted.
    history: RwLock<Vec<GeneratedImage>>,
}

impl GalleryService {
    pub fn new(provider: Arc<dyn PortraitProvider>) -> Self {
        Self {
            provider,
            history: RwLock::new(Vec::new()),
        }
    }

    /// Generates one portrait and records it on success.
    ///
    /// A whitespace-only prompt is rejected before any network call.
    /// `Ok(None)` means the model produced no usable image (refusal or
    /// busy); the caller must present that differently from an `Err`.
    pub async fn generate(
        &self,
        prompt: &str,
        resolution: ImageResolution,
    ) -> Result<Option<GeneratedImage>, GeminiError> {
        if prompt.trim().is_empty() {
            return Err(GeminiError::EmptyPrompt);
        }

        let url = self.provider.generate_portrait(prompt, resolution).await?;

        let Some(url) = url else {
            tracing::info!("portrait generation returned no image");
            return Ok(None);
        };

        let record = GeneratedImage::new(url, prompt, resolution);
        self.history
            .write()
            .expect("gallery lock poisoned")
            .insert(0, record.clone());

        Ok(Some(record))
    }

    /// Returns a snapshot of the history, most recent first.
    pub fn images(&self) -> Vec<GeneratedImage> {
        self.history.read().expect("gallery lock poisoned").clone()
    }
}
