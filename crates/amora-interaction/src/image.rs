//! One-shot portrait generation against the Gemini API.

use std::sync::Arc;

use amora_core::gallery::ImageResolution;
use amora_core::secret::SecretService;
use async_trait::async_trait;

use crate::error::GeminiError;
use crate::gemini::{Content, GeminiClient, GenerateContentRequest, GenerationConfig, ImageConfig};

/// Default model for portrait generation.
pub const DEFAULT_IMAGE_MODEL: &str = "gemini-3-pro-image-preview";

/// Portrait orientation for profile cards.
const PORTRAIT_ASPECT_RATIO: &str = "3:4";

/// Embeds the user's description into the fixed portrait template.
pub fn portrait_prompt(description: &str) -> String {
    format!(
        "A realistic, high-quality portrait of a person matching this description: \
         {description}. Photorealistic, soft lighting, 8k."
    )
}

/// Issues single portrait-generation requests.
#[async_trait]
pub trait PortraitProvider: Send + Sync {
    /// Generates one portrait for the given description.
    ///
    /// Returns `Ok(Some(data_uri))` with a `data:image/png;base64,...`
    /// string when the response carried an inline image, `Ok(None)` when it
    /// carried none (model refusal or busy), and `Err` on transport or API
    /// failure.
    async fn generate_portrait(
        &self,
        description: &str,
        resolution: ImageResolution,
    ) -> Result<Option<String>, GeminiError>;
}

/// [`PortraitProvider`] implementation backed by the Gemini REST API.
///
/// Unlike the chat path, no client is cached: the credential is re-read and
/// a fresh [`GeminiClient`] is constructed immediately before every call.
pub struct GeminiPortraitProvider {
    secrets: Arc<dyn SecretService>,
    model: String,
}

impl GeminiPortraitProvider {
    pub fn new(secrets: Arc<dyn SecretService>, model: impl Into<String>) -> Self {
        Self {
            secrets,
            model: model.into(),
        }
    }
}

#[async_trait]
impl PortraitProvider for GeminiPortraitProvider {
    async fn generate_portrait(
        &self,
        description: &str,
        resolution: ImageResolution,
    ) -> Result<Option<String>, GeminiError> {
        let api_key = self
            .secrets
            .api_key()
            .await
            .ok_or(GeminiError::MissingCredential)?;
        let client = GeminiClient::new(api_key);

        let request = GenerateContentRequest {
            contents: vec![Content::user_text(portrait_prompt(description))],
            system_instruction: None,
            generation_config: Some(GenerationConfig {
                image_config: Some(ImageConfig {
                    image_size: resolution.as_str().to_string(),
                    aspect_ratio: PORTRAIT_ASPECT_RATIO.to_string(),
                }),
            }),
        };

        tracing::debug!(
            model = %self.model,
            resolution = %resolution,
            "requesting portrait generation"
        );

        let response = client.generate_content(&self.model, &request).await?;

        Ok(response
            .first_inline_data()
            .map(|data| format!("data:image/png;base64,{data}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::Engine;
    use base64::engine::general_purpose::STANDARD as BASE64_STANDARD;

    #[test]
    fn test_portrait_prompt_embeds_description() {
        let prompt = portrait_prompt("a kind-looking doctor hiking at sunset");

        assert!(prompt.contains("a kind-looking doctor hiking at sunset"));
        assert!(prompt.starts_with("A realistic, high-quality portrait"));
        assert!(prompt.ends_with("soft lighting, 8k."));
    }

    #[test]
    fn test_data_uri_shape() {
        let payload = BASE64_STANDARD.encode(b"not really a png");
        let uri = format!("data:image/png;base64,{payload}");

        assert!(uri.starts_with("data:image/png;base64,"));
        let decoded = BASE64_STANDARD
            .decode(uri.trim_start_matches("data:image/png;base64,"))
            .unwrap();
        assert_eq!(decoded, b"not really a png");
    }
}
