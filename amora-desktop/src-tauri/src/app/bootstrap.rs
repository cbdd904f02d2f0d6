use std::sync::{Arc, Mutex};

use amora_application::{GalleryService, MatchmakerService};
use amora_core::profile::InMemoryProfileService;
use amora_core::secret::SecretService;
use amora_infrastructure::{ConfigService, SecretServiceImpl};
use amora_interaction::chat::DEFAULT_CHAT_MODEL;
use amora_interaction::image::DEFAULT_IMAGE_MODEL;
use amora_interaction::{GeminiChatProvider, GeminiPortraitProvider};
use anyhow::Result;

use crate::app::AppState;

pub struct AppBootstrap {
    pub app_state: AppState,
}

impl AppBootstrap {
    /// Wires up the services behind the command surface.
    pub fn init() -> Result<Self> {
        let secret_service: Arc<dyn SecretService> = Arc::new(SecretServiceImpl::new()?);

        let config = match ConfigService::new().and_then(|service| service.load()) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("[Bootstrap] Failed to load config.toml, using defaults: {}", err);
                Default::default()
            }
        };

        let chat_model = config
            .chat_model
            .as_deref()
            .unwrap_or(DEFAULT_CHAT_MODEL)
            .to_string();
        let image_model = config
            .image_model
            .as_deref()
            .unwrap_or(DEFAULT_IMAGE_MODEL)
            .to_string();

        tracing::info!(
            %chat_model,
            %image_model,
            "[Bootstrap] AI providers configured"
        );

        let chat_provider = Arc::new(GeminiChatProvider::new(secret_service.clone(), chat_model));
        let portrait_provider = Arc::new(GeminiPortraitProvider::new(
            secret_service.clone(),
            image_model,
        ));

        let app_state = AppState {
            matchmaker: Arc::new(MatchmakerService::new(chat_provider)),
            gallery: Arc::new(GalleryService::new(portrait_provider)),
            profile_service: Arc::new(InMemoryProfileService::default()),
            secret_service,
            authenticated: Mutex::new(false),
        };

        Ok(Self { app_state })
    }
}
