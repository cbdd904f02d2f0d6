use std::sync::{Arc, Mutex};

use amora_application::{GalleryService, MatchmakerService};
use amora_core::profile::ProfileService;
use amora_core::secret::SecretService;

/// Application state shared across Tauri commands.
pub struct AppState {
    pub matchmaker: Arc<MatchmakerService>,
    pub gallery: Arc<GalleryService>,
    pub profile_service: Arc<dyn ProfileService>,
    pub secret_service: Arc<dyn SecretService>,
    /// Mock auth gate: flipped by login/logout, checked by the shell only.
    pub authenticated: Mutex<bool>,
}
