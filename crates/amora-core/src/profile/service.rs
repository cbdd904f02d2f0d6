//! Profile service for managing the local user's profile.
//!
//! The profile lives only in process memory; there is no durable store
//! behind it.

use std::sync::RwLock;

use super::model::{PrivacySetting, UserProfile};

/// Service for reading and mutating the local user profile.
///
/// This trait abstracts profile operations so the UI shell does not depend
/// on a concrete state container.
pub trait ProfileService: Send + Sync {
    /// Returns a snapshot of the current profile.
    fn get_profile(&self) -> UserProfile;

    /// Replaces the whole profile.
    fn update_profile(&self, profile: UserProfile);

    /// Flips one privacy switch and returns the updated profile.
    fn toggle_privacy(&self, setting: PrivacySetting) -> UserProfile;

    /// Marks the profile as video verified and returns the updated profile.
    fn set_video_verified(&self) -> UserProfile;
}

/// In-memory implementation backing the single-user desktop app.
pub struct InMemoryProfileService {
    profile: RwLock<UserProfile>,
}

impl InMemoryProfileService {
    pub fn new(profile: UserProfile) -> Self {
        Self {
            profile: RwLock::new(profile),
        }
    }
}

impl Default for InMemoryProfileService {
    fn default() -> Self {
        Self::new(UserProfile::default())
    }
}

impl ProfileService for InMemoryProfileService {
    fn get_profile(&self) -> UserProfile {
        self.profile.read().expect("profile lock poisoned").clone()
    }

    fn update_profile(&self, profile: UserProfile) {
        *self.profile.write().expect("profile lock poisoned") = profile;
    }

    fn toggle_privacy(&self, setting: PrivacySetting) -> UserProfile {
        let mut guard = self.profile.write().expect("profile lock poisoned");
        guard.privacy_settings.toggle(setting);
        guard.clone()
    }

    fn set_video_verified(&self) -> UserProfile {
        let mut guard = self.profile.write().expect("profile lock poisoned");
        guard.is_video_verified = true;
        guard.clone()
    }
}
