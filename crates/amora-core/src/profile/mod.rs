//! User profile domain.

pub mod model;
pub mod service;

pub use model::{PrivacySetting, PrivacySettings, UserProfile};
pub use service::{InMemoryProfileService, ProfileService};
