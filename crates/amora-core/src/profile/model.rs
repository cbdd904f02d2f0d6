//! UserProfile domain model.
//!
//! Represents the local user's profile card, verification badges, and the
//! privacy switches controlling what prospective matches can see.

use serde::{Deserialize, Serialize};

/// Identifies one of the profile privacy switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PrivacySetting {
    ShowIncome,
    ShowHousing,
    ShowHobbies,
}

/// Privacy switches controlling profile visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PrivacySettings {
    pub show_income: bool,
    pub show_housing: bool,
    pub show_hobbies: bool,
}

impl PrivacySettings {
    /// Flips the given switch in place.
    pub fn toggle(&mut self, setting: PrivacySetting) {
        match setting {
            PrivacySetting::ShowIncome => self.show_income = !self.show_income,
            PrivacySetting::ShowHousing => self.show_housing = !self.show_housing,
            PrivacySetting::ShowHobbies => self.show_hobbies = !self.show_hobbies,
        }
    }
}

impl Default for PrivacySettings {
    fn default() -> Self {
        Self {
            show_income: false,
            show_housing: true,
            show_hobbies: true,
        }
    }
}

/// User profile domain model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    /// Display name shown on the profile card.
    pub name: String,
    pub age: u32,
    pub location: String,
    /// Real-name verification badge.
    pub is_real_name_verified: bool,
    /// Video verification badge (the "gold" tier).
    pub is_video_verified: bool,
    pub privacy_settings: PrivacySettings,
}

impl Default for UserProfile {
    fn default() -> Self {
        Self {
            name: "Alex".to_string(),
            age: 28,
            location: "Shanghai".to_string(),
            is_real_name_verified: true,
            is_video_verified: false,
            privacy_settings: PrivacySettings::default(),
        }
    }
}
