//! Generated portrait records and the output resolution enumeration.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Output resolution for portrait generation.
///
/// This is a closed set; the string form ("1K", "2K", "4K") is both the
/// wire parameter sent to the generation API and the serialized IPC value.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
pub enum ImageResolution {
    #[serde(rename = "1K")]
    #[strum(serialize = "1K")]
    OneK,
    #[serde(rename = "2K")]
    #[strum(serialize = "2K")]
    TwoK,
    #[serde(rename = "4K")]
    #[strum(serialize = "4K")]
    FourK,
}

impl ImageResolution {
    /// The wire parameter value for the generation request.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OneK => "1K",
            Self::TwoK => "2K",
            Self::FourK => "4K",
        }
    }
}

/// A generated portrait kept in the in-memory gallery.
///
/// Records are appended most-recent-first and never deduplicated or
/// persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedImage {
    /// Image payload as a `data:image/png;base64,...` URI.
    pub url: String,
    /// The prompt as the user typed it.
    pub prompt: String,
    /// The resolution selected for this generation.
    pub resolution: ImageResolution,
    /// Timestamp when the generation completed.
    pub created_at: DateTime<Utc>,
}

impl GeneratedImage {
    /// Creates a record stamped with the current time.
    pub fn new(url: impl Into<String>, prompt: impl Into<String>, resolution: ImageResolution) -> Self {
        Self {
            url: url.into(),
            prompt: prompt.into(),
            resolution,
            created_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_resolution_wire_form() {
        assert_eq!(ImageResolution::OneK.as_str(), "1K");
        assert_eq!(ImageResolution::TwoK.as_str(), "2K");
        assert_eq!(ImageResolution::FourK.as_str(), "4K");
    }

    #[test]
    fn test_resolution_serde_round_trip() {
        let json = serde_json::to_string(&ImageResolution::TwoK).unwrap();
        assert_eq!(json, "\"2K\"");

        let back: ImageResolution = serde_json::from_str(&json).unwrap();
        assert_eq!(back, ImageResolution::TwoK);
    }

    #[test]
    fn test_resolution_from_str_rejects_unknown() {
        assert_eq!(
            ImageResolution::from_str("2K").unwrap(),
            ImageResolution::TwoK
        );
        assert!(ImageResolution::from_str("8K").is_err());
    }

    #[test]
    fn test_record_preserves_resolution_identity() {
        let record = GeneratedImage::new("data:image/png;base64,AAAA", "a kind doctor", ImageResolution::TwoK);
        assert_eq!(record.resolution, ImageResolution::TwoK);
    }
}
