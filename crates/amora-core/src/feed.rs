//! Daily match picks for the home feed.
//!
//! There is no real recommendation engine behind this; the feed serves a
//! fixed set of fabricated candidate cards, in the same spirit as the
//! assistant persona's invented matches.

use serde::{Deserialize, Serialize};

/// A candidate card shown in the home feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidatePick {
    pub name: String,
    pub age: u32,
    pub occupation: String,
    pub city: String,
    pub tags: Vec<String>,
    pub intro: String,
}

/// Returns today's fabricated picks.
pub fn daily_picks() -> Vec<CandidatePick> {
    vec![
        CandidatePick {
            name: "Sarah".to_string(),
            age: 26,
            occupation: "Product Manager".to_string(),
            city: "Hangzhou".to_string(),
            tags: vec![
                "Loves travel".to_string(),
                "Cat person".to_string(),
                "Coffee addict".to_string(),
            ],
            intro: "Hoping to find someone to explore cafes with on weekends and share the little things.".to_string(),
        },
        CandidatePick {
            name: "Mia".to_string(),
            age: 29,
            occupation: "Illustrator".to_string(),
            city: "Shanghai".to_string(),
            tags: vec![
                "Sketches everywhere".to_string(),
                "Early riser".to_string(),
                "Hiking".to_string(),
            ],
            intro: "Looking for someone patient enough to sit through a two-hour gallery visit.".to_string(),
        },
        CandidatePick {
            name: "Chen".to_string(),
            age: 27,
            occupation: "Pediatric Nurse".to_string(),
            city: "Suzhou".to_string(),
            tags: vec![
                "Home cooking".to_string(),
                "Badminton".to_string(),
                "Dog person".to_string(),
            ],
            intro: "Weekdays are busy, but weekends are for long walks and trying new recipes.".to_string(),
        },
    ]
}
