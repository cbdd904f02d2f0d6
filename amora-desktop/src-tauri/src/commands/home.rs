//! Home feed commands.

use amora_core::feed::{self, CandidatePick};

/// Today's fabricated candidate cards for the home feed.
#[tauri::command]
pub fn get_daily_picks() -> Vec<CandidatePick> {
    feed::daily_picks()
}
