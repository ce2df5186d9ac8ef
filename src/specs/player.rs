// src/specs/player.rs

use crate::config::consts::BBR_PLAYERS;
use crate::config::StatKind;

/// (standard, value) table ids on a player page.
pub fn regions(kind: StatKind) -> [&'static str; 2] {
    match kind {
        StatKind::Batting => ["batting_standard", "batting_value"],
        StatKind::Pitching => ["pitching_standard", "pitching_value"],
    }
}

/// "troutmi01" → ".../players/t/troutmi01.shtml"
pub fn page_url(page_id: &str) -> String {
    let letter = page_id.chars().next().map(String::from).unwrap_or_default();
    format!("{BBR_PLAYERS}/{letter}/{page_id}.shtml")
}
