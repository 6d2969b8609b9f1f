use crate::game::Action;
use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionRequest {
    pub game_id: String,
    pub user: String,
    pub action: Action,
}

/// new-game and join-game share a body: who, and which game.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatRequest {
    pub game_id: String,
    pub user: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PollRequest {
    pub game_id: String,
    pub version: crate::Version,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListGamesQuery {
    #[serde(default = "yes")]
    pub available: bool,
    #[serde(default)]
    pub user: Option<String>,
}

fn yes() -> bool {
    true
}
