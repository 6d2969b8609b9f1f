use crate::game::Game;
use crate::game::Sides;
use serde::Deserialize;
use serde::Serialize;

/// One row of the game listing: just enough to pick a seat.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
    pub game_id: String,
    pub players: Sides<Option<String>>,
}

impl From<&Game> for Listing {
    fn from(game: &Game) -> Self {
        Self {
            game_id: game.game_id.clone(),
            players: game.players.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameList {
    pub games: Vec<Listing>,
}
