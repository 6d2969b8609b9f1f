use serde::Deserialize;
use serde::Serialize;

/// Node in the game state machine. COIN_TOSS is initial, GAME_OVER is
/// terminal; everything in between is reachable only through the
/// dispatch table in rules::dispatch.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum State {
    CoinToss,
    KickoffElection,
    KickoffChoice,
    Kickoff,
    OnsideKick,
    TouchbackChoice,
    KickReturn,
    #[serde(rename = "KICK_RETURN_1")]
    KickReturn1,
    #[serde(rename = "KICK_RETURN_6")]
    KickReturn6,
    Fumble,
    PatChoice,
    ExtraPoint,
    #[serde(rename = "EXTRA_POINT_2")]
    ExtraPoint2,
    PlayCall,
    ShortRun,
    ShortRunCont,
    LongRun,
    LongRunRoll,
    ShortPass,
    ShortPassCont,
    LongPass,
    LongPassRoll,
    Bomb,
    BombRoll,
    BombChoice,
    SackRoll,
    SackChoice,
    PickRoll,
    DistanceRoll,
    PickReturn,
    #[serde(rename = "PICK_RETURN_6")]
    PickReturn6,
    PickTouchbackChoice,
    GameOver,
}
