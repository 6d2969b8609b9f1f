use serde::Deserialize;
use serde::Serialize;

/// An offensive play call. Held on the game record between the call
/// and the end of the play, since downstream states (sacks, picks)
/// branch on which play was live.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Play {
    ShortRun,
    LongRun,
    ShortPass,
    LongPass,
    Bomb,
}
