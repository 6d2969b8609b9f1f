use super::choice::*;
use super::play::Play;
use serde::Deserialize;
use serde::Serialize;

/// A player-submitted move. The wire form carries the discriminator in
/// a "name" field next to the payload, e.g.
/// {"name": "RSP", "choice": "ROCK"}.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    Rsp { choice: RspChoice },
    Roll { count: usize },
    KickoffElection { choice: KickoffElectionChoice },
    KickoffChoice { choice: KickoffChoice },
    CallPlay { play: Play },
    TouchbackChoice { choice: TouchbackChoice },
    RollAgainChoice { choice: RollAgainChoice },
    SackChoice { choice: SackChoice },
    PatChoice { choice: PatChoice },
}

impl Action {
    pub fn kind(&self) -> Kind {
        match self {
            Self::Rsp { .. } => Kind::Rsp,
            Self::Roll { .. } => Kind::Roll,
            Self::KickoffElection { .. } => Kind::KickoffElection,
            Self::KickoffChoice { .. } => Kind::KickoffChoice,
            Self::CallPlay { .. } => Kind::CallPlay,
            Self::TouchbackChoice { .. } => Kind::TouchbackChoice,
            Self::RollAgainChoice { .. } => Kind::RollAgainChoice,
            Self::SackChoice { .. } => Kind::SackChoice,
            Self::PatChoice { .. } => Kind::PatChoice,
        }
    }
}

/// Payload-free action discriminator. This is the vocabulary of the
/// per-player permitted sets (game.actions) and one half of the
/// dispatch key. POLL and PENALTY appear in permitted sets but carry
/// no submittable payload: POLL belongs to the read-only polling
/// endpoint, and PENALTY is reserved with no transition wired.
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Kind {
    Rsp,
    Roll,
    KickoffElection,
    KickoffChoice,
    CallPlay,
    TouchbackChoice,
    RollAgainChoice,
    SackChoice,
    PatChoice,
    Poll,
    Penalty,
}
