use super::choice::*;
use super::play::Play;
use super::player::Player;
use serde::Deserialize;
use serde::Serialize;

/// One entry of the per-turn result log. The log is cleared at the
/// start of every accepted action and accumulates whatever that action
/// produced; clients render it to narrate the turn.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "name", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Event {
    Rsp {
        home: RspChoice,
        away: RspChoice,
    },
    Roll {
        player: Player,
        roll: Vec<u8>,
    },
    Gain {
        play: Play,
        player: Player,
        yards: crate::Yards,
    },
    Loss {
        play: Play,
        player: Player,
        yards: crate::Yards,
    },
    IncompletePass,
    OutOfBoundsPass,
    OutOfBoundsKick,
    Touchback,
    Turnover {
        #[serde(rename = "type")]
        kind: TurnoverKind,
    },
    KickoffElection {
        choice: KickoffElectionChoice,
    },
    Score {
        #[serde(rename = "type")]
        kind: ScoreKind,
    },
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TurnoverKind {
    Downs,
    Fumble,
    Pick,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ScoreKind {
    Touchdown,
    Safety,
    #[serde(rename = "PAT_1")]
    Pat1,
    #[serde(rename = "PAT_2")]
    Pat2,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_carry_the_name_tag() {
        let event = Event::Gain {
            play: Play::Bomb,
            player: Player::Home,
            yards: 65,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["name"], "GAIN");
        assert_eq!(json["play"], "BOMB");
        assert_eq!(json["yards"], 65);
    }

    #[test]
    fn unit_events_are_just_a_name() {
        let json = serde_json::to_value(&Event::IncompletePass).unwrap();
        assert_eq!(json, serde_json::json!({"name": "INCOMPLETE_PASS"}));
    }

    #[test]
    fn score_types_keep_pat_underscores() {
        let event = Event::Score {
            kind: ScoreKind::Pat1,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "PAT_1");
        let event = Event::Turnover {
            kind: TurnoverKind::Downs,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["type"], "DOWNS");
    }
}
