use serde::Deserialize;
use serde::Serialize;

#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RspChoice {
    Rock,
    Paper,
    Scissors,
}

impl RspChoice {
    /// the throw this one defeats
    pub fn beats(self) -> Self {
        match self {
            Self::Rock => Self::Scissors,
            Self::Scissors => Self::Paper,
            Self::Paper => Self::Rock,
        }
    }
}

// RECIEVE is misspelled on the wire; clients depend on it as-is
#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KickoffElectionChoice {
    Kick,
    Recieve,
}

#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KickoffChoice {
    Regular,
    Onside,
}

#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TouchbackChoice {
    Touchback,
    Return,
}

#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RollAgainChoice {
    Roll,
    Hold,
}

#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SackChoice {
    Sack,
    Pick,
}

#[derive(Debug, Clone, Copy, Eq, Hash, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PatChoice {
    OnePoint,
    TwoPoint,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn beats_is_a_three_cycle() {
        assert!(RspChoice::Rock.beats() == RspChoice::Scissors);
        assert!(RspChoice::Scissors.beats() == RspChoice::Paper);
        assert!(RspChoice::Paper.beats() == RspChoice::Rock);
        for choice in [RspChoice::Rock, RspChoice::Paper, RspChoice::Scissors] {
            assert!(choice.beats().beats().beats() == choice);
        }
    }
}
