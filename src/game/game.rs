use super::action::Kind;
use super::choice::RspChoice;
use super::event::Event;
use super::event::ScoreKind;
use super::event::TurnoverKind;
use super::play::Play;
use super::player::Player;
use super::player::Sides;
use super::state::State;
use crate::Version;
use crate::Yards;
use crate::GAME_LENGTH;
use serde::Deserialize;
use serde::Serialize;

/// The authoritative game record, exactly the shape that is persisted
/// and returned to clients. The action pipeline is its only writer.
///
/// `ballpos` is measured from the possessor's own goal: 0 is their own
/// goal line, 100 the opponent's. It may leave [0, 100] mid-transition
/// (a deep kick, an interception in the end zone); every play-boundary
/// state puts it back in range.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub game_id: String,
    pub version: Version,
    pub players: Sides<Option<String>>,
    pub state: State,
    pub play: Option<Play>,
    pub possession: Option<Player>,
    pub ballpos: Yards,
    pub first_down: Option<Yards>,
    pub play_count: u32,
    pub down: u32,
    pub first_kick: Option<Player>,
    pub rsp: Sides<Option<RspChoice>>,
    pub roll: Vec<u8>,
    pub score: Sides<u32>,
    pub penalties: Sides<u32>,
    pub actions: Sides<Vec<Kind>>,
    pub result: Vec<Event>,
}

impl Game {
    /// A fresh record waiting for both coin-toss throws. The home seat
    /// is filled by the creation flow; away stays open until a join.
    pub fn new(game_id: &str) -> Self {
        Self {
            game_id: game_id.to_string(),
            version: 0,
            players: Sides::same(None),
            state: State::CoinToss,
            play: None,
            possession: None,
            ballpos: 35,
            first_down: None,
            play_count: 1,
            down: 1,
            first_kick: None,
            rsp: Sides::same(None),
            roll: Vec::new(),
            score: Sides::same(0),
            penalties: Sides::same(2),
            actions: Sides::same(vec![Kind::Rsp]),
            result: Vec::new(),
        }
    }

    /// which seat, if either, this user occupies
    pub fn seat_of(&self, user: &str) -> Option<Player> {
        [Player::Home, Player::Away]
            .into_iter()
            .find(|&player| self.players[player].as_deref() == Some(user))
    }

    pub fn offense(&self) -> Player {
        self.possession.expect("possession is set during live play")
    }

    pub fn defense(&self) -> Player {
        self.offense().opponent()
    }
}

// shared transition primitives; every handler is built out of these
impl Game {
    pub fn switch_possession(&mut self) {
        self.possession = Some(self.defense());
        self.ballpos = 100 - self.ballpos;
    }

    pub fn set_first_down(&mut self) {
        self.down = 1;
        self.first_down = Some((self.ballpos + 10).min(100));
    }

    pub fn set_call_play_state(&mut self) {
        let offense = self.offense();
        self.state = State::PlayCall;
        self.actions[offense] = vec![Kind::CallPlay, Kind::Penalty];
        self.actions[offense.opponent()] = vec![Kind::Poll, Kind::Penalty];
        self.play = None;
    }

    pub fn set_kickoff_state(&mut self, yardline: Yards) {
        let offense = self.offense();
        self.ballpos = yardline;
        self.first_down = None;
        self.state = State::KickoffChoice;
        self.actions[offense] = vec![Kind::KickoffChoice];
    }

    pub fn touchdown(&mut self) {
        let offense = self.offense();
        self.score[offense] += 6;
        self.result.push(Event::Score {
            kind: ScoreKind::Touchdown,
        });
        self.state = State::PatChoice;
        self.actions[offense] = vec![Kind::PatChoice];
        self.actions[offense.opponent()] = vec![Kind::Poll];
    }

    pub fn safety(&mut self) {
        let defense = self.defense();
        self.score[defense] += 2;
        self.result.push(Event::Score {
            kind: ScoreKind::Safety,
        });
        if self.ballpos <= -10 {
            self.ballpos = -5;
        }
        if self.play_count > GAME_LENGTH {
            self.set_game_over();
        } else {
            // possession stays with the scored-on team: they kick
            self.set_kickoff_state(20);
        }
    }

    /// Close out the live play: advance the clock and the down, then
    /// settle the ball. The order of checks is load-bearing: score
    /// before clock, clock before line-to-gain.
    pub fn end_play(&mut self) {
        self.play = None;
        self.play_count += 1;
        self.down += 1;

        if self.ballpos >= 100 {
            self.touchdown();
            return;
        }
        if self.ballpos <= 0 {
            self.safety();
            return;
        }
        if self.play_count > GAME_LENGTH {
            self.set_game_over();
            return;
        }
        if self.first_down.is_some_and(|line| self.ballpos >= line) {
            self.set_first_down();
        } else if self.down > 4 {
            self.switch_possession();
            self.set_first_down();
            self.result.push(Event::Turnover {
                kind: TurnoverKind::Downs,
            });
        }
        self.set_call_play_state();
    }

    pub fn set_game_over(&mut self) {
        self.state = State::GameOver;
        self.actions = Sides::same(Vec::new());
    }

    pub fn end_pat(&mut self) {
        if self.play_count > GAME_LENGTH {
            self.set_game_over();
        } else {
            // the scoring team kicks off from their own 35
            self.set_kickoff_state(35);
        }
    }
}

impl From<&Game> for String {
    fn from(game: &Game) -> Self {
        format!(
            " @ {:>3} dn {} {:?}",
            game.ballpos, game.down, game.state
        )
    }
}

impl std::fmt::Display for Game {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use colored::Colorize;
        write!(
            f,
            "{} {:>2}-{:<2}{}",
            self.game_id,
            self.score.home,
            self.score.away,
            String::from(self).bright_green()
        )
    }
}

#[cfg(test)]
impl Game {
    /// the seeded two-player record that handler tests override
    pub fn fixture() -> Self {
        let mut game = Self::new("test_default_id");
        game.players = Sides {
            home: Some("harry".to_string()),
            away: Some("daylin".to_string()),
        };
        game.actions = Sides::same(vec![Kind::Poll]);
        game
    }
}
