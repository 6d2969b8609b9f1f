use super::handler::resolve_roll;
use super::handler::resolve_rsp;
use super::handler::Handler;
use super::handler::Illegal;
use crate::dice::Dice;
use crate::game::*;
use crate::Yards;

/// The offense picks a play; both sides throw for it.
pub struct PlayCallHandler;

impl Handler for PlayCallHandler {
    fn states(&self) -> &'static [State] {
        &[State::PlayCall]
    }
    fn kinds(&self) -> &'static [Kind] {
        &[Kind::CallPlay]
    }
    fn handle(
        &self,
        game: &mut Game,
        _: Player,
        action: &Action,
        _: &mut dyn Dice,
    ) -> Result<(), Illegal> {
        let Action::CallPlay { play } = action else {
            unreachable!("dispatch guarantees a play-call payload")
        };
        game.play = Some(*play);
        game.state = match play {
            Play::ShortRun => State::ShortRun,
            Play::LongRun => State::LongRun,
            Play::ShortPass => State::ShortPass,
            Play::LongPass => State::LongPass,
            Play::Bomb => State::Bomb,
        };
        game.actions = Sides::same(vec![Kind::Rsp]);
        Ok(())
    }
}

/// Five yards at a time for as long as the offense keeps winning.
/// A first loss in continuation only ends the play; a loss on the
/// opening contest brings the sack roll.
pub struct ShortRunHandler;

impl Handler for ShortRunHandler {
    fn states(&self) -> &'static [State] {
        &[State::ShortRun, State::ShortRunCont]
    }
    fn kinds(&self) -> &'static [Kind] {
        &[Kind::Rsp]
    }
    fn handle(
        &self,
        game: &mut Game,
        player: Player,
        action: &Action,
        _: &mut dyn Dice,
    ) -> Result<(), Illegal> {
        let Action::Rsp { choice } = action else {
            unreachable!("dispatch guarantees an RSP payload")
        };
        resolve_rsp(game, player, *choice, |game, winner| {
            let offense = game.offense();
            let winner = match winner {
                Some(player) if game.state == State::ShortRunCont && player != offense => None,
                winner => winner,
            };
            match winner {
                Some(player) if player == offense => {
                    game.ballpos += 5;
                    game.result.push(Event::Gain {
                        play: Play::ShortRun,
                        player: offense,
                        yards: 5,
                    });
                    if game.ballpos >= 100 {
                        game.end_play();
                    } else {
                        game.state = State::ShortRunCont;
                        game.actions = Sides::same(vec![Kind::Rsp]);
                    }
                }
                Some(defender) => {
                    game.state = State::SackRoll;
                    game.actions[defender] = vec![Kind::Roll];
                }
                None => {
                    game.end_play();
                }
            }
        });
        Ok(())
    }
}

/// Winner-take-one-die: the offense wins the throw and rolls for the
/// whole gain, with a 1 putting the ball on the turf.
pub struct LongRunHandler;

impl Handler for LongRunHandler {
    fn states(&self) -> &'static [State] {
        &[State::LongRun]
    }
    fn kinds(&self) -> &'static [Kind] {
        &[Kind::Rsp]
    }
    fn handle(
        &self,
        game: &mut Game,
        player: Player,
        action: &Action,
        _: &mut dyn Dice,
    ) -> Result<(), Illegal> {
        let Action::Rsp { choice } = action else {
            unreachable!("dispatch guarantees an RSP payload")
        };
        resolve_rsp(game, player, *choice, |game, winner| {
            let offense = game.offense();
            match winner {
                Some(player) if player == offense => {
                    game.state = State::LongRunRoll;
                    game.actions[offense] = vec![Kind::Roll];
                }
                Some(defender) => {
                    game.state = State::SackRoll;
                    game.actions[defender] = vec![Kind::Roll];
                }
                None => {
                    game.end_play();
                }
            }
        });
        Ok(())
    }
}

pub struct LongRunRollHandler;

impl Handler for LongRunRollHandler {
    fn states(&self) -> &'static [State] {
        &[State::LongRunRoll]
    }
    fn kinds(&self) -> &'static [Kind] {
        &[Kind::Roll]
    }
    fn handle(
        &self,
        game: &mut Game,
        player: Player,
        action: &Action,
        dice: &mut dyn Dice,
    ) -> Result<(), Illegal> {
        let Action::Roll { count } = action else {
            unreachable!("dispatch guarantees a roll payload")
        };
        resolve_roll(game, player, *count, &[1], dice, |game, roll| {
            let die = roll[0];
            let distance = 5 * die as Yards;
            let offense = game.offense();
            game.ballpos += distance;
            game.result.push(Event::Gain {
                play: Play::LongRun,
                player: offense,
                yards: distance,
            });
            if die == 1 {
                game.state = State::Fumble;
                game.actions = Sides::same(vec![Kind::Rsp]);
            } else {
                game.end_play();
            }
            Ok(())
        })
    }
}
