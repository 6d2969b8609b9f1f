use super::handler::resolve_roll;
use super::handler::Handler;
use super::handler::Illegal;
use crate::dice::Dice;
use crate::game::*;
use crate::Yards;

/// The defense rolls for lost yardage after winning the throw on a
/// running play: a short run gives ground only on 5+, a long run
/// always loses at least five.
pub struct SackHandler;

impl Handler for SackHandler {
    fn states(&self) -> &'static [State] {
        &[State::SackRoll]
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
            let (play, distance) = match game.play {
                Some(Play::ShortRun) => (Play::ShortRun, if die >= 5 { 5 } else { 0 }),
                Some(Play::LongRun) => (Play::LongRun, if die == 6 { 10 } else { 5 }),
                other => {
                    return Err(Illegal(format!("Unexpected play {:?} for sack roll", other)))
                }
            };
            let offense = game.offense();
            game.ballpos -= distance;
            game.result.push(Event::Loss {
                play,
                player: offense,
                yards: distance,
            });
            game.end_play();
            Ok(())
        })
    }
}

/// After winning the throw on a passing play the defense picks its
/// poison: take the sure sack, or gamble on an interception.
pub struct SackChoiceHandler;

impl Handler for SackChoiceHandler {
    fn states(&self) -> &'static [State] {
        &[State::SackChoice]
    }
    fn kinds(&self) -> &'static [Kind] {
        &[Kind::SackChoice]
    }
    fn handle(
        &self,
        game: &mut Game,
        player: Player,
        action: &Action,
        _: &mut dyn Dice,
    ) -> Result<(), Illegal> {
        let Action::SackChoice { choice } = action else {
            unreachable!("dispatch guarantees a sack-choice payload")
        };
        match choice {
            SackChoice::Sack => {
                let (play, distance) = match game.play {
                    Some(Play::ShortPass) => (Play::ShortPass, 5),
                    Some(Play::LongPass) => (Play::LongPass, 10),
                    Some(Play::Bomb) => (Play::Bomb, 15),
                    other => {
                        return Err(Illegal(format!("Unexpected play {:?} for sack", other)))
                    }
                };
                let offense = game.offense();
                game.ballpos -= distance;
                game.result.push(Event::Loss {
                    play,
                    player: offense,
                    yards: distance,
                });
                game.end_play();
            }
            SackChoice::Pick => {
                game.state = State::PickRoll;
                game.actions[player] = vec![Kind::Roll];
            }
        }
        Ok(())
    }
}

/// One die decides whether the gamble lands: a short pass is picked
/// only on a 6, a long pass on 5+, a bomb on any even die.
pub struct PickRollHandler;

impl Handler for PickRollHandler {
    fn states(&self) -> &'static [State] {
        &[State::PickRoll]
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
            let picked = match game.play {
                Some(Play::ShortPass) => die == 6,
                Some(Play::LongPass) => die >= 5,
                Some(Play::Bomb) => die % 2 == 0,
                other => {
                    return Err(Illegal(format!("Unexpected play {:?} for pick roll", other)))
                }
            };
            if !picked {
                game.result.push(Event::IncompletePass);
                game.end_play();
            } else if game.play == Some(Play::ShortPass) {
                complete_interception(game, 10);
            } else {
                let offense = game.offense();
                game.state = State::DistanceRoll;
                game.actions[offense] = vec![Kind::Roll];
            }
            Ok(())
        })
    }
}

/// The offense rolls how far the doomed throw travelled: one die for a
/// long pass, all three for a bomb.
pub struct DistanceRollHandler;

impl Handler for DistanceRollHandler {
    fn states(&self) -> &'static [State] {
        &[State::DistanceRoll]
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
        resolve_roll(game, player, *count, &[1, 3], dice, |game, roll| {
            let total = roll.iter().map(|&die| die as Yards).sum::<Yards>();
            let distance = match game.play {
                Some(Play::LongPass) if roll.len() == 1 => 10 + 5 * total,
                Some(Play::Bomb) if roll.len() == 3 => 5 * total,
                Some(play) => {
                    return Err(Illegal(format!(
                        "Must roll {} dice for a {:?} distance",
                        match play {
                            Play::Bomb => 3,
                            _ => 1,
                        },
                        play
                    )))
                }
                None => {
                    return Err(Illegal("Unexpected play None for distance roll".to_string()))
                }
            };
            complete_interception(game, distance);
            Ok(())
        })
    }
}

/// The throw is in defensive hands. Spot it where it was caught; a
/// catch past the goal line offers the touchback choice, anything
/// short of it is a live runback.
fn complete_interception(game: &mut Game, throw: Yards) {
    let defender = game.defense();
    if game.ballpos + throw >= 110 {
        game.result.push(Event::OutOfBoundsPass);
        game.end_play();
        return;
    }
    game.ballpos += throw;
    if game.ballpos >= 100 {
        game.state = State::PickTouchbackChoice;
        game.actions[defender] = vec![Kind::TouchbackChoice];
    } else {
        game.state = State::PickReturn;
        game.actions[defender] = vec![Kind::Roll];
    }
    game.result.push(Event::Turnover {
        kind: TurnoverKind::Pick,
    });
    game.switch_possession();
    game.first_down = None;
}

/// Close out the runback. The zeroed down lets end_play's increment
/// hand the intercepting team a true first down without charging them
/// for the broken play.
fn complete_pick_return(game: &mut Game) {
    game.set_first_down();
    game.down = 0;
    game.end_play();
}

pub struct PickReturnHandler;

impl Handler for PickReturnHandler {
    fn states(&self) -> &'static [State] {
        &[State::PickReturn]
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
            game.ballpos += 5 * die as Yards;
            if die == 6 {
                let offense = game.offense();
                game.state = State::PickReturn6;
                game.actions[offense] = vec![Kind::Roll];
            } else {
                complete_pick_return(game);
            }
            Ok(())
        })
    }
}

/// The breakaway on the runback: a second 6 takes it all the way back.
pub struct PickReturn6Handler;

impl Handler for PickReturn6Handler {
    fn states(&self) -> &'static [State] {
        &[State::PickReturn6]
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
            if die == 6 {
                game.ballpos = 100;
                game.end_play();
            } else {
                game.ballpos += 5 * die as Yards;
                complete_pick_return(game);
            }
            Ok(())
        })
    }
}

/// A pick caught behind the goal line: take the 20, or run it out.
pub struct PickTouchbackChoiceHandler;

impl Handler for PickTouchbackChoiceHandler {
    fn states(&self) -> &'static [State] {
        &[State::PickTouchbackChoice]
    }
    fn kinds(&self) -> &'static [Kind] {
        &[Kind::TouchbackChoice]
    }
    fn handle(
        &self,
        game: &mut Game,
        player: Player,
        action: &Action,
        _: &mut dyn Dice,
    ) -> Result<(), Illegal> {
        let Action::TouchbackChoice { choice } = action else {
            unreachable!("dispatch guarantees a touchback payload")
        };
        match choice {
            TouchbackChoice::Touchback => {
                game.result.push(Event::Touchback);
                game.ballpos = 20;
                complete_pick_return(game);
            }
            TouchbackChoice::Return => {
                game.state = State::PickReturn;
                game.actions[player] = vec![Kind::Roll];
            }
        }
        Ok(())
    }
}
