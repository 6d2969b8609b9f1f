use super::handler::resolve_roll;
use super::handler::resolve_rsp;
use super::handler::Handler;
use super::handler::Illegal;
use crate::dice::Dice;
use crate::game::*;
use crate::Yards;

/// Ten yards per completed throw, same continuation shape as the short
/// run, except a loss lets the defense pick between a sack and an
/// interception attempt, and a tie falls incomplete.
pub struct ShortPassHandler;

impl Handler for ShortPassHandler {
    fn states(&self) -> &'static [State] {
        &[State::ShortPass, State::ShortPassCont]
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
                Some(player) if game.state == State::ShortPassCont && player != offense => None,
                winner => winner,
            };
            match winner {
                Some(player) if player == offense => {
                    game.ballpos += 10;
                    game.result.push(Event::Gain {
                        play: Play::ShortPass,
                        player: offense,
                        yards: 10,
                    });
                    if game.ballpos >= 100 {
                        game.end_play();
                    } else {
                        game.state = State::ShortPassCont;
                        game.actions = Sides::same(vec![Kind::Rsp]);
                    }
                }
                Some(defender) => {
                    game.state = State::SackChoice;
                    game.actions[defender] = vec![Kind::SackChoice];
                }
                None => {
                    game.result.push(Event::IncompletePass);
                    game.end_play();
                }
            }
        });
        Ok(())
    }
}

pub struct LongPassHandler;

impl Handler for LongPassHandler {
    fn states(&self) -> &'static [State] {
        &[State::LongPass]
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
                    game.state = State::LongPassRoll;
                    game.actions[offense] = vec![Kind::Roll];
                }
                Some(defender) => {
                    game.state = State::SackChoice;
                    game.actions[defender] = vec![Kind::SackChoice];
                }
                None => {
                    game.result.push(Event::IncompletePass);
                    game.end_play();
                }
            }
        });
        Ok(())
    }
}

/// One die for the completed long ball: 10 + 5 per pip, sailing out of
/// bounds past the back of the end zone.
pub struct LongPassRollHandler;

impl Handler for LongPassRollHandler {
    fn states(&self) -> &'static [State] {
        &[State::LongPassRoll]
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
            let distance = 10 + 5 * roll[0] as Yards;
            let offense = game.offense();
            if game.ballpos + distance >= 110 {
                game.result.push(Event::OutOfBoundsPass);
            } else {
                game.ballpos += distance;
                game.result.push(Event::Gain {
                    play: Play::LongPass,
                    player: offense,
                    yards: distance,
                });
            }
            game.end_play();
            Ok(())
        })
    }
}

/// The deep shot. Winning the throw buys up to three dice, rolled one
/// at a time; an odd running total may be banked or pressed, an even
/// total after three dice falls incomplete.
pub struct BombHandler;

impl Handler for BombHandler {
    fn states(&self) -> &'static [State] {
        &[State::Bomb]
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
                    game.state = State::BombRoll;
                    game.roll = Vec::new();
                    game.actions[offense] = vec![Kind::Roll];
                }
                Some(defender) => {
                    game.state = State::SackChoice;
                    game.actions[defender] = vec![Kind::SackChoice];
                }
                None => {
                    game.result.push(Event::IncompletePass);
                    game.end_play();
                }
            }
        });
        Ok(())
    }
}

pub struct BombRollHandler;

impl Handler for BombRollHandler {
    fn states(&self) -> &'static [State] {
        &[State::BombRoll]
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
            game.roll.push(roll[0]);
            continue_bomb(game);
            Ok(())
        })
    }
}

/// Sitting on an odd total: bank it, or press for more distance.
pub struct BombChoiceHandler;

impl Handler for BombChoiceHandler {
    fn states(&self) -> &'static [State] {
        &[State::BombChoice]
    }
    fn kinds(&self) -> &'static [Kind] {
        &[Kind::RollAgainChoice]
    }
    fn handle(
        &self,
        game: &mut Game,
        player: Player,
        action: &Action,
        dice: &mut dyn Dice,
    ) -> Result<(), Illegal> {
        let Action::RollAgainChoice { choice } = action else {
            unreachable!("dispatch guarantees a roll-again payload")
        };
        match choice {
            RollAgainChoice::Hold => end_bomb(game),
            RollAgainChoice::Roll => {
                let roll = dice.toss(1);
                game.result.push(Event::Roll {
                    player,
                    roll: roll.clone(),
                });
                game.roll.push(roll[0]);
                continue_bomb(game);
            }
        }
        Ok(())
    }
}

/// After each bomb die: three dice settle the throw; an even running
/// total forces another roll, an odd one offers the choice to bank.
fn continue_bomb(game: &mut Game) {
    let offense = game.offense();
    if game.roll.len() >= 3 {
        end_bomb(game);
    } else if game.roll.iter().map(|&die| die as u32).sum::<u32>() % 2 == 0 {
        game.state = State::BombRoll;
        game.actions[offense] = vec![Kind::Roll];
    } else {
        game.state = State::BombChoice;
        game.actions[offense] = vec![Kind::RollAgainChoice];
    }
}

/// Settle the bomb: even is incomplete, odd travels at least 35 yards,
/// and a throw past 110 sails dead out of the back of the end zone.
fn end_bomb(game: &mut Game) {
    let total = game.roll.iter().map(|&die| die as Yards).sum::<Yards>();
    if total % 2 == 0 {
        game.result.push(Event::IncompletePass);
    } else {
        let distance = (5 * total).max(35);
        let offense = game.offense();
        if game.ballpos + distance >= 110 {
            game.result.push(Event::OutOfBoundsPass);
        } else {
            game.ballpos += distance;
            game.result.push(Event::Gain {
                play: Play::Bomb,
                player: offense,
                yards: distance,
            });
        }
    }
    game.end_play();
}
