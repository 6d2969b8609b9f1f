use super::handler::resolve_roll;
use super::handler::resolve_rsp;
use super::handler::Handler;
use super::handler::Illegal;
use crate::dice::Dice;
use crate::game::*;
use crate::Yards;

/// One die back up the field. A 1 offers a risky extra roll, a 6 opens
/// a breakaway, anything else settles the spot.
pub struct KickReturnHandler;

impl Handler for KickReturnHandler {
    fn states(&self) -> &'static [State] {
        &[State::KickReturn]
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
            let offense = game.offense();
            game.ballpos += 5 * die as Yards;
            match die {
                1 => {
                    game.state = State::KickReturn1;
                    game.actions[offense] = vec![Kind::RollAgainChoice];
                }
                6 => {
                    game.state = State::KickReturn6;
                    game.actions[offense] = vec![Kind::Roll];
                }
                _ => {
                    game.set_call_play_state();
                    game.set_first_down();
                }
            }
            Ok(())
        })
    }
}

/// The breakaway die: a second 6 takes it to the house.
pub struct KickReturn6Handler;

impl Handler for KickReturn6Handler {
    fn states(&self) -> &'static [State] {
        &[State::KickReturn6]
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
                game.touchdown();
            } else {
                game.ballpos += 5 * die as Yards;
                game.set_first_down();
                game.set_call_play_state();
            }
            Ok(())
        })
    }
}

/// The gamble after a returned 1: hold the spot, or roll once more
/// where a 1 coughs the ball straight back to the kicking team.
pub struct KickReturn1Handler;

impl Handler for KickReturn1Handler {
    fn states(&self) -> &'static [State] {
        &[State::KickReturn1]
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
            RollAgainChoice::Hold => {
                game.set_call_play_state();
                game.set_first_down();
            }
            RollAgainChoice::Roll => {
                let roll = dice.toss(1);
                game.result.push(Event::Roll {
                    player,
                    roll: roll.clone(),
                });
                if roll[0] == 1 {
                    game.switch_possession();
                    game.result.push(Event::Turnover {
                        kind: TurnoverKind::Fumble,
                    });
                }
                game.set_call_play_state();
                game.set_first_down();
            }
        }
        Ok(())
    }
}

/// Take the spot at the 20, or bring it out live.
pub struct TouchbackChoiceHandler;

impl Handler for TouchbackChoiceHandler {
    fn states(&self) -> &'static [State] {
        &[State::TouchbackChoice]
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
                game.ballpos = 20;
                game.set_first_down();
                game.set_call_play_state();
            }
            TouchbackChoice::Return => {
                // a punt can end in a kick return; no play to close out
                game.play = None;
                game.state = State::KickReturn;
                game.actions[player] = vec![Kind::Roll];
            }
        }
        Ok(())
    }
}

/// Loose ball on the turf, settled by RSP. The defense has to win it
/// outright; a tie stays with the offense.
pub struct FumbleHandler;

impl Handler for FumbleHandler {
    fn states(&self) -> &'static [State] {
        &[State::Fumble]
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
            if winner == Some(game.defense()) {
                game.switch_possession();
                game.result.push(Event::Turnover {
                    kind: TurnoverKind::Fumble,
                });
                if game.ballpos <= 0 {
                    game.ballpos = 20;
                }
                game.set_first_down();
                game.down = 0;
            }
            game.set_call_play_state();
            game.end_play();
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::dispatch::apply;
    use crate::game::*;

    #[test]
    fn kick_return_roll_1_offers_the_gamble() {
        let mut game = Game::fixture();
        game.state = State::KickReturn;
        game.possession = Some(Player::Home);
        game.ballpos = 10;
        apply(&mut game, Player::Home, Action::Roll { count: 1 }, vec![1]).unwrap();
        assert_eq!(game.state, State::KickReturn1);
        assert_eq!(game.ballpos, 15);
        assert_eq!(game.actions[Player::Home], vec![Kind::RollAgainChoice]);
    }

    #[test]
    fn kick_return_roll_6_opens_the_breakaway() {
        let mut game = Game::fixture();
        game.state = State::KickReturn;
        game.possession = Some(Player::Home);
        game.ballpos = 10;
        apply(&mut game, Player::Home, Action::Roll { count: 1 }, vec![6]).unwrap();
        assert_eq!(game.state, State::KickReturn6);
        assert_eq!(game.ballpos, 40);
        assert_eq!(game.actions[Player::Home], vec![Kind::Roll]);
    }

    #[test]
    fn kick_return_normal_settles_the_spot() {
        let mut game = Game::fixture();
        game.state = State::KickReturn;
        game.possession = Some(Player::Home);
        game.ballpos = 10;
        apply(&mut game, Player::Home, Action::Roll { count: 1 }, vec![2]).unwrap();
        assert_eq!(game.state, State::PlayCall);
        assert_eq!(game.ballpos, 20);
        assert_eq!(game.first_down, Some(30));
        assert_eq!(
            game.actions[Player::Home],
            vec![Kind::CallPlay, Kind::Penalty]
        );
    }

    #[test]
    fn second_six_goes_the_distance() {
        let mut game = Game::fixture();
        game.state = State::KickReturn6;
        game.possession = Some(Player::Home);
        game.ballpos = 40;
        apply(&mut game, Player::Home, Action::Roll { count: 1 }, vec![6]).unwrap();
        assert_eq!(game.state, State::PatChoice);
        assert_eq!(game.score[Player::Home], 6);
        assert!(game.result.contains(&Event::Score {
            kind: ScoreKind::Touchdown
        }));
    }

    #[test]
    fn breakaway_fizzles_into_a_spot() {
        let mut game = Game::fixture();
        game.state = State::KickReturn6;
        game.possession = Some(Player::Home);
        game.ballpos = 40;
        apply(&mut game, Player::Home, Action::Roll { count: 1 }, vec![3]).unwrap();
        assert_eq!(game.state, State::PlayCall);
        assert_eq!(game.ballpos, 55);
        assert_eq!(game.first_down, Some(65));
    }

    #[test]
    fn holding_keeps_the_spot() {
        let mut game = Game::fixture();
        game.state = State::KickReturn1;
        game.possession = Some(Player::Home);
        game.ballpos = 15;
        apply(
            &mut game,
            Player::Home,
            Action::RollAgainChoice {
                choice: RollAgainChoice::Hold,
            },
            vec![],
        )
        .unwrap();
        assert_eq!(game.state, State::PlayCall);
        assert_eq!(game.ballpos, 15);
        assert_eq!(game.first_down, Some(25));
    }

    #[test]
    fn rolling_a_second_1_coughs_it_up() {
        let mut game = Game::fixture();
        game.state = State::KickReturn1;
        game.possession = Some(Player::Home);
        game.ballpos = 15;
        apply(
            &mut game,
            Player::Home,
            Action::RollAgainChoice {
                choice: RollAgainChoice::Roll,
            },
            vec![1],
        )
        .unwrap();
        assert_eq!(game.possession, Some(Player::Away));
        assert_eq!(game.ballpos, 85);
        assert_eq!(game.state, State::PlayCall);
        assert_eq!(game.first_down, Some(95));
        assert!(game.result.contains(&Event::Turnover {
            kind: TurnoverKind::Fumble
        }));
    }

    #[test]
    fn rolling_clean_returns_to_the_huddle() {
        let mut game = Game::fixture();
        game.state = State::KickReturn1;
        game.possession = Some(Player::Home);
        game.ballpos = 15;
        apply(
            &mut game,
            Player::Home,
            Action::RollAgainChoice {
                choice: RollAgainChoice::Roll,
            },
            vec![4],
        )
        .unwrap();
        assert_eq!(game.possession, Some(Player::Home));
        assert_eq!(game.state, State::PlayCall);
        assert_eq!(game.ballpos, 15);
        assert_eq!(game.first_down, Some(25));
        assert!(game.result.contains(&Event::Roll {
            player: Player::Home,
            roll: vec![4],
        }));
    }

    #[test]
    fn touchback_taken_at_the_20() {
        let mut game = Game::fixture();
        game.state = State::TouchbackChoice;
        game.possession = Some(Player::Home);
        game.ballpos = -3;
        apply(
            &mut game,
            Player::Home,
            Action::TouchbackChoice {
                choice: TouchbackChoice::Touchback,
            },
            vec![],
        )
        .unwrap();
        assert_eq!(game.state, State::PlayCall);
        assert_eq!(game.ballpos, 20);
        assert_eq!(game.first_down, Some(30));
    }

    #[test]
    fn touchback_declined_for_a_live_return() {
        let mut game = Game::fixture();
        game.state = State::TouchbackChoice;
        game.possession = Some(Player::Home);
        game.ballpos = -3;
        apply(
            &mut game,
            Player::Home,
            Action::TouchbackChoice {
                choice: TouchbackChoice::Return,
            },
            vec![],
        )
        .unwrap();
        assert_eq!(game.state, State::KickReturn);
        assert_eq!(game.play, None);
        assert_eq!(game.actions[Player::Home], vec![Kind::Roll]);
    }

    #[test]
    fn fumble_recovered_by_the_defense() {
        let mut game = Game::fixture();
        game.state = State::Fumble;
        game.possession = Some(Player::Home);
        game.ballpos = 40;
        game.first_down = Some(50);
        game.rsp.away = Some(RspChoice::Scissors);
        apply(
            &mut game,
            Player::Home,
            Action::Rsp {
                choice: RspChoice::Paper,
            },
            vec![],
        )
        .unwrap();
        assert_eq!(game.possession, Some(Player::Away));
        assert_eq!(game.ballpos, 60);
        assert_eq!(game.down, 1);
        assert_eq!(game.first_down, Some(70));
        assert_eq!(game.state, State::PlayCall);
        assert!(game.result.contains(&Event::Turnover {
            kind: TurnoverKind::Fumble
        }));
    }

    #[test]
    fn fumble_tie_stays_with_the_offense() {
        let mut game = Game::fixture();
        game.state = State::Fumble;
        game.possession = Some(Player::Home);
        game.ballpos = 40;
        game.first_down = Some(50);
        game.down = 2;
        game.rsp.away = Some(RspChoice::Rock);
        apply(
            &mut game,
            Player::Home,
            Action::Rsp {
                choice: RspChoice::Rock,
            },
            vec![],
        )
        .unwrap();
        assert_eq!(game.possession, Some(Player::Home));
        assert_eq!(game.ballpos, 40);
        assert_eq!(game.down, 3);
        assert_eq!(game.state, State::PlayCall);
    }

    #[test]
    fn fumble_recovery_in_the_end_zone_comes_out_to_the_20() {
        let mut game = Game::fixture();
        game.state = State::Fumble;
        game.possession = Some(Player::Home);
        game.ballpos = 102;
        game.first_down = Some(100);
        game.rsp.away = Some(RspChoice::Scissors);
        apply(
            &mut game,
            Player::Home,
            Action::Rsp {
                choice: RspChoice::Paper,
            },
            vec![],
        )
        .unwrap();
        // flipped to -2 for the recovering team, then spotted at 20
        assert_eq!(game.possession, Some(Player::Away));
        assert_eq!(game.ballpos, 20);
        assert_eq!(game.down, 1);
        assert_eq!(game.first_down, Some(30));
    }
}
