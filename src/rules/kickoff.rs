use super::handler::resolve_roll;
use super::handler::resolve_rsp;
use super::handler::Handler;
use super::handler::Illegal;
use crate::dice::Dice;
use crate::game::*;
use crate::Yards;

/// Opening RSP. A tie replays; a win hands the winner the kickoff
/// election.
pub struct CoinTossHandler;

impl Handler for CoinTossHandler {
    fn states(&self) -> &'static [State] {
        &[State::CoinToss]
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
        resolve_rsp(game, player, *choice, |game, winner| match winner {
            None => {
                game.actions = Sides::same(vec![Kind::Rsp]);
            }
            Some(winner) => {
                game.state = State::KickoffElection;
                game.actions[winner] = vec![Kind::KickoffElection];
                game.actions[winner.opponent()] = vec![Kind::Poll];
            }
        });
        Ok(())
    }
}

/// The toss winner elects to kick or to recieve; either way the kicking
/// team takes possession for the kickoff itself.
pub struct KickoffElectionHandler;

impl Handler for KickoffElectionHandler {
    fn states(&self) -> &'static [State] {
        &[State::KickoffElection]
    }
    fn kinds(&self) -> &'static [Kind] {
        &[Kind::KickoffElection]
    }
    fn handle(
        &self,
        game: &mut Game,
        player: Player,
        action: &Action,
        _: &mut dyn Dice,
    ) -> Result<(), Illegal> {
        let Action::KickoffElection { choice } = action else {
            unreachable!("dispatch guarantees an election payload")
        };
        let kicker = match choice {
            KickoffElectionChoice::Kick => player,
            KickoffElectionChoice::Recieve => player.opponent(),
        };
        game.first_kick = Some(kicker);
        game.possession = Some(kicker);
        game.result.push(Event::KickoffElection { choice: *choice });
        game.set_kickoff_state(35);
        Ok(())
    }
}

/// Regular or onside, then hand the kicker the dice.
pub struct KickoffChoiceHandler;

impl Handler for KickoffChoiceHandler {
    fn states(&self) -> &'static [State] {
        &[State::KickoffChoice]
    }
    fn kinds(&self) -> &'static [Kind] {
        &[Kind::KickoffChoice]
    }
    fn handle(
        &self,
        game: &mut Game,
        player: Player,
        action: &Action,
        _: &mut dyn Dice,
    ) -> Result<(), Illegal> {
        let Action::KickoffChoice { choice } = action else {
            unreachable!("dispatch guarantees a kickoff-choice payload")
        };
        game.state = match choice {
            KickoffChoice::Regular => State::Kickoff,
            KickoffChoice::Onside => State::OnsideKick,
        };
        game.actions[player] = vec![Kind::Roll];
        Ok(())
    }
}

/// Three dice off the tee. A weak kick (sum <= 8) is out of bounds and
/// spots the ball at the receiving 40; a monster kick through the end
/// zone comes out to the 20; a kick to the end zone offers the
/// touchback choice; anything else is a live return.
pub struct KickoffHandler;

impl Handler for KickoffHandler {
    fn states(&self) -> &'static [State] {
        &[State::Kickoff]
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
        resolve_roll(game, player, *count, &[3], dice, |game, roll| {
            // a punt can also land in TOUCHBACK_CHOICE; a cleared play
            // marks that there is no play to close when the return ends
            game.play = None;
            let total = roll.iter().map(|&die| die as Yards).sum::<Yards>();
            game.ballpos += 5 * total;
            game.switch_possession();
            if total <= 8 {
                game.result.push(Event::OutOfBoundsKick);
                game.ballpos = 40;
                game.set_first_down();
                game.set_call_play_state();
            } else if game.ballpos <= -10 {
                game.ballpos = 20;
                game.set_first_down();
                game.set_call_play_state();
            } else if game.ballpos <= 0 {
                let offense = game.offense();
                game.state = State::TouchbackChoice;
                game.actions[offense] = vec![Kind::TouchbackChoice];
            } else {
                let offense = game.offense();
                game.state = State::KickReturn;
                game.actions[offense] = vec![Kind::Roll];
            }
            Ok(())
        })
    }
}

/// Two dice, ten yards, and a sum over 5 keeps the ball with the
/// kicking team.
pub struct OnsideKickHandler;

impl Handler for OnsideKickHandler {
    fn states(&self) -> &'static [State] {
        &[State::OnsideKick]
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
        resolve_roll(game, player, *count, &[2], dice, |game, roll| {
            game.ballpos += 10;
            let total = roll.iter().map(|&die| die as u32).sum::<u32>();
            if total > 5 {
                game.switch_possession();
            }
            game.set_call_play_state();
            game.set_first_down();
            Ok(())
        })
    }
}

#[cfg(test)]
mod tests {
    use super::super::dispatch::apply;
    use crate::game::*;

    #[test]
    fn coin_toss_win_opens_the_election() {
        let mut game = Game::fixture();
        game.rsp.away = Some(RspChoice::Rock);
        apply(
            &mut game,
            Player::Home,
            Action::Rsp {
                choice: RspChoice::Paper,
            },
            vec![],
        )
        .unwrap();
        assert_eq!(game.state, State::KickoffElection);
        assert_eq!(game.rsp, Sides::same(None));
        assert_eq!(game.actions[Player::Home], vec![Kind::KickoffElection]);
        assert_eq!(game.actions[Player::Away], vec![Kind::Poll]);
        assert!(game.result.contains(&Event::Rsp {
            home: RspChoice::Paper,
            away: RspChoice::Rock,
        }));
    }

    #[test]
    fn coin_toss_tie_replays() {
        let mut game = Game::fixture();
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
        assert_eq!(game.state, State::CoinToss);
        assert_eq!(game.actions, Sides::same(vec![Kind::Rsp]));
    }

    #[test]
    fn election_to_recieve_makes_the_opponent_kick() {
        let mut game = Game::fixture();
        game.state = State::KickoffElection;
        apply(
            &mut game,
            Player::Home,
            Action::KickoffElection {
                choice: KickoffElectionChoice::Recieve,
            },
            vec![],
        )
        .unwrap();
        assert_eq!(game.possession, Some(Player::Away));
        assert_eq!(game.first_kick, Some(Player::Away));
        assert_eq!(game.state, State::KickoffChoice);
        assert_eq!(game.ballpos, 35);
        assert_eq!(game.actions[Player::Away], vec![Kind::KickoffChoice]);
        assert!(game.result.contains(&Event::KickoffElection {
            choice: KickoffElectionChoice::Recieve,
        }));
    }

    #[test]
    fn kickoff_choice_routes_to_the_tee() {
        let mut game = Game::fixture();
        game.state = State::KickoffChoice;
        game.possession = Some(Player::Home);
        apply(
            &mut game,
            Player::Home,
            Action::KickoffChoice {
                choice: KickoffChoice::Regular,
            },
            vec![],
        )
        .unwrap();
        assert_eq!(game.state, State::Kickoff);
        assert_eq!(game.actions[Player::Home], vec![Kind::Roll]);
    }

    #[test]
    fn kickoff_to_return() {
        let mut game = Game::fixture();
        game.state = State::Kickoff;
        game.possession = Some(Player::Home);
        apply(
            &mut game,
            Player::Home,
            Action::Roll { count: 3 },
            vec![3, 3, 3],
        )
        .unwrap();
        assert_eq!(game.state, State::KickReturn);
        assert_eq!(game.possession, Some(Player::Away));
        assert_eq!(game.play, None);
        assert_eq!(game.actions[Player::Away], vec![Kind::Roll]);
    }

    #[test]
    fn kickoff_to_touchback_choice() {
        let mut game = Game::fixture();
        game.state = State::Kickoff;
        game.possession = Some(Player::Home);
        apply(
            &mut game,
            Player::Home,
            Action::Roll { count: 3 },
            vec![5, 5, 3],
        )
        .unwrap();
        assert_eq!(game.state, State::TouchbackChoice);
        assert_eq!(game.possession, Some(Player::Away));
        assert_eq!(game.ballpos, 100 - (35 + 65));
        assert_eq!(game.actions[Player::Away], vec![Kind::TouchbackChoice]);
    }

    #[test]
    fn kickoff_out_of_bounds_spots_the_40() {
        let mut game = Game::fixture();
        game.state = State::Kickoff;
        game.possession = Some(Player::Home);
        apply(
            &mut game,
            Player::Home,
            Action::Roll { count: 3 },
            vec![2, 2, 4],
        )
        .unwrap();
        assert_eq!(game.state, State::PlayCall);
        assert_eq!(game.possession, Some(Player::Away));
        assert_eq!(game.ballpos, 40);
        assert_eq!(game.first_down, Some(50));
        assert_eq!(
            game.actions[Player::Away],
            vec![Kind::CallPlay, Kind::Penalty]
        );
        assert!(game.result.contains(&Event::OutOfBoundsKick));
    }

    #[test]
    fn kickoff_through_the_end_zone_comes_out_to_the_20() {
        let mut game = Game::fixture();
        game.state = State::Kickoff;
        game.possession = Some(Player::Home);
        apply(
            &mut game,
            Player::Home,
            Action::Roll { count: 3 },
            vec![6, 5, 4],
        )
        .unwrap();
        // 35 + 75 kicked, flipped to -10 for the receiving team
        assert_eq!(game.state, State::PlayCall);
        assert_eq!(game.possession, Some(Player::Away));
        assert_eq!(game.ballpos, 20);
        assert_eq!(game.first_down, Some(30));
    }

    #[test]
    fn kickoff_refuses_the_wrong_die_count() {
        let mut game = Game::fixture();
        game.state = State::Kickoff;
        game.possession = Some(Player::Home);
        let refused = apply(&mut game, Player::Home, Action::Roll { count: 1 }, vec![6]);
        assert!(refused.is_err());
    }

    #[test]
    fn onside_kick_recovered_by_the_kicking_team() {
        let mut game = Game::fixture();
        game.state = State::OnsideKick;
        game.possession = Some(Player::Home);
        apply(
            &mut game,
            Player::Home,
            Action::Roll { count: 2 },
            vec![2, 2],
        )
        .unwrap();
        // sum 4 is not over 5: the kicking team keeps the ball
        assert_eq!(game.possession, Some(Player::Home));
        assert_eq!(game.ballpos, 45);
        assert_eq!(game.state, State::PlayCall);
        assert_eq!(game.first_down, Some(55));
    }

    #[test]
    fn onside_kick_lost_to_the_receiving_team() {
        let mut game = Game::fixture();
        game.state = State::OnsideKick;
        game.possession = Some(Player::Home);
        apply(
            &mut game,
            Player::Home,
            Action::Roll { count: 2 },
            vec![4, 4],
        )
        .unwrap();
        assert_eq!(game.possession, Some(Player::Away));
        assert_eq!(game.ballpos, 55);
        assert_eq!(game.state, State::PlayCall);
        assert_eq!(game.first_down, Some(65));
    }
}
