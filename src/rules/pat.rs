use super::handler::resolve_roll;
use super::handler::resolve_rsp;
use super::handler::Handler;
use super::handler::Illegal;
use crate::dice::Dice;
use crate::game::*;

/// The try is spotted at the 95: kick for one, or throw for two.
pub struct PatChoiceHandler;

impl Handler for PatChoiceHandler {
    fn states(&self) -> &'static [State] {
        &[State::PatChoice]
    }
    fn kinds(&self) -> &'static [Kind] {
        &[Kind::PatChoice]
    }
    fn handle(
        &self,
        game: &mut Game,
        player: Player,
        action: &Action,
        _: &mut dyn Dice,
    ) -> Result<(), Illegal> {
        let Action::PatChoice { choice } = action else {
            unreachable!("dispatch guarantees a PAT payload")
        };
        game.ballpos = 95;
        match choice {
            PatChoice::OnePoint => {
                game.state = State::ExtraPoint;
                game.actions[player] = vec![Kind::Roll];
            }
            PatChoice::TwoPoint => {
                game.state = State::ExtraPoint2;
                game.actions = Sides::same(vec![Kind::Rsp]);
            }
        }
        Ok(())
    }
}

/// Two dice through the uprights; a sum of 4 makes it.
pub struct ExtraPointKickHandler;

impl Handler for ExtraPointKickHandler {
    fn states(&self) -> &'static [State] {
        &[State::ExtraPoint]
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
            let total = roll.iter().map(|&die| die as u32).sum::<u32>();
            if total >= 4 {
                let offense = game.offense();
                game.score[offense] += 1;
                game.result.push(Event::Score {
                    kind: ScoreKind::Pat1,
                });
            }
            game.end_pat();
            Ok(())
        })
    }
}

/// One more throw for two points; only an outright offensive win scores.
pub struct TwoPointConversionHandler;

impl Handler for TwoPointConversionHandler {
    fn states(&self) -> &'static [State] {
        &[State::ExtraPoint2]
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
            if winner == Some(offense) {
                game.score[offense] += 2;
                game.result.push(Event::Score {
                    kind: ScoreKind::Pat2,
                });
            }
            game.end_pat();
        });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::super::dispatch::apply;
    use crate::game::*;
    use crate::GAME_LENGTH;

    fn after_touchdown() -> Game {
        let mut game = Game::fixture();
        game.state = State::PatChoice;
        game.possession = Some(Player::Home);
        game.ballpos = 100;
        game.score.home = 6;
        game
    }

    #[test]
    fn one_point_try_spots_the_95() {
        let mut game = after_touchdown();
        apply(
            &mut game,
            Player::Home,
            Action::PatChoice {
                choice: PatChoice::OnePoint,
            },
            vec![],
        )
        .unwrap();
        assert_eq!(game.state, State::ExtraPoint);
        assert_eq!(game.ballpos, 95);
        assert_eq!(game.actions[Player::Home], vec![Kind::Roll]);
    }

    #[test]
    fn two_point_try_lines_both_teams_up() {
        let mut game = after_touchdown();
        apply(
            &mut game,
            Player::Home,
            Action::PatChoice {
                choice: PatChoice::TwoPoint,
            },
            vec![],
        )
        .unwrap();
        assert_eq!(game.state, State::ExtraPoint2);
        assert_eq!(game.ballpos, 95);
        assert_eq!(game.actions, Sides::same(vec![Kind::Rsp]));
    }

    #[test]
    fn extra_point_splits_the_uprights() {
        let mut game = after_touchdown();
        game.state = State::ExtraPoint;
        game.ballpos = 95;
        apply(
            &mut game,
            Player::Home,
            Action::Roll { count: 2 },
            vec![2, 2],
        )
        .unwrap();
        assert_eq!(game.score[Player::Home], 7);
        assert_eq!(game.state, State::KickoffChoice);
        assert_eq!(game.ballpos, 35);
        assert_eq!(game.possession, Some(Player::Home));
        assert!(game.result.contains(&Event::Score {
            kind: ScoreKind::Pat1
        }));
    }

    #[test]
    fn extra_point_hooks_wide() {
        let mut game = after_touchdown();
        game.state = State::ExtraPoint;
        game.ballpos = 95;
        apply(
            &mut game,
            Player::Home,
            Action::Roll { count: 2 },
            vec![1, 2],
        )
        .unwrap();
        assert_eq!(game.score[Player::Home], 6);
        assert_eq!(game.state, State::KickoffChoice);
    }

    #[test]
    fn two_point_conversion_good() {
        let mut game = after_touchdown();
        game.state = State::ExtraPoint2;
        game.ballpos = 95;
        game.rsp.away = Some(RspChoice::Scissors);
        apply(
            &mut game,
            Player::Home,
            Action::Rsp {
                choice: RspChoice::Rock,
            },
            vec![],
        )
        .unwrap();
        assert_eq!(game.score[Player::Home], 8);
        assert_eq!(game.state, State::KickoffChoice);
        assert!(game.result.contains(&Event::Score {
            kind: ScoreKind::Pat2
        }));
    }

    #[test]
    fn two_point_conversion_stuffed() {
        let mut game = after_touchdown();
        game.state = State::ExtraPoint2;
        game.ballpos = 95;
        game.rsp.away = Some(RspChoice::Paper);
        apply(
            &mut game,
            Player::Home,
            Action::Rsp {
                choice: RspChoice::Rock,
            },
            vec![],
        )
        .unwrap();
        assert_eq!(game.score[Player::Home], 6);
        assert_eq!(game.state, State::KickoffChoice);
    }

    #[test]
    fn pat_after_the_final_gun_ends_the_game() {
        let mut game = after_touchdown();
        game.state = State::ExtraPoint;
        game.ballpos = 95;
        game.play_count = GAME_LENGTH + 1;
        apply(
            &mut game,
            Player::Home,
            Action::Roll { count: 2 },
            vec![3, 3],
        )
        .unwrap();
        assert_eq!(game.score[Player::Home], 7);
        assert_eq!(game.state, State::GameOver);
        assert_eq!(game.actions, Sides::same(vec![]));
    }
}
