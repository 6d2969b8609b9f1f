use crate::dice::Dice;
use crate::game::*;

/// A handler-refused action: the submitted payload cannot apply in the
/// current state (bad die count, play/state mismatch). Always a client
/// error, never a fault.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct Illegal(pub String);

/// One cell of the rulebook. A handler advertises the states it serves
/// and the action kinds it accepts; the dispatch table guarantees
/// `handle` only ever sees that combination, so handlers match on their
/// own payload unconditionally.
pub trait Handler: Send + Sync {
    fn states(&self) -> &'static [State];
    fn kinds(&self) -> &'static [Kind];
    fn handle(
        &self,
        game: &mut Game,
        player: Player,
        action: &Action,
        dice: &mut dyn Dice,
    ) -> Result<(), Illegal>;
}

/// Batch both players' throws, then settle. Records the submitter's
/// choice; if the opponent has not thrown yet, hands them the turn and
/// returns. Once both throws are in, logs them, clears the slots, and
/// invokes the continuation with the winner (None on a tie).
pub fn resolve_rsp(
    game: &mut Game,
    player: Player,
    choice: RspChoice,
    then: impl FnOnce(&mut Game, Option<Player>),
) {
    game.rsp[player] = Some(choice);
    let opponent = player.opponent();
    match game.rsp[opponent] {
        None => {
            game.actions[opponent] = vec![Kind::Rsp];
        }
        Some(_) => {
            let home = game.rsp.home.expect("both throws are in");
            let away = game.rsp.away.expect("both throws are in");
            game.result.push(Event::Rsp { home, away });
            let winner = rsp_winner(home, away);
            log::info!("rsp winner: {:?}", winner);
            game.rsp = Sides::same(None);
            then(game, winner);
        }
    }
}

fn rsp_winner(home: RspChoice, away: RspChoice) -> Option<Player> {
    if home == away {
        None
    } else if home.beats() == away {
        Some(Player::Home)
    } else {
        Some(Player::Away)
    }
}

/// Validate the requested die count, roll, log the outcome, and hand
/// the dice to the continuation. The count vocabulary is per-handler;
/// anything else is refused before a die moves.
pub fn resolve_roll(
    game: &mut Game,
    player: Player,
    count: usize,
    allowed: &[usize],
    dice: &mut dyn Dice,
    then: impl FnOnce(&mut Game, &[u8]) -> Result<(), Illegal>,
) -> Result<(), Illegal> {
    if !allowed.contains(&count) {
        return Err(Illegal(format!(
            "Must roll {:?} dice in state {:?}",
            allowed, game.state
        )));
    }
    let roll = dice.toss(count);
    game.result.push(Event::Roll {
        player,
        roll: roll.clone(),
    });
    then(game, &roll)
}
