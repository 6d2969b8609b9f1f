use super::handler::Handler;
use crate::game::Kind;
use crate::game::State;
use std::collections::HashMap;

/// The full rulebook, keyed by (state, action kind). Built once at
/// startup; a duplicate key is a bug in the catalogue and fails fast.
/// A missing key at lookup time is the caller's to classify; for the
/// pipeline it is a server fault, since the permitted sets only ever
/// contain wired actions.
pub struct Dispatch {
    handlers: Vec<Box<dyn Handler>>,
    table: HashMap<(State, Kind), usize>,
}

impl Default for Dispatch {
    fn default() -> Self {
        Self::new(catalogue())
    }
}

impl Dispatch {
    pub fn new(handlers: Vec<Box<dyn Handler>>) -> Self {
        let mut table = HashMap::new();
        for (index, handler) in handlers.iter().enumerate() {
            for &state in handler.states() {
                for &kind in handler.kinds() {
                    let clash = table.insert((state, kind), index);
                    assert!(
                        clash.is_none(),
                        "duplicate handler for ({:?}, {:?})",
                        state,
                        kind
                    );
                }
            }
        }
        Self { handlers, table }
    }

    pub fn lookup(&self, state: State, kind: Kind) -> Option<&dyn Handler> {
        self.table
            .get(&(state, kind))
            .map(|&index| self.handlers[index].as_ref())
    }
}

fn catalogue() -> Vec<Box<dyn Handler>> {
    use super::defense::*;
    use super::kickoff::*;
    use super::passes::*;
    use super::pat::*;
    use super::plays::*;
    use super::returns::*;
    vec![
        Box::new(CoinTossHandler),
        Box::new(KickoffElectionHandler),
        Box::new(KickoffChoiceHandler),
        Box::new(KickoffHandler),
        Box::new(OnsideKickHandler),
        Box::new(KickReturnHandler),
        Box::new(KickReturn6Handler),
        Box::new(KickReturn1Handler),
        Box::new(TouchbackChoiceHandler),
        Box::new(FumbleHandler),
        Box::new(PlayCallHandler),
        Box::new(ShortRunHandler),
        Box::new(LongRunHandler),
        Box::new(LongRunRollHandler),
        Box::new(ShortPassHandler),
        Box::new(LongPassHandler),
        Box::new(LongPassRollHandler),
        Box::new(BombHandler),
        Box::new(BombRollHandler),
        Box::new(BombChoiceHandler),
        Box::new(SackHandler),
        Box::new(SackChoiceHandler),
        Box::new(PickRollHandler),
        Box::new(DistanceRollHandler),
        Box::new(PickReturnHandler),
        Box::new(PickReturn6Handler),
        Box::new(PickTouchbackChoiceHandler),
        Box::new(PatChoiceHandler),
        Box::new(ExtraPointKickHandler),
        Box::new(TwoPointConversionHandler),
    ]
}

/// Test shim: route an action through the rulebook exactly as the
/// pipeline would, with scripted dice.
#[cfg(test)]
pub fn apply(
    game: &mut crate::game::Game,
    player: crate::game::Player,
    action: crate::game::Action,
    rolls: Vec<u8>,
) -> Result<(), super::handler::Illegal> {
    let mut dice = crate::dice::Script::from(rolls);
    let dispatch = Dispatch::default();
    let handler = dispatch
        .lookup(game.state, action.kind())
        .expect("handler wired for state and action");
    handler.handle(game, player, &action, &mut dice)
}
