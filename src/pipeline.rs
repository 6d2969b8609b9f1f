use crate::config::Config;
use crate::dice::Dice;
use crate::dice::Tumble;
use crate::dto::ActionRequest;
use crate::dto::ListGamesQuery;
use crate::dto::Listing;
use crate::game::Game;
use crate::game::Kind;
use crate::game::Sides;
use crate::game::State;
use crate::rules::Dispatch;
use crate::rules::Illegal;
use crate::store::Condition;
use crate::store::Store;
use crate::store::StoreError;
use std::sync::Arc;
use std::sync::Mutex;

/// Why a request was refused. Everything here except Contention and
/// Unhandled is the client's fault and maps to a 400; those two are
/// the server's and map to a 500.
#[derive(Debug, thiserror::Error)]
pub enum Reject {
    #[error("Game not found")]
    NotFound,
    #[error("Player not in game")]
    NotInGame,
    #[error("Action not allowed")]
    NotAllowed,
    #[error("Illegal action: {0}")]
    Illegal(#[from] Illegal),
    #[error("Invalid gameId: game with id already exists")]
    Exists,
    #[error("Cannot join game: game is full")]
    Full,
    #[error("Failed to update game")]
    Contention,
    #[error("no handler for state {0:?} and action {1:?}")]
    Unhandled(State, Kind),
}

impl Reject {
    pub fn is_fault(&self) -> bool {
        matches!(self, Self::Contention | Self::Unhandled(..))
    }
}

/// Everything that touches the store goes through here. Each accepted
/// action is validated against the permitted sets, run through the
/// rulebook purely in memory, and landed with a single conditional put
/// keyed on the version that was read; a lost race rereads and replays
/// up to the configured bound.
pub struct Pipeline {
    store: Arc<dyn Store>,
    dispatch: Dispatch,
    dice: Mutex<Box<dyn Dice>>,
    config: Config,
}

impl Pipeline {
    pub fn new(store: Arc<dyn Store>, config: Config) -> Self {
        Self::with_dice(store, config, Box::new(Tumble))
    }

    pub fn with_dice(store: Arc<dyn Store>, config: Config, dice: Box<dyn Dice>) -> Self {
        Self {
            store,
            dispatch: Dispatch::default(),
            dice: Mutex::new(dice),
            config,
        }
    }

    /// Validate, apply, and persist one submitted action, returning the
    /// updated snapshot.
    pub async fn act(&self, request: &ActionRequest) -> Result<Game, Reject> {
        for _ in 0..self.config.max_update_attempts {
            let mut game = self
                .store
                .get(&request.game_id)
                .await
                .ok_or(Reject::NotFound)?;
            let player = game.seat_of(&request.user).ok_or(Reject::NotInGame)?;
            let kind = request.action.kind();
            if !game.actions[player].contains(&kind) {
                return Err(Reject::NotAllowed);
            }

            let version = game.version;
            game.result.clear();
            game.actions = Sides::same(vec![Kind::Poll]);

            let handler = self
                .dispatch
                .lookup(game.state, kind)
                .ok_or(Reject::Unhandled(game.state, kind))?;
            {
                let mut dice = self.dice.lock().expect("dice available");
                handler.handle(&mut game, player, &request.action, dice.as_mut())?;
            }

            game.version = version + 1;
            match self.store.put(game.clone(), Condition::VersionIs(version)).await {
                Ok(()) => {
                    log::info!("{} applied {:?} to {}", player, kind, game);
                    return Ok(game);
                }
                Err(StoreError::Conflict) => {
                    log::warn!("lost the race on game {}, retrying", request.game_id);
                    continue;
                }
            }
        }
        Err(Reject::Contention)
    }

    /// Create a fresh game with the caller in the home seat.
    pub async fn create(&self, game_id: &str, user: &str) -> Result<Game, Reject> {
        let mut game = Game::new(game_id);
        game.players.home = Some(user.to_string());
        let condition = match self.config.allow_overwrites {
            true => Condition::None,
            false => Condition::NotExists,
        };
        match self.store.put(game.clone(), condition).await {
            Ok(()) => {
                log::info!("created game {}", game_id);
                Ok(game)
            }
            Err(StoreError::Conflict) => Err(Reject::Exists),
        }
    }

    /// Fill the away seat, if it is open and the joiner is not already
    /// sitting at home.
    pub async fn join(&self, game_id: &str, user: &str) -> Result<(), Reject> {
        for _ in 0..self.config.max_update_attempts {
            let mut game = self.store.get(game_id).await.ok_or(Reject::NotFound)?;
            if game.players.away.is_some() || game.players.home.as_deref() == Some(user) {
                return Err(Reject::Full);
            }
            let version = game.version;
            game.players.away = Some(user.to_string());
            game.version = version + 1;
            match self.store.put(game, Condition::VersionIs(version)).await {
                Ok(()) => {
                    log::info!("{} joined game {}", user, game_id);
                    return Ok(());
                }
                Err(StoreError::Conflict) => continue,
            }
        }
        Err(Reject::Contention)
    }

    /// Long-poll: reload until the stored version passes the caller's,
    /// or the budget runs out; either way return the current snapshot.
    pub async fn poll(&self, game_id: &str, version: crate::Version) -> Result<Game, Reject> {
        let deadline = tokio::time::Instant::now() + self.config.max_poll_time;
        let mut game = self.store.get(game_id).await.ok_or(Reject::NotFound)?;
        while tokio::time::Instant::now() < deadline && game.version <= version {
            tokio::time::sleep(self.config.poll_interval).await;
            game = self.store.get(game_id).await.ok_or(Reject::NotFound)?;
        }
        Ok(game)
    }

    /// Open-seat and by-user listing.
    pub async fn list(&self, query: &ListGamesQuery) -> Vec<Listing> {
        self.store
            .scan()
            .await
            .iter()
            .filter(|game| !query.available || game.players.away.is_none())
            .filter(|game| match &query.user {
                Some(user) => game.seat_of(user).is_some(),
                None => true,
            })
            .map(Listing::from)
            .collect()
    }
}
