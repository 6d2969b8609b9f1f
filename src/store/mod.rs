pub mod memory;
pub use memory::*;

use crate::game::Game;

/// Write predicate for the conditional put. The backing table only has
/// to honor these three shapes; everything transactional in the crate
/// is built on VersionIs.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Condition {
    None,
    NotExists,
    VersionIs(crate::Version),
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// the put predicate did not hold against the stored record
    #[error("conditional check failed")]
    Conflict,
}

/// The persistence seam. One record per game, keyed by game id, with
/// conditional-put semantics; the pipeline is the only writer and every
/// accepted action lands as a single conditional put.
#[async_trait::async_trait]
pub trait Store: Send + Sync {
    async fn get(&self, game_id: &str) -> Option<Game>;
    async fn put(&self, game: Game, condition: Condition) -> Result<(), StoreError>;
    async fn scan(&self) -> Vec<Game>;
}
