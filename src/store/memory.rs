use super::Condition;
use super::Store;
use super::StoreError;
use crate::game::Game;
use std::collections::HashMap;
use tokio::sync::RwLock;

/// In-process store with real conditional-write semantics. Backs tests
/// and single-node serving; a hosted table satisfying the Store
/// contract drops in behind the same trait.
#[derive(Default)]
pub struct Memory {
    games: RwLock<HashMap<String, Game>>,
}

#[async_trait::async_trait]
impl Store for Memory {
    async fn get(&self, game_id: &str) -> Option<Game> {
        self.games.read().await.get(game_id).cloned()
    }

    async fn put(&self, game: Game, condition: Condition) -> Result<(), StoreError> {
        let mut games = self.games.write().await;
        let stored = games.get(&game.game_id);
        let holds = match condition {
            Condition::None => true,
            Condition::NotExists => stored.is_none(),
            Condition::VersionIs(version) => stored.map(|game| game.version) == Some(version),
        };
        match holds {
            true => {
                games.insert(game.game_id.clone(), game);
                Ok(())
            }
            false => Err(StoreError::Conflict),
        }
    }

    async fn scan(&self) -> Vec<Game> {
        self.games.read().await.values().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn put_and_get_round_trip() {
        let store = Memory::default();
        let game = Game::new("g1");
        store.put(game.clone(), Condition::None).await.unwrap();
        assert_eq!(store.get("g1").await, Some(game));
        assert_eq!(store.get("missing").await, None);
    }

    #[tokio::test]
    async fn not_exists_guards_creation() {
        let store = Memory::default();
        let game = Game::new("g1");
        store.put(game.clone(), Condition::NotExists).await.unwrap();
        let refused = store.put(game, Condition::NotExists).await;
        assert!(matches!(refused, Err(StoreError::Conflict)));
    }

    #[tokio::test]
    async fn version_predicate_serializes_writers() {
        let store = Memory::default();
        let mut game = Game::new("g1");
        store.put(game.clone(), Condition::None).await.unwrap();

        // a writer that read version 0 wins once, then loses
        game.version = 1;
        store
            .put(game.clone(), Condition::VersionIs(0))
            .await
            .unwrap();
        game.version = 2;
        let stale = store.put(game, Condition::VersionIs(0)).await;
        assert!(matches!(stale, Err(StoreError::Conflict)));
        assert_eq!(store.get("g1").await.unwrap().version, 1);
    }

    #[tokio::test]
    async fn version_predicate_fails_on_a_missing_record() {
        let store = Memory::default();
        let refused = store.put(Game::new("g1"), Condition::VersionIs(0)).await;
        assert!(matches!(refused, Err(StoreError::Conflict)));
    }
}
