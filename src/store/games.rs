use tracing::{debug, info};

use crate::models::{Game, GameUpdate, NewGame};

/// In-memory game catalog, kept in insertion order
pub struct GameStore {
    games: Vec<Game>,
    /// Next id to hand out; never decreases
    next_id: u64,
}

impl GameStore {
    /// Create an empty catalog
    pub fn new() -> Self {
        Self {
            games: Vec::new(),
            next_id: 1,
        }
    }

    /// Create a catalog from existing games. Numeric ids advance the counter.
    pub fn with_games(games: Vec<Game>) -> Self {
        let next_id = games
            .iter()
            .filter_map(|g| g.id.parse::<u64>().ok())
            .max()
            .map_or(1, |max| max + 1);

        info!("Game catalog loaded with {} games", games.len());

        Self { games, next_id }
    }

    pub fn list(&self) -> &[Game] {
        &self.games
    }

    pub fn get(&self, id: &str) -> Option<&Game> {
        self.games.iter().find(|g| g.id == id)
    }

    /// Append a game under a freshly assigned id
    pub fn insert(&mut self, new_game: NewGame) -> Game {
        let id = self.next_id.to_string();
        self.next_id += 1;

        let game = new_game.into_game(id);
        info!(
            "Added game {}: {} vs {} ({} availability)",
            game.id,
            game.home_team,
            game.away_team,
            game.availability.as_str()
        );
        self.games.push(game.clone());
        game
    }

    /// Merge an update into an existing game
    pub fn update(&mut self, id: &str, update: GameUpdate) -> Option<Game> {
        let game = self.games.iter_mut().find(|g| g.id == id)?;
        update.apply(game);
        debug!("Updated game {}", id);
        Some(game.clone())
    }

    /// Remove every game with the given id, returning how many were removed
    pub fn remove(&mut self, id: &str) -> usize {
        let before = self.games.len();
        self.games.retain(|g| g.id != id);
        let removed = before - self.games.len();

        if removed > 0 {
            info!("Deleted game {}", id);
        } else {
            debug!("Delete requested for unknown game {}", id);
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }
}

impl Default for GameStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Availability;
    use crate::store::seed::seed_games;

    fn new_game(away: &str) -> NewGame {
        NewGame {
            home_team: "FC Bayern Munich".to_string(),
            away_team: away.to_string(),
            date: "2026-03-05".to_string(),
            time: "20:00".to_string(),
            venue: "SAP Garden".to_string(),
            city: "Munich".to_string(),
            estimated_price: "From CHF 430".to_string(),
            availability: Availability::Medium,
        }
    }

    #[test]
    fn test_insert_then_get() {
        let mut store = GameStore::new();
        assert!(store.is_empty());
        let created = store.insert(new_game("Partizan"));
        assert_eq!(created.id, "1");

        let fetched = store.get("1").unwrap();
        assert_eq!(fetched, &created);
        assert_eq!(fetched.away_team, "Partizan");
    }

    #[test]
    fn test_seeded_store_continues_ids() {
        let mut store = GameStore::with_games(seed_games());
        assert_eq!(store.len(), 6);
        assert_eq!(store.insert(new_game("Partizan")).id, "7");
    }

    #[test]
    fn test_delete_does_not_reuse_ids() {
        let mut store = GameStore::with_games(seed_games());
        assert_eq!(store.remove("2"), 1);
        assert!(store.get("2").is_none());

        let created = store.insert(new_game("Zalgiris"));
        assert_eq!(created.id, "7");

        let ids: Vec<&str> = store.list().iter().map(|g| g.id.as_str()).collect();
        assert_eq!(ids, vec!["1", "3", "4", "5", "6", "7"]);
    }

    #[test]
    fn test_remove_unknown_is_noop() {
        let mut store = GameStore::with_games(seed_games());
        assert_eq!(store.remove("99"), 0);
        assert_eq!(store.len(), 6);
    }

    #[test]
    fn test_update_unknown_returns_none() {
        let mut store = GameStore::new();
        assert!(store.update("1", GameUpdate::default()).is_none());
    }

    #[test]
    fn test_update_merges_fields() {
        let mut store = GameStore::with_games(seed_games());
        let update = GameUpdate {
            estimated_price: Some("From CHF 500".to_string()),
            ..Default::default()
        };
        let updated = store.update("3", update).unwrap();

        assert_eq!(updated.estimated_price, "From CHF 500");
        assert_eq!(updated.away_team, "Fenerbahce");
        assert_eq!(store.get("3").unwrap().estimated_price, "From CHF 500");
    }
}
