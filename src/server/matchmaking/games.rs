use std::collections::HashMap;
use uuid::Uuid;

use super::types::{ClientId, Game};

/// Established pairings, keyed by generated game id.
///
/// Records are immutable and are kept for the life of the process: a
/// participant disconnecting does not tear its game down (documented scope
/// boundary, see DESIGN.md).
pub struct GameRegistry {
    games: HashMap<Uuid, Game>,
}

impl GameRegistry {
    pub fn new() -> Self {
        Self {
            games: HashMap::new(),
        }
    }

    /// Record a new pairing and return its generated id.
    pub fn create(&mut self, side_a: ClientId, side_b: ClientId) -> Uuid {
        let game_id = Uuid::new_v4();
        self.games.insert(game_id, Game { side_a, side_b });
        game_id
    }

    /// Whether any pairing references `id`.
    pub fn contains_client(&self, id: &str) -> bool {
        self.games.values().any(|game| game.involves(id))
    }

    pub fn get(&self, game_id: &Uuid) -> Option<&Game> {
        self.games.get(game_id)
    }

    pub fn len(&self) -> usize {
        self.games.len()
    }

    pub fn is_empty(&self) -> bool {
        self.games.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Uuid, &Game)> {
        self.games.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_keys_each_pairing_by_a_fresh_id() {
        let mut games = GameRegistry::new();
        let first = games.create("a".to_string(), "b".to_string());
        let second = games.create("c".to_string(), "d".to_string());

        assert_ne!(first, second);
        assert_eq!(games.len(), 2);
        assert!(games.get(&first).is_some_and(|game| game.pairs("a", "b")));
        assert!(games.get(&second).is_some_and(|game| game.pairs("c", "d")));
    }

    #[test]
    fn test_contains_client_sees_both_sides() {
        let mut games = GameRegistry::new();
        games.create("a".to_string(), "b".to_string());

        assert!(games.contains_client("a"));
        assert!(games.contains_client("b"));
        assert!(!games.contains_client("c"));
    }

    #[test]
    fn test_pairs_matches_either_order() {
        let game = Game {
            side_a: "a".to_string(),
            side_b: "b".to_string(),
        };

        assert!(game.pairs("a", "b"));
        assert!(game.pairs("b", "a"));
        assert!(!game.pairs("a", "c"));
    }
}
