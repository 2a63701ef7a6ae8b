//! Test helpers for creating mock data

use squad_core::{MemoryStore, Player, PlayerId, RosterStore};

use crate::app::AppState;

pub fn player(id: &str, name: &str, nationality: &str, position: &str, club: &str) -> Player {
    Player {
        id: PlayerId::new(id),
        name: name.to_string(),
        nationality: nationality.to_string(),
        club: club.to_string(),
        position: position.to_string(),
        rating: 86,
        pace: 88,
        shooting: 79,
        passing: 74,
        dribbling: 85,
        defending: 38,
        physical: 71,
        photo: format!("img/{id}.png"),
        flag: format!("flags/{nationality}.png"),
        logo: format!("clubs/{club}.png"),
    }
}

/// Alice (FR, GK) and Bob (ES, ST).
pub fn two_player_roster() -> Vec<Player> {
    vec![
        player("1", "Alice", "FR", "GK", "Lyon"),
        player("2", "Bob", "ES", "ST", "Betis"),
    ]
}

/// App with an in-memory store and `players` already loaded.
pub fn loaded_app(players: Vec<Player>) -> AppState {
    let mut app = AppState::new(Box::new(MemoryStore::new()));
    let roster = RosterStore::from_players(players).expect("test roster has unique ids");
    app.on_roster_loaded(Ok(roster));
    app
}
