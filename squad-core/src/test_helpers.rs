//! Test helpers for creating mock players

use crate::domain::{Player, PlayerId};

pub fn player(id: &str, name: &str, nationality: &str, position: &str, club: &str) -> Player {
    Player {
        id: PlayerId::new(id),
        name: name.to_string(),
        nationality: nationality.to_string(),
        club: club.to_string(),
        position: position.to_string(),
        rating: 85,
        pace: 78,
        shooting: 72,
        passing: 81,
        dribbling: 84,
        defending: 40,
        physical: 69,
        photo: format!("img/{id}.png"),
        flag: format!("flags/{nationality}.png"),
        logo: format!("clubs/{club}.png"),
    }
}

/// `n` distinct players with ids "1".."n".
pub fn squad(n: usize) -> Vec<Player> {
    (1..=n)
        .map(|i| player(&i.to_string(), &format!("Player {i}"), "FR", "CM", "Lyon"))
        .collect()
}
