//! Selection manager — the squad being built.
//!
//! Invariants:
//! - no player id appears twice
//! - length never exceeds [`SQUAD_CAPACITY`]
//! - order is insertion order; positions shift left after a removal, so a
//!   position is only meaningful against the most recent render
//!
//! Every successful mutation is written through to the key-value store under
//! [`SELECTION_KEY`]. If that write fails the mutation is undone, so callers
//! never see an in-memory squad that differs from the stored one.

use std::collections::HashSet;
use std::fmt;

use crate::domain::{Player, PlayerId};
use crate::error::SelectionError;
use crate::storage::KeyValueStore;

/// Maximum squad size.
pub const SQUAD_CAPACITY: usize = 11;

/// Storage key of the persisted squad.
pub const SELECTION_KEY: &str = "selectedTeam";

/// Result of a successful confirm.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Confirmation {
    pub size: usize,
}

impl fmt::Display for Confirmation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Team of {} players created!", self.size)
    }
}

pub struct SelectionManager<S: KeyValueStore> {
    players: Vec<Player>,
    store: S,
}

impl<S: KeyValueStore> SelectionManager<S> {
    /// Empty squad over `store`. Nothing is read until [`restore`](Self::restore).
    pub fn new(store: S) -> Self {
        Self {
            players: Vec::with_capacity(SQUAD_CAPACITY),
            store,
        }
    }

    /// Construct and immediately restore the saved squad.
    pub fn restored(store: S) -> Self {
        let mut manager = Self::new(store);
        manager.restore();
        manager
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.players.len() >= SQUAD_CAPACITY
    }

    pub fn capacity(&self) -> usize {
        SQUAD_CAPACITY
    }

    pub fn contains(&self, id: &PlayerId) -> bool {
        self.players.iter().any(|p| &p.id == id)
    }

    pub fn ids(&self) -> Vec<PlayerId> {
        self.players.iter().map(|p| p.id.clone()).collect()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Append a player to the squad.
    pub fn add(&mut self, player: Player) -> Result<(), SelectionError> {
        if self.contains(&player.id) {
            return Err(SelectionError::Duplicate { id: player.id });
        }
        if self.is_full() {
            return Err(SelectionError::Capacity {
                capacity: SQUAD_CAPACITY,
            });
        }

        let id = player.id.clone();
        self.players.push(player);
        if let Err(e) = self.persist() {
            self.players.pop();
            return Err(e);
        }
        tracing::debug!(player = %id, size = self.players.len(), "player added to squad");
        Ok(())
    }

    /// Remove the player at `position`; later players move up one slot.
    pub fn remove_at(&mut self, position: usize) -> Result<Player, SelectionError> {
        if position >= self.players.len() {
            return Err(SelectionError::Range {
                position,
                len: self.players.len(),
            });
        }

        let removed = self.players.remove(position);
        if let Err(e) = self.persist() {
            self.players.insert(position, removed);
            return Err(e);
        }
        tracing::debug!(player = %removed.id, position, size = self.players.len(), "player removed from squad");
        Ok(removed)
    }

    /// Write the full squad snapshot, replacing any previous value.
    pub fn persist(&mut self) -> Result<(), SelectionError> {
        let json = serde_json::to_string(&self.players)
            .map_err(|e| SelectionError::Persist(e.to_string()))?;
        self.store
            .set(SELECTION_KEY, &json)
            .map_err(|e| SelectionError::Persist(e.to_string()))
    }

    /// Replace the in-memory squad with the stored one.
    ///
    /// Absent, unreadable or malformed data (including a snapshot that breaks
    /// the duplicate/capacity invariants) counts as "no saved squad" and
    /// leaves the selection empty. Returns the number of restored players.
    pub fn restore(&mut self) -> usize {
        self.players.clear();

        let raw = match self.store.get(SELECTION_KEY) {
            Ok(Some(raw)) => raw,
            Ok(None) => return 0,
            Err(e) => {
                tracing::warn!(error = %e, "could not read saved team");
                return 0;
            }
        };

        match decode_snapshot(&raw) {
            Ok(players) => {
                tracing::info!(players = players.len(), "saved team restored");
                self.players = players;
                self.players.len()
            }
            Err(reason) => {
                tracing::warn!(%reason, "ignoring malformed saved team");
                0
            }
        }
    }

    /// Finalize the squad. Fails when nothing has been picked.
    pub fn confirm(&self) -> Result<Confirmation, SelectionError> {
        if self.players.is_empty() {
            return Err(SelectionError::Empty);
        }
        Ok(Confirmation {
            size: self.players.len(),
        })
    }
}

fn decode_snapshot(raw: &str) -> Result<Vec<Player>, String> {
    let players: Vec<Player> = serde_json::from_str(raw).map_err(|e| e.to_string())?;
    if players.len() > SQUAD_CAPACITY {
        return Err(format!(
            "{} players exceeds capacity {SQUAD_CAPACITY}",
            players.len()
        ));
    }
    let mut seen = HashSet::new();
    for p in &players {
        if !seen.insert(&p.id) {
            return Err(format!("duplicate player id '{}'", p.id));
        }
    }
    Ok(players)
}
