//! Roster store — the immutable list of selectable players for a session.
//!
//! The roster is read once from a JSON document shaped as
//! `{ "players": [ ... ] }`, either from a local file or over HTTP. There is
//! no retry: a failed load leaves the caller with an empty roster.

use std::collections::{BTreeSet, HashSet};
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::domain::{Player, PlayerId, RosterField};
use crate::error::LoadError;

#[derive(Debug, Deserialize)]
struct RosterDocument {
    players: Vec<Player>,
}

/// Where the roster document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterSource {
    File(PathBuf),
    Url(String),
}

impl RosterSource {
    /// `http://` and `https://` locations are URLs, anything else is a path.
    pub fn parse(location: &str) -> Self {
        if location.starts_with("http://") || location.starts_with("https://") {
            RosterSource::Url(location.to_string())
        } else {
            RosterSource::File(PathBuf::from(location))
        }
    }
}

impl fmt::Display for RosterSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RosterSource::File(path) => write!(f, "{}", path.display()),
            RosterSource::Url(url) => f.write_str(url),
        }
    }
}

/// Immutable roster, in document order.
#[derive(Debug, Clone, Default)]
pub struct RosterStore {
    players: Vec<Player>,
}

impl RosterStore {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a roster, rejecting duplicate ids.
    pub fn from_players(players: Vec<Player>) -> Result<Self, LoadError> {
        let mut seen = HashSet::with_capacity(players.len());
        for player in &players {
            if !seen.insert(&player.id) {
                return Err(LoadError::DuplicateId(player.id.clone()));
            }
        }
        Ok(Self { players })
    }

    /// Parse a roster document.
    pub fn from_json(content: &str) -> Result<Self, LoadError> {
        let doc: RosterDocument = serde_json::from_str(content)?;
        Self::from_players(doc.players)
    }

    /// Load a roster document from a file.
    pub fn from_file(path: &Path) -> Result<Self, LoadError> {
        let content = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    /// Fetch a roster document over HTTP (single blocking GET).
    pub fn from_url(url: &str) -> Result<Self, LoadError> {
        let response = reqwest::blocking::get(url)
            .and_then(|r| r.error_for_status())
            .map_err(|e| LoadError::Unreachable(e.to_string()))?;
        let body = response
            .text()
            .map_err(|e| LoadError::Unreachable(e.to_string()))?;
        Self::from_json(&body)
    }

    /// Single load attempt. A failure is logged here, once; callers treat it
    /// as an empty roster.
    pub fn load(source: &RosterSource) -> Result<Self, LoadError> {
        let result = match source {
            RosterSource::File(path) => Self::from_file(path),
            RosterSource::Url(url) => Self::from_url(url),
        };
        match &result {
            Ok(roster) => {
                tracing::info!(source = %source, players = roster.len(), "roster loaded")
            }
            Err(e) => tracing::error!(source = %source, error = %e, "error loading players"),
        }
        result
    }

    pub fn players(&self) -> &[Player] {
        &self.players
    }

    pub fn get(&self, id: &PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| &p.id == id)
    }

    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }

    /// Distinct values of a field, sorted ascending. Feeds the dropdowns.
    pub fn distinct_values(&self, field: RosterField) -> Vec<String> {
        self.players
            .iter()
            .map(|p| p.field(field))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(String::from)
            .collect()
    }
}
