//! Filter engine — derives the visible slice of the roster from the current
//! search box and dropdown values.
//!
//! Matching rules:
//! - name: case-insensitive substring containment
//! - nationality / position / club: exact equality
//! - an empty or unset criterion always matches
//!
//! The roster is small and bounded, so every call is a plain linear scan.

use crate::domain::{Player, RosterField};

/// Current search/filter constraints. Not persisted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Criteria {
    pub name: String,
    pub nationality: Option<String>,
    pub position: Option<String>,
    pub club: Option<String>,
}

impl Criteria {
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_field(mut self, field: RosterField, value: impl Into<String>) -> Self {
        *self.field_mut(field) = Some(value.into());
        self
    }

    pub fn field(&self, field: RosterField) -> Option<&str> {
        match field {
            RosterField::Nationality => self.nationality.as_deref(),
            RosterField::Position => self.position.as_deref(),
            RosterField::Club => self.club.as_deref(),
        }
    }

    pub fn field_mut(&mut self, field: RosterField) -> &mut Option<String> {
        match field {
            RosterField::Nationality => &mut self.nationality,
            RosterField::Position => &mut self.position,
            RosterField::Club => &mut self.club,
        }
    }

    /// True when no criterion constrains the result.
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
            && RosterField::ALL
                .iter()
                .all(|f| self.field(*f).map_or(true, str::is_empty))
    }

    pub fn matches(&self, player: &Player) -> bool {
        let name_ok = self.name.is_empty()
            || player
                .name
                .to_lowercase()
                .contains(&self.name.to_lowercase());

        name_ok
            && RosterField::ALL.iter().all(|&field| match self.field(field) {
                None | Some("") => true,
                Some(wanted) => player.field(field) == wanted,
            })
    }
}

/// Players matching `criteria`, in roster order.
pub fn apply<'a>(roster: &'a [Player], criteria: &Criteria) -> Vec<&'a Player> {
    if criteria.is_empty() {
        return roster.iter().collect();
    }
    roster.iter().filter(|p| criteria.matches(p)).collect()
}
