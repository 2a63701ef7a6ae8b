//! View-models — players shaped for a specific rendering target.
//!
//! Pure mappings from [`Player`]; front-ends turn these into widgets.

use crate::domain::{Attribute, Player, PlayerId};

/// Compact search-grid entry: thumbnail + name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResultView {
    pub id: PlayerId,
    pub name: String,
    pub thumbnail: String,
}

/// One labeled attribute bar on a 0–100 scale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatBar {
    pub label: &'static str,
    pub value: u8,
}

impl StatBar {
    /// Bar fill as a percentage, clamped to 100.
    pub fn percent(&self) -> u8 {
        self.value.min(100)
    }

    /// Filled cells for a bar `width` cells wide.
    pub fn filled(&self, width: u16) -> u16 {
        (u32::from(width) * u32::from(self.percent()) / 100) as u16
    }
}

/// Detail/confirm panel content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub id: PlayerId,
    pub name: String,
    pub photo: String,
    pub nationality: String,
    pub flag: String,
    pub club: String,
    pub logo: String,
    pub position: String,
    pub stats: Vec<StatBar>,
}

impl DetailView {
    /// "Club - Position" caption line.
    pub fn club_line(&self) -> String {
        format!("{} - {}", self.club, self.position)
    }
}

/// Short-label attribute shown on a team card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeBadge {
    pub label: &'static str,
    pub value: u8,
}

/// Team grid card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TeamCardView {
    /// Position in the squad; the delete control targets this slot.
    pub slot: usize,
    pub id: PlayerId,
    pub name: String,
    pub rating: u8,
    pub position: String,
    pub photo: String,
    pub flag: String,
    pub logo: String,
    /// PAC, SHO, PAS.
    pub left: [AttributeBadge; 3],
    /// DRI, DEF, PHY.
    pub right: [AttributeBadge; 3],
}

pub fn search_result(player: &Player) -> SearchResultView {
    SearchResultView {
        id: player.id.clone(),
        name: player.name.clone(),
        thumbnail: player.photo.clone(),
    }
}

pub fn detail(player: &Player) -> DetailView {
    DetailView {
        id: player.id.clone(),
        name: player.name.clone(),
        photo: player.photo.clone(),
        nationality: player.nationality.clone(),
        flag: player.flag.clone(),
        club: player.club.clone(),
        logo: player.logo.clone(),
        position: player.position.clone(),
        stats: Attribute::ALL
            .iter()
            .map(|&a| StatBar {
                label: a.label(),
                value: player.attribute(a),
            })
            .collect(),
    }
}

pub fn team_card(slot: usize, player: &Player) -> TeamCardView {
    let badge = |a: Attribute| AttributeBadge {
        label: a.short_label(),
        value: player.attribute(a),
    };
    let [pac, sho, pas, dri, def, phy] = Attribute::SEXTET;

    TeamCardView {
        slot,
        id: player.id.clone(),
        name: player.name.clone(),
        rating: player.rating,
        position: player.position.clone(),
        photo: player.photo.clone(),
        flag: player.flag.clone(),
        logo: player.logo.clone(),
        left: [badge(pac), badge(sho), badge(pas)],
        right: [badge(dri), badge(def), badge(phy)],
    }
}

/// Team cards for the whole squad, slot = current position.
pub fn team_cards(players: &[Player]) -> Vec<TeamCardView> {
    players
        .iter()
        .enumerate()
        .map(|(slot, p)| team_card(slot, p))
        .collect()
}
