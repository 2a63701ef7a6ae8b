//! Reusable widgets rendering squad-core view-models.

pub mod detail_card;
pub mod stat_bar;
pub mod team_card;

pub use detail_card::DetailCard;
pub use stat_bar::StatBarWidget;
pub use team_card::TeamCard;

/// Terminal stand-in for an image reference: its file stem.
pub fn asset_label(reference: &str) -> &str {
    let name = reference.rsplit(['/', '\\']).next().unwrap_or(reference);
    match name.rfind('.') {
        Some(dot) if dot > 0 => &name[..dot],
        _ => name,
    }
}
