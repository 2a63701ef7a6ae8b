//! Domain types — players, their ids and attributes.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// Unique player identifier.
///
/// Roster documents are not consistent about id encoding, so both JSON
/// strings and JSON numbers deserialize to the same textual id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct PlayerId(String);

impl PlayerId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

impl From<&str> for PlayerId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl<'de> Deserialize<'de> for PlayerId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Int(i64),
            Uint(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(s) => PlayerId(s),
            RawId::Int(n) => PlayerId(n.to_string()),
            RawId::Uint(n) => PlayerId(n.to_string()),
        })
    }
}

/// Attribute values arrive as any JSON number (or numeric string); they are
/// rounded and clamped into `u8`.
fn attribute_value<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawValue {
        Uint(u64),
        Int(i64),
        Float(f64),
        Text(String),
    }

    let value = match RawValue::deserialize(deserializer)? {
        RawValue::Uint(n) => n as f64,
        RawValue::Int(n) => n as f64,
        RawValue::Float(n) => n,
        RawValue::Text(s) => s.trim().parse::<f64>().map_err(|_| {
            serde::de::Error::custom(format!("attribute value is not a number: {s:?}"))
        })?,
    };
    if !value.is_finite() {
        return Err(serde::de::Error::custom("attribute value is not finite"));
    }
    Ok(value.round().clamp(0.0, f64::from(u8::MAX)) as u8)
}

/// A selectable player. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    pub id: PlayerId,
    pub name: String,
    pub nationality: String,
    pub club: String,
    pub position: String,
    #[serde(deserialize_with = "attribute_value")]
    pub rating: u8,
    #[serde(deserialize_with = "attribute_value")]
    pub pace: u8,
    #[serde(deserialize_with = "attribute_value")]
    pub shooting: u8,
    #[serde(deserialize_with = "attribute_value")]
    pub passing: u8,
    #[serde(deserialize_with = "attribute_value")]
    pub dribbling: u8,
    #[serde(deserialize_with = "attribute_value")]
    pub defending: u8,
    #[serde(deserialize_with = "attribute_value")]
    pub physical: u8,
    #[serde(default)]
    pub photo: String,
    #[serde(default)]
    pub flag: String,
    #[serde(default)]
    pub logo: String,
}

impl Player {
    pub fn attribute(&self, attribute: Attribute) -> u8 {
        match attribute {
            Attribute::Rating => self.rating,
            Attribute::Pace => self.pace,
            Attribute::Shooting => self.shooting,
            Attribute::Passing => self.passing,
            Attribute::Dribbling => self.dribbling,
            Attribute::Defending => self.defending,
            Attribute::Physical => self.physical,
        }
    }

    /// Value of a filterable text field.
    pub fn field(&self, field: RosterField) -> &str {
        match field {
            RosterField::Nationality => &self.nationality,
            RosterField::Position => &self.position,
            RosterField::Club => &self.club,
        }
    }
}

/// Numeric player attribute.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Rating,
    Pace,
    Shooting,
    Passing,
    Dribbling,
    Defending,
    Physical,
}

impl Attribute {
    /// All seven attributes, in detail-panel order.
    pub const ALL: [Attribute; 7] = [
        Attribute::Rating,
        Attribute::Pace,
        Attribute::Shooting,
        Attribute::Passing,
        Attribute::Dribbling,
        Attribute::Defending,
        Attribute::Physical,
    ];

    /// The six card attributes (rating is shown separately on a card).
    pub const SEXTET: [Attribute; 6] = [
        Attribute::Pace,
        Attribute::Shooting,
        Attribute::Passing,
        Attribute::Dribbling,
        Attribute::Defending,
        Attribute::Physical,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Attribute::Rating => "Rating",
            Attribute::Pace => "Pace",
            Attribute::Shooting => "Shooting",
            Attribute::Passing => "Passing",
            Attribute::Dribbling => "Dribbling",
            Attribute::Defending => "Defending",
            Attribute::Physical => "Physical",
        }
    }

    pub fn short_label(self) -> &'static str {
        match self {
            Attribute::Rating => "RAT",
            Attribute::Pace => "PAC",
            Attribute::Shooting => "SHO",
            Attribute::Passing => "PAS",
            Attribute::Dribbling => "DRI",
            Attribute::Defending => "DEF",
            Attribute::Physical => "PHY",
        }
    }
}

/// Text fields the roster can be filtered on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RosterField {
    Nationality,
    Position,
    Club,
}

impl RosterField {
    pub const ALL: [RosterField; 3] = [
        RosterField::Nationality,
        RosterField::Position,
        RosterField::Club,
    ];

    /// Label of the "no constraint" dropdown entry.
    pub fn all_label(self) -> &'static str {
        match self {
            RosterField::Nationality => "All Nationalities",
            RosterField::Position => "All Positions",
            RosterField::Club => "All Clubs",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            RosterField::Nationality => "Nationality",
            RosterField::Position => "Position",
            RosterField::Club => "Club",
        }
    }
}

impl std::str::FromStr for RosterField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "nationality" | "nation" => Ok(RosterField::Nationality),
            "position" | "pos" => Ok(RosterField::Position),
            "club" => Ok(RosterField::Club),
            other => Err(format!("unknown roster field '{other}'")),
        }
    }
}
