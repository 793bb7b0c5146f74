//! Beer data models
//!
//! Defines the persisted beer entity and its style enumeration.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::str::FromStr;

/// Style of a beer
///
/// Stored in the database as the uppercase style name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum BeerType {
    /// Bottom-fermented, pale and crisp
    Lager,
    /// Dark malt beer
    Malzbier,
    /// Belgian-style wheat beer
    Witbier,
    /// German wheat beer
    Weiss,
    /// Top-fermented
    Ale,
    /// India pale ale
    Ipa,
    /// Dark, roasted
    Stout,
}

impl BeerType {
    /// Convert the style to its string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            BeerType::Lager => "LAGER",
            BeerType::Malzbier => "MALZBIER",
            BeerType::Witbier => "WITBIER",
            BeerType::Weiss => "WEISS",
            BeerType::Ale => "ALE",
            BeerType::Ipa => "IPA",
            BeerType::Stout => "STOUT",
        }
    }
}

impl FromStr for BeerType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "LAGER" => Ok(BeerType::Lager),
            "MALZBIER" => Ok(BeerType::Malzbier),
            "WITBIER" => Ok(BeerType::Witbier),
            "WEISS" => Ok(BeerType::Weiss),
            "ALE" => Ok(BeerType::Ale),
            "IPA" => Ok(BeerType::Ipa),
            "STOUT" => Ok(BeerType::Stout),
            other => Err(format!("Unknown beer type: {}", other)),
        }
    }
}

/// A beer as stored in the database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Beer {
    /// Unique identifier, assigned by the database on insert
    pub id: i64,
    /// Name of the beer, unique across all rows
    pub name: String,
    /// Brand that produces the beer
    pub brand: String,
    /// Maximum stock capacity
    pub max: i64,
    /// Current stock quantity, always within [0, max]
    pub quantity: i64,
    /// Style of the beer, stored as the uppercase style name
    pub beer_type: String,
    /// When the beer was registered (Unix timestamp)
    pub created_at: i64,
    /// When the stock was last touched (Unix timestamp)
    pub updated_at: i64,
}

impl Beer {
    /// Get the style as enum
    ///
    /// Fails only if the stored value was written outside this crate.
    #[allow(dead_code)]
    pub fn beer_type_enum(&self) -> Result<BeerType, String> {
        BeerType::from_str(&self.beer_type)
    }
}

/// A beer to be registered, before the database assigns an identifier
#[derive(Debug, Clone, PartialEq)]
pub struct NewBeer {
    /// Name of the beer
    pub name: String,
    /// Brand that produces the beer
    pub brand: String,
    /// Maximum stock capacity
    pub max: i64,
    /// Initial stock quantity
    pub quantity: i64,
    /// Style of the beer
    pub beer_type: BeerType,
}
