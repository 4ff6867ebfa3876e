//! Card records and their nested payloads

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ============================================================================
// Card
// ============================================================================

/// One catalog entry
///
/// `id` and `name` are the only required fields. A partial record decodes
/// with the missing fields left as `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    /// Catalog identifier, unique per card
    pub id: String,
    pub name: String,
    pub supertype: Option<String>,
    pub subtypes: Option<Vec<String>>,
    pub level: Option<String>,
    pub hp: Option<String>,
    pub types: Option<Vec<String>>,
    pub evolves_from: Option<String>,
    pub abilities: Option<Vec<Ability>>,
    pub attacks: Option<Vec<Attack>>,
    pub weaknesses: Option<Vec<Weakness>>,
    pub resistances: Option<Vec<Resistance>>,
    pub retreat_cost: Option<Vec<String>>,
    pub converted_retreat_cost: Option<u32>,
    pub set: Option<CardSet>,
    pub number: Option<String>,
    pub artist: Option<String>,
    pub rarity: Option<String>,
    pub flavor_text: Option<String>,
    pub national_pokedex_numbers: Option<Vec<u32>>,
    pub legalities: Option<Legalities>,
    pub images: Option<CardImages>,
    pub tcgplayer: Option<TcgPlayer>,
    pub cardmarket: Option<CardMarket>,
}

impl Card {
    /// Create a card with only the identifying fields set
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            supertype: None,
            subtypes: None,
            level: None,
            hp: None,
            types: None,
            evolves_from: None,
            abilities: None,
            attacks: None,
            weaknesses: None,
            resistances: None,
            retreat_cost: None,
            converted_retreat_cost: None,
            set: None,
            number: None,
            artist: None,
            rarity: None,
            flavor_text: None,
            national_pokedex_numbers: None,
            legalities: None,
            images: None,
            tcgplayer: None,
            cardmarket: None,
        }
    }

    /// URL of the small card image shown in the grid and detail screens
    pub fn small_image_url(&self) -> Option<&str> {
        self.images.as_ref().map(|images| images.small.as_str())
    }

    /// URL of the high resolution card image
    pub fn large_image_url(&self) -> Option<&str> {
        self.images.as_ref().map(|images| images.large.as_str())
    }
}

// ============================================================================
// Gameplay payloads
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attack {
    pub cost: Vec<String>,
    pub name: String,
    pub text: Option<String>,
    pub damage: Option<String>,
    pub converted_energy_cost: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Weakness {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resistance {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}

// ============================================================================
// Set metadata
// ============================================================================

/// The expansion a card was printed in
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardSet {
    pub id: String,
    pub name: String,
    pub series: String,
    pub printed_total: Option<u32>,
    pub total: u32,
    pub legalities: Legalities,
    pub ptcgo_code: Option<String>,
    pub release_date: String,
    pub updated_at: String,
    pub images: SetImages,
}

/// Format legality, e.g. `"Legal"` or `"Banned"`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Legalities {
    pub unlimited: Option<String>,
    pub standard: Option<String>,
    pub expanded: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardImages {
    pub small: String,
    pub large: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetImages {
    pub symbol: String,
    pub logo: String,
}

// ============================================================================
// Pricing
// ============================================================================

/// TCGplayer listing; prices are keyed by print variant (`normal`, `holofoil`, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TcgPlayer {
    pub url: String,
    pub updated_at: String,
    pub prices: Option<HashMap<String, Price>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardMarket {
    pub url: String,
    pub updated_at: String,
    pub prices: Option<MarketPrices>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Price {
    pub low: Option<f64>,
    pub mid: Option<f64>,
    pub high: Option<f64>,
    pub market: Option<f64>,
    pub direct_low: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketPrices {
    pub average_sell_price: Option<f64>,
    pub low_price: Option<f64>,
    pub trend_price: Option<f64>,
    pub german_pro_low: Option<f64>,
    pub suggested_price: Option<f64>,
}
