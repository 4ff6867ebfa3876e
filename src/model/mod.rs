//! Catalog data model
//!
//! Typed mirror of the catalog's JSON envelope. Only `Card::id` and the card
//! image URL are interpreted by the feed; everything else passes through.

mod card;
mod page;

pub use card::{
    Ability, Attack, Card, CardImages, CardMarket, CardSet, Legalities, MarketPrices, Price,
    Resistance, SetImages, TcgPlayer, Weakness,
};
pub use page::PageResponse;
