//! Text rendering of the card screens
//!
//! The list screen is a fixed-column grid of card labels; the detail screen
//! shows the few fields the app surfaces plus the image link.

use crate::feed::Alert;
use crate::model::Card;
use std::fmt::Write;

/// Columns in the card grid
pub const GRID_COLUMNS: usize = 3;

/// Label for one grid cell
pub fn label(card: &Card) -> String {
    format!("{} [{}]", card.name, card.id)
}

/// Lay cards out in rows of `columns` cells, padded to a common width
pub fn grid(cards: &[Card], columns: usize) -> String {
    if cards.is_empty() {
        return "(no cards)\n".to_string();
    }

    let columns = columns.max(1);
    let labels: Vec<String> = cards.iter().map(label).collect();
    let width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);

    let mut out = String::new();
    for row in labels.chunks(columns) {
        let cells: Vec<String> = row.iter().map(|l| format!("{l:<width$}")).collect();
        out.push_str(cells.join("  ").trim_end());
        out.push('\n');
    }
    out
}

/// Detail screen for one card; unset fields render empty
pub fn detail(card: &Card) -> String {
    let mut out = String::new();
    // Writing to a String cannot fail
    let _ = writeln!(out, "{}", card.name);
    let _ = writeln!(out, "HP: {}", card.hp.as_deref().unwrap_or(""));
    let _ = writeln!(out, "Level: {}", card.level.as_deref().unwrap_or(""));
    let _ = writeln!(out, "Rarity: {}", card.rarity.as_deref().unwrap_or(""));
    if let Some(url) = card.small_image_url() {
        let _ = writeln!(out, "Image: {url}");
    }
    out
}

/// One-line alert text
pub fn alert(alert: &Alert) -> String {
    alert.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::CardImages;
    use pretty_assertions::assert_eq;

    fn cards(n: usize) -> Vec<Card> {
        (1..=n)
            .map(|i| Card::new(format!("c{i}"), format!("Name{i}")))
            .collect()
    }

    #[test]
    fn test_grid_rows_of_three() {
        let out = grid(&cards(4), GRID_COLUMNS);
        assert_eq!(
            out,
            "Name1 [c1]  Name2 [c2]  Name3 [c3]\nName4 [c4]\n"
        );
    }

    #[test]
    fn test_grid_pads_to_widest_label() {
        let mut list = cards(2);
        list[0].name = "Mewtwo".to_string();
        let out = grid(&list, 2);
        assert_eq!(out, "Mewtwo [c1]  Name2 [c2]\n");

        let out = grid(&list, 1);
        assert_eq!(out, "Mewtwo [c1]\nName2 [c2]\n");
    }

    #[test]
    fn test_grid_empty() {
        assert_eq!(grid(&[], GRID_COLUMNS), "(no cards)\n");
    }

    #[test]
    fn test_detail_full() {
        let mut card = Card::new("base1-4", "Charizard");
        card.hp = Some("120".to_string());
        card.level = Some("76".to_string());
        card.rarity = Some("Rare Holo".to_string());
        card.images = Some(CardImages {
            small: "https://images.pokemontcg.io/base1/4.png".to_string(),
            large: "https://images.pokemontcg.io/base1/4_hires.png".to_string(),
        });

        assert_eq!(
            detail(&card),
            "Charizard\nHP: 120\nLevel: 76\nRarity: Rare Holo\nImage: https://images.pokemontcg.io/base1/4.png\n"
        );
    }

    #[test]
    fn test_detail_unset_fields_render_empty() {
        let card = Card::new("sv1-1", "Pineco");
        assert_eq!(detail(&card), "Pineco\nHP: \nLevel: \nRarity: \n");
    }

    #[test]
    fn test_alert_text() {
        assert_eq!(alert(&Alert::success()), "Success!: Gotta fetch em all!");
    }
}
