//! Built-in sample catalog
//!
//! Static data only; nothing here is ever mutated.

use crate::types::{PlantItem, Theme};

const PEXELS_QUERY: &str = "?auto=compress&cs=tinysrgb&dpr=2&h=750&w=1260";

const ITEM_DESCRIPTION: &str = "This is a description";

fn pexels(id: u32) -> String {
    format!("https://images.pexels.com/photos/{id}/pexels-photo-{id}.jpeg{PEXELS_QUERY}")
}

/// Themes shown in the "Browse themes" row, in display order
pub fn sample_themes() -> Vec<Theme> {
    vec![
        Theme::new("Desert chic", pexels(2132227)),
        Theme::new("Tiny terrariums", pexels(1400375)),
        Theme::new("Jungle vibes", pexels(5699665)),
        Theme::new("Easy care", pexels(6208086)),
        Theme::new("Statements", pexels(3511755)),
    ]
}

/// Plants shown in the "Design your home garden" list, in display order
pub fn sample_items() -> Vec<PlantItem> {
    vec![
        PlantItem::new("Monstera", ITEM_DESCRIPTION, pexels(3097770)).checked(true),
        PlantItem::new("Aglaonema", ITEM_DESCRIPTION, pexels(4751978)),
        PlantItem::new("Peace lily", ITEM_DESCRIPTION, pexels(4425201)),
        PlantItem::new("Fiddle leaf tree", ITEM_DESCRIPTION, pexels(6208087)),
        PlantItem::new("Snake plant", ITEM_DESCRIPTION, pexels(2123482)),
        PlantItem::new("Pothos", ITEM_DESCRIPTION, pexels(1084199)),
    ]
}
