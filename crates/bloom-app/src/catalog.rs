//! Read-only catalog the home screen is composed from

use bloom_core::{sample_items, sample_themes, PlantItem, Theme};

/// Themes and plant items, in display order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    pub themes: Vec<Theme>,
    pub items: Vec<PlantItem>,
}

impl Catalog {
    pub fn new(themes: Vec<Theme>, items: Vec<PlantItem>) -> Self {
        Self { themes, items }
    }

    /// The built-in sample catalog
    pub fn sample() -> Self {
        Self::new(sample_themes(), sample_items())
    }

    /// Image URLs of every theme then every item, in display order
    pub fn image_urls(&self) -> impl Iterator<Item = &str> {
        self.themes
            .iter()
            .map(|t| t.image_url.as_str())
            .chain(self.items.iter().map(|i| i.image_url.as_str()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_catalog() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.themes.len(), 5);
        assert_eq!(catalog.items.len(), 6);
        assert_eq!(catalog.image_urls().count(), 11);
    }

    #[test]
    fn test_default_is_empty() {
        let catalog = Catalog::default();
        assert!(catalog.themes.is_empty());
        assert_eq!(catalog.image_urls().count(), 0);
    }
}
