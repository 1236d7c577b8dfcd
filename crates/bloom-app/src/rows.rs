//! Per-row checkbox state for the plant list
//!
//! Kept apart from the catalog: a row's checked flag starts from
//! `PlantItem::is_checked` and is then owned here. Nothing is written back to
//! the source records, so reseeding from the catalog discards every toggle.

use bloom_core::PlantItem;
use tracing::debug;

/// View-local checked flags, keyed by row index
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemRowState {
    checked: Vec<bool>,
    seeded: bool,
}

impl ItemRowState {
    /// Unseeded state; rows fall back to their item's default until seeded
    pub fn new() -> Self {
        Self::default()
    }

    /// State seeded from each item's default
    pub fn seed(items: &[PlantItem]) -> Self {
        Self {
            checked: items.iter().map(|i| i.is_checked).collect(),
            seeded: true,
        }
    }

    /// Seed on first use; later calls keep existing toggles
    pub fn ensure_seeded(&mut self, items: &[PlantItem]) {
        if !self.seeded {
            *self = Self::seed(items);
        }
    }

    /// Rebuild from the source records, discarding prior toggles
    pub fn reseed(&mut self, items: &[PlantItem]) {
        debug!("Reseeding {} row states", items.len());
        *self = Self::seed(items);
    }

    pub fn is_seeded(&self) -> bool {
        self.seeded
    }

    pub fn is_checked(&self, index: usize) -> Option<bool> {
        self.checked.get(index).copied()
    }

    /// Returns `false` when `index` is out of range
    pub fn set_checked(&mut self, index: usize, checked: bool) -> bool {
        match self.checked.get_mut(index) {
            Some(slot) => {
                *slot = checked;
                true
            }
            None => false,
        }
    }

    /// Flip a row; returns the new value, `None` when out of range
    pub fn toggle(&mut self, index: usize) -> Option<bool> {
        let slot = self.checked.get_mut(index)?;
        *slot = !*slot;
        Some(*slot)
    }

    pub fn len(&self) -> usize {
        self.checked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.checked.is_empty()
    }
}
