// Wardrobe system
//
// - `catalog`: clothing items, outfit presets and the built-in wardrobe
// - `outfit`: the four equip slots and the store that changes them

pub mod catalog;
pub mod outfit;

pub use catalog::{Catalog, ClothingItem, ItemId, OutfitPreset, SlotKind};
pub use outfit::{OutfitSettings, OutfitStore};

// Re-export for future use
#[allow(unused_imports)]
pub use catalog::DEFAULT_PRESET;
#[allow(unused_imports)]
pub use outfit::{CommitPolicy, OutfitSlots, DEFAULT_OUTFIT_SETTINGS};

/// Catalog construction errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    #[error("Duplicate item id: {0}")]
    DuplicateItem(String),

    #[error("Duplicate preset id: {0}")]
    DuplicatePreset(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_error_display() {
        let err = CatalogError::DuplicateItem("hat1".to_string());
        assert_eq!(err.to_string(), "Duplicate item id: hat1");
    }
}
