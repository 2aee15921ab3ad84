// Clothing catalog - the fixed wardrobe and outfit collections

use std::collections::HashSet;

use super::CatalogError;

/// Unique identifier for a clothing item
pub type ItemId = String;

/// The four equip positions on the character, in drawing order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotKind {
    Hat,
    Top,
    Bottom,
    Shoes,
}

impl SlotKind {
    pub const ALL: [SlotKind; 4] = [SlotKind::Hat, SlotKind::Top, SlotKind::Bottom, SlotKind::Shoes];

    /// Stable lowercase identifier
    pub fn id(&self) -> &'static str {
        match self {
            Self::Hat => "hat",
            Self::Top => "top",
            Self::Bottom => "bottom",
            Self::Shoes => "shoes",
        }
    }

    /// Heading for this kind's group in the wardrobe
    pub fn label(&self) -> &'static str {
        match self {
            Self::Hat => "Headwear",
            Self::Top => "Tops",
            Self::Bottom => "Bottoms",
            Self::Shoes => "Footwear",
        }
    }
}

/// A piece of clothing that can be worn in exactly one slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClothingItem {
    pub id: ItemId,
    /// Display name
    pub name: String,
    pub kind: SlotKind,
    /// What gets drawn on the character
    pub glyph: String,
}

impl ClothingItem {
    pub fn new(id: &str, name: &str, kind: SlotKind, glyph: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            kind,
            glyph: glyph.to_string(),
        }
    }
}

/// A named bundle of items applied as one unit
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutfitPreset {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Item ids of mixed kinds, applied in order
    pub items: Vec<ItemId>,
}

impl OutfitPreset {
    pub fn new(id: &str, name: &str, description: &str, items: &[&str]) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            description: description.to_string(),
            items: items.iter().map(|id| id.to_string()).collect(),
        }
    }
}

/// Id of the preset worn when the room opens
pub const DEFAULT_PRESET: &str = "casual";

/// All available items and presets. Never changes after construction.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<ClothingItem>,
    presets: Vec<OutfitPreset>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate item or preset ids
    ///
    /// Presets may name items that are not in the catalog; those entries are
    /// skipped when the preset is applied.
    pub fn new(items: Vec<ClothingItem>, presets: Vec<OutfitPreset>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id.as_str()) {
                return Err(CatalogError::DuplicateItem(item.id.clone()));
            }
        }

        let mut seen = HashSet::new();
        for preset in &presets {
            if !seen.insert(preset.id.as_str()) {
                return Err(CatalogError::DuplicatePreset(preset.id.clone()));
            }
        }

        Ok(Self { items, presets })
    }

    /// The built-in wardrobe
    pub fn standard() -> Result<Self, CatalogError> {
        let items = vec![
            ClothingItem::new("hat1", "Beanie", SlotKind::Hat, "🧢"),
            ClothingItem::new("hat2", "Beret", SlotKind::Hat, "🎩"),
            ClothingItem::new("hat3", "Cap", SlotKind::Hat, "🧢"),
            ClothingItem::new("top1", "T-shirt", SlotKind::Top, "👕"),
            ClothingItem::new("top2", "Sweater", SlotKind::Top, "🧥"),
            ClothingItem::new("top3", "Blazer", SlotKind::Top, "🥼"),
            ClothingItem::new("top4", "Shirt", SlotKind::Top, "👔"),
            ClothingItem::new("bottom1", "Jeans", SlotKind::Bottom, "👖"),
            ClothingItem::new("bottom2", "Shorts", SlotKind::Bottom, "🩳"),
            ClothingItem::new("bottom3", "Skirt", SlotKind::Bottom, "👗"),
            ClothingItem::new("shoes1", "Sneakers", SlotKind::Shoes, "👟"),
            ClothingItem::new("shoes2", "Boots", SlotKind::Shoes, "👢"),
            ClothingItem::new("shoes3", "Heels", SlotKind::Shoes, "👠"),
        ];

        let presets = vec![
            OutfitPreset::new(
                "casual",
                "Casual",
                "Everyday look for a walk",
                &["hat1", "top1", "bottom1", "shoes1"],
            ),
            OutfitPreset::new(
                "elegant",
                "Elegant",
                "Stylish evening look",
                &["hat2", "top3", "bottom3", "shoes3"],
            ),
            OutfitPreset::new(
                "sport",
                "Sport",
                "Comfortable athletic style",
                &["hat3", "top2", "bottom2", "shoes1"],
            ),
            OutfitPreset::new(
                "business",
                "Business",
                "For work and meetings",
                &["top4", "bottom1", "shoes2"],
            ),
        ];

        Self::new(items, presets)
    }

    /// Look up an item by id
    pub fn item(&self, id: &str) -> Option<&ClothingItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Look up a preset by id
    pub fn preset(&self, id: &str) -> Option<&OutfitPreset> {
        self.presets.iter().find(|preset| preset.id == id)
    }

    pub fn items(&self) -> &[ClothingItem] {
        &self.items
    }

    pub fn presets(&self) -> &[OutfitPreset] {
        &self.presets
    }

    /// Items worn in `kind`'s slot, in catalog order
    pub fn items_of_kind(&self, kind: SlotKind) -> impl Iterator<Item = &ClothingItem> + '_ {
        self.items.iter().filter(move |item| item.kind == kind)
    }

    /// The items a preset names that exist in the catalog, in preset order
    pub fn preset_items<'a>(
        &'a self,
        preset: &'a OutfitPreset,
    ) -> impl Iterator<Item = &'a ClothingItem> + 'a {
        preset.items.iter().filter_map(move |id| self.item(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_catalog() {
        let catalog = Catalog::standard().unwrap();
        assert_eq!(catalog.items().len(), 13);
        assert_eq!(catalog.presets().len(), 4);
        assert!(catalog.preset(DEFAULT_PRESET).is_some());
    }

    #[test]
    fn test_items_of_kind_keeps_catalog_order() {
        let catalog = Catalog::standard().unwrap();
        let tops: Vec<&str> = catalog
            .items_of_kind(SlotKind::Top)
            .map(|item| item.id.as_str())
            .collect();
        assert_eq!(tops, vec!["top1", "top2", "top3", "top4"]);
    }

    #[test]
    fn test_every_kind_has_items() {
        let catalog = Catalog::standard().unwrap();
        for kind in SlotKind::ALL {
            assert!(catalog.items_of_kind(kind).count() > 0, "{:?} is empty", kind);
        }
    }

    #[test]
    fn test_lookup_unknown_id() {
        let catalog = Catalog::standard().unwrap();
        assert!(catalog.item("hat9").is_none());
        assert!(catalog.preset("pyjamas").is_none());
    }

    #[test]
    fn test_duplicate_item_rejected() {
        let items = vec![
            ClothingItem::new("hat1", "Beanie", SlotKind::Hat, "🧢"),
            ClothingItem::new("hat1", "Other", SlotKind::Hat, "🎩"),
        ];
        let err = Catalog::new(items, Vec::new()).unwrap_err();
        assert_eq!(err, CatalogError::DuplicateItem("hat1".to_string()));
    }

    #[test]
    fn test_duplicate_preset_rejected() {
        let presets = vec![
            OutfitPreset::new("casual", "Casual", "", &[]),
            OutfitPreset::new("casual", "Again", "", &[]),
        ];
        let err = Catalog::new(Vec::new(), presets).unwrap_err();
        assert_eq!(err, CatalogError::DuplicatePreset("casual".to_string()));
    }

    #[test]
    fn test_preset_items_skip_unknown_ids() {
        let catalog = Catalog::standard().unwrap();
        let preset = OutfitPreset::new("odd", "Odd", "", &["top4", "nope", "shoes2"]);
        let names: Vec<&str> = catalog
            .preset_items(&preset)
            .map(|item| item.name.as_str())
            .collect();
        assert_eq!(names, vec!["Shirt", "Boots"]);
    }

    #[test]
    fn test_standard_presets_reference_known_items() {
        let catalog = Catalog::standard().unwrap();
        for preset in catalog.presets() {
            assert_eq!(
                catalog.preset_items(preset).count(),
                preset.items.len(),
                "{} names an unknown item",
                preset.id
            );
        }
    }

    #[test]
    fn test_slot_kind_labels() {
        assert_eq!(SlotKind::Hat.id(), "hat");
        assert_eq!(SlotKind::Shoes.label(), "Footwear");
        assert_eq!(SlotKind::ALL[0], SlotKind::Hat);
    }
}
