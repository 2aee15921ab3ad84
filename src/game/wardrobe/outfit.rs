// Outfit state - what the character is wearing and how it changes

use std::rc::Rc;
use std::time::Duration;

use log::{debug, info, warn};

use super::catalog::{Catalog, ClothingItem, ItemId, OutfitPreset, SlotKind, DEFAULT_PRESET};
use crate::engine::timer::{TimerHandle, Timers};

/// What happens when a change is requested while another is still in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CommitPolicy {
    /// Every change commits on its own timer; the last one to fire wins
    Overlap,
    /// A new change cancels every change still waiting to commit
    ReplacePending,
}

/// Tunables for outfit changes
#[derive(Debug, Clone)]
pub struct OutfitSettings {
    /// How long the change animation plays before the outfit swaps
    pub change_delay: Duration,
    pub commit_policy: CommitPolicy,
}

pub const DEFAULT_OUTFIT_SETTINGS: OutfitSettings = OutfitSettings {
    change_delay: Duration::from_millis(250),
    commit_policy: CommitPolicy::Overlap,
};

impl CommitPolicy {
    /// The other policy
    pub fn toggled(&self) -> CommitPolicy {
        match self {
            Self::Overlap => Self::ReplacePending,
            Self::ReplacePending => Self::Overlap,
        }
    }
}

impl Default for OutfitSettings {
    fn default() -> Self {
        DEFAULT_OUTFIT_SETTINGS
    }
}

/// The four equip slots. Each holds the id of an item of the matching kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OutfitSlots {
    hat: Option<ItemId>,
    top: Option<ItemId>,
    bottom: Option<ItemId>,
    shoes: Option<ItemId>,
}

impl OutfitSlots {
    #[cfg(test)]
    pub fn new(hat: Option<&str>, top: Option<&str>, bottom: Option<&str>, shoes: Option<&str>) -> Self {
        Self {
            hat: hat.map(str::to_string),
            top: top.map(str::to_string),
            bottom: bottom.map(str::to_string),
            shoes: shoes.map(str::to_string),
        }
    }

    /// The item id held in a slot
    pub fn get(&self, kind: SlotKind) -> Option<&str> {
        self.slot(kind).as_deref()
    }

    fn slot(&self, kind: SlotKind) -> &Option<ItemId> {
        match kind {
            SlotKind::Hat => &self.hat,
            SlotKind::Top => &self.top,
            SlotKind::Bottom => &self.bottom,
            SlotKind::Shoes => &self.shoes,
        }
    }

    fn slot_mut(&mut self, kind: SlotKind) -> &mut Option<ItemId> {
        match kind {
            SlotKind::Hat => &mut self.hat,
            SlotKind::Top => &mut self.top,
            SlotKind::Bottom => &mut self.bottom,
            SlotKind::Shoes => &mut self.shoes,
        }
    }

    /// Check if any slot holds `item_id`
    pub fn contains(&self, item_id: &str) -> bool {
        SlotKind::ALL
            .iter()
            .any(|kind| self.get(*kind) == Some(item_id))
    }
}

/// A change waiting for its delay to run out
#[derive(Debug, Clone)]
enum PendingChange {
    Toggle { kind: SlotKind, item_id: ItemId },
    Apply(OutfitPreset),
}

/// Owns the outfit and applies changes after the change animation
///
/// Changes are decided when they commit, not when they are requested: a
/// toggle looks at the slot as it is at commit time, so two toggles of the
/// same item in flight at once cancel each other out.
#[derive(Debug)]
pub struct OutfitStore {
    catalog: Rc<Catalog>,
    settings: OutfitSettings,
    slots: OutfitSlots,
    /// Set while a change animation plays
    changing: bool,
    timers: Timers<PendingChange>,
}

impl OutfitStore {
    /// Create a store wearing the default preset
    pub fn new(catalog: Rc<Catalog>, settings: OutfitSettings) -> Self {
        let mut store = Self {
            catalog,
            settings,
            slots: OutfitSlots::default(),
            changing: false,
            timers: Timers::new(),
        };

        let default_preset = store.catalog.preset(DEFAULT_PRESET).cloned();
        match default_preset {
            Some(preset) => store.apply_preset_now(&preset),
            None => warn!("Default preset '{}' not in catalog, starting empty", DEFAULT_PRESET),
        }

        store
    }

    pub fn commit_policy(&self) -> CommitPolicy {
        self.settings.commit_policy
    }

    /// Change how new requests treat changes still in flight
    pub fn set_commit_policy(&mut self, policy: CommitPolicy) {
        if self.settings.commit_policy != policy {
            self.settings.commit_policy = policy;
            info!("Outfit changes now use {:?}", policy);
        }
    }

    /// Current slot assignments
    pub fn slots(&self) -> &OutfitSlots {
        &self.slots
    }

    /// Check if a change animation is playing
    pub fn is_changing(&self) -> bool {
        self.changing
    }

    /// Number of changes waiting to commit
    pub fn pending_changes(&self) -> usize {
        self.timers.len()
    }

    /// Put an item on, or take it off if it's already worn
    pub fn toggle_item(&mut self, item: &ClothingItem) -> TimerHandle {
        debug!("Toggle {} requested", item.id);
        self.schedule(PendingChange::Toggle {
            kind: item.kind,
            item_id: item.id.clone(),
        })
    }

    /// Replace the whole outfit with a preset
    pub fn apply_preset(&mut self, preset: &OutfitPreset) -> TimerHandle {
        debug!("Preset {} requested", preset.id);
        self.schedule(PendingChange::Apply(preset.clone()))
    }

    /// Replace the whole outfit with a preset immediately, without animation
    pub fn apply_preset_now(&mut self, preset: &OutfitPreset) {
        self.slots = self.preset_slots(preset);
        info!("Wearing {}", preset.name);
    }

    fn schedule(&mut self, change: PendingChange) -> TimerHandle {
        if self.settings.commit_policy == CommitPolicy::ReplacePending && !self.timers.is_empty() {
            debug!("Replacing {} pending changes", self.timers.len());
            self.timers.cancel_all();
        }

        self.changing = true;
        self.timers.after(self.settings.change_delay, change)
    }

    /// Advance change timers, committing every change that is due
    pub fn update(&mut self, dt: Duration) {
        self.timers.advance(dt);
        while let Some((_, change)) = self.timers.pop_due() {
            self.commit(change);
        }
    }

    fn commit(&mut self, change: PendingChange) {
        match change {
            PendingChange::Toggle { kind, item_id } => self.commit_toggle(kind, item_id),
            PendingChange::Apply(preset) => self.apply_preset_now(&preset),
        }
        self.changing = false;
    }

    fn commit_toggle(&mut self, kind: SlotKind, item_id: ItemId) {
        if self.slots.get(kind) == Some(item_id.as_str()) {
            *self.slots.slot_mut(kind) = None;
            info!("Took off {}", item_id);
            return;
        }

        // Never put an id in a slot it can't be resolved from
        match self.catalog.item(&item_id) {
            Some(item) if item.kind == kind => {
                info!("Put on {} ({})", item.name, kind.id());
                *self.slots.slot_mut(kind) = Some(item_id);
            }
            _ => warn!("Ignoring unknown {} item '{}'", kind.id(), item_id),
        }
    }

    /// Slots as they look after applying `preset` to an empty outfit
    fn preset_slots(&self, preset: &OutfitPreset) -> OutfitSlots {
        let mut slots = OutfitSlots::default();
        for id in &preset.items {
            match self.catalog.item(id) {
                Some(item) => *slots.slot_mut(item.kind) = Some(item.id.clone()),
                None => debug!("Preset {} skips unknown item '{}'", preset.id, id),
            }
        }
        slots
    }

    /// The item worn in a slot, or `None` if the slot is empty or its id is stale
    pub fn resolve(&self, kind: SlotKind) -> Option<&ClothingItem> {
        self.slots.get(kind).and_then(|id| self.catalog.item(id))
    }

    /// Check if an item is currently worn
    pub fn is_equipped(&self, item_id: &str) -> bool {
        self.slots.contains(item_id)
    }

    /// Worn items in slot order
    pub fn equipped(&self) -> Vec<(SlotKind, &ClothingItem)> {
        SlotKind::ALL
            .iter()
            .filter_map(|kind| self.resolve(*kind).map(|item| (*kind, item)))
            .collect()
    }
}
