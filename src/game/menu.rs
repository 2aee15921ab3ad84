// Tabbed menu - home screen, wardrobe and collections

use log::info;

use super::wardrobe::{Catalog, ClothingItem, ItemId, OutfitPreset, SlotKind};

/// The pages of the menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tab {
    #[default]
    Home,
    Wardrobe,
    Collections,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Home, Tab::Wardrobe, Tab::Collections];

    pub fn title(&self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Wardrobe => "Wardrobe",
            Self::Collections => "Collections",
        }
    }

    fn index(&self) -> usize {
        match self {
            Self::Home => 0,
            Self::Wardrobe => 1,
            Self::Collections => 2,
        }
    }

    pub fn next(&self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(&self) -> Tab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

/// Quick-pick shortcuts on the home page
const HOME_SHORTCUTS: [Tab; 2] = [Tab::Wardrobe, Tab::Collections];

/// Cursor movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorMove {
    Up,
    Down,
    Left,
    Right,
}

/// What selecting the entry under the cursor asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuCommand {
    ShowTab(Tab),
    ToggleItem(ItemId),
    ApplyPreset(String),
}

/// Menu navigation state
#[derive(Debug, Default)]
pub struct Menu {
    tab: Tab,
    /// Index into `HOME_SHORTCUTS`
    home_cursor: usize,
    /// Wardrobe row, indexes `SlotKind::ALL`
    row: usize,
    /// Wardrobe column, indexes the row's items
    column: usize,
    /// Collections cursor, indexes the catalog presets
    preset_cursor: usize,
}

impl Menu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tab(&self) -> Tab {
        self.tab
    }

    pub fn show(&mut self, tab: Tab) {
        if self.tab != tab {
            self.tab = tab;
            info!("Showing {}", tab.title());
        }
    }

    pub fn next_tab(&mut self) {
        self.show(self.tab.next());
    }

    pub fn prev_tab(&mut self) {
        self.show(self.tab.prev());
    }

    /// The slot kind of the wardrobe row under the cursor
    pub fn selected_kind(&self) -> SlotKind {
        SlotKind::ALL[self.row]
    }

    /// The wardrobe item under the cursor
    pub fn selected_item<'a>(&self, catalog: &'a Catalog) -> Option<&'a ClothingItem> {
        catalog.items_of_kind(self.selected_kind()).nth(self.column)
    }

    /// The collection under the cursor
    pub fn selected_preset<'a>(&self, catalog: &'a Catalog) -> Option<&'a OutfitPreset> {
        catalog.presets().get(self.preset_cursor)
    }

    /// The home shortcut under the cursor
    pub fn selected_shortcut(&self) -> Tab {
        HOME_SHORTCUTS[self.home_cursor]
    }

    /// Move the cursor on the current page, stopping at the edges
    pub fn move_cursor(&mut self, movement: CursorMove, catalog: &Catalog) {
        match self.tab {
            Tab::Home => {
                self.home_cursor = match movement {
                    CursorMove::Up | CursorMove::Left => self.home_cursor.saturating_sub(1),
                    CursorMove::Down | CursorMove::Right => {
                        (self.home_cursor + 1).min(HOME_SHORTCUTS.len() - 1)
                    }
                };
            }
            Tab::Wardrobe => {
                match movement {
                    CursorMove::Up => self.row = self.row.saturating_sub(1),
                    CursorMove::Down => self.row = (self.row + 1).min(SlotKind::ALL.len() - 1),
                    CursorMove::Left => self.column = self.column.saturating_sub(1),
                    CursorMove::Right => self.column += 1,
                }
                // Rows have different lengths
                let row_len = catalog.items_of_kind(self.selected_kind()).count();
                self.column = self.column.min(row_len.saturating_sub(1));
            }
            Tab::Collections => {
                let last = catalog.presets().len().saturating_sub(1);
                match movement {
                    CursorMove::Up => self.preset_cursor = self.preset_cursor.saturating_sub(1),
                    CursorMove::Down => self.preset_cursor = (self.preset_cursor + 1).min(last),
                    CursorMove::Left | CursorMove::Right => {}
                }
            }
        }
    }

    /// Activate the entry under the cursor
    pub fn select(&mut self, catalog: &Catalog) -> Option<MenuCommand> {
        match self.tab {
            Tab::Home => {
                let tab = self.selected_shortcut();
                self.show(tab);
                Some(MenuCommand::ShowTab(tab))
            }
            Tab::Wardrobe => self
                .selected_item(catalog)
                .map(|item| MenuCommand::ToggleItem(item.id.clone())),
            Tab::Collections => self
                .selected_preset(catalog)
                .map(|preset| MenuCommand::ApplyPreset(preset.id.clone())),
        }
    }
}
