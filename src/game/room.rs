// The dressing room - owns every piece of room state and routes actions to it

use std::rc::Rc;
use std::time::Duration;

use log::{debug, warn};

use super::characters::{Direction, MotionController, MotionStats};
use super::menu::{CursorMove, Menu, MenuCommand, Tab};
use super::view::CharacterView;
use super::wardrobe::{Catalog, OutfitSettings, OutfitStore};
use crate::engine::input::Action;

/// Tunables for the whole room
#[derive(Debug, Clone, Default)]
pub struct RoomSettings {
    pub outfit: OutfitSettings,
    pub motion: MotionStats,
}

/// Top-level room state
#[derive(Debug)]
pub struct DressingRoom {
    catalog: Rc<Catalog>,
    outfit: OutfitStore,
    motion: MotionController,
    menu: Menu,
}

impl DressingRoom {
    pub fn new(catalog: Catalog, settings: RoomSettings) -> Self {
        let catalog = Rc::new(catalog);
        Self {
            outfit: OutfitStore::new(Rc::clone(&catalog), settings.outfit),
            motion: MotionController::new(settings.motion),
            menu: Menu::new(),
            catalog,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn outfit(&self) -> &OutfitStore {
        &self.outfit
    }

    /// React to one input action
    pub fn handle_action(&mut self, action: Action) {
        match action {
            // Walk and jump are ignored while already underway
            Action::WalkLeft => self.walk(Direction::Left),
            Action::WalkRight => self.walk(Direction::Right),
            Action::Jump => self.jump(),

            Action::NextTab => self.menu.next_tab(),
            Action::PrevTab => self.menu.prev_tab(),
            Action::CursorUp => self.move_cursor(CursorMove::Up),
            Action::CursorDown => self.move_cursor(CursorMove::Down),
            Action::CursorLeft => self.move_cursor(CursorMove::Left),
            Action::CursorRight => self.move_cursor(CursorMove::Right),
            Action::Select => self.select(),

            Action::ToggleCommitPolicy => {
                let policy = self.outfit.commit_policy().toggled();
                self.outfit.set_commit_policy(policy);
            }

            // Handled by the event loop
            Action::Pause | Action::Quit => {}
        }
    }

    fn walk(&mut self, direction: Direction) {
        if self.motion.can_walk() {
            self.motion.walk(direction);
        } else {
            debug!("Already walking, ignoring walk {:?}", direction);
        }
    }

    fn jump(&mut self) {
        if self.motion.can_jump() {
            self.motion.jump();
        } else {
            debug!("Already jumping, ignoring jump");
        }
    }

    fn move_cursor(&mut self, movement: CursorMove) {
        self.menu.move_cursor(movement, &self.catalog);
    }

    fn select(&mut self) {
        let Some(command) = self.menu.select(&self.catalog) else {
            return;
        };

        match command {
            MenuCommand::ShowTab(tab) => debug!("Switched to {}", tab.title()),
            MenuCommand::ToggleItem(id) => match self.catalog.item(&id) {
                Some(item) => {
                    self.outfit.toggle_item(item);
                }
                None => warn!("Menu selected unknown item '{}'", id),
            },
            MenuCommand::ApplyPreset(id) => match self.catalog.preset(&id) {
                Some(preset) => {
                    self.outfit.apply_preset(preset);
                }
                None => warn!("Menu selected unknown preset '{}'", id),
            },
        }
        debug!("{} outfit changes pending", self.outfit.pending_changes());
    }

    /// Advance every room timer by one fixed step
    pub fn update(&mut self, dt: Duration) {
        self.outfit.update(dt);
        self.motion.update(dt);
    }

    /// Stop all motion, e.g. before closing
    pub fn deactivate(&mut self) {
        self.motion.deactivate();
    }

    pub fn view(&self) -> CharacterView {
        CharacterView::capture(&self.outfit, &self.motion)
    }

    /// One line describing the room, used as the window title
    pub fn status_line(&self) -> String {
        let tab = self.menu.tab();
        let mut line = format!("Dressing Room [{}] {}", tab.title(), self.view().summary());

        match tab {
            Tab::Home => {
                line.push_str(&format!(" | go to: {}", self.menu.selected_shortcut().title()));
            }
            Tab::Wardrobe => {
                if let Some(item) = self.menu.selected_item(&self.catalog) {
                    let mark = if self.outfit.is_equipped(&item.id) { "*" } else { "" };
                    line.push_str(&format!(
                        " | {}: {} {}{}",
                        self.menu.selected_kind().label(),
                        item.glyph,
                        item.name,
                        mark
                    ));
                }
                line.push_str(&format!(" | {}", self.view().look_line()));
            }
            Tab::Collections => {
                if let Some(preset) = self.menu.selected_preset(&self.catalog) {
                    let glyphs: Vec<&str> = self
                        .catalog
                        .preset_items(preset)
                        .map(|item| item.glyph.as_str())
                        .collect();
                    line.push_str(&format!(
                        " | {}: {} ({})",
                        preset.name,
                        preset.description,
                        glyphs.join(" ")
                    ));
                }
            }
        }
        line
    }
}
