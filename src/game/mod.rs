// Room modules: character, wardrobe, menu, view

pub mod characters;
pub mod menu;
pub mod room;
pub mod view;
pub mod wardrobe;

pub use room::{DressingRoom, RoomSettings};
