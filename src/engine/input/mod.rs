// Input handling system
//
// Maps keyboard input to room actions.
//
// ## Architecture
//
// - `action`: Defines room actions and default key bindings
// - `config`: Key binding configuration and remapping
// - `manager`: Collects the actions pressed during a frame
//
// ## Usage Example
//
// ```rust
// use engine::input::{InputManager, Action};
//
// let mut input_manager = InputManager::new();
//
// // In your event loop, process keyboard events
// input_manager.process_keyboard_event(&key_event);
//
// // Once per frame, hand the pressed actions to the room
// for action in input_manager.drain() {
//     room.handle_action(action);
// }
// ```

pub mod action;
pub mod config;
pub mod manager;

// Re-export commonly used types
pub use action::Action;
pub use manager::InputManager;

// Re-export for future use
#[allow(unused_imports)]
pub use config::InputConfig;
