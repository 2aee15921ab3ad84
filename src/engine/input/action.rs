// Room action definitions and default key bindings

use winit::keyboard::KeyCode;

/// Represents everything the user can ask the room to do
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Action {
    // Character
    WalkLeft,
    WalkRight,
    Jump,

    // Menu navigation
    NextTab,
    PrevTab,
    CursorUp,
    CursorDown,
    CursorLeft,
    CursorRight,
    Select,

    // Outfit
    ToggleCommitPolicy,

    // Meta actions
    Pause,
    Quit,
}

/// Default keyboard bindings
pub fn default_bindings() -> Vec<(KeyCode, Action)> {
    vec![
        // Character (WASD layout, no duck)
        (KeyCode::KeyA, Action::WalkLeft),
        (KeyCode::KeyD, Action::WalkRight),
        (KeyCode::KeyW, Action::Jump),
        (KeyCode::Space, Action::Jump),
        // Menu
        (KeyCode::Tab, Action::NextTab),
        (KeyCode::Backquote, Action::PrevTab),
        (KeyCode::ArrowUp, Action::CursorUp),
        (KeyCode::ArrowDown, Action::CursorDown),
        (KeyCode::ArrowLeft, Action::CursorLeft),
        (KeyCode::ArrowRight, Action::CursorRight),
        (KeyCode::Enter, Action::Select),
        (KeyCode::NumpadEnter, Action::Select),
        // Outfit
        (KeyCode::KeyR, Action::ToggleCommitPolicy),
        // Meta
        (KeyCode::KeyP, Action::Pause),
        (KeyCode::Escape, Action::Quit),
    ]
}
