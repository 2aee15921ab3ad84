use anyhow::Result;
use log::info;
use winit::{
    event::{Event, WindowEvent},
    event_loop::EventLoop,
    window::WindowBuilder,
};

mod engine;
mod game;

use engine::game_loop::GameLoop;
use engine::input::{Action, InputManager};
use game::wardrobe::Catalog;
use game::{DressingRoom, RoomSettings};

fn main() -> Result<()> {
    // Initialize logger
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Opening the dressing room...");

    let mut room = DressingRoom::new(Catalog::standard()?, RoomSettings::default());
    info!(
        "Wardrobe has {} items and {} collections",
        room.catalog().items().len(),
        room.catalog().presets().len()
    );
    let mut input = InputManager::new();
    let mut game_loop = GameLoop::new();

    // Create event loop and window
    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title(room.status_line())
        .with_inner_size(winit::dpi::LogicalSize::new(960, 600))
        .with_resizable(true)
        .build(&event_loop)?;

    info!("Window created successfully");

    let mut title = room.status_line();

    // Main event loop
    event_loop.run(move |event, elwt| {
        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                info!("Close requested, shutting down...");
                shut_down(&mut room, &game_loop);
                elwt.exit();
            }
            Event::WindowEvent {
                event: WindowEvent::KeyboardInput { event, .. },
                ..
            } => {
                input.process_keyboard_event(&event);
            }
            Event::AboutToWait => {
                for action in input.drain() {
                    match action {
                        Action::Quit => {
                            info!("Quit requested, shutting down...");
                            shut_down(&mut room, &game_loop);
                            elwt.exit();
                        }
                        Action::Pause => game_loop.toggle_pause(),
                        // Paused rooms ignore everything but pause and quit
                        _ if game_loop.is_paused() => {}
                        _ => room.handle_action(action),
                    }
                }

                let updates = game_loop.begin_frame();
                for _ in 0..updates {
                    room.update(game_loop.fixed_timestep());
                }

                let status = room.status_line();
                if status != title {
                    window.set_title(&status);
                    title = status;
                }

                window.request_redraw();
            }
            _ => {}
        }
    }).map_err(|e| anyhow::anyhow!("Event loop error: {}", e))?;

    Ok(())
}

/// Stop the room and report how the session went
fn shut_down(room: &mut DressingRoom, game_loop: &GameLoop) {
    room.deactivate();
    info!(
        "Ran {} frames and {} updates",
        game_loop.frame_count(),
        game_loop.update_count()
    );
    info!("Final outfit: {:?}", room.outfit().slots());
}
