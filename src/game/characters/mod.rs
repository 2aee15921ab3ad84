// Character system
//
// This module contains everything related to the character on stage:
// - Motion stats
// - Motion state and poses
// - Motion controller for walking and jumping

pub mod motion;
pub mod state;
pub mod stats;

// Re-export commonly used types
pub use motion::MotionController;
pub use state::{Direction, Pose};
pub use stats::MotionStats;

// Re-export for future use
#[allow(unused_imports)]
pub use state::MotionState;
#[allow(unused_imports)]
pub use stats::BASE_MOTION;
