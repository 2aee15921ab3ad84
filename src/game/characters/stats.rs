// Character motion stats - one fixed table for the dressing room character

use std::time::Duration;

/// Fixed motion tuning for the character
///
/// Positions are percentages of the stage width.
#[derive(Debug, Clone)]
pub struct MotionStats {
    // Walking
    /// Where the character stands when the room opens
    pub start_position: f32,
    /// Distance covered by one walk step
    pub step: f32,
    /// Walking stops before reaching this position
    pub min_position: f32,
    /// Walking stops before reaching this position
    pub max_position: f32,
    /// Time between walk steps
    pub step_interval: Duration,

    // Jumping
    /// How long a jump lasts
    pub jump_duration: Duration,
}

/// The one set of motion stats
pub const BASE_MOTION: MotionStats = MotionStats {
    start_position: 50.0,
    step: 2.0,
    min_position: 10.0,
    max_position: 90.0,
    step_interval: Duration::from_millis(50),

    jump_duration: Duration::from_millis(600),
};

impl Default for MotionStats {
    fn default() -> Self {
        BASE_MOTION
    }
}
