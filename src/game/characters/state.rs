// Character motion state

/// Which way the character faces and walks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    Left,
    #[default]
    Right,
}

impl Direction {
    /// Sign of a step in this direction
    pub fn sign(&self) -> f32 {
        match self {
            Self::Left => -1.0,
            Self::Right => 1.0,
        }
    }
}

/// Snapshot of where the character is and what it's doing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionState {
    /// Horizontal position, percent of stage width
    pub position: f32,
    pub direction: Direction,
    pub is_walking: bool,
    pub is_jumping: bool,
}

impl MotionState {
    pub fn new(position: f32) -> Self {
        Self {
            position,
            direction: Direction::Right,
            is_walking: false,
            is_jumping: false,
        }
    }

    /// Get the pose to display
    pub fn pose(&self) -> Pose {
        if self.is_jumping {
            Pose::Jumping
        } else if self.is_walking {
            Pose::Walking
        } else {
            Pose::Idle
        }
    }

    /// Whether the sprite is mirrored
    pub fn flip_horizontal(&self) -> bool {
        self.direction == Direction::Left
    }
}

/// What the character looks like it's doing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Pose {
    #[default]
    Idle,
    Walking,
    /// Takes priority over walking; the character can jump mid-walk
    Jumping,
}

impl Pose {
    /// Get the animation name for this pose
    pub fn animation_name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Walking => "walk",
            Self::Jumping => "jump",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_state_is_idle_facing_right() {
        let state = MotionState::new(50.0);
        assert_eq!(state.pose(), Pose::Idle);
        assert_eq!(state.direction, Direction::Right);
        assert!(!state.flip_horizontal());
    }

    #[test]
    fn test_jumping_beats_walking() {
        let mut state = MotionState::new(50.0);
        state.is_walking = true;
        assert_eq!(state.pose(), Pose::Walking);

        state.is_jumping = true;
        assert_eq!(state.pose(), Pose::Jumping);
    }

    #[test]
    fn test_facing_left_flips() {
        let mut state = MotionState::new(50.0);
        state.direction = Direction::Left;
        assert!(state.flip_horizontal());
    }

    #[test]
    fn test_direction_sign() {
        assert_eq!(Direction::Left.sign(), -1.0);
        assert_eq!(Direction::Right.sign(), 1.0);
    }

    #[test]
    fn test_animation_names() {
        assert_eq!(Pose::Idle.animation_name(), "idle");
        assert_eq!(Pose::Walking.animation_name(), "walk");
        assert_eq!(Pose::Jumping.animation_name(), "jump");
    }
}
