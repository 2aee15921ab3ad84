// Character motion controller - walking and jumping on a timer

use std::time::Duration;

use log::{debug, info};

use super::state::{Direction, MotionState, Pose};
use super::stats::MotionStats;
use crate::engine::timer::{TimerHandle, Timers};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MotionEvent {
    /// One walk step
    Step,
    /// Jump window is over
    JumpEnd,
}

/// Owns the character's position and animates it
///
/// The walk loop is a repeating timer that lives in `walk_timer` for exactly
/// as long as the character walks. Dropping the controller drops its timers.
#[derive(Debug)]
pub struct MotionController {
    stats: MotionStats,
    state: MotionState,
    timers: Timers<MotionEvent>,
    walk_timer: Option<TimerHandle>,
    jump_timer: Option<TimerHandle>,
}

impl Default for MotionController {
    fn default() -> Self {
        Self::new(MotionStats::default())
    }
}

impl MotionController {
    pub fn new(stats: MotionStats) -> Self {
        Self {
            state: MotionState::new(stats.start_position),
            stats,
            timers: Timers::new(),
            walk_timer: None,
            jump_timer: None,
        }
    }

    /// Current motion snapshot
    pub fn state(&self) -> MotionState {
        self.state
    }

    pub fn position(&self) -> f32 {
        self.state.position
    }

    pub fn is_walking(&self) -> bool {
        self.state.is_walking
    }

    pub fn is_jumping(&self) -> bool {
        self.state.is_jumping
    }

    pub fn pose(&self) -> Pose {
        self.state.pose()
    }

    /// Whether a walk request would start a walk
    pub fn can_walk(&self) -> bool {
        !self.is_walking()
    }

    /// Whether a jump request would start a jump
    pub fn can_jump(&self) -> bool {
        !self.is_jumping()
    }

    /// Start jumping. Does nothing while already in the air.
    pub fn jump(&mut self) -> bool {
        if !self.can_jump() {
            return false;
        }

        self.state.is_jumping = true;
        self.jump_timer = Some(self.timers.after(self.stats.jump_duration, MotionEvent::JumpEnd));
        info!("Jump");
        true
    }

    /// Start walking in `direction`
    ///
    /// Walking while already walking restarts the step loop in the new direction.
    pub fn walk(&mut self, direction: Direction) {
        self.cancel_walk_timer();

        self.state.direction = direction;
        self.state.is_walking = true;
        self.walk_timer = Some(self.timers.every(self.stats.step_interval, MotionEvent::Step));
        info!("Walking {:?} from {}", direction, self.state.position);
    }

    /// Stop every animation, e.g. when the character leaves the stage
    pub fn deactivate(&mut self) {
        debug!("Deactivating with {} pending timers", self.pending_timers());
        self.cancel_walk_timer();
        if let Some(handle) = self.jump_timer.take() {
            self.timers.cancel(handle);
        }
        self.state.is_walking = false;
        self.state.is_jumping = false;
    }

    /// Advance motion timers by `dt`
    pub fn update(&mut self, dt: Duration) {
        self.timers.advance(dt);
        while let Some((_, event)) = self.timers.pop_due() {
            match event {
                MotionEvent::Step => self.step(),
                MotionEvent::JumpEnd => {
                    self.state.is_jumping = false;
                    self.jump_timer = None;
                }
            }
        }
    }

    fn step(&mut self) {
        let next = self.state.position + self.state.direction.sign() * self.stats.step;

        // The step that would reach a bound is dropped, not clamped
        if next >= self.stats.max_position || next <= self.stats.min_position {
            info!("Stopped at {}", self.state.position);
            self.stop_walking();
            return;
        }

        self.state.position = next;
    }

    fn stop_walking(&mut self) {
        self.state.is_walking = false;
        self.cancel_walk_timer();
    }

    fn cancel_walk_timer(&mut self) {
        if let Some(handle) = self.walk_timer.take() {
            self.timers.cancel(handle);
            debug!("Walk loop stopped");
        }
    }

    /// Number of pending motion timers
    pub fn pending_timers(&self) -> usize {
        self.timers.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const TICK: Duration = Duration::from_millis(50);

    #[test]
    fn test_starts_idle_in_the_middle() {
        let motion = MotionController::default();
        assert_relative_eq!(motion.position(), 50.0);
        assert_eq!(motion.state().direction, Direction::Right);
        assert_eq!(motion.pose(), Pose::Idle);
        assert_eq!(motion.pending_timers(), 0);
    }

    #[test]
    fn test_walk_right_stops_before_upper_bound() {
        let mut motion = MotionController::default();
        motion.walk(Direction::Right);

        let mut last = motion.position();
        while motion.is_walking() {
            motion.update(TICK);
            if motion.is_walking() {
                assert!(motion.position() > last);
                last = motion.position();
            }
        }

        // 90 would reach the bound, so the character stays on 88
        assert_relative_eq!(motion.position(), 88.0);
        assert_eq!(motion.pending_timers(), 0);

        motion.update(TICK * 10);
        assert_relative_eq!(motion.position(), 88.0);
    }

    #[test]
    fn test_walk_left_stops_before_lower_bound() {
        let mut motion = MotionController::default();
        motion.walk(Direction::Left);
        motion.update(Duration::from_secs(10));

        assert!(!motion.is_walking());
        assert_relative_eq!(motion.position(), 12.0);
        assert_eq!(motion.state().direction, Direction::Left);
        assert!(motion.state().flip_horizontal());
    }

    #[test]
    fn test_walk_steps_on_each_tick() {
        let mut motion = MotionController::default();
        motion.walk(Direction::Right);

        motion.update(Duration::from_millis(49));
        assert_relative_eq!(motion.position(), 50.0);

        motion.update(Duration::from_millis(1));
        assert_relative_eq!(motion.position(), 52.0);

        motion.update(TICK * 3);
        assert_relative_eq!(motion.position(), 58.0);
    }

    #[test]
    fn test_walk_from_bound_stops_on_first_step() {
        let mut motion = MotionController::default();
        motion.walk(Direction::Right);
        motion.update(Duration::from_secs(10));

        motion.walk(Direction::Right);
        assert!(motion.is_walking());
        motion.update(TICK);

        assert!(!motion.is_walking());
        assert_relative_eq!(motion.position(), 88.0);
    }

    #[test]
    fn test_walk_again_replaces_the_loop() {
        let mut motion = MotionController::default();
        motion.walk(Direction::Right);
        motion.update(TICK * 2);
        assert_relative_eq!(motion.position(), 54.0);

        motion.walk(Direction::Left);
        assert_eq!(motion.pending_timers(), 1);

        motion.update(TICK);
        assert_relative_eq!(motion.position(), 52.0);
    }

    #[test]
    fn test_jump_ends_after_duration() {
        let mut motion = MotionController::default();
        assert!(motion.jump());
        assert!(motion.is_jumping());
        assert!(!motion.can_jump());

        motion.update(Duration::from_millis(599));
        assert!(motion.is_jumping());

        motion.update(Duration::from_millis(1));
        assert!(!motion.is_jumping());
        assert_eq!(motion.pending_timers(), 0);
    }

    #[test]
    fn test_jump_while_jumping_is_ignored() {
        let mut motion = MotionController::default();
        motion.jump();
        motion.update(Duration::from_millis(300));

        assert!(!motion.jump());
        assert!(motion.is_jumping());
        assert_eq!(motion.pending_timers(), 1);

        // The original jump still ends on time
        motion.update(Duration::from_millis(300));
        assert!(!motion.is_jumping());
    }

    #[test]
    fn test_jump_while_walking() {
        let mut motion = MotionController::default();
        motion.walk(Direction::Right);
        motion.jump();
        assert_eq!(motion.pose(), Pose::Jumping);

        motion.update(Duration::from_millis(600));
        assert_eq!(motion.pose(), Pose::Walking);
        assert_relative_eq!(motion.position(), 50.0 + 2.0 * 12.0);
    }

    #[test]
    fn test_deactivate_cancels_everything() {
        let mut motion = MotionController::default();
        motion.walk(Direction::Left);
        motion.jump();
        motion.update(TICK);

        motion.deactivate();
        assert_eq!(motion.pending_timers(), 0);
        assert!(!motion.is_walking());
        assert!(!motion.is_jumping());

        let position = motion.position();
        motion.update(TICK * 10);
        assert_relative_eq!(motion.position(), position);
    }

    #[test]
    fn test_can_walk_mirrors_walking() {
        let mut motion = MotionController::default();
        assert!(motion.can_walk());
        motion.walk(Direction::Right);
        assert!(!motion.can_walk());
    }
}
