//! Per-frame simulation step
//!
//! A frame is split in two so the front end can draw between them:
//! [`scroll_world`] runs before the frame is rendered, [`advance`] after.
//! [`tick`] runs both back to back for headless use.

use super::collision::resolve;
use super::kinematics::integrate;
use super::state::{GamePhase, GameState};
use crate::consts::SCROLL_FACTOR;

/// Commands from the front end
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    MoveLeft,
    MoveRight,
    /// Key released
    StopHorizontal,
    /// Start a new run after the current one ended
    Restart,
}

/// What happened during one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Run continues; `culled` platforms left the screen and were scored
    Running { culled: usize },
    /// Doodler fell off the bottom this tick
    Ended { final_score: u64 },
    /// Run had already ended; nothing was simulated
    Idle,
}

/// Apply a movement intent to the doodler. Velocity is overwritten, never
/// accumulated, so repeated key events are harmless.
///
/// `Restart` is not a movement and is handled by the director.
pub fn apply_intent(state: &mut GameState, intent: Intent) {
    match intent {
        Intent::MoveLeft => state.doodler.move_left(),
        Intent::MoveRight => state.doodler.move_right(),
        Intent::StopHorizontal => state.doodler.stop_horizontal(),
        Intent::Restart => {}
    }
}

/// Scroll the world while the doodler rises through the upper half.
///
/// Platforms move down twice as fast as the doodler rises and one new
/// platform is generated above the field. Returns the scroll distance.
pub fn scroll_world(state: &mut GameState) -> Option<f32> {
    if state.phase != GamePhase::Running {
        return None;
    }

    let doodler = &state.doodler;
    if doodler.pos.y >= state.canvas.mid_height() || doodler.vel.y >= 0.0 {
        return None;
    }

    let scroll = -doodler.vel.y * SCROLL_FACTOR;
    state.platforms.bulk_shift(scroll);
    state.world.extend(&mut state.platforms);
    Some(scroll)
}

/// Move the doodler, resolve landings, then either end the run or cull and
/// score the platforms that left the screen.
pub fn advance(state: &mut GameState) -> TickOutcome {
    if state.phase != GamePhase::Running {
        return TickOutcome::Idle;
    }

    state.time_ticks += 1;

    integrate(&mut state.doodler, state.canvas.width);
    resolve(&mut state.doodler, &state.platforms, state.canvas.height);

    if state.doodler.pos.y > state.canvas.height {
        state.phase = GamePhase::Ended;
        return TickOutcome::Ended {
            final_score: state.score,
        };
    }

    let culled = state.platforms.cull_below(state.canvas.height);
    state.score += culled as u64;
    TickOutcome::Running { culled }
}

/// Advance the game state by one full tick
pub fn tick(state: &mut GameState) -> TickOutcome {
    scroll_world(state);
    advance(state)
}

/// Steering for demo/idle play: head for the nearest platform below the
/// doodler while falling, otherwise hold position.
pub fn idle_intent(state: &GameState) -> Intent {
    let doodler = &state.doodler;
    if doodler.vel.y <= 0.0 {
        return Intent::StopHorizontal;
    }

    let target = state
        .platforms
        .iter()
        .filter(|p| p.top() >= doodler.bottom())
        .min_by(|a, b| a.top().total_cmp(&b.top()));

    let Some(target) = target else {
        return Intent::StopHorizontal;
    };

    let offset = target.center_x() - doodler.center_x();
    let dead_zone = doodler.move_speed;
    if offset < -dead_zone {
        Intent::MoveLeft
    } else if offset > dead_zone {
        Intent::MoveRight
    } else {
        Intent::StopHorizontal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::settings::Settings;
    use crate::sim::state::{Facing, Platform};
    use glam::Vec2;

    fn new_state(seed: u64) -> GameState {
        GameState::new(Settings::default(), seed)
    }

    #[test]
    fn test_first_fall_bounces_off_a_platform() {
        let mut state = new_state(12345);
        // At worst the doodler falls 80 - 50 = 30px onto the spawn anchor
        let mut bounced = false;
        for _ in 0..200 {
            tick(&mut state);
            if state.doodler.vel.y < 0.0 {
                bounced = true;
                break;
            }
        }
        assert!(bounced);
        assert_eq!(state.doodler.vel.y, -JUMP_SPEED);
        let perch = state.doodler.pos.y + DOODLER_HEIGHT;
        assert!(state.platforms.iter().any(|p| p.top() == perch));
        assert_eq!(state.phase, GamePhase::Running);
    }

    #[test]
    fn test_scroll_only_while_rising_in_upper_half() {
        let mut state = new_state(1);
        let before: Vec<f32> = state.platforms.iter().map(|p| p.pos.y).collect();

        // Lower half, rising: no scroll
        state.doodler.vel.y = -2.0;
        assert_eq!(scroll_world(&mut state), None);

        // Upper half, falling: no scroll
        state.doodler.pos.y = 100.0;
        state.doodler.vel.y = 1.0;
        assert_eq!(scroll_world(&mut state), None);

        let after: Vec<f32> = state.platforms.iter().map(|p| p.pos.y).collect();
        assert_eq!(before, after);
    }

    #[test]
    fn test_scroll_shifts_and_extends() {
        let mut state = new_state(1);
        let count = state.platforms.len();
        let first_y = state.platforms.get(0).unwrap().pos.y;
        let top_y = state.platforms.topmost().unwrap().pos.y;

        state.doodler.pos.y = 100.0;
        state.doodler.vel.y = -2.0;
        assert_eq!(scroll_world(&mut state), Some(4.0));

        assert_eq!(state.platforms.len(), count + 1);
        assert_eq!(state.platforms.get(0).unwrap().pos.y, first_y + 4.0);
        assert_eq!(
            state.platforms.last().unwrap().pos.y,
            top_y + 4.0 - 2.0 * state.world.gap()
        );
    }

    #[test]
    fn test_culled_platforms_are_scored() {
        let mut state = new_state(2);
        state.platforms.clear();
        let size = Vec2::new(PLATFORM_WIDTH, PLATFORM_HEIGHT);
        state.platforms.append(Platform::new(0.0, 577.0, size));
        state.platforms.append(Platform::new(0.0, 600.0, size));
        state.platforms.append(Platform::new(0.0, 10.0, size));
        state.score = 5;

        let outcome = advance(&mut state);

        assert_eq!(outcome, TickOutcome::Running { culled: 2 });
        assert_eq!(state.score, 7);
        assert_eq!(state.platforms.len(), 1);
    }

    #[test]
    fn test_falling_off_ends_run() {
        let mut state = new_state(3);
        state.score = 9;
        state.doodler.pos.y = 600.0;
        state.doodler.vel.y = 5.0;

        assert_eq!(tick(&mut state), TickOutcome::Ended { final_score: 9 });
        assert_eq!(state.phase, GamePhase::Ended);

        // Ended runs are frozen
        let y = state.doodler.pos.y;
        assert_eq!(tick(&mut state), TickOutcome::Idle);
        assert_eq!(state.doodler.pos.y, y);
        assert_eq!(state.score, 9);
    }

    #[test]
    fn test_intents_set_velocity() {
        let mut state = new_state(4);
        apply_intent(&mut state, Intent::MoveLeft);
        apply_intent(&mut state, Intent::MoveLeft);
        assert_eq!(state.doodler.vel.x, -MOVE_SPEED);
        assert_eq!(state.doodler.facing, Facing::Left);

        apply_intent(&mut state, Intent::StopHorizontal);
        assert_eq!(state.doodler.vel.x, 0.0);

        apply_intent(&mut state, Intent::Restart);
        assert_eq!(state.doodler.vel.x, 0.0);
    }

    #[test]
    fn test_idle_intent_steers_toward_platform_below() {
        let mut state = new_state(5);
        state.platforms.clear();
        let size = Vec2::new(PLATFORM_WIDTH, PLATFORM_HEIGHT);
        state.platforms.append(Platform::new(20.0, 500.0, size));

        state.doodler.pos = Vec2::new(200.0, 300.0);
        state.doodler.vel.y = 1.0;
        assert_eq!(idle_intent(&state), Intent::MoveLeft);

        state.doodler.pos.x = 0.0;
        assert_eq!(idle_intent(&state), Intent::MoveRight);

        state.doodler.pos.x = 45.0;
        assert_eq!(idle_intent(&state), Intent::StopHorizontal);

        state.doodler.vel.y = -1.0;
        state.doodler.pos.x = 200.0;
        assert_eq!(idle_intent(&state), Intent::StopHorizontal);
    }

    #[test]
    fn test_determinism() {
        // Two states with same seed should produce identical results
        let mut state1 = new_state(99999);
        let mut state2 = new_state(99999);

        for _ in 0..2000 {
            let intent = idle_intent(&state1);
            apply_intent(&mut state1, intent);
            let intent = idle_intent(&state2);
            apply_intent(&mut state2, intent);
            let a = tick(&mut state1);
            let b = tick(&mut state2);
            assert_eq!(a, b);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.score, state2.score);
        assert_eq!(state1.doodler.pos, state2.doodler.pos);
        assert_eq!(state1.platforms.as_slice(), state2.platforms.as_slice());
    }
}
