//! Doodler motion: velocity integration, gravity and horizontal wrap
//!
//! One call advances one frame; velocities are in pixels per tick.

use super::state::Doodler;

/// Advance the doodler by one tick.
///
/// Gravity either clamps a too-fast fall or accelerates, never both in the
/// same tick; acceleration stops at the terminal speed.
pub fn integrate(doodler: &mut Doodler, canvas_width: f32) {
    doodler.prev_y = doodler.pos.y;
    doodler.pos += doodler.vel;

    if doodler.vel.y > doodler.max_fall_speed {
        doodler.vel.y = doodler.max_fall_speed;
    } else {
        doodler.vel.y = (doodler.vel.y + doodler.gravity).min(doodler.max_fall_speed);
    }

    wrap_horizontal(doodler, canvas_width);
}

/// Leaving one side of the screen re-enters from the other.
///
/// Wrapped positions are fixed points: the doodler ends up fully off-screen
/// on the far side and is not moved again until it travels further.
pub fn wrap_horizontal(doodler: &mut Doodler, canvas_width: f32) {
    if doodler.right() < 0.0 {
        doodler.pos.x = canvas_width;
    } else if doodler.pos.x > canvas_width {
        doodler.pos.x = -doodler.width();
    }
}
