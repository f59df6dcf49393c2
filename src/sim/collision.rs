//! Doodler/platform collision detection and bounce response
//!
//! Platforms are one-way: the doodler only lands while falling and only when
//! it came from above. The first qualifying platform in registry order wins.

use super::platforms::PlatformRegistry;
use super::state::{Doodler, Platform};
use crate::consts::{BOUNCE_CEILING_MARGIN, LANDING_FORGIVENESS};

/// Result of a landing check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Landing {
    /// Registry index of the platform landed on
    pub index: usize,
    /// Whether the jump impulse fired (false when the ceiling guard held it back)
    pub bounced: bool,
}

/// Check whether the doodler lands on `platform` this tick.
///
/// Requires all of: previous bottom edge (plus forgiveness) reached the
/// platform top, horizontal overlap, vertical overlap now, and a previous
/// top edge strictly above the platform top.
pub fn lands_on(doodler: &Doodler, platform: &Platform) -> bool {
    doodler.prev_bottom() + LANDING_FORGIVENESS >= platform.top()
        && doodler.right() > platform.pos.x
        && doodler.pos.x < platform.right()
        && doodler.bottom() > platform.top()
        && doodler.pos.y < platform.bottom()
        && doodler.prev_y < platform.top()
}

/// Land the doodler on the first qualifying platform, if any.
///
/// Does nothing unless the doodler is falling. The search stops at the first
/// match even when the ceiling guard holds its bounce back.
pub fn resolve(
    doodler: &mut Doodler,
    platforms: &PlatformRegistry,
    canvas_height: f32,
) -> Option<Landing> {
    if doodler.vel.y <= 0.0 {
        return None;
    }

    let (index, platform) = platforms
        .iter()
        .enumerate()
        .find(|(_, p)| lands_on(doodler, p))?;

    let bounced = bounce(doodler, platform, canvas_height);
    log::trace!(
        "Landed on platform {} at y={} (bounced: {})",
        index,
        platform.top(),
        bounced
    );
    Some(Landing { index, bounced })
}

/// Snap onto the platform and jump, unless the perch would sit above the
/// ceiling line. Near the top the doodler falls through instead.
fn bounce(doodler: &mut Doodler, platform: &Platform, canvas_height: f32) -> bool {
    let perch_y = platform.top() - doodler.height();
    if perch_y <= canvas_height / 2.0 - BOUNCE_CEILING_MARGIN {
        return false;
    }
    doodler.pos.y = perch_y;
    doodler.vel.y = -doodler.jump_speed;
    true
}
