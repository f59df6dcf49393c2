//! Platform field generation
//!
//! `seed` lays out the opening field; `extend` adds one platform above the
//! topmost one every tick the camera scrolls, so the world never runs out.
//! Horizontal positions avoid a band around the screen center, which would
//! otherwise allow a trivial straight climb.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::platforms::PlatformRegistry;
use super::state::{Canvas, Doodler, Platform};
use crate::consts::*;

/// Inclusive range of integer left-edge positions a random platform may take
pub fn placement_range(canvas_width: f32, platform_width: f32) -> (i32, i32) {
    let max = (canvas_width - EDGE_MARGIN as f32 - platform_width).floor() as i32;
    (EDGE_MARGIN, max)
}

/// Whether a platform centered at `center_x` sits inside the no-spawn band
#[inline]
pub fn in_forbidden_band(center_x: f32, canvas_width: f32, platform_width: f32) -> bool {
    let half_band = FORBIDDEN_BAND_WIDTHS * platform_width / 2.0;
    (center_x - canvas_width / 2.0).abs() < half_band
}

/// Whether at least one integer position in the placement range clears the
/// band. The extremes of the range are the best candidates.
pub fn has_placement_outside_band(canvas_width: f32, platform_width: f32) -> bool {
    let (min, max) = placement_range(canvas_width, platform_width);
    if min > max {
        return false;
    }
    [min, max].iter().any(|&x| {
        !in_forbidden_band(x as f32 + platform_width / 2.0, canvas_width, platform_width)
    })
}

/// Spawns platforms for one playthrough
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorldGenerator {
    canvas: Canvas,
    platform_size: Vec2,
    /// Vertical spacing of the opening field; `extend` places platforms two
    /// gaps above the topmost one
    gap: f32,
    rng: Pcg32,
}

impl WorldGenerator {
    pub fn new(canvas: Canvas, platform_size: Vec2, seed: u64) -> Self {
        Self {
            canvas,
            platform_size,
            gap: 0.0,
            rng: Pcg32::seed_from_u64(seed),
        }
    }

    pub fn gap(&self) -> f32 {
        self.gap
    }

    /// Lay out the opening field: an anchor platform right under the doodler,
    /// then `platform_count` platforms climbing from below mid-screen.
    pub fn seed(
        &mut self,
        registry: &mut PlatformRegistry,
        doodler: &Doodler,
        platform_count: u32,
    ) {
        let count = platform_count.max(1);
        self.gap = (self.canvas.height / count as f32).round();

        registry.append(Platform::new(
            doodler.pos.x,
            doodler.pos.y + SPAWN_ANCHOR_OFFSET,
            self.platform_size,
        ));

        let start_y = self.canvas.height / SEED_START_DIVISOR;
        for i in 0..count {
            let x = self.random_x();
            let y = start_y - i as f32 * self.gap;
            registry.append(Platform::new(x, y, self.platform_size));
        }

        log::debug!(
            "Seeded {} platforms (gap {}), topmost at y={:?}",
            registry.len(),
            self.gap,
            registry.topmost().map(|p| p.pos.y)
        );
    }

    /// Add one platform two gaps above the current topmost platform.
    ///
    /// # Panics
    ///
    /// If the registry is empty. `seed` always runs first, so this is an
    /// invariant breach rather than a recoverable condition.
    pub fn extend(&mut self, registry: &mut PlatformRegistry) {
        let top_y = registry
            .topmost()
            .map(|p| p.pos.y)
            .expect("platform registry must be seeded before it is extended");

        let x = self.random_x();
        let y = top_y - self.gap * EXTEND_GAP_FACTOR;
        registry.append(Platform::new(x, y, self.platform_size));
        log::trace!("Extended world with platform at ({}, {})", x, y);
    }

    /// Draw a left-edge x uniformly from the placement range, redrawing until
    /// the platform clears the center band.
    pub fn random_x(&mut self) -> f32 {
        let (min, max) = placement_range(self.canvas.width, self.platform_size.x);
        loop {
            let x = self.rng.random_range(min..=max) as f32;
            let center = x + self.platform_size.x / 2.0;
            if !in_forbidden_band(center, self.canvas.width, self.platform_size.x) {
                return x;
            }
        }
    }
}
