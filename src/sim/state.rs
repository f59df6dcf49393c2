//! Game state and core simulation types
//!
//! Everything one playthrough needs lives in [`GameState`]; there is no
//! global state.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::platforms::PlatformRegistry;
use super::world::WorldGenerator;
use crate::consts::*;
use crate::settings::Settings;

/// Current phase of gameplay
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Ticks advance the world
    Running,
    /// Doodler fell off the bottom; waiting for a restart
    Ended,
}

/// Which way the doodler sprite faces (cosmetic)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

/// Visible area in pixels. Origin is top-left, y grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: f32,
    pub height: f32,
}

impl Canvas {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Where the doodler appears at the start of every run
    pub fn spawn_point(&self) -> Vec2 {
        Vec2::new(self.width / 2.0, self.height - SPAWN_HEIGHT)
    }

    /// Horizontal center line
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.width / 2.0
    }

    /// Vertical midpoint; rising above it scrolls the world
    #[inline]
    pub fn mid_height(&self) -> f32 {
        self.height / 2.0
    }
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Doodler {
    /// Top-left corner
    pub pos: Vec2,
    /// `pos.y` before the last integration step
    pub prev_y: f32,
    pub vel: Vec2,
    pub size: Vec2,
    pub gravity: f32,
    /// Terminal fall speed
    pub max_fall_speed: f32,
    /// Upward speed a bounce sets (stored as a positive magnitude)
    pub jump_speed: f32,
    /// Horizontal speed set by move intents
    pub move_speed: f32,
    pub facing: Facing,
}

impl Doodler {
    pub fn new(spawn: Vec2, settings: &Settings) -> Self {
        Self {
            pos: spawn,
            prev_y: spawn.y,
            vel: Vec2::ZERO,
            size: Vec2::new(settings.doodler_width, settings.doodler_height),
            gravity: settings.gravity,
            max_fall_speed: settings.max_fall_speed,
            jump_speed: settings.jump_speed,
            move_speed: settings.move_speed,
            facing: Facing::Right,
        }
    }

    /// Put the doodler back on the spawn point at rest
    pub fn reset(&mut self, spawn: Vec2) {
        self.pos = spawn;
        self.prev_y = spawn.y;
        self.vel = Vec2::ZERO;
        self.facing = Facing::Right;
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.size.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.size.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    /// Bottom edge before the last integration step
    #[inline]
    pub fn prev_bottom(&self) -> f32 {
        self.prev_y + self.size.y
    }

    pub fn move_left(&mut self) {
        self.vel.x = -self.move_speed;
        self.facing = Facing::Left;
    }

    pub fn move_right(&mut self) {
        self.vel.x = self.move_speed;
        self.facing = Facing::Right;
    }

    /// Keeps the current facing
    pub fn stop_horizontal(&mut self) {
        self.vel.x = 0.0;
    }
}

/// A platform the doodler can bounce off
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Platform {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Platform {
    pub fn new(x: f32, y: f32, size: Vec2) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size,
        }
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }
}

/// Complete state of one playthrough (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub settings: Settings,
    pub canvas: Canvas,
    pub phase: GamePhase,
    pub doodler: Doodler,
    /// Active platforms
    pub platforms: PlatformRegistry,
    /// Platform spawner (owns the RNG)
    pub world: WorldGenerator,
    /// Platforms that scrolled off the bottom this run
    pub score: u64,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl GameState {
    /// Build a fresh run: doodler on the spawn point, platform field seeded.
    ///
    /// `settings` are expected to be validated already; a canvas with no
    /// room outside the center band would stall platform placement.
    pub fn new(settings: Settings, seed: u64) -> Self {
        debug_assert!(
            settings.validate().is_ok(),
            "game state built from invalid settings: {:?}",
            settings.validate()
        );
        let canvas = Canvas::new(settings.canvas_width, settings.canvas_height);
        let doodler = Doodler::new(canvas.spawn_point(), &settings);
        let world = WorldGenerator::new(
            canvas,
            Vec2::new(settings.platform_width, settings.platform_height),
            seed,
        );

        let mut state = Self {
            seed,
            settings,
            canvas,
            phase: GamePhase::Running,
            doodler,
            platforms: PlatformRegistry::new(),
            world,
            score: 0,
            time_ticks: 0,
        };
        state.seed_platforms();
        state
    }

    /// Start over in place. The RNG keeps its stream, so the next field
    /// differs from the last one.
    pub fn restart(&mut self) {
        self.doodler.reset(self.canvas.spawn_point());
        self.platforms.clear();
        self.seed_platforms();
        self.score = 0;
        self.time_ticks = 0;
        self.phase = GamePhase::Running;
    }

    pub fn is_running(&self) -> bool {
        self.phase == GamePhase::Running
    }

    fn seed_platforms(&mut self) {
        let count = self.settings.platform_count;
        self.world.seed(&mut self.platforms, &self.doodler, count);
    }
}
