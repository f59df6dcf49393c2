//! Doodle Jump - an endless vertical platform jumper
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, platforms, collisions, world generation)
//! - `director`: Frame driver that owns a playthrough and talks to the front end
//! - `renderer`: Render capability the front end implements
//! - `settings`: Canvas and physics configuration
//! - `highscores`: In-memory best score for the process

pub mod director;
pub mod highscores;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use director::{Director, FrameOutcome};
pub use highscores::HighScore;
pub use renderer::{FrameView, GameOverReport, LogRenderer, NullRenderer, Renderer};
pub use settings::{Settings, SettingsError};

/// Game configuration constants
pub mod consts {
    /// Canvas dimensions
    pub const DEFAULT_CANVAS_WIDTH: f32 = 360.0;
    pub const DEFAULT_CANVAS_HEIGHT: f32 = 576.0;

    /// Platforms laid out by the initial seed (plus the spawn anchor)
    pub const DEFAULT_PLATFORM_COUNT: u32 = 6;

    /// Doodler defaults
    pub const DOODLER_WIDTH: f32 = 50.0;
    pub const DOODLER_HEIGHT: f32 = 50.0;
    /// Downward acceleration per tick
    pub const GRAVITY: f32 = 0.03;
    /// Terminal fall speed (pixels/tick)
    pub const MAX_FALL_SPEED: f32 = 3.5;
    /// Upward speed applied by a bounce (pixels/tick)
    pub const JUMP_SPEED: f32 = 2.5;
    /// Horizontal speed set by a move intent (pixels/tick)
    pub const MOVE_SPEED: f32 = 4.0;
    /// Spawn point sits this far above the bottom edge
    pub const SPAWN_HEIGHT: f32 = 200.0;

    /// Platform defaults
    pub const PLATFORM_WIDTH: f32 = 100.0;
    pub const PLATFORM_HEIGHT: f32 = 20.0;

    /// Extra reach below the doodler's previous bottom edge that still counts
    /// as "came from above". Tuned by feel, not derived.
    pub const LANDING_FORGIVENESS: f32 = 20.0;
    /// Bounces only fire while the perch stays below `height / 2 - margin`
    pub const BOUNCE_CEILING_MARGIN: f32 = 120.0;

    /// The spawn anchor platform sits this far below the doodler's top edge
    pub const SPAWN_ANCHOR_OFFSET: f32 = 80.0;
    /// First seeded platform sits at `height / SEED_START_DIVISOR`
    pub const SEED_START_DIVISOR: f32 = 1.5;
    /// Keep random platforms this far from both side edges
    pub const EDGE_MARGIN: i32 = 25;
    /// Width of the central no-spawn band, in platform widths
    pub const FORBIDDEN_BAND_WIDTHS: f32 = 1.5;
    /// New platforms are placed this many gaps above the topmost one
    pub const EXTEND_GAP_FACTOR: f32 = 2.0;
    /// Platforms move down this many times the doodler's rising speed
    pub const SCROLL_FACTOR: f32 = 2.0;
}
