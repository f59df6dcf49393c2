//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per frame, no wall-clock time
//! - Seeded RNG only
//! - Stable iteration order (registry order)
//! - No rendering or platform dependencies

pub mod collision;
pub mod kinematics;
pub mod platforms;
pub mod state;
pub mod tick;
pub mod world;

pub use collision::{Landing, lands_on, resolve};
pub use kinematics::{integrate, wrap_horizontal};
pub use platforms::PlatformRegistry;
pub use state::{Canvas, Doodler, Facing, GamePhase, GameState, Platform};
pub use tick::{Intent, TickOutcome, advance, apply_intent, idle_intent, scroll_world, tick};
pub use world::WorldGenerator;
