//! Rendering capability
//!
//! The simulation never draws. Front ends implement [`Renderer`] and receive
//! a read-only view of each frame plus the end-of-run report.

pub mod console;

pub use console::LogRenderer;

use crate::sim::{Canvas, Doodler, GameState, Platform};

/// Everything a front end needs to draw one frame
#[derive(Debug, Clone, Copy)]
pub struct FrameView<'a> {
    pub canvas: Canvas,
    pub doodler: &'a Doodler,
    pub platforms: &'a [Platform],
    pub score: u64,
}

impl<'a> FrameView<'a> {
    pub fn new(state: &'a GameState) -> Self {
        Self {
            canvas: state.canvas,
            doodler: &state.doodler,
            platforms: state.platforms.as_slice(),
            score: state.score,
        }
    }

    /// HUD line drawn at the top center of the canvas
    pub fn score_text(&self) -> String {
        format!("Score: {}", self.score)
    }
}

/// Sent once when a run ends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOverReport {
    pub final_score: u64,
    /// Best score including this run
    pub high_score: u64,
    /// This run beat the previous best
    pub new_record: bool,
}

/// Drawing surface provided by the front end
pub trait Renderer {
    /// Draw the current frame (state before this tick's movement)
    fn draw(&mut self, frame: &FrameView<'_>);

    /// Show the end-of-run screen
    fn game_over(&mut self, _report: &GameOverReport) {}
}

/// Renderer that draws nothing (headless runs, tests)
#[derive(Debug, Default)]
pub struct NullRenderer;

impl Renderer for NullRenderer {
    fn draw(&mut self, _frame: &FrameView<'_>) {}
}
