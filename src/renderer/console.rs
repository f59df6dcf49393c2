//! Text renderer for headless runs
//!
//! Writes a frame summary through the `log` facade every `interval` frames.

use super::{FrameView, GameOverReport, Renderer};

#[derive(Debug)]
pub struct LogRenderer {
    interval: u64,
    frames: u64,
}

impl LogRenderer {
    /// `interval` of 0 is treated as 1
    pub fn new(interval: u64) -> Self {
        Self {
            interval: interval.max(1),
            frames: 0,
        }
    }

    /// Frames drawn so far
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl Renderer for LogRenderer {
    fn draw(&mut self, frame: &FrameView<'_>) {
        if self.frames % self.interval == 0 {
            let doodler = frame.doodler;
            log::debug!(
                "frame {:>6} | {} | doodler ({:.1}, {:.1}) v=({:.2}, {:.2}) {:?} | {} platforms",
                self.frames,
                frame.score_text(),
                doodler.pos.x,
                doodler.pos.y,
                doodler.vel.x,
                doodler.vel.y,
                doodler.facing,
                frame.platforms.len()
            );
        }
        self.frames += 1;
    }

    fn game_over(&mut self, report: &GameOverReport) {
        log::info!(
            "Game over after {} frames: score {} (best {}{})",
            self.frames,
            report.final_score,
            report.high_score,
            if report.new_record { ", new record" } else { "" }
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::GameState;

    #[test]
    fn test_counts_frames() {
        let state = GameState::new(Settings::default(), 1);
        let mut renderer = LogRenderer::new(0);
        for _ in 0..5 {
            renderer.draw(&FrameView::new(&state));
        }
        assert_eq!(renderer.frames(), 5);
    }
}
