//! Frame driver for a playthrough
//!
//! The front end owns the schedule: it forwards intents as they arrive and
//! calls [`Director::frame`] once per display refresh until it returns
//! [`FrameOutcome::Stopped`]. A restart intent starts the schedule again.

use crate::highscores::HighScore;
use crate::renderer::{FrameView, GameOverReport, Renderer};
use crate::settings::{Settings, SettingsError};
use crate::sim::{GamePhase, GameState, Intent, TickOutcome, advance, apply_intent, scroll_world};

/// Whether the front end should schedule another frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameOutcome {
    Continue,
    Stopped,
}

/// Owns the game state for the current run and the best score across runs
#[derive(Debug, Clone)]
pub struct Director {
    state: GameState,
    high_score: HighScore,
}

impl Director {
    /// Validate `settings` and set up the first run
    pub fn new(settings: Settings, seed: u64) -> Result<Self, SettingsError> {
        settings.validate()?;
        log::info!("Game initialized with seed: {}", seed);
        Ok(Self {
            state: GameState::new(settings, seed),
            high_score: HighScore::new(),
        })
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Direct access for front ends that need to poke at the run (debug
    /// tooling, scripted scenarios)
    pub fn state_mut(&mut self) -> &mut GameState {
        &mut self.state
    }

    pub fn high_score(&self) -> u64 {
        self.high_score.best()
    }

    pub fn phase(&self) -> GamePhase {
        self.state.phase
    }

    /// Forward a front-end intent. Movement takes effect on the next frame.
    pub fn handle(&mut self, intent: Intent) {
        match intent {
            Intent::Restart => self.restart(),
            movement => apply_intent(&mut self.state, movement),
        }
    }

    /// Start a new run. Only honoured once the current run has ended.
    pub fn restart(&mut self) {
        if self.state.is_running() {
            log::debug!("Ignoring restart while the run is still going");
            return;
        }
        self.state.restart();
        log::info!("Game restarted (best so far: {})", self.high_score.best());
    }

    /// Run one frame: scroll, draw, move, land, then end the run or score
    /// culled platforms.
    pub fn frame<R: Renderer + ?Sized>(&mut self, renderer: &mut R) -> FrameOutcome {
        if !self.state.is_running() {
            return FrameOutcome::Stopped;
        }

        scroll_world(&mut self.state);
        renderer.draw(&FrameView::new(&self.state));

        match advance(&mut self.state) {
            TickOutcome::Running { .. } => FrameOutcome::Continue,
            TickOutcome::Ended { final_score } => {
                let new_record = self.high_score.record(final_score);
                let report = GameOverReport {
                    final_score,
                    high_score: self.high_score.best(),
                    new_record,
                };
                log::info!(
                    "Run ended after {} ticks with score {}",
                    self.state.time_ticks,
                    final_score
                );
                renderer.game_over(&report);
                FrameOutcome::Stopped
            }
            TickOutcome::Idle => FrameOutcome::Stopped,
        }
    }
}
