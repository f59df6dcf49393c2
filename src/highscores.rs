//! Best score for the running process
//!
//! Kept in memory only; it outlives restarts but not the process.

use serde::{Deserialize, Serialize};

/// Highest score reached across the playthroughs of one process
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighScore {
    best: u64,
}

impl HighScore {
    pub fn new() -> Self {
        Self { best: 0 }
    }

    /// Best score so far (0 before any run ends)
    pub fn best(&self) -> u64 {
        self.best
    }

    /// Check if a score would beat the current best
    pub fn qualifies(&self, score: u64) -> bool {
        score > self.best
    }

    /// Record a finished run. Returns true if it set a new best.
    pub fn record(&mut self, score: u64) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        log::info!("New high score: {} (was {})", score, self.best);
        self.best = score;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_keeps_maximum() {
        let mut high = HighScore::new();
        assert!(high.record(12));
        assert!(!high.record(7));
        assert_eq!(high.best(), 12);
        assert!(high.record(13));
        assert_eq!(high.best(), 13);
    }

    #[test]
    fn test_zero_and_ties_are_not_records() {
        let mut high = HighScore::new();
        assert!(!high.record(0));
        assert_eq!(high.best(), 0);

        high.record(5);
        assert!(!high.qualifies(5));
        assert!(!high.record(5));
    }
}
