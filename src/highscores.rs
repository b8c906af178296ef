//! High score tracking
//!
//! A single best score, persisted in the session record's `highscore` field.

/// Best score achieved across runs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HighScore {
    best: u32,
}

impl HighScore {
    pub fn new(best: u32) -> Self {
        Self { best }
    }

    pub fn best(&self) -> u32 {
        self.best
    }

    /// Check if a score beats the stored best (ties do not)
    pub fn qualifies(&self, score: u32) -> bool {
        score > self.best
    }

    /// Record a finished run's score. Returns true if it became the new best.
    pub fn submit(&mut self, score: u32) -> bool {
        if !self.qualifies(score) {
            return false;
        }
        log::info!("New high score: {} (was {})", score, self.best);
        self.best = score;
        true
    }

    /// Whether there is anything worth displaying
    pub fn is_set(&self) -> bool {
        self.best > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_strictly_greater() {
        let mut high = HighScore::new(5);
        assert!(!high.submit(5));
        assert_eq!(high.best(), 5);
        assert!(!high.submit(3));
        assert!(high.submit(6));
        assert_eq!(high.best(), 6);
    }

    #[test]
    fn test_zero_is_not_set() {
        let mut high = HighScore::default();
        assert!(!high.is_set());
        assert!(!high.submit(0));
        assert!(high.submit(1));
        assert!(high.is_set());
    }
}
