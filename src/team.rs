use serde::{Deserialize, Serialize};

pub const POINTS_WIN: u8 = 3;
pub const POINTS_TIE: u8 = 1;
pub const POINTS_LOSS: u8 = 0;

/// Per-team accumulator: the points earned in each match, in the order the
/// matches were applied. Mutated only by [`crate::season::Season`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamRecord {
    name: String,
    history: Vec<u8>,
}

impl TeamRecord {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            history: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn record_win(&mut self) {
        self.history.push(POINTS_WIN);
    }

    pub fn record_tie(&mut self) {
        self.history.push(POINTS_TIE);
    }

    pub fn record_loss(&mut self) {
        self.history.push(POINTS_LOSS);
    }

    pub fn matches_played(&self) -> usize {
        self.history.len()
    }

    pub fn total_score(&self) -> u32 {
        self.history.iter().map(|&p| u32::from(p)).sum()
    }

    /// Points accumulated over the first `n` matches. An `n` beyond
    /// `matches_played()` clamps to the full history.
    pub fn score_through(&self, n: usize) -> u32 {
        let end = n.min(self.history.len());
        self.history[..end].iter().map(|&p| u32::from(p)).sum()
    }
}
