use alloc::collections::{BTreeMap, BTreeSet};
use serde::{Deserialize, Serialize};

use crate::*;

/// Fewest moves needed to complete each level.
///
/// Kept in memory only; serializes as a map of level number to moves.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HighScores {
    best: BTreeMap<LevelNumber, u32>,
}

impl HighScores {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, number: LevelNumber) -> Option<u32> {
        self.best.get(&number).copied()
    }

    /// Stores `moves` if it beats the current best. Returns whether it did.
    pub fn record(&mut self, number: LevelNumber, moves: u32) -> bool {
        match self.best.get(&number) {
            Some(&best) if best <= moves => false,
            _ => {
                log::debug!("new high score for level {}: {} moves", number, moves);
                self.best.insert(number, moves);
                true
            }
        }
    }

    /// Records a completed attempt; anything else is ignored.
    pub fn record_attempt(&mut self, number: LevelNumber, attempt: &LevelAttempt) -> bool {
        attempt.is_complete() && self.record(number, attempt.moves())
    }

    pub fn iter(&self) -> impl Iterator<Item = (LevelNumber, u32)> + '_ {
        self.best.iter().map(|(&number, &moves)| (number, moves))
    }
}

/// Which levels have been completed, and so which ones are unlocked.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Progress {
    completed: BTreeSet<LevelNumber>,
}

impl Progress {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mark_complete(&mut self, number: LevelNumber) {
        if self.completed.insert(number) {
            log::debug!("level {} completed", number);
        }
    }

    pub fn is_complete(&self, number: LevelNumber) -> bool {
        self.completed.contains(&number)
    }

    /// Level 1 is always open; every other level opens once the one before
    /// it is complete.
    pub fn can_access(&self, number: LevelNumber) -> bool {
        match number {
            0 => false,
            1 => true,
            n => self.is_complete(n - 1),
        }
    }

    /// Lowest unlocked level that is not complete yet, or the last level when
    /// everything is done.
    pub fn next_available_level(&self, total: usize) -> LevelNumber {
        (1..=total)
            .find(|&number| self.can_access(number) && !self.is_complete(number))
            .unwrap_or(total.max(1))
    }

    pub fn completed_count(&self) -> usize {
        self.completed.len()
    }
}
