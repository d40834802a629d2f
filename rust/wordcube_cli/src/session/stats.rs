// src/session/stats.rs
#![forbid(unsafe_code)]

use std::time::Instant;

use wordcube_engine::{Move, Placement, Selection};

/// Running aggregates over a scramble session.
#[derive(Clone, Debug)]
pub struct SessionStats {
    pub twists_done: u64,

    /// Twists after which some word fit on the cube.
    pub twists_with_word: u64,
    pub score_sum: u64,
    /// Lines whose recognizer call failed.
    pub failed_lines: u64,
    /// Twists whose whole selection failed (e.g. a winner that could not be placed).
    pub failed_selections: u64,

    /// Highest-scoring placement seen so far and the twist count it was found at.
    pub best: Option<(Placement, u64)>,

    t0: Instant,
}

impl SessionStats {
    pub fn new() -> Self {
        Self {
            twists_done: 0,
            twists_with_word: 0,
            score_sum: 0,
            failed_lines: 0,
            failed_selections: 0,
            best: None,
            t0: Instant::now(),
        }
    }

    /// Call once per twist, before any selection for that twist is recorded.
    pub fn on_twist(&mut self) {
        self.twists_done += 1;
    }

    /// Fold one selection result in. Only a strictly greater score replaces the best.
    pub fn on_selection(&mut self, selection: Selection) {
        self.failed_lines += selection.failures.len() as u64;
        let Some(p) = selection.best else {
            return;
        };
        self.twists_with_word += 1;
        self.score_sum += p.score as u64;

        let better = self
            .best
            .as_ref()
            .map_or(true, |(b, _)| p.score > b.score);
        if better {
            self.best = Some((p, self.twists_done));
        }
    }

    pub fn on_failed_selection(&mut self) {
        self.failed_selections += 1;
    }

    pub fn elapsed_secs(&self) -> f64 {
        self.t0.elapsed().as_secs_f64()
    }

    pub fn twists_per_sec(&self) -> f64 {
        let dt = self.elapsed_secs();
        if dt > 0.0 {
            self.twists_done as f64 / dt
        } else {
            0.0
        }
    }

    pub fn hit_rate(&self) -> f64 {
        if self.twists_done > 0 {
            self.twists_with_word as f64 / self.twists_done as f64
        } else {
            0.0
        }
    }

    pub fn avg_score(&self) -> f64 {
        if self.twists_with_word > 0 {
            self.score_sum as f64 / self.twists_with_word as f64
        } else {
            0.0
        }
    }

    pub fn best_word(&self) -> Option<&str> {
        self.best.as_ref().map(|(p, _)| p.word.as_str())
    }

    pub fn best_score(&self) -> u32 {
        self.best.as_ref().map_or(0, |(p, _)| p.score)
    }
}

impl Default for SessionStats {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Clone, Debug)]
pub struct FinalReport {
    pub twists_done: u64,
    pub elapsed_s: f64,
    pub twists_per_s: f64,
    pub hit_rate: f64,
    pub avg_score: f64,
    pub failed_lines: u64,
    pub failed_selections: u64,
    pub best: Option<(Placement, u64)>,
    /// Every applied twist, in notation; replaying it reproduces the final cube.
    pub script: String,
}

impl FinalReport {
    pub fn from_stats(stats: &SessionStats, moves: &[Move]) -> Self {
        let script = moves
            .iter()
            .map(Move::to_string)
            .collect::<Vec<_>>()
            .join(" ");
        Self {
            twists_done: stats.twists_done,
            elapsed_s: stats.elapsed_secs(),
            twists_per_s: stats.twists_per_sec(),
            hit_rate: stats.hit_rate(),
            avg_score: stats.avg_score(),
            failed_lines: stats.failed_lines,
            failed_selections: stats.failed_selections,
            best: stats.best.clone(),
            script,
        }
    }
}
