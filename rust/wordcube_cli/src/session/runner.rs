// src/session/runner.rs
#![forbid(unsafe_code)]

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use wordcube_engine::{
    select_best_word, Alphabet, CubeError, Direction, Face, Move, Recognizer, WordCube, MAX_LAYER,
};

use super::stats::{FinalReport, SessionStats};

/// Progress-bar message refresh cadence, in twists.
const LIVE_EVERY: u64 = 100;

#[derive(Clone, Debug)]
pub struct RunnerConfig {
    /// Random twists to apply.
    pub twists: u64,
    /// Seed for the twist stream (independent of the cube's shuffle seed).
    pub seed: u64,
    /// Axis whose candidate lines are searched after every twist.
    pub axis: Face,

    /// 0 = final summary only, 1 = progress bar.
    pub verbosity: u8,

    /// If Some(ms): render every twist; sleep ms between frames (0 = no sleep).
    pub render_ms: Option<u64>,
}

/// Draw one uniformly random twist over all faces, layers and directions.
pub fn random_move(rng: &mut StdRng) -> Move {
    let faces = Face::all();
    let face = faces[rng.gen_range(0..faces.len())];
    let layer = rng.gen_range(0..=MAX_LAYER);
    let direction = if rng.gen_bool(0.5) {
        Direction::Cw
    } else {
        Direction::Ccw
    };
    Move {
        face,
        layer,
        direction,
    }
}

pub struct Runner<'a> {
    cfg: RunnerConfig,
    recognizer: Option<&'a dyn Recognizer>,
    alphabet: &'a Alphabet,
}

impl<'a> Runner<'a> {
    pub fn new(
        cfg: RunnerConfig,
        recognizer: Option<&'a dyn Recognizer>,
        alphabet: &'a Alphabet,
    ) -> Self {
        Self {
            cfg,
            recognizer,
            alphabet,
        }
    }

    /// Twist `cube` `cfg.twists` times, searching for the best word after each twist.
    pub fn run(&self, cube: &mut WordCube) -> Result<FinalReport, CubeError> {
        let cfg = &self.cfg;

        let pb = if cfg.verbosity >= 1 && cfg.render_ms.is_none() {
            let pb = ProgressBar::new(cfg.twists);
            let style = ProgressStyle::with_template(
                "{bar:40.cyan/blue} {pos:>7}/{len:<7}  {percent:>3}%  {elapsed_precise}  {msg}",
            )
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-");
            pb.set_style(style);
            Some(pb)
        } else {
            None
        };

        let mut rng = StdRng::seed_from_u64(cfg.seed);
        let mut stats = SessionStats::new();
        let mut moves = Vec::with_capacity(cfg.twists as usize);

        if cfg.render_ms.is_some() {
            print!("{}", cube.render_ascii());
        }

        while stats.twists_done < cfg.twists {
            let mv = random_move(&mut rng);
            cube.rotate_move(mv)?;
            moves.push(mv);
            stats.on_twist();

            if let Some(recognizer) = self.recognizer {
                match select_best_word(&cube.lines(cfg.axis), recognizer, self.alphabet) {
                    Ok(selection) => stats.on_selection(selection),
                    Err(err) => {
                        tracing::warn!(twist = stats.twists_done, %err, "selection failed");
                        stats.on_failed_selection();
                    }
                }
            }

            if let Some(ref pb) = pb {
                pb.inc(1);
                if stats.twists_done % LIVE_EVERY == 0 {
                    pb.set_message(format!(
                        "best={} ({}) tw/s={:.0}",
                        stats.best_word().unwrap_or("-"),
                        stats.best_score(),
                        stats.twists_per_sec()
                    ));
                }
            }

            if let Some(ms) = cfg.render_ms {
                println!(
                    "twist={} move={} best={}",
                    stats.twists_done,
                    mv,
                    stats.best_word().unwrap_or("-")
                );
                print!("{}", cube.render_ascii());
                if ms > 0 {
                    std::thread::sleep(Duration::from_millis(ms));
                }
            }
        }

        if let Some(pb) = pb {
            pb.finish_and_clear();
        }

        Ok(FinalReport::from_stats(&stats, &moves))
    }
}
