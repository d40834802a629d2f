// src/main.rs
#![forbid(unsafe_code)]

mod config;
mod session;

use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};

use crate::session::{FinalReport, Runner, RunnerConfig};
use wordcube_engine::{
    select_best_word, Alphabet, Face, Lexicon, Move, Recognizer, Selection, Shuffle, WordCube,
    DEFAULT_SEED,
};

#[derive(Parser, Debug)]
#[command(name = "wordcube")]
#[command(about = "4x4x4 letter cube: twist it and find the best word on its lines")]
struct Args {
    // ---------------- cube setup ----------------
    /// Built-in alphabet: es | en
    #[arg(long, default_value = "es", global = true)]
    language: String,

    /// Alphabet TOML file (`[letters] A = { count = 9, cost = 1 }`); overrides --language.
    #[arg(long, global = true)]
    alphabet: Option<PathBuf>,

    /// Explicit layout: 96 whitespace-separated graphemes in construction order.
    #[arg(long, global = true)]
    layout: Option<PathBuf>,

    /// Shuffle seed for the letter bag.
    #[arg(long, default_value_t = DEFAULT_SEED, global = true)]
    seed: u64,

    /// Lay letters out in alphabet table order instead of shuffling.
    #[arg(long, global = true)]
    no_shuffle: bool,

    // ---------------- word search ----------------
    /// Word list: one word per line, `#` starts a comment.
    #[arg(long, global = true)]
    words: Option<PathBuf>,

    /// Extraction axis for candidate lines: U | L | F | R | B | D
    #[arg(long, default_value = "F", value_parser = parse_face, global = true)]
    axis: Face,

    // ---------------- output ----------------
    /// Log level used when RUST_LOG is unset.
    #[arg(long, default_value = "warn", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the cube net and its candidate lines.
    Show,

    /// Apply a move script (e.g. "F0cw R2ccw U'") and search the result.
    Play {
        /// Moves separated by spaces or commas; all are validated before any is applied.
        moves: String,
    },

    /// Apply random twists, searching for the best word after each one.
    Scramble {
        /// Number of random twists.
        #[arg(long, default_value_t = 200)]
        twists: u64,

        /// Seed for the twist stream. Defaults to --seed.
        #[arg(long)]
        twist_seed: Option<u64>,

        /// Verbosity: 0=final summary only, 1=progress bar.
        #[arg(long, default_value_t = 1)]
        verbosity: u8,

        /**
         * Render the cube every twist; value is sleep in ms. Omit to disable rendering.
         * Examples:
         *   --render 0    (render as fast as possible)
         *   --render 200  (sleep 200ms between frames)
         */
        #[arg(long, value_name = "ms")]
        render: Option<u64>,
    },
}

fn parse_face(s: &str) -> Result<Face, String> {
    let mut chars = s.trim().chars();
    match (chars.next().and_then(Face::from_glyph), chars.next()) {
        (Some(face), None) => Ok(face),
        _ => Err(format!("expected one of U L F R B D, got {s:?}")),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    config::init_logging(&args.log_level);

    let alphabet = config::resolve_alphabet(&args.language, args.alphabet.as_deref())?;
    let mut cube = build_cube(&args, &alphabet)?;
    let lexicon = args
        .words
        .as_deref()
        .map(config::load_word_list)
        .transpose()?;

    match args.command {
        Command::Show => {
            print!("{}", cube.render_ascii());
            println!();
            for (i, line) in cube.lines(args.axis).iter().enumerate() {
                println!("{i:>2} {:?} {}", line.family, line.text());
            }
            if let Some(lex) = &lexicon {
                report_selection(&cube, args.axis, lex, &alphabet)?;
            }
        }

        Command::Play { moves } => {
            let moves = Move::parse_sequence(&moves).context("invalid move script")?;
            cube.apply_moves(&moves)
                .context("failed to apply move script")?;
            tracing::info!(twists = moves.len(), "applied move script");
            print!("{}", cube.render_ascii());
            match &lexicon {
                Some(lex) => report_selection(&cube, args.axis, lex, &alphabet)?,
                None => tracing::warn!("no --words given; skipping word search"),
            }
        }

        Command::Scramble {
            twists,
            twist_seed,
            verbosity,
            render,
        } => {
            if lexicon.is_none() {
                tracing::warn!("no --words given; scrambling without word search");
            }
            let cfg = RunnerConfig {
                twists,
                seed: twist_seed.unwrap_or(args.seed),
                axis: args.axis,
                verbosity,
                render_ms: render,
            };
            let recognizer = lexicon.as_ref().map(|l| l as &dyn Recognizer);
            let report = Runner::new(cfg, recognizer, &alphabet)
                .run(&mut cube)
                .context("scramble failed")?;
            print_report(&report);
        }
    }

    Ok(())
}

fn build_cube(args: &Args, alphabet: &Alphabet) -> anyhow::Result<WordCube> {
    if let Some(path) = &args.layout {
        return cube_from_layout(path);
    }
    let shuffle = if args.no_shuffle {
        Shuffle::None
    } else {
        Shuffle::Seeded(args.seed)
    };
    WordCube::generate(alphabet, shuffle).context("failed to build cube from alphabet")
}

fn cube_from_layout(path: &Path) -> anyhow::Result<WordCube> {
    let layout = config::load_layout(path)?;
    if layout.is_empty() {
        bail!("layout file '{}' is empty", path.display());
    }
    WordCube::from_letters(&layout)
        .with_context(|| format!("invalid layout in '{}'", path.display()))
}

fn report_selection(
    cube: &WordCube,
    axis: Face,
    lexicon: &Lexicon,
    alphabet: &Alphabet,
) -> anyhow::Result<()> {
    let Selection { best, failures } = select_best_word(&cube.lines(axis), lexicon, alphabet)
        .context("word selection failed")?;

    for f in &failures {
        tracing::warn!(%f, "line skipped");
    }

    match best {
        None => println!("no word fits on the cube"),
        Some(p) => {
            let cells: Vec<String> = p
                .ids
                .iter()
                .filter_map(|&id| cube.position_of(id))
                .map(|f| format!("{}{}{}", f.face, f.row, f.col))
                .collect();
            println!(
                "BEST: word={} score={} line={} offset={} ids={:?} facelets=[{}]",
                p.word,
                p.score,
                p.line_index,
                p.offset,
                p.ids,
                cells.join(" ")
            );
        }
    }
    Ok(())
}

fn print_report(report: &FinalReport) {
    let (best_word, best_score, best_at) = match &report.best {
        Some((p, at)) => (p.word.as_str(), p.score, *at),
        None => ("-", 0, 0),
    };
    // Final one-line summary (useful for logs / grep).
    println!(
        "DONE: twists={} elapsed={:.3}s twists/s={:.1} hit_rate={:.3} avg_score={:.2} failed_lines={} failed_selections={} best={} best_score={} best_at={}",
        report.twists_done,
        report.elapsed_s,
        report.twists_per_s,
        report.hit_rate,
        report.avg_score,
        report.failed_lines,
        report.failed_selections,
        best_word,
        best_score,
        best_at,
    );
    println!("SCRIPT: {}", report.script);
}
