// rust/engine/src/engine/alphabet.rs
#![forbid(unsafe_code)]

/*
Alphabets (letter distribution + scoring)

Each entry maps an upper-case grapheme to `(count, cost)`:
- `count` is how many facelets carry it in a freshly generated cube (counts sum to 96).
- `cost` is what the grapheme contributes to a word's score.

Graphemes may be longer than one character (Spanish `CH`, `LL`, `RR`). Scoring
tokenizes words greedily by the longest grapheme the alphabet defines, so `CH` is
costed as one token and never as `C` + `H` when the alphabet lists it.

Letter bags are generated in table order and then shuffled with a seeded `StdRng`,
so a fixed seed always yields the same cube.
*/

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rustc_hash::FxHashMap;

use crate::engine::constants::FACELET_COUNT;
use crate::engine::error::CubeError;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Language {
    De,
    En,
    Es,
    Eu,
}

impl Language {
    pub fn all() -> &'static [Language] {
        use Language::*;
        &[De, En, Es, Eu]
    }

    pub fn code(self) -> &'static str {
        match self {
            Language::De => "de",
            Language::En => "en",
            Language::Es => "es",
            Language::Eu => "eu",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        let k = s.trim().to_ascii_lowercase();
        Self::all().iter().copied().find(|l| l.code() == k)
    }
}

/// Spanish scrabble-like distribution.
const ALPHABET_ES: &[(&str, u32, u32)] = &[
    ("E", 12, 1),
    ("A", 11, 1),
    ("I", 6, 1),
    ("O", 9, 1),
    ("N", 5, 1),
    ("R", 5, 1),
    ("T", 4, 1),
    ("L", 4, 1),
    ("S", 6, 1),
    ("U", 5, 1),
    ("D", 5, 2),
    ("G", 2, 2),
    ("B", 2, 3),
    ("C", 4, 3),
    ("M", 2, 3),
    ("P", 2, 3),
    ("F", 1, 4),
    ("H", 2, 4),
    ("V", 1, 4),
    ("Y", 1, 4),
    ("CH", 1, 5),
    ("J", 1, 8),
    ("LL", 1, 8),
    ("Ñ", 1, 8),
    ("RR", 1, 8),
    ("X", 1, 8),
    ("Z", 1, 10),
];

/// English scrabble distribution without blanks, Q and X.
const ALPHABET_EN: &[(&str, u32, u32)] = &[
    ("E", 12, 1),
    ("A", 9, 1),
    ("I", 9, 1),
    ("O", 8, 1),
    ("N", 6, 1),
    ("R", 6, 1),
    ("T", 6, 1),
    ("L", 4, 1),
    ("S", 4, 1),
    ("U", 4, 1),
    ("D", 4, 2),
    ("G", 3, 2),
    ("B", 2, 3),
    ("C", 2, 3),
    ("M", 2, 3),
    ("P", 2, 3),
    ("F", 2, 4),
    ("H", 2, 4),
    ("V", 2, 4),
    ("W", 2, 4),
    ("Y", 2, 4),
    ("K", 1, 5),
    ("J", 1, 8),
    ("Z", 1, 10),
];

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GraphemeEntry {
    pub grapheme: String,
    pub count: u32,
    pub cost: u32,
}

#[derive(Clone, Debug)]
pub struct Alphabet {
    entries: Vec<GraphemeEntry>,
    costs: FxHashMap<String, u32>,
    max_grapheme_chars: usize,
}

impl Alphabet {
    /// Build from `(grapheme, count, cost)` rows; graphemes are upper-cased.
    /// A later duplicate grapheme overrides an earlier one.
    pub fn new<S: AsRef<str>>(rows: impl IntoIterator<Item = (S, u32, u32)>) -> Self {
        let mut entries: Vec<GraphemeEntry> = Vec::new();
        for (g, count, cost) in rows {
            let grapheme = g.as_ref().to_uppercase();
            if let Some(e) = entries.iter_mut().find(|e| e.grapheme == grapheme) {
                e.count = count;
                e.cost = cost;
            } else {
                entries.push(GraphemeEntry {
                    grapheme,
                    count,
                    cost,
                });
            }
        }

        let costs = entries
            .iter()
            .map(|e| (e.grapheme.clone(), e.cost))
            .collect();
        let max_grapheme_chars = entries
            .iter()
            .map(|e| e.grapheme.chars().count())
            .max()
            .unwrap_or(1);

        Self {
            entries,
            costs,
            max_grapheme_chars,
        }
    }

    pub fn for_language(language: Language) -> Result<Self, CubeError> {
        match language {
            Language::Es => Ok(Self::new(ALPHABET_ES.iter().copied())),
            Language::En => Ok(Self::new(ALPHABET_EN.iter().copied())),
            Language::De | Language::Eu => {
                Err(CubeError::UnsupportedLanguage(language.code().to_string()))
            }
        }
    }

    pub fn entries(&self) -> &[GraphemeEntry] {
        &self.entries
    }

    #[inline]
    pub fn cost(&self, grapheme: &str) -> Option<u32> {
        self.costs.get(grapheme).copied()
    }

    #[inline]
    pub fn max_grapheme_chars(&self) -> usize {
        self.max_grapheme_chars
    }

    /// Sum of all counts; `u64` so no table of `u32` counts can overflow it.
    pub fn total_count(&self) -> u64 {
        self.entries.iter().map(|e| u64::from(e.count)).sum()
    }

    /// Graphemes repeated by their counts, in table order. Must total exactly 96.
    pub fn letter_bag(&self) -> Result<Vec<String>, CubeError> {
        let total = self.total_count();
        if total != FACELET_COUNT as u64 {
            return Err(CubeError::InvalidLayout {
                expected: FACELET_COUNT,
                got: usize::try_from(total).unwrap_or(usize::MAX),
            });
        }
        let mut bag = Vec::with_capacity(FACELET_COUNT);
        for e in &self.entries {
            for _ in 0..e.count {
                bag.push(e.grapheme.clone());
            }
        }
        Ok(bag)
    }

    /// `letter_bag` shuffled with a `StdRng` seeded from `seed`.
    pub fn shuffled_bag(&self, seed: u64) -> Result<Vec<String>, CubeError> {
        let mut bag = self.letter_bag()?;
        let mut rng = StdRng::seed_from_u64(seed);
        bag.shuffle(&mut rng);
        Ok(bag)
    }
}
