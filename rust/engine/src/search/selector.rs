// rust/engine/src/search/selector.rs
#![forbid(unsafe_code)]

use crate::engine::{
    Alphabet, CandidateLine, CubeError, Letter, MAX_WORD_LEN, MIN_WORD_LEN_EXCLUSIVE,
};
use crate::search::recognizer::{RecognitionError, Recognizer};
use crate::search::score::{score_matches, ScoredMatch};

/// The winning word and the facelets it occupies.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Placement {
    /// Logical ids of the facelets spelling the word, in reading order.
    pub ids: Vec<u8>,
    pub word: String,
    pub score: u32,
    pub line_index: usize,
    /// Letter (not character) offset of the first facelet within the line.
    pub offset: usize,
}

#[derive(Debug, Default)]
pub struct Selection {
    /// None when no recognized word passes the length filter.
    pub best: Option<Placement>,
    /// Lines whose recognizer call failed; each is a `RecognitionFailure`.
    pub failures: Vec<CubeError>,
}

/// Query text for one line: letters `1..`, the whole line, then letters `..len-1`,
/// lower-cased, so words crossing the seam are visible to the recognizer.
pub fn extended_query(line: &CandidateLine) -> String {
    let n = line.letters.len();
    let mut s = String::new();
    let parts = line
        .letters
        .iter()
        .skip(1)
        .chain(line.letters.iter())
        .chain(line.letters.iter().take(n.saturating_sub(1)));
    for letter in parts {
        s.push_str(letter.grapheme());
    }
    s.to_lowercase()
}

/// Recognize and score one line.
pub fn score_line(
    line: &CandidateLine,
    recognizer: &dyn Recognizer,
    alphabet: &Alphabet,
) -> Result<Vec<ScoredMatch>, RecognitionError> {
    let query = extended_query(line);
    let raw = recognizer.apply(&query)?;
    Ok(score_matches(&raw, alphabet))
}

#[inline]
fn fits_on_cube(word: &str) -> bool {
    let n = word.chars().count();
    n > MIN_WORD_LEN_EXCLUSIVE && n <= MAX_WORD_LEN
}

/**
 * Pick the single best word over `lines` and place it on the cube.
 *
 * Lines are scanned in index order and each line's matches in ascending
 * `(score, word)` order; only a strictly greater score replaces the current best,
 * so among equal scores the earliest line (then the smaller word) wins.
 *
 * A recognizer failure skips that line and is recorded in `Selection::failures`.
 * A winner whose text does not occur in its line is `NoPlacementFound`.
 */
pub fn select_best_word(
    lines: &[CandidateLine],
    recognizer: &dyn Recognizer,
    alphabet: &Alphabet,
) -> Result<Selection, CubeError> {
    let mut best: Option<(ScoredMatch, usize)> = None;
    let mut failures = Vec::new();

    for (i, line) in lines.iter().enumerate() {
        let matches = match score_line(line, recognizer, alphabet) {
            Ok(m) => m,
            Err(source) => {
                tracing::warn!(line = i, %source, "recognizer failed; skipping line");
                failures.push(CubeError::RecognitionFailure {
                    line_index: i,
                    source,
                });
                continue;
            }
        };
        tracing::debug!(line = i, matches = matches.len(), "scored line");

        for m in matches {
            if !fits_on_cube(&m.word) {
                continue;
            }
            let better = best.as_ref().map_or(true, |(b, _)| m.score > b.score);
            if better {
                best = Some((m, i));
            }
        }
    }

    let Some((winner, line_index)) = best else {
        tracing::debug!("no word fits on the cube");
        return Ok(Selection {
            best: None,
            failures,
        });
    };

    let line = &lines[line_index];
    let (offset, count) =
        locate(&line.letters, &winner.word).ok_or_else(|| CubeError::NoPlacementFound {
            word: winner.word.clone(),
            line_index,
        })?;

    let n = line.ids.len();
    let ids = (offset..offset + count).map(|k| line.ids[k % n]).collect();

    tracing::debug!(word = %winner.word, score = winner.score, line = line_index, offset, "best word");

    Ok(Selection {
        best: Some(Placement {
            ids,
            word: winner.word,
            score: winner.score,
            line_index,
            offset,
        }),
        failures,
    })
}

/**
 * Find `word` in `letters` (case-insensitive).
 *
 * Returns `(letter_offset, letter_count)`: the facelets whose graphemes cover the
 * word's characters, so a digraph facelet covers two characters.
 *
 * Matches that start and end on letter boundaries are preferred. Failing that, the
 * word may begin or end inside a digraph facelet (`lamas` inside `LL A M A S`); that
 * facelet is then part of the placement. Within each pass a placement inside the
 * straight line beats one crossing the seam back to letter 0.
 */
pub fn locate(letters: &[Letter], word: &str) -> Option<(usize, usize)> {
    let target: Vec<char> = word.to_uppercase().chars().collect();
    if target.is_empty() || letters.is_empty() {
        return None;
    }
    let upper: Vec<Vec<char>> = letters
        .iter()
        .map(|l| l.grapheme().to_uppercase().chars().collect())
        .collect();
    let n = upper.len();

    let aligned: Vec<(usize, usize)> = (0..n)
        .filter_map(|start| span_at(&upper, start, 0, &target, true).map(|c| (start, c)))
        .collect();
    if let Some(p) = prefer_straight(&aligned, n) {
        return Some(p);
    }

    let inside: Vec<(usize, usize)> = (0..n)
        .flat_map(|start| (0..upper[start].len()).map(move |skip| (start, skip)))
        .filter_map(|(start, skip)| {
            span_at(&upper, start, skip, &target, false).map(|c| (start, c))
        })
        .collect();
    prefer_straight(&inside, n)
}

fn prefer_straight(spans: &[(usize, usize)], n: usize) -> Option<(usize, usize)> {
    spans
        .iter()
        .find(|&&(start, count)| start + count <= n)
        .or_else(|| spans.first())
        .copied()
}

/// Number of letters from `start` (wrapping) whose characters, after dropping the
/// first `skip` characters of the first letter, spell `target`. With `exact_end`
/// the last letter must be consumed whole.
fn span_at(
    upper: &[Vec<char>],
    start: usize,
    skip: usize,
    target: &[char],
    exact_end: bool,
) -> Option<usize> {
    let n = upper.len();
    let mut matched = 0;
    let mut count = 0;

    while matched < target.len() {
        if count == n {
            return None;
        }
        let g = &upper[(start + count) % n];
        let g = if count == 0 { g.get(skip..)? } else { &g[..] };
        if g.is_empty() {
            return None;
        }
        let take = g.len().min(target.len() - matched);
        if exact_end && take < g.len() {
            return None;
        }
        if target[matched..matched + take] != g[..take] {
            return None;
        }
        matched += take;
        count += 1;
    }

    Some(count)
}
