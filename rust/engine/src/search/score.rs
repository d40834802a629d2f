// rust/engine/src/search/score.rs
#![forbid(unsafe_code)]

use crate::engine::{Alphabet, CubeError};

/// A recognized word with its alphabet score. Orders by `(score, word)`.
#[derive(Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ScoredMatch {
    pub score: u32,
    pub word: String,
}

/// Split an upper-cased word into the alphabet's graphemes, longest match first.
pub fn tokenize(word_upper: &str, alphabet: &Alphabet) -> Result<Vec<String>, CubeError> {
    let chars: Vec<char> = word_upper.chars().collect();
    let mut out = Vec::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        let longest = alphabet.max_grapheme_chars().min(chars.len() - i);
        let token = (1..=longest)
            .rev()
            .map(|n| chars[i..i + n].iter().collect::<String>())
            .find(|t| alphabet.cost(t).is_some());

        match token {
            Some(t) => {
                i += t.chars().count();
                out.push(t);
            }
            None => {
                return Err(CubeError::UnknownGrapheme {
                    word: word_upper.to_string(),
                    at: i,
                });
            }
        }
    }

    Ok(out)
}

/// Sum of grapheme costs of `word` (case-insensitive).
pub fn score_word(word: &str, alphabet: &Alphabet) -> Result<u32, CubeError> {
    let upper = word.to_uppercase();
    let tokens = tokenize(&upper, alphabet)?;
    Ok(tokens
        .iter()
        .map(|t| alphabet.cost(t).unwrap_or(0))
        .sum())
}

/// Score recognizer output, dropping words the alphabet cannot cost.
/// Result is deduplicated and sorted ascending by `(score, word)`.
pub fn score_matches(matches: &[(String, f64)], alphabet: &Alphabet) -> Vec<ScoredMatch> {
    let mut out: Vec<ScoredMatch> = matches
        .iter()
        .filter_map(|(word, _weight)| match score_word(word, alphabet) {
            Ok(score) => Some(ScoredMatch {
                score,
                word: word.clone(),
            }),
            Err(err) => {
                tracing::warn!(%word, %err, "dropping unscorable match");
                None
            }
        })
        .collect();
    out.sort();
    out.dedup();
    out
}
