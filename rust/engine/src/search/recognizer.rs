// rust/engine/src/search/recognizer.rs
#![forbid(unsafe_code)]

use rustc_hash::FxHashSet;
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("recognition failed: {message}")]
pub struct RecognitionError {
    pub message: String,
}

impl RecognitionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Word recognizer: reports the dictionary words found in `text`, each with the
/// recognizer's own acceptance weight.
///
/// Object-safe so callers can hold a `&dyn Recognizer` or `Box<dyn Recognizer>`.
pub trait Recognizer {
    fn apply(&self, text: &str) -> Result<Vec<(String, f64)>, RecognitionError>;
}

impl<F> Recognizer for F
where
    F: Fn(&str) -> Result<Vec<(String, f64)>, RecognitionError>,
{
    fn apply(&self, text: &str) -> Result<Vec<(String, f64)>, RecognitionError> {
        self(text)
    }
}

/**
 * Word-list recognizer.
 *
 * Reports every lexicon word that occurs as a substring of the query, once, with
 * weight `0.0`. Words are stored lower-case; queries are matched character-wise, so
 * multi-character graphemes need no special handling here.
 */
#[derive(Clone, Debug, Default)]
pub struct Lexicon {
    words: FxHashSet<String>,
    min_chars: usize,
    max_chars: usize,
}

impl Lexicon {
    pub fn from_words<S: AsRef<str>>(words: impl IntoIterator<Item = S>) -> Self {
        let mut lex = Self::default();
        for w in words {
            lex.insert(w.as_ref());
        }
        lex
    }

    /// One word per line; blank lines and `#` comments are skipped.
    pub fn parse(source: &str) -> Self {
        Self::from_words(
            source
                .lines()
                .map(|l| l.split('#').next().unwrap_or("").trim())
                .filter(|l| !l.is_empty()),
        )
    }

    pub fn insert(&mut self, word: &str) {
        let w = word.trim().to_lowercase();
        let n = w.chars().count();
        if n == 0 {
            return;
        }
        if self.words.is_empty() {
            self.min_chars = n;
            self.max_chars = n;
        } else {
            self.min_chars = self.min_chars.min(n);
            self.max_chars = self.max_chars.max(n);
        }
        self.words.insert(w);
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_lowercase())
    }
}

impl Recognizer for Lexicon {
    fn apply(&self, text: &str) -> Result<Vec<(String, f64)>, RecognitionError> {
        if text.is_empty() {
            return Err(RecognitionError::new("empty query"));
        }
        if let Some(c) = text.chars().find(|c| c.is_whitespace() || c.is_control()) {
            return Err(RecognitionError::new(format!(
                "unexpected character {c:?} in query"
            )));
        }

        let chars: Vec<char> = text.chars().collect();
        let mut seen: FxHashSet<&str> = FxHashSet::default();
        let mut out = Vec::new();

        for start in 0..chars.len() {
            let longest = self.max_chars.min(chars.len() - start);
            for n in self.min_chars.max(1)..=longest {
                let candidate: String = chars[start..start + n].iter().collect();
                if let Some(w) = self.words.get(&candidate) {
                    if seen.insert(w.as_str()) {
                        out.push((w.clone(), 0.0));
                    }
                }
            }
        }

        Ok(out)
    }
}
