// src/config.rs
#![forbid(unsafe_code)]

use std::{collections::BTreeMap, fs, path::Path};

use anyhow::{bail, Context};
use serde::Deserialize;
use tracing_subscriber::EnvFilter;

use wordcube_engine::{Alphabet, Language, Lexicon, FACELET_COUNT};

/**
 * Alphabet file layout:
 *
 *   [letters]
 *   A = { count = 9, cost = 1 }
 *   CH = { count = 1, cost = 5 }
 *
 * Keys are graphemes (upper-cased on load). Counts must total 96.
 */
#[derive(Debug, Deserialize)]
pub struct AlphabetFile {
    pub letters: BTreeMap<String, LetterSpec>,
}

#[derive(Clone, Copy, Debug, Deserialize)]
pub struct LetterSpec {
    pub count: u32,
    pub cost: u32,
}

impl AlphabetFile {
    pub fn parse(raw: &str) -> anyhow::Result<Self> {
        let file: AlphabetFile = toml::from_str(raw).context("invalid alphabet TOML")?;
        if file.letters.is_empty() {
            bail!("alphabet has no [letters] entries");
        }
        let total = file
            .letters
            .values()
            .try_fold(0u32, |acc, s| acc.checked_add(s.count))
            .context("alphabet letter counts overflow")?;
        if total as usize != FACELET_COUNT {
            bail!("alphabet letter counts total {total}, expected {FACELET_COUNT}");
        }
        Ok(file)
    }

    pub fn into_alphabet(self) -> Alphabet {
        Alphabet::new(
            self.letters
                .into_iter()
                .map(|(g, spec)| (g, spec.count, spec.cost)),
        )
    }
}

pub fn load_alphabet_file(path: &Path) -> anyhow::Result<Alphabet> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read alphabet file '{}'", path.display()))?;
    let file = AlphabetFile::parse(&raw)
        .with_context(|| format!("failed to load alphabet from '{}'", path.display()))?;
    Ok(file.into_alphabet())
}

/// Built-in table for `language`, unless an alphabet file overrides it.
pub fn resolve_alphabet(language: &str, file: Option<&Path>) -> anyhow::Result<Alphabet> {
    if let Some(path) = file {
        let alphabet = load_alphabet_file(path)?;
        tracing::info!(path = %path.display(), graphemes = alphabet.entries().len(), "loaded alphabet file");
        return Ok(alphabet);
    }
    let lang = Language::parse(language)
        .with_context(|| format!("unknown language code '{language}'"))?;
    Alphabet::for_language(lang).with_context(|| format!("no built-in alphabet for '{language}'"))
}

pub fn load_word_list(path: &Path) -> anyhow::Result<Lexicon> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read word list '{}'", path.display()))?;
    let lexicon = Lexicon::parse(&raw);
    if lexicon.is_empty() {
        tracing::warn!(path = %path.display(), "word list is empty");
    }
    tracing::info!(path = %path.display(), words = lexicon.len(), "loaded word list");
    Ok(lexicon)
}

/// Cube layout file: 96 whitespace-separated graphemes in construction order.
pub fn load_layout(path: &Path) -> anyhow::Result<Vec<String>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read layout file '{}'", path.display()))?;
    Ok(raw.split_whitespace().map(str::to_string).collect())
}

/// `RUST_LOG` wins over `default_level` when set.
pub fn init_logging(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn full_alphabet_toml() -> String {
        // 23 singles at 4 each = 92, plus CH at 4 = 96.
        let mut s = String::from("[letters]\n");
        for c in 'A'..='W' {
            s.push_str(&format!("{c} = {{ count = 4, cost = 1 }}\n"));
        }
        s.push_str("CH = { count = 4, cost = 5 }\n");
        s
    }

    #[test]
    fn parses_alphabet_file_and_builds_bag() {
        let mut f = tempfile::NamedTempFile::new().expect("tmp");
        f.write_all(full_alphabet_toml().as_bytes()).expect("write");

        let alphabet = load_alphabet_file(f.path()).expect("load");
        assert_eq!(alphabet.total_count() as usize, FACELET_COUNT);
        assert_eq!(alphabet.cost("CH"), Some(5));
        assert_eq!(alphabet.cost("A"), Some(1));
        assert_eq!(alphabet.letter_bag().expect("bag").len(), FACELET_COUNT);
    }

    #[test]
    fn graphemes_are_upper_cased_on_load() {
        let raw = full_alphabet_toml().replace("CH =", "ch =");
        let alphabet = AlphabetFile::parse(&raw).expect("parse").into_alphabet();
        assert_eq!(alphabet.cost("CH"), Some(5));
    }

    #[test]
    fn rejects_short_alphabet() {
        let err = AlphabetFile::parse("[letters]\nA = { count = 95, cost = 1 }\n").unwrap_err();
        assert!(err.to_string().contains("95"), "{err}");
    }

    #[test]
    fn rejects_counts_that_wrap_around() {
        // 4294967295 + 97 wraps to 96 in u32 arithmetic.
        let raw = "[letters]\nA = { count = 4294967295, cost = 1 }\nB = { count = 97, cost = 1 }\n";
        let err = AlphabetFile::parse(raw).unwrap_err();
        assert!(err.to_string().contains("overflow"), "{err}");
    }

    #[test]
    fn rejects_malformed_toml() {
        assert!(AlphabetFile::parse("[letters]\nA = 3\n").is_err());
        assert!(AlphabetFile::parse("letters = []\n").is_err());
    }

    #[test]
    fn missing_file_names_the_path() {
        let dir = tempfile::tempdir().expect("tmp dir");
        let path = dir.path().join("nope.toml");
        let err = load_alphabet_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("nope.toml"));
    }

    #[test]
    fn resolve_alphabet_uses_builtin_tables() {
        let es = resolve_alphabet("es", None).expect("es");
        assert_eq!(es.total_count() as usize, FACELET_COUNT);
        assert!(resolve_alphabet("de", None).is_err());
        assert!(resolve_alphabet("xx", None).is_err());
    }

    #[test]
    fn word_list_skips_comments_and_blank_lines() {
        let mut f = tempfile::NamedTempFile::new().expect("tmp");
        writeln!(f, "# spanish words").expect("write");
        writeln!(f, "CASAS").expect("write");
        writeln!(f).expect("write");
        writeln!(f, "  perro  ").expect("write");

        let lex = load_word_list(f.path()).expect("load");
        assert_eq!(lex.len(), 2);
        assert!(lex.contains("casas"));
        assert!(lex.contains("perro"));
    }

    #[test]
    fn layout_file_splits_on_whitespace() {
        let mut f = tempfile::NamedTempFile::new().expect("tmp");
        writeln!(f, "A B  C\nCH\tD").expect("write");
        let layout = load_layout(f.path()).expect("load");
        assert_eq!(layout, vec!["A", "B", "C", "CH", "D"]);
    }
}
