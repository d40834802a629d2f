// rust/engine/src/engine/letter.rs
#![forbid(unsafe_code)]

/// One facelet value: a grapheme (one or more characters, e.g. `CH`) plus the
/// logical id it was given at construction.
///
/// Equality and hashing look at the grapheme only; the id is identity bookkeeping
/// for callers that need to find a specific sticker after any number of twists.
#[derive(Clone, Debug)]
pub struct Letter {
    grapheme: String,
    id: u8,
}

impl Letter {
    pub fn new(grapheme: impl Into<String>, id: u8) -> Self {
        Self {
            grapheme: grapheme.into(),
            id,
        }
    }

    #[inline]
    pub fn grapheme(&self) -> &str {
        &self.grapheme
    }

    #[inline]
    pub fn id(&self) -> u8 {
        self.id
    }

    /// Grapheme length in characters (not bytes).
    #[inline]
    pub fn char_len(&self) -> usize {
        self.grapheme.chars().count()
    }
}

impl PartialEq for Letter {
    fn eq(&self, other: &Self) -> bool {
        self.grapheme == other.grapheme
    }
}

impl Eq for Letter {}

impl std::hash::Hash for Letter {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.grapheme.hash(state);
    }
}

impl std::fmt::Display for Letter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.grapheme)
    }
}
