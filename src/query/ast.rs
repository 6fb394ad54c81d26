use serde::{Serialize, Deserialize};

/// Parsed query: words that score and words that exclude.
///
/// Both lists are sorted and free of duplicates. Stop words never appear.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub plus_words: Vec<String>,   // contribute relevance
    pub minus_words: Vec<String>,  // any match removes the document
}

impl Query {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.plus_words.is_empty() && self.minus_words.is_empty()
    }
}

/// One classified query token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QueryWord<'a> {
    pub text: &'a str,
    pub is_minus: bool,
    pub is_stop: bool,
}
