use std::collections::BTreeSet;
use crate::analysis::token::{is_valid_word, Token};
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::core::error::{Error, Result};

/// Immutable set of words that are never indexed and never match.
#[derive(Debug, Clone, Default)]
pub struct StopWordFilter {
    stop_words: BTreeSet<String>,
}

impl StopWordFilter {
    pub fn new<I, S>(stop_words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut set = BTreeSet::new();
        for word in stop_words {
            let word = word.as_ref();
            if word.is_empty() {
                continue;
            }
            if !is_valid_word(word) {
                return Err(Error::invalid_word(word));
            }
            set.insert(word.to_string());
        }

        Ok(StopWordFilter { stop_words: set })
    }

    /// Builds the set from a space-separated list.
    pub fn from_text(text: &str) -> Result<Self> {
        let tokens = WhitespaceTokenizer.tokenize(text);
        StopWordFilter::new(tokens.iter().map(|t| t.text.as_str()))
    }

    pub fn contains(&self, word: &str) -> bool {
        self.stop_words.contains(word)
    }

    pub fn filter(&self, tokens: Vec<Token>) -> Vec<Token> {
        tokens.into_iter()
            .filter(|token| !self.contains(&token.text))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.stop_words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stop_words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;

    #[test]
    fn builds_from_text_and_ignores_repeats() {
        let filter = StopWordFilter::from_text("in the  in on").unwrap();
        assert_eq!(filter.len(), 3);
        assert!(filter.contains("the"));
        assert!(!filter.contains("cat"));
    }

    #[test]
    fn empty_strings_are_skipped() {
        let filter = StopWordFilter::new(["", "a", ""]).unwrap();
        assert_eq!(filter.len(), 1);
    }

    #[test]
    fn invalid_stop_word_is_rejected() {
        let err = StopWordFilter::new(vec!["in".to_string(), "t\u{1}he".to_string()]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidWord);
    }

    #[test]
    fn filter_drops_stop_tokens() {
        let filter = StopWordFilter::from_text("the").unwrap();
        let tokens = WhitespaceTokenizer.tokenize("the cat the dog");
        let kept: Vec<String> = filter.filter(tokens).into_iter().map(|t| t.text).collect();
        assert_eq!(kept, vec!["cat", "dog"]);
    }
}
