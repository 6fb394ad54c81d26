use std::collections::BTreeSet;
use crate::analysis::stopword::StopWordFilter;
use crate::analysis::token::is_valid_word;
use crate::analysis::tokenizer::Tokenizer;
use crate::core::error::{Error, Result};
use crate::query::ast::{Query, QueryWord};

/// Query parser for plus/minus word queries
pub struct QueryParser<'a> {
    pub tokenizer: &'a dyn Tokenizer,
    pub stop_words: &'a StopWordFilter,
}

impl<'a> QueryParser<'a> {
    pub fn new(tokenizer: &'a dyn Tokenizer, stop_words: &'a StopWordFilter) -> Self {
        QueryParser {
            tokenizer,
            stop_words,
        }
    }

    /// Parse a query string.
    /// Examples:
    /// - "white cat" -> plus words `cat`, `white`
    /// - "cat -dog" -> plus `cat`, minus `dog`
    /// - "--dog", "-", "ca\x01t" -> InvalidQueryWord
    pub fn parse(&self, input: &str) -> Result<Query> {
        let mut plus_words = BTreeSet::new();
        let mut minus_words = BTreeSet::new();

        for token in self.tokenizer.tokenize(input) {
            let word = self.parse_word(&token.text)?;
            if word.is_stop {
                continue;
            }
            if word.is_minus {
                minus_words.insert(word.text.to_string());
            } else {
                plus_words.insert(word.text.to_string());
            }
        }

        Ok(Query {
            plus_words: plus_words.into_iter().collect(),
            minus_words: minus_words.into_iter().collect(),
        })
    }

    pub fn parse_word<'t>(&self, token: &'t str) -> Result<QueryWord<'t>> {
        let (text, is_minus) = match token.strip_prefix('-') {
            Some(rest) => (rest, true),
            None => (token, false),
        };

        if text.is_empty() || text.starts_with('-') || !is_valid_word(text) {
            return Err(Error::invalid_query_word(token));
        }

        Ok(QueryWord {
            text,
            is_minus,
            is_stop: self.stop_words.contains(text),
        })
    }
}
