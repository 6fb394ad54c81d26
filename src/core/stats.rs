use serde::{Serialize, Deserialize};

/// Index statistics for monitoring
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct IndexStats {
    pub document_count: usize,
    pub word_count: usize,      // distinct indexed words
    pub posting_count: usize,   // (word, document) pairs
    pub stop_word_count: usize,
}

impl IndexStats {
    /// Mean number of distinct words per live document.
    pub fn average_words_per_document(&self) -> f64 {
        if self.document_count == 0 {
            0.0
        } else {
            self.posting_count as f64 / self.document_count as f64
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn average_of_empty_index_is_zero() {
        assert_eq!(IndexStats::default().average_words_per_document(), 0.0);
    }

    #[test]
    fn serializes_as_json_object() {
        let stats = IndexStats { document_count: 2, word_count: 3, posting_count: 4, stop_word_count: 1 };
        let json = serde_json::to_value(stats).unwrap();
        assert_eq!(json["posting_count"], 4);
        assert_eq!(stats.average_words_per_document(), 2.0);
    }
}
