use std::collections::{BTreeMap, BTreeSet, HashMap};
use rayon::prelude::*;
use crate::core::error::{Error, Result};
use crate::core::types::{DocId, DocumentData};

/// doc -> term frequency for one word
pub type Postings = BTreeMap<DocId, f64>;

/// word -> term frequency for one document
pub type WordFrequencies = BTreeMap<String, f64>;

static EMPTY_FREQUENCIES: WordFrequencies = BTreeMap::new();

/// Inverted index kept in two synchronized views.
///
/// `word_to_docs` drives scoring; `doc_to_words` is its transpose so that a
/// document can be removed by visiting only its own words. Every
/// (word, doc, tf) triple present in one view is present in the other.
#[derive(Debug, Default)]
pub struct InvertedIndex {
    word_to_docs: HashMap<String, Postings>,
    doc_to_words: HashMap<DocId, WordFrequencies>,
    documents: HashMap<DocId, DocumentData>,
    live_ids: BTreeSet<DocId>,
}

impl InvertedIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Indexes `words` (already validated and stop-filtered) under `doc_id`.
    /// Each occurrence adds `1 / words.len()` to the word's term frequency.
    pub fn add_document<S: AsRef<str>>(&mut self, doc_id: DocId, data: DocumentData, words: &[S]) -> Result<()> {
        if doc_id.0 < 0 || self.contains(doc_id) {
            return Err(Error::invalid_id(doc_id));
        }

        let mut frequencies = WordFrequencies::new();
        if !words.is_empty() {
            let inv_word_count = 1.0 / words.len() as f64;
            for word in words {
                *frequencies.entry(word.as_ref().to_string()).or_insert(0.0) += inv_word_count;
            }
        }

        for (word, &tf) in &frequencies {
            self.word_to_docs
                .entry(word.clone())
                .or_default()
                .insert(doc_id, tf);
        }

        self.doc_to_words.insert(doc_id, frequencies);
        self.documents.insert(doc_id, data);
        self.live_ids.insert(doc_id);

        Ok(())
    }

    pub fn remove_document(&mut self, doc_id: DocId) -> Option<DocumentData> {
        let data = self.detach(doc_id)?;
        let words = self.doc_to_words.remove(&doc_id).unwrap_or_default();

        for word in words.keys() {
            if let Some(postings) = self.word_to_docs.get_mut(word) {
                postings.remove(&doc_id);
                if postings.is_empty() {
                    self.word_to_docs.remove(word);
                }
            }
        }

        Some(data)
    }

    /// Same effect as [`remove_document`](Self::remove_document); the per-word
    /// erasures run on the current rayon pool. Posting lists of the document's
    /// words are detached first so every worker owns a disjoint list.
    pub fn remove_document_par(&mut self, doc_id: DocId) -> Option<DocumentData> {
        let data = self.detach(doc_id)?;
        let words = self.doc_to_words.remove(&doc_id).unwrap_or_default();

        let mut detached: Vec<(String, Postings)> = words.keys()
            .filter_map(|word| self.word_to_docs.remove_entry(word))
            .collect();

        detached.par_iter_mut().for_each(|(_, postings)| {
            postings.remove(&doc_id);
        });

        self.word_to_docs.extend(
            detached.into_iter().filter(|(_, postings)| !postings.is_empty())
        );

        Some(data)
    }

    fn detach(&mut self, doc_id: DocId) -> Option<DocumentData> {
        let data = self.documents.remove(&doc_id)?;
        self.live_ids.remove(&doc_id);
        Some(data)
    }

    pub fn contains(&self, doc_id: DocId) -> bool {
        self.documents.contains_key(&doc_id)
    }

    pub fn document(&self, doc_id: DocId) -> Option<&DocumentData> {
        self.documents.get(&doc_id)
    }

    pub fn postings(&self, word: &str) -> Option<&Postings> {
        self.word_to_docs.get(word)
    }

    /// Empty map for an unknown document.
    pub fn word_frequencies(&self, doc_id: DocId) -> &WordFrequencies {
        self.doc_to_words.get(&doc_id).unwrap_or(&EMPTY_FREQUENCIES)
    }

    /// Live ids in ascending order.
    pub fn ids(&self) -> impl Iterator<Item = DocId> + '_ {
        self.live_ids.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.documents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    pub fn word_count(&self) -> usize {
        self.word_to_docs.len()
    }

    pub fn posting_count(&self) -> usize {
        self.word_to_docs.values().map(|postings| postings.len()).sum()
    }
}
