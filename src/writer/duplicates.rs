use std::collections::BTreeSet;
use tracing::info;
use crate::core::engine::SearchEngine;
use crate::core::types::DocId;

/// Ids of documents whose set of indexed words repeats that of a document
/// with a smaller id. The first occurrence is never reported.
pub fn find_duplicates(engine: &SearchEngine) -> Vec<DocId> {
    let mut seen: BTreeSet<Vec<&str>> = BTreeSet::new();
    let mut duplicates = Vec::new();

    for doc_id in engine.document_ids() {
        // keys of the frequency map are sorted and distinct: a canonical word set
        let words: Vec<&str> = engine.word_frequencies(doc_id)
            .keys()
            .map(String::as_str)
            .collect();
        if !seen.insert(words) {
            duplicates.push(doc_id);
        }
    }

    duplicates
}

/// Removes every document reported by [`find_duplicates`] and returns their ids.
pub fn remove_duplicates(engine: &mut SearchEngine) -> Vec<DocId> {
    let duplicates = find_duplicates(engine);
    for &doc_id in &duplicates {
        info!(doc_id = doc_id.0, "Found duplicate document id {}", doc_id);
        engine.remove_document(doc_id);
    }
    duplicates
}
