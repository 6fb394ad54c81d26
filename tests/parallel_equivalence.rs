use proptest::prelude::*;
use rankdex::core::engine::{ExecutionPolicy, SearchEngine};
use rankdex::core::types::{DocId, DocumentStatus};
use rankdex::search::results::ScoredDocument;
use rankdex::writer::duplicates::{find_duplicates, remove_duplicates};

const VOCABULARY: &[&str] = &[
    "cat", "dog", "rat", "white", "black", "fluffy", "collar", "tail", "eyes", "the", "and",
];

type Corpus = Vec<(Vec<&'static str>, DocumentStatus, Vec<i32>)>;

fn status() -> impl Strategy<Value = DocumentStatus> {
    prop_oneof![
        Just(DocumentStatus::Actual),
        Just(DocumentStatus::Irrelevant),
        Just(DocumentStatus::Banned),
        Just(DocumentStatus::Removed),
    ]
}

fn corpus() -> impl Strategy<Value = Corpus> {
    prop::collection::vec(
        (
            prop::collection::vec(prop::sample::select(VOCABULARY), 1..8),
            status(),
            prop::collection::vec(-10i32..10, 0..4),
        ),
        1..25,
    )
}

fn raw_query() -> impl Strategy<Value = String> {
    (
        prop::collection::vec(prop::sample::select(VOCABULARY), 1..4),
        prop::collection::vec(prop::sample::select(VOCABULARY), 0..2),
    )
        .prop_map(|(plus, minus)| {
            let mut words: Vec<String> = plus.into_iter().map(String::from).collect();
            words.extend(minus.into_iter().map(|w| format!("-{w}")));
            words.join(" ")
        })
}

fn build(corpus: &Corpus) -> SearchEngine {
    let mut engine = SearchEngine::new("the and").unwrap();
    for (id, (words, status, ratings)) in corpus.iter().enumerate() {
        engine.add_document(id as i32, &words.join(" "), *status, ratings).unwrap();
    }
    engine
}

fn assert_same_ranking(seq: &[ScoredDocument], par: &[ScoredDocument]) -> Result<(), TestCaseError> {
    prop_assert_eq!(seq.len(), par.len());
    for (s, p) in seq.iter().zip(par) {
        prop_assert_eq!(s.id, p.id);
        prop_assert_eq!(s.rating, p.rating);
        prop_assert!((s.relevance - p.relevance).abs() < 1e-9);
    }
    Ok(())
}

proptest! {
    #[test]
    fn find_top_documents_is_policy_independent(corpus in corpus(), query in raw_query(), odd in any::<bool>()) {
        let engine = build(&corpus);
        let predicate = |id: DocId, status: DocumentStatus, _rating: i32| {
            status != DocumentStatus::Removed && (id.0 % 2 == 1) == odd
        };

        let seq = engine.find_top_documents_with_policy(ExecutionPolicy::Sequential, &query, predicate).unwrap();
        let par = engine.find_top_documents_with_policy(ExecutionPolicy::Parallel, &query, predicate).unwrap();
        assert_same_ranking(&seq, &par)?;
    }

    #[test]
    fn match_document_is_policy_independent(corpus in corpus(), query in raw_query()) {
        let engine = build(&corpus);
        for id in engine.document_ids() {
            let seq = engine.match_document_with_policy(ExecutionPolicy::Sequential, &query, id).unwrap();
            let par = engine.match_document_with_policy(ExecutionPolicy::Parallel, &query, id).unwrap();
            prop_assert_eq!(seq, par);
        }
    }

    #[test]
    fn removal_is_policy_independent(corpus in corpus(), victims in prop::collection::vec(0i32..30, 0..10), query in raw_query()) {
        let mut seq = build(&corpus);
        let mut par = build(&corpus);
        for &id in &victims {
            seq.remove_document_with_policy(ExecutionPolicy::Sequential, id);
            par.remove_document_with_policy(ExecutionPolicy::Parallel, id);
        }

        prop_assert_eq!(seq.stats(), par.stats());
        prop_assert_eq!(seq.document_ids().collect::<Vec<_>>(), par.document_ids().collect::<Vec<_>>());
        for id in seq.document_ids() {
            prop_assert_eq!(seq.word_frequencies(id), par.word_frequencies(id));
        }

        let all = |_: DocId, _: DocumentStatus, _: i32| true;
        let seq_hits = seq.find_top_documents_with(&query, all).unwrap();
        let par_hits = par.find_top_documents_with(&query, all).unwrap();
        assert_same_ranking(&seq_hits, &par_hits)?;
        for id in &victims {
            prop_assert!(!seq_hits.iter().any(|h| h.id.0 == *id));
            prop_assert!(seq.word_frequencies(*id).is_empty());
        }
    }

    #[test]
    fn minus_words_always_exclude(corpus in corpus(), query in raw_query()) {
        let engine = build(&corpus);
        let parsed = engine.parse_query(&query).unwrap();
        let hits = engine.find_top_documents_with(&query, |_, _, _| true).unwrap();
        for hit in &hits {
            let words = engine.word_frequencies(hit.id);
            prop_assert!(!parsed.minus_words.iter().any(|w| words.contains_key(w)));
        }
    }

    #[test]
    fn remove_duplicates_is_idempotent(corpus in corpus()) {
        let mut engine = build(&corpus);
        let before = engine.document_count();
        let removed = remove_duplicates(&mut engine);
        prop_assert_eq!(engine.document_count(), before - removed.len());
        prop_assert!(find_duplicates(&engine).is_empty());
        prop_assert!(remove_duplicates(&mut engine).is_empty());
    }
}
