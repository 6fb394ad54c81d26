use std::time::Instant;
use rayon::prelude::*;
use tracing::debug;
use crate::core::engine::SearchEngine;
use crate::core::error::Result;
use crate::search::results::ScoredDocument;

/// Runs every query against `engine` in parallel. `result[i]` answers `queries[i]`.
///
/// The first malformed query fails the whole batch.
pub fn process_queries<S>(engine: &SearchEngine, queries: &[S]) -> Result<Vec<Vec<ScoredDocument>>>
where
    S: AsRef<str> + Sync,
{
    let start = Instant::now();

    let results = engine.install(|| {
        queries.par_iter()
            .map(|query| engine.find_top_documents(query.as_ref()))
            .collect::<Result<Vec<_>>>()
    })?;

    debug!(
        queries = queries.len(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "query batch processed"
    );
    Ok(results)
}

/// Like [`process_queries`], flattened in query order.
pub fn process_queries_joined<S>(engine: &SearchEngine, queries: &[S]) -> Result<Vec<ScoredDocument>>
where
    S: AsRef<str> + Sync,
{
    Ok(process_queries(engine, queries)?
        .into_iter()
        .flatten()
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;
    use crate::core::types::DocumentStatus;

    fn engine() -> SearchEngine {
        let mut engine = SearchEngine::new("and with").unwrap();
        let texts = [
            "funny pet and nasty rat",
            "funny pet with curly hair",
            "funny pet and not very nasty rat",
            "pet with rat and rat and rat",
            "nasty rat with curly hair",
        ];
        for (id, text) in texts.iter().enumerate() {
            engine.add_document(id as i32, text, DocumentStatus::Actual, &[1, 2]).unwrap();
        }
        engine
    }

    #[test]
    fn results_follow_query_order() {
        let engine = engine();
        let queries = ["nasty rat -not", "not very funny nasty pet", "curly hair"];
        let results = process_queries(&engine, &queries).unwrap();

        assert_eq!(results.len(), 3);
        for (query, batch) in queries.iter().zip(&results) {
            assert_eq!(batch, &engine.find_top_documents(query).unwrap());
        }
        assert_eq!(results.iter().map(Vec::len).collect::<Vec<_>>(), vec![3, 5, 2]);
    }

    #[test]
    fn joined_flattens_in_order() {
        let engine = engine();
        let queries = vec!["curly hair".to_string(), "rat -hair".to_string()];
        let nested = process_queries(&engine, &queries).unwrap();
        let joined = process_queries_joined(&engine, &queries).unwrap();

        let expected: Vec<ScoredDocument> = nested.into_iter().flatten().collect();
        assert_eq!(joined, expected);
        assert_eq!(joined.len(), 5);
    }

    #[test]
    fn malformed_query_fails_batch() {
        let engine = engine();
        let err = process_queries(&engine, &["rat", "--rat"]).unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidQueryWord);
    }

    #[test]
    fn empty_batch() {
        let engine = engine();
        let queries: [&str; 0] = [];
        assert!(process_queries_joined(&engine, &queries).unwrap().is_empty());
    }
}
