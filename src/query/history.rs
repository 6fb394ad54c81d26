use std::collections::VecDeque;
use crate::core::engine::SearchEngine;
use crate::core::error::Result;
use crate::core::types::{DocId, DocumentStatus};
use crate::search::results::ScoredDocument;

#[derive(Debug, Clone, Copy)]
struct RequestRecord {
    was_empty: bool,
}

/// Tracks how many of the most recent requests returned nothing.
///
/// Holds the last `window` requests; the empty-result counter is kept in
/// step with the window so reading it is O(1).
pub struct RequestHistory<'a> {
    engine: &'a SearchEngine,
    requests: VecDeque<RequestRecord>,
    window: usize,
    no_result_count: usize,
}

impl<'a> RequestHistory<'a> {
    /// Window size comes from the engine's configuration.
    pub fn new(engine: &'a SearchEngine) -> Self {
        Self::with_window(engine, engine.config().history_window)
    }

    pub fn with_window(engine: &'a SearchEngine, window: usize) -> Self {
        let window = window.max(1);
        RequestHistory {
            engine,
            requests: VecDeque::with_capacity(window),
            window,
            no_result_count: 0,
        }
    }

    pub fn add_find_request(&mut self, raw_query: &str) -> Result<Vec<ScoredDocument>> {
        let results = self.engine.find_top_documents(raw_query)?;
        self.record(&results);
        Ok(results)
    }

    pub fn add_find_request_by_status(&mut self, raw_query: &str, status: DocumentStatus) -> Result<Vec<ScoredDocument>> {
        let results = self.engine.find_top_documents_by_status(raw_query, status)?;
        self.record(&results);
        Ok(results)
    }

    pub fn add_find_request_with<P>(&mut self, raw_query: &str, predicate: P) -> Result<Vec<ScoredDocument>>
    where
        P: Fn(DocId, DocumentStatus, i32) -> bool + Sync,
    {
        let results = self.engine.find_top_documents_with(raw_query, predicate)?;
        self.record(&results);
        Ok(results)
    }

    fn record(&mut self, results: &[ScoredDocument]) {
        let was_empty = results.is_empty();
        self.requests.push_back(RequestRecord { was_empty });
        if was_empty {
            self.no_result_count += 1;
        }

        if self.requests.len() > self.window {
            if let Some(evicted) = self.requests.pop_front() {
                if evicted.was_empty {
                    self.no_result_count -= 1;
                }
            }
        }
    }

    pub fn no_result_requests(&self) -> usize {
        self.no_result_count
    }

    /// Requests currently inside the window.
    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }

    pub fn window(&self) -> usize {
        self.window
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::error::ErrorKind;

    fn engine() -> SearchEngine {
        let mut engine = SearchEngine::new("and in at").unwrap();
        engine.add_document(1, "curly cat curly tail", DocumentStatus::Actual, &[7, 2, 7]).unwrap();
        engine.add_document(2, "curly dog and fancy collar", DocumentStatus::Actual, &[1, 2, 3]).unwrap();
        engine.add_document(3, "big cat fancy collar ", DocumentStatus::Actual, &[1, 2, 8]).unwrap();
        engine.add_document(4, "big dog sparrow Eugene", DocumentStatus::Actual, &[1, 3, 2]).unwrap();
        engine.add_document(5, "big dog sparrow Vasiliy", DocumentStatus::Actual, &[1, 1, 1]).unwrap();
        engine
    }

    #[test]
    fn window_evicts_oldest_requests() {
        let engine = engine();
        let mut history = RequestHistory::new(&engine);

        for _ in 0..1439 {
            history.add_find_request("empty request").unwrap();
        }
        assert_eq!(history.no_result_requests(), 1439);

        history.add_find_request("curly dog").unwrap();
        assert_eq!(history.no_result_requests(), 1439);
        assert_eq!(history.len(), 1440);

        // first empty request leaves the window
        history.add_find_request("big collar").unwrap();
        assert_eq!(history.no_result_requests(), 1438);

        history.add_find_request("sparrow").unwrap();
        assert_eq!(history.no_result_requests(), 1437);
        assert_eq!(history.len(), 1440);
    }

    #[test]
    fn count_caps_at_window() {
        let engine = engine();
        let mut history = RequestHistory::new(&engine);
        for _ in 0..1441 {
            history.add_find_request("nothing matches").unwrap();
        }
        assert_eq!(history.no_result_requests(), 1440);
    }

    #[test]
    fn results_pass_through_unchanged() {
        let engine = engine();
        let mut history = RequestHistory::with_window(&engine, 3);

        let results = history.add_find_request_by_status("big dog", DocumentStatus::Actual).unwrap();
        assert_eq!(results, engine.find_top_documents("big dog").unwrap());

        let rated = history.add_find_request_with("big", |_, _, rating| rating > 2).unwrap();
        assert_eq!(rated.len(), 1);
        assert_eq!(rated[0].id, DocId(3));
        assert_eq!(history.no_result_requests(), 0);
    }

    #[test]
    fn failed_query_is_not_recorded() {
        let engine = engine();
        let mut history = RequestHistory::with_window(&engine, 3);
        let err = history.add_find_request("cat --dog").unwrap_err();
        assert_eq!(err.kind, ErrorKind::InvalidQueryWord);
        assert!(history.is_empty());
    }
}
