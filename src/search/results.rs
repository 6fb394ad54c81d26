use std::fmt;
use serde::{Serialize, Deserialize};
use crate::core::types::DocId;

/// Document with relevance score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoredDocument {
    pub id: DocId,
    pub relevance: f64,
    pub rating: i32,
}

impl ScoredDocument {
    pub fn new(id: DocId, relevance: f64, rating: i32) -> Self {
        ScoredDocument { id, relevance, rating }
    }
}

impl fmt::Display for ScoredDocument {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{ document_id = {}, relevance = {}, rating = {} }}",
               self.id, self.relevance, self.rating)
    }
}

/// Orders hits by relevance (descending) and keeps the first `limit`.
///
/// Neighbouring hits whose relevance differs by less than `epsilon` form a
/// tie run, ordered by rating (descending) and then id (ascending).
pub fn rank(mut hits: Vec<ScoredDocument>, epsilon: f64, limit: usize) -> Vec<ScoredDocument> {
    hits.sort_by(|a, b| b.relevance.total_cmp(&a.relevance));

    let mut start = 0;
    while start < hits.len() && start < limit {
        let mut end = start + 1;
        while end < hits.len() && (hits[end - 1].relevance - hits[end].relevance).abs() < epsilon {
            end += 1;
        }
        hits[start..end].sort_by(|a, b| b.rating.cmp(&a.rating).then(a.id.cmp(&b.id)));
        start = end;
    }

    hits.truncate(limit);
    hits
}
