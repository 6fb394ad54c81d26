use std::collections::BTreeMap;
use rayon::prelude::*;
use rayon::ThreadPool;
use tracing::{debug, warn};
use crate::analysis::stopword::StopWordFilter;
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::core::config::Config;
use crate::core::error::{Error, Result};
use crate::core::stats::IndexStats;
use crate::core::types::{DocId, DocumentData, DocumentStatus};
use crate::index::inverted::{InvertedIndex, WordFrequencies};
use crate::parallel::concurrent_map::ConcurrentMap;
use crate::query::ast::Query;
use crate::query::parser::QueryParser;
use crate::scoring::scorer::TfIdfScorer;
use crate::search::results::{rank, ScoredDocument};

/// How an operation spreads its work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExecutionPolicy {
    #[default]
    Sequential,
    /// Fan out on the engine's rayon pool.
    Parallel,
}

/// In-memory TF-IDF search engine.
///
/// Mutations take `&mut self`, so they can never overlap with queries on the
/// same engine. Queries take `&self` and may run from many threads.
pub struct SearchEngine {
    config: Config,
    tokenizer: Box<dyn Tokenizer>,
    stop_words: StopWordFilter,
    scorer: TfIdfScorer,
    index: InvertedIndex,
    pool: Option<ThreadPool>, // None: global rayon pool
}

impl SearchEngine {
    /// Engine with default configuration; `stop_words` is space-separated.
    pub fn new(stop_words: &str) -> Result<Self> {
        Self::with_config(StopWordFilter::from_text(stop_words)?, Config::default())
    }

    pub fn from_stop_words<I, S>(stop_words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_config(StopWordFilter::new(stop_words)?, Config::default())
    }

    pub fn with_config(stop_words: StopWordFilter, config: Config) -> Result<Self> {
        config.validate()?;

        let pool = match config.resolved_worker_threads() {
            Some(threads) => {
                let pool = rayon::ThreadPoolBuilder::new()
                    .num_threads(threads)
                    .thread_name(|i| format!("rankdex-worker-{}", i))
                    .build()
                    .inspect_err(|e| warn!(threads, error = %e, "failed to build worker pool"))?;
                Some(pool)
            }
            None => None,
        };

        Ok(SearchEngine {
            config,
            tokenizer: Box::new(WhitespaceTokenizer),
            stop_words,
            scorer: TfIdfScorer,
            index: InvertedIndex::new(),
            pool,
        })
    }

    pub fn with_tokenizer(mut self, tokenizer: Box<dyn Tokenizer>) -> Self {
        self.tokenizer = tokenizer;
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn stop_words(&self) -> &StopWordFilter {
        &self.stop_words
    }

    /// Runs `op` on the engine's pool, or inline on the global pool.
    pub(crate) fn install<R, F>(&self, op: F) -> R
    where
        R: Send,
        F: FnOnce() -> R + Send,
    {
        install(self.pool.as_ref(), op)
    }

    /// Indexes a document. Nothing changes unless every check passes.
    pub fn add_document(
        &mut self,
        id: impl Into<DocId>,
        text: &str,
        status: DocumentStatus,
        ratings: &[i32],
    ) -> Result<()> {
        let id = id.into();
        if id.0 < 0 || self.index.contains(id) {
            return Err(Error::invalid_id(id));
        }

        let tokens = self.tokenizer.tokenize(text);
        if let Some(bad) = tokens.iter().find(|token| !token.is_valid()) {
            return Err(Error::invalid_word(&bad.text));
        }

        let words: Vec<String> = self.stop_words.filter(tokens)
            .into_iter()
            .map(|token| token.text)
            .collect();

        self.index.add_document(id, DocumentData::new(ratings, status), &words)?;
        debug!(doc_id = id.0, words = words.len(), "document indexed");
        Ok(())
    }

    pub fn remove_document(&mut self, id: impl Into<DocId>) {
        self.remove_document_with_policy(ExecutionPolicy::Sequential, id);
    }

    /// No-op for an id that is not indexed.
    pub fn remove_document_with_policy(&mut self, policy: ExecutionPolicy, id: impl Into<DocId>) {
        let id = id.into();
        let removed = match policy {
            ExecutionPolicy::Sequential => self.index.remove_document(id),
            ExecutionPolicy::Parallel => {
                let index = &mut self.index;
                install(self.pool.as_ref(), || index.remove_document_par(id))
            }
        };
        if removed.is_some() {
            debug!(doc_id = id.0, ?policy, "document removed");
        }
    }

    pub fn parse_query(&self, raw_query: &str) -> Result<Query> {
        QueryParser::new(self.tokenizer.as_ref(), &self.stop_words).parse(raw_query)
    }

    /// Top documents with status `Actual`.
    pub fn find_top_documents(&self, raw_query: &str) -> Result<Vec<ScoredDocument>> {
        self.find_top_documents_by_status(raw_query, DocumentStatus::Actual)
    }

    pub fn find_top_documents_by_status(&self, raw_query: &str, status: DocumentStatus) -> Result<Vec<ScoredDocument>> {
        self.find_top_documents_with(raw_query, move |_, document_status, _| document_status == status)
    }

    pub fn find_top_documents_with<P>(&self, raw_query: &str, predicate: P) -> Result<Vec<ScoredDocument>>
    where
        P: Fn(DocId, DocumentStatus, i32) -> bool + Sync,
    {
        self.find_top_documents_with_policy(ExecutionPolicy::Sequential, raw_query, predicate)
    }

    /// Ranks documents matching `raw_query` and accepted by `predicate`.
    ///
    /// A document containing any minus word is dropped whatever the
    /// predicate says.
    pub fn find_top_documents_with_policy<P>(
        &self,
        policy: ExecutionPolicy,
        raw_query: &str,
        predicate: P,
    ) -> Result<Vec<ScoredDocument>>
    where
        P: Fn(DocId, DocumentStatus, i32) -> bool + Sync,
    {
        let query = self.parse_query(raw_query)?;
        let matched = match policy {
            ExecutionPolicy::Sequential => self.find_all_documents(&query, &predicate),
            ExecutionPolicy::Parallel => self.install(|| self.find_all_documents_par(&query, &predicate)),
        };

        Ok(rank(matched, self.config.relevance_epsilon, self.config.max_result_document_count))
    }

    fn find_all_documents<P>(&self, query: &Query, predicate: &P) -> Vec<ScoredDocument>
    where
        P: Fn(DocId, DocumentStatus, i32) -> bool,
    {
        let mut relevance: BTreeMap<DocId, f64> = BTreeMap::new();

        for word in &query.plus_words {
            let Some(postings) = self.index.postings(word) else { continue };
            let idf = self.scorer.idf(self.index.len(), postings.len());
            for (&doc_id, &tf) in postings {
                if self.accepts(doc_id, predicate) {
                    *relevance.entry(doc_id).or_insert(0.0) += self.scorer.score(tf, idf);
                }
            }
        }

        for word in &query.minus_words {
            let Some(postings) = self.index.postings(word) else { continue };
            for doc_id in postings.keys() {
                relevance.remove(doc_id);
            }
        }

        self.materialize(relevance)
    }

    fn find_all_documents_par<P>(&self, query: &Query, predicate: &P) -> Vec<ScoredDocument>
    where
        P: Fn(DocId, DocumentStatus, i32) -> bool + Sync,
    {
        let relevance: ConcurrentMap<DocId, f64> = ConcurrentMap::new(self.config.accumulator_buckets);

        query.plus_words.par_iter().for_each(|word| {
            let Some(postings) = self.index.postings(word) else { return };
            let idf = self.scorer.idf(self.index.len(), postings.len());
            for (&doc_id, &tf) in postings {
                if self.accepts(doc_id, predicate) {
                    *relevance.access(doc_id) += self.scorer.score(tf, idf);
                }
            }
        });

        // exclusion runs after every addition has landed
        query.minus_words.par_iter().for_each(|word| {
            let Some(postings) = self.index.postings(word) else { return };
            for &doc_id in postings.keys() {
                relevance.erase(doc_id);
            }
        });

        self.materialize(relevance.into_map())
    }

    fn accepts<P>(&self, doc_id: DocId, predicate: &P) -> bool
    where
        P: Fn(DocId, DocumentStatus, i32) -> bool,
    {
        self.index.document(doc_id)
            .is_some_and(|data| predicate(doc_id, data.status, data.rating))
    }

    fn materialize(&self, relevance: BTreeMap<DocId, f64>) -> Vec<ScoredDocument> {
        relevance.into_iter()
            .filter_map(|(doc_id, relevance)| {
                self.index.document(doc_id)
                    .map(|data| ScoredDocument::new(doc_id, relevance, data.rating))
            })
            .collect()
    }

    pub fn match_document(&self, raw_query: &str, id: impl Into<DocId>) -> Result<(Vec<String>, DocumentStatus)> {
        self.match_document_with_policy(ExecutionPolicy::Sequential, raw_query, id)
    }

    /// Plus words of the query found in the document, sorted. Empty when the
    /// document contains any minus word.
    pub fn match_document_with_policy(
        &self,
        policy: ExecutionPolicy,
        raw_query: &str,
        id: impl Into<DocId>,
    ) -> Result<(Vec<String>, DocumentStatus)> {
        let id = id.into();
        let status = self.index.document(id)
            .map(|data| data.status)
            .ok_or_else(|| Error::unknown_document(id))?;
        let query = self.parse_query(raw_query)?;
        let words = self.index.word_frequencies(id);

        let matched: Vec<String> = match policy {
            ExecutionPolicy::Sequential => {
                if query.minus_words.iter().any(|word| words.contains_key(word)) {
                    return Ok((Vec::new(), status));
                }
                query.plus_words.iter()
                    .filter(|word| words.contains_key(*word))
                    .cloned()
                    .collect()
            }
            ExecutionPolicy::Parallel => self.install(|| {
                if query.minus_words.par_iter().any(|word| words.contains_key(word)) {
                    return Vec::new();
                }
                query.plus_words.par_iter()
                    .filter(|word| words.contains_key(*word))
                    .cloned()
                    .collect::<Vec<String>>()
            }),
        };

        Ok((matched, status))
    }

    pub fn document_count(&self) -> usize {
        self.index.len()
    }

    /// Live document ids in ascending order.
    pub fn document_ids(&self) -> impl Iterator<Item = DocId> + '_ {
        self.index.ids()
    }

    /// Term frequencies of a document; empty if the id is not indexed.
    pub fn word_frequencies(&self, id: impl Into<DocId>) -> &WordFrequencies {
        self.index.word_frequencies(id.into())
    }

    pub fn stats(&self) -> IndexStats {
        IndexStats {
            document_count: self.index.len(),
            word_count: self.index.word_count(),
            posting_count: self.index.posting_count(),
            stop_word_count: self.stop_words.len(),
        }
    }
}

fn install<R, F>(pool: Option<&ThreadPool>, op: F) -> R
where
    R: Send,
    F: FnOnce() -> R + Send,
{
    match pool {
        Some(pool) => pool.install(op),
        None => op(),
    }
}
