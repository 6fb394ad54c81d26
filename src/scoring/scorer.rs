/// TF-IDF weighting.
///
/// Term frequency is stored pre-normalized in the index (occurrences divided
/// by the document's indexed word count), so scoring only multiplies it by
/// the inverse document frequency of the term.
#[derive(Debug, Clone, Copy, Default)]
pub struct TfIdfScorer;

impl TfIdfScorer {
    /// IDF = ln(N / df). `doc_freq` is never zero for a word present in the index.
    #[inline]
    pub fn idf(&self, total_docs: usize, doc_freq: usize) -> f64 {
        (total_docs as f64 / doc_freq as f64).ln()
    }

    #[inline]
    pub fn score(&self, term_freq: f64, idf: f64) -> f64 {
        term_freq * idf
    }

    pub fn name(&self) -> &str {
        "tfidf"
    }
}
