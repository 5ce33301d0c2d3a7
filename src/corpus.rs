//! Training corpus and frozen corpus statistics.
//!
//! A [`Corpus`] is an ordered collection of training documents. Corpus-wide
//! statistics ([`CorpusStats`]) are computed in a single pass only after the
//! corpus is fully assembled: the document frequency of a term depends on
//! every document that shares it, so no transform may run against a partial
//! corpus. Once built, the statistics are immutable and every later pass is a
//! pure function of a document plus the frozen statistics.

use std::collections::BTreeSet;

use ahash::AHashMap;
use log::info;

use crate::document::Document;
use crate::error::{Result, VerbenaError};

/// An ordered collection of training documents.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    documents: Vec<Document>,
}

impl Corpus {
    /// Create an empty corpus.
    pub fn new() -> Self {
        Corpus {
            documents: Vec::new(),
        }
    }

    /// Create a corpus from a collection of documents.
    pub fn from_documents(documents: Vec<Document>) -> Self {
        Corpus { documents }
    }

    /// Add a document to the corpus.
    pub fn push(&mut self, document: Document) {
        self.documents.push(document);
    }

    /// Number of documents in the corpus.
    pub fn len(&self) -> usize {
        self.documents.len()
    }

    /// Whether the corpus contains no documents.
    pub fn is_empty(&self) -> bool {
        self.documents.is_empty()
    }

    /// The documents in insertion order.
    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub(crate) fn documents_mut(&mut self) -> &mut [Document] {
        &mut self.documents
    }

    /// The set of distinct labels observed across the corpus, sorted.
    ///
    /// Unlabeled documents contribute nothing.
    pub fn labels(&self) -> BTreeSet<String> {
        self.documents
            .iter()
            .filter_map(|doc| doc.label())
            .map(str::to_string)
            .collect()
    }

    /// Whether every document carries weighted counts.
    pub fn is_transformed(&self) -> bool {
        self.documents.iter().all(Document::is_transformed)
    }
}

/// Frozen corpus-wide statistics, built in one pass over a complete corpus.
///
/// Holds the total document count and per-term document frequencies; the
/// vocabulary at this stage is exactly the set of terms with a nonzero
/// document frequency.
#[derive(Debug, Clone)]
pub struct CorpusStats {
    doc_count: usize,
    document_frequency: AHashMap<String, u64>,
}

impl CorpusStats {
    /// Build statistics from a fully assembled corpus.
    ///
    /// Fails fast on an empty corpus: every statistic would be degenerate.
    pub fn from_corpus(corpus: &Corpus) -> Result<Self> {
        if corpus.is_empty() {
            return Err(VerbenaError::corpus(
                "cannot compute statistics for an empty corpus",
            ));
        }

        let mut document_frequency: AHashMap<String, u64> = AHashMap::new();
        for document in corpus.documents() {
            for term in document.terms() {
                *document_frequency.entry(term.to_string()).or_insert(0) += 1;
            }
        }

        info!(
            "corpus statistics: {} documents, {} distinct terms",
            corpus.len(),
            document_frequency.len()
        );

        Ok(CorpusStats {
            doc_count: corpus.len(),
            document_frequency,
        })
    }

    /// Total number of documents the statistics were built from.
    pub fn doc_count(&self) -> usize {
        self.doc_count
    }

    /// Number of documents containing the term at least once.
    pub fn document_frequency(&self, term: &str) -> u64 {
        self.document_frequency.get(term).copied().unwrap_or(0)
    }

    /// Whether the term occurred in any document.
    pub fn contains_term(&self, term: &str) -> bool {
        self.document_frequency.contains_key(term)
    }

    /// Number of distinct terms across the corpus.
    pub fn vocabulary_len(&self) -> usize {
        self.document_frequency.len()
    }

    /// Inverse document frequency factor `ln(N / df)`.
    ///
    /// Returns `None` for a term absent from the corpus. A term present in
    /// every document yields exactly `0.0` (`ln(1)`), zeroing its weight
    /// contribution by construction.
    pub fn idf(&self, term: &str) -> Option<f64> {
        let df = self.document_frequency(term);
        if df == 0 {
            return None;
        }
        Some((self.doc_count as f64 / df as f64).ln())
    }
}

/// Compute the vocabulary surviving frequency pruning, sorted.
///
/// Aggregates each term's weighted count across the corpus; terms whose
/// aggregate exceeds `fraction` of the single largest aggregate are removed.
/// These near-stopword terms dominate every class and carry little signal.
/// With `fraction = None` pruning is skipped and the full vocabulary is
/// returned.
///
/// Precondition: the transform pass has run over the whole corpus.
pub fn surviving_vocabulary(corpus: &Corpus, fraction: Option<f64>) -> Result<Vec<String>> {
    if !corpus.is_transformed() {
        return Err(VerbenaError::corpus(
            "vocabulary pruning requires transformed documents",
        ));
    }

    let mut aggregate: AHashMap<&str, f64> = AHashMap::new();
    for document in corpus.documents() {
        if let Some(weighted) = document.weighted_counts() {
            for (term, value) in weighted {
                *aggregate.entry(term.as_str()).or_insert(0.0) += value;
            }
        }
    }

    let vocabulary: Vec<String> = match fraction {
        None => {
            let mut terms: Vec<String> = aggregate.keys().map(|t| t.to_string()).collect();
            terms.sort_unstable();
            terms
        }
        Some(fraction) => {
            let max = aggregate.values().copied().fold(0.0_f64, f64::max);
            let threshold = max * fraction;
            let mut terms: Vec<String> = aggregate
                .iter()
                .filter(|&(_, &sum)| sum <= threshold)
                .map(|(term, _)| term.to_string())
                .collect();
            terms.sort_unstable();
            info!(
                "vocabulary pruning removed {} of {} terms (threshold {:.4})",
                aggregate.len() - terms.len(),
                aggregate.len(),
                threshold
            );
            terms
        }
    };

    Ok(vocabulary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::PipelineAnalyzer;
    use crate::transform::{TransformConfig, TransformPipeline};

    fn corpus() -> Corpus {
        let analyzer = PipelineAnalyzer::standard();
        Corpus::from_documents(vec![
            Document::labeled("buy now buy now", "spam", &analyzer).unwrap(),
            Document::labeled("meeting notes", "ham", &analyzer).unwrap(),
            Document::labeled("buy cheap now", "spam", &analyzer).unwrap(),
        ])
    }

    #[test]
    fn test_labels_sorted_and_distinct() {
        let labels: Vec<String> = corpus().labels().into_iter().collect();
        assert_eq!(labels, vec!["ham".to_string(), "spam".to_string()]);
    }

    #[test]
    fn test_stats_document_frequency() {
        let corpus = corpus();
        let stats = CorpusStats::from_corpus(&corpus).unwrap();

        assert_eq!(stats.doc_count(), 3);
        assert_eq!(stats.document_frequency("buy"), 2);
        assert_eq!(stats.document_frequency("meeting"), 1);
        assert_eq!(stats.document_frequency("unknown"), 0);
    }

    #[test]
    fn test_stats_empty_corpus_fails() {
        let result = CorpusStats::from_corpus(&Corpus::new());
        assert!(matches!(result, Err(VerbenaError::Corpus(_))));
    }

    #[test]
    fn test_idf_values() {
        let corpus = corpus();
        let stats = CorpusStats::from_corpus(&corpus).unwrap();

        // "buy" appears in 2 of 3 documents
        let idf = stats.idf("buy").unwrap();
        assert!((idf - (3.0_f64 / 2.0).ln()).abs() < 1e-12);
        assert_eq!(stats.idf("unknown"), None);
    }

    #[test]
    fn test_idf_zero_for_corpus_wide_term() {
        let analyzer = PipelineAnalyzer::standard();
        let corpus = Corpus::from_documents(vec![
            Document::labeled("common alpha", "a", &analyzer).unwrap(),
            Document::labeled("common beta", "b", &analyzer).unwrap(),
        ]);
        let stats = CorpusStats::from_corpus(&corpus).unwrap();
        assert_eq!(stats.idf("common"), Some(0.0));
    }

    #[test]
    fn test_pruning_requires_transform() {
        let corpus = corpus();
        let result = surviving_vocabulary(&corpus, Some(0.1));
        assert!(matches!(result, Err(VerbenaError::Corpus(_))));
    }

    #[test]
    fn test_pruning_removes_dominant_terms() {
        let mut corpus = corpus();
        // Disable IDF so corpus-wide frequency differences survive into the
        // aggregates this test inspects.
        let config = TransformConfig {
            idf: false,
            length_norm: false,
            ..TransformConfig::default()
        };
        let pipeline = TransformPipeline::fit(&corpus, config).unwrap();
        pipeline.apply(&mut corpus).unwrap();

        let full = surviving_vocabulary(&corpus, None).unwrap();
        assert!(full.contains(&"buy".to_string()));

        // "buy" has the largest aggregate and falls to pruning.
        let pruned = surviving_vocabulary(&corpus, Some(0.5)).unwrap();
        assert!(!pruned.contains(&"buy".to_string()));
        assert!(pruned.contains(&"meeting".to_string()));
    }
}
