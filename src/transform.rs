//! Term-weight transform pipeline.
//!
//! Converts each document's raw counts into weighted counts through three
//! independently toggleable stages, applied in fixed order:
//!
//! 1. **Log term frequency** — `c → ln(c + 1)`, compressing highly repeated
//!    terms within one document.
//! 2. **Inverse document frequency** — `× ln(N / df(term))`, down-weighting
//!    terms common across the corpus.
//! 3. **Length normalization** — divide by the document's Euclidean norm,
//!    removing document-length bias.
//!
//! The pipeline is two-pass: [`TransformPipeline::fit`] freezes corpus
//! statistics from a complete corpus, then [`TransformPipeline::apply`]
//! computes each document's weighted counts as a pure function of the
//! document and the frozen statistics. Re-applying recomputes from raw
//! counts, so the operation is idempotent.
//!
//! # Examples
//!
//! ```
//! use verbena::analysis::PipelineAnalyzer;
//! use verbena::corpus::Corpus;
//! use verbena::document::Document;
//! use verbena::transform::{TransformConfig, TransformPipeline};
//!
//! let analyzer = PipelineAnalyzer::standard();
//! let mut corpus = Corpus::from_documents(vec![
//!     Document::labeled("buy now buy now", "spam", &analyzer).unwrap(),
//!     Document::labeled("meeting notes", "ham", &analyzer).unwrap(),
//! ]);
//!
//! let pipeline = TransformPipeline::fit(&corpus, TransformConfig::default()).unwrap();
//! pipeline.apply(&mut corpus).unwrap();
//! assert!(corpus.is_transformed());
//! ```

use ahash::AHashMap;
use log::debug;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::corpus::{Corpus, CorpusStats};
use crate::document::Document;
use crate::error::Result;

/// Configuration for the transform stages. All stages default to enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformConfig {
    /// Log term-frequency transform.
    pub tf: bool,
    /// Inverse document-frequency transform.
    pub idf: bool,
    /// Euclidean length normalization.
    pub length_norm: bool,
}

impl Default for TransformConfig {
    fn default() -> Self {
        TransformConfig {
            tf: true,
            idf: true,
            length_norm: true,
        }
    }
}

/// A transform pipeline holding frozen corpus statistics.
#[derive(Debug, Clone)]
pub struct TransformPipeline {
    config: TransformConfig,
    stats: CorpusStats,
}

impl TransformPipeline {
    /// Pass 1: build frozen statistics from a fully assembled corpus.
    ///
    /// Fails fast on an empty corpus.
    pub fn fit(corpus: &Corpus, config: TransformConfig) -> Result<Self> {
        let stats = CorpusStats::from_corpus(corpus)?;
        Ok(TransformPipeline { config, stats })
    }

    /// The frozen corpus statistics.
    pub fn stats(&self) -> &CorpusStats {
        &self.stats
    }

    /// The stage configuration.
    pub fn config(&self) -> TransformConfig {
        self.config
    }

    /// Pass 2: attach weighted counts to every document in the corpus.
    ///
    /// Documents are independent given the frozen statistics, so the pass
    /// runs in parallel. Calling this more than once recomputes the same
    /// values from the raw counts.
    pub fn apply(&self, corpus: &mut Corpus) -> Result<()> {
        corpus.documents_mut().par_iter_mut().for_each(|document| {
            self.transform_document(document);
        });
        debug!("transformed {} documents", corpus.len());
        Ok(())
    }

    /// Attach weighted counts to a single document.
    ///
    /// Also used at query time: an inference document is weighted against the
    /// training corpus statistics. Terms the corpus has never seen get a
    /// weighted count of zero; they cannot contribute to any class score.
    pub fn transform_document(&self, document: &mut Document) {
        let weighted = self.weigh(document);
        document.set_weighted_counts(weighted);
    }

    /// Compute a document's weighted counts as a pure function of its raw
    /// counts and the frozen statistics.
    fn weigh(&self, document: &Document) -> AHashMap<String, f64> {
        let mut weighted: AHashMap<String, f64> =
            AHashMap::with_capacity(document.term_len());

        for (term, &count) in document.term_counts() {
            let mut value = count as f64;
            if self.config.tf {
                value = (count as f64 + 1.0).ln();
            }
            if self.config.idf {
                value *= self.stats.idf(term).unwrap_or(0.0);
            }
            weighted.insert(term.clone(), value);
        }

        if self.config.length_norm {
            // Sum squares in sorted term order: float addition is not
            // associative, and map iteration order varies between instances.
            let norm = {
                let mut terms: Vec<&str> = weighted.keys().map(String::as_str).collect();
                terms.sort_unstable();
                terms
                    .iter()
                    .map(|term| {
                        let value = weighted[*term];
                        value * value
                    })
                    .sum::<f64>()
                    .sqrt()
            };
            if norm > 0.0 {
                for value in weighted.values_mut() {
                    *value /= norm;
                }
            }
        }

        weighted
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::PipelineAnalyzer;

    fn corpus() -> Corpus {
        let analyzer = PipelineAnalyzer::standard();
        Corpus::from_documents(vec![
            Document::labeled("buy now buy now", "spam", &analyzer).unwrap(),
            Document::labeled("meeting notes", "ham", &analyzer).unwrap(),
            Document::labeled("buy cheap now", "spam", &analyzer).unwrap(),
        ])
    }

    #[test]
    fn test_default_config_enables_all_stages() {
        let config = TransformConfig::default();
        assert!(config.tf && config.idf && config.length_norm);
    }

    #[test]
    fn test_tf_only() {
        let mut corpus = corpus();
        let config = TransformConfig {
            tf: true,
            idf: false,
            length_norm: false,
        };
        let pipeline = TransformPipeline::fit(&corpus, config).unwrap();
        pipeline.apply(&mut corpus).unwrap();

        let doc = &corpus.documents()[0];
        assert!((doc.weighted_count("buy") - 3.0_f64.ln()).abs() < 1e-12);
    }

    #[test]
    fn test_all_stages_disabled_passes_raw_counts() {
        let mut corpus = corpus();
        let config = TransformConfig {
            tf: false,
            idf: false,
            length_norm: false,
        };
        let pipeline = TransformPipeline::fit(&corpus, config).unwrap();
        pipeline.apply(&mut corpus).unwrap();

        let doc = &corpus.documents()[0];
        assert_eq!(doc.weighted_count("buy"), 2.0);
    }

    #[test]
    fn test_length_norm_unit_vector() {
        let mut corpus = corpus();
        let pipeline = TransformPipeline::fit(&corpus, TransformConfig::default()).unwrap();
        pipeline.apply(&mut corpus).unwrap();

        for doc in corpus.documents() {
            let sum_of_squares: f64 = doc
                .weighted_counts()
                .unwrap()
                .values()
                .map(|v| v * v)
                .sum();
            // Unit norm whenever at least one transformed value is nonzero.
            if sum_of_squares > 0.0 {
                assert!((sum_of_squares - 1.0).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn test_idempotent_reapplication() {
        let mut corpus = corpus();
        let pipeline = TransformPipeline::fit(&corpus, TransformConfig::default()).unwrap();
        pipeline.apply(&mut corpus).unwrap();

        let first: Vec<AHashMap<String, f64>> = corpus
            .documents()
            .iter()
            .map(|doc| doc.weighted_counts().unwrap().clone())
            .collect();

        pipeline.apply(&mut corpus).unwrap();

        for (doc, before) in corpus.documents().iter().zip(&first) {
            assert_eq!(doc.weighted_counts().unwrap(), before);
        }
    }

    #[test]
    fn test_corpus_wide_term_zeroed_by_idf() {
        let analyzer = PipelineAnalyzer::standard();
        let mut corpus = Corpus::from_documents(vec![
            Document::labeled("common alpha", "a", &analyzer).unwrap(),
            Document::labeled("common beta", "b", &analyzer).unwrap(),
        ]);
        let config = TransformConfig {
            length_norm: false,
            ..TransformConfig::default()
        };
        let pipeline = TransformPipeline::fit(&corpus, config).unwrap();
        pipeline.apply(&mut corpus).unwrap();

        // df("common") == N, so ln(N / df) == 0
        assert_eq!(corpus.documents()[0].weighted_count("common"), 0.0);
        assert!(corpus.documents()[0].weighted_count("alpha") > 0.0);
    }

    #[test]
    fn test_query_document_with_unseen_terms() {
        let mut corpus = corpus();
        let pipeline = TransformPipeline::fit(&corpus, TransformConfig::default()).unwrap();
        pipeline.apply(&mut corpus).unwrap();

        let analyzer = PipelineAnalyzer::standard();
        let mut query = Document::unlabeled("buy zebra", &analyzer).unwrap();
        pipeline.transform_document(&mut query);

        assert!(query.is_transformed());
        // "zebra" never appeared in training; its weighted count is zero.
        assert_eq!(query.weighted_count("zebra"), 0.0);
        assert!(query.weighted_count("buy") > 0.0);
    }

    #[test]
    fn test_fit_on_empty_corpus_fails() {
        let result = TransformPipeline::fit(&Corpus::new(), TransformConfig::default());
        assert!(result.is_err());
    }
}
