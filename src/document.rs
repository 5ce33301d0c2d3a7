//! Documents as immutable bags of terms.
//!
//! A [`Document`] is created once from raw text: the analyzer fixes its raw
//! term counts at construction. Weighted counts are attached later by the
//! corpus-aware transform pass (see [`crate::transform`]) and are undefined
//! until that pass has run. A label is present for training and evaluation
//! documents and absent for documents awaiting classification.
//!
//! # Examples
//!
//! ```
//! use verbena::analysis::PipelineAnalyzer;
//! use verbena::document::Document;
//!
//! let analyzer = PipelineAnalyzer::standard();
//! let doc = Document::labeled("buy now buy now", "spam", &analyzer).unwrap();
//!
//! assert_eq!(doc.label(), Some("spam"));
//! assert_eq!(doc.term_count("buy"), 2);
//! assert_eq!(doc.term_count("cheap"), 0);
//! assert!(!doc.is_transformed());
//! ```

use ahash::AHashMap;

use crate::analysis::PipelineAnalyzer;
use crate::error::Result;

/// A document represented as a bag of terms.
#[derive(Debug, Clone)]
pub struct Document {
    /// Raw term counts, fixed at creation. Zero-count terms are absent.
    term_counts: AHashMap<String, u64>,
    /// Weighted counts, attached by the transform pass.
    weighted_counts: Option<AHashMap<String, f64>>,
    /// Class label; `None` for documents awaiting classification.
    label: Option<String>,
}

impl Document {
    /// Create a labeled training/evaluation document from raw text.
    pub fn labeled<S: Into<String>>(
        text: &str,
        label: S,
        analyzer: &PipelineAnalyzer,
    ) -> Result<Self> {
        Ok(Document {
            term_counts: analyzer.count_terms(text)?,
            weighted_counts: None,
            label: Some(label.into()),
        })
    }

    /// Create an unlabeled document awaiting classification.
    pub fn unlabeled(text: &str, analyzer: &PipelineAnalyzer) -> Result<Self> {
        Ok(Document {
            term_counts: analyzer.count_terms(text)?,
            weighted_counts: None,
            label: None,
        })
    }

    /// Create a document directly from term counts.
    ///
    /// Bypasses analysis; intended for callers that already hold counts.
    pub fn from_counts(term_counts: AHashMap<String, u64>, label: Option<String>) -> Self {
        Document {
            term_counts,
            weighted_counts: None,
            label,
        }
    }

    /// The document's class label, if any.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Iterate over the document's distinct terms.
    pub fn terms(&self) -> impl Iterator<Item = &str> {
        self.term_counts.keys().map(String::as_str)
    }

    /// Number of distinct terms in the document.
    pub fn term_len(&self) -> usize {
        self.term_counts.len()
    }

    /// Whether the document contains the given term.
    pub fn contains_term(&self, term: &str) -> bool {
        self.term_counts.contains_key(term)
    }

    /// Raw count for a term; zero if the term does not occur.
    pub fn term_count(&self, term: &str) -> u64 {
        self.term_counts.get(term).copied().unwrap_or(0)
    }

    /// Raw term counts.
    pub fn term_counts(&self) -> &AHashMap<String, u64> {
        &self.term_counts
    }

    /// Whether the transform pass has attached weighted counts.
    pub fn is_transformed(&self) -> bool {
        self.weighted_counts.is_some()
    }

    /// Weighted count for a term; zero if the term does not occur.
    ///
    /// # Panics
    ///
    /// Panics in debug builds if the transform pass has not run; in release
    /// builds an untransformed document reports zero for every term.
    pub fn weighted_count(&self, term: &str) -> f64 {
        debug_assert!(
            self.weighted_counts.is_some(),
            "weighted counts read before the transform pass"
        );
        self.weighted_counts
            .as_ref()
            .and_then(|counts| counts.get(term))
            .copied()
            .unwrap_or(0.0)
    }

    /// Weighted counts, if the transform pass has run.
    pub fn weighted_counts(&self) -> Option<&AHashMap<String, f64>> {
        self.weighted_counts.as_ref()
    }

    /// Attach weighted counts. Overwrites any previous pass so the transform
    /// stays idempotent.
    pub(crate) fn set_weighted_counts(&mut self, weighted: AHashMap<String, f64>) {
        self.weighted_counts = Some(weighted);
    }
}
