//! Analyzers that combine a tokenizer with a chain of filters.
//!
//! [`PipelineAnalyzer`] is the main building block: it applies the tokenizer,
//! then every filter in the order they were added. [`PipelineAnalyzer::standard`]
//! is the preset the classifier uses (whitespace tokenizer, numeric filter,
//! stop filter).
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//!
//! use verbena::analysis::analyzer::{Analyzer, PipelineAnalyzer};
//! use verbena::analysis::token_filter::StopFilter;
//! use verbena::analysis::tokenizer::WhitespaceTokenizer;
//!
//! let analyzer = PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
//!     .add_filter(Arc::new(StopFilter::from_words(vec!["the"])));
//!
//! let tokens: Vec<_> = analyzer.analyze("the quick fox").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "quick");
//! ```

use std::sync::Arc;

use ahash::AHashMap;

use crate::analysis::token::TokenStream;
use crate::analysis::token_filter::{Filter, NumericFilter, StopFilter};
use crate::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
use crate::error::Result;

/// Trait for analyzers that convert raw text into a token stream.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
pub trait Analyzer: Send + Sync {
    /// Analyze the given text into a stream of tokens.
    fn analyze(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this analyzer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// A configurable analyzer that combines a tokenizer with a chain of filters.
#[derive(Clone)]
pub struct PipelineAnalyzer {
    tokenizer: Arc<dyn Tokenizer>,
    filters: Vec<Arc<dyn Filter>>,
}

impl PipelineAnalyzer {
    /// Create a new pipeline analyzer with the given tokenizer and no filters.
    pub fn new(tokenizer: Arc<dyn Tokenizer>) -> Self {
        PipelineAnalyzer {
            tokenizer,
            filters: Vec::new(),
        }
    }

    /// The standard feature-extraction pipeline: whitespace tokenization,
    /// numeric-token removal, stop word removal.
    pub fn standard() -> Self {
        PipelineAnalyzer::new(Arc::new(WhitespaceTokenizer::new()))
            .add_filter(Arc::new(NumericFilter::new()))
            .add_filter(Arc::new(StopFilter::new()))
    }

    /// Add a filter to the pipeline.
    pub fn add_filter(mut self, filter: Arc<dyn Filter>) -> Self {
        self.filters.push(filter);
        self
    }

    /// Get the tokenizer used by this analyzer.
    pub fn tokenizer(&self) -> &Arc<dyn Tokenizer> {
        &self.tokenizer
    }

    /// Get the filters used by this analyzer.
    pub fn filters(&self) -> &[Arc<dyn Filter>] {
        &self.filters
    }

    /// Analyze text and count surviving term occurrences.
    ///
    /// Terms that are filtered out are absent from the map, never stored with
    /// a zero count. Deterministic and independent of token order.
    pub fn count_terms(&self, text: &str) -> Result<AHashMap<String, u64>> {
        let mut counts = AHashMap::new();
        for token in self.analyze(text)? {
            *counts.entry(token.text).or_insert(0) += 1;
        }
        Ok(counts)
    }
}

impl Analyzer for PipelineAnalyzer {
    fn analyze(&self, text: &str) -> Result<TokenStream> {
        let mut tokens = self.tokenizer.tokenize(text)?;
        for filter in &self.filters {
            tokens = filter.filter(tokens)?;
        }
        Ok(tokens)
    }

    fn name(&self) -> &'static str {
        "pipeline"
    }
}

impl std::fmt::Debug for PipelineAnalyzer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PipelineAnalyzer")
            .field("tokenizer", &self.tokenizer.name())
            .field(
                "filters",
                &self.filters.iter().map(|f| f.name()).collect::<Vec<_>>(),
            )
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_pipeline() {
        let analyzer = PipelineAnalyzer::standard();
        let tokens: Vec<_> = analyzer
            .analyze("buy 2 cheap offers from the store")
            .unwrap()
            .collect();
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        // "2" is numeric, "from"/"the" are stop words
        assert_eq!(texts, vec!["buy", "cheap", "offers", "store"]);
    }

    #[test]
    fn test_count_terms() {
        let analyzer = PipelineAnalyzer::standard();
        let counts = analyzer.count_terms("buy cheap buy cheap buy").unwrap();

        assert_eq!(counts.get("buy"), Some(&3));
        assert_eq!(counts.get("cheap"), Some(&2));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_count_terms_filters_everything() {
        let analyzer = PipelineAnalyzer::standard();
        let counts = analyzer.count_terms("the 42 a 7").unwrap();
        assert!(counts.is_empty());
    }

    #[test]
    fn test_zero_counts_not_stored() {
        let analyzer = PipelineAnalyzer::standard();
        let counts = analyzer.count_terms("buy now").unwrap();
        assert_eq!(counts.get("cheap"), None);
    }
}
