//! Text analysis pipeline for feature extraction.
//!
//! Analysis turns raw text into the term counts the classifier consumes.
//! The pipeline mirrors the classic tokenizer-plus-filters design:
//!
//! ```text
//! Tokenizer → NumericFilter → StopFilter → term counts
//! ```
//!
//! Tokenization is whitespace splitting with trimming only. There is no
//! stemming and no case folding: `"Spam"` and `"spam"` are distinct terms.

pub mod analyzer;
pub mod stopwords;
pub mod token;
pub mod token_filter;
pub mod tokenizer;

pub use analyzer::{Analyzer, PipelineAnalyzer};
pub use token::{Token, TokenStream};
pub use token_filter::{Filter, NumericFilter, StopFilter};
pub use tokenizer::{Tokenizer, WhitespaceTokenizer};
