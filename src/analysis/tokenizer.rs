//! Tokenizer implementations for text analysis.
//!
//! Tokenizers are the first step in the analysis pipeline, responsible for
//! splitting raw text into [`Token`]s. The classifier only requires
//! whitespace tokenization; the trait seam is kept so callers can plug in a
//! different strategy without touching the rest of the pipeline.
//!
//! # Examples
//!
//! ```
//! use verbena::analysis::tokenizer::{Tokenizer, WhitespaceTokenizer};
//!
//! let tokenizer = WhitespaceTokenizer::new();
//! let tokens: Vec<_> = tokenizer.tokenize("Hello world").unwrap().collect();
//! assert_eq!(tokens.len(), 2);
//! assert_eq!(tokens[0].text, "Hello");
//! ```

use crate::analysis::token::{Token, TokenStream};
use crate::error::Result;

/// Trait for tokenizers that convert text into tokens.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text into a stream of tokens.
    fn tokenize(&self, text: &str) -> Result<TokenStream>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// A tokenizer that splits text on whitespace.
///
/// Tokens are trimmed and empty tokens are dropped. No further normalization
/// is applied; case is preserved.
#[derive(Clone, Debug, Default)]
pub struct WhitespaceTokenizer;

impl WhitespaceTokenizer {
    /// Create a new whitespace tokenizer.
    pub fn new() -> Self {
        WhitespaceTokenizer
    }
}

impl Tokenizer for WhitespaceTokenizer {
    fn tokenize(&self, text: &str) -> Result<TokenStream> {
        let tokens: Vec<Token> = text
            .split_whitespace()
            .map(str::trim)
            .filter(|word| !word.is_empty())
            .enumerate()
            .map(|(position, word)| Token::new(word, position))
            .collect();

        Ok(Box::new(tokens.into_iter()))
    }

    fn name(&self) -> &'static str {
        "whitespace"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whitespace_tokenization() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<_> = tokenizer.tokenize("the quick  brown\tfox").unwrap().collect();

        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].text, "the");
        assert_eq!(tokens[1].text, "quick");
        assert_eq!(tokens[2].text, "brown");
        assert_eq!(tokens[3].text, "fox");
        assert_eq!(tokens[3].position, 3);
    }

    #[test]
    fn test_empty_text() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<_> = tokenizer.tokenize("   \t\n ").unwrap().collect();
        assert!(tokens.is_empty());
    }

    #[test]
    fn test_case_preserved() {
        let tokenizer = WhitespaceTokenizer::new();
        let tokens: Vec<_> = tokenizer.tokenize("Spam spam").unwrap().collect();
        assert_eq!(tokens[0].text, "Spam");
        assert_eq!(tokens[1].text, "spam");
    }

    #[test]
    fn test_name() {
        assert_eq!(WhitespaceTokenizer::new().name(), "whitespace");
    }
}
