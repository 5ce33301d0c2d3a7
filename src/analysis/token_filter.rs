//! Token filter implementations.
//!
//! Filters transform token streams produced by tokenizers. The classifier's
//! standard pipeline removes purely numeric tokens and stop words; both
//! filters are also usable standalone.
//!
//! # Examples
//!
//! ```
//! use verbena::analysis::token::Token;
//! use verbena::analysis::token_filter::{Filter, StopFilter};
//!
//! let filter = StopFilter::new(); // default English stop words
//! let tokens = vec![
//!     Token::new("the", 0),
//!     Token::new("quick", 1),
//!     Token::new("brown", 2),
//! ];
//!
//! let result: Vec<_> = filter
//!     .filter(Box::new(tokens.into_iter()))
//!     .unwrap()
//!     .collect();
//!
//! assert_eq!(result.len(), 2);
//! assert_eq!(result[0].text, "quick");
//! ```

use std::collections::HashSet;

use crate::analysis::stopwords::DEFAULT_ENGLISH_STOP_WORDS_SET;
use crate::analysis::token::TokenStream;
use crate::error::Result;

/// Trait for filters that transform token streams.
///
/// The trait requires `Send + Sync` to allow use in concurrent contexts.
pub trait Filter: Send + Sync {
    /// Apply this filter to a token stream.
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream>;

    /// Get the name of this filter (for debugging and configuration).
    fn name(&self) -> &'static str;
}

/// A filter that removes stop words from a token stream.
///
/// Matching is exact and case-sensitive, consistent with the rest of the
/// pipeline performing no case folding.
#[derive(Clone, Debug, Default)]
pub struct StopFilter {
    /// Custom stop words; `None` means the default English list.
    custom_words: Option<HashSet<String>>,
}

impl StopFilter {
    /// Create a stop filter using the default English stop word list.
    pub fn new() -> Self {
        StopFilter { custom_words: None }
    }

    /// Create a stop filter from a custom word list.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        StopFilter {
            custom_words: Some(words.into_iter().map(Into::into).collect()),
        }
    }

    fn is_stop_word(&self, word: &str) -> bool {
        match &self.custom_words {
            Some(words) => words.contains(word),
            None => DEFAULT_ENGLISH_STOP_WORDS_SET.contains(word),
        }
    }
}

impl Filter for StopFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        let this = self.clone();
        Ok(Box::new(
            tokens.filter(move |token| !this.is_stop_word(&token.text)),
        ))
    }

    fn name(&self) -> &'static str {
        "stop"
    }
}

/// A filter that removes purely numeric tokens.
///
/// A token is numeric when every character is an ASCII digit. Mixed tokens
/// such as `"x86"` or `"3.14"` are kept.
#[derive(Clone, Debug, Default)]
pub struct NumericFilter;

impl NumericFilter {
    /// Create a new numeric filter.
    pub fn new() -> Self {
        NumericFilter
    }
}

impl Filter for NumericFilter {
    fn filter(&self, tokens: TokenStream) -> Result<TokenStream> {
        Ok(Box::new(tokens.filter(|token| {
            !(!token.text.is_empty() && token.text.chars().all(|c| c.is_ascii_digit()))
        })))
    }

    fn name(&self) -> &'static str {
        "numeric"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::token::Token;

    fn stream(words: &[&str]) -> TokenStream {
        let tokens: Vec<Token> = words
            .iter()
            .enumerate()
            .map(|(i, w)| Token::new(*w, i))
            .collect();
        Box::new(tokens.into_iter())
    }

    #[test]
    fn test_stop_filter_default_list() {
        let filter = StopFilter::new();
        let result: Vec<_> = filter
            .filter(stream(&["the", "cheap", "offer", "and", "store"]))
            .unwrap()
            .collect();
        let texts: Vec<&str> = result.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["cheap", "offer", "store"]);
    }

    #[test]
    fn test_stop_filter_custom_words() {
        let filter = StopFilter::from_words(vec!["cheap"]);
        let result: Vec<_> = filter
            .filter(stream(&["the", "cheap", "offer"]))
            .unwrap()
            .collect();
        let texts: Vec<&str> = result.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["the", "offer"]);
    }

    #[test]
    fn test_stop_filter_case_sensitive() {
        let filter = StopFilter::new();
        let result: Vec<_> = filter.filter(stream(&["The", "the"])).unwrap().collect();
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].text, "The");
    }

    #[test]
    fn test_numeric_filter() {
        let filter = NumericFilter::new();
        let result: Vec<_> = filter
            .filter(stream(&["42", "x86", "3.14", "007", "word"]))
            .unwrap()
            .collect();
        let texts: Vec<&str> = result.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["x86", "3.14", "word"]);
    }

    #[test]
    fn test_filter_names() {
        assert_eq!(StopFilter::new().name(), "stop");
        assert_eq!(NumericFilter::new().name(), "numeric");
    }
}
