//! Token types for text analysis.
//!
//! A [`Token`] is a single unit of text after tokenization and is the value
//! that flows through the analysis pipeline. [`TokenStream`] is the boxed
//! iterator type produced by tokenizers and consumed/produced by filters.
//!
//! # Examples
//!
//! ```
//! use verbena::analysis::token::Token;
//!
//! let token = Token::new("hello", 0);
//! assert_eq!(token.text, "hello");
//! assert_eq!(token.position, 0);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// A token produced by a tokenizer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The token's text content, trimmed of surrounding whitespace.
    pub text: String,
    /// Position in the token stream (0-based).
    pub position: usize,
}

impl Token {
    /// Create a new token with the given text and position.
    pub fn new<S: Into<String>>(text: S, position: usize) -> Self {
        Token {
            text: text.into(),
            position,
        }
    }

    /// Whether the token text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}@{}", self.text, self.position)
    }
}

/// A stream of tokens, as produced by tokenizers and filters.
pub type TokenStream = Box<dyn Iterator<Item = Token>>;
