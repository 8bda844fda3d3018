//! Token value type and classification kinds

use serde::{Deserialize, Serialize};
use std::fmt;

/// Classification assigned by the tokenizer
///
/// `Unknown` is the zero kind: anything the classifier has no rule for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    Unknown = 0,
    Whitespace,
    EndOfStream,
    Word,
    Punctuation,
}

impl TokenKind {
    pub fn is_unknown(&self) -> bool {
        matches!(self, TokenKind::Unknown)
    }

    pub fn is_whitespace(&self) -> bool {
        matches!(self, TokenKind::Whitespace)
    }

    pub fn is_end_of_stream(&self) -> bool {
        matches!(self, TokenKind::EndOfStream)
    }

    pub fn is_word(&self) -> bool {
        matches!(self, TokenKind::Word)
    }

    pub fn is_punctuation(&self) -> bool {
        matches!(self, TokenKind::Punctuation)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TokenKind::Unknown => "Unknown",
            TokenKind::Whitespace => "Whitespace",
            TokenKind::EndOfStream => "EndOfStream",
            TokenKind::Word => "Word",
            TokenKind::Punctuation => "Punctuation",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Immutable (kind, value) pair produced by tokenization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    kind: TokenKind,
    value: String,
}

impl Token {
    pub fn new(kind: TokenKind, value: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.into(),
        }
    }

    /// The stream-terminating sentinel; always carries an empty value
    pub fn end_of_stream() -> Self {
        Self::new(TokenKind::EndOfStream, "")
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    pub fn value(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({:?})", self.kind, self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_is_zero_kind() {
        assert_eq!(TokenKind::Unknown as u8, 0);
        assert!(TokenKind::Unknown.is_unknown());
    }

    #[test]
    fn test_sentinel_has_empty_value() {
        let sentinel = Token::end_of_stream();
        assert!(sentinel.kind().is_end_of_stream());
        assert_eq!(sentinel.value(), "");
    }

    #[test]
    fn test_token_accessors() {
        let token = Token::new(TokenKind::Word, "hello");
        assert_eq!(token.kind(), TokenKind::Word);
        assert_eq!(token.value(), "hello");
        assert_eq!(token.to_string(), "Word(\"hello\")");
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(TokenKind::Whitespace.as_str(), "Whitespace");
        assert_eq!(TokenKind::Punctuation.as_str(), "Punctuation");
    }
}
