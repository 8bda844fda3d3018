//! Whitespace minification for textok token streams
//!
//! Implements the `TokenFilter` contract from `textok_core`: the
//! filter edits a materialized token stream in place, preserving the
//! relative order of surviving tokens and keeping the end-of-stream
//! sentinel last.

use textok_core::log_success;
use textok_core::logging::codes;
use textok_core::{Token, TokenFilter};

/// Drops every whitespace token from a stream
///
/// Words, punctuation, unknown tokens, and the sentinel pass through
/// untouched. Applying the filter twice is a no-op the second time.
#[derive(Debug, Default, Clone)]
pub struct WhitespaceMinifier {
    removed: usize,
}

impl WhitespaceMinifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokens removed by the most recent `filter` call
    pub fn removed(&self) -> usize {
        self.removed
    }
}

impl TokenFilter for WhitespaceMinifier {
    fn filter(&mut self, tokens: &mut Vec<Token>) {
        let before = tokens.len();
        tokens.retain(|token| !token.kind().is_whitespace());
        self.removed = before - tokens.len();

        log_success!(codes::success::MINIFICATION_COMPLETE, "Minification completed",
            "removed" => self.removed,
            "remaining" => tokens.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use textok_core::TokenKind;

    fn sample_stream() -> Vec<Token> {
        vec![
            Token::new(TokenKind::Word, "ab"),
            Token::new(TokenKind::Whitespace, " "),
            Token::new(TokenKind::Word, "1"),
            Token::new(TokenKind::Whitespace, "\t"),
            Token::new(TokenKind::Punctuation, ","),
            Token::new(TokenKind::Whitespace, "\n"),
            Token::new(TokenKind::Word, "c"),
            Token::end_of_stream(),
        ]
    }

    #[test]
    fn test_whitespace_is_removed_in_order() {
        let mut tokens = sample_stream();
        let mut minifier = WhitespaceMinifier::new();

        minifier.filter(&mut tokens);

        let values: Vec<&str> = tokens.iter().map(Token::value).collect();
        assert_eq!(values, vec!["ab", "1", ",", "c", ""]);
        assert_eq!(minifier.removed(), 3);
        assert!(tokens.last().is_some_and(|t| t.kind().is_end_of_stream()));
    }

    #[test]
    fn test_filter_is_idempotent() {
        let mut tokens = sample_stream();
        let mut minifier = WhitespaceMinifier::new();

        minifier.filter(&mut tokens);
        let once = tokens.clone();

        minifier.filter(&mut tokens);
        assert_eq!(tokens, once);
        assert_eq!(minifier.removed(), 0);
    }

    #[test]
    fn test_sentinel_only_stream_is_untouched() {
        let mut tokens = vec![Token::end_of_stream()];
        let mut minifier = WhitespaceMinifier::new();

        minifier.filter(&mut tokens);
        assert_eq!(tokens.len(), 1);
        assert_eq!(minifier.removed(), 0);
    }

    #[test]
    fn test_all_whitespace_stream_keeps_sentinel() {
        let mut tokens = vec![
            Token::new(TokenKind::Whitespace, " "),
            Token::new(TokenKind::Whitespace, " "),
            Token::end_of_stream(),
        ];
        let mut minifier = WhitespaceMinifier::new();

        minifier.filter(&mut tokens);
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].kind().is_end_of_stream());
        assert_eq!(minifier.removed(), 2);
    }
}
