//! Token sequence abstractions
//!
//! `TokenSource` is the capability a cursor needs: positional read-only
//! access. `SharedTokens` is the common implementation, a ref-counted
//! immutable sequence that is cheap to hand to several cursors at once.

use super::token::Token;
use std::sync::Arc;

/// Read-only positional access over a token sequence
pub trait TokenSource {
    /// Number of tokens, including the end-of-stream sentinel
    fn len(&self) -> usize;

    /// Token at `index`, or `None` past the end
    fn at(&self, index: usize) -> Option<&Token>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Ref-counted immutable token sequence
///
/// Cloning shares the underlying storage; the tokens themselves are
/// never mutated after construction.
#[derive(Debug, Clone, Default)]
pub struct SharedTokens {
    tokens: Arc<Vec<Token>>,
}

impl SharedTokens {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens: Arc::new(tokens),
        }
    }

    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }
}

impl From<Vec<Token>> for SharedTokens {
    fn from(tokens: Vec<Token>) -> Self {
        Self::new(tokens)
    }
}

impl TokenSource for SharedTokens {
    fn len(&self) -> usize {
        self.tokens.len()
    }

    fn at(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }
}

/// Contiguous sub-range view over a shared sequence
#[derive(Debug, Clone)]
pub struct TokenWindow {
    tokens: SharedTokens,
    start: usize,
    len: usize,
}

impl TokenWindow {
    /// View of `tokens[start..start + len]`, clamped to the sequence
    pub fn new(tokens: SharedTokens, start: usize, len: usize) -> Self {
        let total = tokens.as_slice().len();
        let start = start.min(total);
        let len = len.min(total - start);
        Self { tokens, start, len }
    }
}

impl TokenSource for TokenWindow {
    fn len(&self) -> usize {
        self.len
    }

    fn at(&self, index: usize) -> Option<&Token> {
        if index < self.len {
            self.tokens.at(self.start + index)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::token::TokenKind;

    fn sample() -> SharedTokens {
        SharedTokens::new(vec![
            Token::new(TokenKind::Word, "ab"),
            Token::new(TokenKind::Whitespace, " "),
            Token::new(TokenKind::Word, "cd"),
            Token::end_of_stream(),
        ])
    }

    #[test]
    fn test_shared_tokens_access() {
        let tokens = sample();
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens.at(0).map(Token::value), Some("ab"));
        assert!(tokens.at(4).is_none());
    }

    #[test]
    fn test_clone_shares_storage() {
        let tokens = sample();
        let other = tokens.clone();
        assert!(std::ptr::eq(tokens.as_slice(), other.as_slice()));
    }

    #[test]
    fn test_window_is_bounded_view() {
        let window = TokenWindow::new(sample(), 1, 2);
        assert_eq!(window.len(), 2);
        assert_eq!(window.at(0).map(Token::value), Some(" "));
        assert_eq!(window.at(1).map(Token::value), Some("cd"));
        assert!(window.at(2).is_none());
    }

    #[test]
    fn test_window_clamps_out_of_range() {
        let window = TokenWindow::new(sample(), 3, 10);
        assert_eq!(window.len(), 1);

        let empty = TokenWindow::new(sample(), 10, 2);
        assert_eq!(empty.len(), 0);
        assert!(empty.is_empty());
    }
}
