//! Token types and stream traversal
//!
//! The token layer is deliberately independent of the reader and the
//! tokenizer: anything that can produce a `Vec<Token>` can be wrapped
//! in `SharedTokens` and traversed with a cursor.

pub mod cursor;
pub mod filter;
pub mod source;
pub mod token;

pub use cursor::{CursorError, CursorOrigin, TokenCursor};
pub use filter::TokenFilter;
pub use source::{SharedTokens, TokenSource, TokenWindow};
pub use token::{Token, TokenKind};
