//! Core library for the textok text-tokenization toolkit
//!
//! Provides resource reading, classification tokenization, and
//! token-stream traversal with compile-time security boundaries.

// Internal modules
pub mod config;
pub mod lexical;
#[macro_use]
pub mod logging;
pub mod reader;
pub mod tokens;

// Re-export key types for library consumers
pub use lexical::{LexicalMetrics, PlaintextTokenizer, TokenizerError};
pub use reader::{ReaderError, ReaderState, ResourceReader, SeekOrigin};
pub use tokens::{
    CursorError, CursorOrigin, SharedTokens, Token, TokenCursor, TokenFilter, TokenKind,
    TokenSource,
};
