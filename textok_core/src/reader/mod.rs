//! Resource reading module
//!
//! Owns the buffered byte-stream reader that feeds the lexical layer.

pub mod resource;

pub use resource::{ReaderError, ReaderState, ResourceReader, SeekOrigin};
