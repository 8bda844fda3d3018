//! Cursor traversal over a token sequence
//!
//! The cursor owns a read pointer into any `TokenSource` and keeps
//! per-kind consumption counters. Movement is lenient: `skip` and
//! `seek` never validate, and an out-of-range pointer only surfaces
//! when the next read is attempted.

use super::source::{SharedTokens, TokenSource};
use super::token::{Token, TokenKind};
use crate::config::constants::compile_time::cursor::MAX_SKIP_DISTANCE;
use crate::log_warning;
use crate::logging::codes;
use std::collections::HashMap;

/// Cursor errors, all recoverable
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CursorError {
    #[error("Read position {position} out of range for {size} tokens")]
    OutOfRange { position: usize, size: usize },

    #[error("No counter registered for kind {kind}")]
    CounterNotRegistered { kind: TokenKind },
}

impl CursorError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            CursorError::OutOfRange { .. } => codes::cursor::CURSOR_OUT_OF_RANGE,
            CursorError::CounterNotRegistered { .. } => codes::cursor::COUNTER_NOT_REGISTERED,
        }
    }
}

/// Origin for cursor seeks and fetches
///
/// `Current` and `RecentToken` share their arithmetic: both resolve
/// relative to the most recently consumed token, one before the read
/// pointer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorOrigin {
    Start,
    Current,
    RecentToken,
    End,
}

/// Traversal cursor with per-kind consumption counters
#[derive(Debug, Clone)]
pub struct TokenCursor<S: TokenSource = SharedTokens> {
    source: S,
    read_ptr: usize,
    counters: HashMap<TokenKind, usize>,
}

impl<S: TokenSource> TokenCursor<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            read_ptr: 0,
            counters: HashMap::new(),
        }
    }

    /// Number of tokens in the underlying sequence
    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Current read pointer; may exceed `len()` after lenient movement
    pub fn position(&self) -> usize {
        self.read_ptr
    }

    /// True once the read pointer has reached or passed the end
    pub fn is_exhausted(&self) -> bool {
        self.read_ptr >= self.source.len()
    }

    fn token_at(&self, index: usize) -> Result<&Token, CursorError> {
        self.source.at(index).ok_or(CursorError::OutOfRange {
            position: index,
            size: self.source.len(),
        })
    }

    /// Token under the read pointer, without consuming it
    pub fn peek(&self) -> Result<&Token, CursorError> {
        self.token_at(self.read_ptr)
    }

    /// Consume and return the token under the read pointer
    ///
    /// Increments the matching kind counter if one is registered. On
    /// failure nothing moves and no counter changes.
    pub fn advance(&mut self) -> Result<&Token, CursorError> {
        let kind = self.token_at(self.read_ptr)?.kind();
        if let Some(count) = self.counters.get_mut(&kind) {
            *count += 1;
        }

        let index = self.read_ptr;
        self.read_ptr += 1;
        self.token_at(index)
    }

    /// Move the read pointer forward without consuming
    ///
    /// Validation is deferred: skipping past the end is not an error
    /// until the next read. Distances above the advisory limit are
    /// logged but still applied.
    pub fn skip(&mut self, n: usize) {
        if n > MAX_SKIP_DISTANCE {
            log_warning!("Skip distance exceeds advisory limit",
                "distance" => n,
                "limit" => MAX_SKIP_DISTANCE
            );
        }
        self.read_ptr = self.read_ptr.wrapping_add(n);
    }

    /// Start counting consumed tokens of `kind` from zero
    pub fn register_counter(&mut self, kind: TokenKind) {
        self.counters.entry(kind).or_insert(0);
    }

    /// Consumption count for `kind`
    pub fn counter_value(&self, kind: TokenKind) -> Result<usize, CursorError> {
        self.counters
            .get(&kind)
            .copied()
            .ok_or(CursorError::CounterNotRegistered { kind })
    }

    /// Swap in a new sequence; pointer rewinds, counters keep counting
    pub fn replace_tokens(&mut self, source: S) {
        self.source = source;
        self.read_ptr = 0;
    }

    /// Drop the sequence, rewind, and zero all registered counters
    ///
    /// Counter registrations survive; only their values reset.
    pub fn clear(&mut self)
    where
        S: Default,
    {
        self.source = S::default();
        self.read_ptr = 0;
        for count in self.counters.values_mut() {
            *count = 0;
        }
    }

    /// Origin arithmetic shared by `seek` and `fetch`
    ///
    /// Relative origins resolve against the most recently consumed
    /// token. Wrapping matches the unsigned pointer model: an
    /// underflowed target is simply out of range on the next read.
    fn resolve_target(&self, offset: i64, origin: CursorOrigin) -> usize {
        match origin {
            CursorOrigin::Start => 0usize.wrapping_add_signed(offset as isize),
            CursorOrigin::Current | CursorOrigin::RecentToken => self
                .read_ptr
                .wrapping_add_signed(offset as isize)
                .wrapping_sub(1),
            CursorOrigin::End => self
                .source
                .len()
                .wrapping_sub(1)
                .wrapping_add_signed(offset as isize),
        }
    }

    /// Reposition the read pointer; lenient, never fails
    pub fn seek(&mut self, offset: i64, origin: CursorOrigin) -> usize {
        self.read_ptr = self.resolve_target(offset, origin);
        self.read_ptr
    }

    /// Read at an origin-relative position without moving the pointer
    pub fn fetch(&self, offset: i64, origin: CursorOrigin) -> Result<&Token, CursorError> {
        self.token_at(self.resolve_target(offset, origin))
    }
}
