//! Token stream transformation contract

use super::token::Token;

/// In-place transformation over a materialized token stream
///
/// Implementations edit the vector directly. Surviving tokens keep
/// their relative order, and the end-of-stream sentinel must remain
/// the last element.
pub trait TokenFilter {
    fn filter(&mut self, tokens: &mut Vec<Token>);
}
