//! Lexical analysis module
//!
//! Provides classification tokenization for plain text with
//! resource-aware processing and integration with the global logging
//! system.

pub mod tokenizer;

use crate::config::constants::compile_time::lexical::*;
use crate::config::runtime::LexicalPreferences;
use crate::reader::ResourceReader;
use crate::tokens::{SharedTokens, Token};
use std::path::Path;

pub use tokenizer::{LexicalMetrics, PlaintextTokenizer, TokenizerError};

// ============================================================================
// MODULE API WITH SECURITY BOUNDARIES
// ============================================================================

/// Tokenize the resource at `path` with default preferences
pub fn tokenize_path<P: AsRef<Path>>(path: P) -> Result<Vec<Token>, TokenizerError> {
    let mut tokenizer = PlaintextTokenizer::from_path(path)?;
    tokenizer.tokenize()
}

/// Tokenize with custom runtime preferences (security boundaries remain compile-time)
pub fn tokenize_path_with_preferences<P: AsRef<Path>>(
    path: P,
    preferences: LexicalPreferences,
) -> Result<Vec<Token>, TokenizerError> {
    let reader = ResourceReader::open(path)?;
    let mut tokenizer = PlaintextTokenizer::with_preferences(reader, preferences);
    tokenizer.tokenize()
}

/// Tokenize into a ref-counted sequence ready for cursor traversal
pub fn tokenize_path_shared<P: AsRef<Path>>(path: P) -> Result<SharedTokens, TokenizerError> {
    Ok(SharedTokens::new(tokenize_path(path)?))
}

// ============================================================================
// MODULE INITIALIZATION AND VALIDATION
// ============================================================================

/// Validate that lexical error codes are properly configured and
/// compile-time limits are sane (for system startup)
pub fn validate_tokenization() -> Result<(), String> {
    let test_codes = [
        crate::logging::codes::lexical::READER_UNUSABLE,
        crate::logging::codes::lexical::TOO_MANY_TOKENS,
        crate::logging::codes::lexical::WORD_TOO_LONG,
    ];

    for code in &test_codes {
        let description = crate::logging::codes::get_description(code.as_str());
        if description == "Unknown error" {
            return Err(format!(
                "Lexical error code {} has no description",
                code.as_str()
            ));
        }
    }

    if MAX_TOKEN_COUNT == 0 {
        return Err("MAX_TOKEN_COUNT cannot be zero".to_string());
    }
    if MAX_WORD_LENGTH == 0 {
        return Err("MAX_WORD_LENGTH cannot be zero".to_string());
    }
    if MAX_TOKEN_COUNT > 10_000_000 {
        return Err("MAX_TOKEN_COUNT exceeds reasonable limit".to_string());
    }

    Ok(())
}

/// Get the current compile-time security limits (for reporting/debugging)
pub fn get_security_limits() -> SecurityLimits {
    SecurityLimits {
        max_token_count: MAX_TOKEN_COUNT,
        max_word_length: MAX_WORD_LENGTH,
    }
}

/// Information about compile-time security limits
#[derive(Debug, Clone)]
pub struct SecurityLimits {
    pub max_token_count: usize,
    pub max_word_length: usize,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tokens::{TokenCursor, TokenKind, TokenSource};
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_validate_tokenization() {
        assert!(validate_tokenization().is_ok());
    }

    #[test]
    fn test_security_limits() {
        let limits = get_security_limits();
        assert!(limits.max_token_count > 0);
        assert!(limits.max_word_length > 0);
    }

    #[test]
    fn test_tokenize_path() {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(b"hello world").expect("write");

        let tokens = tokenize_path(file.path()).expect("tokenize");
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[0].value(), "hello");
        assert!(tokens[3].kind().is_end_of_stream());
    }

    #[test]
    fn test_tokenize_path_shared_feeds_cursor() {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(b"a,b").expect("write");

        let tokens = tokenize_path_shared(file.path()).expect("tokenize");
        assert_eq!(tokens.len(), 4);

        let mut cursor = TokenCursor::new(tokens);
        cursor.register_counter(TokenKind::Word);
        while !cursor.is_exhausted() {
            cursor.advance().expect("advance");
        }
        assert_eq!(cursor.counter_value(TokenKind::Word).expect("words"), 2);
    }
}
