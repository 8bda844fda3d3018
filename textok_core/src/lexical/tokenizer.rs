//! Classification tokenizer implementation
//!
//! Walks a reader one unit at a time via get/putback and classifies
//! each run into tokens, with compile-time security boundaries on
//! token count and word length.

use crate::config::constants::compile_time::lexical::*;
use crate::config::runtime::LexicalPreferences;
use crate::logging::codes;
use crate::reader::{ReaderError, ReaderState, ResourceReader};
use crate::tokens::{Token, TokenKind};
use crate::{log_debug, log_error, log_success};
use std::path::Path;

/// Tokenization errors with compile-time security boundaries
#[derive(Debug, Clone, thiserror::Error)]
pub enum TokenizerError {
    #[error("Reader unusable for tokenization: {state:?}")]
    ReaderUnusable { state: ReaderState },

    #[error("Too many tokens: {count} (max {MAX_TOKEN_COUNT})")]
    TokenLimitExceeded { count: usize },

    #[error("Word too long: {length} units (max {MAX_WORD_LENGTH})")]
    WordTooLong { length: usize },

    #[error(transparent)]
    Reader(#[from] ReaderError),
}

impl TokenizerError {
    pub fn error_code(&self) -> crate::logging::Code {
        match self {
            TokenizerError::ReaderUnusable { .. } => codes::lexical::READER_UNUSABLE,
            TokenizerError::TokenLimitExceeded { .. } => codes::lexical::TOO_MANY_TOKENS,
            TokenizerError::WordTooLong { .. } => codes::lexical::WORD_TOO_LONG,
            TokenizerError::Reader(e) => e.error_code(),
        }
    }
}

/// Essential tokenization metrics with runtime preferences
#[derive(Debug, Default, Clone)]
pub struct LexicalMetrics {
    pub total_tokens: usize,
    pub word_tokens: usize,
    pub punctuation_tokens: usize,
    pub unknown_tokens: usize,
    pub max_word_length: usize,

    // Runtime preference-controlled metrics
    pub whitespace_tokens: usize,
}

impl LexicalMetrics {
    pub(crate) fn record_token(&mut self, token: &Token, preferences: &LexicalPreferences) {
        self.total_tokens += 1;

        if !preferences.collect_detailed_metrics {
            return;
        }

        match token.kind() {
            TokenKind::Word => {
                self.word_tokens += 1;
                self.record_word_length(token.value().len(), preferences);
            }
            TokenKind::Punctuation => self.punctuation_tokens += 1,
            TokenKind::Unknown => self.unknown_tokens += 1,
            TokenKind::Whitespace => {
                if preferences.include_whitespace_in_counts {
                    self.whitespace_tokens += 1;
                }
            }
            TokenKind::EndOfStream => {}
        }
    }

    pub(crate) fn record_word_length(&mut self, length: usize, preferences: &LexicalPreferences) {
        self.max_word_length = self.max_word_length.max(length);

        if preferences.log_word_statistics {
            log_debug!("Word token processed",
                "length" => length,
                "max_so_far" => self.max_word_length
            );
        }
    }
}

/// Classification tokenizer over plain text with compile-time security boundaries
///
/// Classification rules, applied to each unit in order:
/// - ASCII alphanumeric starts a maximal word run
/// - space, tab, and newline each form a single whitespace token
/// - other ASCII punctuation forms a single punctuation token
/// - everything else is a single unknown token
pub struct PlaintextTokenizer {
    reader: ResourceReader,
    metrics: LexicalMetrics,
    preferences: LexicalPreferences,
}

impl PlaintextTokenizer {
    pub fn new(reader: ResourceReader) -> Self {
        Self {
            reader,
            metrics: LexicalMetrics::default(),
            preferences: LexicalPreferences::default(),
        }
    }

    /// Open the resource at `path` and prepare to tokenize it
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, TokenizerError> {
        Ok(Self::new(ResourceReader::open(path)?))
    }

    pub fn with_preferences(reader: ResourceReader, preferences: LexicalPreferences) -> Self {
        Self {
            reader,
            metrics: LexicalMetrics::default(),
            preferences,
        }
    }

    pub fn metrics(&self) -> &LexicalMetrics {
        &self.metrics
    }

    pub fn preferences(&self) -> &LexicalPreferences {
        &self.preferences
    }

    /// Tokenize the whole stream into a sentinel-terminated sequence
    ///
    /// The end-of-stream sentinel is always present and always last,
    /// even for empty input.
    pub fn tokenize(&mut self) -> Result<Vec<Token>, TokenizerError> {
        // Reset metrics for this tokenization
        self.metrics = LexicalMetrics::default();

        match self.reader.state() {
            ReaderState::Ready | ReaderState::AtEnd => {}
            state => {
                let error = TokenizerError::ReaderUnusable { state };
                log_error!(error.error_code(), "Cannot tokenize from unusable reader",
                    "state" => format!("{:?}", state)
                );
                return Err(error);
            }
        }

        crate::logging::set_resource_context(self.reader.path().to_path_buf());
        let result = self.tokenize_units();
        crate::logging::clear_resource_context();
        result
    }

    fn tokenize_units(&mut self) -> Result<Vec<Token>, TokenizerError> {
        log_debug!("Starting tokenization",
            "max_tokens_allowed" => MAX_TOKEN_COUNT,
            "max_word_length_allowed" => MAX_WORD_LENGTH
        );

        let mut tokens = Vec::new();

        loop {
            let unit = match self.reader.get() {
                Ok(unit) => unit,
                Err(e) if e.is_end_of_input() => break,
                Err(e) => {
                    log_error!(e.error_code(), "Reader failed during tokenization",
                        "position" => self.reader.position()
                    );
                    return Err(e.into());
                }
            };

            // SECURITY: bound the token count to prevent resource exhaustion
            if tokens.len() >= MAX_TOKEN_COUNT {
                let error = TokenizerError::TokenLimitExceeded { count: tokens.len() };
                log_error!(error.error_code(), "Token limit exceeded",
                    "token_count" => tokens.len(),
                    "limit" => MAX_TOKEN_COUNT
                );
                return Err(error);
            }

            let token = if unit.is_ascii_alphanumeric() {
                self.read_word(unit)?
            } else if unit == b' ' || unit == b'\t' || unit == b'\n' {
                Token::new(TokenKind::Whitespace, (unit as char).to_string())
            } else if unit.is_ascii_punctuation() {
                Token::new(TokenKind::Punctuation, (unit as char).to_string())
            } else {
                Token::new(TokenKind::Unknown, (unit as char).to_string())
            };

            self.metrics.record_token(&token, &self.preferences);
            tokens.push(token);
        }

        let sentinel = Token::end_of_stream();
        self.metrics.record_token(&sentinel, &self.preferences);
        tokens.push(sentinel);

        log_success!(codes::success::TOKENIZATION_COMPLETE, "Tokenization completed",
            "tokens" => tokens.len(),
            "words" => self.metrics.word_tokens,
            "max_word_length" => self.metrics.max_word_length
        );

        Ok(tokens)
    }

    /// Consume a maximal alphanumeric run starting with `first`
    ///
    /// The unit that ends the run is pushed back so the main loop
    /// classifies it next.
    fn read_word(&mut self, first: u8) -> Result<Token, TokenizerError> {
        let mut word = String::new();
        word.push(first as char);

        loop {
            if word.len() > MAX_WORD_LENGTH {
                let error = TokenizerError::WordTooLong { length: word.len() };
                log_error!(error.error_code(), "Word length limit exceeded",
                    "length" => word.len(),
                    "limit" => MAX_WORD_LENGTH
                );
                return Err(error);
            }

            match self.reader.get() {
                Ok(unit) if unit.is_ascii_alphanumeric() => word.push(unit as char),
                Ok(_) => {
                    self.reader.putback()?;
                    break;
                }
                Err(e) if e.is_end_of_input() => break,
                Err(e) => return Err(e.into()),
            }
        }

        Ok(Token::new(TokenKind::Word, word))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn tokenizer_for(contents: &str) -> PlaintextTokenizer {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write");
        PlaintextTokenizer::from_path(file.path()).expect("open")
    }

    fn kinds_and_values(tokens: &[Token]) -> Vec<(TokenKind, &str)> {
        tokens.iter().map(|t| (t.kind(), t.value())).collect()
    }

    #[test]
    fn test_classification_scenario() {
        let mut tokenizer = tokenizer_for("ab 1,c");
        let tokens = tokenizer.tokenize().expect("tokenize");

        assert_eq!(
            kinds_and_values(&tokens),
            vec![
                (TokenKind::Word, "ab"),
                (TokenKind::Whitespace, " "),
                (TokenKind::Word, "1"),
                (TokenKind::Punctuation, ","),
                (TokenKind::Word, "c"),
                (TokenKind::EndOfStream, ""),
            ]
        );
    }

    #[test]
    fn test_empty_input_yields_sentinel_only() {
        let mut tokenizer = tokenizer_for("");
        let tokens = tokenizer.tokenize().expect("tokenize");

        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].kind().is_end_of_stream());
    }

    #[test]
    fn test_words_are_maximal_runs() {
        let mut tokenizer = tokenizer_for("abc123def");
        let tokens = tokenizer.tokenize().expect("tokenize");

        assert_eq!(
            kinds_and_values(&tokens),
            vec![(TokenKind::Word, "abc123def"), (TokenKind::EndOfStream, "")]
        );
    }

    #[test]
    fn test_whitespace_units_are_individual_tokens() {
        let mut tokenizer = tokenizer_for(" \t\n");
        let tokens = tokenizer.tokenize().expect("tokenize");

        assert_eq!(
            kinds_and_values(&tokens),
            vec![
                (TokenKind::Whitespace, " "),
                (TokenKind::Whitespace, "\t"),
                (TokenKind::Whitespace, "\n"),
                (TokenKind::EndOfStream, ""),
            ]
        );
    }

    #[test]
    fn test_unclassified_units_are_unknown() {
        let mut tokenizer = tokenizer_for("a\rb");
        let tokens = tokenizer.tokenize().expect("tokenize");

        assert_eq!(
            kinds_and_values(&tokens),
            vec![
                (TokenKind::Word, "a"),
                (TokenKind::Unknown, "\r"),
                (TokenKind::Word, "b"),
                (TokenKind::EndOfStream, ""),
            ]
        );
    }

    #[test]
    fn test_word_ending_at_end_of_input() {
        let mut tokenizer = tokenizer_for("trailing");
        let tokens = tokenizer.tokenize().expect("tokenize");

        assert_eq!(tokens[0].value(), "trailing");
        assert!(tokens[1].kind().is_end_of_stream());
    }

    #[test]
    fn test_metrics_collection() {
        let mut tokenizer = tokenizer_for("ab 1,c");
        tokenizer.tokenize().expect("tokenize");

        let metrics = tokenizer.metrics();
        assert_eq!(metrics.total_tokens, 6);
        assert_eq!(metrics.word_tokens, 3);
        assert_eq!(metrics.punctuation_tokens, 1);
        assert_eq!(metrics.max_word_length, 2);
        // Whitespace counting is off by default
        assert_eq!(metrics.whitespace_tokens, 0);
    }

    #[test]
    fn test_detailed_metrics_can_be_disabled() {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(b"ab cd").expect("write");

        let preferences = LexicalPreferences {
            collect_detailed_metrics: false,
            ..Default::default()
        };
        let reader = ResourceReader::open(file.path()).expect("open");
        let mut tokenizer = PlaintextTokenizer::with_preferences(reader, preferences);

        tokenizer.tokenize().expect("tokenize");
        assert_eq!(tokenizer.metrics().total_tokens, 4);
        assert_eq!(tokenizer.metrics().word_tokens, 0);
        assert_eq!(tokenizer.metrics().max_word_length, 0);
    }

    #[test]
    fn test_whitespace_counted_when_enabled() {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(b"a b").expect("write");

        let preferences = LexicalPreferences {
            include_whitespace_in_counts: true,
            ..Default::default()
        };
        let reader = ResourceReader::open(file.path()).expect("open");
        let mut tokenizer = PlaintextTokenizer::with_preferences(reader, preferences);

        tokenizer.tokenize().expect("tokenize");
        assert_eq!(tokenizer.metrics().whitespace_tokens, 1);
    }

    #[test]
    fn test_unusable_reader_is_rejected() {
        let mut tokenizer = PlaintextTokenizer::new(ResourceReader::new_uninitialized());

        assert_matches!(
            tokenizer.tokenize(),
            Err(TokenizerError::ReaderUnusable {
                state: ReaderState::Uninitialized
            })
        );
    }

    #[test]
    fn test_corrupt_reader_is_rejected() {
        let mut file = NamedTempFile::new().expect("temp file");
        file.write_all(b"abc").expect("write");

        let mut reader = ResourceReader::open(file.path()).expect("open");
        reader.mark_corrupt();
        let mut tokenizer = PlaintextTokenizer::new(reader);

        assert_matches!(
            tokenizer.tokenize(),
            Err(TokenizerError::ReaderUnusable {
                state: ReaderState::Corrupt
            })
        );
    }

    #[test]
    fn test_retokenize_resets_metrics() {
        let mut tokenizer = tokenizer_for("one two");
        tokenizer.tokenize().expect("tokenize");
        let first_words = tokenizer.metrics().word_tokens;
        assert_eq!(first_words, 2);

        // Second pass starts from the exhausted reader
        let tokens = tokenizer.tokenize().expect("tokenize");
        assert_eq!(tokens.len(), 1);
        assert_eq!(tokenizer.metrics().word_tokens, 0);
    }

    #[test]
    fn test_word_at_length_limit_is_accepted() {
        let contents = "a".repeat(MAX_WORD_LENGTH);
        let mut tokenizer = tokenizer_for(&contents);

        let tokens = tokenizer.tokenize().expect("tokenize");
        assert_eq!(tokens[0].value().len(), MAX_WORD_LENGTH);
        assert!(tokens[1].kind().is_end_of_stream());
    }

    #[test]
    fn test_word_over_length_limit_is_rejected() {
        let contents = "a".repeat(MAX_WORD_LENGTH + 1);
        let mut tokenizer = tokenizer_for(&contents);

        assert_matches!(
            tokenizer.tokenize(),
            Err(TokenizerError::WordTooLong { length }) if length > MAX_WORD_LENGTH
        );
    }

    #[test]
    fn test_token_count_limit_is_enforced() {
        // Each comma is its own punctuation token
        let contents = ",".repeat(MAX_TOKEN_COUNT + 1);
        let mut tokenizer = tokenizer_for(&contents);

        assert_matches!(
            tokenizer.tokenize(),
            Err(TokenizerError::TokenLimitExceeded { count: MAX_TOKEN_COUNT })
        );
    }

    #[test]
    fn test_error_code_mapping() {
        let limit = TokenizerError::TokenLimitExceeded { count: 10 };
        assert_eq!(limit.error_code().as_str(), "E021");

        let reader: TokenizerError = ReaderError::EndOfInput.into();
        assert_eq!(reader.error_code().as_str(), "E010");
    }
}
