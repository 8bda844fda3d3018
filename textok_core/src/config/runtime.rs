// RUNTIME PREFERENCES (User Experience)

use serde::{Deserialize, Serialize};
use std::env;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReaderPreferences {
    /// Whether to log debug information for every read operation
    pub log_read_operations: bool,

    /// Whether to warn when a resource crosses the large-resource threshold
    pub warn_on_large_resources: bool,

    /// Whether to include the resource path in error messages
    pub include_path_in_errors: bool,
}

impl Default for ReaderPreferences {
    fn default() -> Self {
        Self {
            log_read_operations: env::var("TEXTOK_READER_LOG_READS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            warn_on_large_resources: env::var("TEXTOK_READER_WARN_LARGE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            include_path_in_errors: env::var("TEXTOK_READER_INCLUDE_PATHS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LexicalPreferences {
    /// Whether to collect detailed per-kind token metrics
    pub collect_detailed_metrics: bool,

    /// Whether to include whitespace tokens in metric counts
    pub include_whitespace_in_counts: bool,

    /// Whether to log word length statistics
    pub log_word_statistics: bool,
}

impl Default for LexicalPreferences {
    fn default() -> Self {
        Self {
            collect_detailed_metrics: env::var("TEXTOK_LEXICAL_DETAILED_METRICS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            include_whitespace_in_counts: env::var("TEXTOK_LEXICAL_INCLUDE_WHITESPACE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
            log_word_statistics: env::var("TEXTOK_LEXICAL_LOG_WORD_STATS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingPreferences {
    /// Whether to use structured JSON logging (user preference)
    pub use_structured_logging: bool,

    /// Whether to enable console output (user preference)
    pub enable_console_logging: bool,

    /// User preferred minimum log level (within security constraints)
    pub min_log_level: LogLevel,

    /// Whether to include resource context in log messages
    pub include_resource_context: bool,
}

impl Default for LoggingPreferences {
    fn default() -> Self {
        Self {
            use_structured_logging: env::var("TEXTOK_LOGGING_USE_STRUCTURED")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            enable_console_logging: env::var("TEXTOK_LOGGING_ENABLE_CONSOLE")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(false),
            min_log_level: env::var("TEXTOK_LOGGING_MIN_LEVEL")
                .ok()
                .and_then(|v| parse_log_level(&v))
                .unwrap_or(LogLevel::Info),
            include_resource_context: env::var("TEXTOK_LOGGING_INCLUDE_RESOURCE_CONTEXT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(true),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum LogLevel {
    Error = 0,
    Warning = 1,
    Info = 2,
    Debug = 3,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "ERROR",
            LogLevel::Warning => "WARN",
            LogLevel::Info => "INFO",
            LogLevel::Debug => "DEBUG",
        }
    }

    /// Convert to events::LogLevel for compatibility
    pub fn to_events_log_level(&self) -> crate::logging::events::LogLevel {
        match self {
            LogLevel::Error => crate::logging::events::LogLevel::Error,
            LogLevel::Warning => crate::logging::events::LogLevel::Warning,
            LogLevel::Info => crate::logging::events::LogLevel::Info,
            LogLevel::Debug => crate::logging::events::LogLevel::Debug,
        }
    }
}

/// Parse log level from string (used for environment variables)
fn parse_log_level(level: &str) -> Option<LogLevel> {
    match level.to_lowercase().as_str() {
        "error" | "0" => Some(LogLevel::Error),
        "warning" | "warn" | "1" => Some(LogLevel::Warning),
        "info" | "2" => Some(LogLevel::Info),
        "debug" | "3" => Some(LogLevel::Debug),
        _ => None,
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RuntimeConfig {
    pub reader: ReaderPreferences,
    pub lexical: LexicalPreferences,
    pub logging: LoggingPreferences,
}

/// Environment variable names for configuration
pub mod env_vars {
    // Reader
    pub const READER_LOG_READS: &str = "TEXTOK_READER_LOG_READS";
    pub const READER_WARN_LARGE: &str = "TEXTOK_READER_WARN_LARGE";
    pub const READER_INCLUDE_PATHS: &str = "TEXTOK_READER_INCLUDE_PATHS";

    // Lexical
    pub const LEXICAL_DETAILED_METRICS: &str = "TEXTOK_LEXICAL_DETAILED_METRICS";
    pub const LEXICAL_INCLUDE_WHITESPACE: &str = "TEXTOK_LEXICAL_INCLUDE_WHITESPACE";
    pub const LEXICAL_LOG_WORD_STATS: &str = "TEXTOK_LEXICAL_LOG_WORD_STATS";

    // Logging
    pub const LOGGING_USE_STRUCTURED: &str = "TEXTOK_LOGGING_USE_STRUCTURED";
    pub const LOGGING_ENABLE_CONSOLE: &str = "TEXTOK_LOGGING_ENABLE_CONSOLE";
    pub const LOGGING_MIN_LEVEL: &str = "TEXTOK_LOGGING_MIN_LEVEL";
    pub const LOGGING_INCLUDE_RESOURCE_CONTEXT: &str = "TEXTOK_LOGGING_INCLUDE_RESOURCE_CONTEXT";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(parse_log_level("error"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("ERROR"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("0"), Some(LogLevel::Error));
        assert_eq!(parse_log_level("warn"), Some(LogLevel::Warning));
        assert_eq!(parse_log_level("info"), Some(LogLevel::Info));
        assert_eq!(parse_log_level("debug"), Some(LogLevel::Debug));
        assert_eq!(parse_log_level("3"), Some(LogLevel::Debug));
        assert_eq!(parse_log_level("invalid"), None);
    }

    #[test]
    fn test_env_var_names_exist() {
        assert!(!env_vars::READER_LOG_READS.is_empty());
        assert!(!env_vars::LOGGING_MIN_LEVEL.is_empty());
        assert!(!env_vars::LEXICAL_DETAILED_METRICS.is_empty());
    }
}
