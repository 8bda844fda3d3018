//! Consolidated error codes and classification system
//!
//! Single source of truth for all error codes, their metadata, and classification functions.
//! This module combines code constants with their behavioral metadata in one place.

use std::collections::HashMap;
use std::sync::OnceLock;

// ============================================================================
// CODE WRAPPER TYPE
// ============================================================================

/// Universal code wrapper for both error and success codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code(&'static str);

impl Code {
    pub const fn new(code: &'static str) -> Self {
        Self(code)
    }

    pub fn as_str(&self) -> &'static str {
        self.0
    }
}

impl std::fmt::Display for Code {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// ERROR CLASSIFICATION TYPES
// ============================================================================

/// Error severity levels
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Critical = 0,
    High = 1,
    Medium = 2,
    Low = 3,
}

impl Severity {
    pub fn as_str(&self) -> &'static str {
        match self {
            Severity::Critical => "Critical",
            Severity::High => "High",
            Severity::Medium => "Medium",
            Severity::Low => "Low",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "Critical" => Some(Severity::Critical),
            "High" => Some(Severity::High),
            "Medium" => Some(Severity::Medium),
            "Low" => Some(Severity::Low),
            _ => None,
        }
    }
}

/// Complete metadata for an error code
#[derive(Debug, Clone)]
pub struct ErrorMetadata {
    pub code: &'static str,
    pub category: &'static str,
    pub severity: Severity,
    pub recoverable: bool,
    pub requires_halt: bool,
    pub description: &'static str,
    pub recommended_action: &'static str,
}

impl ErrorMetadata {
    pub fn new(
        code: &'static str,
        category: &'static str,
        severity: Severity,
        recoverable: bool,
        requires_halt: bool,
        description: &'static str,
        recommended_action: &'static str,
    ) -> Self {
        Self {
            code,
            category,
            severity,
            recoverable,
            requires_halt,
            description,
            recommended_action,
        }
    }
}

// ============================================================================
// ERROR CODE CONSTANTS
// ============================================================================

/// System error codes
pub mod system {
    use super::Code;

    pub const INTERNAL_ERROR: Code = Code::new("ERR001");
    pub const INITIALIZATION_FAILURE: Code = Code::new("ERR002");
}

/// Resource reader error codes
pub mod resource {
    use super::Code;

    pub const RESOURCE_NOT_FOUND: Code = Code::new("E005");
    pub const RESOURCE_UNINITIALIZED: Code = Code::new("E006");
    pub const RESOURCE_TOO_LARGE: Code = Code::new("E007");
    pub const RESOURCE_CORRUPT: Code = Code::new("E008");
    pub const PERMISSION_DENIED: Code = Code::new("E009");
    pub const END_OF_INPUT: Code = Code::new("E010");
    pub const IO_ERROR: Code = Code::new("E011");
    pub const SEEK_FAILED: Code = Code::new("E012");
    pub const INVALID_READ_LENGTH: Code = Code::new("E013");
}

/// Tokenization error codes
pub mod lexical {
    use super::Code;

    pub const READER_UNUSABLE: Code = Code::new("E020");
    pub const TOO_MANY_TOKENS: Code = Code::new("E021");
    pub const WORD_TOO_LONG: Code = Code::new("E022");
}

/// Token cursor error codes
pub mod cursor {
    use super::Code;

    pub const CURSOR_OUT_OF_RANGE: Code = Code::new("E040");
    pub const COUNTER_NOT_REGISTERED: Code = Code::new("E041");
}

// ============================================================================
// SUCCESS CODE CONSTANTS
// ============================================================================

/// Success codes
pub mod success {
    use super::Code;

    // General success codes
    pub const SYSTEM_INITIALIZATION_COMPLETED: Code = Code::new("I004");

    // Resource success codes
    pub const RESOURCE_OPEN_SUCCESS: Code = Code::new("I006");

    // Lexical success codes
    pub const TOKENIZATION_COMPLETE: Code = Code::new("I020");

    // Filter success codes
    pub const MINIFICATION_COMPLETE: Code = Code::new("I030");
}

// ============================================================================
// ERROR METADATA REGISTRY
// ============================================================================

/// Error metadata registry using OnceLock for thread safety
static ERROR_REGISTRY: OnceLock<HashMap<&'static str, ErrorMetadata>> = OnceLock::new();

/// Initialize and get the error registry
fn get_error_registry() -> &'static HashMap<&'static str, ErrorMetadata> {
    ERROR_REGISTRY.get_or_init(|| {
        let mut registry = HashMap::new();

        // System errors
        registry.insert(
            "ERR001",
            ErrorMetadata::new(
                "ERR001",
                "System",
                Severity::Critical,
                false,
                true,
                "Critical internal system error",
                "Contact system administrator or file bug report",
            ),
        );
        registry.insert(
            "ERR002",
            ErrorMetadata::new(
                "ERR002",
                "System",
                Severity::Critical,
                false,
                true,
                "System initialization failure",
                "Check system configuration and dependencies",
            ),
        );

        // Resource reader errors
        registry.insert(
            "E005",
            ErrorMetadata::new(
                "E005",
                "Resource",
                Severity::Medium,
                false,
                true,
                "Resource not found at specified path",
                "Check resource path and ensure it exists",
            ),
        );
        registry.insert(
            "E006",
            ErrorMetadata::new(
                "E006",
                "Resource",
                Severity::High,
                false,
                true,
                "Operation attempted on uninitialized reader",
                "Open a resource before reading from it",
            ),
        );
        registry.insert(
            "E007",
            ErrorMetadata::new(
                "E007",
                "Resource",
                Severity::Medium,
                false,
                true,
                "Resource exceeds maximum size limit",
                "Reduce resource size or increase processing limits",
            ),
        );
        registry.insert(
            "E008",
            ErrorMetadata::new(
                "E008",
                "Resource",
                Severity::High,
                false,
                true,
                "Unrecoverable I/O corruption on reader",
                "Check the underlying storage and reopen the resource",
            ),
        );
        registry.insert(
            "E009",
            ErrorMetadata::new(
                "E009",
                "Resource",
                Severity::Medium,
                false,
                true,
                "Permission denied accessing resource",
                "Check resource permissions and user access rights",
            ),
        );
        registry.insert(
            "E010",
            ErrorMetadata::new(
                "E010",
                "Resource",
                Severity::Low,
                true,
                false,
                "End of input reached",
                "Treat as normal loop termination, not a failure",
            ),
        );
        registry.insert(
            "E011",
            ErrorMetadata::new(
                "E011",
                "Resource",
                Severity::Medium,
                false,
                true,
                "I/O error during resource operation",
                "Check disk space, permissions, and file system integrity",
            ),
        );
        registry.insert(
            "E012",
            ErrorMetadata::new(
                "E012",
                "Resource",
                Severity::Low,
                true,
                false,
                "Seek target outside resource bounds",
                "Clear the error state and seek to a valid position",
            ),
        );
        registry.insert(
            "E013",
            ErrorMetadata::new(
                "E013",
                "Resource",
                Severity::Low,
                true,
                false,
                "Read length below the minimum of one unit",
                "Request at least one unit per read",
            ),
        );

        // Tokenization errors
        registry.insert(
            "E020",
            ErrorMetadata::new(
                "E020",
                "Lexical",
                Severity::High,
                false,
                true,
                "Reader unusable at tokenization start",
                "Ensure the reader is open and uncorrupted before tokenizing",
            ),
        );
        registry.insert(
            "E021",
            ErrorMetadata::new(
                "E021",
                "Lexical",
                Severity::High,
                false,
                true,
                "Input contains too many tokens, possible DoS attack",
                "Reduce input size or increase token limits",
            ),
        );
        registry.insert(
            "E022",
            ErrorMetadata::new(
                "E022",
                "Lexical",
                Severity::Medium,
                false,
                true,
                "Word token exceeds maximum allowed length",
                "Break up overlong alphanumeric runs or raise the limit",
            ),
        );

        // Cursor errors
        registry.insert(
            "E040",
            ErrorMetadata::new(
                "E040",
                "Cursor",
                Severity::Low,
                true,
                false,
                "Cursor addressed a position past sequence bounds",
                "Seek to a valid position before accessing",
            ),
        );
        registry.insert(
            "E041",
            ErrorMetadata::new(
                "E041",
                "Cursor",
                Severity::Low,
                true,
                false,
                "Counter queried for an unregistered token kind",
                "Register the kind before querying its counter",
            ),
        );

        // Success codes that participate in classification
        registry.insert(
            "I004",
            ErrorMetadata::new(
                "I004",
                "System",
                Severity::Low,
                true,
                false,
                "System initialization completed successfully",
                "Continue normal operation",
            ),
        );
        registry.insert(
            "I006",
            ErrorMetadata::new(
                "I006",
                "Resource",
                Severity::Low,
                true,
                false,
                "Resource opened successfully",
                "Continue to tokenization",
            ),
        );
        registry.insert(
            "I020",
            ErrorMetadata::new(
                "I020",
                "Lexical",
                Severity::Low,
                true,
                false,
                "Tokenization completed successfully",
                "Continue to cursor traversal",
            ),
        );
        registry.insert(
            "I030",
            ErrorMetadata::new(
                "I030",
                "Filter",
                Severity::Low,
                true,
                false,
                "Minification completed successfully",
                "Continue with the filtered stream",
            ),
        );

        registry
    })
}

// ============================================================================
// CLASSIFICATION FUNCTIONS
// ============================================================================

/// Get error metadata for a specific error code
pub fn get_error_metadata(code: &str) -> Option<&'static ErrorMetadata> {
    get_error_registry().get(code)
}

/// Get error severity from error code
pub fn get_severity(code: &str) -> Severity {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.severity)
        .unwrap_or(Severity::Medium)
}

/// Check if error is recoverable
pub fn is_recoverable(code: &str) -> bool {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.recoverable)
        .unwrap_or(true)
}

/// Check if error requires immediate halt
pub fn requires_halt(code: &str) -> bool {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.requires_halt)
        .unwrap_or(false)
}

/// Get human-readable description for error code
pub fn get_description(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.description)
        .unwrap_or("Unknown error")
}

/// Get recommended action for error code
pub fn get_action(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.recommended_action)
        .unwrap_or("No specific action available")
}

/// Get error category from error code
pub fn get_category(code: &str) -> &'static str {
    get_error_registry()
        .get(code)
        .map(|metadata| metadata.category)
        .unwrap_or("Unknown")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_of_input_is_recoverable() {
        assert!(is_recoverable(resource::END_OF_INPUT.as_str()));
        assert!(!requires_halt(resource::END_OF_INPUT.as_str()));
    }

    #[test]
    fn test_fatal_resource_errors_halt() {
        assert!(requires_halt(resource::RESOURCE_CORRUPT.as_str()));
        assert!(requires_halt(resource::RESOURCE_UNINITIALIZED.as_str()));
        assert!(!is_recoverable(resource::RESOURCE_CORRUPT.as_str()));
    }

    #[test]
    fn test_cursor_errors_are_local() {
        assert!(is_recoverable(cursor::CURSOR_OUT_OF_RANGE.as_str()));
        assert_eq!(get_category(cursor::CURSOR_OUT_OF_RANGE.as_str()), "Cursor");
        assert_eq!(
            get_severity(cursor::COUNTER_NOT_REGISTERED.as_str()),
            Severity::Low
        );
    }

    #[test]
    fn test_success_codes_have_metadata() {
        assert_eq!(
            get_description(success::TOKENIZATION_COMPLETE.as_str()),
            "Tokenization completed successfully"
        );
        assert_eq!(
            get_description(success::MINIFICATION_COMPLETE.as_str()),
            "Minification completed successfully"
        );
        assert_eq!(get_category(success::MINIFICATION_COMPLETE.as_str()), "Filter");
    }

    #[test]
    fn test_unknown_code_defaults() {
        assert_eq!(get_description("E999"), "Unknown error");
        assert_eq!(get_category("E999"), "Unknown");
        assert_eq!(get_severity("E999"), Severity::Medium);
    }
}
