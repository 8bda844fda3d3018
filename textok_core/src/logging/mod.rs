//! Global logging module for the textok toolkit
//!
//! Provides thread-safe global logging with resource-aware context
//! and a clean macro interface.

pub mod codes;
pub mod config;
pub mod events;
pub mod macros;
pub mod service;

use std::cell::RefCell;
use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

// Re-export main types
pub use codes::Code;
pub use events::{LogEvent, LogLevel};
pub use service::{ConsoleLogger, Logger, LoggingService, MemoryLogger, StructuredLogger};

// ============================================================================
// GLOBAL STATE
// ============================================================================

static GLOBAL_LOGGER: OnceLock<Arc<LoggingService>> = OnceLock::new();

thread_local! {
    static RESOURCE_CONTEXT: RefCell<Option<ResourceContext>> = const { RefCell::new(None) };
}

/// Per-thread context naming the resource currently being processed
#[derive(Debug, Clone)]
pub struct ResourceContext {
    pub resource_path: PathBuf,
}

impl ResourceContext {
    pub fn new(resource_path: PathBuf) -> Self {
        Self { resource_path }
    }
}

// ============================================================================
// INITIALIZATION
// ============================================================================

/// Initialize global logging system
pub fn init_global_logging() -> Result<(), String> {
    config::validate_config().map_err(|e| format!("Configuration validation failed: {}", e))?;

    let logging_service = Arc::new(service::create_configured_service());

    GLOBAL_LOGGER
        .set(logging_service.clone())
        .map_err(|_| "Global logger already initialized")?;

    // Validate error code system
    let test_codes = ["ERR001", "E005", "E020", "E040"];
    for &code in &test_codes {
        if codes::get_description(code) == "Unknown error" {
            return Err(format!("Missing metadata for error code: {}", code));
        }
    }

    let event = events::LogEvent::success(
        codes::success::SYSTEM_INITIALIZATION_COMPLETED,
        "Global logging system initialized",
    );
    logging_service.log_event(event);

    Ok(())
}

/// Initialize with custom service (primarily for testing)
pub fn init_global_logging_with_service(service: Arc<LoggingService>) -> Result<(), String> {
    GLOBAL_LOGGER
        .set(service)
        .map_err(|_| "Global logger already initialized")?;

    Ok(())
}

/// Check if global logging is initialized
pub fn is_initialized() -> bool {
    GLOBAL_LOGGER.get().is_some()
}

// ============================================================================
// GLOBAL ACCESS
// ============================================================================

/// Safe access to global logger
pub fn try_get_global_logger() -> Option<&'static LoggingService> {
    GLOBAL_LOGGER.get().map(|service| service.as_ref())
}

// ============================================================================
// RESOURCE CONTEXT MANAGEMENT
// ============================================================================

/// Set resource context for current thread
pub fn set_resource_context(resource_path: PathBuf) {
    let context = ResourceContext::new(resource_path);

    RESOURCE_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = Some(context);
    });
}

/// Clear resource context for current thread
pub fn clear_resource_context() {
    RESOURCE_CONTEXT.with(|ctx| {
        *ctx.borrow_mut() = None;
    });
}

/// Execute function with resource context
pub fn with_resource_context<F, R>(resource_path: PathBuf, f: F) -> R
where
    F: FnOnce() -> R,
{
    set_resource_context(resource_path);
    let result = f();
    clear_resource_context();
    result
}

/// Get current resource context (used by macros)
pub fn get_current_resource_context() -> Option<ResourceContext> {
    RESOURCE_CONTEXT.with(|ctx| ctx.borrow().clone())
}

// ============================================================================
// MACRO SUPPORT FUNCTIONS
// ============================================================================

/// Log error with context (used by log_error! macro)
pub fn log_error_with_context(code: Code, message: &str, context: Vec<(&str, &str)>) {
    let mut event = LogEvent::error(code, message);

    for (key, value) in context {
        event = event.with_context(key, value);
    }

    if config::include_resource_context() {
        if let Some(resource_ctx) = get_current_resource_context() {
            event =
                event.with_context("resource", &resource_ctx.resource_path.display().to_string());
        }
    }

    if let Some(logger) = try_get_global_logger() {
        logger.log_event(event);
    }
}

/// Log success with context (used by log_success! macro)
pub fn log_success_with_context(code: Code, message: &str, context: Vec<(&str, &str)>) {
    let mut event = LogEvent::success(code, message);

    for (key, value) in context {
        event = event.with_context(key, value);
    }

    if config::include_resource_context() {
        if let Some(resource_ctx) = get_current_resource_context() {
            event =
                event.with_context("resource", &resource_ctx.resource_path.display().to_string());
        }
    }

    if let Some(logger) = try_get_global_logger() {
        logger.log_event(event);
    }
}

/// Log info with context (used by log_info! macro)
pub fn log_info_with_context(message: &str, context: Vec<(&str, &str)>) {
    let mut event = LogEvent::info(message);

    for (key, value) in context {
        event = event.with_context(key, value);
    }

    if config::include_resource_context() {
        if let Some(resource_ctx) = get_current_resource_context() {
            event =
                event.with_context("resource", &resource_ctx.resource_path.display().to_string());
        }
    }

    if let Some(logger) = try_get_global_logger() {
        logger.log_event(event);
    }
}

// ============================================================================
// SAFE FALLBACK LOGGING
// ============================================================================

/// Safe error logging (won't panic if uninitialized)
pub fn safe_log_error(code: Code, message: &str) {
    if let Some(logger) = try_get_global_logger() {
        let event = LogEvent::error(code, message);
        logger.log_event(event);
    } else {
        eprintln!("[ERROR] FALLBACK: [{}] {}", code.as_str(), message);
    }
}

/// Safe critical error logging
pub fn safe_log_critical(code: Code, message: &str) {
    if let Some(logger) = try_get_global_logger() {
        let event = LogEvent::error(code, message);
        logger.log_event(event);
    }
    // Always log critical errors to stderr regardless
    eprintln!("CRITICAL ERROR [{}]: {}", code.as_str(), message);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resource_context_management() {
        let resource_path = PathBuf::from("notes.txt");

        assert!(get_current_resource_context().is_none());

        set_resource_context(resource_path.clone());
        let context = get_current_resource_context();
        assert!(context.is_some());
        assert_eq!(context.unwrap().resource_path, resource_path);

        clear_resource_context();
        assert!(get_current_resource_context().is_none());
    }

    #[test]
    fn test_with_resource_context() {
        let resource_path = PathBuf::from("notes.txt");

        let result = with_resource_context(resource_path.clone(), || {
            let context = get_current_resource_context();
            assert!(context.is_some());
            assert_eq!(context.unwrap().resource_path, resource_path);
            42
        });

        assert_eq!(result, 42);
        assert!(get_current_resource_context().is_none());
    }

    #[test]
    fn test_safe_logging() {
        safe_log_error(codes::system::INTERNAL_ERROR, "Test error");
        safe_log_critical(codes::system::INTERNAL_ERROR, "Test critical error");
        // Should not panic even if global logging is not initialized
    }
}
