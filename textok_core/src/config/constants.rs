pub mod compile_time {
    pub mod reader {
        /// Maximum resource size allowed for processing (100MB in development)
        /// SECURITY: Prevents DoS attacks via oversized inputs
        pub const MAX_RESOURCE_SIZE: u64 = 100 * 1024 * 1024;

        /// Threshold for considering a resource "large" (1MB)
        /// PERFORMANCE: Affects logging verbosity for large inputs
        pub const LARGE_RESOURCE_THRESHOLD: u64 = 1024 * 1024;
    }

    pub mod lexical {
        /// Maximum number of tokens allowed in a single tokenization
        /// SECURITY: Prevents DoS via token explosion attacks
        pub const MAX_TOKEN_COUNT: usize = 1_000_000;

        /// Maximum length of a single word token
        /// SECURITY: Limits per-token memory consumption
        pub const MAX_WORD_LENGTH: usize = 8192;
    }

    pub mod cursor {
        /// Advisory limit on a single skip distance
        /// RESOURCE: Flags suspiciously large position jumps in logs
        pub const MAX_SKIP_DISTANCE: usize = 1_000_000;
    }

    pub mod logging {
        /// Maximum events retained by buffered loggers
        /// RESOURCE: Controls memory usage for log collection
        pub const LOG_BUFFER_SIZE: usize = 10_000;

        /// Maximum length of a single log message
        /// RESOURCE: Prevents unbounded log growth
        pub const MAX_LOG_MESSAGE_LENGTH: usize = 4096;

        /// Minimum log level that security events are always logged at
        /// SECURITY: Cannot be raised above Info (2) by user preference
        pub const SECURITY_MIN_LOG_LEVEL: u8 = 2;
    }
}
