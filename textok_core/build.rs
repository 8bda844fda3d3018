// build.rs - TOML-driven compile-time constant generation
use std::env;
use std::fs;
use std::path::Path;

#[derive(serde::Deserialize)]
struct CompileTimeConfig {
    reader: ReaderLimits,
    lexical: LexicalLimits,
    cursor: CursorLimits,
    logging: LoggingLimits,
}

#[derive(serde::Deserialize)]
struct ReaderLimits {
    max_resource_size: u64,
    large_resource_threshold: u64,
}

#[derive(serde::Deserialize)]
struct LexicalLimits {
    max_token_count: usize,
    max_word_length: usize,
}

#[derive(serde::Deserialize)]
struct CursorLimits {
    max_skip_distance: usize,
}

#[derive(serde::Deserialize)]
struct LoggingLimits {
    log_buffer_size: usize,
    max_log_message_length: usize,
    security_min_log_level: u8,
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=TEXTOK_BUILD_PROFILE");
    println!("cargo:rerun-if-env-changed=TEXTOK_CONFIG_DIR");

    let profile = env::var("TEXTOK_BUILD_PROFILE").unwrap_or_else(|_| "development".to_string());
    let config_dir = env::var("TEXTOK_CONFIG_DIR").unwrap_or_else(|_| "config".to_string());

    // Find workspace root (parent of textok_core directory)
    let manifest_dir = env::var("CARGO_MANIFEST_DIR").unwrap();
    let workspace_root = Path::new(&manifest_dir)
        .parent()
        .expect("Could not find workspace root (parent directory)");

    // Build config path relative to workspace root
    let config_path = workspace_root
        .join(&config_dir)
        .join(format!("{}.toml", profile));

    println!("cargo:rerun-if-changed={}", config_path.display());

    if !config_path.exists() {
        panic!(
            "Configuration file not found: {}\nWorkspace root: {}\nLooking for: {}/{}/{}.toml",
            config_path.display(),
            workspace_root.display(),
            workspace_root.display(),
            config_dir,
            profile
        );
    }

    let config_content = fs::read_to_string(&config_path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", config_path.display(), e));

    let config: CompileTimeConfig = toml::from_str(&config_content)
        .unwrap_or_else(|e| panic!("Invalid TOML in {}: {}", config_path.display(), e));

    validate_security_constraints(&config, &profile);
    generate_constants(&config, &profile);

    println!(
        "cargo:warning=Generated constants from {}",
        config_path.display()
    );
}

fn validate_security_constraints(config: &CompileTimeConfig, profile: &str) {
    const ABSOLUTE_MAX_RESOURCE_SIZE: u64 = 1_000_000_000;
    const ABSOLUTE_MAX_TOKEN_COUNT: usize = 10_000_000;

    if config.reader.max_resource_size > ABSOLUTE_MAX_RESOURCE_SIZE {
        panic!("SECURITY: max_resource_size exceeds absolute maximum");
    }

    if config.lexical.max_token_count > ABSOLUTE_MAX_TOKEN_COUNT {
        panic!("SECURITY: max_token_count exceeds absolute maximum");
    }

    if config.lexical.max_word_length == 0 {
        panic!("SECURITY: max_word_length cannot be zero");
    }

    if config.logging.security_min_log_level > 2 {
        panic!("SECURITY: security_min_log_level too high (max: 2)");
    }

    if profile == "production" {
        if config.reader.max_resource_size > 100_000_000 {
            panic!("PRODUCTION: max_resource_size too high for production");
        }
        if config.lexical.max_token_count > 1_000_000 {
            panic!("PRODUCTION: max_token_count too high for production");
        }
    }
}

fn generate_constants(config: &CompileTimeConfig, profile: &str) {
    let out_dir = env::var("OUT_DIR").unwrap();
    let output_path = Path::new(&out_dir).join("constants.rs");

    let constants_code = format!(
        r#"
// Generated compile-time constants from TOML configuration
// Profile: {}
// DO NOT EDIT - Generated by build.rs

pub mod compile_time {{
    pub mod reader {{
        pub const MAX_RESOURCE_SIZE: u64 = {};
        pub const LARGE_RESOURCE_THRESHOLD: u64 = {};
    }}

    pub mod lexical {{
        pub const MAX_TOKEN_COUNT: usize = {};
        pub const MAX_WORD_LENGTH: usize = {};
    }}

    pub mod cursor {{
        pub const MAX_SKIP_DISTANCE: usize = {};
    }}

    pub mod logging {{
        pub const LOG_BUFFER_SIZE: usize = {};
        pub const MAX_LOG_MESSAGE_LENGTH: usize = {};
        pub const SECURITY_MIN_LOG_LEVEL: u8 = {};
    }}
}}
"#,
        profile,
        // Reader
        config.reader.max_resource_size,
        config.reader.large_resource_threshold,
        // Lexical
        config.lexical.max_token_count,
        config.lexical.max_word_length,
        // Cursor
        config.cursor.max_skip_distance,
        // Logging
        config.logging.log_buffer_size,
        config.logging.max_log_message_length,
        config.logging.security_min_log_level,
    );

    fs::write(output_path, constants_code).unwrap();
}
