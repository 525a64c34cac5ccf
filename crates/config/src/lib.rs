//! Configuration management for OCR language identification
//!
//! Supports loading configuration from:
//! - YAML/TOML files (`config/default`, `config/{env}`)
//! - Environment variables (`OCRLANG__` prefix, `__` separator)

pub mod settings;

pub use settings::{
    init_tracing, load_settings, DetectionConfig, ObservabilityConfig, PdfConfig, ResolverConfig,
    Settings,
};

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Invalid value for {field}: {message}")]
    InvalidValue { field: String, message: String },

    #[error("Environment error: {0}")]
    Environment(String),
}

impl From<config::ConfigError> for ConfigError {
    fn from(err: config::ConfigError) -> Self {
        match err {
            config::ConfigError::NotFound(key) => ConfigError::FileNotFound(key),
            other => ConfigError::ParseError(other.to_string()),
        }
    }
}

impl From<ConfigError> for ocrlang_core::Error {
    fn from(err: ConfigError) -> Self {
        ocrlang_core::Error::Config(err.to_string())
    }
}
