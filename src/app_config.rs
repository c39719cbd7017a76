use anyhow::{Result, anyhow};
use serde::{Deserialize, Serialize};
use std::default::Default;

/// Application configuration module
/// This module handles the application configuration including loading,
/// validating and saving configuration settings.
/// Represents the application configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Directory extraction outputs are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    /// HTTP request settings
    #[serde(default)]
    pub request: RequestConfig,

    /// Log level
    #[serde(default)]
    pub log_level: LogLevel,
}

/// HTTP request settings for playlist and segment fetches
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RequestConfig {
    // @field: User-Agent header sent with every request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    // @field: Accept header sent with every request
    #[serde(default = "default_accept")]
    pub accept: String,

    // @field: Per-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for RequestConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            accept: default_accept(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Log level for application logging
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Error level
    Error,
    /// Warning level
    Warn,
    /// Info level
    #[default]
    Info,
    /// Debug level
    Debug,
    /// Trace level
    Trace,
}

fn default_output_dir() -> String {
    ".".to_string()
}

fn default_user_agent() -> String {
    // Some caption CDNs refuse requests without a browser-looking agent
    "Mozilla/5.0".to_string()
}

fn default_accept() -> String {
    "*/*".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

impl Default for Config {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            request: RequestConfig::default(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.output_dir.trim().is_empty() {
            return Err(anyhow!("Output directory must not be empty"));
        }

        if self.request.user_agent.trim().is_empty() {
            return Err(anyhow!("User agent must not be empty"));
        }

        if self.request.timeout_secs == 0 {
            return Err(anyhow!("Request timeout must be greater than zero"));
        }

        Ok(())
    }
}
