//! Configuration management for the txt2pdf server

use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Default delay between producing/serving an artifact and deleting it
pub const DEFAULT_GRACE_PERIOD: Duration = Duration::from_secs(2);

/// Default request body limit for uploads: 10MB
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    pub cleanup: CleanupConfig,
    pub web: WebConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Incoming area: freshly uploaded text files
    pub incoming_dir: PathBuf,
    /// Outgoing area: converted PDFs waiting for download
    pub outgoing_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CleanupConfig {
    pub grace_period: Duration,
    /// Run every pending deletion immediately on graceful shutdown
    pub flush_on_shutdown: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WebConfig {
    pub index_template: PathBuf,
    pub static_dir: PathBuf,
}

/// Errors raised while reading configuration from the environment
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },
}

impl Default for Config {
    fn default() -> Self {
        Config {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
                max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
            },
            storage: StorageConfig {
                incoming_dir: PathBuf::from("./uploads"),
                outgoing_dir: PathBuf::from("./converted"),
            },
            cleanup: CleanupConfig {
                grace_period: DEFAULT_GRACE_PERIOD,
                flush_on_shutdown: true,
            },
            web: WebConfig {
                index_template: PathBuf::from("templates/index.html"),
                static_dir: PathBuf::from("static"),
            },
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Config::default();

        Ok(Config {
            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or(defaults.server.host),
                port: parse_var("SERVER_PORT")?.unwrap_or(defaults.server.port),
                max_upload_bytes: parse_var("MAX_UPLOAD_BYTES")?
                    .unwrap_or(defaults.server.max_upload_bytes),
            },
            storage: StorageConfig {
                incoming_dir: env::var("UPLOAD_DIR")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.storage.incoming_dir),
                outgoing_dir: env::var("CONVERTED_DIR")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.storage.outgoing_dir),
            },
            cleanup: CleanupConfig {
                grace_period: parse_var::<u64>("CLEANUP_DELAY_MS")?
                    .map(Duration::from_millis)
                    .unwrap_or(defaults.cleanup.grace_period),
                flush_on_shutdown: parse_var("CLEANUP_FLUSH_ON_SHUTDOWN")?
                    .unwrap_or(defaults.cleanup.flush_on_shutdown),
            },
            web: WebConfig {
                index_template: env::var("INDEX_TEMPLATE")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.web.index_template),
                static_dir: env::var("STATIC_DIR")
                    .map(PathBuf::from)
                    .unwrap_or(defaults.web.static_dir),
            },
        })
    }

    /// Socket address string for the listener
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

/// Parse an optional environment variable, failing on malformed values
fn parse_var<T: std::str::FromStr>(key: &'static str) -> Result<Option<T>, ConfigError> {
    match env::var(key) {
        Ok(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue { key, value }),
        Err(_) => Ok(None),
    }
}
