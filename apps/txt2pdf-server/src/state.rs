//! Application state management

use std::sync::Arc;

use crate::cleanup::CleanupScheduler;
use crate::config::Config;
use crate::pdf::{Converter, TextPdfConverter};
use crate::storage::StorageAreas;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: Config,
    storage: StorageAreas,
    converter: Arc<dyn Converter>,
    cleanup: CleanupScheduler,
}

impl AppState {
    /// Create application state with the default text renderer
    pub fn new(config: Config) -> Self {
        Self::with_converter(config, Arc::new(TextPdfConverter::default()))
    }

    /// Create application state with a specific converter
    pub fn with_converter(config: Config, converter: Arc<dyn Converter>) -> Self {
        let storage = StorageAreas::from_config(&config.storage);
        let cleanup = CleanupScheduler::new(config.cleanup.grace_period);

        Self {
            inner: Arc::new(AppStateInner {
                config,
                storage,
                converter,
                cleanup,
            }),
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }

    /// Get the storage areas
    pub fn storage(&self) -> &StorageAreas {
        &self.inner.storage
    }

    /// Get a handle to the converter
    pub fn converter(&self) -> Arc<dyn Converter> {
        Arc::clone(&self.inner.converter)
    }

    /// Get the cleanup scheduler
    pub fn cleanup(&self) -> &CleanupScheduler {
        &self.inner.cleanup
    }

    /// Flush or abandon pending deletions before exit
    pub async fn shutdown(&self) {
        tracing::info!("Shutting down application state...");

        if self.inner.config.cleanup.flush_on_shutdown {
            self.inner.cleanup.flush().await;
        } else {
            let pending = self.inner.cleanup.pending_count();
            if pending > 0 {
                tracing::warn!(pending = pending, "Leaving artifacts with pending deletions on disk");
            }
        }
    }
}
