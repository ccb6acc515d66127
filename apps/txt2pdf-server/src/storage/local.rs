//! Local filesystem areas

use std::path::{Path, PathBuf};

use crate::config::StorageConfig;

use super::types::{validate_file_name, Area, StorageError};

/// The incoming and outgoing directories
///
/// No locking: concurrent writers to the same name overwrite each other.
#[derive(Debug, Clone)]
pub struct StorageAreas {
    incoming: PathBuf,
    outgoing: PathBuf,
}

impl StorageAreas {
    pub fn new(incoming: impl Into<PathBuf>, outgoing: impl Into<PathBuf>) -> Self {
        Self {
            incoming: incoming.into(),
            outgoing: outgoing.into(),
        }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(&config.incoming_dir, &config.outgoing_dir)
    }

    /// Create both directories if they do not exist yet
    pub async fn prepare(&self) -> Result<(), StorageError> {
        for dir in [&self.incoming, &self.outgoing] {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|e| io_error(dir, e))?;
        }

        tracing::info!(
            incoming = ?self.incoming,
            outgoing = ?self.outgoing,
            "Storage areas ready"
        );
        Ok(())
    }

    /// Directory backing an area
    pub fn dir(&self, area: Area) -> &Path {
        match area {
            Area::Incoming => &self.incoming,
            Area::Outgoing => &self.outgoing,
        }
    }

    /// Resolve a file name inside an area
    pub fn path_for(&self, area: Area, name: &str) -> Result<PathBuf, StorageError> {
        Ok(self.dir(area).join(validate_file_name(name)?))
    }

    /// Write bytes verbatim, replacing any existing file of the same name
    pub async fn write(&self, area: Area, name: &str, data: &[u8]) -> Result<PathBuf, StorageError> {
        let path = self.path_for(area, name)?;
        tokio::fs::write(&path, data)
            .await
            .map_err(|e| io_error(&path, e))?;

        tracing::debug!(area = %area, path = ?path, size = data.len(), "Stored artifact");
        Ok(path)
    }

    /// Read an artifact's full content
    pub async fn read(&self, area: Area, name: &str) -> Result<Vec<u8>, StorageError> {
        let path = self.path_for(area, name)?;
        tokio::fs::read(&path).await.map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => StorageError::NotFound(name.to_string()),
            _ => io_error(&path, e),
        })
    }
}

fn io_error(path: &Path, source: std::io::Error) -> StorageError {
    StorageError::Io {
        path: path.display().to_string(),
        source,
    }
}
