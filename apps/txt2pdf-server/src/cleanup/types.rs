//! Cleanup types

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

/// Why an artifact was scheduled for deletion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CleanupReason {
    /// Source file converted; the incoming copy is no longer needed
    Converted,
    /// PDF handed to a downloader
    Downloaded,
}

/// A deletion waiting for its grace window to elapse
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PendingDeletion {
    pub id: Uuid,
    pub path: PathBuf,
    pub reason: CleanupReason,
    pub scheduled_at: DateTime<Utc>,
    pub due_at: DateTime<Utc>,
}

/// Counters over the scheduler's lifetime
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CleanupStats {
    pub scheduled: u64,
    pub completed: u64,
    pub cancelled: u64,
    pub pending: usize,
}
