//! Cleanup Scheduler
//!
//! Each scheduled deletion is a tokio task that sleeps for the grace window
//! and then removes one file. The scheduler keeps a handle to every task
//! until it finishes. Deletion failures are logged and never surfaced.

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use parking_lot::Mutex;
use tokio::task::AbortHandle;
use uuid::Uuid;

use super::types::{CleanupReason, CleanupStats, PendingDeletion};

// ============================================================================
// Scheduler
// ============================================================================

/// Schedules delayed deletion of artifacts
#[derive(Clone)]
pub struct CleanupScheduler {
    inner: Arc<SchedulerInner>,
}

struct SchedulerInner {
    /// Delay between scheduling and deleting
    grace_period: Duration,

    /// Deletions not yet run, indexed by id
    pending: Mutex<HashMap<Uuid, PendingEntry>>,

    scheduled: AtomicU64,
    completed: AtomicU64,
    cancelled: AtomicU64,
}

struct PendingEntry {
    deletion: PendingDeletion,
    abort: AbortHandle,
}

impl CleanupScheduler {
    /// Create a scheduler with the given grace window
    pub fn new(grace_period: Duration) -> Self {
        Self {
            inner: Arc::new(SchedulerInner {
                grace_period,
                pending: Mutex::new(HashMap::new()),
                scheduled: AtomicU64::new(0),
                completed: AtomicU64::new(0),
                cancelled: AtomicU64::new(0),
            }),
        }
    }

    // ========================================================================
    // Scheduling
    // ========================================================================

    /// Delete `path` once the grace window has elapsed
    ///
    /// Must be called from within a tokio runtime.
    pub fn schedule(&self, path: PathBuf, reason: CleanupReason) -> PendingDeletion {
        self.schedule_after(path, reason, self.inner.grace_period)
    }

    /// Delete `path` after an explicit delay
    pub fn schedule_after(
        &self,
        path: PathBuf,
        reason: CleanupReason,
        delay: Duration,
    ) -> PendingDeletion {
        let id = Uuid::new_v4();
        let scheduled_at = Utc::now();
        let due_at = scheduled_at
            + chrono::Duration::from_std(delay).unwrap_or_else(|_| chrono::Duration::zero());

        let deletion = PendingDeletion {
            id,
            path: path.clone(),
            reason,
            scheduled_at,
            due_at,
        };

        // Hold the lock across spawn so the task cannot finish before it is registered
        let mut pending = self.inner.pending.lock();

        let inner = Arc::clone(&self.inner);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            remove_artifact(&path, reason).await;

            if inner.pending.lock().remove(&id).is_some() {
                inner.completed.fetch_add(1, Ordering::Relaxed);
            }
        });

        pending.insert(
            id,
            PendingEntry {
                deletion: deletion.clone(),
                abort: handle.abort_handle(),
            },
        );
        self.inner.scheduled.fetch_add(1, Ordering::Relaxed);

        tracing::debug!(
            id = %id,
            path = ?deletion.path,
            reason = ?reason,
            delay_ms = delay.as_millis() as u64,
            "Scheduled artifact deletion"
        );

        deletion
    }

    /// Cancel a pending deletion; the file is left in place
    ///
    /// Returns false if the deletion already ran or was never scheduled.
    pub fn cancel(&self, id: Uuid) -> bool {
        let entry = self.inner.pending.lock().remove(&id);

        match entry {
            Some(entry) => {
                entry.abort.abort();
                self.inner.cancelled.fetch_add(1, Ordering::Relaxed);
                tracing::debug!(id = %id, path = ?entry.deletion.path, "Cancelled artifact deletion");
                true
            }
            None => false,
        }
    }

    /// Run every pending deletion now instead of waiting
    ///
    /// Returns the number of deletions performed.
    pub async fn flush(&self) -> usize {
        let drained: Vec<PendingEntry> = {
            let mut pending = self.inner.pending.lock();
            pending.drain().map(|(_, entry)| entry).collect()
        };

        let count = drained.len();
        for entry in drained {
            entry.abort.abort();
            remove_artifact(&entry.deletion.path, entry.deletion.reason).await;
        }
        self.inner.completed.fetch_add(count as u64, Ordering::Relaxed);

        if count > 0 {
            tracing::info!(count = count, "Flushed pending artifact deletions");
        }
        count
    }

    // ========================================================================
    // Query Methods
    // ========================================================================

    /// Snapshot of pending deletions, earliest first
    pub fn pending(&self) -> Vec<PendingDeletion> {
        let mut pending: Vec<PendingDeletion> = self
            .inner
            .pending
            .lock()
            .values()
            .map(|entry| entry.deletion.clone())
            .collect();
        pending.sort_by_key(|d| d.due_at);
        pending
    }

    pub fn pending_count(&self) -> usize {
        self.inner.pending.lock().len()
    }

    /// Pending deletions targeting a given path
    pub fn pending_for(&self, path: &Path) -> Vec<PendingDeletion> {
        self.pending()
            .into_iter()
            .filter(|d| d.path == path)
            .collect()
    }

    pub fn stats(&self) -> CleanupStats {
        CleanupStats {
            scheduled: self.inner.scheduled.load(Ordering::Relaxed),
            completed: self.inner.completed.load(Ordering::Relaxed),
            cancelled: self.inner.cancelled.load(Ordering::Relaxed),
            pending: self.pending_count(),
        }
    }
}

/// Remove one artifact, logging instead of failing
async fn remove_artifact(path: &Path, reason: CleanupReason) {
    match tokio::fs::remove_file(path).await {
        Ok(()) => {
            tracing::info!(path = ?path, reason = ?reason, "Deleted artifact");
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!(path = ?path, "Artifact already gone");
        }
        Err(e) => {
            tracing::warn!(path = ?path, error = %e, "Failed to delete artifact");
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
