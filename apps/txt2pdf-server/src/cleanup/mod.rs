//! Delayed artifact cleanup
//!
//! Every uploaded source and every served PDF is deleted one grace window
//! after it was used. Deletions are tracked by the scheduler so they can be
//! listed, cancelled, or flushed on shutdown.

pub mod scheduler;
pub mod types;

pub use scheduler::CleanupScheduler;
pub use types::*;
