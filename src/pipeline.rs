//! Debounced re-parse scheduling
//!
//! Text-change notifications arrive per keystroke; recomputing folds and
//! symbols on every one would be wasted work. The scheduler coalesces rapid
//! edits into a single re-parse after a quiet period and tags each request
//! with the document revision it was armed for, so results computed against
//! an older buffer are discarded. Structural edit operations never go through
//! here - they parse synchronously at invocation.

use std::time::{Duration, Instant};

use crate::config::OrgConfig;

/// Default quiet period before a pending re-parse fires.
pub const REPARSE_DEBOUNCE_MS: u64 = 200;

#[derive(Debug, Clone, Copy)]
struct Pending {
    revision: u64,
    due: Instant,
}

/// Coalesces text-change notifications into debounced re-parse requests.
#[derive(Debug)]
pub struct ReparseScheduler {
    debounce: Duration,
    pending: Option<Pending>,
}

impl ReparseScheduler {
    pub fn new(debounce: Duration) -> Self {
        Self {
            debounce,
            pending: None,
        }
    }

    /// Scheduler honoring the configured debounce window
    pub fn from_config(config: &OrgConfig) -> Self {
        Self::new(Duration::from_millis(config.reparse_debounce_ms))
    }

    /// Record a text change at `revision`. Re-arms the deadline, so a burst
    /// of edits produces a single re-parse after the last one.
    pub fn note_edit(&mut self, revision: u64, now: Instant) {
        self.pending = Some(Pending {
            revision,
            due: now + self.debounce,
        });
    }

    /// Fire the pending re-parse if its quiet period has elapsed. Returns the
    /// revision the request was armed for; the caller compares it against the
    /// document's current revision and drops stale results.
    pub fn poll(&mut self, now: Instant) -> Option<u64> {
        let pending = self.pending?;
        if now < pending.due {
            return None;
        }
        self.pending = None;
        Some(pending.revision)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Whether a fired request is still current for the document.
    pub fn is_current(fired_revision: u64, doc_revision: u64) -> bool {
        if fired_revision != doc_revision {
            tracing::debug!(
                "skipping stale re-parse: doc revision {} != request revision {}",
                doc_revision,
                fired_revision
            );
            return false;
        }
        true
    }
}

impl Default for ReparseScheduler {
    fn default() -> Self {
        Self::new(Duration::from_millis(REPARSE_DEBOUNCE_MS))
    }
}
