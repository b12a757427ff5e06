//! Transient copy-confirmation state.
//!
//! After a caller copies one of a result's renditions, UIs typically flash a
//! short-lived "copied" confirmation on the control that triggered it.
//! [`CopyFeedback`] tracks those flashes as a deadline map keyed by
//! [`CopySource`]: triggering a key stamps a deadline [`FEEDBACK_TTL`] in the
//! future, re-triggering the same key replaces its deadline, and distinct
//! keys never clear each other.
//!
//! No timers or threads are involved. The caller asks [`is_active`] whenever
//! it redraws and may call [`sweep`] to drop expired entries.
//!
//! ## Examples
//!
//! ```rust
//! use jsonsift::{CopyFeedback, CopySource};
//!
//! let mut feedback = CopyFeedback::new();
//! feedback.trigger(CopySource::Formatted);
//!
//! assert!(feedback.is_active(&CopySource::Formatted));
//! assert!(!feedback.is_active(&CopySource::Minified));
//! ```
//!
//! [`is_active`]: CopyFeedback::is_active
//! [`sweep`]: CopyFeedback::sweep

use std::collections::HashMap;
use std::time::{Duration, Instant};

use crate::CopySource;

/// How long a copy confirmation stays active.
pub const FEEDBACK_TTL: Duration = Duration::from_millis(1200);

/// Registry of in-flight copy confirmations.
///
/// Each entry maps a copy target to the instant its confirmation expires.
#[derive(Debug, Clone, Default)]
pub struct CopyFeedback {
    deadlines: HashMap<CopySource, Instant>,
}

impl CopyFeedback {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        CopyFeedback {
            deadlines: HashMap::new(),
        }
    }

    /// Marks a copy target as just copied.
    ///
    /// The confirmation stays active for [`FEEDBACK_TTL`]. Triggering a key
    /// that is already active restarts its window.
    pub fn trigger(&mut self, source: CopySource) {
        self.trigger_at(source, Instant::now());
    }

    /// Like [`trigger`](Self::trigger), with an explicit clock reading.
    pub fn trigger_at(&mut self, source: CopySource, now: Instant) {
        self.deadlines.insert(source, now + FEEDBACK_TTL);
    }

    /// Returns whether a copy target's confirmation is still active.
    #[must_use]
    pub fn is_active(&self, source: &CopySource) -> bool {
        self.is_active_at(source, Instant::now())
    }

    /// Like [`is_active`](Self::is_active), with an explicit clock reading.
    #[must_use]
    pub fn is_active_at(&self, source: &CopySource, now: Instant) -> bool {
        self.deadlines
            .get(source)
            .is_some_and(|deadline| now < *deadline)
    }

    /// Drops every expired entry.
    pub fn sweep(&mut self) {
        self.sweep_at(Instant::now());
    }

    /// Like [`sweep`](Self::sweep), with an explicit clock reading.
    pub fn sweep_at(&mut self, now: Instant) {
        self.deadlines.retain(|_, deadline| now < *deadline);
    }

    /// Number of tracked entries, expired or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.deadlines.len()
    }

    /// Returns `true` if no entries are tracked.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.deadlines.is_empty()
    }
}
