//! # Diagnostic notices published by the emitter.
//!
//! The [`NoticeKind`] enum classifies what happened inside an emitter:
//! - **Registry changes**: listeners added, removed, cleared; cap changed
//! - **Warnings**: a registration refused because the cap was reached
//! - **Failures**: a listener failed during dispatch, an observer panicked
//!
//! The [`Notice`] struct carries the metadata: timestamp, event key, counts.
//!
//! ## Ordering guarantees
//! Each notice has a globally unique sequence number (`seq`) that increases monotonically.
//!
//! ## Example
//! ```rust
//! use seqemit::{Notice, NoticeKind};
//!
//! let n = Notice::new(NoticeKind::MaxListenersExceeded)
//!     .with_event("tick")
//!     .with_count(10)
//!     .with_max(10);
//!
//! assert_eq!(n.kind, NoticeKind::MaxListenersExceeded);
//! assert_eq!(n.event.as_deref(), Some("tick"));
//! assert_eq!(n.max, Some(10));
//! ```

use std::sync::atomic::{AtomicU64, Ordering as AtomicOrdering};
use std::sync::Arc;
use std::time::SystemTime;

use crate::listeners::Mode;

/// Global sequence counter for notice ordering.
static NOTICE_SEQ: AtomicU64 = AtomicU64::new(0);

/// Classification of emitter notices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    // === Registry changes ===
    /// A listener was accepted.
    ///
    /// Sets:
    /// - `event`: event key
    /// - `listener`: listener name
    /// - `mode`: always / once
    /// - `count`: sequence length after insertion
    ListenerAdded,

    /// One `remove_listener` call dropped at least one entry.
    ///
    /// Sets:
    /// - `event`: event key
    /// - `listener`: listener name
    /// - `removed`: number of entries dropped
    /// - `count`: sequence length after removal
    ListenerRemoved,

    /// All listeners of one event were dropped and the key forgotten.
    ///
    /// Sets:
    /// - `event`: event key
    /// - `removed`: number of entries dropped
    ListenersCleared,

    /// The per-event cap was changed.
    ///
    /// Sets:
    /// - `max`: new cap
    MaxListenersChanged,

    // === Warnings ===
    /// A registration was refused because the cap was reached.
    ///
    /// Sets:
    /// - `event`: event key
    /// - `listener`: listener name
    /// - `count`: current sequence length
    /// - `max`: cap in force
    MaxListenersExceeded,

    // === Failures ===
    /// A listener returned an error; the dispatch stopped.
    ///
    /// Sets:
    /// - `event`: event key
    /// - `listener`: listener name
    /// - `index`: position of the failing entry
    /// - `reason`: error message
    ListenerFailed,

    /// An observer panicked while handling a notice.
    ///
    /// Sets:
    /// - `listener`: observer name
    /// - `reason`: panic message
    ObserverPanicked,
}

impl NoticeKind {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            NoticeKind::ListenerAdded => "listener_added",
            NoticeKind::ListenerRemoved => "listener_removed",
            NoticeKind::ListenersCleared => "listeners_cleared",
            NoticeKind::MaxListenersChanged => "max_listeners_changed",
            NoticeKind::MaxListenersExceeded => "max_listeners_exceeded",
            NoticeKind::ListenerFailed => "listener_failed",
            NoticeKind::ObserverPanicked => "observer_panicked",
        }
    }

    /// `true` for kinds an operator should look at.
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            NoticeKind::MaxListenersExceeded
                | NoticeKind::ListenerFailed
                | NoticeKind::ObserverPanicked
        )
    }
}

/// Emitter notice with optional metadata.
///
/// - `seq`: monotonic global sequence for ordering
/// - `at`: wall-clock timestamp (for logs)
/// - other optional fields are set depending on the [`NoticeKind`]
#[derive(Debug, Clone)]
pub struct Notice {
    /// Globally unique, monotonically increasing sequence number.
    pub seq: u64,
    /// Wall-clock timestamp.
    pub at: SystemTime,
    /// Notice classification.
    pub kind: NoticeKind,

    /// Display form of the event key, if applicable.
    pub event: Option<Arc<str>>,
    /// Listener (or observer) name, if applicable.
    pub listener: Option<Arc<str>>,
    /// Mode of the listener involved.
    pub mode: Option<Mode>,
    /// Sequence length relevant to the notice.
    pub count: Option<usize>,
    /// Number of entries removed.
    pub removed: Option<usize>,
    /// Position in the sequence.
    pub index: Option<usize>,
    /// Cap relevant to the notice.
    pub max: Option<i64>,
    /// Human-readable reason (errors, panic messages).
    pub reason: Option<Arc<str>>,
}

impl Notice {
    /// Creates a new notice of the given kind with current timestamp and next sequence number.
    pub fn new(kind: NoticeKind) -> Self {
        Self {
            seq: NOTICE_SEQ.fetch_add(1, AtomicOrdering::Relaxed),
            at: SystemTime::now(),
            kind,
            event: None,
            listener: None,
            mode: None,
            count: None,
            removed: None,
            index: None,
            max: None,
            reason: None,
        }
    }

    /// Attaches the event key.
    #[inline]
    pub fn with_event(mut self, event: impl Into<Arc<str>>) -> Self {
        self.event = Some(event.into());
        self
    }

    /// Attaches a listener or observer name.
    #[inline]
    pub fn with_listener(mut self, name: impl Into<Arc<str>>) -> Self {
        self.listener = Some(name.into());
        self
    }

    /// Attaches a listener mode.
    #[inline]
    pub fn with_mode(mut self, mode: Mode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Attaches a sequence length.
    #[inline]
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = Some(count);
        self
    }

    /// Attaches a removal count.
    #[inline]
    pub fn with_removed(mut self, removed: usize) -> Self {
        self.removed = Some(removed);
        self
    }

    /// Attaches a sequence position.
    #[inline]
    pub fn with_index(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }

    /// Attaches a cap.
    #[inline]
    pub fn with_max(mut self, max: i64) -> Self {
        self.max = Some(max);
        self
    }

    /// Attaches a human-readable reason.
    #[inline]
    pub fn with_reason(mut self, reason: impl Into<Arc<str>>) -> Self {
        self.reason = Some(reason.into());
        self
    }

    /// Creates an observer panic notice.
    #[inline]
    pub fn observer_panicked(observer: &'static str, info: String) -> Self {
        Notice::new(NoticeKind::ObserverPanicked)
            .with_listener(observer)
            .with_reason(info)
    }

    /// `true` for a notice reporting an observer panic.
    #[inline]
    pub fn is_observer_panic(&self) -> bool {
        matches!(self.kind, NoticeKind::ObserverPanicked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seq_is_monotonic() {
        let a = Notice::new(NoticeKind::ListenerAdded);
        let b = Notice::new(NoticeKind::ListenerAdded);
        assert!(b.seq > a.seq);
    }

    #[test]
    fn test_warning_kinds() {
        assert!(NoticeKind::MaxListenersExceeded.is_warning());
        assert!(NoticeKind::ListenerFailed.is_warning());
        assert!(!NoticeKind::ListenerAdded.is_warning());
        assert!(!NoticeKind::MaxListenersChanged.is_warning());
    }

    #[test]
    fn test_observer_panicked_sets_name_and_reason() {
        let n = Notice::observer_panicked("audit", "boom".to_string());
        assert!(n.is_observer_panic());
        assert_eq!(n.listener.as_deref(), Some("audit"));
        assert_eq!(n.reason.as_deref(), Some("boom"));
    }
}
