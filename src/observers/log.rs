//! # LogWriter: notice logger
//!
//! A minimal observer that forwards every [`Notice`] to `tracing`.
//! Warnings go out at `WARN`, registry changes at `DEBUG`. The crate never
//! installs a subscriber; wire one up in the application (e.g. `tracing-subscriber`).
//!
//! ## Example output (fmt subscriber)
//! ```text
//! DEBUG seqemit: listener added event="tick" listener="audit" mode="always" count=1
//! WARN  seqemit: max listeners exceeded event="tick" listener="audit" count=10 max=10
//! WARN  seqemit: listener failed event="tick" listener="audit" index=0 reason="boom"
//! DEBUG seqemit: listeners cleared event="tick" removed=3
//! ```

use crate::notices::{Notice, NoticeKind};
use crate::observers::Observe;

/// Notice writer observer.
#[derive(Default)]
pub struct LogWriter;

impl LogWriter {
    /// Construct a new [`LogWriter`].
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Observe for LogWriter {
    fn on_notice(&self, n: &Notice) {
        let event = n.event.as_deref().unwrap_or("-");
        let listener = n.listener.as_deref().unwrap_or("-");
        match n.kind {
            NoticeKind::ListenerAdded => {
                tracing::debug!(
                    target: "seqemit",
                    event,
                    listener,
                    mode = n.mode.map(|m| m.as_label()),
                    count = n.count,
                    "listener added"
                );
            }
            NoticeKind::ListenerRemoved => {
                tracing::debug!(
                    target: "seqemit",
                    event,
                    listener,
                    removed = n.removed,
                    count = n.count,
                    "listener removed"
                );
            }
            NoticeKind::ListenersCleared => {
                tracing::debug!(target: "seqemit", event, removed = n.removed, "listeners cleared");
            }
            NoticeKind::MaxListenersChanged => {
                tracing::debug!(target: "seqemit", max = n.max, "max listeners changed");
            }
            NoticeKind::MaxListenersExceeded => {
                tracing::warn!(
                    target: "seqemit",
                    event,
                    listener,
                    count = n.count,
                    max = n.max,
                    "max listeners exceeded"
                );
            }
            NoticeKind::ListenerFailed => {
                tracing::warn!(
                    target: "seqemit",
                    event,
                    listener,
                    index = n.index,
                    reason = n.reason.as_deref(),
                    "listener failed"
                );
            }
            NoticeKind::ObserverPanicked => {
                tracing::warn!(
                    target: "seqemit",
                    observer = listener,
                    reason = n.reason.as_deref(),
                    "observer panicked"
                );
            }
        }
    }

    fn name(&self) -> &'static str {
        "LogWriter"
    }
}
