//! # Core observer trait
//!
//! `Observe` is the extension point for plugging diagnostics into an emitter.
//! Every [`Notice`] the emitter produces is handed to each observer, in
//! registration order, on the thread that caused it.
//!
//! ## Contract
//! - Calls are synchronous and inline: keep `on_notice` short (record, forward
//!   to a channel, log). The emitter owns no background tasks to offload to.
//! - A panicking observer is isolated; see [`ObserverSet`](crate::ObserverSet).
//!
//! ## Example
//! ```rust
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use seqemit::{Notice, NoticeKind, Observe};
//!
//! #[derive(Default)]
//! struct CapacityAlarm(AtomicUsize);
//!
//! impl Observe for CapacityAlarm {
//!     fn on_notice(&self, notice: &Notice) {
//!         if notice.kind == NoticeKind::MaxListenersExceeded {
//!             self.0.fetch_add(1, Ordering::Relaxed);
//!         }
//!     }
//!     fn name(&self) -> &'static str { "capacity-alarm" }
//! }
//! ```

use crate::notices::Notice;

/// Contract for notice observers.
pub trait Observe: Send + Sync + 'static {
    /// Handle a single notice.
    fn on_notice(&self, notice: &Notice);

    /// Human-readable name (for logs).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}
