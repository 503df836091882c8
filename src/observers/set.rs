//! # ObserverSet: inline fan-out over multiple observers
//!
//! [`ObserverSet`] hands each [`Notice`] to every observer in order.
//!
//! ## Rules
//! - **Ordered**: observers see notices in registration order, one after another.
//! - **Isolation**: a panicking observer doesn't affect the others or the emitter.
//!
//! ## Panic handling
//! Each call is wrapped in `catch_unwind`:
//! - Panic is caught and converted to an `ObserverPanicked` notice for all observers
//! - A panic while handling `ObserverPanicked` is logged only (no re-publish loop)
//!
//! **Warning**: `AssertUnwindSafe` is used, which can leave shared state inconsistent
//! if an observer panics while holding a lock.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use crate::notices::Notice;
use crate::observers::Observe;

/// Ordered collection of observers attached to one emitter.
#[derive(Clone, Default)]
pub struct ObserverSet {
    observers: Vec<Arc<dyn Observe>>,
}

impl ObserverSet {
    /// Creates a set from the given observers.
    #[must_use]
    pub fn new(observers: Vec<Arc<dyn Observe>>) -> Self {
        Self { observers }
    }

    /// Number of observers.
    pub fn len(&self) -> usize {
        self.observers.len()
    }

    /// Returns true if there is nobody to notify.
    pub fn is_empty(&self) -> bool {
        self.observers.is_empty()
    }

    /// Names of the observers, in delivery order.
    pub fn names(&self) -> Vec<&'static str> {
        self.observers.iter().map(|o| o.name()).collect()
    }

    /// Delivers `notice` to every observer.
    pub fn notify(&self, notice: &Notice) {
        for obs in &self.observers {
            let delivered = panic::catch_unwind(AssertUnwindSafe(|| obs.on_notice(notice)));
            if let Err(panic_err) = delivered {
                let info = panic_message(panic_err.as_ref());
                tracing::warn!(
                    observer = obs.name(),
                    notice = notice.kind.as_label(),
                    info = %info,
                    "observer panicked"
                );
                if !notice.is_observer_panic() {
                    self.notify(&Notice::observer_panicked(obs.name(), info));
                }
            }
        }
    }
}

impl std::fmt::Debug for ObserverSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}

fn panic_message(any: &(dyn std::any::Any + Send)) -> String {
    if let Some(msg) = any.downcast_ref::<&'static str>() {
        (*msg).to_string()
    } else if let Some(msg) = any.downcast_ref::<String>() {
        msg.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notices::NoticeKind;
    use parking_lot::Mutex;

    #[derive(Default)]
    struct Recorder(Mutex<Vec<NoticeKind>>);

    impl Observe for Recorder {
        fn on_notice(&self, notice: &Notice) {
            self.0.lock().push(notice.kind);
        }
        fn name(&self) -> &'static str {
            "recorder"
        }
    }

    struct Exploder;

    impl Observe for Exploder {
        fn on_notice(&self, notice: &Notice) {
            if notice.kind == NoticeKind::ListenerAdded {
                panic!("exploded");
            }
        }
        fn name(&self) -> &'static str {
            "exploder"
        }
    }

    #[test]
    fn test_delivers_in_order_to_all() {
        let a = Arc::new(Recorder::default());
        let b = Arc::new(Recorder::default());
        let set = ObserverSet::new(vec![a.clone(), b.clone()]);

        set.notify(&Notice::new(NoticeKind::ListenerAdded));
        set.notify(&Notice::new(NoticeKind::ListenersCleared));

        let expected = vec![NoticeKind::ListenerAdded, NoticeKind::ListenersCleared];
        assert_eq!(*a.0.lock(), expected);
        assert_eq!(*b.0.lock(), expected);
        assert_eq!(set.names(), vec!["recorder", "recorder"]);
    }

    #[test]
    fn test_panicking_observer_is_isolated() {
        let rec = Arc::new(Recorder::default());
        let set = ObserverSet::new(vec![Arc::new(Exploder), rec.clone()]);

        set.notify(&Notice::new(NoticeKind::ListenerAdded));

        // The panic notice reaches the recorder before the original notice does.
        assert_eq!(
            *rec.0.lock(),
            vec![NoticeKind::ObserverPanicked, NoticeKind::ListenerAdded]
        );
    }

    #[test]
    fn test_empty_set_is_noop() {
        let set = ObserverSet::default();
        assert!(set.is_empty());
        set.notify(&Notice::new(NoticeKind::ListenerAdded));
    }
}
