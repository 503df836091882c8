//! # EventEmitter: ordered registration and sequential async dispatch.
//!
//! The [`EventEmitter`] owns a registry of per-event listener sequences, the
//! per-event cap from [`EmitterConfig`], and an [`ObserverSet`] for diagnostics.
//! It is a cheap, cloneable handle: clones share the same registry, which is how
//! a listener reaches back into the emitter that is dispatching it.
//!
//! ## Dispatch
//! ```text
//! emit(key, args)
//!   ├─ seq = registry[key]            (absent → Ok(()) immediately)
//!   └─ i = 0
//!      loop {
//!        ├─ entry = seq[i]            (lock held only for the read)
//!        │     └─ None → Ok(())
//!        ├─ entry.invoke(args).await  (once-entries already spent → Ok)
//!        │     └─ Err(e) → ListenerFailed notice, return Err(e)
//!        └─ i += 1
//!      }
//! ```
//!
//! ## Rules
//! - **Sequential**: one listener at a time, in sequence order; each is awaited.
//! - **No snapshot**: the sequence is re-read at every step. A listener that adds
//!   entries will see them run in the same dispatch; one that removes entries
//!   shifts later ones down (the entry right after a removed position is skipped).
//! - **Detached sequences**: `remove_all_listeners` during a dispatch forgets the
//!   key, but the running dispatch finishes over the sequence it started with.
//! - **Fail fast**: the first listener error stops the dispatch and is returned unchanged.
//! - **Cap before insert**: `len + 1 > max` refuses the registration; lowering the cap
//!   never evicts.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use seqemit::{EventEmitter, ListenerError, ListenerFn, ListenerRef};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let emitter: EventEmitter<String> = EventEmitter::new();
//!
//!     let greet: ListenerRef<String> = ListenerFn::arc("greet", |name: Arc<String>| async move {
//!         println!("hello, {name}");
//!         Ok::<_, ListenerError>(())
//!     });
//!
//!     emitter.on("join", greet.clone())?.once("join", greet.clone())?;
//!     assert_eq!(emitter.listener_count("join"), 2);
//!
//!     emitter.emit("join", "ada".to_string()).await?;   // runs twice
//!     emitter.emit("join", "grace".to_string()).await?; // runs once
//!
//!     emitter.off("join", &greet);
//!     assert_eq!(emitter.listener_count("join"), 0);
//!     Ok(())
//! }
//! ```

use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::{EmitterConfig, MaxListeners};
use crate::core::builder::EmitterBuilder;
use crate::core::key::EventName;
use crate::core::registry::{Registry, Sequence};
use crate::error::{EmitterError, ListenerError};
use crate::listeners::{same_listener, ListenerEntry, ListenerRef, Mode};
use crate::notices::{Notice, NoticeKind};
use crate::observers::ObserverSet;

/// Where a new entry goes in its sequence.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Position {
    Back,
    Front,
}

/// Mutable part of the emitter, behind one lock.
struct State<A>
where
    A: Send + Sync + 'static,
{
    registry: Registry<A>,
    config: EmitterConfig,
}

struct Shared<A>
where
    A: Send + Sync + 'static,
{
    state: Mutex<State<A>>,
    observers: ObserverSet,
}

/// In-process event emitter with ordered, sequentially awaited listeners.
///
/// `A` is the argument value handed to listeners; use a tuple or a struct to
/// pass several values. All methods take `&self`.
pub struct EventEmitter<A>
where
    A: Send + Sync + 'static,
{
    shared: Arc<Shared<A>>,
}

impl<A> Clone for EventEmitter<A>
where
    A: Send + Sync + 'static,
{
    fn clone(&self) -> Self {
        Self {
            shared: Arc::clone(&self.shared),
        }
    }
}

impl<A> Default for EventEmitter<A>
where
    A: Send + Sync + 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<A> std::fmt::Debug for EventEmitter<A>
where
    A: Send + Sync + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.shared.state.lock();
        f.debug_struct("EventEmitter")
            .field("events", &state.registry.names())
            .field("max_listeners", &state.config.max_listeners)
            .field("observers", &self.shared.observers)
            .finish()
    }
}

impl<A> EventEmitter<A>
where
    A: Send + Sync + 'static,
{
    /// Creates an emitter with the default configuration and no observers.
    pub fn new() -> Self {
        Self::from_parts(EmitterConfig::default(), ObserverSet::default())
    }

    /// Creates an emitter with the given configuration and no observers.
    pub fn with_config(config: EmitterConfig) -> Self {
        Self::from_parts(config, ObserverSet::default())
    }

    /// Returns a builder to attach observers.
    pub fn builder(config: EmitterConfig) -> EmitterBuilder<A> {
        EmitterBuilder::new(config)
    }

    pub(crate) fn from_parts(config: EmitterConfig, observers: ObserverSet) -> Self {
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(State {
                    registry: Registry::new(),
                    config,
                }),
                observers,
            }),
        }
    }

    // ---------------------------
    // Registration
    // ---------------------------

    /// Appends an always-listener to `key`'s sequence.
    ///
    /// # Errors
    /// [`EmitterError::CapacityExceeded`] if the sequence is already at the cap;
    /// nothing is registered in that case.
    pub fn add_listener(
        &self,
        key: impl Into<EventName>,
        listener: ListenerRef<A>,
    ) -> Result<&Self, EmitterError> {
        self.register(key.into(), listener, Mode::Always, Position::Back)
    }

    /// Alias of [`add_listener`](Self::add_listener).
    pub fn on(
        &self,
        key: impl Into<EventName>,
        listener: ListenerRef<A>,
    ) -> Result<&Self, EmitterError> {
        self.add_listener(key, listener)
    }

    /// Appends a fire-once listener to `key`'s sequence.
    ///
    /// # Errors
    /// [`EmitterError::CapacityExceeded`], as for [`add_listener`](Self::add_listener).
    pub fn once(
        &self,
        key: impl Into<EventName>,
        listener: ListenerRef<A>,
    ) -> Result<&Self, EmitterError> {
        self.register(key.into(), listener, Mode::Once, Position::Back)
    }

    /// Inserts an always-listener at the front of `key`'s sequence.
    ///
    /// # Errors
    /// [`EmitterError::CapacityExceeded`], as for [`add_listener`](Self::add_listener).
    pub fn prepend_listener(
        &self,
        key: impl Into<EventName>,
        listener: ListenerRef<A>,
    ) -> Result<&Self, EmitterError> {
        self.register(key.into(), listener, Mode::Always, Position::Front)
    }

    /// Inserts a fire-once listener at the front of `key`'s sequence.
    ///
    /// # Errors
    /// [`EmitterError::CapacityExceeded`], as for [`add_listener`](Self::add_listener).
    pub fn prepend_once_listener(
        &self,
        key: impl Into<EventName>,
        listener: ListenerRef<A>,
    ) -> Result<&Self, EmitterError> {
        self.register(key.into(), listener, Mode::Once, Position::Front)
    }

    fn register(
        &self,
        key: EventName,
        listener: ListenerRef<A>,
        mode: Mode,
        at: Position,
    ) -> Result<&Self, EmitterError> {
        let admitted = {
            let mut state = self.shared.state.lock();
            let len = state.registry.len_of(&key);
            if state.config.admits(len) {
                let seq = state.registry.get_or_create(&key);
                let mut entries = seq.lock();
                let entry = Arc::new(ListenerEntry::new(Arc::clone(&listener), mode));
                match at {
                    Position::Back => entries.push(entry),
                    Position::Front => entries.insert(0, entry),
                }
                Ok(entries.len())
            } else {
                Err((len, state.config.max_listeners))
            }
        };

        match admitted {
            Ok(count) => {
                tracing::debug!(
                    event = %key,
                    listener = listener.name(),
                    mode = mode.as_label(),
                    front = at == Position::Front,
                    count,
                    "listener added"
                );
                self.notify(|| {
                    Notice::new(NoticeKind::ListenerAdded)
                        .with_event(key.to_string())
                        .with_listener(listener.name())
                        .with_mode(mode)
                        .with_count(count)
                });
                Ok(self)
            }
            Err((count, max)) => {
                tracing::warn!(
                    event = %key,
                    listener = listener.name(),
                    count,
                    max,
                    "max listeners exceeded; registration refused"
                );
                self.notify(|| {
                    Notice::new(NoticeKind::MaxListenersExceeded)
                        .with_event(key.to_string())
                        .with_listener(listener.name())
                        .with_mode(mode)
                        .with_count(count)
                        .with_max(max)
                });
                Err(EmitterError::CapacityExceeded {
                    event: key.to_string(),
                    max,
                })
            }
        }
    }

    // ---------------------------
    // Removal
    // ---------------------------

    /// Removes every entry of `key` whose listener is `listener` (same allocation).
    ///
    /// Absent key or no match is a no-op. The key itself stays registered even if
    /// its sequence becomes empty.
    pub fn remove_listener(&self, key: impl Into<EventName>, listener: &ListenerRef<A>) -> &Self {
        let key = key.into();
        let Some(seq) = self.sequence(&key) else {
            return self;
        };

        let (removed, count) = {
            let mut entries = seq.lock();
            let before = entries.len();
            entries.retain(|e| !same_listener(e.listener(), listener));
            (before - entries.len(), entries.len())
        };

        if removed > 0 {
            tracing::debug!(
                event = %key,
                listener = listener.name(),
                removed,
                count,
                "listener removed"
            );
            self.notify(|| {
                Notice::new(NoticeKind::ListenerRemoved)
                    .with_event(key.to_string())
                    .with_listener(listener.name())
                    .with_removed(removed)
                    .with_count(count)
            });
        }
        self
    }

    /// Alias of [`remove_listener`](Self::remove_listener).
    pub fn off(&self, key: impl Into<EventName>, listener: &ListenerRef<A>) -> &Self {
        self.remove_listener(key, listener)
    }

    /// Forgets `key` together with all of its listeners.
    ///
    /// A dispatch already running on `key` completes over the detached sequence.
    pub fn remove_all_listeners(&self, key: impl Into<EventName>) -> &Self {
        let key = key.into();
        let detached = self.shared.state.lock().registry.remove(&key);
        let Some(seq) = detached else {
            return self;
        };

        let removed = seq.lock().len();
        tracing::debug!(event = %key, removed, "listeners cleared");
        self.notify(|| {
            Notice::new(NoticeKind::ListenersCleared)
                .with_event(key.to_string())
                .with_removed(removed)
        });
        self
    }

    // ---------------------------
    // Dispatch
    // ---------------------------

    /// Invokes `key`'s listeners one after another with `args`.
    ///
    /// Resolves `Ok(())` once every entry has run or been skipped (spent
    /// once-listeners). Returns immediately if `key` has no sequence.
    ///
    /// # Errors
    /// The first [`ListenerError`] returned by a listener, unchanged. Listeners
    /// after the failing one are not invoked.
    pub async fn emit(&self, key: impl Into<EventName>, args: A) -> Result<(), ListenerError> {
        self.emit_arc(key, Arc::new(args)).await
    }

    /// Same as [`emit`](Self::emit) for arguments that are already shared.
    pub async fn emit_arc(
        &self,
        key: impl Into<EventName>,
        args: Arc<A>,
    ) -> Result<(), ListenerError> {
        let key = key.into();
        let Some(seq) = self.sequence(&key) else {
            tracing::trace!(event = %key, "emit without listeners");
            return Ok(());
        };

        let mut index = 0;
        loop {
            let entry = seq.lock().get(index).cloned();
            let Some(entry) = entry else {
                break;
            };

            tracing::trace!(
                event = %key,
                index,
                listener = entry.name(),
                spent = entry.is_spent(),
                "invoking listener"
            );
            if let Err(err) = entry.invoke(Arc::clone(&args)).await {
                tracing::warn!(
                    event = %key,
                    index,
                    listener = entry.name(),
                    error = %err,
                    "listener failed; dispatch stopped"
                );
                self.notify(|| {
                    Notice::new(NoticeKind::ListenerFailed)
                        .with_event(key.to_string())
                        .with_listener(entry.name())
                        .with_mode(entry.mode())
                        .with_index(index)
                        .with_reason(err.as_message())
                });
                return Err(err);
            }
            index += 1;
        }

        tracing::trace!(event = %key, invoked = index, "emit complete");
        Ok(())
    }

    // ---------------------------
    // Introspection
    // ---------------------------

    /// Keys that currently have a sequence, in first-registration order.
    pub fn event_names(&self) -> Vec<EventName> {
        self.shared.state.lock().registry.names()
    }

    /// Number of entries registered under `key` (0 if absent).
    pub fn listener_count(&self, key: impl Into<EventName>) -> usize {
        self.shared.state.lock().registry.len_of(&key.into())
    }

    /// Entries registered under `key`, in dispatch order.
    pub fn listeners(&self, key: impl Into<EventName>) -> Vec<Arc<ListenerEntry<A>>> {
        self.sequence(&key.into())
            .map(|seq| seq.lock().clone())
            .unwrap_or_default()
    }

    /// Listeners registered under `key`, without their entry metadata.
    pub fn raw_listeners(&self, key: impl Into<EventName>) -> Vec<ListenerRef<A>> {
        self.sequence(&key.into())
            .map(|seq| {
                seq.lock()
                    .iter()
                    .map(|e| Arc::clone(e.listener()))
                    .collect()
            })
            .unwrap_or_default()
    }

    // ---------------------------
    // Configuration
    // ---------------------------

    /// Current per-event cap.
    pub fn max_listeners(&self) -> i64 {
        self.shared.state.lock().config.max_listeners
    }

    /// Replaces the per-event cap. Existing sequences are left as they are.
    ///
    /// Negative values are accepted and refuse every later registration.
    ///
    /// # Errors
    /// [`EmitterError::InvalidConfiguration`] if `max` is not a number (see
    /// [`MaxListeners`]); the previous cap stays in force.
    pub fn set_max_listeners(&self, max: impl MaxListeners) -> Result<(), EmitterError> {
        let max = max.to_max_listeners()?;
        self.shared.state.lock().config.max_listeners = max;

        tracing::debug!(max, "max listeners changed");
        self.notify(|| Notice::new(NoticeKind::MaxListenersChanged).with_max(max));
        Ok(())
    }

    /// Snapshot of the current configuration.
    pub fn config(&self) -> EmitterConfig {
        self.shared.state.lock().config.clone()
    }

    /// Observers attached at build time.
    pub fn observers(&self) -> &ObserverSet {
        &self.shared.observers
    }

    // ---------------------------
    // Helpers
    // ---------------------------

    fn sequence(&self, key: &EventName) -> Option<Sequence<A>> {
        self.shared.state.lock().registry.get(key)
    }

    /// Builds the notice only when someone is listening. Never called under a lock.
    fn notify(&self, make: impl FnOnce() -> Notice) {
        if !self.shared.observers.is_empty() {
            self.shared.observers.notify(&make());
        }
    }
}
