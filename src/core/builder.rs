use std::marker::PhantomData;
use std::sync::Arc;

use crate::config::EmitterConfig;
use crate::core::emitter::EventEmitter;
use crate::observers::{Observe, ObserverSet};

/// Builder for constructing an [`EventEmitter`] with observers attached.
///
/// # Example
/// ```rust
/// use std::sync::Arc;
/// use seqemit::{EmitterConfig, EventEmitter, Notice, Observe};
///
/// struct Quiet;
/// impl Observe for Quiet {
///     fn on_notice(&self, _: &Notice) {}
/// }
///
/// let emitter: EventEmitter<()> = EventEmitter::builder(EmitterConfig::default().with_max_listeners(3))
///     .with_observer(Arc::new(Quiet))
///     .build();
/// assert_eq!(emitter.max_listeners(), 3);
/// assert_eq!(emitter.observers().len(), 1);
/// ```
pub struct EmitterBuilder<A> {
    cfg: EmitterConfig,
    observers: Vec<Arc<dyn Observe>>,
    _args: PhantomData<fn(A)>,
}

impl<A> EmitterBuilder<A>
where
    A: Send + Sync + 'static,
{
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: EmitterConfig) -> Self {
        Self {
            cfg,
            observers: Vec::new(),
            _args: PhantomData,
        }
    }

    /// Sets notice observers, replacing any set before.
    ///
    /// Observers receive registry notices (additions, removals, refused
    /// registrations, listener failures) inline, in this order.
    pub fn with_observers(mut self, observers: Vec<Arc<dyn Observe>>) -> Self {
        self.observers = observers;
        self
    }

    /// Appends one observer.
    pub fn with_observer(mut self, observer: Arc<dyn Observe>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Builds and returns the emitter.
    pub fn build(self) -> EventEmitter<A> {
        EventEmitter::from_parts(self.cfg, ObserverSet::new(self.observers))
    }
}
