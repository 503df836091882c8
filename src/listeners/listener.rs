//! # Listener abstraction.
//!
//! A [`Listener`] is the opaque callback the emitter stores and awaits. The emitter
//! never looks inside it: it hands over the emitted arguments, awaits the returned
//! future and propagates a failure as-is.
//!
//! Identity matters. [`EventEmitter::remove_listener`](crate::EventEmitter::remove_listener)
//! matches listeners by allocation, so keep the [`ListenerRef`] you registered if you
//! intend to remove it later.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::ListenerError;

/// # Asynchronous event handler.
///
/// `A` is the argument value passed to [`EventEmitter::emit`](crate::EventEmitter::emit);
/// every listener invoked by one `emit` call receives a clone of the same `Arc<A>`.
///
/// # Example
/// ```
/// use std::sync::Arc;
/// use async_trait::async_trait;
/// use seqemit::{Listener, ListenerError};
///
/// struct Audit;
///
/// #[async_trait]
/// impl Listener<String> for Audit {
///     async fn call(&self, args: Arc<String>) -> Result<(), ListenerError> {
///         if args.is_empty() {
///             return Err(ListenerError::fail("empty payload"));
///         }
///         Ok(())
///     }
///
///     fn name(&self) -> &str { "audit" }
/// }
/// ```
#[async_trait]
pub trait Listener<A>: Send + Sync + 'static
where
    A: Send + Sync + 'static,
{
    /// Handles one emitted event.
    async fn call(&self, args: Arc<A>) -> Result<(), ListenerError>;

    /// Human-readable name (for logs/notices).
    fn name(&self) -> &str {
        std::any::type_name::<Self>()
    }
}

/// Shared handle to a listener.
pub type ListenerRef<A> = Arc<dyn Listener<A>>;

/// Identity comparison used for removal: same allocation, vtable ignored.
#[inline]
pub(crate) fn same_listener<A>(a: &ListenerRef<A>, b: &ListenerRef<A>) -> bool
where
    A: Send + Sync + 'static,
{
    std::ptr::addr_eq(Arc::as_ptr(a), Arc::as_ptr(b))
}
