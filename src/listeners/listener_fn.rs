//! # Function-backed listener (`ListenerFn`)
//!
//! [`ListenerFn`] wraps a closure `F: Fn(Arc<A>) -> Fut`, producing a fresh future
//! per invocation. Shared state between invocations goes through `Arc<...>` captured
//! by the closure.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use seqemit::{ListenerError, ListenerFn, ListenerRef};
//!
//! let l: ListenerRef<u32> = ListenerFn::arc("double", |n: Arc<u32>| async move {
//!     let _ = *n * 2;
//!     Ok::<_, ListenerError>(())
//! });
//!
//! assert_eq!(l.name(), "double");
//! ```

use std::borrow::Cow;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::error::ListenerError;
use crate::listeners::listener::Listener;

/// Function-backed listener implementation.
pub struct ListenerFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> ListenerFn<F> {
    /// Creates a new function-backed listener.
    ///
    /// Prefer [`ListenerFn::arc`] when you immediately need a
    /// [`ListenerRef`](crate::ListenerRef).
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }

    /// Creates the listener and returns it as a shared handle.
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

impl<F> std::fmt::Debug for ListenerFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerFn").field("name", &self.name).finish()
    }
}

#[async_trait]
impl<A, F, Fut> Listener<A> for ListenerFn<F>
where
    A: Send + Sync + 'static,
    F: Fn(Arc<A>) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Result<(), ListenerError>> + Send + 'static,
{
    async fn call(&self, args: Arc<A>) -> Result<(), ListenerError> {
        (self.f)(args).await
    }

    fn name(&self) -> &str {
        &self.name
    }
}
