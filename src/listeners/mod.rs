//! # Listener abstractions and registry entries.
//!
//! This module provides the listener-related types:
//! - [`Listener`] - trait for implementing async event handlers
//! - [`ListenerFn`] - closure-backed listener implementation
//! - [`ListenerRef`] - shared reference to a listener (`Arc<dyn Listener<A>>`)
//! - [`ListenerEntry`] - a registered listener bundled with its [`Mode`]

mod entry;
mod listener;
mod listener_fn;

pub use entry::{ListenerEntry, Mode};
pub use listener::{Listener, ListenerRef};
pub use listener_fn::ListenerFn;

pub(crate) use listener::same_listener;
