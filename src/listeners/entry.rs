//! # Registered listener with its execution mode.
//!
//! A [`ListenerEntry`] is what an event's sequence actually stores: the caller's
//! [`ListenerRef`] plus a [`Mode`] and an `executed` flag.
//!
//! ## Rules
//! - `executed` flips to `true` on the first [`invoke`](ListenerEntry::invoke), in every mode.
//! - A [`Mode::Once`] entry whose flag is set resolves `Ok(())` without calling the listener.
//! - The flag is set **before** the listener runs, so a failing once-listener never re-runs.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::error::ListenerError;
use crate::listeners::listener::ListenerRef;

/// How often an entry runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mode {
    /// Runs on every dispatch.
    Always,
    /// Runs on the first dispatch only; inert afterwards.
    Once,
}

impl Mode {
    /// Returns a short stable label (snake_case) for use in logs.
    pub fn as_label(&self) -> &'static str {
        match self {
            Mode::Always => "always",
            Mode::Once => "once",
        }
    }
}

/// One position in an event's listener sequence.
pub struct ListenerEntry<A>
where
    A: Send + Sync + 'static,
{
    listener: ListenerRef<A>,
    mode: Mode,
    executed: AtomicBool,
}

impl<A> ListenerEntry<A>
where
    A: Send + Sync + 'static,
{
    pub(crate) fn new(listener: ListenerRef<A>, mode: Mode) -> Self {
        Self {
            listener,
            mode,
            executed: AtomicBool::new(false),
        }
    }

    /// Runs the wrapped listener, honoring the fire-once contract.
    ///
    /// The listener's error is returned unchanged.
    pub async fn invoke(&self, args: Arc<A>) -> Result<(), ListenerError> {
        let already = self.executed.swap(true, Ordering::AcqRel);
        if already && self.mode == Mode::Once {
            return Ok(());
        }
        self.listener.call(args).await
    }

    /// The caller-supplied listener.
    pub fn listener(&self) -> &ListenerRef<A> {
        &self.listener
    }

    /// Execution mode fixed at registration.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Whether [`invoke`](Self::invoke) has been called at least once.
    pub fn is_executed(&self) -> bool {
        self.executed.load(Ordering::Acquire)
    }

    /// `true` for a fire-once entry that already ran.
    pub fn is_spent(&self) -> bool {
        self.mode == Mode::Once && self.is_executed()
    }

    /// Listener name, as reported by [`Listener::name`](crate::Listener::name).
    pub fn name(&self) -> &str {
        self.listener.name()
    }
}

impl<A> std::fmt::Debug for ListenerEntry<A>
where
    A: Send + Sync + 'static,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ListenerEntry")
            .field("listener", &self.listener.name())
            .field("mode", &self.mode)
            .field("executed", &self.is_executed())
            .finish()
    }
}
