//! # seqemit
//!
//! **seqemit** is a small in-process event emitter for async Rust.
//!
//! Listeners are registered under an event key and run **one after another**,
//! each awaited before the next starts, in the order they were registered
//! (or prepended). Listeners can be fire-once, the number of listeners per key
//! is capped, and every change to the registry can be observed.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!     ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//!     │ ListenerRef  │   │ ListenerRef  │   │ ListenerRef  │
//!     │ (always)     │   │ (once)       │   │ (prepended)  │
//!     └──────┬───────┘   └──────┬───────┘   └──────┬───────┘
//!            ▼                  ▼                  ▼
//! ┌───────────────────────────────────────────────────────────────────┐
//! │  EventEmitter<A>                                                  │
//! │  - Registry: EventName ─► [ListenerEntry, ListenerEntry, ...]     │
//! │  - EmitterConfig (max listeners per event)                        │
//! │  - ObserverSet (notices for registry changes and failures)        │
//! └──────┬───────────────────────────────────────────────────┬────────┘
//!        │ emit(key, args)                                   │ Notice
//!        ▼                                                   ▼
//!   entry[0].invoke(args).await                       Observe::on_notice
//!   entry[1].invoke(args).await                    (LogWriter, metrics, ...)
//!   ...                     (first Err stops the dispatch and is returned)
//! ```
//!
//! ### Dispatch
//! ```text
//! emit(key, args) ──► seq = registry[key] ──► i = 0
//!
//! loop {
//!   ├─► entry = seq[i]  (re-read every step; no snapshot)
//!   │       └─ None ─► Ok(())
//!   ├─► entry.invoke(args).await
//!   │       ├─ Mode::Once, already executed ─► skip (Ok)
//!   │       ├─ Ok  ─► i += 1, continue
//!   │       └─ Err ─► ListenerFailed notice, return Err (unchanged)
//! }
//! ```
//!
//! ## Features
//! | Area              | Description                                                        | Key types / traits                          |
//! |-------------------|--------------------------------------------------------------------|---------------------------------------------|
//! | **Emitter**       | Register, remove, dispatch, introspect.                            | [`EventEmitter`], [`EmitterBuilder`]        |
//! | **Listeners**     | Async callbacks as trait objects or closures.                      | [`Listener`], [`ListenerFn`], [`ListenerRef`] |
//! | **Keys**          | String keys and identity-compared symbols.                         | [`EventName`], [`Symbol`]                   |
//! | **Observers**     | Hook into registry notices (logging, metrics, alerts).             | [`Observe`], [`Notice`], [`NoticeKind`]     |
//! | **Errors**        | Typed errors for registration and listener failures.               | [`EmitterError`], [`ListenerError`]         |
//! | **Configuration** | Per-event listener cap.                                            | [`EmitterConfig`], [`MaxListeners`]         |
//!
//! ## Optional features
//! - `logging`: exports a [`tracing`]-backed [`LogWriter`] observer _(demo/reference)_.
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use seqemit::{EmitterError, EventEmitter, ListenerError, ListenerFn, ListenerRef};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let emitter: EventEmitter<u64> = EventEmitter::new();
//!
//!     let audit: ListenerRef<u64> = ListenerFn::arc("audit", |id: Arc<u64>| async move {
//!         println!("order {id} placed");
//!         Ok::<_, ListenerError>(())
//!     });
//!     let welcome: ListenerRef<u64> = ListenerFn::arc("welcome", |id: Arc<u64>| async move {
//!         println!("first order ever: {id}");
//!         Ok::<_, ListenerError>(())
//!     });
//!
//!     emitter
//!         .on("order.placed", audit.clone())?
//!         .prepend_once_listener("order.placed", welcome)?;
//!
//!     emitter.emit("order.placed", 1).await?; // welcome, audit
//!     emitter.emit("order.placed", 2).await?; // audit
//!
//!     emitter.set_max_listeners(1)?;
//!     let refused = emitter.on("order.placed", audit);
//!     assert!(matches!(refused, Err(EmitterError::CapacityExceeded { .. })));
//!     Ok(())
//! }
//! ```
mod config;
mod core;
mod error;
mod listeners;
mod notices;
mod observers;

// ---- Public re-exports ----

pub use config::{EmitterConfig, MaxListeners, DEFAULT_MAX_LISTENERS};
pub use crate::core::{EmitterBuilder, EventEmitter, EventName, Symbol};
pub use error::{EmitterError, ListenerError};
pub use listeners::{Listener, ListenerEntry, ListenerFn, ListenerRef, Mode};
pub use notices::{Notice, NoticeKind};
pub use observers::{Observe, ObserverSet};

// Optional: expose a tracing-backed notice writer (demo/reference).
// Enable with: `--features logging`
#[cfg(feature = "logging")]
pub use observers::LogWriter;
