//! # Notice observers for the emitter.
//!
//! This module provides the [`Observe`] trait, the [`ObserverSet`] fan-out and,
//! behind the `logging` feature, the built-in [`LogWriter`].
//!
//! ## Architecture
//! ```text
//! Notice flow:
//!   EventEmitter ── notify(Notice) ──► ObserverSet ──► Observe::on_notice(&Notice)
//!                                                          │
//!                                          ┌───────────────┼───────────────┐
//!                                          ▼               ▼               ▼
//!                                      LogWriter        Metrics         Custom
//! ```

#[cfg(feature = "logging")]
mod log;
mod observe;
mod set;

#[cfg(feature = "logging")]
pub use log::LogWriter;
pub use observe::Observe;
pub use set::ObserverSet;
