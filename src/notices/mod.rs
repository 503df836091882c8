//! Emitter notices: what the registry reports to its observers.
//!
//! ## Contents
//! - [`NoticeKind`], [`Notice`] classification and payload metadata
//!
//! ## Quick reference
//! - **Publisher**: [`EventEmitter`](crate::EventEmitter) (registration, removal,
//!   cap changes, dispatch failures) and the [`ObserverSet`](crate::ObserverSet)
//!   (observer panics).
//! - **Consumers**: user [`Observe`](crate::Observe) implementations.

mod notice;

pub use notice::{Notice, NoticeKind};
