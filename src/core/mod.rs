//! Emitter core: keys, storage and dispatch.
//!
//! The public API from this module is [`EventEmitter`] (with its
//! [`EmitterBuilder`]) and the key types [`EventName`] / [`Symbol`].
//!
//! Internal modules:
//! - [`emitter`]: registration, removal, sequential dispatch, introspection;
//! - [`registry`]: key map with first-registration order and shared sequences;
//! - [`builder`]: observer wiring;
//! - [`key`]: string and symbol event keys.

mod builder;
mod emitter;
mod key;
mod registry;

pub use builder::EmitterBuilder;
pub use emitter::EventEmitter;
pub use key::{EventName, Symbol};
