//! Error types used by the emitter and by listeners.
//!
//! This module defines two main error enums:
//!
//! - [`EmitterError`]: errors raised by the emitter itself (registration, configuration).
//! - [`ListenerError`]: errors raised by individual listener invocations.
//!
//! Both types provide helper methods (`as_label`, `as_message`) for logging/metrics.
//! A [`ListenerError`] is never wrapped by the emitter: whatever a listener returns
//! is what the caller of [`EventEmitter::emit`](crate::EventEmitter::emit) receives.

use thiserror::Error;

/// # Errors produced by the emitter.
///
/// These are raised synchronously by registration and configuration calls.
/// The operation that raised them has not mutated the emitter.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EmitterError {
    /// Accepting the registration would push the event's sequence past the cap.
    #[error("maximum number of listeners ({max}) exceeded for event {event}")]
    CapacityExceeded {
        /// Display form of the event key.
        event: String,
        /// The cap in force when the registration was refused.
        max: i64,
    },

    /// The cap could not be derived from the given value.
    #[error("invalid configuration: {reason}")]
    InvalidConfiguration {
        /// What was wrong with the value.
        reason: String,
    },
}

impl EmitterError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use seqemit::EmitterError;
    ///
    /// let err = EmitterError::CapacityExceeded { event: "tick".into(), max: 10 };
    /// assert_eq!(err.as_label(), "capacity_exceeded");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            EmitterError::CapacityExceeded { .. } => "capacity_exceeded",
            EmitterError::InvalidConfiguration { .. } => "invalid_configuration",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            EmitterError::CapacityExceeded { event, max } => {
                format!("event={event} max_listeners={max}")
            }
            EmitterError::InvalidConfiguration { reason } => format!("config: {reason}"),
        }
    }

    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        EmitterError::InvalidConfiguration {
            reason: reason.into(),
        }
    }
}

/// # Errors produced by listener execution.
///
/// Listeners report failure through this type; the emitter stops the current
/// dispatch and hands the error back unchanged. There are no retries.
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ListenerError {
    /// Listener failed while handling the event.
    #[error("listener failed: {error}")]
    Fail {
        /// The underlying error message.
        error: String,
    },

    /// Listener hit a condition it considers unrecoverable.
    #[error("fatal listener error: {error}")]
    Fatal {
        /// The underlying error message.
        error: String,
    },
}

impl ListenerError {
    /// Shorthand for [`ListenerError::Fail`].
    pub fn fail(error: impl Into<String>) -> Self {
        ListenerError::Fail {
            error: error.into(),
        }
    }

    /// Shorthand for [`ListenerError::Fatal`].
    pub fn fatal(error: impl Into<String>) -> Self {
        ListenerError::Fatal {
            error: error.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use seqemit::ListenerError;
    ///
    /// let err = ListenerError::fail("boom");
    /// assert_eq!(err.as_label(), "listener_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            ListenerError::Fail { .. } => "listener_failed",
            ListenerError::Fatal { .. } => "listener_fatal",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            ListenerError::Fail { error } => format!("error: {error}"),
            ListenerError::Fatal { error } => format!("fatal: {error}"),
        }
    }

    /// Indicates whether the listener flagged the failure as fatal.
    pub fn is_fatal(&self) -> bool {
        matches!(self, ListenerError::Fatal { .. })
    }
}

impl From<String> for ListenerError {
    fn from(error: String) -> Self {
        ListenerError::Fail { error }
    }
}

impl From<&str> for ListenerError {
    fn from(error: &str) -> Self {
        ListenerError::Fail {
            error: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_display_names_event_and_cap() {
        let err = EmitterError::CapacityExceeded {
            event: "tick".into(),
            max: 3,
        };
        assert_eq!(
            err.to_string(),
            "maximum number of listeners (3) exceeded for event tick"
        );
        assert_eq!(err.as_message(), "event=tick max_listeners=3");
    }

    #[test]
    fn test_invalid_configuration_label() {
        let err = EmitterError::invalid("not a number");
        assert_eq!(err.as_label(), "invalid_configuration");
        assert_eq!(err.to_string(), "invalid configuration: not a number");
    }

    #[test]
    fn test_listener_error_from_str_is_fail() {
        let err: ListenerError = "boom".into();
        assert_eq!(err, ListenerError::fail("boom"));
        assert!(!err.is_fatal());
        assert!(ListenerError::fatal("nope").is_fatal());
    }
}
