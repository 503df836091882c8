//! # Emitter configuration.
//!
//! Provides [`EmitterConfig`], the settings an [`EventEmitter`](crate::EventEmitter)
//! starts with, and [`MaxListeners`], the conversion used by
//! [`EventEmitter::set_max_listeners`](crate::EventEmitter::set_max_listeners).
//!
//! ## Cap semantics
//! - A registration is admitted while `len + 1 <= max_listeners`.
//! - The cap is never applied retroactively: lowering it keeps existing listeners.
//! - Negative caps are accepted and refuse every registration.

use crate::error::EmitterError;

/// Cap applied when nothing else is configured.
pub const DEFAULT_MAX_LISTENERS: i64 = 10;

/// Configuration for an emitter instance.
///
/// ## Field semantics
/// - `max_listeners`: per-event cap checked before each registration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmitterConfig {
    /// Maximum number of listeners per event key.
    ///
    /// Checked as `len + 1 > max_listeners` before a listener is added.
    pub max_listeners: i64,
}

impl EmitterConfig {
    /// Returns `true` if a sequence currently holding `len` listeners may take one more.
    #[inline]
    pub fn admits(&self, len: usize) -> bool {
        let len = i64::try_from(len).unwrap_or(i64::MAX);
        len.saturating_add(1) <= self.max_listeners
    }

    /// Returns a copy with the cap replaced.
    #[must_use]
    pub fn with_max_listeners(mut self, max: i64) -> Self {
        self.max_listeners = max;
        self
    }
}

impl Default for EmitterConfig {
    /// Default configuration:
    ///
    /// - `max_listeners = 10`
    fn default() -> Self {
        Self {
            max_listeners: DEFAULT_MAX_LISTENERS,
        }
    }
}

/// Values accepted as a listener cap.
///
/// - Integers are taken as-is (clamped to `i64`).
/// - Floats are truncated toward zero; `NaN` and infinities are rejected.
/// - Strings must hold a number once surrounding whitespace is trimmed; the value then
///   follows the float rules. Trailing text (`"12px"`) is rejected.
///
/// # Example
/// ```
/// use seqemit::MaxListeners;
///
/// assert_eq!(11_u32.to_max_listeners(), Ok(11));
/// assert_eq!(4.9_f64.to_max_listeners(), Ok(4));
/// assert_eq!(" 12 ".to_max_listeners(), Ok(12));
/// assert!("12px".to_max_listeners().is_err());
/// assert!("null".to_max_listeners().is_err());
/// assert!(f64::NAN.to_max_listeners().is_err());
/// ```
pub trait MaxListeners {
    /// Converts the value into a cap.
    fn to_max_listeners(self) -> Result<i64, EmitterError>;
}

macro_rules! int_max_listeners {
    ($($t:ty),*) => {
        $(
            impl MaxListeners for $t {
                #[inline]
                fn to_max_listeners(self) -> Result<i64, EmitterError> {
                    Ok(i64::try_from(self).unwrap_or(i64::MAX))
                }
            }
        )*
    };
}

int_max_listeners!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl MaxListeners for f64 {
    fn to_max_listeners(self) -> Result<i64, EmitterError> {
        if self.is_nan() {
            return Err(EmitterError::invalid("max listeners must be a number, got NaN"));
        }
        if self.is_infinite() {
            return Err(EmitterError::invalid(format!(
                "max listeners must be an integer, got {self}"
            )));
        }
        // `as` saturates at the i64 bounds.
        Ok(self.trunc() as i64)
    }
}

impl MaxListeners for f32 {
    fn to_max_listeners(self) -> Result<i64, EmitterError> {
        f64::from(self).to_max_listeners()
    }
}

impl MaxListeners for &str {
    fn to_max_listeners(self) -> Result<i64, EmitterError> {
        let n: f64 = self.trim().parse().map_err(|_| {
            EmitterError::invalid(format!("max listeners must be a number, got {self:?}"))
        })?;
        n.to_max_listeners()
    }
}

impl MaxListeners for String {
    fn to_max_listeners(self) -> Result<i64, EmitterError> {
        self.as_str().to_max_listeners()
    }
}

impl MaxListeners for &String {
    fn to_max_listeners(self) -> Result<i64, EmitterError> {
        self.as_str().to_max_listeners()
    }
}
