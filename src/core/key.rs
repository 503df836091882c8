//! # Event keys.
//!
//! An event is addressed by an [`EventName`]: either a string or a [`Symbol`].
//! Strings compare by content; symbols compare by identity, so two symbols
//! created with the same description are still different keys.
//!
//! ## Example
//! ```rust
//! use seqemit::{EventName, Symbol};
//!
//! let a = Symbol::new("ready");
//! let b = Symbol::new("ready");
//! assert_ne!(EventName::from(&a), EventName::from(&b));
//! assert_eq!(EventName::from("ready"), EventName::from(String::from("ready")));
//! assert_eq!(EventName::from(&a).to_string(), "Symbol(ready)");
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Source of symbol identities.
static SYMBOL_SEQ: AtomicU64 = AtomicU64::new(0);

/// Opaque, identity-compared event key.
///
/// Clones share the identity of the original.
#[derive(Clone)]
pub struct Symbol {
    id: u64,
    description: Arc<str>,
}

impl Symbol {
    /// Creates a fresh symbol; the description is only used for display.
    pub fn new(description: impl Into<Arc<str>>) -> Self {
        Self {
            id: SYMBOL_SEQ.fetch_add(1, Ordering::Relaxed),
            description: description.into(),
        }
    }

    /// Description given at creation.
    pub fn description(&self) -> &str {
        &self.description
    }
}

impl PartialEq for Symbol {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Symbol {}

impl Hash for Symbol {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({:?}#{})", self.description, self.id)
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Symbol({})", self.description)
    }
}

/// Key naming a channel of events.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum EventName {
    /// Content-compared string key.
    Str(Arc<str>),
    /// Identity-compared symbol key.
    Symbol(Symbol),
}

impl EventName {
    /// Returns the string key, if this is one.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            EventName::Str(s) => Some(s),
            EventName::Symbol(_) => None,
        }
    }

    /// Returns the symbol key, if this is one.
    pub fn as_symbol(&self) -> Option<&Symbol> {
        match self {
            EventName::Str(_) => None,
            EventName::Symbol(sym) => Some(sym),
        }
    }
}

impl fmt::Display for EventName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EventName::Str(s) => f.write_str(s),
            EventName::Symbol(sym) => fmt::Display::fmt(sym, f),
        }
    }
}

impl From<&str> for EventName {
    fn from(s: &str) -> Self {
        EventName::Str(Arc::from(s))
    }
}

impl From<String> for EventName {
    fn from(s: String) -> Self {
        EventName::Str(Arc::from(s))
    }
}

impl From<&String> for EventName {
    fn from(s: &String) -> Self {
        EventName::Str(Arc::from(s.as_str()))
    }
}

impl From<Arc<str>> for EventName {
    fn from(s: Arc<str>) -> Self {
        EventName::Str(s)
    }
}

impl From<Symbol> for EventName {
    fn from(sym: Symbol) -> Self {
        EventName::Symbol(sym)
    }
}

impl From<&Symbol> for EventName {
    fn from(sym: &Symbol) -> Self {
        EventName::Symbol(sym.clone())
    }
}

impl From<&EventName> for EventName {
    fn from(name: &EventName) -> Self {
        name.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_symbol_clones_share_identity() {
        let s = Symbol::new("x");
        assert_eq!(s.clone(), s);
        assert_ne!(Symbol::new("x"), s);
        assert_eq!(s.description(), "x");
    }

    #[test]
    fn test_string_and_symbol_never_collide() {
        let sym = Symbol::new("tick");
        let mut keys = HashSet::new();
        keys.insert(EventName::from("tick"));
        keys.insert(EventName::from(&sym));
        keys.insert(EventName::from("tick".to_string()));
        assert_eq!(keys.len(), 2);
    }

    #[test]
    fn test_accessors() {
        let name = EventName::from("a");
        assert_eq!(name.as_str(), Some("a"));
        assert!(name.as_symbol().is_none());
        assert_eq!(name.to_string(), "a");
    }
}
