use std::{borrow::Borrow, hash::Hash, rc::Rc};

/// Name of an emitter event.
///
/// Expectations, listeners and verdict entries all refer to events by name,
/// so the name is interned behind an `Rc` to make clones cheap. Equality
/// uses string comparison with a fast path for pointer equality when two
/// names share the same allocation.
///
/// `&str` and `String` convert automatically, so APIs taking
/// `impl Into<EventName>` accept plain literals:
///
/// ```
/// use kiku::EventName;
///
/// let name = EventName::new("connected");
/// assert_eq!(name.as_str(), "connected");
/// assert_eq!(name, EventName::from("connected"));
/// ```
#[derive(Debug, Clone, Ord, PartialOrd)]
pub struct EventName(Rc<str>);

impl EventName {
    pub fn new(name: &str) -> Self {
        Self(Rc::from(name))
    }

    /// Returns the string representation of this event name.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl PartialEq for EventName {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0) || self.0 == other.0
    }
}

impl Eq for EventName {}

impl Hash for EventName {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.hash(state);
    }
}

// Lets maps keyed by EventName be queried with a plain &str.
impl Borrow<str> for EventName {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl std::fmt::Display for EventName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for EventName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for EventName {
    fn from(s: String) -> Self {
        Self(Rc::from(s))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for EventName {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}
