use std::{fmt, hash};
use uuid::Uuid;

/// Unique identifier for one installed listener.
///
/// Returned by [`Emitter::on`](crate::Emitter::on) and passed back to
/// [`Emitter::off`](crate::Emitter::off), so teardown removes exactly the
/// listeners it installed and nothing else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, hash::Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ListenerId(u128);

impl ListenerId {
    #[must_use]
    pub fn new() -> Self {
        Self(Uuid::new_v4().as_u128())
    }

    pub fn value(&self) -> u128 {
        self.0
    }
}

impl From<u128> for ListenerId {
    fn from(value: u128) -> Self {
        ListenerId(value)
    }
}

impl From<ListenerId> for u128 {
    fn from(value: ListenerId) -> Self {
        value.0
    }
}

impl fmt::Display for ListenerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", Uuid::from_u128(self.0))
    }
}

impl Default for ListenerId {
    fn default() -> Self {
        ListenerId::new()
    }
}
