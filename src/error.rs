use std::sync::Arc;

/// The single error type for all kiku operations.
///
/// Every fallible kiku API returns `kiku::Result<T>` (alias for
/// `Result<T, kiku::Error>`). Only usage errors cross the run boundary as
/// `Err`; a failing test block or an unmet expectation is folded into the
/// returned [`VerdictReport`](crate::VerdictReport) instead.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error("no expectations registered; declare at least one event before running")]
    NoExpectations,

    #[error("event name must not be empty")]
    EmptyEventName,

    #[error("invalid count range: min {min} is greater than max {max}")]
    InvalidCountRange { min: usize, max: usize },

    #[error("unknown argument match mode '{0}'; expected 'soft', 'deep' or 'exact'")]
    UnknownMatchMode(String),

    #[error("external error: {0}")]
    External(#[source] Arc<dyn std::error::Error + Send + Sync>),
}

impl Error {
    /// Wraps an arbitrary error so a test block can report it through
    /// `kiku::Result`.
    pub fn external(e: impl std::error::Error + Send + Sync + 'static) -> Self {
        Error::External(Arc::new(e))
    }
}

impl PartialEq for Error {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::NoExpectations, Self::NoExpectations) => true,
            (Self::EmptyEventName, Self::EmptyEventName) => true,
            (
                Self::InvalidCountRange { min: a1, max: a2 },
                Self::InvalidCountRange { min: b1, max: b2 },
            ) => a1 == b1 && a2 == b2,
            (Self::UnknownMatchMode(a), Self::UnknownMatchMode(b)) => a == b,
            (Self::External(a), Self::External(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Eq for Error {}
