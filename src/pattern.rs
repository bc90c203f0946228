use std::{
    fmt,
    panic::{catch_unwind, AssertUnwindSafe},
    rc::Rc,
};

use serde_json::Value;

use crate::MatchMode;

/// A single captured or declared argument value.
///
/// Arguments are reference-counted so [`MatchMode::Exact`] can check that an
/// emission carried the very same allocation the expectation declared.
pub type Arg = Rc<Value>;

type PredicateFn = Rc<dyn Fn(&[Arg]) -> bool>;

/// Declared constraint on the arguments of an expected emission.
///
/// - [`Any`](ArgPattern::Any) (the default) accepts every emission of the
///   event, whatever its arguments.
/// - [`List`](ArgPattern::List) holds positional patterns interpreted by the
///   expectation's [`MatchMode`].
/// - [`Predicate`](ArgPattern::Predicate) is called with the full captured
///   argument list and decides the match itself, ignoring the mode.
///
/// A panicking predicate is caught, logged, and treated as a non-match for
/// that single emission; the run continues. This leniency is part of the
/// contract: a broken predicate must not abort the block under test.
#[derive(Clone, Default)]
pub enum ArgPattern {
    #[default]
    Any,
    List(Vec<Arg>),
    Predicate(PredicateFn),
}

impl ArgPattern {
    /// Wraps a predicate over the full captured argument list.
    pub fn predicate<F>(predicate: F) -> Self
    where
        F: Fn(&[Arg]) -> bool + 'static,
    {
        ArgPattern::Predicate(Rc::new(predicate))
    }

    /// Returns true when the captured argument list satisfies this pattern
    /// under the given mode.
    pub(crate) fn accepts(&self, mode: MatchMode, args: &[Arg]) -> bool {
        match self {
            ArgPattern::Any => true,
            ArgPattern::Predicate(predicate) => {
                catch_unwind(AssertUnwindSafe(|| predicate(args))).unwrap_or_else(|_| {
                    tracing::warn!("argument predicate panicked, treating as a non-match");
                    false
                })
            }
            ArgPattern::List(pattern) => mode.matches(args, pattern),
        }
    }
}

impl fmt::Debug for ArgPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgPattern::Any => f.write_str("Any"),
            ArgPattern::List(pattern) => f.debug_tuple("List").field(pattern).finish(),
            ArgPattern::Predicate(_) => f.debug_struct("Predicate").finish_non_exhaustive(),
        }
    }
}

impl From<Vec<Arg>> for ArgPattern {
    fn from(pattern: Vec<Arg>) -> Self {
        ArgPattern::List(pattern)
    }
}

impl From<Vec<Value>> for ArgPattern {
    fn from(pattern: Vec<Value>) -> Self {
        ArgPattern::List(pattern.into_iter().map(Rc::new).collect())
    }
}

impl From<&[Arg]> for ArgPattern {
    fn from(pattern: &[Arg]) -> Self {
        ArgPattern::List(pattern.to_vec())
    }
}

impl<const N: usize> From<[Arg; N]> for ArgPattern {
    fn from(pattern: [Arg; N]) -> Self {
        ArgPattern::List(pattern.to_vec())
    }
}

impl<const N: usize> From<[Value; N]> for ArgPattern {
    fn from(pattern: [Value; N]) -> Self {
        ArgPattern::List(pattern.into_iter().map(Rc::new).collect())
    }
}
