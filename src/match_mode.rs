use std::{rc::Rc, str::FromStr};

use serde_json::Value;

use crate::{pattern::Arg, structural::has_structure, Error};

/// Strategy for comparing a captured argument list against a declared
/// positional pattern.
///
/// | Mode | Length | Per element |
/// |------|--------|-------------|
/// | [`Soft`](MatchMode::Soft) | pattern may be a prefix | structural subset match |
/// | [`Deep`](MatchMode::Deep) | must be equal | full structural equality |
/// | [`Exact`](MatchMode::Exact) | must be equal | identity (same allocation), value equality for scalars |
///
/// All three are total: a shape mismatch yields `false`, never an error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MatchMode {
    /// Subset match. The pattern may be shorter than the emitted argument
    /// list (excess arguments are ignored) and each element is matched by
    /// [`has_structure`], so nested objects and arrays may be partial.
    #[default]
    Soft,
    /// Full structural equality: same length, every element pairwise equal
    /// by value at every depth.
    Deep,
    /// Identity: same length, and each emitted argument must be the same
    /// allocation as the declared one (`Rc::ptr_eq`). Scalars compare by
    /// value. Use this to assert reference stability of emitted objects
    /// rather than value shape.
    Exact,
}

impl MatchMode {
    /// Returns true when `actual` satisfies `pattern` under this strategy.
    pub fn matches(self, actual: &[Arg], pattern: &[Arg]) -> bool {
        match self {
            MatchMode::Soft => soft(actual, pattern),
            MatchMode::Deep => deep(actual, pattern),
            MatchMode::Exact => exact(actual, pattern),
        }
    }
}

impl FromStr for MatchMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        match s {
            "soft" => Ok(MatchMode::Soft),
            "deep" => Ok(MatchMode::Deep),
            "exact" => Ok(MatchMode::Exact),
            other => Err(Error::UnknownMatchMode(other.to_string())),
        }
    }
}

fn soft(actual: &[Arg], pattern: &[Arg]) -> bool {
    pattern.len() <= actual.len()
        && pattern
            .iter()
            .zip(actual)
            .all(|(p, a)| has_structure(a, p))
}

fn deep(actual: &[Arg], pattern: &[Arg]) -> bool {
    actual.len() == pattern.len() && pattern.iter().zip(actual).all(|(p, a)| p == a)
}

fn exact(actual: &[Arg], pattern: &[Arg]) -> bool {
    actual.len() == pattern.len()
        && pattern
            .iter()
            .zip(actual)
            .all(|(p, a)| Rc::ptr_eq(p, a) || (is_scalar(p) && p == a))
}

fn is_scalar(value: &Value) -> bool {
    !matches!(value, Value::Array(_) | Value::Object(_))
}
