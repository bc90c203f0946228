use crate::{pattern::Arg, ArgPattern, CountRange, MatchMode};

/// Options for one expectation declaration.
///
/// Defaults: [`MatchMode::Soft`], any arguments, exactly one emission,
/// order not significant.
///
/// ```
/// use kiku::{ExpectOptions, MatchMode};
/// use serde_json::json;
///
/// let options = ExpectOptions::new()
///     .match_mode(MatchMode::Deep)
///     .with_args([json!(1), json!("ready")])
///     .count(1..=3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ExpectOptions {
    pub(crate) match_mode: MatchMode,
    pub(crate) pattern: ArgPattern,
    pub(crate) count: CountRange,
    pub(crate) order_matters: bool,
}

impl ExpectOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the argument matching strategy. Ignored when the pattern is a
    /// predicate, which decides the match itself.
    pub fn match_mode(mut self, mode: MatchMode) -> Self {
        self.match_mode = mode;
        self
    }

    /// Declares a positional argument pattern.
    pub fn with_args(mut self, pattern: impl Into<ArgPattern>) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// Declares a predicate over the full captured argument list.
    pub fn matching<F>(mut self, predicate: F) -> Self
    where
        F: Fn(&[Arg]) -> bool + 'static,
    {
        self.pattern = ArgPattern::predicate(predicate);
        self
    }

    /// How many times the event must fire. Accepts a plain count or an
    /// inclusive range; the default is exactly once.
    pub fn count(mut self, count: impl Into<CountRange>) -> Self {
        self.count = count.into();
        self
    }

    /// Accepted but not enforced: relative ordering between distinct events
    /// is never checked. The flag is stored so declarations carrying it
    /// remain readable, nothing more.
    pub fn order_matters(mut self, order_matters: bool) -> Self {
        self.order_matters = order_matters;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_soft_any_exactly_once() {
        let options = ExpectOptions::new();
        assert_eq!(options.match_mode, MatchMode::Soft);
        assert!(matches!(options.pattern, ArgPattern::Any));
        assert_eq!(options.count, CountRange::exactly(1));
        assert!(!options.order_matters);
    }

    #[test]
    fn setters_chain() {
        let options = ExpectOptions::new()
            .match_mode(MatchMode::Exact)
            .count(2..)
            .order_matters(true);
        assert_eq!(options.match_mode, MatchMode::Exact);
        assert_eq!(options.count, CountRange::at_least(2));
        assert!(options.order_matters);
    }
}
