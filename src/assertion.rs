use std::fmt;

use crate::{
    runner, ArgPattern, Emitter, Error, EventName, ExpectOptions, ExpectationRegistry, Result,
    VerdictReport,
};

/// Starts an expectation chain over `emitter`.
///
/// Declarations accumulate on the returned [`Assertion`]; the chain ends
/// with [`on`](Assertion::on), which runs the block and evaluates every
/// expectation at once.
///
/// ```
/// use kiku::{args, expect, Emitter, EventEmitter, ExpectOptions};
///
/// let emitter = EventEmitter::new();
/// let report = expect(&emitter)
///     .emit("connected")
///     .emit_with("data", ExpectOptions::new().count(1..=3).with_args(args![{"seq": 0}]))
///     .on(|emitter| {
///         emitter.emit("connected", &args![]);
///         emitter.emit("data", &args![{"seq": 0, "payload": "hi"}]);
///         Ok(())
///     })
///     .unwrap();
/// assert!(report.passed());
/// ```
pub fn expect<M: Emitter>(emitter: &M) -> Assertion<'_, M> {
    Assertion {
        emitter,
        registry: ExpectationRegistry::new(),
        deferred: None,
    }
}

/// A fluent expectation chain over one emitter.
///
/// Built by [`expect`]. Each `emit*` call registers one expectation;
/// [`on`](Self::on) consumes the chain, so a finished assertion cannot be
/// amended and re-run.
///
/// A usage error raised while chaining (empty event name, inverted count
/// range) is held and returned by `on` before any listener is installed;
/// later declarations on a poisoned chain are ignored.
pub struct Assertion<'a, M: Emitter> {
    emitter: &'a M,
    registry: ExpectationRegistry,
    deferred: Option<Error>,
}

impl<'a, M: Emitter> Assertion<'a, M> {
    /// Expects `event` exactly once, with any arguments.
    pub fn emit(self, event: impl Into<EventName>) -> Self {
        self.emit_with(event, ExpectOptions::new())
    }

    /// Expects `event` with explicit options.
    pub fn emit_with(mut self, event: impl Into<EventName>, options: ExpectOptions) -> Self {
        if self.deferred.is_none() {
            if let Err(error) = self.registry.register(event, options) {
                self.deferred = Some(error);
            }
        }
        self
    }

    /// Expects every `(event, pattern)` entry, with default options
    /// otherwise.
    pub fn emit_each<I, S, P>(mut self, events: I) -> Self
    where
        I: IntoIterator<Item = (S, P)>,
        S: Into<EventName>,
        P: Into<ArgPattern>,
    {
        for (event, pattern) in events {
            self = self.emit_with(event, ExpectOptions::new().with_args(pattern));
        }
        self
    }

    /// Runs `block` and evaluates every declared expectation.
    ///
    /// Deferred usage errors surface here; so does declaring nothing at all.
    pub fn on<F>(self, block: F) -> Result<VerdictReport>
    where
        F: FnOnce(&M) -> Result,
    {
        let Assertion {
            emitter,
            mut registry,
            deferred,
        } = self;
        if let Some(error) = deferred {
            return Err(error);
        }
        runner::run(emitter, &mut registry, block)
    }
}

impl<M: Emitter> fmt::Debug for Assertion<'_, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Assertion")
            .field("registry", &self.registry)
            .field("deferred", &self.deferred)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{args, CountRange, EventEmitter, MatchMode};

    #[test]
    fn passes_the_emitter_through_to_the_block() {
        let emitter = EventEmitter::new();
        let mut called = false;

        expect(&emitter)
            .emit("foo")
            .on(|inner| {
                assert!(std::ptr::eq(inner, &emitter));
                inner.emit("foo", &args![]);
                called = true;
                Ok(())
            })
            .unwrap()
            .assert();

        assert!(called);
    }

    #[test]
    fn asserts_a_single_event() {
        let emitter = EventEmitter::new();

        let report = expect(&emitter)
            .emit("foo")
            .on(|emitter| {
                emitter.emit("foo", &args![]);
                Ok(())
            })
            .unwrap();
        assert!(report.passed());

        let report = expect(&emitter)
            .emit("foo")
            .on(|emitter| {
                emitter.emit("bar", &args![]);
                Ok(())
            })
            .unwrap();
        assert!(report.failed());

        let report = expect(&emitter).emit("foo").on(|_| Ok(())).unwrap();
        assert!(report.failed());
    }

    #[test]
    fn asserts_multiple_events() {
        let emitter = EventEmitter::new();

        let report = expect(&emitter)
            .emit("foo")
            .emit("bar")
            .on(|emitter| {
                emitter.emit("foo", &args![]);
                emitter.emit("bar", &args![]);
                Ok(())
            })
            .unwrap();
        assert!(report.passed());

        let report = expect(&emitter)
            .emit("foo")
            .emit("bar")
            .on(|emitter| {
                emitter.emit("foo", &args![]);
                Ok(())
            })
            .unwrap();
        assert!(report.failed());
        assert_eq!(report.violations().len(), 1);
        assert_eq!(report.violations()[0].event().as_str(), "bar");
    }

    #[test]
    fn on_without_declarations_is_a_usage_error() {
        let emitter = EventEmitter::new();
        let result = expect(&emitter).on(|_| Ok(()));
        assert_eq!(result.unwrap_err(), Error::NoExpectations);
    }

    #[test]
    fn chain_usage_errors_surface_at_on() {
        let emitter = EventEmitter::new();

        let result = expect(&emitter)
            .emit_with("foo", ExpectOptions::new().count(CountRange::between(5, 2)))
            .emit("bar")
            .on(|_| Ok(()));
        assert_eq!(result.unwrap_err(), Error::InvalidCountRange { min: 5, max: 2 });
        assert_eq!(emitter.total_listeners(), 0);

        let result = expect(&emitter).emit("").on(|_| Ok(()));
        assert_eq!(result.unwrap_err(), Error::EmptyEventName);
    }

    #[test]
    fn emit_each_registers_patterns_with_defaults() {
        let emitter = EventEmitter::new();

        let report = expect(&emitter)
            .emit_each([("foo", args![1]), ("bar", args!["x"])])
            .on(|emitter| {
                emitter.emit("foo", &args![1, "extra"]);
                emitter.emit("bar", &args!["x"]);
                Ok(())
            })
            .unwrap();
        assert!(report.passed());
    }

    #[test]
    fn exact_mode_end_to_end() {
        let emitter = EventEmitter::new();

        let report = expect(&emitter)
            .emit_with(
                "bar",
                ExpectOptions::new()
                    .match_mode(MatchMode::Exact)
                    .with_args(args![1, 2, 3]),
            )
            .on(|emitter| {
                emitter.emit("bar", &args![1, 2, 3]);
                Ok(())
            })
            .unwrap();
        assert!(report.passed());

        let report = expect(&emitter)
            .emit_with(
                "bar",
                ExpectOptions::new()
                    .match_mode(MatchMode::Exact)
                    .with_args(args![1, 2, 3]),
            )
            .on(|emitter| {
                emitter.emit("bar", &args![3, 2, 1]);
                Ok(())
            })
            .unwrap();
        assert!(report.failed());
    }

    #[test]
    fn predicate_option_end_to_end() {
        let emitter = EventEmitter::new();

        for (count, passes) in [(2usize, true), (0, false), (1, false), (3, false)] {
            let report = expect(&emitter)
                .emit_with("foo", ExpectOptions::new().matching(|args| args.len() == 2))
                .on(|emitter| {
                    let payload: Vec<_> = (0..count).map(|i| args![i].remove(0)).collect();
                    emitter.emit("foo", &payload);
                    Ok(())
                })
                .unwrap();
            assert_eq!(report.passed(), passes, "{count} arguments");
        }
    }
}
