use crate::{ArgPattern, Error, EventName, ExpectOptions, Expectation, Result};

/// Ordered collection of expectations for one assertion.
///
/// Insertion order is significant: when several expectations share an event
/// name, each emission is credited to the first one (in registration order)
/// whose pattern accepts the arguments. Multiple registrations for the same
/// event are legal and independent, each with its own counter.
///
/// A registry can be handed to [`run`](crate::run) more than once; every run
/// re-zeroes the counters before installing listeners.
#[derive(Debug, Clone, Default)]
pub struct ExpectationRegistry {
    expectations: Vec<Expectation>,
}

impl ExpectationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers one expectation.
    ///
    /// Fails with a usage error when the event name is empty or the declared
    /// count range has `min > max`.
    pub fn register(&mut self, event: impl Into<EventName>, options: ExpectOptions) -> Result {
        let event = event.into();
        if event.as_str().is_empty() {
            return Err(Error::EmptyEventName);
        }
        if let Some(max) = options.count.max() {
            if options.count.min() > max {
                return Err(Error::InvalidCountRange {
                    min: options.count.min(),
                    max,
                });
            }
        }
        self.expectations.push(Expectation::new(event, options));
        Ok(())
    }

    /// Registers one expectation per `(event, pattern)` entry, with default
    /// options otherwise.
    pub fn register_each<I, S, P>(&mut self, events: I) -> Result
    where
        I: IntoIterator<Item = (S, P)>,
        S: Into<EventName>,
        P: Into<ArgPattern>,
    {
        for (event, pattern) in events {
            self.register(event, ExpectOptions::new().with_args(pattern))?;
        }
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.expectations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expectations.is_empty()
    }

    /// Expectations in registration order.
    pub fn iter(&self) -> std::slice::Iter<'_, Expectation> {
        self.expectations.iter()
    }

    pub(crate) fn take(&mut self) -> Vec<Expectation> {
        std::mem::take(&mut self.expectations)
    }

    pub(crate) fn restore(&mut self, expectations: Vec<Expectation>) {
        self.expectations = expectations;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{args, CountRange, MatchMode};

    #[test]
    fn registers_in_order_with_defaults() {
        let mut registry = ExpectationRegistry::new();
        registry.register("foo", ExpectOptions::new()).unwrap();
        registry
            .register("bar", ExpectOptions::new().count(2))
            .unwrap();

        assert_eq!(registry.len(), 2);
        let events: Vec<_> = registry.iter().map(|e| e.event().as_str().to_owned()).collect();
        assert_eq!(events, ["foo", "bar"]);
        assert_eq!(registry.iter().next().unwrap().count(), CountRange::exactly(1));
        assert_eq!(
            registry.iter().next().unwrap().match_mode(),
            MatchMode::Soft
        );
    }

    #[test]
    fn same_event_may_be_registered_twice() {
        let mut registry = ExpectationRegistry::new();
        registry
            .register("foo", ExpectOptions::new().with_args(args![1]))
            .unwrap();
        registry.register("foo", ExpectOptions::new()).unwrap();
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn rejects_empty_event_names() {
        let mut registry = ExpectationRegistry::new();
        assert_eq!(
            registry.register("", ExpectOptions::new()),
            Err(Error::EmptyEventName)
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn rejects_inverted_count_ranges() {
        let mut registry = ExpectationRegistry::new();
        assert_eq!(
            registry.register("foo", ExpectOptions::new().count(CountRange::between(5, 2))),
            Err(Error::InvalidCountRange { min: 5, max: 2 })
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn register_each_takes_a_pattern_map() {
        let mut registry = ExpectationRegistry::new();
        registry
            .register_each([("foo", args![1]), ("bar", args![2, 3])])
            .unwrap();
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.iter().next().unwrap().count(), CountRange::exactly(1));
    }
}
