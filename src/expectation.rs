use crate::{pattern::Arg, ArgPattern, CountRange, EventName, ExpectOptions, MatchMode};

/// One declared expectation: a named event with argument and count
/// constraints, plus the live call counter for the current run.
///
/// Expectations are created by
/// [`ExpectationRegistry::register`](crate::ExpectationRegistry::register),
/// mutated only while the run's listeners fire, and read-only during
/// evaluation. The counter is re-zeroed at the start of every run so a
/// registry can be reused.
#[derive(Debug, Clone)]
pub struct Expectation {
    event: EventName,
    match_mode: MatchMode,
    pattern: ArgPattern,
    count: CountRange,
    call_count: usize,
    order_matters: bool,
}

impl Expectation {
    pub(crate) fn new(event: EventName, options: ExpectOptions) -> Self {
        Self {
            event,
            match_mode: options.match_mode,
            pattern: options.pattern,
            count: options.count,
            call_count: 0,
            order_matters: options.order_matters,
        }
    }

    pub fn event(&self) -> &EventName {
        &self.event
    }

    pub fn match_mode(&self) -> MatchMode {
        self.match_mode
    }

    pub fn pattern(&self) -> &ArgPattern {
        &self.pattern
    }

    pub fn count(&self) -> CountRange {
        self.count
    }

    /// Emissions credited to this expectation during the most recent run.
    pub fn call_count(&self) -> usize {
        self.call_count
    }

    /// Stored but never enforced.
    pub fn order_matters(&self) -> bool {
        self.order_matters
    }

    pub(crate) fn reset(&mut self) {
        self.call_count = 0;
    }

    pub(crate) fn credit(&mut self) {
        self.call_count += 1;
    }

    pub(crate) fn accepts(&self, args: &[Arg]) -> bool {
        self.pattern.accepts(self.match_mode, args)
    }

    pub(crate) fn satisfied(&self) -> bool {
        self.count.contains(self.call_count)
    }
}
