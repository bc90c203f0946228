use std::fmt;

use serde_json::Value;

use crate::{pattern::Arg, CountRange, EventName};

/// One expectation whose final call count fell outside its declared range.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CountViolation {
    event: EventName,
    expected: CountRange,
    actual: usize,
}

impl CountViolation {
    pub(crate) fn new(event: EventName, expected: CountRange, actual: usize) -> Self {
        Self {
            event,
            expected,
            actual,
        }
    }

    pub fn event(&self) -> &EventName {
        &self.event
    }

    pub fn expected(&self) -> CountRange {
        self.expected
    }

    pub fn actual(&self) -> usize {
        self.actual
    }
}

impl fmt::Display for CountViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "event \"{}\" was emitted {} times, expected {}",
            self.event, self.actual, self.expected
        )
    }
}

/// An emission of an expected event name that no expectation accepted.
///
/// The arguments are recorded as a detached copy of the emitted values, a
/// best-effort rendering for the failure message.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UnmatchedEmission {
    event: EventName,
    args: Vec<Value>,
}

impl UnmatchedEmission {
    pub(crate) fn new(event: EventName, args: &[Arg]) -> Self {
        Self {
            event,
            args: args.iter().map(|arg| (**arg).clone()).collect(),
        }
    }

    pub fn event(&self) -> &EventName {
        &self.event
    }

    pub fn args(&self) -> &[Value] {
        &self.args
    }
}

impl fmt::Display for UnmatchedEmission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unmatched emission of \"{}\" with args [", self.event)?;
        for (i, arg) in self.args.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{arg}")?;
        }
        f.write_str("]")
    }
}

/// Aggregated outcome of one expectation run.
///
/// A failing run carries *every* discrepancy found: each out-of-range
/// count, each unmatched emission, and the block error if the test block
/// returned one. A single run surfaces the full picture instead of one
/// failure at a time. [`Display`](fmt::Display) renders them as one message
/// and [`assert`](Self::assert) panics with it.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct VerdictReport {
    violations: Vec<CountViolation>,
    unmatched: Vec<UnmatchedEmission>,
    block_error: Option<String>,
}

impl VerdictReport {
    pub(crate) fn new(
        violations: Vec<CountViolation>,
        unmatched: Vec<UnmatchedEmission>,
        block_error: Option<String>,
    ) -> Self {
        Self {
            violations,
            unmatched,
            block_error,
        }
    }

    pub fn passed(&self) -> bool {
        self.violations.is_empty() && self.unmatched.is_empty() && self.block_error.is_none()
    }

    pub fn failed(&self) -> bool {
        !self.passed()
    }

    /// Expectations whose final count fell outside the declared range, in
    /// registration order.
    pub fn violations(&self) -> &[CountViolation] {
        &self.violations
    }

    /// Emissions of expected event names that no expectation accepted, in
    /// emission order.
    pub fn unmatched(&self) -> &[UnmatchedEmission] {
        &self.unmatched
    }

    /// The error returned by the test block, if any.
    pub fn block_error(&self) -> Option<&str> {
        self.block_error.as_deref()
    }

    /// Panics with the full enumerated message when the run failed.
    ///
    /// This is the boundary to the host test framework: the panic carries
    /// every violation in one failure.
    #[track_caller]
    pub fn assert(&self) {
        if self.failed() {
            panic!("{}", self);
        }
    }
}

impl fmt::Display for VerdictReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.passed() {
            return f.write_str("all expectations met");
        }
        f.write_str("expectations not met:")?;
        for violation in &self.violations {
            write!(f, "\n  - {violation}")?;
        }
        for unmatched in &self.unmatched {
            write!(f, "\n  - {unmatched}")?;
        }
        if let Some(error) = &self.block_error {
            write!(f, "\n  - test block failed: {error}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args;

    fn violation(event: &str, expected: CountRange, actual: usize) -> CountViolation {
        CountViolation::new(EventName::new(event), expected, actual)
    }

    #[test]
    fn empty_report_passes() {
        let report = VerdictReport::default();
        assert!(report.passed());
        assert_eq!(report.to_string(), "all expectations met");
        report.assert();
    }

    #[test]
    fn any_entry_fails_the_report() {
        let with_violation =
            VerdictReport::new(vec![violation("foo", CountRange::exactly(1), 0)], vec![], None);
        assert!(with_violation.failed());

        let with_unmatched = VerdictReport::new(
            vec![],
            vec![UnmatchedEmission::new(EventName::new("foo"), &args![2])],
            None,
        );
        assert!(with_unmatched.failed());

        let with_block_error = VerdictReport::new(vec![], vec![], Some("boom".to_owned()));
        assert!(with_block_error.failed());
    }

    #[test]
    fn message_enumerates_every_discrepancy() {
        let report = VerdictReport::new(
            vec![
                violation("foo", CountRange::exactly(1), 0),
                violation("bar", CountRange::between(1, 3), 4),
            ],
            vec![UnmatchedEmission::new(EventName::new("baz"), &args![2, "x"])],
            Some("boom".to_owned()),
        );

        let message = report.to_string();
        assert!(message.contains("event \"foo\" was emitted 0 times, expected exactly 1"));
        assert!(message.contains("event \"bar\" was emitted 4 times, expected between 1 and 3"));
        assert!(message.contains("unmatched emission of \"baz\" with args [2, \"x\"]"));
        assert!(message.contains("test block failed: boom"));
    }

    #[test]
    #[should_panic(expected = "expectations not met")]
    fn assert_panics_with_the_message() {
        VerdictReport::new(vec![violation("foo", CountRange::exactly(1), 0)], vec![], None)
            .assert();
    }
}
