//! Retry Example
//!
//! A retrying task runner that emits `"attempt"` for every try and either
//! `"succeeded"` or `"gave-up"` at the end, asserted with count ranges and
//! a predicate.
//!
//! # Key Concepts Demonstrated
//!
//! ## 1. Count Ranges
//!
//! `"attempt"` is allowed between 1 and 3 times; the terminal events use
//! the default exactly-once count.
//!
//! ## 2. Predicates
//!
//! The `"succeeded"` expectation checks the winning attempt number with a
//! closure over the full argument list instead of a positional pattern.

use std::cell::Cell;

use kiku::{args, expect, Emitter, EventEmitter, ExpectOptions};

const MAX_ATTEMPTS: u64 = 3;

/// Runs a fallible task until it succeeds or the attempt budget is spent.
struct Retrier {
    events: EventEmitter,
}

impl Retrier {
    fn new() -> Self {
        Self {
            events: EventEmitter::new(),
        }
    }

    fn events(&self) -> &EventEmitter {
        &self.events
    }

    fn run(&self, task: impl Fn(u64) -> bool) {
        for attempt in 1..=MAX_ATTEMPTS {
            self.events.emit("attempt", &args![attempt]);
            if task(attempt) {
                self.events.emit("succeeded", &args![attempt]);
                return;
            }
        }
        self.events.emit("gave-up", &args![MAX_ATTEMPTS]);
    }
}

fn main() -> kiku::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let retrier = Retrier::new();

    // A task that fails twice before succeeding on the third attempt.
    let calls = Cell::new(0u64);
    let report = expect(retrier.events())
        .emit_with("attempt", ExpectOptions::new().count(1..=3))
        .emit_with(
            "succeeded",
            ExpectOptions::new().matching(|args| args[0].as_u64() == Some(3)),
        )
        .on(|_| {
            retrier.run(|_| {
                calls.set(calls.get() + 1);
                calls.get() == 3
            });
            Ok(())
        })?;
    println!("flaky task:  {report}");

    // A task that never succeeds: "gave-up" fires instead of "succeeded".
    let report = expect(retrier.events())
        .emit_with("attempt", ExpectOptions::new().count(3))
        .emit_with("gave-up", ExpectOptions::new().with_args(args![3]))
        .on(|_| {
            retrier.run(|_| false);
            Ok(())
        })?;
    println!("doomed task: {report}");

    Ok(())
}
