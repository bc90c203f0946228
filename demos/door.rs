//! Door Example
//!
//! A small stateful component that reports every state change on its
//! emitter, and a test-style assertion over it.
//!
//! # Key Concepts Demonstrated
//!
//! ## 1. The Fluent Chain
//!
//! `expect(&emitter)` accumulates expectations; `.on(block)` runs the code
//! under test and evaluates everything at once.
//!
//! ## 2. Argument Patterns
//!
//! The `"opened"` expectation carries a soft pattern: the emission may carry
//! extra fields, only the declared ones are checked.
//!
//! ## 3. Aggregated Verdicts
//!
//! The second assertion fails on two counts at once, and both discrepancies
//! show up in one message.

use std::cell::Cell;

use kiku::{args, expect, Emitter, EventEmitter, ExpectOptions};

/// A door that announces every state change.
struct Door {
    events: EventEmitter,
    open: Cell<bool>,
}

impl Door {
    fn new() -> Self {
        Self {
            events: EventEmitter::new(),
            open: Cell::new(false),
        }
    }

    fn events(&self) -> &EventEmitter {
        &self.events
    }

    fn open(&self) {
        if !self.open.get() {
            self.open.set(true);
            self.events.emit("opened", &args![{"by": "handle"}]);
        }
    }

    fn close(&self) {
        if self.open.get() {
            self.open.set(false);
            self.events.emit("closed", &args![]);
        }
    }
}

fn main() -> kiku::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let door = Door::new();

    // Passes: opening then closing produces exactly one of each event.
    let report = expect(door.events())
        .emit_with("opened", ExpectOptions::new().with_args(args![{"by": "handle"}]))
        .emit("closed")
        .on(|_| {
            door.open();
            door.close();
            Ok(())
        })?;
    println!("first run:  {report}");

    // Fails: the door was opened by the handle, not a key, so the emission
    // matches no expectation, and it is never closed at all. Both
    // discrepancies land in the same report.
    let report = expect(door.events())
        .emit_with("opened", ExpectOptions::new().with_args(args![{"by": "key"}]))
        .emit("closed")
        .on(|_| {
            door.open();
            Ok(())
        })?;
    println!("second run: {report}");

    Ok(())
}
