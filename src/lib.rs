//! # Kiku
//!
//! Expectation testing for synchronous event emitters.
//!
//! Kiku lets a test declare which named events an emitter must produce
//! during a bounded block of code, with constraints on argument shape and
//! call count, then runs the block and verifies everything at once. A
//! failing run reports *every* discrepancy in a single message: each
//! out-of-range call count, each emission no expectation accepted, and any
//! error the block returned.
//!
//! ## Quick Start
//!
//! ```rust
//! use kiku::{args, expect, Emitter, EventEmitter, ExpectOptions};
//!
//! let emitter = EventEmitter::new();
//!
//! let report = expect(&emitter)
//!     .emit("connected")
//!     .emit_with("data", ExpectOptions::new().count(1..=3))
//!     .on(|emitter| {
//!         emitter.emit("connected", &args!["10.0.0.1"]);
//!         emitter.emit("data", &args![{"seq": 0}]);
//!         Ok(())
//!     })
//!     .unwrap();
//!
//! report.assert();
//! ```
//!
//! ## Core Types
//!
//! | Type | Description |
//! |------|-------------|
//! | [`Emitter`] | Capability trait for anything that can be observed (subscribe, unsubscribe, publish) |
//! | [`EventEmitter`] | Ready-made synchronous emitter |
//! | [`Assertion`] | Fluent chain built by [`expect`], ended by `.on(block)` |
//! | [`ExpectationRegistry`] | Ordered expectation collection, for driving [`run`] directly |
//! | [`ExpectOptions`] | Per-expectation options: match mode, argument pattern, count range |
//! | [`MatchMode`] | `Soft` (subset), `Deep` (structural equality), `Exact` (identity) |
//! | [`CountRange`] | Inclusive bounds on how many times an event must fire |
//! | [`VerdictReport`] | Aggregated verdict carrying every violation found |
//!
//! ## Argument Matching
//!
//! Emitted arguments are JSON values (`Vec<`[`Arg`]`>`, built with
//! [`args!`]). A declared pattern is positional and interpreted by the
//! expectation's [`MatchMode`]:
//!
//! ```rust
//! use kiku::{args, expect, Emitter, EventEmitter, ExpectOptions};
//!
//! let emitter = EventEmitter::new();
//! expect(&emitter)
//!     // Soft (default): pattern is a prefix, elements subset-match.
//!     .emit_with("saved", ExpectOptions::new().with_args(args![{"id": 7}]))
//!     .on(|emitter| {
//!         emitter.emit("saved", &args![{"id": 7, "dirty": false}, "extra"]);
//!         Ok(())
//!     })
//!     .unwrap()
//!     .assert();
//! ```
//!
//! A predicate over the full argument list is also accepted
//! ([`ExpectOptions::matching`]); a panicking predicate counts as a
//! non-match for that emission and the run continues.
//!
//! ## Scope
//!
//! Everything is synchronous and single-threaded: the block and all
//! emissions it triggers complete before evaluation starts, so emitters
//! must dispatch listeners on the calling thread. Relative ordering between
//! distinct events is not checked, and there is no "expect NOT to emit"
//! form; expectations are positive only.

mod assertion;
mod count_range;
mod emitter;
mod error;
mod event_emitter;
mod event_name;
mod expect_options;
mod expectation;
mod listener_id;
mod macros;
mod match_mode;
mod pattern;
mod registry;
mod runner;
mod structural;
mod verdict;

pub use assertion::{expect, Assertion};
pub use count_range::CountRange;
pub use emitter::{Emitter, Listener};
pub use error::Error;
pub use event_emitter::EventEmitter;
pub use event_name::EventName;
pub use expect_options::ExpectOptions;
pub use expectation::Expectation;
pub use listener_id::ListenerId;
pub use match_mode::MatchMode;
pub use pattern::{Arg, ArgPattern};
pub use registry::ExpectationRegistry;
pub use runner::run;
pub use structural::has_structure;
pub use verdict::{CountViolation, UnmatchedEmission, VerdictReport};

// Re-exported so `args!` and argument values work without a direct
// serde_json dependency.
pub use serde_json::{json, Value};

/// Convenience alias for `Result<T, kiku::Error>`.
pub type Result<T = ()> = std::result::Result<T, Error>;
