use std::{cell::RefCell, rc::Rc};

use crate::{
    pattern::Arg,
    verdict::{CountViolation, UnmatchedEmission},
    Emitter, Error, EventName, ExpectationRegistry, Expectation, Listener, ListenerId, Result,
    VerdictReport,
};

/// Runs one expectation cycle against `emitter`.
///
/// Installs one listener per distinct expected event name, executes `block`
/// with the emitter as a convenience parameter, removes every installed
/// listener, and evaluates all expectations into a single
/// [`VerdictReport`].
///
/// While the block runs, each emission of an expected event name is routed
/// to the candidate expectations *in registration order* and credited to
/// the first whose pattern accepts the arguments; an emission no candidate
/// accepts is recorded as unmatched and fails the verdict.
///
/// Everything is synchronous and single-threaded: the block and any
/// emissions it triggers run to completion before evaluation starts.
///
/// Only usage errors are returned as `Err` (an empty registry here). A
/// block returning `Err` folds into a failing verdict carrying the error
/// text. Teardown is guaranteed on every exit path, including a panicking
/// block: the emitter is left with exactly the listeners it had before the
/// call.
///
/// ```
/// use kiku::{args, EventEmitter, Emitter, ExpectOptions, ExpectationRegistry};
///
/// let emitter = EventEmitter::new();
/// let mut registry = ExpectationRegistry::new();
/// registry.register("saved", ExpectOptions::new()).unwrap();
///
/// let report = kiku::run(&emitter, &mut registry, |emitter| {
///     emitter.emit("saved", &args![{"id": 7}]);
///     Ok(())
/// })
/// .unwrap();
/// assert!(report.passed());
/// ```
pub fn run<M, F>(emitter: &M, registry: &mut ExpectationRegistry, block: F) -> Result<VerdictReport>
where
    M: Emitter,
    F: FnOnce(&M) -> Result,
{
    if registry.is_empty() {
        return Err(Error::NoExpectations);
    }

    let mut expectations = registry.take();
    for expectation in &mut expectations {
        expectation.reset();
    }

    // Distinct event names in first-registration order, one listener each.
    let mut names: Vec<EventName> = Vec::new();
    for expectation in &expectations {
        if !names.contains(expectation.event()) {
            names.push(expectation.event().clone());
        }
    }

    let state = Rc::new(RefCell::new(RunState {
        expectations,
        unmatched: Vec::new(),
    }));

    let mut guard = ListenerGuard {
        emitter,
        installed: Vec::new(),
    };
    for name in &names {
        let listener: Listener = Rc::new({
            let state = Rc::clone(&state);
            let name = name.clone();
            move |args: &[Arg]| state.borrow_mut().route(&name, args)
        });
        let id = emitter.on(name.as_str(), listener);
        guard.installed.push((name.clone(), id));
    }

    tracing::debug!(
        expectations = state.borrow().expectations.len(),
        events = names.len(),
        "expectation run started"
    );

    // The guard removes the listeners on every exit path, including an
    // unwinding panic inside the block.
    let block_result = block(emitter);
    drop(guard);

    let RunState {
        expectations,
        unmatched,
    } = Rc::try_unwrap(state)
        .map(RefCell::into_inner)
        .unwrap_or_else(|shared| shared.borrow().clone());

    let violations: Vec<CountViolation> = expectations
        .iter()
        .filter(|expectation| !expectation.satisfied())
        .map(|expectation| {
            CountViolation::new(
                expectation.event().clone(),
                expectation.count(),
                expectation.call_count(),
            )
        })
        .collect();
    registry.restore(expectations);

    let block_error = block_result.err().map(|error| error.to_string());
    let report = VerdictReport::new(violations, unmatched, block_error);
    tracing::debug!(passed = report.passed(), "expectation run evaluated");
    Ok(report)
}

#[derive(Clone)]
struct RunState {
    expectations: Vec<Expectation>,
    unmatched: Vec<UnmatchedEmission>,
}

impl RunState {
    fn route(&mut self, event: &EventName, args: &[Arg]) {
        for expectation in self
            .expectations
            .iter_mut()
            .filter(|expectation| expectation.event() == event)
        {
            if expectation.accepts(args) {
                expectation.credit();
                tracing::trace!(
                    event = %event,
                    call_count = expectation.call_count(),
                    "emission credited"
                );
                return;
            }
        }
        tracing::warn!(event = %event, "emission matched no expectation");
        self.unmatched.push(UnmatchedEmission::new(event.clone(), args));
    }
}

struct ListenerGuard<'a, M: Emitter> {
    emitter: &'a M,
    installed: Vec<(EventName, ListenerId)>,
}

impl<M: Emitter> Drop for ListenerGuard<'_, M> {
    fn drop(&mut self) {
        for (event, id) in self.installed.drain(..) {
            self.emitter.off(event.as_str(), id);
        }
    }
}
