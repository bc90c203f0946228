use std::rc::Rc;

use crate::{pattern::Arg, ListenerId};

/// Callback invoked for every emission of a subscribed event.
pub type Listener = Rc<dyn Fn(&[Arg])>;

/// Capability contract for objects that can be observed by an expectation
/// run: subscribe, unsubscribe, publish.
///
/// Any type implementing this trait is accepted; there is no further
/// capability probing at run time. Two requirements are load-bearing:
///
/// - `emit` must invoke every listener subscribed to the event name
///   *synchronously, on the calling thread*, passing the arguments
///   positionally. The engine's counters are unguarded by design; an
///   emitter that defers dispatch would race the evaluation step and is
///   outside this contract.
/// - An event name may carry many listeners at once. The expectation run
///   adds its own alongside whatever the host installed and removes exactly
///   those on teardown, leaving the emitter as it found it.
///
/// The expectation engine only ever subscribes and unsubscribes; it never
/// publishes events itself. [`EventEmitter`](crate::EventEmitter) is a
/// ready-made implementation.
pub trait Emitter {
    /// Subscribes `listener` to `event`. Returns an id for later removal.
    fn on(&self, event: &str, listener: Listener) -> ListenerId;

    /// Removes a previously installed listener. Returns false when the id
    /// is not installed for `event`.
    fn off(&self, event: &str, id: ListenerId) -> bool;

    /// Publishes `event`, invoking every subscribed listener synchronously
    /// in subscription order.
    fn emit(&self, event: &str, args: &[Arg]);
}
