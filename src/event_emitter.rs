use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

use crate::{pattern::Arg, Emitter, EventName, Listener, ListenerId};

/// A minimal synchronous pub/sub emitter.
///
/// Listeners are invoked in subscription order, on the calling thread,
/// before `emit` returns. The listener table is snapshotted at the start of
/// each emission, so a listener may subscribe, unsubscribe, or emit again
/// without disturbing the dispatch in progress; listeners added during an
/// emission are not invoked for it.
///
/// ```
/// use kiku::{args, Emitter, EventEmitter};
/// use std::{cell::Cell, rc::Rc};
///
/// let emitter = EventEmitter::new();
/// let hits = Rc::new(Cell::new(0));
/// let id = emitter.on("tick", Rc::new({
///     let hits = Rc::clone(&hits);
///     move |_| hits.set(hits.get() + 1)
/// }));
///
/// emitter.emit("tick", &args![]);
/// emitter.emit("tick", &args![]);
/// assert_eq!(hits.get(), 2);
///
/// emitter.off("tick", id);
/// emitter.emit("tick", &args![]);
/// assert_eq!(hits.get(), 2);
/// ```
#[derive(Default)]
pub struct EventEmitter {
    listeners: RefCell<HashMap<EventName, Vec<(ListenerId, Listener)>>>,
}

impl EventEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of listeners currently installed for `event`.
    pub fn listener_count(&self, event: &str) -> usize {
        self.listeners
            .borrow()
            .get(event)
            .map_or(0, |listeners| listeners.len())
    }

    /// Total number of listeners across all events.
    pub fn total_listeners(&self) -> usize {
        self.listeners
            .borrow()
            .values()
            .map(|listeners| listeners.len())
            .sum()
    }
}

impl Emitter for EventEmitter {
    fn on(&self, event: &str, listener: Listener) -> ListenerId {
        let id = ListenerId::new();
        self.listeners
            .borrow_mut()
            .entry(EventName::from(event))
            .or_default()
            .push((id, listener));
        tracing::trace!(event, listener_id = %id, "listener installed");
        id
    }

    fn off(&self, event: &str, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let Some(installed) = listeners.get_mut(event) else {
            return false;
        };
        let before = installed.len();
        installed.retain(|(installed_id, _)| *installed_id != id);
        let removed = installed.len() != before;
        if installed.is_empty() {
            listeners.remove(event);
        }
        if removed {
            tracing::trace!(event, listener_id = %id, "listener removed");
        }
        removed
    }

    fn emit(&self, event: &str, args: &[Arg]) {
        // Snapshot so the borrow is released before any listener runs.
        let snapshot: Vec<Listener> = self
            .listeners
            .borrow()
            .get(event)
            .map(|listeners| listeners.iter().map(|(_, l)| Rc::clone(l)).collect())
            .unwrap_or_default();
        tracing::trace!(event, listeners = snapshot.len(), "emit");
        for listener in snapshot {
            listener(args);
        }
    }
}

impl fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventEmitter")
            .field("listeners", &self.total_listeners())
            .finish_non_exhaustive()
    }
}
