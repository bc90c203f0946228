//! Macros for ergonomic argument lists.

/// Builds a `Vec<`[`Arg`](crate::Arg)`>` from `json!`-style literals.
///
/// Each element may be any literal the [`json!`](crate::json) macro
/// accepts, including nested objects and arrays. Use it both for emissions
/// and for positional patterns:
///
/// ```
/// use kiku::{args, Emitter, EventEmitter};
///
/// let emitter = EventEmitter::new();
/// emitter.emit("saved", &args![7, "draft", { "tags": ["a", "b"] }]);
/// ```
#[macro_export]
macro_rules! args {
    () => {
        ::std::vec::Vec::<$crate::Arg>::new()
    };
    ($($value:tt),+ $(,)?) => {
        ::std::vec![$(::std::rc::Rc::new($crate::json!($value))),+]
    };
}
