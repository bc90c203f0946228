use serde_json::Value;

/// Returns true when `actual` contains at least the shape described by
/// `pattern`.
///
/// This is a subset match: the pattern describes the minimum shape the
/// actual value must have, never exhaustive equality.
///
/// - An array pattern requires an array at least as long, each pattern
///   element matching the actual element at the same index. The pattern may
///   be a strict prefix; trailing actual elements are ignored.
/// - An object pattern requires an object carrying every pattern key, each
///   value matching recursively. Keys absent from the pattern are ignored.
/// - Any other pattern (scalar, including `null`) compares by value.
///
/// ```
/// use kiku::has_structure;
/// use serde_json::json;
///
/// assert!(has_structure(&json!({"a": 1, "b": 2}), &json!({"a": 1})));
/// assert!(has_structure(&json!([1, 2, 3]), &json!([1, 2])));
/// assert!(!has_structure(&json!({"a": 1}), &json!({"a": 2})));
/// ```
pub fn has_structure(actual: &Value, pattern: &Value) -> bool {
    match pattern {
        Value::Array(pattern) => match actual {
            Value::Array(actual) => {
                pattern.len() <= actual.len()
                    && pattern
                        .iter()
                        .zip(actual)
                        .all(|(p, a)| has_structure(a, p))
            }
            _ => false,
        },
        Value::Object(pattern) => match actual {
            Value::Object(actual) => pattern
                .iter()
                .all(|(key, p)| actual.get(key).is_some_and(|a| has_structure(a, p))),
            _ => false,
        },
        scalar => actual == scalar,
    }
}
