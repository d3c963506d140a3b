//! Extraction of resolution records from `npm audit --json` output
//!
//! The audit result is kept as untyped JSON: only `actions[0].resolves` is
//! consulted, and every other field rides along untouched.

use serde_json::Value;

/// Pull the resolution records out of a parsed audit result.
///
/// Returns `(all resolutions, non-dev resolutions)`. Degrades to an empty
/// pair when `actions` is missing, when it is an empty list, or when the
/// first action carries no `resolves` key — checked in that order, each
/// check assuming the previous one passed.
pub fn extract_resolutions(result: &Value) -> (Vec<Value>, Vec<Value>) {
    let Some(actions) = result.get("actions").and_then(Value::as_array) else {
        return (Vec::new(), Vec::new());
    };

    let Some(first_action) = actions.first() else {
        return (Vec::new(), Vec::new());
    };

    let Some(resolves) = first_action.get("resolves").and_then(Value::as_array) else {
        return (Vec::new(), Vec::new());
    };

    // A resolution without a boolean `dev` flag counts as production exposure.
    let non_dev = resolves
        .iter()
        .filter(|r| !r.get("dev").and_then(Value::as_bool).unwrap_or(false))
        .cloned()
        .collect();

    (resolves.clone(), non_dev)
}
