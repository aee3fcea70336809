//! Diagnostic warnings with colored terminal output.
//!
//! Provides deduplication to avoid spamming the same warning multiple times.
//! Meant for front ends; the parser itself reports leniencies through its
//! tracer and never prints.

use std::collections::HashSet;
use std::sync::{Mutex, PoisonError};

use owo_colors::OwoColorize;

/// Global set of warnings we've already printed (to deduplicate)
static WARNED: Mutex<Option<HashSet<String>>> = Mutex::new(None);

/// Record a warning and report whether it was new.
fn record(key: String) -> bool {
    WARNED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .get_or_insert_with(HashSet::new)
        .insert(key)
}

/// Warn about a lenient parsing decision (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("HTML", "</b> closed the open <i> element");
/// ```
pub fn warn_once(component: &str, message: &str) {
    if record(format!("[{component}] {message}")) {
        eprintln!("{}", format!("[Sprig {component}] ⚠ {message}").yellow());
    }
}

/// Clear all recorded warnings (call before parsing an unrelated input)
pub fn clear_warnings() {
    let mut guard = WARNED.lock().unwrap_or_else(PoisonError::into_inner);
    if let Some(set) = guard.as_mut() {
        set.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // One test only: the warning set is process-wide and tests run in parallel.
    #[test]
    fn test_deduplication_and_clear() {
        assert!(record("[Test] a".to_string()));
        assert!(!record("[Test] a".to_string()));
        assert!(record("[Test] b".to_string()));

        warn_once("Test", "printed once");
        assert!(!record("[Test] printed once".to_string()));

        clear_warnings();
        assert!(record("[Test] a".to_string()));
    }
}
