//! Panel warnings with colored terminal output.
//!
//! Classification runs on every UI update tick, so a value the toolkit
//! cannot fully decompose would otherwise be reported hundreds of times.
//! Warnings are deduplicated: each unique message prints once.

use std::collections::HashSet;
use std::sync::{LazyLock, Mutex};

/// ANSI color codes for terminal output
const YELLOW: &str = "\x1b[33m";
const RESET: &str = "\x1b[0m";

/// Messages already printed, for deduplication.
static WARNED: LazyLock<Mutex<HashSet<String>>> = LazyLock::new(|| Mutex::new(HashSet::new()));

/// Warn about an unsupported value shape (prints once per unique message)
///
/// # Example
/// ```ignore
/// warn_once("Values", "unsupported color space 'oklch' in oklch(70% 0.1 50deg)");
/// ```
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn warn_once(component: &str, message: &str) {
    let first_time = WARNED
        .lock()
        .unwrap()
        .insert(format!("[{component}] {message}"));

    if first_time {
        eprintln!("{YELLOW}[TweakCSS {component}] ⚠ {message}{RESET}");
    }
}

/// Clear all recorded warnings (call when the inspected page changes)
///
/// # Panics
/// Panics if the global warning set mutex is poisoned.
pub fn clear_warnings() {
    WARNED.lock().unwrap().clear();
}
