//! Debug printer control for stubdoc.
//!
//! A thread-safe atomic flag gates debug output on STDERR, toggled from the
//! `STUBDOC_DEBUG` environment variable (enabled automatically under
//! `cfg(test)`).

use std::env;
use std::sync::atomic::{AtomicBool, Ordering};

static DEBUG_ENABLED: AtomicBool = AtomicBool::new(false);

/// Initialise the debug flag from the `STUBDOC_DEBUG` environment variable.
///
/// `"0"`, `"false"`, `"no"` and `"off"` disable it; any other value enables
/// it. When unset, defaults to enabled in tests and disabled otherwise.
pub fn init_from_env() {
    let enabled = match env::var("STUBDOC_DEBUG") {
        Ok(val) => {
            let val = val.trim();
            !(val == "0"
                || val.eq_ignore_ascii_case("false")
                || val.eq_ignore_ascii_case("no")
                || val.eq_ignore_ascii_case("off"))
        }
        Err(_) => cfg!(test),
    };
    set_debug(enabled);
}

/// Enable or disable debug output programmatically.
pub fn set_debug(enabled: bool) {
    DEBUG_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Check whether debug output is enabled.
pub fn is_enabled() -> bool {
    DEBUG_ENABLED.load(Ordering::Relaxed)
}

/// Print to STDERR when debug output is enabled.
#[macro_export]
macro_rules! stubdoc_debug {
    ($($arg:tt)*) => {
        if $crate::debug::is_enabled() {
            eprintln!($($arg)*);
        }
    };
}

#[ctor::ctor]
fn init_debug() {
    init_from_env();
}
