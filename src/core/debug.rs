//! Lightweight debug logging gated by QUADSOLVE_DEBUG=1 (or `--debug`).
use std::sync::OnceLock;

static ENABLED: OnceLock<bool> = OnceLock::new();

pub fn is_enabled() -> bool {
    *ENABLED.get_or_init(|| std::env::var("QUADSOLVE_DEBUG").ok().as_deref() == Some("1"))
}

/// Force debug output on. Has no effect once the flag was already read.
pub fn enable() {
    let _ = ENABLED.set(true);
}

#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {{
        if $crate::core::debug::is_enabled() { eprintln!("[quadsolve] {}", format!($($arg)*)); }
    }};
}
