//! Cross-platform logging.
//!
//! The `log_*!` macros format once and hand the message to the backend for
//! the current target: `web_sys::console` in the browser, `tracing` elsewhere.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Debug,
    Info,
    Warn,
    Error,
}

#[cfg(target_arch = "wasm32")]
pub fn log_impl(level: Level, msg: &str) {
    let value = wasm_bindgen::JsValue::from_str(msg);
    match level {
        Level::Debug => web_sys::console::debug_1(&value),
        Level::Info => web_sys::console::log_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Error => web_sys::console::error_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn log_impl(level: Level, msg: &str) {
    match level {
        Level::Debug => tracing::debug!(target: "ewd_dioxus", "{}", msg),
        Level::Info => tracing::info!(target: "ewd_dioxus", "{}", msg),
        Level::Warn => tracing::warn!(target: "ewd_dioxus", "{}", msg),
        Level::Error => tracing::error!(target: "ewd_dioxus", "{}", msg),
    }
}

#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        $crate::logging::log_impl($crate::logging::Level::Debug, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        $crate::logging::log_impl($crate::logging::Level::Info, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        $crate::logging::log_impl($crate::logging::Level::Warn, &format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        $crate::logging::log_impl($crate::logging::Level::Error, &format!($($arg)*))
    };
}
