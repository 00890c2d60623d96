//! Internal logging shims.
//!
//! Both macros compile to nothing unless the `tracing` feature is enabled, so
//! call sites never need their own `#[cfg]`.

/// Emits a `trace`-level event describing a link topology change.
macro_rules! link_trace {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::trace!($($arg)*);
    };
}

/// Emits a `debug`-level event for a suspicious but harmless call.
macro_rules! link_debug {
    ($($arg:tt)*) => {
        #[cfg(feature = "tracing")]
        ::tracing::debug!($($arg)*);
    };
}
