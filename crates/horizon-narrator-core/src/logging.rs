//! Logging facilities for Horizon Narrator.
//!
//! Horizon Narrator uses the `tracing` crate for instrumentation and never
//! installs a subscriber itself. To see logs, install one in your
//! application:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("horizon_narrator=debug")
//!     .init();
//! ```
//!
//! Each subsystem logs under its own target (see [`targets`]), so the
//! per-node trace output of a large tree walk can be filtered out while
//! keeping router diagnostics.

/// Span names used throughout Horizon Narrator for tracing.
pub mod span_names {
    /// One full narration pass starting at a root node.
    pub const NARRATE: &str = "horizon_narrator::narrate";
    /// Delivery of one accessible event through the router.
    pub const ROUTE: &str = "horizon_narrator::route";
}

/// Target names for log filtering.
pub mod targets {
    /// Core data model target.
    pub const CORE: &str = "horizon_narrator_core";
    /// Speech sink target.
    pub const SPEECH: &str = "horizon_narrator_core::speech";
    /// Configuration target.
    pub const CONFIG: &str = "horizon_narrator_core::config";
    /// Tree walk target.
    pub const NARRATOR: &str = "horizon_narrator::narrator";
    /// Event router target.
    pub const ROUTER: &str = "horizon_narrator::router";
    /// Queued event delivery target.
    pub const QUEUE: &str = "horizon_narrator::queue";
}

/// Macros for common tracing patterns.
///
/// These are thin wrappers around the `tracing` macros with a fixed target.
#[macro_export]
macro_rules! narrator_trace {
    ($($arg:tt)*) => {
        tracing::trace!(target: $crate::logging::targets::CORE, $($arg)*)
    };
}

#[macro_export]
macro_rules! narrator_debug {
    ($($arg:tt)*) => {
        tracing::debug!(target: $crate::logging::targets::CORE, $($arg)*)
    };
}

#[macro_export]
macro_rules! narrator_warn {
    ($($arg:tt)*) => {
        tracing::warn!(target: $crate::logging::targets::CORE, $($arg)*)
    };
}
