//! Narrator configuration.
//!
//! Configuration is plain TOML; every key is optional.
//!
//! ```toml
//! # Read at most ten children of any container.
//! max_children = 10
//! log_unsupported_roles = false
//! console_prefix = "> "
//! queue_capacity = 64
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::{NarratorError, Result};
use crate::logging::targets;
use crate::speech::DEFAULT_CONSOLE_PREFIX;

/// Default capacity of the event queue.
pub const DEFAULT_QUEUE_CAPACITY: usize = 256;

/// Settings shared by the narrator, router and event queue.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NarratorConfig {
    /// Upper bound on the children read from any one container.
    ///
    /// Screens and menus with many rarely used components can be trimmed
    /// with this. The container's own utterance still reports the full
    /// child count. `None` reads every child.
    pub max_children: Option<usize>,
    /// Whether the router logs events for roles it does not handle.
    pub log_unsupported_roles: bool,
    /// Line prefix used by the console speech sink.
    pub console_prefix: String,
    /// Capacity of the event queue.
    pub queue_capacity: usize,
}

impl Default for NarratorConfig {
    fn default() -> Self {
        Self {
            max_children: None,
            log_unsupported_roles: true,
            console_prefix: DEFAULT_CONSOLE_PREFIX.to_string(),
            queue_capacity: DEFAULT_QUEUE_CAPACITY,
        }
    }
}

impl NarratorConfig {
    /// Parse configuration from a TOML string.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        toml::from_str(source).map_err(NarratorError::Config)
    }

    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source =
            std::fs::read_to_string(path).map_err(|err| NarratorError::io(path, err))?;
        let config = Self::from_toml_str(&source)?;
        tracing::debug!(target: targets::CONFIG, path = %path.display(), ?config, "loaded narrator config");
        Ok(config)
    }

    /// Set the child limit.
    pub fn with_max_children(mut self, limit: usize) -> Self {
        self.max_children = Some(limit);
        self
    }

    /// Set whether unsupported roles are logged.
    pub fn with_unsupported_role_logging(mut self, enabled: bool) -> Self {
        self.log_unsupported_roles = enabled;
        self
    }

    /// Set the console prefix.
    pub fn with_console_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.console_prefix = prefix.into();
        self
    }

    /// Set the event queue capacity.
    pub fn with_queue_capacity(mut self, capacity: usize) -> Self {
        self.queue_capacity = capacity;
        self
    }

    /// How many of `child_count` children a container should read.
    pub fn children_to_read(&self, child_count: usize) -> usize {
        match self.max_children {
            Some(limit) => child_count.min(limit),
            None => child_count,
        }
    }
}
