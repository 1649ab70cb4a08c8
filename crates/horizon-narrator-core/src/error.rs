//! Error types for Horizon Narrator.
//!
//! Narration itself never fails: a missing node or capability simply means
//! nothing is spoken. Errors only arise at the edges, when loading
//! configuration or tree snapshots and when feeding the event queue.

use std::path::PathBuf;

/// Result type alias for narrator operations.
pub type Result<T> = std::result::Result<T, NarratorError>;

/// Errors that can occur around narration.
#[derive(Debug, thiserror::Error)]
pub enum NarratorError {
    /// File I/O error.
    #[error("Failed to read '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration parsing error.
    #[error("Invalid narrator configuration: {0}")]
    Config(#[source] toml::de::Error),

    /// A JSON tree snapshot could not be parsed.
    #[error("Invalid JSON accessibility tree: {0}")]
    TreeJson(#[source] serde_json::Error),

    /// A TOML tree snapshot could not be parsed.
    #[error("Invalid TOML accessibility tree: {0}")]
    TreeToml(#[source] toml::de::Error),

    /// The event queue has been stopped.
    #[error("Event queue has been stopped")]
    QueueClosed,

    /// The event queue is at capacity.
    #[error("Event queue is full (capacity {capacity})")]
    QueueFull { capacity: usize },

    /// The queue's worker thread could not be started.
    #[error("Failed to spawn narrator worker thread: {0}")]
    WorkerSpawn(#[source] std::io::Error),
}

impl NarratorError {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = NarratorError::io(
            "narrator.toml",
            std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        );
        assert_eq!(err.to_string(), "Failed to read 'narrator.toml': missing");

        assert_eq!(
            NarratorError::QueueFull { capacity: 4 }.to_string(),
            "Event queue is full (capacity 4)"
        );
        assert_eq!(NarratorError::QueueClosed.to_string(), "Event queue has been stopped");
    }
}
