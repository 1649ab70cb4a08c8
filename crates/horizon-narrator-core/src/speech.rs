//! Speech output.
//!
//! The narrator produces text; what happens to it is up to a [`SpeechSink`].
//! Two sinks ship with the crate:
//!
//! - [`ConsoleSpeech`] prints each utterance to standard output
//! - [`RecordingSpeech`] keeps utterances in memory, in order
//!
//! Real audio output belongs to the host.

use std::io::Write;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::logging::targets;

/// Default prefix for console output.
pub const DEFAULT_CONSOLE_PREFIX: &str = "---------------- SOUND: ";

/// The output channel for synthesized utterances.
///
/// Sinks are shared process-wide and may be called from the router's
/// serialized context, so they must be `Send + Sync`. Failures to produce
/// sound are the sink's own concern; `speak` has no error channel.
pub trait SpeechSink: Send + Sync {
    /// Output one utterance.
    fn speak(&self, text: &str);
}

impl<S: SpeechSink + ?Sized> SpeechSink for Arc<S> {
    fn speak(&self, text: &str) {
        (**self).speak(text);
    }
}

impl<S: SpeechSink + ?Sized> SpeechSink for &S {
    fn speak(&self, text: &str) {
        (**self).speak(text);
    }
}

/// Forward `text` to `sink` unless it is empty.
pub fn speak(sink: &dyn SpeechSink, text: &str) {
    if text.is_empty() {
        return;
    }
    tracing::trace!(target: targets::SPEECH, text, "speak");
    sink.speak(text);
}

/// A sink that writes utterances to standard output.
#[derive(Debug, Clone)]
pub struct ConsoleSpeech {
    prefix: String,
}

impl ConsoleSpeech {
    /// Create a console sink with the default prefix.
    pub fn new() -> Self {
        Self::with_prefix(DEFAULT_CONSOLE_PREFIX)
    }

    /// Create a console sink with a custom line prefix.
    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// The line prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }
}

impl Default for ConsoleSpeech {
    fn default() -> Self {
        Self::new()
    }
}

impl SpeechSink for ConsoleSpeech {
    fn speak(&self, text: &str) {
        let mut out = std::io::stdout().lock();
        if let Err(err) = writeln!(out, "{}{}", self.prefix, text) {
            tracing::warn!(target: targets::SPEECH, error = %err, "console speech output failed");
        }
    }
}

/// A sink that records every utterance in memory.
///
/// # Example
///
/// ```
/// use horizon_narrator_core::{RecordingSpeech, SpeechSink};
///
/// let speech = RecordingSpeech::new();
/// speech.speak("hello");
/// assert_eq!(speech.utterances(), vec!["hello".to_string()]);
/// ```
#[derive(Debug, Default)]
pub struct RecordingSpeech {
    utterances: Mutex<Vec<String>>,
}

impl RecordingSpeech {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// A copy of everything recorded so far.
    pub fn utterances(&self) -> Vec<String> {
        self.utterances.lock().clone()
    }

    /// Remove and return everything recorded so far.
    pub fn take(&self) -> Vec<String> {
        std::mem::take(&mut *self.utterances.lock())
    }

    /// Number of recorded utterances.
    pub fn len(&self) -> usize {
        self.utterances.lock().len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.utterances.lock().is_empty()
    }

    /// Forget everything recorded so far.
    pub fn clear(&self) {
        self.utterances.lock().clear();
    }
}

impl SpeechSink for RecordingSpeech {
    fn speak(&self, text: &str) {
        self.utterances.lock().push(text.to_string());
    }
}
