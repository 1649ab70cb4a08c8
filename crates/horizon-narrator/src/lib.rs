//! Horizon Narrator - screen-reader narration for accessibility trees.
//!
//! The crate turns an accessibility tree into spoken text and reacts to
//! accessibility events raised by a host UI:
//!
//! - [`Narrator`] walks a tree depth-first and describes every node by role
//! - [`ScreenReader`] routes events to per-role [`ScreenReaderHandler`] hooks
//! - [`EventQueue`] runs a router on its own thread
//!
//! The data model (roles, states, nodes, speech sinks) lives in
//! [`horizon_narrator_core`]; the [`prelude`] re-exports the parts hosts use.
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use horizon_narrator::prelude::*;
//!
//! let speech = Arc::new(RecordingSpeech::new());
//! let narrator = Narrator::new(speech.clone());
//!
//! let settings = Element::new(AccessibleRole::Panel)
//!     .with_name("Settings")
//!     .child(Element::new(AccessibleRole::CheckBox).with_name("Dark mode"));
//!
//! narrator.narrate(Some(&settings));
//! assert_eq!(
//!     speech.utterances(),
//!     vec!["Settings panel with 1 items", "Dark mode check box  unchecked"]
//! );
//! ```

mod event;
mod handler;
mod narrator;
mod queue;
mod router;
mod selection;
mod table;

pub use event::{AccessibleEvent, EventKind, EventValue};
pub use handler::{
    DefaultHandler, ScreenReaderHandler, announce_expansion, announce_on_focus,
    announce_when_ready,
};
pub use narrator::Narrator;
pub use queue::EventQueue;
pub use router::ScreenReader;
pub use selection::{IgnoreSelection, SelectedCellAnnouncer, TableSelectionHandler};

/// Common imports for hosts.
pub mod prelude {
    pub use horizon_narrator_core::{
        AccessibleNode, AccessibleNodeExt, AccessibleRole, AccessibleTable, AccessibleText,
        AccessibleValue, ConsoleSpeech, Element, NarratorConfig, NarratorError,
        RecordingSpeech, SpeechSink, StateSet, TableData,
    };

    pub use crate::{
        AccessibleEvent, EventKind, EventQueue, EventValue, Narrator, ScreenReader,
        ScreenReaderHandler,
    };
}
