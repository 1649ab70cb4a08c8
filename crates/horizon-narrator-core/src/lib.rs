//! Core data model for Horizon Narrator.
//!
//! This crate provides the pieces a screen reader and its host share:
//!
//! - **Roles and states**: [`AccessibleRole`] and the [`StateSet`] bitset
//! - **Node model**: the [`AccessibleNode`] trait with optional text, table
//!   and value views
//! - **State transitions**: helpers that compare old and new state sets
//! - **Speech**: the [`SpeechSink`] output channel with console and
//!   recording implementations
//! - **Element trees**: an owned [`Element`] tree for hosts that snapshot
//!   their widgets
//! - **Configuration** and **errors**
//!
//! # Example
//!
//! ```
//! use horizon_narrator_core::{
//!     has_transitioned_to_state, AccessibleNode, AccessibleRole, Element, StateSet,
//! };
//!
//! let before = Element::new(AccessibleRole::CheckBox).with_name("Sync");
//! let after = before.clone().state(StateSet::CHECKED);
//!
//! assert!(has_transitioned_to_state(
//!     before.states(),
//!     after.states(),
//!     StateSet::CHECKED,
//! ));
//! ```

mod config;
mod element;
mod error;
pub mod logging;
mod node;
mod role;
mod speech;
mod state;
mod transition;

pub use config::{DEFAULT_QUEUE_CAPACITY, NarratorConfig};
pub use element::{Element, TableData, TextContent, ValueRange};
pub use error::{NarratorError, Result};
pub use node::{
    AccessibleNode, AccessibleNodeExt, AccessibleTable, AccessibleText, AccessibleValue, Children,
};
pub use role::AccessibleRole;
pub use speech::{ConsoleSpeech, DEFAULT_CONSOLE_PREFIX, RecordingSpeech, SpeechSink, speak};
pub use state::{StateFlag, StateSet};
pub use transition::{
    DateSubfield, has_transitioned_from_state, has_transitioned_to_state, orientation,
};
