//! Accessible events delivered by the host.

use horizon_narrator_core::{
    AccessibleNode, AccessibleNodeExt, DateSubfield, StateSet, has_transitioned_from_state,
    has_transitioned_to_state,
};

/// The kind of change an accessible event reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    /// The node's state flags changed.
    StateChanged,
    /// The node's text changed.
    TextChanged,
    /// The node's value changed.
    ValueChanged,
    /// A child was added, removed or replaced.
    ChildChanged,
    /// The selection among the node's children changed.
    SelectionChanged,
    /// A host-specific event code.
    Other(i32),
}

/// The old or new value carried by an accessible event.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EventValue {
    #[default]
    None,
    State(StateSet),
    Text(String),
    Value(i32),
    Subfield(DateSubfield),
}

impl EventValue {
    /// The state set carried by this value, or no states.
    pub fn as_state(&self) -> StateSet {
        match self {
            EventValue::State(states) => *states,
            _ => StateSet::NONE,
        }
    }

    /// The text carried by this value, if any.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            EventValue::Text(text) => Some(text),
            _ => None,
        }
    }
}

impl From<StateSet> for EventValue {
    fn from(states: StateSet) -> Self {
        EventValue::State(states)
    }
}

impl From<String> for EventValue {
    fn from(text: String) -> Self {
        EventValue::Text(text)
    }
}

impl From<&str> for EventValue {
    fn from(text: &str) -> Self {
        EventValue::Text(text.to_string())
    }
}

impl From<i32> for EventValue {
    fn from(value: i32) -> Self {
        EventValue::Value(value)
    }
}

impl From<DateSubfield> for EventValue {
    fn from(subfield: DateSubfield) -> Self {
        EventValue::Subfield(subfield)
    }
}

/// An event as seen by a role handler.
///
/// The old and new state sets are pre-extracted; they are empty unless the
/// corresponding value is [`EventValue::State`].
#[derive(Clone, Copy)]
pub struct AccessibleEvent<'a> {
    pub kind: EventKind,
    pub old_value: &'a EventValue,
    pub new_value: &'a EventValue,
    pub old_state: StateSet,
    pub new_state: StateSet,
    pub node: &'a dyn AccessibleNode,
}

impl<'a> AccessibleEvent<'a> {
    /// Build an event, extracting state sets from the values.
    pub fn new(
        kind: EventKind,
        old_value: &'a EventValue,
        new_value: &'a EventValue,
        node: &'a dyn AccessibleNode,
    ) -> Self {
        Self {
            kind,
            old_value,
            new_value,
            old_state: old_value.as_state(),
            new_state: new_value.as_state(),
            node,
        }
    }

    /// Whether `flag` was switched on by this event.
    pub fn gained(&self, flag: StateSet) -> bool {
        has_transitioned_to_state(self.old_state, self.new_state, flag)
    }

    /// Whether `flag` was switched off by this event.
    pub fn lost(&self, flag: StateSet) -> bool {
        has_transitioned_from_state(self.old_state, self.new_state, flag)
    }

    /// The node's name, empty if it has none.
    pub fn name(&self) -> String {
        self.node.name_or_empty()
    }
}

impl std::fmt::Debug for AccessibleEvent<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessibleEvent")
            .field("kind", &self.kind)
            .field("old_value", self.old_value)
            .field("new_value", self.new_value)
            .field("role", &self.node.role())
            .finish()
    }
}
