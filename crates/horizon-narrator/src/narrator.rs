//! Tree walk and role dispatch.

use std::sync::Arc;

use horizon_narrator_core::logging::{span_names, targets};
use horizon_narrator_core::{
    AccessibleNode, AccessibleNodeExt, AccessibleRole, AccessibleTable, NarratorConfig,
    SpeechSink, StateSet, orientation,
};

use crate::selection::{IgnoreSelection, TableSelectionHandler};

/// Turns accessibility trees into spoken text.
///
/// The narrator walks a tree depth-first in pre-order. Each node is
/// described according to its role; container roles (screens, lists,
/// panels, tables, tree fields, and expanded combo boxes and choices)
/// then read their children. Leaf roles never look at their children.
///
/// Narration has no hidden state: reading the same unchanged tree twice
/// produces the same utterances.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use horizon_narrator::Narrator;
/// use horizon_narrator_core::{AccessibleRole, Element, RecordingSpeech, StateSet};
///
/// let speech = Arc::new(RecordingSpeech::new());
/// let narrator = Narrator::new(speech.clone());
///
/// let screen = Element::new(AccessibleRole::Screen)
///     .with_name("Login")
///     .child(Element::new(AccessibleRole::PushButton).with_name("Sign in").state(StateSet::FOCUSED));
///
/// narrator.narrate(Some(&screen));
/// assert_eq!(speech.utterances(), vec!["Screen Login", "Sign in button focused"]);
/// ```
#[derive(Clone)]
pub struct Narrator {
    speech: Arc<dyn SpeechSink>,
    selection: Arc<dyn TableSelectionHandler>,
    config: NarratorConfig,
}

static_assertions::assert_impl_all!(Narrator: Send, Sync);

/// What reading a single node produces.
///
/// Announcements are spoken before any children are read; deferred
/// text is spoken once after the role has been fully described.
enum Reading<'a> {
    /// Nothing to say about this node.
    Silent,
    /// One utterance, spoken once the node is described.
    Deferred(String),
    /// Spoken immediately, optionally followed by the children.
    Announce { text: String, descend: bool },
    /// Handled by the table reader.
    Table {
        table: &'a dyn AccessibleTable,
        selectable: bool,
    },
}

impl Narrator {
    /// Create a narrator with default configuration.
    pub fn new(speech: Arc<dyn SpeechSink>) -> Self {
        Self::with_config(speech, NarratorConfig::default())
    }

    /// Create a narrator with the given configuration.
    pub fn with_config(speech: Arc<dyn SpeechSink>, config: NarratorConfig) -> Self {
        Self {
            speech,
            selection: Arc::new(IgnoreSelection),
            config,
        }
    }

    /// Set the handler invoked after reading a selectable table.
    pub fn with_selection_handler(mut self, handler: Arc<dyn TableSelectionHandler>) -> Self {
        self.selection = handler;
        self
    }

    /// The configuration.
    pub fn config(&self) -> &NarratorConfig {
        &self.config
    }

    /// The speech sink.
    pub fn speech(&self) -> &dyn SpeechSink {
        &*self.speech
    }

    /// Speak `text`, unless it is empty.
    pub fn speak(&self, text: &str) {
        horizon_narrator_core::speak(&*self.speech, text);
    }

    /// Describe `node` and, for container roles, its descendants.
    ///
    /// An absent node is not an error; nothing is spoken.
    pub fn narrate(&self, node: Option<&dyn AccessibleNode>) {
        let Some(node) = node else {
            return;
        };

        let _span = tracing::trace_span!(
            target: targets::NARRATOR,
            span_names::NARRATE,
            role = %node.role()
        )
        .entered();

        self.read_node(node);
    }

    /// Read every child of `node` in order, honouring the child limit.
    pub fn narrate_children(&self, node: &dyn AccessibleNode) {
        let count = self.config.children_to_read(node.child_count());
        for index in 0..count {
            if let Some(child) = node.child_at(index) {
                self.read_node(child);
            }
        }
    }

    pub(crate) fn read_node(&self, node: &dyn AccessibleNode) {
        tracing::trace!(
            target: targets::NARRATOR,
            role = %node.role(),
            children = node.child_count(),
            "reading node"
        );

        match self.reading(node) {
            Reading::Silent => {}
            Reading::Deferred(text) => self.speak(&text),
            Reading::Announce { text, descend } => {
                self.speak(&text);
                if descend {
                    self.narrate_children(node);
                }
            }
            Reading::Table { table, selectable } => {
                self.read_table(node, table);
                if selectable {
                    self.selection.handle_selection(table, &*self.speech);
                }
            }
        }
    }

    /// Describe a single node by role.
    fn reading<'a>(&self, node: &'a dyn AccessibleNode) -> Reading<'a> {
        let name = node.name_or_empty();
        let states = node.states();
        let busy = states.contains(StateSet::BUSY);
        let expanded = states.contains(StateSet::EXPANDED);

        let focused = flag_text(states, StateSet::FOCUSED, " focused");
        let expanded_text = flag_text(states, StateSet::EXPANDED, " expanded");
        let selected = flag_text(states, StateSet::SELECTED, " selected");

        match node.role() {
            AccessibleRole::Screen => {
                if busy {
                    announce(format!("Screen {name} loading"), false)
                } else {
                    announce(format!("Screen {name}"), true)
                }
            }

            AccessibleRole::TextField => {
                let Some(view) = node.as_text() else {
                    return Reading::Silent;
                };
                let current = view.whole_text().unwrap_or_default();
                let current = current.trim();
                let content = if current.is_empty() {
                    " empty".to_string()
                } else {
                    format!(" with text {current}")
                };
                let editable = flag_text(states, StateSet::EDITABLE, " editable");
                Reading::Deferred(format!("{name} text field {content}{focused}{editable}"))
            }

            AccessibleRole::Label => {
                let focusable = flag_text(states, StateSet::FOCUSABLE, " focusable");
                Reading::Deferred(format!("{name}{focusable}{focused}{selected}{expanded_text}"))
            }

            AccessibleRole::AppIcon => Reading::Deferred(format!("{name}application icon{focused}")),

            AccessibleRole::Icon => Reading::Deferred(format!("{name} icon {focused}")),

            AccessibleRole::Date => {
                let mut text = format!("{name} date field {selected}");
                if let Some(view) = node.as_text() {
                    text.push_str(" with current value ");
                    text.push_str(&view.whole_text().unwrap_or_default());
                }
                Reading::Deferred(text)
            }

            AccessibleRole::List => {
                let orientation = orientation(states);
                if busy {
                    announce(format!("{orientation}list {name} loading"), false)
                } else {
                    let multi = flag_text(states, StateSet::MULTI_SELECTABLE, " multi selectable");
                    announce(
                        format!(
                            "{orientation}{name}list with {} elements{focused}{multi}",
                            node.child_count()
                        ),
                        true,
                    )
                }
            }

            AccessibleRole::Panel => {
                if busy {
                    announce(format!("panel {name} loading"), false)
                } else {
                    announce(format!("{name} panel with {} items", node.child_count()), true)
                }
            }

            AccessibleRole::Gauge => {
                if busy {
                    announce(format!("gauge {name} loading"), false)
                } else {
                    match node.as_value() {
                        Some(value) => announce(
                            format!("{name} gauge with value {}", value.current_value()),
                            false,
                        ),
                        None => Reading::Silent,
                    }
                }
            }

            AccessibleRole::PushButton => Reading::Deferred(format!("{name} button{focused}")),

            AccessibleRole::MenuItem => Reading::Deferred(format!("{name} menu item {selected}")),

            AccessibleRole::CheckBox => {
                let checked = if states.contains(StateSet::CHECKED) {
                    " checked"
                } else {
                    " unchecked"
                };
                Reading::Deferred(format!("{name} check box {focused}{checked}"))
            }

            AccessibleRole::Table => {
                if busy {
                    announce(format!("table {name} loading"), false)
                } else {
                    match node.as_table() {
                        Some(table) => Reading::Table {
                            table,
                            selectable: states.contains(StateSet::SELECTABLE),
                        },
                        None => Reading::Silent,
                    }
                }
            }

            AccessibleRole::Bitmap => announce(format!("{name} image"), false),

            AccessibleRole::Combo => {
                let mut text = format!("{name} combobox {expanded_text}");
                if expanded {
                    announce(text, true)
                } else {
                    let current = whole_text(node);
                    if current.is_empty() {
                        text.push_str(" empty");
                    } else {
                        text.push_str(" current value ");
                        text.push_str(&current);
                    }
                    Reading::Deferred(text)
                }
            }

            AccessibleRole::Hyperlink => Reading::Deferred(format!("{name} hyperlink ")),

            AccessibleRole::Separator => Reading::Deferred("separator".to_string()),

            AccessibleRole::TreeField => {
                let expandable = flag_text(states, StateSet::EXPANDABLE, " expandable");
                let collapsed = flag_text(states, StateSet::COLLAPSED, " collapsed");
                announce(
                    format!("{name} tree field{expandable}{collapsed}{expanded_text}{selected}"),
                    true,
                )
            }

            AccessibleRole::Choice => {
                let mut text = format!(
                    "{name} choice with {} elements{focused}{expanded_text}",
                    node.child_count()
                );
                if expanded {
                    announce(text, true)
                } else {
                    if let Some(current) = node.selection_at(0) {
                        text.push_str(" current value ");
                        text.push_str(&current.name_or_empty());
                    }
                    Reading::Deferred(text)
                }
            }

            // Described by the event handlers instead.
            AccessibleRole::Dialog
            | AccessibleRole::Menu
            | AccessibleRole::RadioButton
            | AccessibleRole::DateField
            | AccessibleRole::Symbol
            | AccessibleRole::Unknown => Reading::Silent,
        }
    }
}

impl std::fmt::Debug for Narrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Narrator")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

fn announce(text: String, descend: bool) -> Reading<'static> {
    Reading::Announce { text, descend }
}

fn flag_text(states: StateSet, flag: StateSet, text: &'static str) -> &'static str {
    if states.contains(flag) { text } else { "" }
}

/// The node's whole text, or empty if it has no text view.
fn whole_text(node: &dyn AccessibleNode) -> String {
    node.as_text()
        .and_then(|view| view.whole_text())
        .unwrap_or_default()
}
