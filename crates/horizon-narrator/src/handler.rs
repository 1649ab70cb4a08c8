//! Per-role reactions to accessible events.
//!
//! The router calls exactly one hook of a [`ScreenReaderHandler`] per event,
//! chosen by the node's role. Every hook has a default body, so a host only
//! overrides the roles it wants to treat differently:
//!
//! ```
//! use horizon_narrator::{AccessibleEvent, Narrator, ScreenReaderHandler};
//!
//! struct QuietButtons;
//!
//! impl ScreenReaderHandler for QuietButtons {
//!     /// Narrates the button when it gains focus.
//!     fn handle_push_button(&self, _narrator: &Narrator, _event: &AccessibleEvent<'_>) {}
//! }
//! ```

use horizon_narrator_core::StateSet;

use crate::event::{AccessibleEvent, EventKind, EventValue};
use crate::narrator::Narrator;

/// Reacts to accessible events, one hook per role.
pub trait ScreenReaderHandler: Send + Sync {
    /// Narrates the icon when it gains focus.
    fn handle_app_icon(&self, narrator: &Narrator, event: &AccessibleEvent<'_>) {
        announce_on_focus(narrator, event);
    }

    /// Narrates the icon when it gains focus.
    fn handle_icon(&self, narrator: &Narrator, event: &AccessibleEvent<'_>) {
        announce_on_focus(narrator, event);
    }

    /// Speaks `"checked"` or `"unchecked"` when the box is toggled.
    fn handle_check_box(&self, narrator: &Narrator, event: &AccessibleEvent<'_>) {
        if event.gained(StateSet::CHECKED) {
            narrator.speak("checked");
        } else if event.lost(StateSet::CHECKED) {
            narrator.speak("unchecked");
        } else {
            announce_on_focus(narrator, event);
        }
    }

    /// Reads the options on expansion; names the choice on collapse.
    fn handle_choice(&self, narrator: &Narrator, event: &AccessibleEvent<'_>) {
        announce_expansion(narrator, event);
    }

    /// Reads the options on expansion; names the combo box on collapse.
    fn handle_combo(&self, narrator: &Narrator, event: &AccessibleEvent<'_>) {
        announce_expansion(narrator, event);
    }

    /// Narrates the date when it gains focus.
    fn handle_date(&self, narrator: &Narrator, event: &AccessibleEvent<'_>) {
        announce_on_focus(narrator, event);
    }

    /// Speaks the subfield the cursor moved to, or the field itself on focus.
    fn handle_date_field(&self, narrator: &Narrator, event: &AccessibleEvent<'_>) {
        if let (EventKind::ValueChanged, EventValue::Subfield(subfield)) =
            (event.kind, event.new_value)
        {
            narrator.speak(subfield.description());
        } else if event.gained(StateSet::FOCUSED) {
            let mut text = format!("{} date field", event.name());
            if let Some(value) = event.node.as_text().and_then(|t| t.whole_text()) {
                text.push(' ');
                text.push_str(&value);
            }
            narrator.speak(&text);
        }
    }

    /// Speaks the dialog title, then reads its content.
    fn handle_dialog(&self, narrator: &Narrator, event: &AccessibleEvent<'_>) {
        if event.gained(StateSet::FOCUSED) || event.kind == EventKind::ChildChanged {
            narrator.speak(&format!("Dialog {}", event.name()));
            narrator.narrate_children(event.node);
        }
    }

    /// Narrates the label when it gains focus.
    fn handle_label(&self, narrator: &Narrator, event: &AccessibleEvent<'_>) {
        announce_on_focus(narrator, event);
    }

    /// Reads the list once loaded, and the newly selected item.
    fn handle_list(&self, narrator: &Narrator, event: &AccessibleEvent<'_>) {
        if event.kind == EventKind::SelectionChanged {
            narrator.narrate(event.node.selection_at(0));
        } else {
            announce_when_ready(narrator, event);
        }
    }

    /// Speaks the menu summary, then its items, when it gains focus.
    fn handle_menu(&self, narrator: &Narrator, event: &AccessibleEvent<'_>) {
        if event.gained(StateSet::FOCUSED) {
            narrator.speak(&format!(
                "Menu {} with {} items",
                event.name(),
                event.node.child_count()
            ));
            narrator.narrate_children(event.node);
        }
    }

    /// Narrates the item when it gains focus or becomes selected.
    fn handle_menu_item(&self, narrator: &Narrator, event: &AccessibleEvent<'_>) {
        if event.gained(StateSet::FOCUSED) || event.gained(StateSet::SELECTED) {
            narrator.narrate(Some(event.node));
        }
    }

    fn handle_push_button(&self, narrator: &Narrator, event: &AccessibleEvent<'_>) {
        announce_on_focus(narrator, event);
    }

    /// Speaks selection changes, or the button and its state on focus.
    fn handle_radio_button(&self, narrator: &Narrator, event: &AccessibleEvent<'_>) {
        let on = StateSet::CHECKED | StateSet::SELECTED;
        if event.gained(StateSet::CHECKED) || event.gained(StateSet::SELECTED) {
            narrator.speak("selected");
        } else if event.lost(StateSet::CHECKED) || event.lost(StateSet::SELECTED) {
            narrator.speak("not selected");
        } else if event.gained(StateSet::FOCUSED) {
            let suffix = if event.node.states().intersects(on) {
                " selected"
            } else {
                ""
            };
            narrator.speak(&format!("{} radio button{suffix}", event.name()));
        }
    }

    /// Speaks the new content of the field.
    fn handle_text_field(&self, narrator: &Narrator, event: &AccessibleEvent<'_>) {
        if event.kind == EventKind::TextChanged {
            match event.new_value.as_text().map(str::trim) {
                Some(text) if !text.is_empty() => narrator.speak(text),
                _ => narrator.speak(&format!("{} empty", event.name())),
            }
        } else {
            announce_on_focus(narrator, event);
        }
    }

    /// Reads the whole screen when it appears or finishes loading.
    fn handle_screen(&self, narrator: &Narrator, event: &AccessibleEvent<'_>) {
        if event.kind == EventKind::ChildChanged {
            narrator.narrate(Some(event.node));
        } else {
            announce_when_ready(narrator, event);
        }
    }

    /// Reads the subtree on expansion; names the field on collapse.
    fn handle_tree_field(&self, narrator: &Narrator, event: &AccessibleEvent<'_>) {
        announce_expansion(narrator, event);
    }

    /// Speaks the symbol's name when it gains focus.
    fn handle_symbol(&self, narrator: &Narrator, event: &AccessibleEvent<'_>) {
        if event.gained(StateSet::FOCUSED) {
            narrator.speak(&event.name());
        }
    }

    /// Narrates the link when it gains focus.
    fn handle_hyperlink(&self, narrator: &Narrator, event: &AccessibleEvent<'_>) {
        announce_on_focus(narrator, event);
    }

    /// Reads the table once it stops loading or gains focus.
    fn handle_table(&self, narrator: &Narrator, event: &AccessibleEvent<'_>) {
        announce_when_ready(narrator, event);
    }

    /// Reads the panel once it stops loading or gains focus.
    fn handle_panel(&self, narrator: &Narrator, event: &AccessibleEvent<'_>) {
        announce_when_ready(narrator, event);
    }

    /// Narrates the image when it gains focus.
    fn handle_bitmap(&self, narrator: &Narrator, event: &AccessibleEvent<'_>) {
        announce_on_focus(narrator, event);
    }

    /// Reads the new value, or the gauge once it stops loading or gains focus.
    fn handle_gauge(&self, narrator: &Narrator, event: &AccessibleEvent<'_>) {
        if event.kind == EventKind::ValueChanged {
            narrator.narrate(Some(event.node));
        } else {
            announce_when_ready(narrator, event);
        }
    }
}

/// Uses every default hook.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultHandler;

impl ScreenReaderHandler for DefaultHandler {}

/// Narrate the node when it gains focus.
pub fn announce_on_focus(narrator: &Narrator, event: &AccessibleEvent<'_>) {
    if event.gained(StateSet::FOCUSED) {
        narrator.narrate(Some(event.node));
    }
}

/// Narrate a container when it gains focus or stops loading.
pub fn announce_when_ready(narrator: &Narrator, event: &AccessibleEvent<'_>) {
    if event.lost(StateSet::BUSY) || event.gained(StateSet::FOCUSED) {
        narrator.narrate(Some(event.node));
    }
}

/// Narrate an expanding node with its children; name a collapsing one.
pub fn announce_expansion(narrator: &Narrator, event: &AccessibleEvent<'_>) {
    if event.gained(StateSet::EXPANDED) {
        narrator.narrate(Some(event.node));
    } else if event.gained(StateSet::COLLAPSED) || event.lost(StateSet::EXPANDED) {
        narrator.speak(&format!("{} collapsed", event.name()));
    } else {
        announce_on_focus(narrator, event);
    }
}
