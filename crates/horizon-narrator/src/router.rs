//! The event router.

use horizon_narrator_core::logging::{span_names, targets};
use horizon_narrator_core::{AccessibleNode, AccessibleNodeExt, AccessibleRole};
use parking_lot::ReentrantMutex;

use crate::event::{AccessibleEvent, EventKind, EventValue};
use crate::handler::{DefaultHandler, ScreenReaderHandler};
use crate::narrator::Narrator;

/// Entry point for accessible events from the host UI.
///
/// The router holds no state of its own. Each event is dispatched on the
/// node's role to one hook of its [`ScreenReaderHandler`]. Deliveries are
/// serialized: at most one event is handled at a time, so utterances from
/// concurrent events never interleave. A handler may re-enter the router
/// from the same thread.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
///
/// use horizon_narrator::{EventKind, EventValue, Narrator, ScreenReader};
/// use horizon_narrator_core::{AccessibleRole, Element, RecordingSpeech, StateSet};
///
/// let speech = Arc::new(RecordingSpeech::new());
/// let reader = ScreenReader::new(Narrator::new(speech.clone()));
///
/// let check = Element::new(AccessibleRole::CheckBox)
///     .with_name("Remember me")
///     .with_states(StateSet::CHECKED);
/// reader.on_accessible_event(
///     EventKind::StateChanged,
///     &EventValue::State(StateSet::NONE),
///     &EventValue::State(StateSet::CHECKED),
///     Some(&check),
/// );
///
/// assert_eq!(speech.utterances(), vec!["checked"]);
/// ```
pub struct ScreenReader {
    narrator: Narrator,
    handler: Box<dyn ScreenReaderHandler>,
    gate: ReentrantMutex<()>,
}

static_assertions::assert_impl_all!(ScreenReader: Send, Sync);

impl ScreenReader {
    /// Create a router using the default hooks.
    pub fn new(narrator: Narrator) -> Self {
        Self::with_handler(narrator, DefaultHandler)
    }

    /// Create a router with custom hooks.
    pub fn with_handler(narrator: Narrator, handler: impl ScreenReaderHandler + 'static) -> Self {
        Self {
            narrator,
            handler: Box::new(handler),
            gate: ReentrantMutex::new(()),
        }
    }

    /// The narrator handed to hooks.
    pub fn narrator(&self) -> &Narrator {
        &self.narrator
    }

    /// Handle one accessible event.
    ///
    /// An absent node is ignored. Separators are ignored. Nodes of unknown
    /// role are logged (unless disabled in the configuration) and ignored.
    pub fn on_accessible_event(
        &self,
        kind: EventKind,
        old_value: &EventValue,
        new_value: &EventValue,
        node: Option<&dyn AccessibleNode>,
    ) {
        let Some(node) = node else {
            return;
        };

        let _guard = self.gate.lock();
        let role = node.role();
        let _span = tracing::debug_span!(target: targets::ROUTER, span_names::ROUTE, %role).entered();
        tracing::debug!(
            target: targets::ROUTER,
            %role,
            name = %node.name_or_empty(),
            ?kind,
            "accessible event"
        );

        let event = AccessibleEvent::new(kind, old_value, new_value, node);
        let narrator = &self.narrator;
        let handler = &*self.handler;

        match role {
            AccessibleRole::AppIcon => handler.handle_app_icon(narrator, &event),
            AccessibleRole::Icon => handler.handle_icon(narrator, &event),
            AccessibleRole::CheckBox => handler.handle_check_box(narrator, &event),
            AccessibleRole::Choice => handler.handle_choice(narrator, &event),
            AccessibleRole::Combo => handler.handle_combo(narrator, &event),
            AccessibleRole::Date => handler.handle_date(narrator, &event),
            AccessibleRole::DateField => handler.handle_date_field(narrator, &event),
            AccessibleRole::Dialog => handler.handle_dialog(narrator, &event),
            AccessibleRole::Label => handler.handle_label(narrator, &event),
            AccessibleRole::List => handler.handle_list(narrator, &event),
            AccessibleRole::Menu => handler.handle_menu(narrator, &event),
            AccessibleRole::MenuItem => handler.handle_menu_item(narrator, &event),
            AccessibleRole::PushButton => handler.handle_push_button(narrator, &event),
            AccessibleRole::RadioButton => handler.handle_radio_button(narrator, &event),
            AccessibleRole::TextField => handler.handle_text_field(narrator, &event),
            AccessibleRole::Screen => handler.handle_screen(narrator, &event),
            AccessibleRole::TreeField => handler.handle_tree_field(narrator, &event),
            AccessibleRole::Symbol => handler.handle_symbol(narrator, &event),
            AccessibleRole::Hyperlink => handler.handle_hyperlink(narrator, &event),
            AccessibleRole::Table => handler.handle_table(narrator, &event),
            AccessibleRole::Panel => handler.handle_panel(narrator, &event),
            AccessibleRole::Bitmap => handler.handle_bitmap(narrator, &event),
            AccessibleRole::Gauge => handler.handle_gauge(narrator, &event),
            AccessibleRole::Separator => {}
            AccessibleRole::Unknown => {
                if narrator.config().log_unsupported_roles {
                    tracing::warn!(target: targets::ROUTER, %role, "unsupported accessible role");
                }
            }
        }
    }
}

impl std::fmt::Debug for ScreenReader {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScreenReader")
            .field("narrator", &self.narrator)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use horizon_narrator_core::{Element, RecordingSpeech, StateSet};

    use super::*;

    struct CountingHandler {
        calls: Arc<AtomicUsize>,
    }

    impl ScreenReaderHandler for CountingHandler {
        fn handle_push_button(&self, _narrator: &Narrator, _event: &AccessibleEvent<'_>) {
            self.calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn focus() -> (EventValue, EventValue) {
        (EventValue::State(StateSet::NONE), EventValue::State(StateSet::FOCUSED))
    }

    #[test]
    fn test_absent_node_is_ignored() {
        let speech = Arc::new(RecordingSpeech::new());
        let reader = ScreenReader::new(Narrator::new(speech.clone()));
        let (old, new) = focus();
        reader.on_accessible_event(EventKind::StateChanged, &old, &new, None);
        assert!(speech.is_empty());
    }

    #[test]
    fn test_custom_hook_replaces_default() {
        let speech = Arc::new(RecordingSpeech::new());
        let calls = Arc::new(AtomicUsize::new(0));
        let handler = CountingHandler {
            calls: calls.clone(),
        };
        let reader = ScreenReader::with_handler(Narrator::new(speech.clone()), handler);

        let button = Element::new(AccessibleRole::PushButton).with_name("Go");
        let (old, new) = focus();
        reader.on_accessible_event(EventKind::StateChanged, &old, &new, Some(&button));

        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert!(speech.is_empty());
    }

    #[test]
    fn test_separator_and_unknown_are_silent() {
        let speech = Arc::new(RecordingSpeech::new());
        let reader = ScreenReader::new(Narrator::new(speech.clone()));
        let (old, new) = focus();

        for role in [AccessibleRole::Separator, AccessibleRole::Unknown] {
            let node = Element::new(role).with_name("x");
            reader.on_accessible_event(EventKind::StateChanged, &old, &new, Some(&node));
        }
        assert!(speech.is_empty());
    }
}
