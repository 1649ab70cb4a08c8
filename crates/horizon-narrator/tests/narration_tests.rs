//! Integration tests for tree narration.

use std::cell::Cell;
use std::rc::Rc;
use std::sync::Arc;

use horizon_narrator::Narrator;
use horizon_narrator_core::{
    AccessibleNode, AccessibleRole, AccessibleTable, AccessibleText, Element, RecordingSpeech,
    StateSet, TableData,
};

fn narrate(node: &dyn AccessibleNode) -> Vec<String> {
    let speech = Arc::new(RecordingSpeech::new());
    Narrator::new(speech.clone()).narrate(Some(node));
    speech.take()
}

fn label(name: &str) -> Element {
    Element::new(AccessibleRole::Label).with_name(name)
}

// A node that reports children but counts every attempt to fetch one.
struct SpyNode {
    role: AccessibleRole,
    states: StateSet,
    children: Vec<Element>,
    reported_children: usize,
    child_fetches: Rc<Cell<usize>>,
}

impl SpyNode {
    fn new(role: AccessibleRole, states: StateSet) -> Self {
        Self {
            role,
            states,
            children: vec![label("first"), label("second")],
            reported_children: 2,
            child_fetches: Rc::new(Cell::new(0)),
        }
    }

    // Claims children it does not have; fetching one is a bug either way.
    fn phantom_children(mut self, count: usize) -> Self {
        self.children.clear();
        self.reported_children = count;
        self
    }

    fn fetches(&self) -> usize {
        self.child_fetches.get()
    }
}

impl AccessibleNode for SpyNode {
    fn role(&self) -> AccessibleRole {
        self.role
    }

    fn name(&self) -> Option<String> {
        Some("spy".to_string())
    }

    fn states(&self) -> StateSet {
        self.states
    }

    fn child_count(&self) -> usize {
        self.reported_children
    }

    fn child_at(&self, index: usize) -> Option<&dyn AccessibleNode> {
        self.child_fetches.set(self.child_fetches.get() + 1);
        self.children.get(index).map(|child| child as &dyn AccessibleNode)
    }

    fn as_table(&self) -> Option<&dyn AccessibleTable> {
        (self.role == AccessibleRole::Table).then_some(self as &dyn AccessibleTable)
    }
}

impl AccessibleTable for SpyNode {
    fn row_count(&self) -> usize {
        1
    }

    fn column_count(&self) -> usize {
        self.children.len()
    }

    fn cell_at(&self, _row: usize, column: usize) -> Option<&dyn AccessibleNode> {
        self.child_at(column)
    }
}

#[test]
fn test_absent_root_emits_nothing() {
    let speech = Arc::new(RecordingSpeech::new());
    let narrator = Narrator::new(speech.clone());
    narrator.narrate(None);
    assert!(speech.is_empty());
}

#[test]
fn test_busy_containers_announce_loading_only() {
    let cases = [
        (AccessibleRole::Screen, "Screen spy loading"),
        (AccessibleRole::List, "list spy loading"),
        (AccessibleRole::Panel, "panel spy loading"),
        (AccessibleRole::Table, "table spy loading"),
        (AccessibleRole::Gauge, "gauge spy loading"),
    ];

    for (role, expected) in cases {
        let node = SpyNode::new(role, StateSet::BUSY);
        assert_eq!(narrate(&node), vec![expected], "{role}");
        assert_eq!(node.fetches(), 0, "{role} read its children while busy");
    }
}

#[test]
fn test_ready_containers_read_children() {
    for role in [AccessibleRole::Screen, AccessibleRole::List, AccessibleRole::Panel] {
        let node = SpyNode::new(role, StateSet::NONE);
        let spoken = narrate(&node);
        assert_eq!(&spoken[1..], &["first".to_string(), "second".to_string()], "{role}");
        assert_eq!(node.fetches(), 2, "{role}");
    }
}

#[test]
fn test_leaf_roles_never_fetch_children() {
    let leaves = [
        AccessibleRole::TextField,
        AccessibleRole::Label,
        AccessibleRole::Icon,
        AccessibleRole::PushButton,
        AccessibleRole::CheckBox,
        AccessibleRole::MenuItem,
        AccessibleRole::Hyperlink,
        AccessibleRole::Separator,
        AccessibleRole::Bitmap,
    ];

    for role in leaves {
        for states in [StateSet::NONE, StateSet::ALL] {
            let node = SpyNode::new(role, states).phantom_children(5);
            narrate(&node);
            assert_eq!(node.fetches(), 0, "{role} fetched a child");
        }
    }
}

fn grid(headers: bool) -> Element {
    let mut data = TableData::new()
        .row([Some(label("A")), Some(label("B"))])
        .row([Some(label("C")), Some(label("D"))]);
    if headers {
        data = data.headers([Some(label("H1")), Some(label("H2"))]);
    }
    Element::new(AccessibleRole::Table).with_name("Grid").table(data)
}

#[test]
fn test_table_with_headers_reads_column_by_column() {
    assert_eq!(
        narrate(&grid(true)),
        vec![
            "Grid table with 2 columns and 2 rows",
            "column 1",
            "H1",
            "A",
            "C",
            "column 2",
            "H2",
            "B",
            "D",
        ]
    );
}

#[test]
fn test_table_without_headers_reads_row_by_row() {
    assert_eq!(
        narrate(&grid(false)),
        vec!["Grid table with 2 columns and 2 rows", "table data", "A", "B", "C", "D"]
    );
}

#[test]
fn test_table_cells_are_narrated_by_role() {
    let table = Element::new(AccessibleRole::Table).with_name("Orders").table(
        TableData::new()
            .row([
                Some(Element::new(AccessibleRole::PushButton).with_name("Open")),
                Some(Element::new(AccessibleRole::CheckBox).with_name("Paid").state(StateSet::CHECKED)),
            ]),
    );

    assert_eq!(
        narrate(&table),
        vec![
            "Orders table with 2 columns and 1 rows",
            "table data",
            "Open button",
            "Paid check box  checked",
        ]
    );
}

#[test]
fn test_table_without_table_view_is_silent() {
    assert!(narrate(&Element::new(AccessibleRole::Table).with_name("Empty")).is_empty());
}

#[test]
fn test_check_box_reads_exactly_one_check_state() {
    for (states, present, absent) in [
        (StateSet::CHECKED, " checked", " unchecked"),
        (StateSet::NONE, " unchecked", " checked"),
    ] {
        let check = Element::new(AccessibleRole::CheckBox).with_name("Sync").with_states(states);
        let spoken = narrate(&check);
        assert_eq!(spoken.len(), 1);
        assert!(spoken[0].ends_with(present));
        assert!(!spoken[0].contains(absent));
    }
}

#[test]
fn test_expanded_combo_announces_then_reads_children() {
    let combo = Element::new(AccessibleRole::Combo)
        .with_name("Size")
        .state(StateSet::EXPANDED)
        .text("Small")
        .child(label("Small"))
        .child(label("Large"));

    assert_eq!(
        narrate(&combo),
        vec!["Size combobox  expanded", "Small", "Large"]
    );
}

#[test]
fn test_collapsed_combo_reads_current_value() {
    let combo = SpyNode::new(AccessibleRole::Combo, StateSet::NONE);
    assert_eq!(narrate(&combo), vec!["spy combobox  empty"]);
    assert_eq!(combo.fetches(), 0);

    let with_text = Element::new(AccessibleRole::Combo)
        .with_name("Size")
        .text("Large")
        .child(label("Small"))
        .child(label("Large"));
    assert_eq!(
        narrate(&with_text),
        vec!["Size combobox  current value Large"]
    );

    let empty_text = Element::new(AccessibleRole::Combo).with_name("Size").text("");
    assert_eq!(narrate(&empty_text), vec!["Size combobox  empty"]);
}

// A text view whose host has no text to report.
struct Unreported;

impl AccessibleText for Unreported {
    fn whole_text(&self) -> Option<String> {
        None
    }
}

struct OpaqueField;

impl AccessibleNode for OpaqueField {
    fn role(&self) -> AccessibleRole {
        AccessibleRole::TextField
    }

    fn name(&self) -> Option<String> {
        Some("Secret".to_string())
    }

    fn as_text(&self) -> Option<&dyn AccessibleText> {
        Some(&Unreported)
    }
}

#[test]
fn test_unreported_text_reads_as_empty() {
    assert_eq!(narrate(&OpaqueField), vec!["Secret text field  empty"]);
}

#[test]
fn test_nested_tree_is_read_in_pre_order() {
    let screen = Element::new(AccessibleRole::Screen)
        .with_name("Home")
        .child(
            Element::new(AccessibleRole::Panel)
                .with_name("Header")
                .child(label("Welcome")),
        )
        .child(
            Element::new(AccessibleRole::List)
                .with_name("Apps")
                .with_states(StateSet::HORIZONTAL | StateSet::VERTICAL)
                .child(Element::new(AccessibleRole::AppIcon).with_name("Mail")),
        )
        .child(Element::new(AccessibleRole::Separator))
        .child(Element::new(AccessibleRole::Hyperlink).with_name("Help"));

    assert_eq!(
        narrate(&screen),
        vec![
            "Screen Home",
            "Header panel with 1 items",
            "Welcome",
            "both way navigation Appslist with 1 elements",
            "Mailapplication icon",
            "separator",
            "Help hyperlink ",
        ]
    );
}

#[test]
fn test_narration_is_repeatable() {
    let speech = Arc::new(RecordingSpeech::new());
    let narrator = Narrator::new(speech.clone());
    let tree = Element::new(AccessibleRole::Screen)
        .with_name("Inbox")
        .child(grid(true))
        .child(
            Element::new(AccessibleRole::Choice)
                .with_name("Sort")
                .child(label("Date"))
                .select(0),
        );

    narrator.narrate(Some(&tree));
    let first = speech.take();
    narrator.narrate(Some(&tree));
    let second = speech.take();

    assert!(!first.is_empty());
    assert_eq!(first, second);
}
