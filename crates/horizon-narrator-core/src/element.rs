//! An owned, in-memory accessibility tree.
//!
//! [`Element`] implements [`AccessibleNode`] and all of its capability views.
//! Hosts that cannot hand out borrowed views of their live widgets can
//! snapshot them into an `Element` tree, which is `Send + Sync` and can be
//! moved to another thread (see the event queue in `horizon-narrator`).
//!
//! Trees can be built in code:
//!
//! ```
//! use horizon_narrator_core::{AccessibleRole, Element, StateSet};
//!
//! let screen = Element::new(AccessibleRole::Screen)
//!     .with_name("Settings")
//!     .child(Element::new(AccessibleRole::CheckBox).with_name("Wi-Fi").with_states(StateSet::CHECKED))
//!     .child(Element::new(AccessibleRole::PushButton).with_name("Done"));
//!
//! assert_eq!(screen.children().len(), 2);
//! ```
//!
//! or loaded from JSON or TOML snapshots:
//!
//! ```
//! use horizon_narrator_core::Element;
//!
//! let screen = Element::from_json_str(r#"{
//!     "role": "screen",
//!     "name": "Settings",
//!     "children": [
//!         { "role": "check_box", "name": "Wi-Fi", "states": ["checked"] }
//!     ]
//! }"#).unwrap();
//! assert_eq!(screen.children().len(), 1);
//! ```

use std::path::Path;

use serde::Deserialize;

use crate::error::{NarratorError, Result};
use crate::node::{AccessibleNode, AccessibleTable, AccessibleText, AccessibleValue};
use crate::role::AccessibleRole;
use crate::state::StateSet;

/// An owned accessible node with its subtree.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Element {
    role: AccessibleRole,
    name: Option<String>,
    states: StateSet,
    text: Option<TextContent>,
    value: Option<ValueRange>,
    table: Option<TableData>,
    /// Indices into `children` of the selected children.
    selected: Vec<usize>,
    children: Vec<Element>,
}

static_assertions::assert_impl_all!(Element: Send, Sync);

impl Element {
    /// Create an element with the given role and nothing else.
    pub fn new(role: AccessibleRole) -> Self {
        Self {
            role,
            ..Default::default()
        }
    }

    /// Parse a tree from JSON.
    pub fn from_json_str(source: &str) -> Result<Self> {
        crate::narrator_trace!(bytes = source.len(), "parsing JSON tree");
        serde_json::from_str(source).map_err(NarratorError::TreeJson)
    }

    /// Parse a tree from TOML.
    pub fn from_toml_str(source: &str) -> Result<Self> {
        crate::narrator_trace!(bytes = source.len(), "parsing TOML tree");
        toml::from_str(source).map_err(NarratorError::TreeToml)
    }

    /// Load a tree from a file, choosing the format by extension.
    ///
    /// `.toml` files are read as TOML; anything else as JSON.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let source =
            std::fs::read_to_string(path).map_err(|err| NarratorError::io(path, err))?;
        let element = match path.extension().and_then(|ext| ext.to_str()) {
            Some("toml") => Self::from_toml_str(&source)?,
            _ => Self::from_json_str(&source)?,
        };
        crate::narrator_debug!(
            path = %path.display(),
            role = %element.role,
            children = element.children.len(),
            "loaded accessibility tree"
        );
        element.warn_dangling_selections();
        Ok(element)
    }

    /// Log selections that point past the end of `children`.
    ///
    /// They are kept as-is and read as absent selections.
    fn warn_dangling_selections(&self) {
        for &index in &self.selected {
            if index >= self.children.len() {
                crate::narrator_warn!(
                    role = %self.role,
                    name = self.name.as_deref().unwrap_or_default(),
                    index,
                    children = self.children.len(),
                    "selection index out of range"
                );
            }
        }
        for child in &self.children {
            child.warn_dangling_selections();
        }
    }

    /// Set the accessible name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Replace the state flags.
    pub fn with_states(mut self, states: StateSet) -> Self {
        self.states = states;
        self
    }

    /// Add state flags.
    pub fn state(mut self, flag: StateSet) -> Self {
        self.states |= flag;
        self
    }

    /// Attach text content.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(TextContent(text.into()));
        self
    }

    /// Attach a numeric value with an unbounded range.
    pub fn value(mut self, current: i32) -> Self {
        self.value = Some(ValueRange::new(current));
        self
    }

    /// Attach a numeric value with an explicit range.
    pub fn value_range(mut self, value: ValueRange) -> Self {
        self.value = Some(value);
        self
    }

    /// Attach table structure.
    pub fn table(mut self, table: TableData) -> Self {
        self.table = Some(table);
        self
    }

    /// Append a child.
    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Append several children.
    pub fn with_children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    /// Mark the child at `index` as selected.
    pub fn select(mut self, index: usize) -> Self {
        self.selected.push(index);
        self
    }

    /// The children of this element.
    pub fn children(&self) -> &[Element] {
        &self.children
    }

    /// Mutable access to the children, for hosts updating a snapshot.
    pub fn children_mut(&mut self) -> &mut Vec<Element> {
        &mut self.children
    }

    /// Replace the state flags in place.
    pub fn set_states(&mut self, states: StateSet) {
        self.states = states;
    }

    /// Replace the text content in place.
    pub fn set_text(&mut self, text: Option<String>) {
        self.text = text.map(TextContent);
    }
}

impl AccessibleNode for Element {
    fn role(&self) -> AccessibleRole {
        self.role
    }

    fn name(&self) -> Option<String> {
        self.name.clone()
    }

    fn states(&self) -> StateSet {
        self.states
    }

    fn child_count(&self) -> usize {
        self.children.len()
    }

    fn child_at(&self, index: usize) -> Option<&dyn AccessibleNode> {
        self.children.get(index).map(|c| c as &dyn AccessibleNode)
    }

    fn as_text(&self) -> Option<&dyn AccessibleText> {
        self.text.as_ref().map(|t| t as &dyn AccessibleText)
    }

    fn as_table(&self) -> Option<&dyn AccessibleTable> {
        self.table.as_ref().map(|t| t as &dyn AccessibleTable)
    }

    fn as_value(&self) -> Option<&dyn AccessibleValue> {
        self.value.as_ref().map(|v| v as &dyn AccessibleValue)
    }

    fn selection_count(&self) -> usize {
        self.selected.len()
    }

    fn selection_at(&self, index: usize) -> Option<&dyn AccessibleNode> {
        let child = *self.selected.get(index)?;
        self.child_at(child)
    }
}

/// Text content of an [`Element`].
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct TextContent(String);

impl TextContent {
    /// The text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AccessibleText for TextContent {
    fn whole_text(&self) -> Option<String> {
        Some(self.0.clone())
    }
}

/// Numeric value of an [`Element`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ValueRange {
    pub current: i32,
    #[serde(default = "ValueRange::default_min")]
    pub min: i32,
    #[serde(default = "ValueRange::default_max")]
    pub max: i32,
}

impl ValueRange {
    /// A value with an unbounded range.
    pub fn new(current: i32) -> Self {
        Self {
            current,
            min: Self::default_min(),
            max: Self::default_max(),
        }
    }

    /// A value within `min..=max`.
    pub fn bounded(current: i32, min: i32, max: i32) -> Self {
        Self { current, min, max }
    }

    fn default_min() -> i32 {
        i32::MIN
    }

    fn default_max() -> i32 {
        i32::MAX
    }
}

impl AccessibleValue for ValueRange {
    fn current_value(&self) -> i32 {
        self.current
    }

    fn min_value(&self) -> i32 {
        self.min
    }

    fn max_value(&self) -> i32 {
        self.max
    }
}

/// Table structure of an [`Element`].
///
/// Cells are stored row-major; any cell or header may be absent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TableData {
    /// Explicit column count. When absent, the widest row decides.
    columns: Option<usize>,
    headers: Option<Vec<Option<Element>>>,
    rows: Vec<Vec<Option<Element>>>,
}

impl TableData {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the column count explicitly.
    pub fn columns(mut self, columns: usize) -> Self {
        self.columns = Some(columns);
        self
    }

    /// Set the column headers.
    pub fn headers(mut self, headers: impl IntoIterator<Item = Option<Element>>) -> Self {
        self.headers = Some(headers.into_iter().collect());
        self
    }

    /// Append a row of cells.
    pub fn row(mut self, cells: impl IntoIterator<Item = Option<Element>>) -> Self {
        self.rows.push(cells.into_iter().collect());
        self
    }
}

impl AccessibleTable for TableData {
    fn row_count(&self) -> usize {
        self.rows.len()
    }

    fn column_count(&self) -> usize {
        self.columns
            .unwrap_or_else(|| self.rows.iter().map(Vec::len).max().unwrap_or(0))
    }

    fn column_headers(&self) -> Option<Vec<Option<&dyn AccessibleNode>>> {
        self.headers.as_ref().map(|headers| {
            headers
                .iter()
                .map(|h| h.as_ref().map(|h| h as &dyn AccessibleNode))
                .collect()
        })
    }

    fn cell_at(&self, row: usize, column: usize) -> Option<&dyn AccessibleNode> {
        self.rows
            .get(row)?
            .get(column)?
            .as_ref()
            .map(|c| c as &dyn AccessibleNode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::AccessibleNodeExt;

    fn label(name: &str) -> Element {
        Element::new(AccessibleRole::Label).with_name(name)
    }

    #[test]
    fn test_builder() {
        let element = Element::new(AccessibleRole::Choice)
            .with_name("Colour")
            .state(StateSet::FOCUSED)
            .state(StateSet::FOCUSABLE)
            .with_children([label("Red"), label("Green")])
            .select(1);

        assert_eq!(element.role(), AccessibleRole::Choice);
        assert_eq!(element.name_or_empty(), "Colour");
        assert_eq!(element.states(), StateSet::FOCUSED | StateSet::FOCUSABLE);
        assert_eq!(element.child_count(), 2);
        assert_eq!(element.selection_count(), 1);
        assert_eq!(element.selection_at(0).unwrap().name_or_empty(), "Green");
        assert!(element.selection_at(1).is_none());
    }

    #[test]
    fn test_selection_out_of_range_is_absent() {
        let element = Element::new(AccessibleRole::Choice).child(label("Only")).select(4);
        assert!(element.selection_at(0).is_none());
    }

    #[test]
    fn test_capability_views() {
        let element = Element::new(AccessibleRole::Gauge)
            .value_range(ValueRange::bounded(40, 0, 100))
            .text("forty");

        let value = element.as_value().unwrap();
        assert_eq!(value.current_value(), 40);
        assert_eq!(value.min_value(), 0);
        assert_eq!(value.max_value(), 100);
        assert_eq!(element.as_text().unwrap().whole_text().as_deref(), Some("forty"));
        assert!(element.as_table().is_none());
    }

    #[test]
    fn test_table_data() {
        let table = TableData::new()
            .headers([Some(label("H1")), None])
            .row([Some(label("A")), Some(label("B"))])
            .row([None, Some(label("D"))]);

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 2);
        assert!(table.cell_at(1, 0).is_none());
        assert_eq!(table.cell_at(1, 1).unwrap().name_or_empty(), "D");
        assert!(table.cell_at(5, 0).is_none());

        let headers = table.column_headers().unwrap();
        assert_eq!(headers.len(), 2);
        assert!(headers[0].is_some());
        assert!(headers[1].is_none());
    }

    #[test]
    fn test_table_explicit_columns() {
        let table = TableData::new().columns(3).row([Some(label("A"))]);
        assert_eq!(table.column_count(), 3);
        assert!(table.column_headers().is_none());
    }

    #[test]
    fn test_in_place_updates() {
        let mut element = Element::new(AccessibleRole::TextField);
        element.set_states(StateSet::EDITABLE);
        element.set_text(Some("hello".into()));
        element.children_mut().push(label("x"));

        assert_eq!(element.states(), StateSet::EDITABLE);
        assert_eq!(element.as_text().unwrap().whole_text().as_deref(), Some("hello"));
        assert_eq!(element.children().len(), 1);
    }
}
