//! The read-only view of an accessibility tree that the narrator walks.

use crate::role::AccessibleRole;
use crate::state::StateSet;

/// A node in a host-provided accessibility tree.
///
/// Hosts implement this trait for their widgets (or snapshot them into
/// [`Element`](crate::Element)). The narrator only ever borrows a node for
/// the length of one traversal and never mutates it.
///
/// Capability views (`as_text`, `as_table`, `as_value`) default to `None`;
/// override the ones that apply to the node's role.
///
/// # Contract
///
/// For the duration of one traversal, `child_count` and `child_at` must agree
/// and the tree must be acyclic. The narrator does not guard against either.
pub trait AccessibleNode {
    /// The node's role.
    fn role(&self) -> AccessibleRole;

    /// The accessible name. `None` is read as an empty name.
    fn name(&self) -> Option<String> {
        None
    }

    /// The current state flags.
    fn states(&self) -> StateSet {
        StateSet::NONE
    }

    /// Number of children.
    fn child_count(&self) -> usize {
        0
    }

    /// The child at `index`, if any.
    fn child_at(&self, _index: usize) -> Option<&dyn AccessibleNode> {
        None
    }

    /// Text content, for text fields, dates, combo boxes and choices.
    fn as_text(&self) -> Option<&dyn AccessibleText> {
        None
    }

    /// Table structure, for table nodes.
    fn as_table(&self) -> Option<&dyn AccessibleTable> {
        None
    }

    /// Numeric value, for gauges.
    fn as_value(&self) -> Option<&dyn AccessibleValue> {
        None
    }

    /// Number of selected children.
    fn selection_count(&self) -> usize {
        0
    }

    /// The `index`-th selected child, if any.
    fn selection_at(&self, _index: usize) -> Option<&dyn AccessibleNode> {
        None
    }
}

/// Text content of a node.
pub trait AccessibleText {
    /// The whole text, or `None` if the host has none to report.
    fn whole_text(&self) -> Option<String>;
}

/// Table structure of a node.
pub trait AccessibleTable {
    /// Number of rows.
    fn row_count(&self) -> usize;

    /// Number of columns.
    fn column_count(&self) -> usize;

    /// Per-column header nodes, or `None` if the table has no header row.
    ///
    /// Individual headers may be absent.
    fn column_headers(&self) -> Option<Vec<Option<&dyn AccessibleNode>>> {
        None
    }

    /// The cell at (`row`, `column`), if present.
    fn cell_at(&self, row: usize, column: usize) -> Option<&dyn AccessibleNode>;
}

/// Numeric value of a node.
pub trait AccessibleValue {
    /// The current value.
    fn current_value(&self) -> i32;

    /// The smallest value the node accepts.
    fn min_value(&self) -> i32 {
        i32::MIN
    }

    /// The largest value the node accepts.
    fn max_value(&self) -> i32 {
        i32::MAX
    }
}

/// Convenience accessors built on [`AccessibleNode`].
pub trait AccessibleNodeExt: AccessibleNode {
    /// The accessible name with absence normalised to the empty string.
    fn name_or_empty(&self) -> String {
        self.name().unwrap_or_default()
    }

    /// Iterate over the children in order, skipping absent ones.
    fn children(&self) -> Children<'_, Self>
    where
        Self: Sized,
    {
        Children {
            node: self,
            index: 0,
        }
    }
}

impl<T: AccessibleNode + ?Sized> AccessibleNodeExt for T {}

/// Iterator over the children of a node.
pub struct Children<'a, N: ?Sized> {
    node: &'a N,
    index: usize,
}

impl<'a, N: AccessibleNode + ?Sized> Iterator for Children<'a, N> {
    type Item = &'a dyn AccessibleNode;

    fn next(&mut self) -> Option<Self::Item> {
        let node: &'a N = self.node;
        while self.index < node.child_count() {
            let index = self.index;
            self.index += 1;
            if let Some(child) = node.child_at(index) {
                return Some(child);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Leaf(&'static str);

    impl AccessibleNode for Leaf {
        fn role(&self) -> AccessibleRole {
            AccessibleRole::Label
        }

        fn name(&self) -> Option<String> {
            Some(self.0.to_string())
        }
    }

    struct Holder {
        children: Vec<Option<Leaf>>,
    }

    impl AccessibleNode for Holder {
        fn role(&self) -> AccessibleRole {
            AccessibleRole::Panel
        }

        fn child_count(&self) -> usize {
            self.children.len()
        }

        fn child_at(&self, index: usize) -> Option<&dyn AccessibleNode> {
            self.children
                .get(index)
                .and_then(|c| c.as_ref())
                .map(|c| c as &dyn AccessibleNode)
        }
    }

    #[test]
    fn test_trait_defaults() {
        struct Minimal;
        impl AccessibleNode for Minimal {
            fn role(&self) -> AccessibleRole {
                AccessibleRole::Separator
            }
        }

        let node = Minimal;
        assert_eq!(node.name_or_empty(), "");
        assert_eq!(node.states(), StateSet::NONE);
        assert_eq!(node.child_count(), 0);
        assert!(node.as_text().is_none());
        assert!(node.as_table().is_none());
        assert!(node.as_value().is_none());
        assert!(node.selection_at(0).is_none());
    }

    #[test]
    fn test_children_skips_absent() {
        let holder = Holder {
            children: vec![Some(Leaf("a")), None, Some(Leaf("c"))],
        };
        let names: Vec<_> = holder.children().map(|c| c.name_or_empty()).collect();
        assert_eq!(names, vec!["a", "c"]);
    }
}
