//! Accessible state flags.

use std::ops::{BitAnd, BitOr, BitOrAssign, Not};

use serde::Deserialize;

/// A snapshot of the boolean states attached to an accessible node.
///
/// Flags combine with bitwise OR:
///
/// ```
/// use horizon_narrator_core::StateSet;
///
/// let states = StateSet::FOCUSABLE | StateSet::FOCUSED;
/// assert!(states.contains(StateSet::FOCUSED));
/// assert!(!states.contains(StateSet::BUSY));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(from = "Vec<StateFlag>")]
pub struct StateSet(u16);

impl StateSet {
    /// No states set.
    pub const NONE: StateSet = StateSet(0);

    /// The node has input focus.
    pub const FOCUSED: StateSet = StateSet(1 << 0);

    /// The node is expanded and shows its children.
    pub const EXPANDED: StateSet = StateSet(1 << 1);

    /// The node is collapsed and hides its children.
    pub const COLLAPSED: StateSet = StateSet(1 << 2);

    /// The node is selected.
    pub const SELECTED: StateSet = StateSet(1 << 3);

    /// The node can be selected.
    pub const SELECTABLE: StateSet = StateSet(1 << 4);

    /// The node allows several of its children to be selected at once.
    pub const MULTI_SELECTABLE: StateSet = StateSet(1 << 5);

    /// The node's text can be edited.
    pub const EDITABLE: StateSet = StateSet(1 << 6);

    /// The node is checked.
    pub const CHECKED: StateSet = StateSet(1 << 7);

    /// The node is still loading its content.
    pub const BUSY: StateSet = StateSet(1 << 8);

    /// The node can be expanded.
    pub const EXPANDABLE: StateSet = StateSet(1 << 9);

    /// The node can take focus.
    pub const FOCUSABLE: StateSet = StateSet(1 << 10);

    /// The node is navigated horizontally.
    pub const HORIZONTAL: StateSet = StateSet(1 << 11);

    /// The node is navigated vertically.
    pub const VERTICAL: StateSet = StateSet(1 << 12);

    /// Every defined flag.
    pub const ALL: StateSet = StateSet((1 << 13) - 1);

    /// Create a set from raw bits. Bits outside [`StateSet::ALL`] are dropped.
    pub const fn from_bits(bits: u16) -> Self {
        StateSet(bits & Self::ALL.0)
    }

    /// The raw bits of this set.
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Check if every flag in `flag` is set.
    pub const fn contains(self, flag: StateSet) -> bool {
        (self.0 & flag.0) == flag.0
    }

    /// Check if any flag in `flag` is set.
    pub const fn intersects(self, flag: StateSet) -> bool {
        (self.0 & flag.0) != 0
    }

    /// Check if no flag is set.
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Return a copy with `flag` added.
    pub const fn with(self, flag: StateSet) -> Self {
        StateSet(self.0 | flag.0)
    }

    /// Return a copy with `flag` removed.
    pub const fn without(self, flag: StateSet) -> Self {
        StateSet(self.0 & !flag.0)
    }

    /// Iterate over the individual flags that are set.
    pub fn iter(self) -> impl Iterator<Item = StateFlag> {
        StateFlag::ALL
            .into_iter()
            .filter(move |flag| self.contains(flag.as_set()))
    }
}

impl BitOr for StateSet {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        StateSet(self.0 | rhs.0)
    }
}

impl BitOrAssign for StateSet {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for StateSet {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        StateSet(self.0 & rhs.0)
    }
}

impl Not for StateSet {
    type Output = Self;

    fn not(self) -> Self::Output {
        StateSet(!self.0 & Self::ALL.0)
    }
}

/// A single named state, used where flags are listed by name
/// (tree snapshots, diagnostics).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StateFlag {
    Focused,
    Expanded,
    Collapsed,
    Selected,
    Selectable,
    MultiSelectable,
    Editable,
    Checked,
    Busy,
    Expandable,
    Focusable,
    Horizontal,
    Vertical,
}

impl StateFlag {
    /// All flags, in bit order.
    pub const ALL: [StateFlag; 13] = [
        StateFlag::Focused,
        StateFlag::Expanded,
        StateFlag::Collapsed,
        StateFlag::Selected,
        StateFlag::Selectable,
        StateFlag::MultiSelectable,
        StateFlag::Editable,
        StateFlag::Checked,
        StateFlag::Busy,
        StateFlag::Expandable,
        StateFlag::Focusable,
        StateFlag::Horizontal,
        StateFlag::Vertical,
    ];

    /// The single-flag set for this state.
    pub const fn as_set(self) -> StateSet {
        match self {
            StateFlag::Focused => StateSet::FOCUSED,
            StateFlag::Expanded => StateSet::EXPANDED,
            StateFlag::Collapsed => StateSet::COLLAPSED,
            StateFlag::Selected => StateSet::SELECTED,
            StateFlag::Selectable => StateSet::SELECTABLE,
            StateFlag::MultiSelectable => StateSet::MULTI_SELECTABLE,
            StateFlag::Editable => StateSet::EDITABLE,
            StateFlag::Checked => StateSet::CHECKED,
            StateFlag::Busy => StateSet::BUSY,
            StateFlag::Expandable => StateSet::EXPANDABLE,
            StateFlag::Focusable => StateSet::FOCUSABLE,
            StateFlag::Horizontal => StateSet::HORIZONTAL,
            StateFlag::Vertical => StateSet::VERTICAL,
        }
    }
}

impl From<StateFlag> for StateSet {
    fn from(flag: StateFlag) -> Self {
        flag.as_set()
    }
}

impl From<Vec<StateFlag>> for StateSet {
    fn from(flags: Vec<StateFlag>) -> Self {
        flags.into_iter().fold(StateSet::NONE, |set, flag| set | flag.as_set())
    }
}

impl FromIterator<StateFlag> for StateSet {
    fn from_iter<I: IntoIterator<Item = StateFlag>>(iter: I) -> Self {
        iter.into_iter().fold(StateSet::NONE, |set, flag| set | flag.as_set())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_are_distinct_single_bits() {
        let mut seen = StateSet::NONE;
        for flag in StateFlag::ALL {
            let set = flag.as_set();
            assert_eq!(set.bits().count_ones(), 1, "{flag:?} is not a single bit");
            assert!(!seen.intersects(set), "{flag:?} overlaps another flag");
            seen |= set;
        }
        assert_eq!(seen, StateSet::ALL);
    }

    #[test]
    fn test_contains_and_with() {
        let states = StateSet::NONE.with(StateSet::CHECKED).with(StateSet::FOCUSED);
        assert!(states.contains(StateSet::CHECKED | StateSet::FOCUSED));
        assert!(!states.contains(StateSet::CHECKED | StateSet::BUSY));
        assert!(states.intersects(StateSet::CHECKED | StateSet::BUSY));
        assert_eq!(states.without(StateSet::CHECKED), StateSet::FOCUSED);
    }

    #[test]
    fn test_not_stays_within_defined_flags() {
        assert_eq!(!StateSet::NONE, StateSet::ALL);
        assert_eq!(!StateSet::ALL, StateSet::NONE);
        assert_eq!(StateSet::from_bits(u16::MAX), StateSet::ALL);
    }

    #[test]
    fn test_iter_lists_set_flags() {
        let states = StateSet::BUSY | StateSet::VERTICAL;
        let flags: Vec<_> = states.iter().collect();
        assert_eq!(flags, vec![StateFlag::Busy, StateFlag::Vertical]);
    }

    #[test]
    fn test_deserialize_from_names() {
        let states: StateSet = serde_json::from_str(r#"["focused", "multi_selectable"]"#).unwrap();
        assert_eq!(states, StateSet::FOCUSED | StateSet::MULTI_SELECTABLE);
    }
}
