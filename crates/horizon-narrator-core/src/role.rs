//! Accessibility roles understood by the narrator.

use std::fmt;

use serde::Deserialize;

/// The accessibility role of a node.
///
/// This is the closed set of roles a host toolkit reports for its widgets.
/// Narration and event routing both dispatch on it with exhaustive matches,
/// so adding a role is a compile error until every dispatch site handles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessibleRole {
    /// A role the host could not classify.
    #[default]
    Unknown,

    /// A full screen, the root of most trees.
    Screen,

    /// An editable or read-only text field.
    TextField,

    /// A static text label.
    Label,

    /// An application icon on a home screen.
    AppIcon,

    /// A generic icon.
    Icon,

    /// A date display.
    Date,

    /// A list of items.
    List,

    /// A generic container panel.
    Panel,

    /// A gauge or progress indicator.
    Gauge,

    /// A push button.
    PushButton,

    /// An item within a menu.
    MenuItem,

    /// A checkbox that can be checked or unchecked.
    CheckBox,

    /// A table of cells.
    Table,

    /// A bitmap image.
    Bitmap,

    /// A combo box / dropdown.
    Combo,

    /// A hyperlink.
    Hyperlink,

    /// A separator line.
    Separator,

    /// A tree view.
    TreeField,

    /// A choice field (spinner of options).
    Choice,

    /// A dialog box.
    Dialog,

    /// A menu (popup or submenu).
    Menu,

    /// A radio button.
    RadioButton,

    /// An editable date field made of subfields.
    DateField,

    /// A symbol picker entry.
    Symbol,
}

impl AccessibleRole {
    /// All roles, in declaration order.
    pub const ALL: [AccessibleRole; 25] = [
        AccessibleRole::Unknown,
        AccessibleRole::Screen,
        AccessibleRole::TextField,
        AccessibleRole::Label,
        AccessibleRole::AppIcon,
        AccessibleRole::Icon,
        AccessibleRole::Date,
        AccessibleRole::List,
        AccessibleRole::Panel,
        AccessibleRole::Gauge,
        AccessibleRole::PushButton,
        AccessibleRole::MenuItem,
        AccessibleRole::CheckBox,
        AccessibleRole::Table,
        AccessibleRole::Bitmap,
        AccessibleRole::Combo,
        AccessibleRole::Hyperlink,
        AccessibleRole::Separator,
        AccessibleRole::TreeField,
        AccessibleRole::Choice,
        AccessibleRole::Dialog,
        AccessibleRole::Menu,
        AccessibleRole::RadioButton,
        AccessibleRole::DateField,
        AccessibleRole::Symbol,
    ];

    /// Short lowercase name, used in log output.
    pub fn as_str(self) -> &'static str {
        match self {
            AccessibleRole::Unknown => "unknown",
            AccessibleRole::Screen => "screen",
            AccessibleRole::TextField => "text_field",
            AccessibleRole::Label => "label",
            AccessibleRole::AppIcon => "app_icon",
            AccessibleRole::Icon => "icon",
            AccessibleRole::Date => "date",
            AccessibleRole::List => "list",
            AccessibleRole::Panel => "panel",
            AccessibleRole::Gauge => "gauge",
            AccessibleRole::PushButton => "push_button",
            AccessibleRole::MenuItem => "menu_item",
            AccessibleRole::CheckBox => "check_box",
            AccessibleRole::Table => "table",
            AccessibleRole::Bitmap => "bitmap",
            AccessibleRole::Combo => "combo",
            AccessibleRole::Hyperlink => "hyperlink",
            AccessibleRole::Separator => "separator",
            AccessibleRole::TreeField => "tree_field",
            AccessibleRole::Choice => "choice",
            AccessibleRole::Dialog => "dialog",
            AccessibleRole::Menu => "menu",
            AccessibleRole::RadioButton => "radio_button",
            AccessibleRole::DateField => "date_field",
            AccessibleRole::Symbol => "symbol",
        }
    }

    /// Whether narration of this role walks into its children.
    ///
    /// Combo boxes and choices only descend while expanded; this reports
    /// the roles that can descend at all.
    pub fn is_container(self) -> bool {
        matches!(
            self,
            AccessibleRole::Screen
                | AccessibleRole::List
                | AccessibleRole::Panel
                | AccessibleRole::Table
                | AccessibleRole::Combo
                | AccessibleRole::TreeField
                | AccessibleRole::Choice
        )
    }
}

impl fmt::Display for AccessibleRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_role_is_unknown() {
        assert_eq!(AccessibleRole::default(), AccessibleRole::Unknown);
    }

    #[test]
    fn test_role_names_are_unique() {
        let mut names: Vec<_> = AccessibleRole::ALL.iter().map(|r| r.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), AccessibleRole::ALL.len());
    }

    #[test]
    fn test_role_deserializes_from_snake_case() {
        let role: AccessibleRole = serde_json::from_str("\"push_button\"").unwrap();
        assert_eq!(role, AccessibleRole::PushButton);
        let role: AccessibleRole = serde_json::from_str("\"tree_field\"").unwrap();
        assert_eq!(role, AccessibleRole::TreeField);
    }

    #[test]
    fn test_containers() {
        assert!(AccessibleRole::Screen.is_container());
        assert!(AccessibleRole::Choice.is_container());
        assert!(!AccessibleRole::CheckBox.is_container());
        assert!(!AccessibleRole::Separator.is_container());
    }
}
