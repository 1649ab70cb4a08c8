//! Stateless helpers for interpreting state changes.

use std::fmt;

use crate::state::StateSet;

/// Whether `flag` went from unset in `old` to set in `new`.
pub fn has_transitioned_to_state(old: StateSet, new: StateSet, flag: StateSet) -> bool {
    !(new & !old & flag).is_empty()
}

/// Whether `flag` went from set in `old` to unset in `new`.
pub fn has_transitioned_from_state(old: StateSet, new: StateSet, flag: StateSet) -> bool {
    !(!new & old & flag).is_empty()
}

/// Describe the navigation orientation of a node.
///
/// The returned text carries a trailing space so it can be prefixed
/// directly onto a role description.
pub fn orientation(states: StateSet) -> &'static str {
    let horizontal = states.contains(StateSet::HORIZONTAL);
    let vertical = states.contains(StateSet::VERTICAL);

    match (horizontal, vertical) {
        (true, true) => "both way navigation ",
        (false, true) => "vertical ",
        (true, false) => "horizontal ",
        (false, false) => "",
    }
}

/// A subfield of an editable date field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateSubfield {
    AmPm,
    DayOfMonth,
    DayOfWeek,
    Hour,
    HourOfDay,
    Minute,
    Month,
    Second,
    Year,
    /// A subfield the host could not classify.
    Unknown,
}

impl DateSubfield {
    /// Spoken description of the subfield.
    pub fn description(self) -> &'static str {
        match self {
            DateSubfield::AmPm => "AM PM field",
            DateSubfield::DayOfMonth => "Day of month field",
            DateSubfield::DayOfWeek => "Day of week field",
            DateSubfield::Hour => "Hour field",
            DateSubfield::HourOfDay => "Hour of day field",
            DateSubfield::Minute => "Minute field",
            DateSubfield::Month => "Month field",
            DateSubfield::Second => "Second field",
            DateSubfield::Year => "Year field",
            DateSubfield::Unknown => "Unknown date subfield",
        }
    }
}

impl fmt::Display for DateSubfield {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}
