use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};

use crate::dates::parse_iso_date;
use crate::error::Result;

/// An existing reservation for one calendar day
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Entry {
    /// Reserved day; `None` when the page supplied an unreadable date
    #[serde(default, deserialize_with = "lenient_date")]
    pub date: Option<NaiveDate>,
}

/// A weekly availability template.
///
/// Only the weekday of `date` matters: the slot applies to every grid day
/// falling on that weekday.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Slot {
    /// Reference day whose weekday the slot repeats on
    #[serde(default, deserialize_with = "lenient_date")]
    pub date: Option<NaiveDate>,
    /// Schedule name, passed through to the registration route
    pub name: String,
    /// Resource identifier, passed through to the registration route
    pub pod: String,
}

/// Parse the embedded entries document
pub fn parse_entries(json: &str) -> Result<Vec<Entry>> {
    Ok(serde_json::from_str(json)?)
}

/// Parse the embedded slots document
pub fn parse_slots(json: &str) -> Result<Vec<Slot>> {
    Ok(serde_json::from_str(json)?)
}

/// Accept any ISO date or date-time; anything else becomes `None` so the
/// record simply never matches a grid cell.
fn lenient_date<'de, D>(deserializer: D) -> std::result::Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    let date = match raw {
        Some(serde_json::Value::String(text)) => match parse_iso_date(&text) {
            Ok(date) => Some(date),
            Err(e) => {
                log::debug!("ignoring record date: {}", e);
                None
            }
        },
        Some(serde_json::Value::Null) | None => None,
        Some(other) => {
            log::debug!("ignoring non-string record date: {}", other);
            None
        }
    };
    Ok(date)
}

/// Visual state of a grid cell, highest priority first
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    /// The user already holds a reservation on this day
    Registered,
    /// A slot is offered on this weekday
    Available,
    /// Nothing to show
    Unavailable,
}

/// Which registration route a cell leads to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionKind {
    Register,
    Deregister,
}

/// Navigation target of an actionable cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationAction {
    pub kind: ActionKind,
    pub date: NaiveDate,
    pub schedule_name: String,
    pub pod: String,
}

/// A single day in the grid
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarCell {
    pub date: NaiveDate,
    /// Falls inside the displayed month
    pub in_month: bool,
    pub is_today: bool,
    pub state: CellState,
    /// Present exactly when a slot matches the cell's weekday
    pub action: Option<RegistrationAction>,
}

/// One Monday-to-Sunday row
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarWeek {
    pub days: [CalendarCell; 7],
}

/// A rendered month including leading and trailing context days
#[derive(Debug, Clone, PartialEq)]
pub struct CalendarGrid {
    pub year: i32,
    pub month: u32,
    pub title: String,
    pub weeks: Vec<CalendarWeek>,
}

impl CalendarGrid {
    /// All cells in display order
    pub fn cells(&self) -> impl Iterator<Item = &CalendarCell> {
        self.weeks.iter().flat_map(|week| week.days.iter())
    }

    pub fn cell(&self, date: NaiveDate) -> Option<&CalendarCell> {
        self.cells().find(|cell| cell.date == date)
    }
}
