//! Domain logic for the registration calendar: month grids, weekly slot
//! matching, registration routes and the persisted month.

pub mod calendar;
pub mod config;
pub mod dates;
pub mod error;
pub mod locale;
pub mod models;
pub mod month_state;
pub mod routes;

pub use calendar::CalendarService;
pub use config::CalendarConfig;
pub use error::{CalendarError, Result};
pub use locale::Locale;
pub use models::{
    parse_entries, parse_slots, ActionKind, CalendarCell, CalendarGrid, CalendarWeek, CellState,
    Entry, RegistrationAction, Slot,
};
pub use month_state::{MemoryMonthStore, MonthState, MonthStore};
