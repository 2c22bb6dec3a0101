//! The month currently on screen and its session-scoped mirror.

use std::cell::RefCell;

use chrono::NaiveDate;

use crate::dates::{add_months, first_of_month, format_iso_date, grid_bounds, parse_iso_date};

/// Session-scoped storage holding the serialized current month.
///
/// Implementations are expected to be infallible from the caller's point of
/// view: write failures are logged, not returned.
pub trait MonthStore {
    /// Stored value, if any
    fn load(&self) -> Option<String>;

    fn save(&self, value: &str);

    fn clear(&self);
}

/// In-memory store used by tests and non-browser hosts
#[derive(Debug, Default)]
pub struct MemoryMonthStore {
    value: RefCell<Option<String>>,
}

impl MemoryMonthStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(value: &str) -> Self {
        Self {
            value: RefCell::new(Some(value.to_string())),
        }
    }
}

impl MonthStore for MemoryMonthStore {
    fn load(&self) -> Option<String> {
        self.value.borrow().clone()
    }

    fn save(&self, value: &str) {
        *self.value.borrow_mut() = Some(value.to_string());
    }

    fn clear(&self) {
        self.value.borrow_mut().take();
    }
}

/// View state: the first day of the displayed month
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthState {
    month: NaiveDate,
}

impl MonthState {
    pub fn new(date: NaiveDate) -> Self {
        Self {
            month: first_of_month(date),
        }
    }

    /// Restore the month from `store`, falling back to `today`.
    ///
    /// A value that does not parse, or names a month whose grid cannot be
    /// shown, is removed from the store.
    pub fn restore(store: &dyn MonthStore, today: NaiveDate) -> Self {
        match store.load() {
            Some(stored) => match parse_iso_date(&stored) {
                Ok(date) if grid_bounds(date).is_some() => {
                    log::debug!("restored calendar month {}", stored);
                    Self::new(date)
                }
                Ok(date) => {
                    log::warn!(
                        "discarding stored calendar month {}: outside supported range",
                        date
                    );
                    store.clear();
                    Self::new(today)
                }
                Err(e) => {
                    log::warn!("discarding stored calendar month: {}", e);
                    store.clear();
                    Self::new(today)
                }
            },
            None => Self::new(today),
        }
    }

    /// First day of the displayed month
    pub fn current(&self) -> NaiveDate {
        self.month
    }

    /// Move by `offset` months and persist the result.
    ///
    /// A target month whose grid would leave the supported date range keeps
    /// the current month.
    pub fn go_to_month(&mut self, offset: i32, store: &dyn MonthStore) {
        let target = add_months(self.month, offset).filter(|month| grid_bounds(*month).is_some());
        match target {
            Some(month) => {
                self.month = month;
                store.save(&format_iso_date(month));
                log::debug!("navigated {:+} months to {}", offset, month);
            }
            None => {
                log::warn!(
                    "cannot move {:+} months from {}: outside supported range",
                    offset,
                    self.month
                );
            }
        }
    }

    /// Forget the stored month and show `today`'s month
    pub fn reset_to_today(&mut self, today: NaiveDate, store: &dyn MonthStore) {
        store.clear();
        self.month = first_of_month(today);
        log::debug!("reset calendar to {}", self.month);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::CalendarService;
    use chrono::{Datelike, Weekday};

    fn ymd(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_restore_without_stored_value_uses_today() {
        let store = MemoryMonthStore::new();
        let state = MonthState::restore(&store, ymd(2026, 10, 14));
        assert_eq!(state.current(), ymd(2026, 10, 1));
    }

    #[test]
    fn test_restore_stored_iso_date() {
        let store = MemoryMonthStore::with_value("2025-03-01");
        let state = MonthState::restore(&store, ymd(2026, 10, 14));
        assert_eq!(state.current(), ymd(2025, 3, 1));
    }

    #[test]
    fn test_restore_naive_timestamp() {
        let store = MemoryMonthStore::with_value("2025-03-17T10:00:00.000");
        let state = MonthState::restore(&store, ymd(2026, 10, 14));
        assert_eq!(state.current(), ymd(2025, 3, 1));
    }

    #[test]
    fn test_corrupt_stored_value_falls_back_to_today() {
        let store = MemoryMonthStore::with_value("Invalid Date");
        let state = MonthState::restore(&store, ymd(2026, 10, 14));
        assert_eq!(state.current(), ymd(2026, 10, 1));
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_go_to_month_persists() {
        let store = MemoryMonthStore::new();
        let mut state = MonthState::new(ymd(2026, 10, 14));

        state.go_to_month(3, &store);
        assert_eq!(state.current(), ymd(2027, 1, 1));
        assert_eq!(store.load().as_deref(), Some("2027-01-01"));

        state.go_to_month(-15, &store);
        assert_eq!(state.current(), ymd(2025, 10, 1));
        assert_eq!(store.load().as_deref(), Some("2025-10-01"));

        // A reload picks up where navigation left off
        assert_eq!(MonthState::restore(&store, ymd(2026, 10, 14)), state);
    }

    #[test]
    fn test_go_to_distant_month() {
        let store = MemoryMonthStore::new();
        let mut state = MonthState::new(ymd(2026, 10, 14));
        state.go_to_month(-12 * 500, &store);
        assert_eq!(state.current(), ymd(1526, 10, 1));
    }

    #[test]
    fn test_out_of_range_offset_keeps_month() {
        let store = MemoryMonthStore::new();
        let mut state = MonthState::new(ymd(2026, 10, 14));
        state.go_to_month(i32::MAX, &store);
        assert_eq!(state.current(), ymd(2026, 10, 1));
        assert_eq!(store.load(), None);
    }

    #[test]
    fn test_round_trip_renders_identically() {
        let service = CalendarService::default();
        let store = MemoryMonthStore::new();
        let today = ymd(2026, 10, 14);

        for start in [ymd(2024, 1, 31), ymd(2024, 9, 1), ymd(2025, 12, 15)] {
            let mut state = MonthState::new(start);
            let before = service.render_month(state.current(), &[], &[], today);

            state.go_to_month(1, &store);
            state.go_to_month(-1, &store);

            let after = service.render_month(state.current(), &[], &[], today);
            assert_eq!(before, after);
        }
    }

    #[test]
    fn test_reset_to_today_clears_store() {
        let store = MemoryMonthStore::with_value("2020-05-01");
        let today = ymd(2026, 10, 14);
        let mut state = MonthState::restore(&store, today);

        state.reset_to_today(today, &store);
        assert_eq!(store.load(), None);
        assert_eq!(state.current(), ymd(2026, 10, 1));

        let grid = CalendarService::default().render_month(state.current(), &[], &[], today);
        assert!(grid.cell(today).unwrap().is_today);
    }

    fn walk_to_limit(state: &mut MonthState, step: i32, store: &dyn MonthStore) {
        let mut step = step;
        while step != 0 {
            let before = *state;
            state.go_to_month(step, store);
            if *state == before {
                step /= 2;
            }
        }
    }

    #[test]
    fn test_navigation_stops_at_last_renderable_months() {
        let service = CalendarService::default();
        let store = MemoryMonthStore::new();
        let today = ymd(2026, 10, 14);

        for step in [12 * 10_000, -12 * 10_000] {
            let mut state = MonthState::new(today);
            walk_to_limit(&mut state, step, &store);

            let edge = state.current();
            assert!(grid_bounds(edge).is_some(), "{edge}");
            let beyond = add_months(edge, step.signum());
            assert!(beyond.and_then(grid_bounds).is_none(), "{edge}");

            let grid = service.render_month(edge, &[], &[], today);
            let dates: Vec<NaiveDate> = grid.cells().map(|cell| cell.date).collect();
            assert!(!dates.is_empty(), "{edge}");
            assert_eq!(dates.len() % 7, 0, "{edge}");
            assert_eq!(dates[0].weekday(), Weekday::Mon, "{edge}");
            assert_eq!(dates[dates.len() - 1].weekday(), Weekday::Sun, "{edge}");
            assert_eq!(grid.cell(edge).map(|cell| cell.in_month), Some(true), "{edge}");
            assert_eq!(store.load(), Some(format_iso_date(edge)));
        }
    }

    #[test]
    fn test_restore_rejects_unrenderable_month() {
        let store = MemoryMonthStore::with_value(&format_iso_date(NaiveDate::MIN));
        let state = MonthState::restore(&store, ymd(2026, 10, 14));
        assert_eq!(state.current(), ymd(2026, 10, 1));
        assert_eq!(store.load(), None);
    }
}
