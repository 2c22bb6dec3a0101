//! Month grid construction for the registration calendar.
//!
//! The grid always starts on a Monday and ends on a Sunday. Each cell is
//! matched against reservations by exact day and against slots by weekday.
//! The UI only maps the resulting [`CalendarGrid`] onto markup.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use crate::dates::{first_of_month, grid_bounds};
use crate::locale::Locale;
use crate::models::{
    ActionKind, CalendarCell, CalendarGrid, CalendarWeek, CellState, Entry, RegistrationAction,
    Slot,
};

/// Builds month grids in a fixed display language
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CalendarService {
    locale: Locale,
}

impl CalendarService {
    pub fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Build the grid for the month containing `current_month`.
    ///
    /// The day component of `current_month` is ignored. Empty inputs produce
    /// an undecorated grid. A month whose grid leaves chrono's date range
    /// yields no weeks; [`MonthState`](crate::MonthState) never navigates there.
    pub fn render_month(
        &self,
        current_month: NaiveDate,
        entries: &[Entry],
        slots: &[Slot],
        today: NaiveDate,
    ) -> CalendarGrid {
        let first = first_of_month(current_month);
        let entry_index = EntryIndex::new(entries);
        let slot_index = SlotIndex::new(slots);

        let mut weeks = Vec::with_capacity(6);
        match grid_bounds(first) {
            Some((start, end)) => {
                let mut days = Vec::with_capacity(7);
                for date in start.iter_days().take_while(|date| *date <= end) {
                    days.push(self.build_cell(date, first, today, &entry_index, &slot_index));
                    if days.len() == 7 {
                        // grid_bounds spans whole weeks, so every chunk is complete
                        if let Ok(days) = <[CalendarCell; 7]>::try_from(std::mem::take(&mut days)) {
                            weeks.push(CalendarWeek { days });
                        }
                    }
                }
            }
            None => {
                log::warn!(
                    "{}-{:02} cannot be shown: grid leaves the supported date range",
                    first.year(),
                    first.month()
                );
            }
        }

        log::debug!(
            "rendered {}-{:02}: {} weeks, {} entries, {} slots",
            first.year(),
            first.month(),
            weeks.len(),
            entries.len(),
            slots.len()
        );

        CalendarGrid {
            year: first.year(),
            month: first.month(),
            title: self.locale.month_title(first.year(), first.month()),
            weeks,
        }
    }

    fn build_cell(
        &self,
        date: NaiveDate,
        first: NaiveDate,
        today: NaiveDate,
        entries: &EntryIndex<'_>,
        slots: &SlotIndex<'_>,
    ) -> CalendarCell {
        let entry = entries.find(date);
        let slot = slots.find(date);

        let state = match (entry, slot) {
            (Some(_), _) => CellState::Registered,
            (None, Some(_)) => CellState::Available,
            (None, None) => CellState::Unavailable,
        };

        let action = slot.map(|slot| RegistrationAction {
            kind: if entry.is_some() {
                ActionKind::Deregister
            } else {
                ActionKind::Register
            },
            date,
            schedule_name: slot.name.clone(),
            pod: slot.pod.clone(),
        });

        CalendarCell {
            date,
            in_month: date.year() == first.year() && date.month() == first.month(),
            is_today: date == today,
            state,
            action,
        }
    }
}

/// Day-keyed lookup keeping the first entry per date in input order
struct EntryIndex<'a> {
    by_date: HashMap<NaiveDate, &'a Entry>,
}

impl<'a> EntryIndex<'a> {
    fn new(entries: &'a [Entry]) -> Self {
        let mut by_date = HashMap::with_capacity(entries.len());
        for entry in entries {
            if let Some(date) = entry.date {
                by_date.entry(date).or_insert(entry);
            }
        }
        Self { by_date }
    }

    fn find(&self, date: NaiveDate) -> Option<&'a Entry> {
        self.by_date.get(&date).copied()
    }
}

/// Weekday-keyed lookup keeping the first slot per weekday in input order
struct SlotIndex<'a> {
    by_weekday: [Option<&'a Slot>; 7],
}

impl<'a> SlotIndex<'a> {
    fn new(slots: &'a [Slot]) -> Self {
        let mut by_weekday = [None; 7];
        for slot in slots {
            if let Some(date) = slot.date {
                let index = date.weekday().num_days_from_monday() as usize;
                by_weekday[index].get_or_insert(slot);
            }
        }
        Self { by_weekday }
    }

    fn find(&self, date: NaiveDate) -> Option<&'a Slot> {
        self.by_weekday[date.weekday().num_days_from_monday() as usize]
    }
}
