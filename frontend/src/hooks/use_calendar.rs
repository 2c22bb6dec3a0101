use chrono::NaiveDate;
use shared::MonthState;
use web_sys::MouseEvent;
use yew::prelude::*;

use crate::services::date_utils::today;
use crate::services::session_store::SessionMonthStore;

pub struct UseCalendarResult {
    /// First day of the displayed month
    pub month: NaiveDate,
    pub actions: UseCalendarActions,
}

#[derive(Clone)]
pub struct UseCalendarActions {
    pub prev_month: Callback<MouseEvent>,
    pub next_month: Callback<MouseEvent>,
    pub reset_today: Callback<MouseEvent>,
}

#[hook]
pub fn use_calendar(store: &SessionMonthStore) -> UseCalendarResult {
    let month_state = {
        let store = store.clone();
        use_state(move || MonthState::restore(&store, today()))
    };

    // Callbacks are rebuilt every render so they never see a stale month
    let go_to_month = {
        let month_state = month_state.clone();
        let store = store.clone();
        Callback::from(move |offset: i32| {
            let mut next = *month_state;
            next.go_to_month(offset, &store);
            month_state.set(next);
        })
    };

    let prev_month = go_to_month.reform(|_: MouseEvent| -1);
    let next_month = go_to_month.reform(|_: MouseEvent| 1);

    let reset_today = {
        let month_state = month_state.clone();
        let store = store.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = *month_state;
            next.reset_to_today(today(), &store);
            month_state.set(next);
        })
    };

    UseCalendarResult {
        month: month_state.current(),
        actions: UseCalendarActions {
            prev_month,
            next_month,
            reset_today,
        },
    }
}
