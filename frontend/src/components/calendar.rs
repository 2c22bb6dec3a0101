use std::rc::Rc;

use chrono::Datelike;
use shared::{CalendarCell, CalendarConfig, CalendarService, CellState, Entry, Locale, Slot};
use yew::prelude::*;

use crate::hooks::use_calendar::use_calendar;
use crate::services::date_utils::today;
use crate::services::session_store::SessionMonthStore;

#[derive(Properties, PartialEq)]
pub struct CalendarProps {
    pub config: CalendarConfig,
    pub entries: Rc<Vec<Entry>>,
    pub slots: Rc<Vec<Slot>>,
}

#[function_component(Calendar)]
pub fn calendar(props: &CalendarProps) -> Html {
    let store = use_memo(props.config.storage_key.clone(), |key| {
        SessionMonthStore::new(key.clone())
    });
    let calendar = use_calendar(&store);

    let locale = props.config.locale;
    let grid = CalendarService::new(locale).render_month(
        calendar.month,
        &props.entries,
        &props.slots,
        today(),
    );

    html! {
        <div class="calendar">
            <div class="d-flex align-items-center justify-content-between mb-3">
                <h2 id="calendar-title" class="h4 m-0">{grid.title.clone()}</h2>
                <div class="btn-group">
                    <button
                        type="button"
                        class="btn btn-outline-secondary"
                        aria-label={locale.previous_month_label()}
                        onclick={calendar.actions.prev_month.clone()}
                    >
                        {"‹"}
                    </button>
                    <button
                        type="button"
                        class="btn btn-outline-secondary"
                        onclick={calendar.actions.reset_today.clone()}
                    >
                        {locale.today_label()}
                    </button>
                    <button
                        type="button"
                        class="btn btn-outline-secondary"
                        aria-label={locale.next_month_label()}
                        onclick={calendar.actions.next_month.clone()}
                    >
                        {"›"}
                    </button>
                </div>
            </div>

            <table class="table table-borderless">
                <thead>
                    <tr>
                        {for locale.weekday_headers().iter().map(|name| html! {
                            <th scope="col" class="text-center">{*name}</th>
                        })}
                    </tr>
                </thead>
                <tbody id="calendar-body">
                    {for grid.weeks.iter().map(|week| html! {
                        <tr>
                            {for week.days.iter().map(|cell| render_cell(cell, locale))}
                        </tr>
                    })}
                </tbody>
            </table>
        </div>
    }
}

fn render_cell(cell: &CalendarCell, locale: Locale) -> Html {
    let class = Classes::from(cell_classes(cell));
    let icon = if cell.state == CellState::Registered {
        html! {
            <iconify-icon
                noobserver="true"
                icon="line-md:confirm-circle"
                aria-hidden="true"
                class="position-absolute top-0 end-0 m-1"
            ></iconify-icon>
        }
    } else {
        html! {}
    };

    match &cell.action {
        Some(action) => {
            let url = action.url();
            let onclick = Callback::from(move |_: MouseEvent| navigate(&url));
            html! {
                <td {class} role="button" aria-label={action.aria_label(locale)} {onclick}>
                    {cell.date.day()}
                    {icon}
                </td>
            }
        }
        None => html! {
            <td {class}>
                {cell.date.day()}
                {icon}
            </td>
        },
    }
}

/// Bootstrap classes for a cell, matching the registration page stylesheet
pub fn cell_classes(cell: &CalendarCell) -> Vec<&'static str> {
    let mut classes = vec!["text-center", "position-relative"];

    match cell.state {
        CellState::Registered => classes.push("text-bg-info"),
        CellState::Available => classes.push("bg-secondary-subtle"),
        CellState::Unavailable => {}
    }

    if cell.is_today {
        classes.push("text-decoration-underline");
    }

    classes.push(if cell.in_month { "fw-bold" } else { "opacity-25" });
    classes
}

fn navigate(url: &str) {
    let Some(window) = web_sys::window() else {
        log::error!("cannot open {}: no window", url);
        return;
    };

    log::info!("opening {}", url);
    if let Err(e) = window.location().set_href(url) {
        log::error!("failed to open {}: {:?}", url, e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn cell(state: CellState, in_month: bool, is_today: bool) -> CalendarCell {
        CalendarCell {
            date: NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
            in_month,
            is_today,
            state,
            action: None,
        }
    }

    #[test]
    fn test_registered_today_in_month() {
        assert_eq!(
            cell_classes(&cell(CellState::Registered, true, true)),
            vec![
                "text-center",
                "position-relative",
                "text-bg-info",
                "text-decoration-underline",
                "fw-bold",
            ]
        );
    }

    #[test]
    fn test_available_out_of_month() {
        assert_eq!(
            cell_classes(&cell(CellState::Available, false, false)),
            vec!["text-center", "position-relative", "bg-secondary-subtle", "opacity-25"]
        );
    }

    #[test]
    fn test_plain_cell() {
        assert_eq!(
            cell_classes(&cell(CellState::Unavailable, true, false)),
            vec!["text-center", "position-relative", "fw-bold"]
        );
    }
}
