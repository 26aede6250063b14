use chrono::{Datelike, Days, Local, Months, NaiveDate};
use yew::prelude::*;

/// Controlled calendar picker.
///
/// The parent owns `selected` and `month`; the picker owns rendering and
/// reports navigation through `on_month_change` and picks (or a clear)
/// through `on_select`.
#[derive(Properties, PartialEq)]
pub struct CalendarProps {
    /// Currently selected date, highlighted in the grid.
    pub selected: Option<NaiveDate>,
    /// Month to display; `None` falls back to the current month.
    pub month: Option<NaiveDate>,
    /// Fired when the user navigates to another month.
    pub on_month_change: Callback<NaiveDate>,
    /// Fired with `Some` on a day pick, `None` on clear.
    pub on_select: Callback<Option<NaiveDate>>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalendarDay {
    pub date: NaiveDate,
    pub in_month: bool,
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// Builds the 42-cell (6 week) grid for the month containing `month`,
/// Sunday-first, padded with trailing days of the previous month and
/// leading days of the next.
pub fn month_grid(month: NaiveDate) -> Vec<CalendarDay> {
    let first = first_of_month(month);
    let offset = first.weekday().num_days_from_sunday();
    let start = first
        .checked_sub_days(Days::new(u64::from(offset)))
        .unwrap_or(first);

    (0..42)
        .filter_map(|i| start.checked_add_days(Days::new(i)))
        .map(|date| CalendarDay {
            date,
            in_month: date.month() == first.month() && date.year() == first.year(),
        })
        .collect()
}

#[function_component(Calendar)]
pub fn calendar(props: &CalendarProps) -> Html {
    let shown = first_of_month(props.month.unwrap_or_else(|| Local::now().date_naive()));
    let today = Local::now().date_naive();

    let prev_month = {
        let on_month_change = props.on_month_change.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(prev) = shown.checked_sub_months(Months::new(1)) {
                on_month_change.emit(prev);
            }
        })
    };

    let next_month = {
        let on_month_change = props.on_month_change.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(next) = shown.checked_add_months(Months::new(1)) {
                on_month_change.emit(next);
            }
        })
    };

    let on_clear = {
        let on_select = props.on_select.clone();
        Callback::from(move |_: MouseEvent| {
            on_select.emit(None);
        })
    };

    let days = month_grid(shown);

    html! {
        <div class="calendar">
            <div class="calendar-header">
                <button type="button" class="nav-button" onclick={prev_month}>{"‹"}</button>
                <span class="month-year">{shown.format("%B %Y").to_string()}</span>
                <button type="button" class="nav-button" onclick={next_month}>{"›"}</button>
            </div>

            <div class="calendar-grid">
                <div class="weekday-header">
                    <span>{"Sun"}</span>
                    <span>{"Mon"}</span>
                    <span>{"Tue"}</span>
                    <span>{"Wed"}</span>
                    <span>{"Thu"}</span>
                    <span>{"Fri"}</span>
                    <span>{"Sat"}</span>
                </div>

                <div class="calendar-days">
                    {for days.iter().map(|day| {
                        let on_select = props.on_select.clone();
                        let date = day.date;
                        let is_selected = props.selected == Some(date);
                        let is_today = date == today;

                        html! {
                            <button
                                type="button"
                                class={classes!(
                                    "calendar-day",
                                    day.in_month.then_some("current-month"),
                                    (!day.in_month).then_some("other-month"),
                                    is_selected.then_some("selected"),
                                    is_today.then_some("today")
                                )}
                                onclick={Callback::from(move |_: MouseEvent| {
                                    on_select.emit(Some(date));
                                })}
                            >
                                {date.day()}
                            </button>
                        }
                    })}
                </div>
            </div>

            <div class="calendar-footer">
                <button type="button" class="clear-button" onclick={on_clear}>
                    {"Clear"}
                </button>
            </div>
        </div>
    }
}
