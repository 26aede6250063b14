use careboard_core::{DateChange, DateInputState, LongDateFormatter, NaturalPhraseParser};
use gloo::events::EventListener;
use wasm_bindgen::JsCast;
use web_sys::{window, Element, HtmlInputElement};
use yew::prelude::*;

use super::calendar::Calendar;
use crate::services::logging::Logger;

#[derive(Properties, PartialEq)]
pub struct DateInputProps {
    /// Initial text, parsed eagerly on mount ("tomorrow" works as well as
    /// "March 03, 2024").
    #[prop_or_default]
    pub value: Option<String>,
    /// Optional label rendered above the field.
    #[prop_or_default]
    pub label: Option<String>,
    #[prop_or_default]
    pub placeholder: Option<String>,
    /// Whether the field is disabled.
    #[prop_or_default]
    pub disabled: bool,
    /// Fired after every reconciliation, i.e. on every keystroke and every
    /// calendar pick. Hosts wanting debounce or validation layer it on top.
    pub on_change: Callback<DateChange>,
}

/// Free-text date entry with a calendar popover.
///
/// Typing routes through the phrase parser; picking a day routes through the
/// formatter back into the text field. Down-arrow opens the calendar without
/// touching the text.
#[function_component(DateInput)]
pub fn date_input(props: &DateInputProps) -> Html {
    let state = {
        let seed = props.value.clone();
        use_state(move || DateInputState::from_seed(seed.as_deref(), &NaturalPhraseParser::new()))
    };
    let container_ref = use_node_ref();

    let on_input = {
        let state = state.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let mut next = (*state).clone();
            let change = next.text_edited(input.value(), &NaturalPhraseParser::new());
            state.set(next);
            on_change.emit(change);
        })
    };

    let on_keydown = {
        let state = state.clone();
        Callback::from(move |e: KeyboardEvent| match e.key().as_str() {
            "ArrowDown" => {
                e.prevent_default();
                let mut next = (*state).clone();
                next.open_popover();
                state.set(next);
            }
            "Escape" => {
                let mut next = (*state).clone();
                next.close_popover();
                state.set(next);
            }
            _ => {}
        })
    };

    let toggle_calendar = {
        let state = state.clone();
        Callback::from(move |_: MouseEvent| {
            let mut next = (*state).clone();
            let was_open = next.open;
            if was_open {
                next.close_popover();
            } else {
                next.open_popover();
            }
            Logger::debug_with_component(
                "date_input",
                &format!("calendar toggle: {} -> {}", was_open, !was_open),
            );
            state.set(next);
        })
    };

    let on_select = {
        let state = state.clone();
        let on_change = props.on_change.clone();
        Callback::from(move |date| {
            let mut next = (*state).clone();
            let change = next.date_selected(date, &LongDateFormatter);
            state.set(next);
            on_change.emit(change);
        })
    };

    let on_month_change = {
        let state = state.clone();
        Callback::from(move |month| {
            let mut next = (*state).clone();
            next.month_changed(month);
            state.set(next);
        })
    };

    // Click outside the widget dismisses the popover.
    {
        let state = state.clone();
        let container_ref = container_ref.clone();
        use_effect_with(state.open, move |is_open| {
            let listener = is_open.then(|| {
                EventListener::new(&window().unwrap(), "click", move |e| {
                    if let Some(target) = e.target() {
                        if let Ok(element) = target.dyn_into::<Element>() {
                            if let Some(container) = container_ref.cast::<Element>() {
                                if !container.contains(Some(&element)) {
                                    let mut next = (*state).clone();
                                    next.close_popover();
                                    state.set(next);
                                }
                            }
                        }
                    }
                })
            });
            move || drop(listener)
        });
    }

    html! {
        <div class="date-input" ref={container_ref.clone()}>
            {if let Some(label) = &props.label {
                html! { <label class="date-input-label">{label}</label> }
            } else { html! {} }}

            <div class="date-input-field">
                <input
                    type="text"
                    class="date-input-text"
                    value={state.text.clone()}
                    placeholder={props.placeholder.clone().unwrap_or_default()}
                    disabled={props.disabled}
                    oninput={on_input}
                    onkeydown={on_keydown}
                />
                <button
                    type="button"
                    class="calendar-trigger"
                    onclick={toggle_calendar}
                    disabled={props.disabled}
                >
                    {"📅"}
                </button>
            </div>

            {if state.open && !props.disabled {
                html! {
                    <div class="date-input-popover">
                        <Calendar
                            selected={state.date}
                            month={state.viewport_month}
                            on_month_change={on_month_change}
                            on_select={on_select}
                        />
                    </div>
                }
            } else { html! {} }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_props_creation() {
        let props = DateInputProps {
            value: Some("tomorrow".to_string()),
            label: Some("Appointment date".to_string()),
            placeholder: None,
            disabled: false,
            on_change: Callback::noop(),
        };
        assert_eq!(props.value.as_deref(), Some("tomorrow"));
        assert!(!props.disabled);
    }
}
