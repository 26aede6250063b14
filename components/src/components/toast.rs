use gloo::timers::callback::Timeout;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ToastLevel {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastLevel {
    fn css_class(self) -> &'static str {
        match self {
            ToastLevel::Info => "toast-info",
            ToastLevel::Success => "toast-success",
            ToastLevel::Warning => "toast-warning",
            ToastLevel::Error => "toast-error",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProps {
    pub message: String,
    #[prop_or(ToastLevel::Info)]
    pub level: ToastLevel,
    /// Auto-dismiss delay. The timer is cancelled if the toast unmounts
    /// first.
    #[prop_or(4000)]
    pub duration_ms: u32,
    pub on_dismiss: Callback<()>,
}

/// Notification banner that dismisses itself after `duration_ms`, or sooner
/// if the user clicks the close control.
#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    {
        let on_dismiss = props.on_dismiss.clone();
        let duration_ms = props.duration_ms;
        use_effect_with((), move |_| {
            let timeout = Timeout::new(duration_ms, move || {
                on_dismiss.emit(());
            });
            move || drop(timeout)
        });
    }

    let on_close = {
        let on_dismiss = props.on_dismiss.clone();
        Callback::from(move |_: MouseEvent| {
            on_dismiss.emit(());
        })
    };

    html! {
        <div class={classes!("toast", props.level.css_class())}>
            <span class="toast-message">{&props.message}</span>
            <button type="button" class="toast-close" onclick={on_close}>
                {"✕"}
            </button>
        </div>
    }
}
