use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct CardProps {
    /// Heading shown in the card header.
    pub title: String,
    /// Optional secondary line under the title.
    #[prop_or_default]
    pub subtitle: Option<String>,
    #[prop_or_default]
    pub class: Classes,
    #[prop_or_default]
    pub children: Children,
}

/// Declarative panel wrapper used across the dashboard pages.
#[function_component(Card)]
pub fn card(props: &CardProps) -> Html {
    html! {
        <div class={classes!("card", props.class.clone())}>
            <div class="card-header">
                <h3 class="card-title">{&props.title}</h3>
                {if let Some(subtitle) = &props.subtitle {
                    html! { <p class="card-subtitle">{subtitle}</p> }
                } else { html! {} }}
            </div>
            <div class="card-body">
                {for props.children.iter()}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_props_creation() {
        let props = CardProps {
            title: "Upcoming appointments".to_string(),
            subtitle: None,
            class: Classes::new(),
            children: Children::default(),
        };
        assert_eq!(props.title, "Upcoming appointments");
        assert!(props.subtitle.is_none());
    }
}
