use yew::prelude::*;

/// One entry in the sidebar navigation.
#[derive(Debug, Clone, PartialEq)]
pub struct NavItem {
    /// Stable identifier reported through `on_select`.
    pub id: String,
    pub label: String,
    /// Optional leading icon (emoji or glyph).
    pub icon: Option<String>,
}

impl NavItem {
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        NavItem {
            id: id.into(),
            label: label.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }
}

#[derive(Properties, PartialEq)]
pub struct SidebarNavProps {
    pub items: Vec<NavItem>,
    /// Id of the currently active item, if any.
    #[prop_or_default]
    pub active: Option<String>,
    pub on_select: Callback<String>,
}

/// Vertical navigation list for the dashboard shell.
#[function_component(SidebarNav)]
pub fn sidebar_nav(props: &SidebarNavProps) -> Html {
    html! {
        <nav class="sidebar-nav">
            <ul class="sidebar-nav-list">
                {for props.items.iter().map(|item| {
                    let on_select = props.on_select.clone();
                    let id = item.id.clone();
                    let is_active = props.active.as_deref() == Some(item.id.as_str());

                    html! {
                        <li class={classes!(
                            "sidebar-nav-item",
                            is_active.then_some("active")
                        )}>
                            <button
                                type="button"
                                class="sidebar-nav-button"
                                onclick={Callback::from(move |_: MouseEvent| {
                                    on_select.emit(id.clone());
                                })}
                            >
                                {if let Some(icon) = &item.icon {
                                    html! { <span class="sidebar-nav-icon">{icon}</span> }
                                } else { html! {} }}
                                <span class="sidebar-nav-label">{&item.label}</span>
                            </button>
                        </li>
                    }
                })}
            </ul>
        </nav>
    }
}
