use yew::prelude::*;

use crate::api::models::ValueKind;

#[derive(Properties, PartialEq)]
pub struct ValueCardProps {
    pub title: String,
    pub description: String,
    #[prop_or_default]
    pub icon: Html,
}

#[function_component(ValueCard)]
pub fn value_card(props: &ValueCardProps) -> Html {
    html! {
        <div class="value-card">
            { props.icon.clone() }
            <h3 class="value-title">{ &props.title }</h3>
            <p class="value-description">{ &props.description }</p>
        </div>
    }
}

/// Round colored badge for a guiding principle, empty for unknown kinds.
pub fn value_badge(kind: Option<ValueKind>) -> Html {
    match kind {
        Some(kind) => html! {
            <div class="value-badge" style={format!("background: {};", kind.badge_color())}>
                { kind.icon().render("value-badge-icon") }
            </div>
        },
        None => html! {},
    }
}
