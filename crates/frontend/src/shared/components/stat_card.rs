use crate::shared::icons::icon;
use leptos::prelude::*;

/// Labelled single value, used for the headline numbers of a page
#[component]
pub fn StatCard(
    /// Label displayed above the value
    #[prop(into)]
    label: String,
    #[prop(into)] value: String,
    /// Icon name from the icon() helper
    #[prop(optional, into)]
    icon_name: Option<String>,
) -> impl IntoView {
    view! {
        <div class="stat-card">
            {icon_name.map(|name| view! { <div class="stat-card__icon">{icon(&name)}</div> })}
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{value}</div>
            </div>
        </div>
    }
}
