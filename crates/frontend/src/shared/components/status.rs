//! Loading and error placeholders shared by the pages

use crate::shared::icons::icon;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn LoadingPlaceholder(#[prop(optional, into)] text: Option<String>) -> impl IntoView {
    view! {
        <Flex
            gap=FlexGap::Small
            style="align-items: center; padding: var(--spacing-4xl); justify-content: center;"
        >
            <Spinner />
            <span>{text.unwrap_or_else(|| "Loading...".to_string())}</span>
        </Flex>
    }
}

#[component]
pub fn ErrorPanel(
    #[prop(into)] message: String,
    /// Shows a Retry button when set
    #[prop(optional)]
    on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        <div class="warning-box warning-box--error" role="alert">
            <span class="warning-box__icon">{icon("alert")}</span>
            <span class="warning-box__text">{message}</span>
            {on_retry.map(|cb| view! {
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| cb.run(())>
                    "Retry"
                </Button>
            })}
        </div>
    }
}
