use super::model::version_options;
use crate::routes::paths::schema_details_href;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

/// Dropdown over the registered versions; picking one navigates to it
#[component]
pub fn VersionSelect(subject: String, versions: Vec<i32>, current: i32) -> impl IntoView {
    let navigate = use_navigate();
    let options = version_options(&versions);

    let on_change = move |ev: leptos::ev::Event| {
        if let Some(href) = version_change_target(&subject, current, &event_target_value(&ev)) {
            navigate(&href, NavigateOptions::default());
        }
    };

    view! {
        <label class="version-select">
            <span class="version-select__label">"Version"</span>
            <select class="version-select__input" on:change=on_change>
                {options
                    .into_iter()
                    .map(|(value, label)| {
                        view! {
                            <option value=value.to_string() selected=value == current>
                                {label}
                            </option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}

/// Where picking `selected` in the dropdown leads; `None` keeps the page as is
pub fn version_change_target(subject: &str, current: i32, selected: &str) -> Option<String> {
    let version = selected.trim().parse::<i32>().ok()?;
    (version != current).then(|| schema_details_href(subject, version))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_other_version_navigates_with_query() {
        assert_eq!(
            version_change_target("user-events", 2, "3").as_deref(),
            Some("/schema-registry/user-events?version=3")
        );
        assert_eq!(
            version_change_target("team/orders", 2, "1").as_deref(),
            Some("/schema-registry/team%2Forders?version=1")
        );
    }

    #[test]
    fn test_current_version_does_nothing() {
        assert_eq!(version_change_target("user-events", 2, "2"), None);
    }

    #[test]
    fn test_unparseable_value_does_nothing() {
        assert_eq!(version_change_target("user-events", 2, ""), None);
        assert_eq!(version_change_target("user-events", 2, "latest"), None);
    }
}
