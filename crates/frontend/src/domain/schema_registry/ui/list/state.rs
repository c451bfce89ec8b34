use crate::shared::list_utils::{filter_list, SortState, Searchable, Sortable};
use contracts::domain::schema_registry::SubjectSummary;
use leptos::prelude::*;
use std::cmp::Ordering;

pub const SORT_SUBJECT: &str = "subject";
pub const SORT_LATEST: &str = "latest_version";
pub const SORT_VERSIONS: &str = "versions";

#[derive(Clone, Debug)]
pub struct SubjectListState {
    pub search: String,
    pub sort: SortState,
    pub is_loaded: bool,
}

impl Default for SubjectListState {
    fn default() -> Self {
        Self {
            search: String::new(),
            sort: SortState::by(SORT_SUBJECT),
            is_loaded: false,
        }
    }
}

pub fn create_state() -> RwSignal<SubjectListState> {
    RwSignal::new(SubjectListState::default())
}

impl Searchable for SubjectSummary {
    fn matches_filter(&self, filter: &str) -> bool {
        self.name.to_lowercase().contains(&filter.to_lowercase())
    }

    fn get_field_value(&self, field: &str) -> Option<String> {
        match field {
            SORT_SUBJECT => Some(self.name.clone()),
            SORT_LATEST => self.latest_version.map(|v| v.to_string()),
            SORT_VERSIONS => Some(self.versions_count.to_string()),
            _ => None,
        }
    }
}

impl Sortable for SubjectSummary {
    fn compare_by_field(&self, other: &Self, field: &str) -> Ordering {
        match field {
            SORT_SUBJECT => self.name.to_lowercase().cmp(&other.name.to_lowercase()),
            // subjects without a readable version sort first
            SORT_LATEST => self.latest_version.cmp(&other.latest_version),
            SORT_VERSIONS => self.versions_count.cmp(&other.versions_count),
            _ => Ordering::Equal,
        }
    }
}

/// Rows to display: filtered by the search text, then sorted
pub fn visible_rows(subjects: &[SubjectSummary], state: &SubjectListState) -> Vec<SubjectSummary> {
    let mut rows = filter_list(subjects.to_vec(), &state.search);
    state.sort.apply(&mut rows);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subject(name: &str, latest: Option<i32>, count: usize) -> SubjectSummary {
        SubjectSummary {
            name: name.to_string(),
            latest_version: latest,
            versions_count: count,
        }
    }

    fn subjects() -> Vec<SubjectSummary> {
        vec![
            subject("payments-value", Some(4), 4),
            subject("Orders-value", Some(1), 1),
            subject("user-events", None, 0),
        ]
    }

    fn names(rows: &[SubjectSummary]) -> Vec<&str> {
        rows.iter().map(|s| s.name.as_str()).collect()
    }

    #[test]
    fn test_default_sort_is_case_insensitive_by_name() {
        let rows = visible_rows(&subjects(), &SubjectListState::default());
        assert_eq!(names(&rows), vec!["Orders-value", "payments-value", "user-events"]);
    }

    #[test]
    fn test_search_needs_three_characters() {
        let mut state = SubjectListState::default();
        state.search = "va".to_string();
        assert_eq!(visible_rows(&subjects(), &state).len(), 3);

        state.search = "VALUE".to_string();
        assert_eq!(
            names(&visible_rows(&subjects(), &state)),
            vec!["Orders-value", "payments-value"]
        );
    }

    #[test]
    fn test_sort_by_latest_version_descending() {
        let mut state = SubjectListState::default();
        state.sort = SortState::by(SORT_LATEST);
        state.sort.toggle(SORT_LATEST);
        assert!(!state.sort.ascending);
        assert_eq!(
            names(&visible_rows(&subjects(), &state)),
            vec!["payments-value", "Orders-value", "user-events"]
        );
    }
}
