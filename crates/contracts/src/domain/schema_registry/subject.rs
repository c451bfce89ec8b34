use serde::{Deserialize, Serialize};

/// Row of the subject list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectSummary {
    pub name: String,
    /// `None` when the registry could not list the subject's versions
    pub latest_version: Option<i32>,
    pub versions_count: usize,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListSubjectsResponse {
    pub subjects: Vec<SubjectSummary>,
}
