//! Schema registry DTOs shared by backend handlers and frontend pages.

pub mod details;
pub mod subject;

pub use details::{SchemaDefinition, SchemaDetails, SchemaField};
pub use subject::{ListSubjectsResponse, SubjectSummary};
