//! Schema registry pages: subject list and schema details.

pub mod api;
pub mod store;
pub mod ui;
