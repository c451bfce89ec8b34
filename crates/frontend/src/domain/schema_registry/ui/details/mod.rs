pub mod fields_table;
pub mod model;
pub mod page;
pub mod version_select;
pub mod view_model;

pub use page::SchemaDetailsPage;
