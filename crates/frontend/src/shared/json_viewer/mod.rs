pub mod tree;
pub mod widget;

pub use widget::JsonViewer;
