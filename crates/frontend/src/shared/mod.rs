pub mod api_utils;
pub mod clipboard;
pub mod components;
pub mod export;
pub mod icons;
pub mod json_viewer;
pub mod list_utils;
pub mod page_frame;
pub mod page_standard;
