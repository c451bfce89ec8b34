pub mod stat_card;
pub mod status;

pub use stat_card::StatCard;
pub use status::{ErrorPanel, LoadingPlaceholder};
