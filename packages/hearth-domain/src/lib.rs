pub mod criteria;
pub mod format;
pub mod intent;
pub mod listing;
