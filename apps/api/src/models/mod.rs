pub mod account;
pub mod metric;
pub mod resume;
