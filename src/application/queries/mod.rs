pub mod articles;
pub mod dashboard;
pub mod files;
