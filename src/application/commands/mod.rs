pub mod articles;
pub mod files;
