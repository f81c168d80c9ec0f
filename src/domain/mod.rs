pub mod article;
pub mod department;
pub mod errors;
pub mod files;
pub mod user;
