pub mod database;
pub mod files;
pub mod notifications;
pub mod repositories;
pub mod security;
pub mod storage;
pub mod time;
