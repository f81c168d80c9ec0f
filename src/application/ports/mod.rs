// src/application/ports/mod.rs
pub mod archive;
pub mod notification;
pub mod permission;
pub mod security;
pub mod storage;
pub mod time;
