// src/domain/user/mod.rs
pub mod entity;
pub mod repository;
pub mod value_objects;

pub use entity::DepartmentMember;
pub use repository::DepartmentDirectory;
pub use value_objects::{EmailAddress, UserId};
