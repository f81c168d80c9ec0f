// src/domain/user/entity.rs
use crate::domain::department::DepartmentId;
use crate::domain::user::value_objects::{EmailAddress, UserId};

/// A user as seen by the notification path: only identity, department, and
/// mailbox matter here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DepartmentMember {
    pub id: UserId,
    pub username: String,
    pub department_id: DepartmentId,
    pub email: Option<EmailAddress>,
}
