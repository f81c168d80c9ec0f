use crate::domain::department::DepartmentId;
use crate::domain::errors::DomainResult;
use crate::domain::user::entity::DepartmentMember;
use async_trait::async_trait;

#[async_trait]
pub trait DepartmentDirectory: Send + Sync {
    async fn members_of(&self, department_id: DepartmentId) -> DomainResult<Vec<DepartmentMember>>;
}
