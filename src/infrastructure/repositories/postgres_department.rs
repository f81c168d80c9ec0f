use super::map_sqlx;
use crate::domain::department::DepartmentId;
use crate::domain::errors::{DomainError, DomainResult};
use crate::domain::user::{DepartmentDirectory, DepartmentMember, EmailAddress, UserId};
use async_trait::async_trait;
use sqlx::{FromRow, PgPool};

#[derive(Clone)]
pub struct PostgresDepartmentDirectory {
    pool: PgPool,
}

impl PostgresDepartmentDirectory {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct MemberRow {
    id: i64,
    username: String,
    department_id: i64,
    email: Option<String>,
}

impl TryFrom<MemberRow> for DepartmentMember {
    type Error = DomainError;

    fn try_from(row: MemberRow) -> Result<Self, Self::Error> {
        // A malformed address only costs that member the email.
        let email = row.email.and_then(|raw| EmailAddress::new(raw).ok());
        Ok(DepartmentMember {
            id: UserId::new(row.id)?,
            username: row.username,
            department_id: DepartmentId::new(row.department_id)?,
            email,
        })
    }
}

#[async_trait]
impl DepartmentDirectory for PostgresDepartmentDirectory {
    async fn members_of(&self, department_id: DepartmentId) -> DomainResult<Vec<DepartmentMember>> {
        let rows = sqlx::query_as::<_, MemberRow>(
            "SELECT id, username, department_id, email
             FROM users WHERE department_id = $1 ORDER BY id",
        )
        .bind(i64::from(department_id))
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx)?;

        rows.into_iter().map(DepartmentMember::try_from).collect()
    }
}
